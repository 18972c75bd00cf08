//! Movie core: pure domain types and text rules, no IO.
mod bulk;
mod error;
mod fields;
mod partition;
mod record;

pub use bulk::{bulk_id, render_bulk_document, render_index_line, BULK_ID_SEGMENT};
pub use error::ParseError;
pub use fields::{
    clean_director, clean_title, format_release_date, split_actors, SubtextFields,
    RELEASE_DATE_FORMAT,
};
pub use partition::url_chunks;
pub use record::{Chunk, MovieRecord, MovieUrl};
