//! Movie engine: fetching, extraction, fan-out and output.
mod config;
mod decode;
mod detail;
mod dom;
mod fetch;
mod listing;
mod persist;
mod pipeline;
mod runner;
mod types;

pub use config::{ConfigError, ScrapeConfig, DEFAULT_CHANNELS, LISTING_URL, OUTPUT_PATH};
pub use decode::{decode_body, DecodedBody};
pub use detail::{extract_movie, scrape_movie};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use listing::{fetch_movie_urls, parse_movie_urls, LISTING_ANCHORS};
pub use persist::{save_bulk_document, write_bulk_document, AtomicFileWriter, PersistError};
pub use pipeline::{run_scrape, ScrapeReport};
pub use runner::{run_chain, run_chains};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput, ScrapeError};
