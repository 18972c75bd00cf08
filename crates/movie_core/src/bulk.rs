use serde_json::json;

use crate::MovieRecord;

/// Index of the `/`-separated url segment used as document id
/// (`https://host/title/<id>/...`).
pub const BULK_ID_SEGMENT: usize = 4;

/// Document id for `url`, or `None` when the url has too few segments.
pub fn bulk_id(url: &str) -> Option<&str> {
    url.split('/').nth(BULK_ID_SEGMENT)
}

/// The action line preceding a record: `{"index":{"_id":"<id>"}}`.
///
/// A url without an id segment renders `"_id":null`.
pub fn render_index_line(url: &str) -> String {
    json!({ "index": { "_id": bulk_id(url) } }).to_string()
}

/// Newline-delimited bulk body: one action line and one record line per movie.
pub fn render_bulk_document(records: &[MovieRecord]) -> Result<String, serde_json::Error> {
    let mut doc = String::new();
    for record in records {
        doc.push_str(&render_index_line(&record.url));
        doc.push('\n');
        doc.push_str(&serde_json::to_string(record)?);
        doc.push('\n');
    }
    Ok(doc)
}
