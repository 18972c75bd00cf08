use serde::{Deserialize, Serialize};

/// Absolute URL of one detail page.
pub type MovieUrl = String;

/// Contiguous run of detail URLs handled by one chain.
pub type Chunk = Vec<MovieUrl>;

/// Fields scraped from one detail page.
///
/// Field order is the serialization order of the bulk record line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub summary: String,
    pub director: String,
    pub actors: Vec<String>,
    pub genre: Vec<String>,
    /// Release date as `YYYY/MM/DD`.
    pub date: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    pub url: MovieUrl,
}
