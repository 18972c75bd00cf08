use std::sync::Arc;
use std::time::{Duration, Instant};

use movie_core::{url_chunks, MovieRecord};
use scrape_logging::scrape_info;

use crate::listing::fetch_movie_urls;
use crate::runner::run_chains;
use crate::{Fetcher, ScrapeConfig, ScrapeError};

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeReport {
    pub records: Vec<MovieRecord>,
    pub elapsed: Duration,
}

impl ScrapeReport {
    /// Console summary: the item count, then the elapsed wall-clock seconds.
    pub fn summary(&self) -> String {
        format!(
            "{}\ntook {} seconds.",
            self.records.len(),
            self.elapsed.as_secs_f64()
        )
    }
}

/// Fetches the listing, fans the detail pages out over `config.channels`
/// chains and returns every record in listing order.
pub async fn run_scrape(
    config: &ScrapeConfig,
    fetcher: Arc<dyn Fetcher>,
) -> Result<ScrapeReport, ScrapeError> {
    let start = Instant::now();

    let urls = fetch_movie_urls(fetcher.as_ref(), config).await?;
    let chunks = url_chunks(&urls, config.channels);
    scrape_info!(
        "scraping {} urls over {} chains",
        urls.len(),
        config.channels
    );
    let records = run_chains(fetcher, chunks).await?;

    Ok(ScrapeReport {
        records,
        elapsed: start.elapsed(),
    })
}
