use std::sync::Arc;

use movie_core::{Chunk, MovieRecord, MovieUrl};
use scrape_logging::{scrape_debug, scrape_info};
use tokio::task::JoinSet;

use crate::detail::scrape_movie;
use crate::{Fetcher, ScrapeError};

/// Runs one chain per chunk and concatenates their records in chunk order.
///
/// Chains share nothing but the fetcher. Each one scrapes its URLs strictly in
/// sequence. The first failing chain aborts the rest and no records are returned.
pub async fn run_chains(
    fetcher: Arc<dyn Fetcher>,
    chunks: Vec<Chunk>,
) -> Result<Vec<MovieRecord>, ScrapeError> {
    let mut slots: Vec<Option<Vec<MovieRecord>>> = vec![None; chunks.len()];

    let mut chains = JoinSet::new();
    for (index, chunk) in chunks.into_iter().enumerate() {
        let fetcher = Arc::clone(&fetcher);
        chains.spawn(async move {
            let outcome = run_chain(fetcher.as_ref(), index, &chunk).await;
            (index, outcome)
        });
    }

    // Dropping `chains` on an early return aborts the chains still running.
    while let Some(joined) = chains.join_next().await {
        let (index, outcome) = joined.map_err(|err| ScrapeError::ChainAborted {
            message: err.to_string(),
        })?;
        slots[index] = Some(outcome?);
    }

    Ok(slots.into_iter().flatten().flatten().collect())
}

/// Scrapes `urls` one after another; URL `i + 1` is requested only after URL `i`
/// has been extracted.
pub async fn run_chain(
    fetcher: &dyn Fetcher,
    index: usize,
    urls: &[MovieUrl],
) -> Result<Vec<MovieRecord>, ScrapeError> {
    if urls.is_empty() {
        scrape_debug!("chain {} has nothing to do", index);
        return Ok(Vec::new());
    }

    scrape_debug!("chain {} starting with {} urls", index, urls.len());
    let mut records = Vec::with_capacity(urls.len());
    for url in urls {
        records.push(scrape_movie(fetcher, url).await?);
    }
    scrape_info!("chain {} finished with {} records", index, records.len());
    Ok(records)
}
