use std::sync::Arc;

use log::LevelFilter;
use movie_engine::{run_scrape, save_bulk_document, ReqwestFetcher, ScrapeConfig};
use scrape_logging::{scrape_error, LogDestination};

fn main() -> anyhow::Result<()> {
    if !scrape_logging::initialize(LogDestination::default(), LevelFilter::Info) {
        eprintln!("Warning: logging is disabled");
    }

    let config = ScrapeConfig::default();
    let fetcher = Arc::new(ReqwestFetcher::new(config.fetch.clone())?);

    // All chains interleave on this one thread.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let report = runtime
        .block_on(run_scrape(&config, fetcher))
        .inspect_err(|err| scrape_error!("scrape aborted: {}", err))?;

    println!("{}", report.summary());
    save_bulk_document(&config.output_path, &report.records);
    Ok(())
}
