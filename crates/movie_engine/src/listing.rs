use movie_core::{MovieUrl, ParseError};
use scrape_logging::scrape_info;
use scraper::Html;

use crate::decode::decode_page;
use crate::dom::selector;
use crate::{Fetcher, ScrapeConfig, ScrapeError};

/// Anchors of the ranked chart, one per row, in rank order.
pub const LISTING_ANCHORS: &str = "tbody > tr > td.titleColumn a";

/// Detail URLs in document order, each `href` prefixed with `site_origin`.
pub fn parse_movie_urls(html: &str, site_origin: &str) -> Result<Vec<MovieUrl>, ParseError> {
    let doc = Html::parse_document(html);
    let anchors = selector(LISTING_ANCHORS)?;
    doc.select(&anchors)
        .map(|anchor| {
            anchor
                .value()
                .attr("href")
                .map(|href| format!("{site_origin}{href}"))
                .ok_or_else(|| ParseError::MissingAttribute {
                    selector: LISTING_ANCHORS.to_string(),
                    attribute: "href".to_string(),
                })
        })
        .collect()
}

/// Downloads the listing page and returns its detail URLs.
pub async fn fetch_movie_urls(
    fetcher: &dyn Fetcher,
    config: &ScrapeConfig,
) -> Result<Vec<MovieUrl>, ScrapeError> {
    let url = config.listing_url.as_str();
    let output = fetcher
        .fetch(url)
        .await
        .map_err(|err| ScrapeError::network(url, err))?;
    let html = decode_page(&output);
    let urls =
        parse_movie_urls(&html, &config.site_origin).map_err(|err| ScrapeError::parse(url, err))?;
    scrape_info!("listing {} has {} entries", url, urls.len());
    Ok(urls)
}
