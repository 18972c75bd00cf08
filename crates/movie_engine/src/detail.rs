//! Detail page extraction.
//!
//! Fields are read from fixed DOM positions; see `movie_core::fields` for the
//! text rules applied to each one.

use movie_core::{
    clean_director, clean_title, split_actors, MovieRecord, ParseError, SubtextFields,
};
use scrape_logging::scrape_debug;
use scraper::Html;

use crate::decode::decode_page;
use crate::dom::{selector, text_of, text_of_all};
use crate::{Fetcher, ScrapeError};

pub const TITLE: &str = "div.title_wrapper h1";
pub const SUMMARY: &str = "div.summary_text";
pub const CREDITS: &str = "div.credit_summary_item";
pub const SUBTEXT: &str = "div.subtext";
pub const POSTER: &str = "div.poster > a > img";

const DIRECTOR_CREDIT: usize = 0;
const STARS_CREDIT: usize = 2;

/// Builds the record for one detail page. `url` is echoed into the record.
pub fn extract_movie(html: &str, url: &str) -> Result<MovieRecord, ParseError> {
    let doc = Html::parse_document(html);

    let title = clean_title(&text_of_all(&doc, &selector(TITLE)?));
    let summary = text_of_all(&doc, &selector(SUMMARY)?).trim().to_string();

    let credits = selector(CREDITS)?;
    let director = clean_director(&text_of(doc.select(&credits).nth(DIRECTOR_CREDIT)));
    let actors = split_actors(&text_of(doc.select(&credits).nth(STARS_CREDIT)));

    let SubtextFields {
        genre,
        date,
        country,
    } = SubtextFields::parse(&text_of_all(&doc, &selector(SUBTEXT)?))?;

    let src = doc
        .select(&selector(POSTER)?)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(str::to_string);

    Ok(MovieRecord {
        title,
        summary,
        director,
        actors,
        genre,
        date,
        country,
        src,
        url: url.to_string(),
    })
}

/// Downloads one detail page and extracts its record.
pub async fn scrape_movie(fetcher: &dyn Fetcher, url: &str) -> Result<MovieRecord, ScrapeError> {
    let output = fetcher
        .fetch(url)
        .await
        .map_err(|err| ScrapeError::network(url, err))?;
    let html = decode_page(&output);
    let record = extract_movie(&html, url).map_err(|err| ScrapeError::parse(url, err))?;
    scrape_debug!("scraped {:?} from {}", record.title, url);
    Ok(record)
}
