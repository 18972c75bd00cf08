mod common;

use common::{broken_detail_page, detail_page, init_logging, listing_page};
use movie_core::{MovieRecord, ParseError};
use movie_engine::{extract_movie, parse_movie_urls};
use pretty_assertions::assert_eq;

const URL: &str = "https://www.imdb.com/title/tt0111161/";

#[test]
fn listing_yields_title_column_links_in_rank_order() {
    init_logging();
    let html = listing_page(&["/title/tt0111161/", "/title/tt0068646/"]);
    let urls = parse_movie_urls(&html, "https://www.imdb.com").unwrap();
    assert_eq!(
        urls,
        vec![
            "https://www.imdb.com/title/tt0111161/".to_string(),
            "https://www.imdb.com/title/tt0068646/".to_string(),
        ]
    );
}

#[test]
fn listing_without_rows_is_empty() {
    init_logging();
    let urls = parse_movie_urls("<html><body><p>nothing</p></body></html>", "https://x").unwrap();
    assert!(urls.is_empty());
}

#[test]
fn listing_anchor_without_href_is_an_error() {
    init_logging();
    let html = r#"<table><tbody><tr><td class="titleColumn"><a>No link</a></td></tr></tbody></table>"#;
    let err = parse_movie_urls(html, "https://x").unwrap_err();
    assert_eq!(
        err,
        ParseError::MissingAttribute {
            selector: "tbody > tr > td.titleColumn a".to_string(),
            attribute: "href".to_string(),
        }
    );
}

#[test]
fn detail_page_fields_are_extracted() {
    init_logging();
    let record = extract_movie(&detail_page("The Shawshank Redemption"), URL).unwrap();
    assert_eq!(
        record,
        MovieRecord {
            title: "The Shawshank Redemption".to_string(),
            summary: "Two imprisoned men bond over a number of years.".to_string(),
            director: "Frank Darabont".to_string(),
            actors: vec![
                "Tim Robbins".to_string(),
                " Morgan Freeman".to_string(),
                " Bob Gunton".to_string(),
            ],
            genre: vec!["Drama".to_string(), "Crime".to_string()],
            date: "1994/10/14".to_string(),
            country: "USA".to_string(),
            src: Some("https://img.example.com/The Shawshank Redemption.jpg".to_string()),
            url: URL.to_string(),
        }
    );
}

#[test]
fn missing_poster_leaves_src_empty() {
    init_logging();
    let html = detail_page("Se7en").replace(r#"<div class="poster">"#, r#"<div class="still">"#);
    let record = extract_movie(&html, URL).unwrap();
    assert_eq!(record.src, None);
}

#[test]
fn missing_credits_produce_empty_text() {
    init_logging();
    let html = r#"<html><body>
<div class="title_wrapper"><h1>Alone (2001)</h1></div>
<div class="subtext">Drama | 1 May 2001 (France)</div>
</body></html>"#;
    let record = extract_movie(html, URL).unwrap();
    assert_eq!(record.title, "Alone");
    assert_eq!(record.summary, "");
    assert_eq!(record.director, "");
    assert_eq!(record.actors, vec![String::new()]);
    assert_eq!(record.date, "2001/05/01");
    assert_eq!(record.country, "France");
}

#[test]
fn missing_subtext_is_an_error() {
    init_logging();
    let err = extract_movie(&broken_detail_page(), URL).unwrap_err();
    assert_eq!(
        err,
        ParseError::MissingSegment {
            expected: 2,
            found: 1
        }
    );
}
