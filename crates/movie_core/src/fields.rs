//! Text rules for the fields of a detail page.
//!
//! Every rule is positional: it trusts the page to look the way the chart's
//! detail pages looked when the selectors were written. Only the failures that
//! leave nothing to extract are reported as [`ParseError`].

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::ParseError;

/// Output format for release dates (`2019/06/14`).
pub const RELEASE_DATE_FORMAT: &str = "%Y/%m/%d";

const DIRECTOR_LABEL: &str = "Director:";
const STARS_LABEL: &str = "Stars:";
const DATE_FORMATS: &[&str] = &["%d %B %Y", "%d %B, %Y", "%B %d, %Y", "%B %d %Y", "%Y-%m-%d"];

static TITLE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\(\d+\)").expect("title year pattern"));
static COUNTRY_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\(.+\)").expect("country suffix pattern"));

/// Drops the first ` (1994)` style year token and trims.
pub fn clean_title(raw: &str) -> String {
    TITLE_YEAR.replace(raw, "").trim().to_string()
}

/// Removes the first `Director:` label and the first newline, then trims.
pub fn clean_director(raw: &str) -> String {
    raw.replacen(DIRECTOR_LABEL, "", 1)
        .replacen('\n', "", 1)
        .trim()
        .to_string()
}

/// Names from the stars credit, in page order.
///
/// Only the text before the first `|` is used. The names are split on `,` and
/// deliberately left untrimmed, so every name after the first keeps its
/// leading whitespace.
pub fn split_actors(raw: &str) -> Vec<String> {
    let head = raw.split('|').next().unwrap_or_default();
    head.replacen(STARS_LABEL, "", 1)
        .trim()
        .split(',')
        .map(str::to_string)
        .collect()
}

/// Genre, release date and country taken from a subtext block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtextFields {
    pub genre: Vec<String>,
    pub date: String,
    pub country: String,
}

impl SubtextFields {
    /// Splits `subtext` on `|`; the second-to-last segment is the genre list
    /// and the last one the release date with its country.
    pub fn parse(subtext: &str) -> Result<Self, ParseError> {
        let segments: Vec<&str> = subtext.split('|').collect();
        let [.., genre_segment, release_segment] = segments.as_slice() else {
            return Err(ParseError::MissingSegment {
                expected: 2,
                found: segments.len(),
            });
        };

        let genre = genre_segment
            .split(',')
            .map(|g| g.trim().to_string())
            .collect();
        let date = format_release_date(release_segment)?;
        let country = parse_country(release_segment)?;

        Ok(Self {
            genre,
            date,
            country,
        })
    }
}

/// Formats a release segment such as `14 June 2019 (USA)` as `2019/06/14`.
///
/// The parenthesized suffix is stripped first. Leading words that are not part
/// of a date (`USA, 14 June 2019`) are skipped.
pub fn format_release_date(segment: &str) -> Result<String, ParseError> {
    let stripped = COUNTRY_SUFFIX.replace(segment, "");
    let text = stripped.trim();
    parse_lenient(text)
        .map(|date| date.format(RELEASE_DATE_FORMAT).to_string())
        .ok_or_else(|| ParseError::InvalidDate {
            input: text.to_string(),
        })
}

fn parse_country(segment: &str) -> Result<String, ParseError> {
    let after_paren = segment
        .split('(')
        .nth(1)
        .ok_or_else(|| ParseError::MissingCountry {
            segment: segment.trim().to_string(),
        })?;
    Ok(after_paren.replacen(')', "", 1).trim().to_string())
}

fn parse_lenient(text: &str) -> Option<NaiveDate> {
    let normalized = normalize_months(text);
    let mut rest = normalized.as_str();
    loop {
        if let Some(date) = parse_exact(rest) {
            return Some(date);
        }
        let (word, tail) = rest.split_once(char::is_whitespace)?;
        // Only words that cannot belong to a date are skipped.
        if word.bytes().any(|b| b.is_ascii_digit()) || is_month_name(word) {
            return None;
        }
        rest = tail.trim_start();
    }
}

/// Drops abbreviation dots and rewrites `Sept` as `Sep`.
fn normalize_months(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let bare = word.trim_end_matches('.');
            if bare.eq_ignore_ascii_case("sept") {
                "Sep"
            } else {
                bare
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_month_name(word: &str) -> bool {
    let bare = word.trim_end_matches([',', '.']);
    !bare.is_empty() && NaiveDate::parse_from_str(&format!("1 {bare} 2000"), "%d %B %Y").is_ok()
}

fn parse_exact(text: &str) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }
    // Month and year only: first of the month. Tried first so `March 1972`
    // is never read as day 19 of year 72.
    if let Ok(date) = NaiveDate::parse_from_str(&format!("1 {text}"), "%d %B %Y") {
        return Some(date);
    }
    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
    {
        return Some(date);
    }
    // Bare year: first of January.
    if text.len() == 4 && text.bytes().all(|b| b.is_ascii_digit()) {
        return text
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }
    None
}
