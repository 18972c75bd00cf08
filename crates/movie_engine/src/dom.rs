use movie_core::ParseError;
use scraper::{ElementRef, Html, Selector};

pub(crate) fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|_| ParseError::InvalidSelector {
        selector: css.to_string(),
    })
}

/// Concatenated text of every match, empty when nothing matches.
pub(crate) fn text_of_all(doc: &Html, sel: &Selector) -> String {
    doc.select(sel).flat_map(|el| el.text()).collect()
}

pub(crate) fn text_of(element: Option<ElementRef<'_>>) -> String {
    element
        .map(|el| el.text().collect())
        .unwrap_or_default()
}
