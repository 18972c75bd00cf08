use thiserror::Error;

/// Structural mismatch between a page and the positions the extractor expects.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid css selector `{selector}`")]
    InvalidSelector { selector: String },
    #[error("element `{selector}` has no `{attribute}` attribute")]
    MissingAttribute { selector: String, attribute: String },
    #[error("subtext has {found} segment(s), expected at least {expected}")]
    MissingSegment { expected: usize, found: usize },
    #[error("no parenthesized country in `{segment}`")]
    MissingCountry { segment: String },
    #[error("unrecognized release date `{input}`")]
    InvalidDate { input: String },
}
