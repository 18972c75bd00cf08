use std::fmt;

use movie_core::ParseError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub original_url: String,
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Failure of a scrape run. Any of these aborts the whole run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("fetching {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: FetchError,
    },
    #[error("parsing {url} failed: {source}")]
    Parse {
        url: String,
        #[source]
        source: ParseError,
    },
    #[error("chain aborted: {message}")]
    ChainAborted { message: String },
}

impl ScrapeError {
    pub(crate) fn network(url: &str, source: FetchError) -> Self {
        ScrapeError::Network {
            url: url.to_string(),
            source,
        }
    }

    pub(crate) fn parse(url: &str, source: ParseError) -> Self {
        ScrapeError::Parse {
            url: url.to_string(),
            source,
        }
    }
}
