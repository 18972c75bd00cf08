use std::num::NonZeroUsize;
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

use crate::FetchSettings;

/// Ranked chart the run starts from.
pub const LISTING_URL: &str = "https://www.imdb.com/chart/top/";
/// Number of concurrent chains.
pub const DEFAULT_CHANNELS: NonZeroUsize = match NonZeroUsize::new(50) {
    Some(n) => n,
    None => unreachable!(),
};
/// Bulk document destination, replaced on every run.
pub const OUTPUT_PATH: &str = "./movies.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid listing url `{url}`: {message}")]
    InvalidListingUrl { url: String, message: String },
}

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub listing_url: String,
    /// Prefix for the listing's relative `href`s, e.g. `https://www.imdb.com`.
    pub site_origin: String,
    pub channels: NonZeroUsize,
    pub output_path: PathBuf,
    pub fetch: FetchSettings,
}

impl ScrapeConfig {
    /// Config for `listing_url`, with the site origin taken from it.
    pub fn for_listing(listing_url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(listing_url).map_err(|err| ConfigError::InvalidListingUrl {
            url: listing_url.to_string(),
            message: err.to_string(),
        })?;
        let origin = parsed.origin();
        if !origin.is_tuple() {
            return Err(ConfigError::InvalidListingUrl {
                url: listing_url.to_string(),
                message: "url has no host origin".to_string(),
            });
        }

        Ok(Self {
            listing_url: listing_url.to_string(),
            site_origin: origin.ascii_serialization(),
            channels: DEFAULT_CHANNELS,
            output_path: PathBuf::from(OUTPUT_PATH),
            fetch: FetchSettings::default(),
        })
    }

    pub fn with_channels(mut self, channels: NonZeroUsize) -> Self {
        self.channels = channels;
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            listing_url: LISTING_URL.to_string(),
            site_origin: "https://www.imdb.com".to_string(),
            channels: DEFAULT_CHANNELS,
            output_path: PathBuf::from(OUTPUT_PATH),
            fetch: FetchSettings::default(),
        }
    }
}
