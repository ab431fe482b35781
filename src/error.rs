use std::path::PathBuf;
use thiserror::Error;

/// Serverless routing error types
///
/// Every variant is fatal to the immediate caller. Nothing in this crate
/// retries or recovers from these.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to read middleware manifest at {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse middleware manifest at {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid absolute URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid middleware matcher '{regexp}': {source}")]
    InvalidMatcher {
        regexp: String,
        #[source]
        source: fancy_regex::Error,
    },

    #[error("Response body is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

impl Error {
    pub fn manifest_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ManifestRead {
            path: path.into(),
            source,
        }
    }

    pub fn manifest_parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ManifestParse {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            source,
        }
    }

    pub fn invalid_matcher(regexp: impl Into<String>, source: fancy_regex::Error) -> Self {
        Self::InvalidMatcher {
            regexp: regexp.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
