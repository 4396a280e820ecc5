//! Failure model shared by transports, parsers and repositories.
//!
//! Every public operation returns [`CatalogResult`]. Callers branch on the
//! variant to tell transport problems apart from upstream page-shape drift,
//! malformed payloads and plain missing content. No operation substitutes a
//! default value for a failure.

use thiserror::Error;

use crate::infrastructure::parsing::MarkupError;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// Network-level failure while executing a request.
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code.
    #[error("request to {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    /// Transport succeeded but the response carried no payload.
    #[error("empty response body from {url}")]
    EmptyBody { url: String },

    /// Expected markup structure is absent; the upstream page shape changed.
    #[error(transparent)]
    Markup(#[from] MarkupError),

    /// One or more listing entries were individually malformed. Carries every
    /// field error found in the document, not only the first.
    #[error("listing contained {} malformed entries", .errors.len())]
    MalformedListing { errors: Vec<MarkupError> },

    /// A JSON payload did not match the expected schema.
    #[error("failed to decode JSON payload")]
    Decode(#[from] serde_json::Error),

    /// The result set is well formed but lacks the requested episode.
    #[error("no episode found for node id '{node_id}'")]
    NoEpisodeFound { node_id: String },

    /// Client-side configuration is unusable (bad header value, zero rate).
    #[error("invalid configuration: {message}")]
    Configuration { message: String },
}

impl CatalogError {
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    pub fn empty_body(url: impl Into<String>) -> Self {
        Self::EmptyBody { url: url.into() }
    }

    pub fn no_episode_found(node_id: impl Into<String>) -> Self {
        Self::NoEpisodeFound {
            node_id: node_id.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
