//! Error type shared by the fetch, transform, and load stages.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a pipeline run.
///
/// A non-200 response is not an error: the fetcher reports it and returns no
/// records. Everything here propagates to the caller unrecovered.
#[derive(Debug, Error)]
pub enum EtlError {
    /// The request never produced a response (DNS, refused connection, TLS, ...).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body of a successful response could not be read or parsed as JSON.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was JSON but not a top-level array of country objects.
    #[error("unexpected response shape from {url}: expected a JSON array, got {found}")]
    UnexpectedShape { url: String, found: &'static str },

    /// Creating the output directory or file failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EtlError>;
