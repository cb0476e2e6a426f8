//! Error taxonomy for the dictionary updater.
//!
//! Everything the update chain can fail with is collected here so the
//! orchestrator can fold any step's failure into a per-service record.

use thiserror::Error;

/// Convenience result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type covering configuration, transport, and lookup failures.
#[derive(Debug, Error)]
pub enum Error {
    /// Fatal configuration problem, raised before any request is made.
    #[error("configuration error: {0}")]
    Config(String),

    /// The API answered with a non-success status code.
    #[error("{context}: HTTP {status}: {body}")]
    Status {
        context: String,
        status: u16,
        body: String,
    },

    /// No entry in the service's version list is flagged active.
    #[error("no active version found for service {0}")]
    NoActiveVersion(String),

    /// The named dictionary is missing from the active version.
    #[error("{0} dictionary not found")]
    DictionaryNotFound(String),

    /// The item key is missing from the dictionary's item list.
    #[error("'{item}' item not found in '{dictionary}' dictionary")]
    ItemNotFound { item: String, dictionary: String },

    /// Connection-level failure: DNS, TLS, refused connection, timeout.
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be decoded as the expected JSON shape.
    #[error("failed to parse response: {0}")]
    Decode(String),

    /// The service-ID input file could not be read.
    #[error("failed to read input file: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Stable tag for structured log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            Error::Config(_) => "configuration_error",
            Error::Status { .. } => "http_status_error",
            Error::NoActiveVersion(_) => "no_active_version",
            Error::DictionaryNotFound(_) => "dictionary_not_found",
            Error::ItemNotFound { .. } => "item_not_found",
            Error::Network(_) => "network_error",
            Error::Decode(_) => "decode_error",
            Error::Io(_) => "io_error",
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}
