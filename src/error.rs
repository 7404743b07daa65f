//! Fatal error types for jqurl
//!
//! Anything in here aborts the process with a non-zero exit status. Transient
//! fetch failures live in [`crate::fetch::FetchError`] and never reach this type
//! unless debug mode promotes them.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort the process
#[derive(Debug, Error)]
pub enum Error {
    /// A target URL could not be parsed
    #[error("Malformed URL {url:?}: {source}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The request method is not a valid HTTP method token
    #[error("Invalid request method: {0:?}")]
    InvalidMethod(String),

    /// A configured header name or value is not valid HTTP
    #[error("Invalid header: {0:?}")]
    InvalidHeader(String),

    /// The CA bundle could not be read or parsed
    #[error("Error reading CA cert file {path:?}: {reason}")]
    CaCert { path: PathBuf, reason: String },

    /// The client certificate / key pair could not be read or parsed
    #[error("Error reading client cert keypair cert={cert:?} key={key:?}: {reason}")]
    ClientIdentity {
        cert: PathBuf,
        key: PathBuf,
        reason: String,
    },

    /// The `@file` given as POST data could not be read
    #[error("Unable to open {path:?}: {source}")]
    PostData {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created or written
    #[error("Error creating output file {path:?}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP client could not be constructed
    #[error("HTTP client setup failed: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// A response body was not valid JSON (fatal only in debug mode)
    #[error("Cannot unmarshal response from {url:?}: {reason}")]
    InvalidResponse { url: String, reason: String },

    /// Writing a cache entry failed (fatal only in debug mode)
    #[error("Error writing cache file {path:?}: {source}")]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The query did not compile
    #[error("Error compiling jq query {query:?}: {reason}")]
    QueryCompile { query: String, reason: String },

    /// The query produced an error value while running
    #[error("Error running jq query {query:?}: {reason}")]
    QueryRun { query: String, reason: String },

    /// Switching into a container network namespace failed
    #[error("Error switching to container network space {container:?}: {reason}")]
    Netns { container: String, reason: String },

    /// Any other I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
