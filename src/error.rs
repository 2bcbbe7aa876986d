//! Error types for tjpb-dl
//!
//! Every operation in this crate fails by returning one of the variants
//! below to its direct caller. There is no retry layer and no local
//! recovery: a fetch, selection or download failure aborts the operation
//! in progress and leaves no cross-call state behind.

use thiserror::Error;

/// Result type alias for tjpb-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for tjpb-dl
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (e.g. the HTTP client could not be built)
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable description of the configuration issue
        message: String,
    },

    /// Failed to retrieve the listing page (transport failure, non-2xx
    /// status, or a body that could not be read as text)
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        /// The listing page URL that was requested
        url: String,
        /// The underlying HTTP client error
        #[source]
        source: reqwest::Error,
    },

    /// No payroll link on the listing page matches the requested period
    #[error("couldn't find any link for {month:02}-{year:04}")]
    LinksNotFound {
        /// The requested month (1-12)
        month: u32,
        /// The requested year
        year: i32,
    },

    /// Failed to stream a PDF body (transport failure or non-2xx status)
    #[error("failed to download {url}: {source}")]
    Download {
        /// The file URL that was requested
        url: String,
        /// The underlying HTTP client error
        #[source]
        source: reqwest::Error,
    },

    /// I/O error while writing or cleaning up an output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
