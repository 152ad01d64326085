use thiserror::Error;

/// Error types for playlist enrichment operations.
///
/// This enum covers all possible errors that can occur while printing or
/// autofilling a playlist: file I/O, malformed documents, catalog/network
/// failures, and invalid operator input.
#[derive(Error, Debug)]
pub enum TapedeckError {
    /// HTTP/network related errors.
    ///
    /// This includes connection failures, DNS errors, non-success status
    /// codes, and other low-level networking issues from the catalog
    /// service or a cover-art host.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to decode a JSON document.
    ///
    /// Covers both a malformed playlist file and an unexpected catalog
    /// response body.
    #[error("Failed to decode JSON: {0}")]
    Decode(String),

    /// The catalog returned no data for a lookup.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid operator input.
    ///
    /// Returned when the interactive menu runs out of selection attempts
    /// or a scripted prompt has no response left.
    #[error("Invalid input: {0}")]
    Input(String),

    /// Rate limiting from the catalog service.
    ///
    /// The catalog enforces a request quota. This error is surfaced to the
    /// operator as-is; no automatic retry is attempted.
    #[error("Rate limited, retry after {retry_after} seconds")]
    RateLimit {
        /// Number of seconds to wait before retrying
        retry_after: u64,
    },

    /// File system I/O errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
