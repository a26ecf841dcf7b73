//! Finder error types.

use thiserror::Error;

/// Errors a finder can report for a single lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinderError {
    /// The source has nothing to offer for the destination.
    #[error("{0}")]
    Unavailable(String),

    /// The request to a remote source did not complete.
    #[error("request failed: {0}")]
    Transport(String),

    /// A remote source answered with a non-success status.
    #[error("upstream returned status {status}")]
    Status { status: u16 },

    /// A remote source answered with something other than a deal list.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The task running the lookup terminated before producing a result.
    #[error("lookup aborted: {0}")]
    Aborted(String),
}

/// Convenience type alias for finder results.
pub type Result<T> = std::result::Result<T, FinderError>;
