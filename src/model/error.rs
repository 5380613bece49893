//! Error types for the search core.
//!
//! Each stage of a search owns its own error enum so callers can tell a local
//! validation problem apart from an undecodable payload or a failed transfer.

use thiserror::Error;

/// Returned by the query builder before anything touches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The query text was empty or only whitespace.
    #[error("search text is empty")]
    InvalidQuery,
}

/// Returned by the result parser when the payload cannot be decoded at all.
///
/// Individual bad records never produce this; they are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

/// Outcome of a fetch that did not produce a body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The owner cancelled the fetch before its result was observed.
    #[error("fetch cancelled")]
    Cancelled,

    /// The server answered with a non-success status.
    #[error("server responded with HTTP {0}")]
    Status(u16),

    /// Connection, TLS, timeout or body read failure.
    #[error("transport error: {0}")]
    Transport(String),
}

impl FetchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }
}
