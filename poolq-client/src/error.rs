//! Error taxonomy for the query client.
//!
//! Every failure class a query can produce, delivered through the same
//! `Result` channel as success. No kind is retried; each is terminal for
//! its own call.

use thiserror::Error;

/// Result type for the query client.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors surfaced by [`QueryClient::query`](crate::QueryClient::query).
#[derive(Debug, Error)]
pub enum QueryError {
    /// The TCP connection could not be established. No write was attempted.
    #[error("could not connect to {address}: {source}")]
    Connect {
        /// The full address the client is bound to, as given by the caller.
        address: String,
        source: std::io::Error,
    },
    /// The request could not be written to the socket.
    #[error("could not send query: {0}")]
    Write(#[source] std::io::Error),
    /// The transport failed, or closed, before a response arrived.
    #[error("could not receive data: {0}")]
    Receive(#[source] std::io::Error),
    /// The response was not a well-formed JSON document.
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
