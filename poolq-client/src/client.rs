//! # Query Client
//!
//! Purpose: Expose a compact API for issuing one-shot JSON queries to a
//! remote query server, one fresh TCP connection per call.
//!
//! ## Design Principles
//! 1. **Lazy Connection**: Construction performs no I/O; the first socket is
//!    opened by the first query.
//! 2. **Strict Step Order**: Per call: parse address, connect, write one
//!    document, await one data or error event, close, decode.
//! 3. **Guaranteed Release**: The socket is released on every exit path,
//!    success and error alike.
//! 4. **Inert Lifecycle Hooks**: `done` and `end` hold no resources today;
//!    they keep the surface stable for a future pooled-resource layer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

use poolq_common::{parse_endpoint, QueryRequest};

use crate::error::{QueryError, QueryResult};

/// Shared client state; the registry holds it weakly for bulk teardown.
pub(crate) struct ClientInner {
    address: String,
    ended: AtomicBool,
}

impl ClientInner {
    /// Latches the ended flag. Returns true only for the first call.
    pub(crate) fn end(&self) -> bool {
        !self.ended.swap(true, Ordering::SeqCst)
    }
}

/// Handle bound to one address, through which queries are issued.
///
/// Cloning yields another handle to the same logical client. Queries never
/// share a socket: concurrent calls on one client each own an independent
/// connection and resolve independently.
///
/// Constructed via [`ClientRegistry::connect`](crate::ClientRegistry::connect)
/// so every client is reachable for bulk shutdown.
#[derive(Clone)]
pub struct QueryClient {
    inner: Arc<ClientInner>,
}

impl QueryClient {
    pub(crate) fn new(address: String) -> Self {
        QueryClient {
            inner: Arc::new(ClientInner {
                address,
                ended: AtomicBool::new(false),
            }),
        }
    }

    pub(crate) fn downgrade(&self) -> Weak<ClientInner> {
        Arc::downgrade(&self.inner)
    }

    /// The address this client is bound to.
    pub fn address(&self) -> &str {
        &self.inner.address
    }

    /// Issues a query without parameters; the wire document carries
    /// `"params": null`.
    pub async fn query(&self, text: &str) -> QueryResult<serde_json::Value> {
        self.run_query(QueryRequest::new(text)).await
    }

    /// Issues a query with positional parameters.
    pub async fn query_with_params(
        &self,
        text: &str,
        params: Vec<serde_json::Value>,
    ) -> QueryResult<serde_json::Value> {
        self.run_query(QueryRequest::with_params(text, params)).await
    }

    async fn run_query(&self, request: QueryRequest) -> QueryResult<serde_json::Value> {
        let endpoint = parse_endpoint(&self.inner.address);
        let mut stream = TcpStream::connect(endpoint.to_authority())
            .await
            .map_err(|source| QueryError::Connect {
                address: self.inner.address.clone(),
                source,
            })?;
        // Payloads are single small documents; do not batch them.
        let _ = stream.set_nodelay(true);
        debug!(host = %endpoint.host, port = %endpoint.port, "connected");

        let payload = request.encode()?;
        stream.write_all(&payload).await.map_err(QueryError::Write)?;

        // Exactly one data event decides the outcome. The response is assumed
        // to arrive whole in a single read; multi-chunk responses are not
        // reassembled.
        let mut buffer = BytesMut::with_capacity(8 * 1024);
        let bytes = stream
            .read_buf(&mut buffer)
            .await
            .map_err(QueryError::Receive)?;
        if bytes == 0 {
            return Err(QueryError::Receive(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "connection closed before a response arrived",
            )));
        }
        debug!(bytes, "response received");

        // Close before decoding, so a malformed document still releases the
        // socket promptly. Error paths release it on drop.
        let _ = stream.shutdown().await;
        drop(stream);

        let response = serde_json::from_slice(&buffer)?;
        Ok(response)
    }

    /// Completion hook, currently inert. Kept for API symmetry with a
    /// pooled-resource model where completing a query returns a connection.
    pub fn done(&self) {}

    /// Teardown hook. No connection is held across queries, so there is
    /// nothing to release; the call latches an ended flag and returns
    /// whether this was the first `end` on this client.
    pub fn end(&self) -> bool {
        self.inner.end()
    }

    /// Whether `end` has been called on this client, directly or through
    /// the registry.
    pub fn is_ended(&self) -> bool {
        self.inner.ended.load(Ordering::SeqCst)
    }
}
