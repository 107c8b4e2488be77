//! # Wire Protocol
//!
//! Purpose: Define the single JSON document exchanged with a query server.
//! Framing is implicit in the connection lifetime: each connection carries
//! exactly one request and one response.
//!
//! ## Design Principles
//! 1. **One Document Per Connection**: No length prefix and no delimiter.
//! 2. **Opaque Payload**: Query text and params are not validated, sanitized,
//!    or type-checked; the server owns their meaning.
//! 3. **Pinned Field Order**: Struct field order fixes the serialized shape
//!    `{"query": ..., "params": ...}` on the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request document sent to the server.
///
/// Serializes as `{"query": "<text>", "params": [...] | null}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Query text, handed to the server as-is.
    pub query: String,
    /// Positional parameters; serialized as `null` when absent.
    pub params: Option<Vec<Value>>,
}

impl QueryRequest {
    /// Builds a request without parameters.
    pub fn new(query: impl Into<String>) -> Self {
        QueryRequest {
            query: query.into(),
            params: None,
        }
    }

    /// Builds a request with positional parameters.
    pub fn with_params(query: impl Into<String>, params: Vec<Value>) -> Self {
        QueryRequest {
            query: query.into(),
            params: Some(params),
        }
    }

    /// Serializes the request into the bytes written to the socket.
    pub fn encode(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_without_params() {
        let request = QueryRequest::new("select current_user");
        let bytes = request.encode().unwrap();
        assert_eq!(bytes, br#"{"query":"select current_user","params":null}"#);
    }

    #[test]
    fn test_encode_with_params_preserves_order() {
        let request = QueryRequest::with_params(
            "select $1, $2",
            vec![json!(42), json!("two")],
        );
        let bytes = request.encode().unwrap();
        assert_eq!(bytes, br#"{"query":"select $1, $2","params":[42,"two"]}"#);
    }

    #[test]
    fn test_decode_request() {
        let request: QueryRequest =
            serde_json::from_str(r#"{"query":"select 1","params":null}"#).unwrap();
        assert_eq!(request, QueryRequest::new("select 1"));
    }
}
