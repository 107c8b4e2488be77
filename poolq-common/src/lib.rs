// poolq-common - Shared address and wire-format definitions for poolq
//
// This crate defines connection-string parsing and the JSON document
// exchanged with a query server (one request, one response per connection)

pub mod address;
pub mod protocol;

// Re-export for convenience
pub use address::*;
pub use protocol::*;
