//! # poolq Query Client
//!
//! Purpose: Issue JSON queries to a remote query service over raw TCP, with
//! one request and one response per connection.
//!
//! ## Design Principles
//! 1. **Connection Per Query**: Every call opens, uses, and releases its own
//!    socket; nothing is held across queries.
//! 2. **Single Outcome**: Each query resolves exactly once, as a success or
//!    as one discriminated error kind; nothing is retried.
//! 3. **Errors As Values**: All failures surface through `Result`; no panic
//!    crosses the public boundary.
//! 4. **Explicit Registry**: Bulk teardown goes through a caller-owned
//!    registry, not ambient global state.

mod client;
mod error;
mod registry;

pub use client::QueryClient;
pub use error::{QueryError, QueryResult};
pub use registry::ClientRegistry;
