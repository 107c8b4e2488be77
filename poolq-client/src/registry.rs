//! # Client Registry
//!
//! Purpose: Track every constructed client so the process can tear all of
//! them down with one call at shutdown.
//!
//! ## Design Principles
//! 1. **Explicit Ownership**: The registry is a value the caller holds and
//!    passes around, not a process-wide global.
//! 2. **Non-Owning Entries**: Weak references never keep a dropped client
//!    alive.
//! 3. **Minimal Locking**: The mutex guards only the entry list, never a
//!    client callback.

use std::sync::{Mutex, Weak};

use crate::client::{ClientInner, QueryClient};

/// Process-scoped registry of live clients, in registration order.
#[derive(Default)]
pub struct ClientRegistry {
    clients: Mutex<Vec<Weak<ClientInner>>>,
}

impl ClientRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        ClientRegistry::default()
    }

    /// Constructs a client bound to `address` and registers it.
    ///
    /// No I/O happens here; the first socket is opened by the first query.
    pub fn connect(&self, address: impl Into<String>) -> QueryClient {
        let client = QueryClient::new(address.into());
        let mut clients = self.clients.lock().expect("registry mutex poisoned");
        clients.push(client.downgrade());
        drop(clients);
        client
    }

    /// Number of registered clients still alive.
    pub fn live_count(&self) -> usize {
        let clients = self.clients.lock().expect("registry mutex poisoned");
        clients.iter().filter(|weak| weak.strong_count() > 0).count()
    }

    /// Ends every live client, in registration order.
    ///
    /// Each client's `end` latches, so calling this twice, or mixing it with
    /// per-client `end` calls, still ends every client at most once.
    pub fn end(&self) {
        let entries = {
            let clients = self.clients.lock().expect("registry mutex poisoned");
            clients.clone()
        };
        for weak in entries {
            if let Some(inner) = weak.upgrade() {
                inner.end();
            }
        }
    }
}
