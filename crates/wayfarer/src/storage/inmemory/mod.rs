//! In-memory record store for development and testing.
//!
//! Records live in a map wrapped in `Arc<RwLock<_>>` and are lost when the
//! process exits.

mod store;

pub use store::InMemoryStore;
