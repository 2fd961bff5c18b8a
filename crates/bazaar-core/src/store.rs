//! # Item Store Contract
//!
//! The item collection lives behind this trait. Backends persist the whole
//! collection as one unit; ordering is whatever the last writer stored.
//!
//! Mutations must go through [`ItemStore::update`]: it runs the caller's
//! closure with exclusive access to the collection, so two concurrent
//! creates never overwrite each other's work. A `read` followed by a
//! `write` from the application does not get that guarantee and can lose
//! updates.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::BazaarResult;
use crate::item::Item;

/// A read-modify-write step applied under the store's exclusive access
pub type UpdateFn = Box<dyn FnOnce(Vec<Item>) -> Vec<Item> + Send>;

/// Contract for item collection backends.
///
/// Implementations must provide at least last-writer-wins semantics for
/// `write`, and full serialization of `update` cycles.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Return the full collection, ordered as last written.
    /// Fails only on an underlying I/O error.
    async fn read(&self) -> BazaarResult<Vec<Item>>;

    /// Replace the entire stored collection.
    async fn write(&self, items: Vec<Item>) -> BazaarResult<()>;

    /// Atomically read the collection, apply `apply`, and persist the
    /// result. Returns the collection as persisted. Concurrent updates
    /// serialize; none are lost.
    async fn update(&self, apply: UpdateFn) -> BazaarResult<Vec<Item>>;
}

/// Type alias for a shared store handle (dynamic dispatch)
pub type SharedItemStore = Arc<dyn ItemStore>;
