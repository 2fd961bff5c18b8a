//! # Bazaar Store
//!
//! Backends for the [`ItemStore`](bazaar_core::ItemStore) contract:
//!
//! - [`JsonFileStore`]: the production backend, a single JSON file on disk
//! - [`MemoryStore`]: an in-process backend for tests
//!
//! Both backends serialize access internally, so the atomic `update`
//! guarantee holds without callers coordinating.

pub mod json;
pub mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;
