//! # Promptdeck Storage Library
//!
//! Durable key-value storage for small user preferences and the background
//! task pool used to persist them without blocking the caller.
//!
//! ## Modules
//!
//! - [`errors`] - Storage error types
//! - [`store`] - The [`KeyValueStore`] trait and the in-memory store
//! - [`file_store`] - JSON file backed store that survives restarts
//! - [`taskpool`] - Task pool for fire-and-forget background work
//! - [`testing`] - Fault-injecting store for tests (feature `test-utils`)

pub mod errors;
pub mod file_store;
pub mod store;
pub mod taskpool;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use errors::StorageError;
pub use file_store::FileStore;
pub use store::{KeyValueStore, MemoryStore};
pub use taskpool::TaskPool;
