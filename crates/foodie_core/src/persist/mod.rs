//! Durable mirror of store state on a key-value backend.
//!
//! # Responsibility
//! - Define the string-slot backend contract and its implementations.
//! - Keep backend slots in sync with in-memory state, best-effort.
//!
//! # Invariants
//! - Persistence problems never surface as errors to store callers.

pub mod kv;
pub mod mirror;
pub mod sqlite_kv;

pub use kv::{KeyValueStore, KvError, KvResult, MemoryKeyValueStore};
pub use mirror::{PersistenceMirror, FAVORITES_KEY, RECIPES_KEY};
pub use sqlite_kv::SqliteKeyValueStore;
