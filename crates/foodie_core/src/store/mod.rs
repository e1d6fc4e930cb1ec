//! In-memory recipe store.
//!
//! # Responsibility
//! - Own the closed set of state transitions (`reducer`).
//! - Provide read-side filters used by catalog screens (`query`).
//!
//! # Invariants
//! - Every transition returns a new `AppState` value; nothing mutates in place.

pub mod query;
pub mod reducer;

pub use query::{select_recipes, CatalogQuery};
pub use reducer::{apply, Intent};
