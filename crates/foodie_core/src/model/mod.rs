//! Recipe catalog domain model.
//!
//! # Responsibility
//! - Define the recipe record, favorite set and aggregate state.
//! - Normalize form input into valid records.
//!
//! # Invariants
//! - Every recipe is identified by a stable `RecipeId`.
//! - Deletion is a hard removal; there are no tombstones.

pub mod draft;
pub mod favorites;
pub mod recipe;
pub mod seed;
pub mod state;
