//! Aggregate application state.
//!
//! # Responsibility
//! - Hold the ordered recipe list and the favorite set as one value.
//! - Describe partial payloads used by `load` and by the persistence mirror.
//!
//! # Invariants
//! - Fields are read-only outside the crate; new states come from
//!   `store::apply` only.
//! - Value equality is the change-detection signal for persistence.

use crate::model::favorites::FavoriteSet;
use crate::model::recipe::Recipe;
use crate::model::seed::sample_recipes;

/// Immutable snapshot of recipes and favorites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub(crate) recipes: Vec<Recipe>,
    pub(crate) favorites: FavoriteSet,
}

impl AppState {
    pub fn new(recipes: Vec<Recipe>, favorites: FavoriteSet) -> Self {
        Self { recipes, favorites }
    }

    /// First-run state: the sample recipes and no favorites.
    pub fn seeded() -> Self {
        Self::new(sample_recipes(), FavoriteSet::new())
    }

    /// Recipes in iteration order (newest additions first).
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }
}

/// Partial state payload.
///
/// `None` fields are left untouched when merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatePatch {
    pub recipes: Option<Vec<Recipe>>,
    pub favorites: Option<FavoriteSet>,
}

impl StatePatch {
    /// Returns whether the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_none() && self.favorites.is_none()
    }
}
