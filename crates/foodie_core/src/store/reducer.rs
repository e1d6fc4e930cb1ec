//! Recipe store reducer.
//!
//! # Responsibility
//! - Apply the five state intents as a pure function over [`AppState`].
//!
//! # Invariants
//! - `apply` performs no I/O and never panics.
//! - Unknown ids on update/delete yield a value-equal state.
//! - Delete removes the recipe and its favorite in the same transition.
//! - The reducer does not check ownership; sample guards live in the service.

use crate::model::recipe::{Recipe, RecipeId};
use crate::model::state::{AppState, StatePatch};

/// Named request to transition store state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Shallow-merge present fields over current state.
    Load(StatePatch),
    /// Prepend a fully built recipe.
    Add(Recipe),
    /// Replace the record with the same id.
    Update(Recipe),
    /// Remove a recipe and its favorite marker.
    Delete(RecipeId),
    /// Flip favorite membership of an id.
    ToggleFavorite(RecipeId),
}

impl Intent {
    /// Stable label used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Load(_) => "load",
            Self::Add(_) => "add",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
            Self::ToggleFavorite(_) => "toggle_favorite",
        }
    }
}

/// Applies one intent and returns the next state.
pub fn apply(state: &AppState, intent: Intent) -> AppState {
    match intent {
        Intent::Load(patch) => AppState {
            recipes: patch.recipes.unwrap_or_else(|| state.recipes.clone()),
            favorites: patch.favorites.unwrap_or_else(|| state.favorites.clone()),
        },
        Intent::Add(recipe) => {
            let mut recipes = Vec::with_capacity(state.recipes.len() + 1);
            recipes.push(recipe);
            recipes.extend(state.recipes.iter().cloned());
            AppState {
                recipes,
                favorites: state.favorites.clone(),
            }
        }
        Intent::Update(recipe) => {
            let recipes = state
                .recipes
                .iter()
                .map(|current| {
                    if current.id == recipe.id {
                        recipe.clone()
                    } else {
                        current.clone()
                    }
                })
                .collect();
            AppState {
                recipes,
                favorites: state.favorites.clone(),
            }
        }
        Intent::Delete(id) => AppState {
            recipes: state
                .recipes
                .iter()
                .filter(|recipe| recipe.id != id)
                .cloned()
                .collect(),
            favorites: state.favorites.without(&id),
        },
        Intent::ToggleFavorite(id) => AppState {
            recipes: state.recipes.clone(),
            favorites: state.favorites.toggled(&id),
        },
    }
}
