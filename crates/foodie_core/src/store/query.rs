//! Read-side catalog queries over [`AppState`].
//!
//! Linear filters only; result order always follows state order.

use crate::model::recipe::Recipe;
use crate::model::state::AppState;

/// Filter options for the catalog list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Category label; `None` or `All` matches everything.
    pub category: Option<String>,
    /// Keep only favorited recipes.
    pub favorites_only: bool,
}

impl CatalogQuery {
    pub fn category(label: impl Into<String>) -> Self {
        Self {
            category: Some(label.into()),
            favorites_only: false,
        }
    }

    pub fn favorites() -> Self {
        Self {
            category: None,
            favorites_only: true,
        }
    }
}

/// Returns recipes matching `query` in state order.
///
/// Orphaned favorite ids match nothing.
pub fn select_recipes<'a>(state: &'a AppState, query: &CatalogQuery) -> Vec<&'a Recipe> {
    state
        .recipes()
        .iter()
        .filter(|recipe| match query.category.as_deref() {
            Some(label) => recipe.in_category(label),
            None => true,
        })
        .filter(|recipe| !query.favorites_only || state.is_favorite(&recipe.id))
        .collect()
}
