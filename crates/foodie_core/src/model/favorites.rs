//! Favorite recipe id set.
//!
//! # Invariants
//! - Membership is the only information carried; markers are not stored.
//! - Ids are not required to reference an existing recipe.

use crate::model::recipe::RecipeId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Set of favorited recipe ids.
///
/// Persisted as a JSON object mapping id to `true`. On decode, entries with a
/// falsy marker (`false`, `null`, `0`, `""`) are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<RecipeId, Value>", into = "BTreeMap<RecipeId, bool>")]
pub struct FavoriteSet {
    ids: BTreeSet<RecipeId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &RecipeId> {
        self.ids.iter()
    }

    /// Returns a copy with membership of `id` flipped.
    pub fn toggled(&self, id: &str) -> Self {
        let mut next = self.clone();
        if !next.ids.remove(id) {
            next.ids.insert(id.to_string());
        }
        next
    }

    /// Returns a copy without `id`.
    pub fn without(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.ids.remove(id);
        next
    }
}

impl<I: Into<RecipeId>> FromIterator<I> for FavoriteSet {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<BTreeMap<RecipeId, Value>> for FavoriteSet {
    fn from(value: BTreeMap<RecipeId, Value>) -> Self {
        value
            .into_iter()
            .filter(|(_, marker)| is_truthy(marker))
            .map(|(id, _)| id)
            .collect()
    }
}

impl From<FavoriteSet> for BTreeMap<RecipeId, bool> {
    fn from(value: FavoriteSet) -> Self {
        value.ids.into_iter().map(|id| (id, true)).collect()
    }
}

fn is_truthy(marker: &Value) -> bool {
    match marker {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
