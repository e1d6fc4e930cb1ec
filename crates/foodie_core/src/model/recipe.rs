//! Recipe domain model.
//!
//! # Responsibility
//! - Define the canonical recipe record shared by store, mirror and FFI.
//! - Own the field defaults used when form input is blank.
//!
//! # Invariants
//! - `id` is assigned once at creation and never changes across updates.
//! - `owner` has exactly two states; anything not tagged `sample` is user-owned.
//! - `category` is an open string; [`CATEGORIES`] is only the offered list.

use serde::{Deserialize, Serialize};

/// Opaque recipe identifier.
///
/// Sample records use short stable ids, user records use UUID v4 strings.
pub type RecipeId = String;

/// Placeholder image used when a recipe is saved without one.
pub const DEFAULT_IMAGE_URI: &str =
    "https://images.unsplash.com/photo-1504674900247-0877df9cc836?w=800";
pub const DEFAULT_PREP_TIME: &str = "20 min";
pub const DEFAULT_DIFFICULTY: &str = "Easy";
pub const DEFAULT_SERVINGS: u32 = 1;
pub const DEFAULT_CALORIES: u32 = 0;

/// Pseudo-category that matches every recipe in catalog queries.
pub const ALL_CATEGORIES: &str = "All";

/// Category labels offered by the recipe form and the category strip.
pub const CATEGORIES: &[&str] = &["Breakfast", "Lunch", "Dinner", "Dessert", "Snacks"];

/// Ownership tag separating built-in samples from user-authored recipes.
///
/// Serialized as `"sample"` / `"user"`. Decoding any other value, `null`
/// or a missing field yields `User`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Owner {
    /// Seeded demo record.
    Sample,
    /// Created through the recipe form.
    #[default]
    User,
}

impl Owner {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sample => "sample",
            Self::User => "user",
        }
    }
}

impl From<Option<String>> for Owner {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("sample") => Self::Sample,
            _ => Self::User,
        }
    }
}

impl From<Owner> for String {
    fn from(value: Owner) -> Self {
        value.as_str().to_string()
    }
}

/// Canonical recipe record.
///
/// Field names follow the persisted camelCase schema (`prepTime`). Only `id`
/// is required on decode; every other missing field takes its form default so
/// one sparse stored record cannot invalidate the whole snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    /// Image URI; never empty for records built by the form path.
    #[serde(default = "default_image")]
    pub image: String,
    /// Ordered, non-empty ingredient lines.
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default = "default_prep_time")]
    pub prep_time: String,
    /// Always >= 1 for records built by the form path.
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default = "default_calories")]
    pub calories: u32,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default)]
    pub owner: Owner,
}

fn default_image() -> String {
    DEFAULT_IMAGE_URI.to_string()
}

fn default_prep_time() -> String {
    DEFAULT_PREP_TIME.to_string()
}

fn default_servings() -> u32 {
    DEFAULT_SERVINGS
}

fn default_calories() -> u32 {
    DEFAULT_CALORIES
}

fn default_difficulty() -> String {
    DEFAULT_DIFFICULTY.to_string()
}

impl Recipe {
    /// Returns whether this record is a seeded sample.
    pub fn is_sample(&self) -> bool {
        self.owner == Owner::Sample
    }

    /// Returns whether this recipe belongs to `category`.
    ///
    /// [`ALL_CATEGORIES`] matches everything; other labels match exactly.
    pub fn in_category(&self, category: &str) -> bool {
        category == ALL_CATEGORIES || self.category == category
    }
}

/// Returns the offered category labels in display order.
pub fn categories() -> Vec<String> {
    CATEGORIES.iter().map(|label| (*label).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::{
        Owner, Recipe, ALL_CATEGORIES, DEFAULT_DIFFICULTY, DEFAULT_IMAGE_URI, DEFAULT_PREP_TIME,
    };

    fn recipe(category: &str) -> Recipe {
        Recipe {
            id: "r-1".to_string(),
            title: "Soup".to_string(),
            category: category.to_string(),
            image: String::new(),
            ingredients: Vec::new(),
            instructions: String::new(),
            prep_time: "5 min".to_string(),
            servings: 1,
            calories: 0,
            difficulty: "Easy".to_string(),
            owner: Owner::User,
        }
    }

    #[test]
    fn unknown_owner_values_decode_as_user() {
        assert_eq!(Owner::from(Some("sample".to_string())), Owner::Sample);
        assert_eq!(Owner::from(Some("me".to_string())), Owner::User);
        assert_eq!(Owner::from(None), Owner::User);
    }

    #[test]
    fn all_category_matches_everything() {
        let soup = recipe("Lunch");
        assert!(soup.in_category(ALL_CATEGORIES));
        assert!(soup.in_category("Lunch"));
        assert!(!soup.in_category("lunch"));
        assert!(!soup.in_category("Dinner"));
    }

    #[test]
    fn sparse_record_decodes_with_form_defaults() {
        let decoded: Recipe =
            serde_json::from_str(r#"{"id": "u-2", "title": "Dal", "owner": null}"#).unwrap();
        assert_eq!(decoded.image, DEFAULT_IMAGE_URI);
        assert_eq!(decoded.prep_time, DEFAULT_PREP_TIME);
        assert_eq!(decoded.difficulty, DEFAULT_DIFFICULTY);
        assert_eq!(decoded.servings, 1);
        assert_eq!(decoded.calories, 0);
        assert!(decoded.ingredients.is_empty());
        assert_eq!(decoded.owner, Owner::User);
    }
}
