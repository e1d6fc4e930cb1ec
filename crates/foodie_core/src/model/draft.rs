//! Recipe form input and normalization.
//!
//! # Responsibility
//! - Turn raw form fields into a valid [`Recipe`] before it reaches the store.
//! - Provide edit-form prefill from an existing record.
//!
//! # Invariants
//! - A blank title is rejected; nothing else in a draft can fail.
//! - Records built here are always `Owner::User`.
//! - Editing keeps the original `id`.

use crate::model::recipe::{
    Owner, Recipe, RecipeId, DEFAULT_CALORIES, DEFAULT_DIFFICULTY, DEFAULT_IMAGE_URI,
    DEFAULT_PREP_TIME, DEFAULT_SERVINGS,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static LINE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("valid line break regex"));
static LEADING_INT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid leading integer regex"));

/// Draft validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// Title is empty after trimming.
    EmptyTitle,
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "recipe title must not be empty"),
        }
    }
}

impl Error for DraftError {}

/// Raw recipe form fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    pub category: String,
    pub image: String,
    /// Multi-line text, one ingredient per line.
    pub ingredients: String,
    pub instructions: String,
    pub prep_time: String,
    pub servings: String,
    pub calories: String,
    pub difficulty: String,
}

impl RecipeDraft {
    /// Prefills the edit form from an existing record.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            category: recipe.category.clone(),
            image: recipe.image.clone(),
            ingredients: recipe.ingredients.join("\n"),
            instructions: recipe.instructions.clone(),
            prep_time: recipe.prep_time.clone(),
            servings: recipe.servings.to_string(),
            calories: recipe.calories.to_string(),
            difficulty: recipe.difficulty.clone(),
        }
    }

    /// Builds a new user recipe with a freshly generated id.
    pub fn build_new(&self) -> Result<Recipe, DraftError> {
        self.build_with_id(Uuid::new_v4().to_string())
    }

    /// Builds a replacement for `original`, keeping its id.
    pub fn build_edit(&self, original: &Recipe) -> Result<Recipe, DraftError> {
        self.build_with_id(original.id.clone())
    }

    /// Builds a user recipe with a caller-provided id.
    ///
    /// # Errors
    /// - Returns [`DraftError::EmptyTitle`] when the trimmed title is empty.
    pub fn build_with_id(&self, id: RecipeId) -> Result<Recipe, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::EmptyTitle);
        }

        Ok(Recipe {
            id,
            title: title.to_string(),
            category: self.category.trim().to_string(),
            image: or_default(&self.image, DEFAULT_IMAGE_URI),
            ingredients: normalize_ingredients(&self.ingredients),
            instructions: self.instructions.trim().to_string(),
            prep_time: or_default(&self.prep_time, DEFAULT_PREP_TIME),
            servings: parse_servings(&self.servings),
            calories: parse_calories(&self.calories),
            difficulty: or_default(&self.difficulty, DEFAULT_DIFFICULTY),
            owner: Owner::User,
        })
    }
}

/// Splits multi-line input into trimmed, non-empty ingredient lines.
pub fn normalize_ingredients(input: &str) -> Vec<String> {
    LINE_BREAK_RE
        .split(input)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses servings; anything below 1 or non-numeric becomes the default.
pub fn parse_servings(input: &str) -> u32 {
    match parse_leading_int(input) {
        Some(value) if value >= 1 => u32::try_from(value).unwrap_or(DEFAULT_SERVINGS),
        _ => DEFAULT_SERVINGS,
    }
}

/// Parses calories; negative or non-numeric input becomes the default.
pub fn parse_calories(input: &str) -> u32 {
    match parse_leading_int(input) {
        Some(value) if value >= 0 => u32::try_from(value).unwrap_or(DEFAULT_CALORIES),
        _ => DEFAULT_CALORIES,
    }
}

// Leading-integer parse: "4 people" -> 4, "abc" -> None.
fn parse_leading_int(input: &str) -> Option<i64> {
    LEADING_INT_RE
        .captures(input)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<i64>().ok())
}

fn or_default(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
