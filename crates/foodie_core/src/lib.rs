//! Core domain logic for the Foodie recipe catalog.
//! This crate is the single source of truth for store invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod persist;
pub mod service;
pub mod store;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::draft::{DraftError, RecipeDraft};
pub use model::favorites::FavoriteSet;
pub use model::recipe::{
    categories, Owner, Recipe, RecipeId, ALL_CATEGORIES, CATEGORIES, DEFAULT_CALORIES,
    DEFAULT_DIFFICULTY, DEFAULT_IMAGE_URI, DEFAULT_PREP_TIME, DEFAULT_SERVINGS,
};
pub use model::seed::sample_recipes;
pub use model::state::{AppState, StatePatch};
pub use persist::{
    KeyValueStore, KvError, KvResult, MemoryKeyValueStore, PersistenceMirror,
    SqliteKeyValueStore, FAVORITES_KEY, RECIPES_KEY,
};
pub use service::recipe_service::{RecipeService, ServiceError};
pub use store::{apply, select_recipes, CatalogQuery, Intent};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
