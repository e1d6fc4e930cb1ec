//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level recipe functions to Dart via FRB.
//! - Own the process-wide recipe service handle.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - All calls are serialized through one service mutex.
//! - If the database cannot be opened, the session runs in memory.

use foodie_core::{
    categories, core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, CatalogQuery, CoreConfig, KeyValueStore, KvResult, MemoryKeyValueStore,
    Recipe, RecipeDraft, RecipeService, SqliteKeyValueStore,
};
use log::{error, warn};
use once_cell::sync::OnceCell;
use std::path::Path;
use std::sync::Mutex;

static SERVICE: OnceCell<Mutex<RecipeService<SessionStore>>> = OnceCell::new();

/// Backend chosen when the session opens.
enum SessionStore {
    /// On-device database file.
    Sqlite(SqliteKeyValueStore),
    /// Database unavailable; nothing outlives the process.
    Memory(MemoryKeyValueStore),
}

impl KeyValueStore for SessionStore {
    fn get_item(&self, key: &str) -> KvResult<Option<String>> {
        match self {
            Self::Sqlite(store) => store.get_item(key),
            Self::Memory(store) => store.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> KvResult<()> {
        match self {
            Self::Sqlite(store) => store.set_item(key, value),
            Self::Memory(store) => store.set_item(key, value),
        }
    }
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Recipe projection rendered by list and detail screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeItem {
    pub id: String,
    pub title: String,
    pub category: String,
    pub image: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub prep_time: String,
    pub servings: u32,
    pub calories: u32,
    pub difficulty: String,
    /// Sample recipes hide edit/delete controls.
    pub is_sample: bool,
    pub is_favorite: bool,
}

/// Raw recipe form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    pub title: String,
    pub category: String,
    pub image: String,
    /// One ingredient per line.
    pub ingredients: String,
    pub instructions: String,
    pub prep_time: String,
    pub servings: String,
    pub calories: String,
    pub difficulty: String,
}

/// Generic action response envelope for mutating calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Affected recipe ID, when there is one.
    pub recipe_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl RecipeActionResponse {
    fn success(message: impl Into<String>, recipe_id: Option<String>) -> Self {
        Self {
            ok: true,
            recipe_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            recipe_id: None,
            message: message.into(),
        }
    }
}

/// Returns the offered category labels.
#[flutter_rust_bridge::frb(sync)]
pub fn recipe_categories() -> Vec<String> {
    categories()
}

/// Lists recipes for the catalog screen.
///
/// `category = None` or `"All"` lists everything.
///
/// # FFI contract
/// - Never panics; returns an empty list when the session is unavailable.
#[flutter_rust_bridge::frb(sync)]
pub fn recipes_list(category: Option<String>, favorites_only: bool) -> Vec<RecipeItem> {
    let query = CatalogQuery {
        category: category
            .map(|label| label.trim().to_string())
            .filter(|label| !label.is_empty()),
        favorites_only,
    };
    with_service(|service| {
        let service = &*service;
        service
            .list(&query)
            .into_iter()
            .map(|recipe| to_recipe_item(service, recipe))
            .collect::<Vec<_>>()
    })
    .unwrap_or_else(|err| {
        error!("event=ffi_call module=ffi status=error call=recipes_list error={err}");
        Vec::new()
    })
}

/// Gets one recipe for the detail screen.
#[flutter_rust_bridge::frb(sync)]
pub fn recipe_get(recipe_id: String) -> Option<RecipeItem> {
    with_service(|service| {
        let service = &*service;
        service
            .get(recipe_id.trim())
            .map(|recipe| to_recipe_item(service, recipe))
    })
    .unwrap_or_else(|err| {
        error!("event=ffi_call module=ffi status=error call=recipe_get error={err}");
        None
    })
}

/// Returns the edit-form prefill for one recipe.
#[flutter_rust_bridge::frb(sync)]
pub fn recipe_edit_form(recipe_id: String) -> Option<RecipeForm> {
    with_service(|service| {
        service
            .get(recipe_id.trim())
            .map(|recipe| to_recipe_form(RecipeDraft::from_recipe(recipe)))
    })
    .unwrap_or_else(|err| {
        error!("event=ffi_call module=ffi status=error call=recipe_edit_form error={err}");
        None
    })
}

/// Creates a user recipe from form input.
///
/// # FFI contract
/// - Returns `ok=false` with a message when the title is blank.
/// - Returns the generated recipe ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn recipe_create(form: RecipeForm) -> RecipeActionResponse {
    let draft = to_recipe_draft(form);
    match with_service(|service| service.create_recipe(&draft)) {
        Ok(Ok(recipe)) => RecipeActionResponse::success("Recipe saved.", Some(recipe.id)),
        Ok(Err(err)) => RecipeActionResponse::failure(format!("recipe_create failed: {err}")),
        Err(err) => RecipeActionResponse::failure(format!("recipe_create failed: {err}")),
    }
}

/// Replaces a user recipe from edit-form input.
///
/// An unknown ID is reported as success without a `recipe_id`.
#[flutter_rust_bridge::frb(sync)]
pub fn recipe_update(recipe_id: String, form: RecipeForm) -> RecipeActionResponse {
    let draft = to_recipe_draft(form);
    match with_service(|service| service.update_recipe(recipe_id.trim(), &draft)) {
        Ok(Ok(Some(recipe))) => RecipeActionResponse::success("Recipe updated.", Some(recipe.id)),
        Ok(Ok(None)) => RecipeActionResponse::success("Recipe no longer exists.", None),
        Ok(Err(err)) => RecipeActionResponse::failure(format!("recipe_update failed: {err}")),
        Err(err) => RecipeActionResponse::failure(format!("recipe_update failed: {err}")),
    }
}

/// Deletes a user recipe. Callers confirm with the user first.
#[flutter_rust_bridge::frb(sync)]
pub fn recipe_delete(recipe_id: String) -> RecipeActionResponse {
    let recipe_id = recipe_id.trim().to_string();
    match with_service(|service| service.delete_recipe(&recipe_id)) {
        Ok(Ok(true)) => RecipeActionResponse::success("Recipe deleted.", Some(recipe_id)),
        Ok(Ok(false)) => RecipeActionResponse::success("Recipe no longer exists.", None),
        Ok(Err(err)) => RecipeActionResponse::failure(format!("recipe_delete failed: {err}")),
        Err(err) => RecipeActionResponse::failure(format!("recipe_delete failed: {err}")),
    }
}

/// Flips favorite state; the message reports the new state.
#[flutter_rust_bridge::frb(sync)]
pub fn recipe_toggle_favorite(recipe_id: String) -> RecipeActionResponse {
    let recipe_id = recipe_id.trim().to_string();
    match with_service(|service| service.toggle_favorite(&recipe_id)) {
        Ok(true) => RecipeActionResponse::success("Added to favorites.", Some(recipe_id)),
        Ok(false) => RecipeActionResponse::success("Removed from favorites.", Some(recipe_id)),
        Err(err) => {
            RecipeActionResponse::failure(format!("recipe_toggle_favorite failed: {err}"))
        }
    }
}

/// Returns whether a recipe is favorited; `false` when unavailable.
#[flutter_rust_bridge::frb(sync)]
pub fn recipe_is_favorite(recipe_id: String) -> bool {
    with_service(|service| service.is_favorite(recipe_id.trim())).unwrap_or(false)
}

fn with_service<T>(f: impl FnOnce(&mut RecipeService<SessionStore>) -> T) -> Result<T, String> {
    let service = SERVICE.get_or_init(|| Mutex::new(open_service(&CoreConfig::from_env())));
    let mut guard = service
        .lock()
        .map_err(|_| "recipe session lock poisoned".to_string())?;
    Ok(f(&mut guard))
}

fn open_service(config: &CoreConfig) -> RecipeService<SessionStore> {
    if let Err(err) = config.init_logging() {
        // The host may still call `init_logging` itself; keep the session usable.
        warn!(
            "event=session_open module=ffi status=degraded error_code=logging_init_failed error={err}"
        );
    }
    RecipeService::open(open_session_store(&config.db_path))
}

fn open_session_store(db_path: &Path) -> SessionStore {
    match SqliteKeyValueStore::open(db_path) {
        Ok(store) => SessionStore::Sqlite(store),
        Err(err) => {
            warn!(
                "event=session_open module=ffi status=degraded error_code=db_unavailable error={err}"
            );
            SessionStore::Memory(MemoryKeyValueStore::new())
        }
    }
}

fn to_recipe_item<S: KeyValueStore>(service: &RecipeService<S>, recipe: &Recipe) -> RecipeItem {
    RecipeItem {
        id: recipe.id.clone(),
        title: recipe.title.clone(),
        category: recipe.category.clone(),
        image: recipe.image.clone(),
        ingredients: recipe.ingredients.clone(),
        instructions: recipe.instructions.clone(),
        prep_time: recipe.prep_time.clone(),
        servings: recipe.servings,
        calories: recipe.calories,
        difficulty: recipe.difficulty.clone(),
        is_sample: recipe.is_sample(),
        is_favorite: service.is_favorite(&recipe.id),
    }
}

fn to_recipe_draft(form: RecipeForm) -> RecipeDraft {
    RecipeDraft {
        title: form.title,
        category: form.category,
        image: form.image,
        ingredients: form.ingredients,
        instructions: form.instructions,
        prep_time: form.prep_time,
        servings: form.servings,
        calories: form.calories,
        difficulty: form.difficulty,
    }
}

fn to_recipe_form(draft: RecipeDraft) -> RecipeForm {
    RecipeForm {
        title: draft.title,
        category: draft.category,
        image: draft.image,
        ingredients: draft.ingredients,
        instructions: draft.instructions,
        prep_time: draft.prep_time,
        servings: draft.servings,
        calories: draft.calories,
        difficulty: draft.difficulty,
    }
}
