//! Recipe use-case service.
//!
//! # Responsibility
//! - Own the process state container: current [`AppState`] plus mirror.
//! - Turn form drafts into store intents and persist changed snapshots.
//! - Guard sample records against edit/delete.
//!
//! # Invariants
//! - Restore completes inside [`RecipeService::open`], before any intent can
//!   be dispatched; the seed state is never written over a pending restore.
//! - A snapshot is persisted only when the dispatched intent changed state.
//! - Not-found on update/delete is a silent no-op, never an error.

use crate::model::draft::{DraftError, RecipeDraft};
use crate::model::favorites::FavoriteSet;
use crate::model::recipe::{Recipe, RecipeId};
use crate::model::state::AppState;
use crate::persist::kv::KeyValueStore;
use crate::persist::mirror::PersistenceMirror;
use crate::store::query::{select_recipes, CatalogQuery};
use crate::store::reducer::{apply, Intent};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for recipe use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Form input failed validation; nothing was saved.
    InvalidDraft(DraftError),
    /// Target is a built-in sample and cannot be edited or deleted.
    SampleReadOnly(RecipeId),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDraft(err) => write!(f, "{err}"),
            Self::SampleReadOnly(id) => write!(f, "sample recipe is read-only: {id}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDraft(err) => Some(err),
            Self::SampleReadOnly(_) => None,
        }
    }
}

impl From<DraftError> for ServiceError {
    fn from(value: DraftError) -> Self {
        Self::InvalidDraft(value)
    }
}

/// State container over a key-value backend.
pub struct RecipeService<S: KeyValueStore> {
    state: AppState,
    mirror: PersistenceMirror<S>,
}

impl<S: KeyValueStore> RecipeService<S> {
    /// Seeds state, restores the persisted snapshot and merges it.
    ///
    /// Does not write to the backend.
    pub fn open(store: S) -> Self {
        let mirror = PersistenceMirror::new(store);
        let patch = mirror.restore();
        let restored = !patch.is_empty();
        let state = apply(&AppState::seeded(), Intent::Load(patch));
        info!(
            "event=service_open module=service status=ok restored={} recipe_count={} favorite_count={}",
            restored,
            state.recipes().len(),
            state.favorites().len()
        );
        Self { state, mirror }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Borrows the persistence backend.
    pub fn store(&self) -> &S {
        self.mirror.store()
    }

    /// Applies one intent; persists when the state changed.
    pub fn dispatch(&mut self, intent: Intent) -> &AppState {
        let name = intent.name();
        let next = apply(&self.state, intent);
        if next == self.state {
            info!("event=store_apply module=service status=noop intent={name}");
            return &self.state;
        }

        self.state = next;
        self.mirror
            .persist(self.state.recipes(), self.state.favorites());
        info!(
            "event=store_apply module=service status=ok intent={name} recipe_count={} favorite_count={}",
            self.state.recipes().len(),
            self.state.favorites().len()
        );
        &self.state
    }

    /// Validates a draft and adds it as a new user recipe.
    ///
    /// # Errors
    /// - [`ServiceError::InvalidDraft`] when the title is blank; state is
    ///   left unchanged.
    pub fn create_recipe(&mut self, draft: &RecipeDraft) -> Result<Recipe, ServiceError> {
        let recipe = draft.build_new().map_err(|err| {
            warn!("event=recipe_create module=service status=rejected error_code=invalid_draft");
            err
        })?;
        self.dispatch(Intent::Add(recipe.clone()));
        Ok(recipe)
    }

    /// Replaces a user recipe from an edit draft.
    ///
    /// Returns `Ok(None)` when no recipe has `id`.
    ///
    /// # Errors
    /// - [`ServiceError::SampleReadOnly`] for sample records.
    /// - [`ServiceError::InvalidDraft`] when the title is blank.
    pub fn update_recipe(
        &mut self,
        id: &str,
        draft: &RecipeDraft,
    ) -> Result<Option<Recipe>, ServiceError> {
        let Some(original) = self.state.find(id) else {
            return Ok(None);
        };
        if original.is_sample() {
            return Err(ServiceError::SampleReadOnly(original.id.clone()));
        }

        let recipe = draft.build_edit(original)?;
        self.dispatch(Intent::Update(recipe.clone()));
        Ok(Some(recipe))
    }

    /// Deletes a user recipe and its favorite marker.
    ///
    /// Returns `Ok(false)` when no recipe has `id`.
    ///
    /// # Errors
    /// - [`ServiceError::SampleReadOnly`] for sample records.
    pub fn delete_recipe(&mut self, id: &str) -> Result<bool, ServiceError> {
        let Some(recipe) = self.state.find(id) else {
            return Ok(false);
        };
        if recipe.is_sample() {
            return Err(ServiceError::SampleReadOnly(recipe.id.clone()));
        }

        self.dispatch(Intent::Delete(id.to_string()));
        Ok(true)
    }

    /// Flips favorite membership and returns the new membership.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        self.dispatch(Intent::ToggleFavorite(id.to_string()))
            .is_favorite(id)
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.state.find(id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.state.is_favorite(id)
    }

    pub fn favorites(&self) -> &FavoriteSet {
        self.state.favorites()
    }

    /// Lists recipes matching `query` in catalog order.
    pub fn list(&self, query: &CatalogQuery) -> Vec<&Recipe> {
        select_recipes(&self.state, query)
    }
}
