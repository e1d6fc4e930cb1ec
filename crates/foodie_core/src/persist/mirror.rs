//! Best-effort persistence mirror for store snapshots.
//!
//! # Responsibility
//! - Restore recipes and favorites from two independent slots at startup.
//! - Write both slots after every state change.
//!
//! # Invariants
//! - A missing, unreadable or unparsable slot contributes nothing to restore.
//! - Write failures are logged and swallowed; in-memory state stays
//!   authoritative.
//! - Log events carry slot names and counts only, never recipe content.

use crate::model::favorites::FavoriteSet;
use crate::model::recipe::Recipe;
use crate::model::state::StatePatch;
use crate::persist::kv::KeyValueStore;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Slot holding the serialized recipe list.
pub const RECIPES_KEY: &str = "foodie:recipes";
/// Slot holding the serialized favorite set.
pub const FAVORITES_KEY: &str = "foodie:favorites";

/// Mirror over one key-value backend.
pub struct PersistenceMirror<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PersistenceMirror<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrows the backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads both slots into a partial state.
    ///
    /// Never fails; absent fields mean "keep current value".
    pub fn restore(&self) -> StatePatch {
        let patch = StatePatch {
            recipes: self.read_slot::<Vec<Recipe>>(RECIPES_KEY),
            favorites: self.read_slot::<FavoriteSet>(FAVORITES_KEY),
        };
        debug!(
            "event=mirror_restore module=persist status=ok recipes_restored={} favorites_restored={}",
            patch.recipes.is_some(),
            patch.favorites.is_some()
        );
        patch
    }

    /// Writes both slots independently.
    ///
    /// A failure on one slot does not prevent writing the other.
    pub fn persist(&self, recipes: &[Recipe], favorites: &FavoriteSet) {
        self.write_slot(RECIPES_KEY, recipes);
        self.write_slot(FAVORITES_KEY, favorites);
        debug!(
            "event=mirror_persist module=persist status=done recipe_count={} favorite_count={}",
            recipes.len(),
            favorites.len()
        );
    }

    fn read_slot<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(
                    "event=mirror_read module=persist status=error slot={key} error_code=kv_read_failed error={err}"
                );
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(
                    "event=mirror_read module=persist status=error slot={key} error_code=snapshot_parse_failed line={} column={}",
                    err.line(),
                    err.column()
                );
                None
            }
        }
    }

    fn write_slot<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    "event=mirror_write module=persist status=error slot={key} error_code=snapshot_encode_failed error={err}"
                );
                return;
            }
        };

        if let Err(err) = self.store.set_item(key, &raw) {
            warn!(
                "event=mirror_write module=persist status=error slot={key} error_code=kv_write_failed error={err}"
            );
        }
    }
}
