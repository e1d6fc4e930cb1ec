//! Key-value backend contract.
//!
//! # Responsibility
//! - Define the whole-value string slot API the persistence mirror needs.
//! - Provide a process-local backend for tests and fallback sessions.
//!
//! # Invariants
//! - `set_item` replaces the whole value; there is no partial write.
//! - A missing key is `Ok(None)`, not an error.

use crate::db::DbError;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex};

pub type KvResult<T> = Result<T, KvError>;

/// Backend read/write failure.
#[derive(Debug)]
pub enum KvError {
    Db(DbError),
    /// Backend cannot serve requests right now.
    Unavailable(String),
}

impl Display for KvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unavailable(details) => write!(f, "key-value store unavailable: {details}"),
        }
    }
}

impl Error for KvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for KvError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for KvError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String slot storage.
pub trait KeyValueStore {
    /// Reads one slot.
    fn get_item(&self, key: &str) -> KvResult<Option<String>>;
    /// Replaces one slot.
    fn set_item(&self, key: &str, value: &str) -> KvResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> KvResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> KvResult<()> {
        (**self).set_item(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get_item(&self, key: &str) -> KvResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> KvResult<()> {
        (**self).set_item(key, value)
    }
}

/// In-memory backend. Contents live as long as the value.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    slots: Mutex<BTreeMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored slots.
    pub fn len(&self) -> usize {
        self.slots.lock().map_or(0, |slots| slots.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> KvResult<Option<String>> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| KvError::Unavailable("memory store lock poisoned".to_string()))?;
        Ok(slots.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> KvResult<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| KvError::Unavailable("memory store lock poisoned".to_string()))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
