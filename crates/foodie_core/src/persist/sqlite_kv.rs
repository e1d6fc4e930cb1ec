//! SQLite-backed key-value store.
//!
//! # Responsibility
//! - Persist string slots in the `kv_slots` table of an on-device database.
//!
//! # Invariants
//! - Connections are migrated before use (`db::open_db*` or checked by
//!   [`SqliteKeyValueStore::try_new`]).
//! - Each `set_item` is a single-row upsert.

use crate::db::{open_db, open_db_in_memory};
use crate::persist::kv::{KeyValueStore, KvError, KvResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

const SLOT_TABLE: &str = "kv_slots";

/// Key-value store owning one SQLite connection.
pub struct SqliteKeyValueStore {
    conn: Connection,
}

impl SqliteKeyValueStore {
    /// Opens (and migrates) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> KvResult<Self> {
        Self::try_new(open_db(path)?)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> KvResult<Self> {
        Self::try_new(open_db_in_memory()?)
    }

    /// Wraps a ready connection.
    ///
    /// # Errors
    /// - Returns [`KvError::Unavailable`] when the slot table is missing.
    pub fn try_new(conn: Connection) -> KvResult<Self> {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [SLOT_TABLE],
            |row| row.get(0),
        )?;
        if exists != 1 {
            return Err(KvError::Unavailable(format!(
                "missing required table `{SLOT_TABLE}`"
            )));
        }
        Ok(Self { conn })
    }

    /// Borrows the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get_item(&self, key: &str) -> KvResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_slots WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> KvResult<()> {
        self.conn.execute(
            "INSERT INTO kv_slots (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}
