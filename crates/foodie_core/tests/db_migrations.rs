use foodie_core::db::migrations::{current_user_version, latest_version};
use foodie_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn in_memory_db_is_migrated_to_latest() {
    let conn = open_db_in_memory().unwrap();
    assert_eq!(current_user_version(&conn).unwrap(), latest_version());

    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_slots');",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1);
}

#[test]
fn reopening_file_db_is_a_noop_migration() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("foodie.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        conn.execute(
            "INSERT INTO kv_slots (key, value) VALUES ('foodie:recipes', '[]');",
            [],
        )
        .unwrap();
    }

    let conn = open_db(&path).unwrap();
    let value: String = conn
        .query_row(
            "SELECT value FROM kv_slots WHERE key = 'foodie:recipes';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(value, "[]");
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
            .unwrap();
    }

    let err = open_db(&path).unwrap_err();
    assert!(matches!(
        err,
        DbError::UnsupportedSchemaVersion { db_version, .. } if db_version == latest_version() + 1
    ));
}

#[test]
fn unreachable_path_reports_open_phase() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("foodie.sqlite3");

    let err = open_db(&path).unwrap_err();
    assert_eq!(err.code(), "db_open_failed");
    assert!(matches!(err, DbError::Open { mode: "file", .. }));
    assert!(err.to_string().starts_with("cannot open file database: "));
}
