use placepicker_core::{KeyValueStorage, SqliteStorage, StorageError, KV_SCHEMA_VERSION};
use rusqlite::Connection;

fn user_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn fresh_database_gets_kv_table_and_version() {
    let storage = SqliteStorage::open_in_memory().unwrap();

    assert_eq!(user_version(storage.connection()), KV_SCHEMA_VERSION);
    assert_eq!(storage.get("selectedPlaces").unwrap(), None);
}

#[test]
fn reopening_keeps_values_and_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("picker.db");

    SqliteStorage::open(&path).unwrap().set("k", "v").unwrap();
    let reopened = SqliteStorage::open(&path).unwrap();

    assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
    assert_eq!(user_version(reopened.connection()), KV_SCHEMA_VERSION);
}

#[test]
fn file_from_newer_build_is_refused_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    Connection::open(&path)
        .unwrap()
        .execute_batch("PRAGMA user_version = 7;")
        .unwrap();

    let err = SqliteStorage::open(&path).err().unwrap();
    assert!(matches!(
        err,
        StorageError::UnsupportedSchema { found: 7, supported } if supported == KV_SCHEMA_VERSION
    ));

    let conn = Connection::open(&path).unwrap();
    let has_kv: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'kv';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(has_kv, 0);
    assert_eq!(user_version(&conn), 7);
}
