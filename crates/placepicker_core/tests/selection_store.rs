use placepicker_core::{
    KeyValueStorage, MemoryStorage, SelectionStore, SqliteStorage, SELECTED_PLACES_KEY,
};

fn stored(storage: &impl KeyValueStorage) -> Option<String> {
    storage.get(SELECTED_PLACES_KEY).unwrap()
}

#[test]
fn load_is_empty_when_nothing_stored() {
    let store = SelectionStore::new(MemoryStorage::new());
    assert!(store.load().is_empty());
}

#[test]
fn load_is_empty_when_state_is_malformed() {
    let store = SelectionStore::new(MemoryStorage::with_entry(SELECTED_PLACES_KEY, "not json"));
    assert!(store.load().is_empty());
}

#[test]
fn add_prepends_most_recent_first() {
    let store = SelectionStore::new(MemoryStorage::new());
    store.add("p1").unwrap();
    store.add("p2").unwrap();

    assert_eq!(store.load(), vec!["p2", "p1"]);
    assert_eq!(stored(store.storage()).as_deref(), Some(r#"["p2","p1"]"#));
}

#[test]
fn repeated_add_is_idempotent() {
    let store = SelectionStore::new(MemoryStorage::new());
    store.add("p3").unwrap();
    store.add("p3").unwrap();
    store.add("p3").unwrap();

    assert_eq!(store.load(), vec!["p3"]);
}

#[test]
fn remove_drops_the_id() {
    let store = SelectionStore::new(MemoryStorage::new());
    store.add("p1").unwrap();
    store.add("p2").unwrap();
    store.remove("p1").unwrap();

    assert_eq!(store.load(), vec!["p2"]);
}

#[test]
fn remove_of_absent_id_still_writes_same_content() {
    let store = SelectionStore::new(MemoryStorage::new());
    store.remove("ghost").unwrap();
    assert_eq!(stored(store.storage()).as_deref(), Some("[]"));

    store.add("p1").unwrap();
    store.remove("ghost").unwrap();
    assert_eq!(store.load(), vec!["p1"]);
}

#[test]
fn sqlite_selection_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("picker.db");

    {
        let store = SelectionStore::new(SqliteStorage::open(&path).unwrap());
        store.add("p4").unwrap();
        store.add("p7").unwrap();
        store.remove("p4").unwrap();
    }

    let reopened = SelectionStore::new(SqliteStorage::open(&path).unwrap());
    assert_eq!(reopened.load(), vec!["p7"]);
}

#[test]
fn sqlite_set_replaces_whole_value() {
    let storage = SqliteStorage::open_in_memory().unwrap();
    storage.set("k", "first").unwrap();
    storage.set("k", "second").unwrap();

    assert_eq!(storage.get("k").unwrap().as_deref(), Some("second"));
    let rows: i64 = storage
        .connection()
        .query_row("SELECT COUNT(*) FROM kv;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}
