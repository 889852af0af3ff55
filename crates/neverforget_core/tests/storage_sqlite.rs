use neverforget_core::db::migrations::latest_version;
use neverforget_core::db::{open_db, open_db_in_memory, DbError};
use neverforget_core::{
    KeyValueStorage, NewNote, NewReminder, SqliteStorage, StorageError, Stores,
    DEFAULT_CATEGORY_ID,
};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_migrations() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
    SqliteStorage::try_new(&conn).unwrap();
}

#[test]
fn unmigrated_connection_is_rejected() {
    let conn = Connection::open_in_memory().unwrap();
    let err = SqliteStorage::try_new(&conn).unwrap_err();
    assert!(matches!(err, StorageError::MissingRequiredTable("kv_items")));
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn set_item_overwrites_and_remove_item_deletes() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();

    assert_eq!(storage.get_item("k").unwrap(), None);
    storage.set_item("k", "[1]").unwrap();
    storage.set_item("k", "[1,2]").unwrap();
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("[1,2]"));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_items;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);

    storage.remove_item("k").unwrap();
    assert_eq!(storage.get_item("k").unwrap(), None);
}

#[test]
fn stores_survive_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("never-forget.sqlite3");

    let (note_id, reminder_id) = {
        let conn = open_db(&path).unwrap();
        let mut stores = Stores::load(SqliteStorage::try_new(&conn).unwrap());
        let note = stores.notes.add_note(NewNote::new("call mom", "personal"));
        let reminder = stores.reminders.add_reminder(NewReminder::for_note(&note.id));
        assert!(stores.categories.delete_category("important"));
        (note.id, reminder.id)
    };

    let conn = open_db(&path).unwrap();
    let stores = Stores::load(SqliteStorage::try_new(&conn).unwrap());
    assert_eq!(stores.categories.len(), 3);
    assert!(stores.categories.get_category_by_id(DEFAULT_CATEGORY_ID).is_some());
    assert_eq!(
        stores.notes.get_note_by_id(&note_id).unwrap().content,
        "call mom"
    );
    assert_eq!(stores.reminders.get_reminders_by_note_id(&note_id).len(), 1);
    assert!(stores.reminders.get_reminder_by_id(&reminder_id).is_some());
}

#[test]
fn corrupted_rows_do_not_break_startup() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();
    for key in [
        "never-forget-categories",
        "never-forget-notes",
        "never-forget-reminders",
    ] {
        storage.set_item(key, "<<garbage>>").unwrap();
    }

    let stores = Stores::load(storage);
    assert_eq!(stores.categories.len(), 4);
    assert!(stores.notes.is_empty());
    assert!(stores.reminders.is_empty());
    stores.flush_all().unwrap();
    assert_eq!(
        storage.get_item("never-forget-notes").unwrap().as_deref(),
        Some("[]")
    );
}
