use neverforget_core::{
    CategoryPatch, CategoryStore, KeyValueStorage, MemoryStorage, NewCategory,
    DEFAULT_CATEGORY_ID,
};

const KEY: &str = "never-forget-categories";

#[test]
fn fresh_storage_seeds_four_defaults_in_order() {
    let storage = MemoryStorage::new();
    let store = CategoryStore::load(&storage);

    let ids: Vec<&str> = store.categories().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["default", "work", "personal", "important"]);
    let colors: Vec<&str> = store.categories().iter().map(|c| c.color.as_str()).collect();
    assert_eq!(colors, vec!["#409EFF", "#67C23A", "#E6A23C", "#F56C6C"]);
}

#[test]
fn delete_default_always_fails_and_keeps_collection() {
    let storage = MemoryStorage::new();
    let mut store = CategoryStore::load(&storage);
    store
        .update_category("work", CategoryPatch::name("default"))
        .unwrap();

    assert!(!store.delete_category(DEFAULT_CATEGORY_ID));
    assert_eq!(store.len(), 4);
    assert!(store.get_category_by_id(DEFAULT_CATEGORY_ID).is_some());
}

#[test]
fn delete_default_fails_even_when_record_is_absent() {
    let storage = MemoryStorage::new();
    storage
        .set_item(KEY, r##"[{"id":"work","name":"Work","color":"#67C23A"}]"##)
        .unwrap();
    let mut store = CategoryStore::load(&storage);

    assert!(!store.delete_category(DEFAULT_CATEGORY_ID));
    assert_eq!(store.len(), 1);
}

#[test]
fn delete_removes_single_record_and_preserves_order() {
    let storage = MemoryStorage::new();
    let mut store = CategoryStore::load(&storage);

    assert!(store.delete_category("personal"));
    assert!(!store.delete_category("personal"));

    let ids: Vec<&str> = store.categories().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["default", "work", "important"]);
}

#[test]
fn mutations_persist_full_collection_and_reload() {
    let storage = MemoryStorage::new();
    let added_id = {
        let mut store = CategoryStore::load(&storage);
        let added = store.add_category(NewCategory::new("Travel", "#00AAFF"));
        store
            .update_category("work", CategoryPatch::color("#111111"))
            .unwrap();
        added.id
    };

    let persisted: serde_json::Value =
        serde_json::from_str(&storage.get_item(KEY).unwrap().unwrap()).unwrap();
    assert_eq!(persisted.as_array().unwrap().len(), 5);

    let reloaded = CategoryStore::load(&storage);
    assert_eq!(reloaded.len(), 5);
    assert_eq!(reloaded.get_category_by_id(&added_id).unwrap().name, "Travel");
    assert_eq!(reloaded.get_category_by_id("work").unwrap().color, "#111111");
}

#[test]
fn update_missing_category_returns_none_without_writing() {
    let storage = MemoryStorage::new();
    let mut store = CategoryStore::load(&storage);

    assert!(store
        .update_category("missing", CategoryPatch::name("x"))
        .is_none());
    assert!(storage.get_item(KEY).unwrap().is_none());
}

#[test]
fn non_array_blob_falls_back_to_defaults() {
    let storage = MemoryStorage::new();
    storage.set_item(KEY, r#"{"id":"default"}"#).unwrap();

    let store = CategoryStore::load(&storage);
    assert_eq!(store.len(), 4);
}
