//! Category store.
//!
//! # Invariants
//! - A fresh medium yields the four seeded categories, in fixed order.
//! - The `default` category can never be deleted, whether or not it exists.

use super::codec::{decode_collection, encode_collection, CodecError};
use super::collection::{CollectionSchema, CollectionStore};
use super::StoreError;
use crate::config::CATEGORIES_STORAGE_KEY;
use crate::model::category::{
    default_categories, Category, CategoryPatch, NewCategory, DEFAULT_CATEGORY_ID,
};
use crate::model::id::{IdGenerator, UuidIdGenerator};
use crate::storage::KeyValueStorage;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub(crate) struct CategorySchema;

impl CollectionSchema for CategorySchema {
    type Record = Category;

    const NAME: &'static str = "categories";
    const STORAGE_KEY: &'static str = CATEGORIES_STORAGE_KEY;

    fn record_id(record: &Category) -> &str {
        &record.id
    }

    fn default_records() -> Vec<Category> {
        default_categories()
    }

    fn encode(records: &[Category]) -> Result<String, CodecError> {
        encode_collection(records)
    }

    fn decode(raw: &str) -> Result<Vec<Category>, CodecError> {
        decode_collection(raw)
    }
}

/// Why `try_delete_category` refused to delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryDeleteError {
    /// The `default` category is protected.
    Protected,
    NotFound(String),
}

impl Display for CategoryDeleteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Protected => write!(f, "category `{DEFAULT_CATEGORY_ID}` cannot be deleted"),
            Self::NotFound(id) => write!(f, "category not found: {id}"),
        }
    }
}

impl Error for CategoryDeleteError {}

/// Persisted, ordered set of categories.
pub struct CategoryStore<S: KeyValueStorage> {
    inner: CollectionStore<CategorySchema, S>,
    ids: Box<dyn IdGenerator>,
}

impl<S: KeyValueStorage> CategoryStore<S> {
    /// Loads categories from `storage` using random UUID ids for new records.
    pub fn load(storage: S) -> Self {
        Self::load_with_ids(storage, UuidIdGenerator)
    }

    pub fn load_with_ids(storage: S, ids: impl IdGenerator + 'static) -> Self {
        Self {
            inner: CollectionStore::load(storage),
            ids: Box::new(ids),
        }
    }

    /// All categories in insertion order.
    pub fn categories(&self) -> &[Category] {
        self.inner.records()
    }

    pub fn len(&self) -> usize {
        self.inner.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.records().is_empty()
    }

    /// Appends a category with a fresh id and returns it.
    pub fn add_category(&mut self, category: NewCategory) -> Category {
        self.inner.insert(Category {
            id: self.ids.next_id(),
            name: category.name,
            color: category.color,
        })
    }

    /// Merges `patch` into the category with `id`.
    ///
    /// Returns `None` without persisting when no such category exists.
    pub fn update_category(&mut self, id: &str, patch: CategoryPatch) -> Option<Category> {
        self.inner.modify(id, |category| patch.apply_to(category))
    }

    /// Deletes the category with `id`.
    ///
    /// Returns `false` for the protected `default` category and for unknown
    /// ids; use `try_delete_category` to tell the two apart.
    pub fn delete_category(&mut self, id: &str) -> bool {
        self.try_delete_category(id).is_ok()
    }

    pub fn try_delete_category(&mut self, id: &str) -> Result<(), CategoryDeleteError> {
        if id == DEFAULT_CATEGORY_ID {
            return Err(CategoryDeleteError::Protected);
        }
        if self.inner.remove(id) {
            Ok(())
        } else {
            Err(CategoryDeleteError::NotFound(id.to_string()))
        }
    }

    pub fn get_category_by_id(&self, id: &str) -> Option<&Category> {
        self.inner.find(id)
    }

    /// Writes the current collection, surfacing any failure.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::{CategoryDeleteError, CategoryStore};
    use crate::model::category::NewCategory;
    use crate::storage::MemoryStorage;

    #[test]
    fn try_delete_distinguishes_protected_from_missing() {
        let storage = MemoryStorage::new();
        let mut store = CategoryStore::load(&storage);

        assert_eq!(
            store.try_delete_category("default"),
            Err(CategoryDeleteError::Protected)
        );
        assert_eq!(
            store.try_delete_category("nope"),
            Err(CategoryDeleteError::NotFound("nope".to_string()))
        );
        assert_eq!(store.try_delete_category("work"), Ok(()));
    }

    #[test]
    fn loading_defaults_does_not_write_to_storage() {
        let storage = MemoryStorage::new();
        let store = CategoryStore::load(&storage);
        assert_eq!(store.len(), 4);
        assert!(storage.is_empty());
    }

    #[test]
    fn add_category_appends_after_defaults() {
        let storage = MemoryStorage::new();
        let mut store = CategoryStore::load(&storage);
        let added = store.add_category(NewCategory::new("Travel", "#123456"));

        assert_eq!(store.categories().last(), Some(&added));
        assert_eq!(store.len(), 5);
    }
}
