//! Application-wide store context.

use super::category_store::CategoryStore;
use super::note_store::NoteStore;
use super::reminder_store::ReminderStore;
use super::StoreError;
use crate::model::id::{IdGenerator, UuidIdGenerator};
use crate::storage::KeyValueStorage;

/// The three stores over one shared medium.
///
/// Construct once at startup and pass by reference to whatever needs it.
/// `S` is typically `&MemoryStorage` or `SqliteStorage<'_>`, both `Copy`.
/// Stores are independent: deleting a note leaves its reminders in place.
pub struct Stores<S: KeyValueStorage> {
    pub categories: CategoryStore<S>,
    pub notes: NoteStore<S>,
    pub reminders: ReminderStore<S>,
}

impl<S: KeyValueStorage + Clone> Stores<S> {
    pub fn load(storage: S) -> Self {
        Self::load_with_ids(storage, UuidIdGenerator)
    }

    /// Loads all stores, each with its own copy of `ids`.
    pub fn load_with_ids<G>(storage: S, ids: G) -> Self
    where
        G: IdGenerator + Clone + 'static,
    {
        Self {
            categories: CategoryStore::load_with_ids(storage.clone(), ids.clone()),
            notes: NoteStore::load_with_ids(storage.clone(), ids.clone()),
            reminders: ReminderStore::load_with_ids(storage, ids),
        }
    }
}

impl<S: KeyValueStorage> Stores<S> {
    /// Writes every collection, stopping at the first failure.
    pub fn flush_all(&self) -> Result<(), StoreError> {
        self.categories.flush()?;
        self.notes.flush()?;
        self.reminders.flush()
    }
}
