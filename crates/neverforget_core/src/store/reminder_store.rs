//! Reminder store.
//!
//! # Invariants
//! - `note_id` is stored as given; it is never checked against notes.
//! - Coordinates are finite once stored, so every write can be read back.

use super::codec::{
    decode_collection, deserialize_reminder, encode_collection, serialize_reminder, CodecError,
    PersistedReminder,
};
use super::collection::{CollectionSchema, CollectionStore};
use super::StoreError;
use crate::config::REMINDERS_STORAGE_KEY;
use crate::model::id::{IdGenerator, UuidIdGenerator};
use crate::model::reminder::{Location, NewReminder, Reminder, ReminderPatch};
use crate::storage::KeyValueStorage;

pub(crate) struct ReminderSchema;

impl CollectionSchema for ReminderSchema {
    type Record = Reminder;

    const NAME: &'static str = "reminders";
    const STORAGE_KEY: &'static str = REMINDERS_STORAGE_KEY;

    fn record_id(record: &Reminder) -> &str {
        &record.id
    }

    fn default_records() -> Vec<Reminder> {
        Vec::new()
    }

    fn encode(records: &[Reminder]) -> Result<String, CodecError> {
        let persisted: Vec<PersistedReminder> = records.iter().map(serialize_reminder).collect();
        encode_collection(&persisted)
    }

    fn decode(raw: &str) -> Result<Vec<Reminder>, CodecError> {
        decode_collection::<PersistedReminder>(raw)?
            .into_iter()
            .map(deserialize_reminder)
            .collect()
    }
}

/// Persisted, ordered list of reminders attached to notes by `note_id`.
pub struct ReminderStore<S: KeyValueStorage> {
    inner: CollectionStore<ReminderSchema, S>,
    ids: Box<dyn IdGenerator>,
}

impl<S: KeyValueStorage> ReminderStore<S> {
    /// Loads reminders from `storage` using random UUID ids for new records.
    pub fn load(storage: S) -> Self {
        Self::load_with_ids(storage, UuidIdGenerator)
    }

    pub fn load_with_ids(storage: S, ids: impl IdGenerator + 'static) -> Self {
        Self {
            inner: CollectionStore::load(storage),
            ids: Box::new(ids),
        }
    }

    /// All reminders in insertion order.
    pub fn reminders(&self) -> &[Reminder] {
        self.inner.records()
    }

    pub fn len(&self) -> usize {
        self.inner.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.records().is_empty()
    }

    /// Appends a reminder with a fresh id and returns it.
    ///
    /// Non-finite location coordinates are dropped; the location name stays.
    pub fn add_reminder(&mut self, reminder: NewReminder) -> Reminder {
        self.inner.insert(Reminder {
            id: self.ids.next_id(),
            note_id: reminder.note_id,
            time: reminder.time,
            location: reminder.location.map(Location::without_invalid_coordinates),
            contact: reminder.contact,
        })
    }

    /// Merges `patch` into the reminder with `id`.
    ///
    /// Returns `None` without persisting when no such reminder exists.
    pub fn update_reminder(&mut self, id: &str, patch: ReminderPatch) -> Option<Reminder> {
        self.inner.modify(id, |reminder| patch.apply_to(reminder))
    }

    pub fn delete_reminder(&mut self, id: &str) -> bool {
        self.inner.remove(id)
    }

    pub fn get_reminder_by_id(&self, id: &str) -> Option<&Reminder> {
        self.inner.find(id)
    }

    /// Reminders attached to `note_id`, in insertion order.
    pub fn get_reminders_by_note_id(&self, note_id: &str) -> Vec<&Reminder> {
        self.inner.filter(|reminder| reminder.note_id == note_id)
    }

    /// Writes the current collection, surfacing any failure.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::ReminderSchema;
    use crate::store::collection::CollectionSchema;

    #[test]
    fn bad_time_inside_valid_array_is_invalid_timestamp() {
        let err = ReminderSchema::decode(
            r#"[{"id":"r0","noteId":"n0"},{"id":"r1","noteId":"n1","time":"not a date"}]"#,
        )
        .unwrap_err();
        assert_eq!(err.code(), "invalid_timestamp");
    }

    #[test]
    fn null_coordinate_inside_valid_array_is_record_shape() {
        let err = ReminderSchema::decode(
            r#"[{"id":"r1","noteId":"n1","location":{"name":"x","coordinates":{"latitude":null,"longitude":1.0}}}]"#,
        )
        .unwrap_err();
        assert_eq!(err.code(), "record_shape");
    }
}
