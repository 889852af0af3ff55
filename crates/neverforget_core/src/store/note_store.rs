//! Note store.
//!
//! # Invariants
//! - `created_at` is stamped once on add and cannot be changed by updates.
//! - `category` is stored as given; it is never checked against categories.

use super::codec::{
    decode_collection, deserialize_note, encode_collection, serialize_note, CodecError,
    PersistedNote,
};
use super::collection::{CollectionSchema, CollectionStore};
use super::StoreError;
use crate::config::NOTES_STORAGE_KEY;
use crate::model::id::{IdGenerator, UuidIdGenerator};
use crate::model::note::{NewNote, Note, NotePatch};
use crate::storage::KeyValueStorage;
use chrono::Utc;

pub(crate) struct NoteSchema;

impl CollectionSchema for NoteSchema {
    type Record = Note;

    const NAME: &'static str = "notes";
    const STORAGE_KEY: &'static str = NOTES_STORAGE_KEY;

    fn record_id(record: &Note) -> &str {
        &record.id
    }

    fn default_records() -> Vec<Note> {
        Vec::new()
    }

    fn encode(records: &[Note]) -> Result<String, CodecError> {
        let persisted: Vec<PersistedNote> = records.iter().map(serialize_note).collect();
        encode_collection(&persisted)
    }

    fn decode(raw: &str) -> Result<Vec<Note>, CodecError> {
        decode_collection::<PersistedNote>(raw)?
            .into_iter()
            .map(deserialize_note)
            .collect()
    }
}

/// Persisted, ordered list of notes.
pub struct NoteStore<S: KeyValueStorage> {
    inner: CollectionStore<NoteSchema, S>,
    ids: Box<dyn IdGenerator>,
}

impl<S: KeyValueStorage> NoteStore<S> {
    /// Loads notes from `storage` using random UUID ids for new records.
    pub fn load(storage: S) -> Self {
        Self::load_with_ids(storage, UuidIdGenerator)
    }

    pub fn load_with_ids(storage: S, ids: impl IdGenerator + 'static) -> Self {
        Self {
            inner: CollectionStore::load(storage),
            ids: Box::new(ids),
        }
    }

    /// All notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        self.inner.records()
    }

    pub fn len(&self) -> usize {
        self.inner.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.records().is_empty()
    }

    /// Appends a note stamped with a fresh id and the current time.
    pub fn add_note(&mut self, note: NewNote) -> Note {
        self.inner.insert(Note {
            id: self.ids.next_id(),
            content: note.content,
            category: note.category,
            created_at: Utc::now(),
            image_url: note.image_url,
        })
    }

    /// Merges `patch` into the note with `id`.
    ///
    /// Returns `None` without persisting when no such note exists.
    pub fn update_note(&mut self, id: &str, patch: NotePatch) -> Option<Note> {
        self.inner.modify(id, |note| patch.apply_to(note))
    }

    pub fn delete_note(&mut self, id: &str) -> bool {
        self.inner.remove(id)
    }

    pub fn get_note_by_id(&self, id: &str) -> Option<&Note> {
        self.inner.find(id)
    }

    /// Notes whose `category` equals `category`, in insertion order.
    pub fn get_notes_by_category(&self, category: &str) -> Vec<&Note> {
        self.inner.filter(|note| note.category == category)
    }

    /// Writes the current collection, surfacing any failure.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::NoteSchema;
    use crate::store::collection::CollectionSchema;

    #[test]
    fn bad_created_at_inside_valid_array_is_invalid_timestamp() {
        let err = NoteSchema::decode(
            r#"[{"id":"1","content":"a","category":"x","createdAt":"not-a-date"}]"#,
        )
        .unwrap_err();
        assert_eq!(err.code(), "invalid_timestamp");
    }

    #[test]
    fn element_missing_required_field_is_record_shape() {
        let err = NoteSchema::decode(
            r#"[{"id":"1","content":"a","category":"x","createdAt":"2023-11-14T22:13:20.123Z"},{"id":"2","content":"b"}]"#,
        )
        .unwrap_err();
        assert_eq!(err.code(), "record_shape");
    }
}
