//! Core data layer for the Never Forget note keeper.
//! Categories, notes and reminders live in persisted in-memory stores.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, CategoryPatch, NewCategory, DEFAULT_CATEGORY_ID};
pub use model::id::{IdGenerator, TimestampIdGenerator, UuidIdGenerator};
pub use model::note::{NewNote, Note, NotePatch};
pub use model::reminder::{
    Contact, Coordinates, Location, NewReminder, Reminder, ReminderPatch,
};
pub use model::RecordId;
pub use storage::{KeyValueStorage, MemoryStorage, SqliteStorage, StorageError, StorageResult};
pub use store::category_store::{CategoryDeleteError, CategoryStore};
pub use store::codec::CodecError;
pub use store::note_store::NoteStore;
pub use store::reminder_store::ReminderStore;
pub use store::{StoreError, Stores};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
