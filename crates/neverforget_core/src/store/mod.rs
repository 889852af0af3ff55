//! In-memory record stores persisted to a key/value medium.
//!
//! # Responsibility
//! - Own one ordered collection per record type (categories, notes, reminders).
//! - Expose add/update/delete/get/filter operations over that collection.
//! - Persist the entire collection after every successful mutation.
//!
//! # Invariants
//! - Not-found is a sentinel (`None`/`false`), never an error.
//! - Persist failures are logged and do not change mutation results.
//! - Store instances are constructed explicitly and passed by reference;
//!   there is no process-wide store state.

use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod category_store;
pub mod codec;
mod collection;
pub mod note_store;
pub mod reminder_store;
mod stores;

pub use stores::Stores;

/// Failure of an explicit `flush`.
#[derive(Debug)]
pub enum StoreError {
    Codec(codec::CodecError),
    Storage(StorageError),
}

impl StoreError {
    /// Stable, content-free error code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Codec(err) => err.code(),
            Self::Storage(StorageError::Db(_)) => "storage_db",
            Self::Storage(StorageError::MissingRequiredTable(_)) => "storage_schema",
            Self::Storage(StorageError::QuotaExceeded { .. }) => "storage_quota",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Codec(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Codec(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<codec::CodecError> for StoreError {
    fn from(value: codec::CodecError) -> Self {
        Self::Codec(value)
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}
