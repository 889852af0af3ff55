//! Note records.

use super::RecordId;
use chrono::{DateTime, Utc};

/// A short text note filed under one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: RecordId,
    pub content: String,
    /// Expected to match a `Category::id`; never checked.
    pub category: String,
    /// Stamped once by `NoteStore::add_note`, never mutated afterwards.
    pub created_at: DateTime<Utc>,
    pub image_url: Option<String>,
}

/// Caller-supplied fields for `NoteStore::add_note`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub content: String,
    pub category: String,
    pub image_url: Option<String>,
}

impl NewNote {
    pub fn new(content: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            category: category.into(),
            image_url: None,
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// Partial update for an existing note.
///
/// `image_url` is doubly optional: `Some(None)` clears the image,
/// `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub content: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<Option<String>>,
}

impl NotePatch {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    pub(crate) fn apply_to(self, note: &mut Note) {
        if let Some(content) = self.content {
            note.content = content;
        }
        if let Some(category) = self.category {
            note.category = category;
        }
        if let Some(image_url) = self.image_url {
            note.image_url = image_url;
        }
    }
}
