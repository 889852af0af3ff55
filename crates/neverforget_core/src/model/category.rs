//! Category records.

use super::RecordId;
use serde::{Deserialize, Serialize};

/// Id of the category that can never be deleted.
pub const DEFAULT_CATEGORY_ID: &str = "default";

/// A named, colored bucket notes point at through `Note::category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: RecordId,
    pub name: String,
    /// CSS-style color string, e.g. `#409EFF`. Not validated.
    pub color: String,
}

/// Caller-supplied fields for `CategoryStore::add_category`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub color: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Partial update for an existing category; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl CategoryPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::default()
        }
    }

    pub(crate) fn apply_to(self, category: &mut Category) {
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(color) = self.color {
            category.color = color;
        }
    }
}

/// Categories seeded when nothing has been persisted yet, in display order.
pub fn default_categories() -> Vec<Category> {
    [
        (DEFAULT_CATEGORY_ID, "Default", "#409EFF"),
        ("work", "Work", "#67C23A"),
        ("personal", "Personal", "#E6A23C"),
        ("important", "Important", "#F56C6C"),
    ]
    .into_iter()
    .map(|(id, name, color)| Category {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
    })
    .collect()
}
