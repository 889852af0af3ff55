//! Reminder records and their optional trigger payloads.
//!
//! Any combination of `time`, `location` and `contact` may be set at once,
//! including none of them.

use super::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic point. Stores only keep finite values; JSON cannot carry
/// `NaN` or infinities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Returns `None` when either component is `NaN` or infinite.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let coordinates = Self {
            latitude,
            longitude,
        };
        coordinates.is_finite().then_some(coordinates)
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl Location {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coordinates: None,
        }
    }

    /// Named location with coordinates; non-finite coordinates are dropped.
    pub fn at(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            coordinates: Coordinates::new(latitude, longitude),
        }
    }

    /// Drops coordinates that cannot be persisted.
    pub(crate) fn without_invalid_coordinates(mut self) -> Self {
        self.coordinates = self.coordinates.filter(Coordinates::is_finite);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    /// Identifier in the caller's address book.
    pub id: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: RecordId,
    /// Expected to match a `Note::id`; never checked.
    pub note_id: String,
    pub time: Option<DateTime<Utc>>,
    pub location: Option<Location>,
    pub contact: Option<Contact>,
}

/// Caller-supplied fields for `ReminderStore::add_reminder`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReminder {
    pub note_id: String,
    pub time: Option<DateTime<Utc>>,
    pub location: Option<Location>,
    pub contact: Option<Contact>,
}

impl NewReminder {
    /// Reminder for `note_id` with no trigger payload yet.
    pub fn for_note(note_id: impl Into<String>) -> Self {
        Self {
            note_id: note_id.into(),
            time: None,
            location: None,
            contact: None,
        }
    }

    pub fn at_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    pub fn at_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contact = Some(contact);
        self
    }
}

/// Partial update for an existing reminder.
///
/// Optional payloads are doubly optional: `Some(None)` clears the field,
/// `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderPatch {
    pub note_id: Option<String>,
    pub time: Option<Option<DateTime<Utc>>>,
    pub location: Option<Option<Location>>,
    pub contact: Option<Option<Contact>>,
}

impl ReminderPatch {
    pub(crate) fn apply_to(self, reminder: &mut Reminder) {
        if let Some(note_id) = self.note_id {
            reminder.note_id = note_id;
        }
        if let Some(time) = self.time {
            reminder.time = time;
        }
        if let Some(location) = self.location {
            reminder.location = location.map(Location::without_invalid_coordinates);
        }
        if let Some(contact) = self.contact {
            reminder.contact = contact;
        }
    }
}
