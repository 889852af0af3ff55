//! Text encoding of store collections for the persistence medium.
//!
//! # Responsibility
//! - Encode a whole collection as one JSON array (camelCase field names).
//! - Convert timestamp fields to ISO-8601 text and back.
//!
//! # Invariants
//! - `deserialize_*(serialize_*(record)) == record`, including absent
//!   optional timestamps, which stay absent.
//! - Millisecond-precision timestamps are written as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
//! - Only a JSON array is accepted as a collection.

use crate::model::note::Note;
use crate::model::reminder::{Contact, Location, Reminder};
use chrono::{DateTime, Datelike, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const EXTENDED_YEAR_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Failure to turn persisted text back into records (or vice versa).
#[derive(Debug)]
pub enum CodecError {
    Json(serde_json::Error),
    /// Parsed JSON is valid but not an array.
    NotACollection,
    InvalidTimestamp {
        field: &'static str,
        value: String,
    },
}

impl CodecError {
    /// Stable, content-free error code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Json(err) if err.is_syntax() || err.is_eof() => "json_syntax",
            Self::Json(_) => "record_shape",
            Self::NotACollection => "not_a_collection",
            Self::InvalidTimestamp { .. } => "invalid_timestamp",
        }
    }
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "{err}"),
            Self::NotACollection => write!(f, "persisted value is not a JSON array"),
            Self::InvalidTimestamp { field, value } => {
                write!(f, "invalid ISO-8601 timestamp `{value}` in `{field}`")
            }
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::NotACollection | Self::InvalidTimestamp { .. } => None,
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Persisted shape of a note: `createdAt` is ISO-8601 text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedNote {
    pub id: String,
    pub content: String,
    pub category: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Persisted shape of a reminder: `time`, when present, is ISO-8601 text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedReminder {
    pub id: String,
    pub note_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

pub fn serialize_note(note: &Note) -> PersistedNote {
    PersistedNote {
        id: note.id.clone(),
        content: note.content.clone(),
        category: note.category.clone(),
        created_at: format_timestamp(&note.created_at),
        image_url: note.image_url.clone(),
    }
}

pub fn deserialize_note(note: PersistedNote) -> Result<Note, CodecError> {
    let created_at = parse_timestamp("createdAt", &note.created_at)?;
    Ok(Note {
        id: note.id,
        content: note.content,
        category: note.category,
        created_at,
        image_url: note.image_url,
    })
}

pub fn serialize_reminder(reminder: &Reminder) -> PersistedReminder {
    PersistedReminder {
        id: reminder.id.clone(),
        note_id: reminder.note_id.clone(),
        time: reminder.time.as_ref().map(format_timestamp),
        location: reminder.location.clone(),
        contact: reminder.contact.clone(),
    }
}

pub fn deserialize_reminder(reminder: PersistedReminder) -> Result<Reminder, CodecError> {
    let time = reminder
        .time
        .as_deref()
        .map(|value| parse_timestamp("time", value))
        .transpose()?;
    Ok(Reminder {
        id: reminder.id,
        note_id: reminder.note_id,
        time,
        location: reminder.location,
        contact: reminder.contact,
    })
}

/// Formats a timestamp as UTC ISO-8601 with a `Z` suffix.
///
/// Millisecond-exact values use exactly three fraction digits; finer values
/// keep the digits they need so decoding restores them exactly. Years
/// outside `0000..=9999` carry an explicit sign (`+10000-01-01T...`).
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    let millis_exact = at.timestamp_subsec_nanos() % 1_000_000 == 0;
    if !(0..=9999).contains(&at.year()) {
        let fraction = if millis_exact { "%.3f" } else { "%.9f" };
        return at
            .format(&format!("%Y-%m-%dT%H:%M:%S{fraction}Z"))
            .to_string();
    }

    let format = if millis_exact {
        SecondsFormat::Millis
    } else {
        SecondsFormat::AutoSi
    };
    at.to_rfc3339_opts(format, true)
}

/// Parses RFC 3339 text, or the signed extended-year form `format_timestamp`
/// writes for years outside `0000..=9999`.
pub fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>, CodecError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, EXTENDED_YEAR_FORMAT)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|_| CodecError::InvalidTimestamp {
            field,
            value: value.to_string(),
        })
}

/// Encodes a whole collection as one JSON array.
pub fn encode_collection<P: Serialize>(items: &[P]) -> Result<String, CodecError> {
    Ok(serde_json::to_string(items)?)
}

/// Decodes a JSON array of persisted records.
///
/// # Errors
/// - `CodecError::Json` when `raw` is not JSON or an element has the wrong shape.
/// - `CodecError::NotACollection` when `raw` is JSON but not an array.
pub fn decode_collection<P: DeserializeOwned>(raw: &str) -> Result<Vec<P>, CodecError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if !value.is_array() {
        return Err(CodecError::NotACollection);
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::{decode_collection, format_timestamp, parse_timestamp, CodecError};
    use chrono::{Datelike, TimeZone, Utc};

    #[test]
    fn millisecond_timestamps_use_iso_string_shape() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(format_timestamp(&at), "2023-11-14T22:13:20.123Z");

        let whole = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        assert_eq!(format_timestamp(&whole), "2023-11-14T22:13:20.000Z");
    }

    #[test]
    fn sub_millisecond_precision_survives_round_trip() {
        let at = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
        let text = format_timestamp(&at);
        assert_eq!(parse_timestamp("time", &text).unwrap(), at);
    }

    #[test]
    fn extended_years_round_trip() {
        let far = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
        let text = format_timestamp(&far);
        assert_eq!(text, "+10000-01-01T00:00:00.000Z");
        assert_eq!(parse_timestamp("time", &text).unwrap(), far);

        let before_epoch_year = Utc.timestamp_opt(-62_198_755_200, 5).unwrap();
        assert!(before_epoch_year.year() < 0);
        let text = format_timestamp(&before_epoch_year);
        assert_eq!(parse_timestamp("time", &text).unwrap(), before_epoch_year);
    }

    #[test]
    fn parse_accepts_offsets_and_normalizes_to_utc() {
        let parsed = parse_timestamp("time", "2023-11-15T00:13:20.123+02:00").unwrap();
        assert_eq!(parsed.timestamp_millis(), 1_700_000_000_123);
    }

    #[test]
    fn decode_rejects_non_array_json() {
        let err = decode_collection::<serde_json::Value>(r#"{"id":"1"}"#).unwrap_err();
        assert!(matches!(err, CodecError::NotACollection));
        assert_eq!(err.code(), "not_a_collection");
    }

    #[test]
    fn decode_reports_syntax_errors() {
        let err = decode_collection::<serde_json::Value>("[{").unwrap_err();
        assert_eq!(err.code(), "json_syntax");
    }
}
