use chrono::{TimeZone, Utc};
use neverforget_core::store::codec::{
    deserialize_note, deserialize_reminder, serialize_note, serialize_reminder,
};
use neverforget_core::{Contact, Location, Note, Reminder};

fn sample_note(image_url: Option<&str>) -> Note {
    Note {
        id: "n1".to_string(),
        content: "buy milk".to_string(),
        category: "default".to_string(),
        created_at: Utc::now(),
        image_url: image_url.map(str::to_string),
    }
}

#[test]
fn note_round_trip_is_lossless() {
    for note in [sample_note(None), sample_note(Some("cover.png"))] {
        let restored = deserialize_note(serialize_note(&note)).unwrap();
        assert_eq!(restored, note);
    }
}

#[test]
fn note_created_at_serializes_as_iso_text() {
    let mut note = sample_note(None);
    note.created_at = Utc.timestamp_millis_opt(0).unwrap();
    assert_eq!(serialize_note(&note).created_at, "1970-01-01T00:00:00.000Z");
}

#[test]
fn reminder_round_trip_keeps_absent_time_absent() {
    let bare = Reminder {
        id: "r1".to_string(),
        note_id: "n1".to_string(),
        time: None,
        location: None,
        contact: None,
    };
    let serialized = serialize_reminder(&bare);
    assert_eq!(serialized.time, None);
    assert_eq!(deserialize_reminder(serialized).unwrap(), bare);

    let full = Reminder {
        time: Some(Utc::now()),
        location: Some(Location::at("Office", 1.5, -2.25)),
        contact: Some(Contact::new("Ada", "c-1")),
        ..bare
    };
    assert_eq!(deserialize_reminder(serialize_reminder(&full)).unwrap(), full);
}
