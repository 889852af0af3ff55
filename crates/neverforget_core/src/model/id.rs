//! Pluggable record id generation.

use chrono::Utc;
use uuid::Uuid;

/// Produces fresh record ids for `add_*` operations.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Random UUID v4 ids. Default for every store.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Epoch-millisecond ids, matching data written by earlier app versions.
///
/// Two records created within the same millisecond receive the same id.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampIdGenerator;

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&self) -> String {
        Utc::now().timestamp_millis().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{IdGenerator, TimestampIdGenerator, UuidIdGenerator};
    use std::collections::HashSet;

    #[test]
    fn uuid_ids_do_not_collide_under_rapid_creation() {
        let ids = UuidIdGenerator;
        let generated: HashSet<String> = (0..1_000).map(|_| ids.next_id()).collect();
        assert_eq!(generated.len(), 1_000);
    }

    #[test]
    fn timestamp_ids_are_decimal_millis() {
        let id = TimestampIdGenerator.next_id();
        assert!(id.chars().all(|c| c.is_ascii_digit()));
        assert!(id.parse::<i64>().unwrap() > 1_600_000_000_000);
    }
}
