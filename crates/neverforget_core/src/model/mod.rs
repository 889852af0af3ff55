//! Record types owned by the three stores.
//!
//! # Responsibility
//! - Define categories, notes and reminders as plain value objects.
//! - Define creation payloads and partial-update shapes per record type.
//!
//! # Invariants
//! - Every record is identified by a `RecordId` assigned at creation.
//! - Update shapes cannot carry `id` (nor a note's `created_at`).
//! - Cross-store references (`category`, `note_id`) are plain, unvalidated ids.

pub mod category;
pub mod id;
pub mod note;
pub mod reminder;

/// Record identity, kept as text so it can be used as a foreign-key value.
pub type RecordId = String;
