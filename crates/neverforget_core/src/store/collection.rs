//! Generic persisted collection shared by the three record stores.
//!
//! # Invariants
//! - Records keep insertion order; removal preserves the order of the rest.
//! - Every successful mutation ends with a full-collection write.
//! - Lookups and failed mutations never touch the medium.
//! - Load never fails: unreadable or malformed data yields the defaults.

use super::codec::CodecError;
use super::StoreError;
use crate::storage::KeyValueStorage;
use log::{debug, error, info};

/// Per-record-type wiring for `CollectionStore`.
pub(crate) trait CollectionSchema {
    type Record: Clone;

    /// Short store name used in log events.
    const NAME: &'static str;
    const STORAGE_KEY: &'static str;

    fn record_id(record: &Self::Record) -> &str;
    fn default_records() -> Vec<Self::Record>;
    fn encode(records: &[Self::Record]) -> Result<String, CodecError>;
    fn decode(raw: &str) -> Result<Vec<Self::Record>, CodecError>;
}

pub(crate) struct CollectionStore<C: CollectionSchema, S> {
    storage: S,
    records: Vec<C::Record>,
}

impl<C: CollectionSchema, S: KeyValueStorage> CollectionStore<C, S> {
    pub(crate) fn load(storage: S) -> Self {
        let records = load_records::<C, S>(&storage);
        Self { storage, records }
    }

    pub(crate) fn records(&self) -> &[C::Record] {
        &self.records
    }

    pub(crate) fn find(&self, id: &str) -> Option<&C::Record> {
        self.records.iter().find(|record| C::record_id(record) == id)
    }

    pub(crate) fn filter(&self, predicate: impl Fn(&C::Record) -> bool) -> Vec<&C::Record> {
        self.records.iter().filter(|&record| predicate(record)).collect()
    }

    pub(crate) fn insert(&mut self, record: C::Record) -> C::Record {
        self.records.push(record.clone());
        self.persist();
        record
    }

    /// Applies `change` to the first record with `id` and persists.
    pub(crate) fn modify(
        &mut self,
        id: &str,
        change: impl FnOnce(&mut C::Record),
    ) -> Option<C::Record> {
        let index = self.position(id)?;
        change(&mut self.records[index]);
        let updated = self.records[index].clone();
        self.persist();
        Some(updated)
    }

    pub(crate) fn remove(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.records.remove(index);
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Writes the collection and reports failures to the caller.
    pub(crate) fn flush(&self) -> Result<(), StoreError> {
        let encoded = C::encode(&self.records)?;
        self.storage.set_item(C::STORAGE_KEY, &encoded)?;
        debug!(
            "event=store_persist module=store store={} status=ok records={} bytes={}",
            C::NAME,
            self.records.len(),
            encoded.len()
        );
        Ok(())
    }

    fn persist(&self) {
        // Write failures leave the in-memory collection authoritative; the
        // next successful write carries every change made in between.
        if let Err(err) = self.flush() {
            error!(
                "event=store_persist module=store store={} status=error records={} error_code={} error={}",
                C::NAME,
                self.records.len(),
                err.code(),
                err
            );
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| C::record_id(record) == id)
    }
}

fn load_records<C: CollectionSchema, S: KeyValueStorage>(storage: &S) -> Vec<C::Record> {
    let raw = match storage.get_item(C::STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            let defaults = C::default_records();
            info!(
                "event=store_load module=store store={} status=ok source=defaults records={}",
                C::NAME,
                defaults.len()
            );
            return defaults;
        }
        Err(err) => {
            error!(
                "event=store_load module=store store={} status=fallback error_code=storage_read error={}",
                C::NAME,
                err
            );
            return C::default_records();
        }
    };

    match C::decode(&raw) {
        Ok(records) => {
            info!(
                "event=store_load module=store store={} status=ok source=storage records={}",
                C::NAME,
                records.len()
            );
            records
        }
        Err(err) => {
            error!(
                "event=store_load module=store store={} status=fallback error_code={} bytes={}",
                C::NAME,
                err.code(),
                raw.len()
            );
            C::default_records()
        }
    }
}
