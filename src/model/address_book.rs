use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::{Name, Record};

/// All contacts for one session, keyed by name.
///
/// Backed by a `BTreeMap` so listings and scans come out in name order.
/// Every key is the `Name` of the record stored under it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: BTreeMap<Name, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a record under its name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().clone();
        if let Some(previous) = self.records.insert(name, record) {
            debug!(name = %previous.name(), "replaced existing record");
        } else {
            debug!("inserted record");
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Removes the record for `name`, if any.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name);
        if removed.is_some() {
            debug!(name, "deleted record");
        }
        removed
    }

    /// Records in ascending name order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
