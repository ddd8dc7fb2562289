//! AddressBook model holding every contact record.

use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The full collection of records, keyed by the contact name's string form.
///
/// Iteration follows insertion order; overwriting an existing name keeps
/// its original position. The key list and the map are only ever touched
/// through `add_record`, which keeps the two in step and guarantees every
/// key equals its record's name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record under its name, silently overwriting any prior
    /// record for the same name (no merge).
    ///
    /// Returns a success description naming the stored record.
    pub fn add_record(&mut self, record: Record) -> String {
        let key = record.name().as_str().to_string();
        let message = format!("Contact {} add success", record);
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
        message
    }

    /// Look up a record by exact name. Absence is data, not an error;
    /// the command layer decides what a miss means.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// Display support - newline-joined records; an empty book renders as the
// empty string.
impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .iter()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}", lines)
    }
}
