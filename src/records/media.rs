/*!
 * Mutable media slots attached to a record.
 */

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::errors::ValidationError;

/// Named media slots a record declares, each optionally populated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFields {
    record: &'static str,
    slots: &'static [&'static str],
    values: BTreeMap<&'static str, String>,
}

impl MediaFields {
    pub fn new(record: &'static str, slots: &'static [&'static str]) -> Self {
        Self {
            record,
            slots,
            values: BTreeMap::new(),
        }
    }

    /// Declared slot names
    pub fn slots(&self) -> &'static [&'static str] {
        self.slots
    }

    /// Populate a declared slot
    pub fn set(&mut self, slot: &str, value: impl Into<String>) -> Result<(), ValidationError> {
        let Some(&declared) = self.slots.iter().find(|name| **name == slot) else {
            return Err(ValidationError::UnknownMediaField {
                record: self.record,
                field: slot.to_string(),
            });
        };
        self.values.insert(declared, value.into());
        Ok(())
    }

    pub fn get(&self, slot: &str) -> Option<&str> {
        self.values.get(slot).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copy populated slots into a record dictionary
    pub fn write_into(&self, dict: &mut Map<String, Value>) {
        for (slot, value) in &self.values {
            dict.insert((*slot).to_string(), Value::String(value.clone()));
        }
    }
}
