//! The settings payload exchanged with the device.
//!
//! On the wire this is a flat JSON object mapping a setting name to a scalar or
//! to a list of scalars. `GET /settings` returns one, `PUT /settings` accepts one.
//! The object is rebuilt on every load and every submit; nothing keeps it around.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::SettingValue;

/// Name -> value mapping in first-seen order.
///
/// Equality ignores key order, so two payloads that only differ in how the
/// keys are laid out compare equal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(IndexMap<String, SettingValue>);

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any existing value stored under `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<SettingValue>) -> Option<SettingValue> {
        self.0.insert(name.into(), value.into())
    }

    /// Stores `value` under `name`, grouping repeated names.
    ///
    /// The first occurrence is stored as a scalar; the second promotes the entry
    /// to `[first, second]` and later ones are appended.
    pub fn insert_grouped(&mut self, name: &str, value: SettingValue) {
        match self.0.get_mut(name) {
            Some(existing) => existing.push_grouped(value),
            None => {
                self.0.insert(name.to_string(), value);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&SettingValue> {
        self.0.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<K: Into<String>, V: Into<SettingValue>> FromIterator<(K, V)> for Settings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Settings(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
