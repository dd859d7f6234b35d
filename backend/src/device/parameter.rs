//! A single named device parameter and its JSON mapping.

use common::model::SettingValue;
use log::debug;
use serde_json::{Map, Value};

/// Which direction of the REST endpoint may touch a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterMode {
    /// Reported by `GET`, never changed by `PUT`.
    Get,
    /// Changed by `PUT`, never reported by `GET`.
    Set,
    Both,
}

impl ParameterMode {
    pub fn readable(self) -> bool {
        self != ParameterMode::Set
    }

    pub fn writable(self) -> bool {
        self != ParameterMode::Get
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// Text that fits a buffer of `capacity` bytes, terminator included.
    Text { capacity: usize },
    Number,
    Boolean,
}

impl ParameterKind {
    fn default_value(self) -> SettingValue {
        match self {
            ParameterKind::Text { .. } => SettingValue::String(String::new()),
            ParameterKind::Number => SettingValue::Number(0.0),
            ParameterKind::Boolean => SettingValue::Boolean(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigParameter {
    name: String,
    kind: ParameterKind,
    mode: ParameterMode,
    value: SettingValue,
}

impl ConfigParameter {
    pub fn new(name: impl Into<String>, kind: ParameterKind, mode: ParameterMode) -> Self {
        Self {
            name: name.into(),
            kind,
            mode,
            value: kind.default_value(),
        }
    }

    pub fn text(name: impl Into<String>, capacity: usize) -> Self {
        Self::new(name, ParameterKind::Text { capacity }, ParameterMode::Both)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::Number, ParameterMode::Both)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::Boolean, ParameterMode::Both)
    }

    pub fn with_mode(mut self, mode: ParameterMode) -> Self {
        self.mode = mode;
        self
    }

    /// Seeds the value, subject to the same type check as a `PUT`.
    pub fn with_value(mut self, value: Value) -> Self {
        self.update(&value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> ParameterMode {
        self.mode
    }

    pub fn value(&self) -> &SettingValue {
        &self.value
    }

    /// Stores `value` if its JSON type matches the parameter's kind.
    ///
    /// Text longer than the buffer allows is cut at a character boundary.
    /// Returns whether the value was taken.
    pub fn update(&mut self, value: &Value) -> bool {
        let accepted = match (self.kind, value) {
            (ParameterKind::Text { capacity }, Value::String(s)) => {
                SettingValue::String(truncate(s, capacity.saturating_sub(1)).to_string())
            }
            (ParameterKind::Number, Value::Number(n)) => match n.as_f64() {
                Some(n) => SettingValue::Number(n),
                None => return false,
            },
            (ParameterKind::Boolean, Value::Bool(b)) => SettingValue::Boolean(*b),
            _ => {
                debug!("`{}` ignores a value of the wrong type: {}", self.name, value);
                return false;
            }
        };
        self.value = accepted;
        true
    }

    /// Picks this parameter's entry out of a JSON object, if present.
    pub fn from_json(&mut self, json: &Map<String, Value>) -> bool {
        match json.get(&self.name) {
            Some(value) => self.update(value),
            None => false,
        }
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(&self.value).unwrap_or(Value::Null)
    }

    /// Resets to the default of its kind.
    pub fn clear(&mut self) {
        debug!("clearing `{}`", self.name);
        self.value = self.kind.default_value();
    }
}

fn truncate(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
