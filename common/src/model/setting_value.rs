use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Largest magnitude for which every integral `f64` is exactly representable.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A single value of the settings payload.
///
/// Scalars map one-to-one onto JSON strings, numbers and booleans. `List` is
/// produced when several form fields share a name; it only ever holds scalars.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    String(String),
    Number(f64),
    Boolean(bool),
    List(Vec<SettingValue>),
}

impl SettingValue {
    pub fn is_list(&self) -> bool {
        matches!(self, SettingValue::List(_))
    }

    /// Views the value as a sequence: a list yields its elements, a scalar yields itself.
    pub fn as_slice(&self) -> &[SettingValue] {
        match self {
            SettingValue::List(values) => values,
            scalar => std::slice::from_ref(scalar),
        }
    }

    /// Truthiness used when a value drives a checked state.
    pub fn is_truthy(&self) -> bool {
        match self {
            SettingValue::Boolean(b) => *b,
            SettingValue::String(s) => !s.is_empty(),
            SettingValue::Number(n) => *n != 0.0 && !n.is_nan(),
            SettingValue::List(values) => !values.is_empty(),
        }
    }

    /// Text suitable for an input's `value`.
    pub fn to_display_string(&self) -> String {
        match self {
            SettingValue::String(s) => s.clone(),
            SettingValue::Number(n) => format_number(*n),
            SettingValue::Boolean(b) => b.to_string(),
            SettingValue::List(values) => values
                .iter()
                .map(SettingValue::to_display_string)
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// Appends `value`, promoting a scalar to a two-element list in place.
    pub(crate) fn push_grouped(&mut self, value: SettingValue) {
        match self {
            SettingValue::List(values) => values.push(value),
            scalar => {
                let first = std::mem::replace(scalar, SettingValue::List(Vec::with_capacity(2)));
                if let SettingValue::List(values) = scalar {
                    values.push(first);
                    values.push(value);
                }
            }
        }
    }
}

/// Shortest decimal rendering of a number, `5` rather than `5.0`.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        // also folds -0 into "0"
        return "0".to_string();
    }
    format!("{}", n)
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::String(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::String(value)
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        SettingValue::Number(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Boolean(value)
    }
}

impl From<Vec<SettingValue>> for SettingValue {
    fn from(values: Vec<SettingValue>) -> Self {
        SettingValue::List(values)
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl Serialize for SettingValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SettingValue::String(s) => serializer.serialize_str(s),
            SettingValue::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            SettingValue::Number(n) => serializer.serialize_f64(*n),
            SettingValue::Boolean(b) => serializer.serialize_bool(*b),
            SettingValue::List(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for SettingValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SettingValueVisitor)
    }
}

struct SettingValueVisitor;

impl<'de> Visitor<'de> for SettingValueVisitor {
    type Value = SettingValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, number, boolean or a list of those")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(SettingValue::Boolean(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(SettingValue::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(SettingValue::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(SettingValue::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(SettingValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(SettingValue::String(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element::<SettingValue>()? {
            if value.is_list() {
                return Err(de::Error::custom("nested lists are not supported"));
            }
            values.push(value);
        }
        Ok(SettingValue::List(values))
    }
}
