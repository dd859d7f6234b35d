//! Conversions between what an input holds and the typed value it stands for.
//!
//! `coerce_in` runs when the form is serialized, `coerce_out` when a payload is
//! written back onto the inputs. Both are pure.

use thiserror::Error;

use super::field::{DeclaredType, FieldKind};
use crate::model::SettingValue;

/// Raw text that cannot be turned into the declared type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoercionAnomaly {
    #[error("`{raw}` is not a valid number")]
    InvalidNumber { raw: String },
}

/// What an input should show for a given value.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayValue {
    Checked(bool),
    Text(String),
}

/// Converts raw input text into a typed value.
///
/// An empty number is kept as an empty string so a blank field round-trips as
/// `""`. Anything else that does not parse as a finite decimal is an anomaly.
pub fn coerce_in(raw: &str, declared_type: DeclaredType) -> Result<SettingValue, CoercionAnomaly> {
    match declared_type {
        DeclaredType::String => Ok(SettingValue::String(raw.to_string())),
        DeclaredType::Boolean => Ok(SettingValue::Boolean(is_checked_text(raw))),
        DeclaredType::Number => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(SettingValue::String(String::new()));
            }
            match trimmed.parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(SettingValue::Number(n)),
                _ => Err(CoercionAnomaly::InvalidNumber { raw: raw.to_string() }),
            }
        }
    }
}

/// Converts a typed value into what an input of `kind` displays.
///
/// Checkable inputs declared `boolean` show a checked state; every other input
/// shows the stringified value.
pub fn coerce_out(value: &SettingValue, kind: FieldKind, declared_type: DeclaredType) -> DisplayValue {
    if kind.is_checkable() && declared_type == DeclaredType::Boolean {
        DisplayValue::Checked(value.is_truthy())
    } else {
        DisplayValue::Text(value.to_display_string())
    }
}

fn is_checked_text(raw: &str) -> bool {
    let raw = raw.trim();
    ["on", "true", "checked", "1"]
        .iter()
        .any(|t| raw.eq_ignore_ascii_case(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers_parse_as_floats() {
        assert_eq!(coerce_in("42", DeclaredType::Number), Ok(SettingValue::Number(42.0)));
        assert_eq!(coerce_in(" 2.5 ", DeclaredType::Number), Ok(SettingValue::Number(2.5)));
        assert_eq!(coerce_in("-1e3", DeclaredType::Number), Ok(SettingValue::Number(-1000.0)));
    }

    #[test]
    fn empty_number_stays_an_empty_string() {
        assert_eq!(coerce_in("", DeclaredType::Number), Ok(SettingValue::String(String::new())));
    }

    #[test]
    fn garbage_and_non_finite_numbers_are_anomalies() {
        for raw in ["abc", "42abc", "inf", "NaN"] {
            assert_eq!(
                coerce_in(raw, DeclaredType::Number),
                Err(CoercionAnomaly::InvalidNumber { raw: raw.to_string() })
            );
        }
    }

    #[test]
    fn booleans_follow_checked_text() {
        assert_eq!(coerce_in("on", DeclaredType::Boolean), Ok(SettingValue::Boolean(true)));
        assert_eq!(coerce_in("TRUE", DeclaredType::Boolean), Ok(SettingValue::Boolean(true)));
        assert_eq!(coerce_in("", DeclaredType::Boolean), Ok(SettingValue::Boolean(false)));
        assert_eq!(coerce_in("off", DeclaredType::Boolean), Ok(SettingValue::Boolean(false)));
    }

    #[test]
    fn strings_pass_through_including_empty() {
        assert_eq!(coerce_in("", DeclaredType::String), Ok(SettingValue::String(String::new())));
        assert_eq!(coerce_in(" Gate1 ", DeclaredType::String), Ok(" Gate1 ".into()));
    }

    #[test]
    fn coerce_out_maps_kinds() {
        assert_eq!(
            coerce_out(&SettingValue::Boolean(true), FieldKind::Checkbox, DeclaredType::Boolean),
            DisplayValue::Checked(true)
        );
        assert_eq!(
            coerce_out(&SettingValue::Number(5.0), FieldKind::Text, DeclaredType::Number),
            DisplayValue::Text("5".to_string())
        );
        assert_eq!(
            coerce_out(&"Gate1".into(), FieldKind::Text, DeclaredType::String),
            DisplayValue::Text("Gate1".to_string())
        );
    }
}
