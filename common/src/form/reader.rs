//! Serializes the live form into a settings payload.
//!
//! Walks the successful inputs in document order, coerces each raw value by its
//! declared type and groups repeated names. Checkable inputs that were left
//! unchecked never show up in that walk, so their names are backfilled with
//! `false` afterwards.

use thiserror::Error;

use super::coercion::{coerce_in, CoercionAnomaly};
use super::field::{DeclaredType, FieldDescriptor};
use super::registry::FieldRegistry;
use crate::model::{SettingValue, Settings};

/// A coercion failure tied to the input it came from.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("field `{field}`: {source}")]
pub struct FieldAnomaly {
    pub field: String,
    #[source]
    pub source: CoercionAnomaly,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnapshotError {
    #[error("{} field(s) hold values that do not match their type", .0.len())]
    Coercion(Vec<FieldAnomaly>),
}

impl SnapshotError {
    /// Names of the offending fields, without duplicates.
    pub fn field_names(&self) -> Vec<&str> {
        let SnapshotError::Coercion(anomalies) = self;
        let mut names: Vec<&str> = Vec::with_capacity(anomalies.len());
        for anomaly in anomalies {
            if !names.contains(&anomaly.field.as_str()) {
                names.push(&anomaly.field);
            }
        }
        names
    }
}

/// Builds the settings payload from the current state of `registry`.
///
/// Every declared name ends up in the result exactly once, as a scalar or as a
/// list. All anomalies are collected before failing so they can be reported
/// together.
pub fn read_snapshot(registry: &FieldRegistry) -> Result<Settings, SnapshotError> {
    let mut settings = Settings::new();
    let mut anomalies = Vec::new();

    for field in registry.fields().iter().filter(|f| f.is_successful()) {
        match coerce_field(field) {
            Ok(value) => settings.insert_grouped(&field.name, value),
            Err(source) => anomalies.push(FieldAnomaly {
                field: field.name.clone(),
                source,
            }),
        }
    }

    if !anomalies.is_empty() {
        return Err(SnapshotError::Coercion(anomalies));
    }

    for field in registry.fields().iter().filter(|f| f.kind.is_checkable()) {
        if !settings.contains_key(&field.name) {
            settings.insert(field.name.clone(), false);
        }
    }

    Ok(settings)
}

fn coerce_field(field: &FieldDescriptor) -> Result<SettingValue, CoercionAnomaly> {
    if field.kind.is_checkable() && field.declared_type == DeclaredType::Boolean {
        return Ok(SettingValue::Boolean(field.checked));
    }
    coerce_in(field.raw_value(), field.declared_type)
}
