//! Applies a settings payload onto the form.
//!
//! Values land on the inputs of the same name. Checkable inputs declared
//! `boolean` take a checked state, other checkables are checked when their
//! `value` attribute is among the given values, and text inputs take the
//! stringified value. Checked states go through the registry, so a radio
//! group never ends up with two checked radios. Writing the same payload twice
//! leaves the same form.

use log::debug;

use super::coercion::{coerce_out, DisplayValue};
use super::field::{DeclaredType, FieldKind};
use super::registry::FieldRegistry;
use crate::model::{SettingValue, Settings};

/// What could not be placed on the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteReport {
    /// Payload keys with no input of that name.
    pub unknown_keys: Vec<String>,
    /// Names whose list held more values than there were inputs to take them,
    /// with the number of values left over.
    pub dropped_values: Vec<(String, usize)>,
}

impl WriteReport {
    pub fn is_clean(&self) -> bool {
        self.unknown_keys.is_empty() && self.dropped_values.is_empty()
    }
}

pub fn write_snapshot(registry: &mut FieldRegistry, settings: &Settings) -> WriteReport {
    let mut report = WriteReport::default();

    for (name, value) in settings.iter() {
        let indices = registry.indices_of(name).to_vec();
        if indices.is_empty() {
            debug!("no input named `{}`, skipping", name);
            report.unknown_keys.push(name.to_string());
            continue;
        }

        let mut text_fields = Vec::new();
        let mut flag_fields = Vec::new();
        let mut flag_radios = Vec::new();
        let mut choice_fields = Vec::new();
        for index in indices {
            let Some(field) = registry.field(index) else {
                continue;
            };
            match (field.kind, field.declared_type) {
                (FieldKind::Text, _) => text_fields.push(index),
                (FieldKind::Radio, DeclaredType::Boolean) => flag_radios.push(index),
                (_, DeclaredType::Boolean) => flag_fields.push(index),
                _ => choice_fields.push(index),
            }
        }

        let leftover = apply_positional(registry, &text_fields, value)
            + apply_positional(registry, &flag_fields, value)
            + apply_flag_radios(registry, &flag_radios, value);
        if leftover > 0 {
            debug!("{} value(s) for `{}` have no input left", leftover, name);
            report.dropped_values.push((name.to_string(), leftover));
        }

        if !choice_fields.is_empty() {
            let wanted: Vec<String> = value
                .as_slice()
                .iter()
                .map(SettingValue::to_display_string)
                .collect();
            for index in choice_fields {
                let matches = registry
                    .field(index)
                    .is_some_and(|field| wanted.contains(&field.text));
                registry.set_checked(index, matches);
            }
        }
    }

    report
}

/// A radio group declared `boolean` reads back as a single flag, so a scalar
/// checks the first radio only. List elements go positionally, and the group
/// stays exclusive either way.
fn apply_flag_radios(registry: &mut FieldRegistry, indices: &[usize], value: &SettingValue) -> usize {
    let Some((&first, rest)) = indices.split_first() else {
        return 0;
    };
    match value {
        SettingValue::List(values) => {
            for (&index, value) in indices.iter().zip(values) {
                registry.set_checked(index, value.is_truthy());
            }
            values.len().saturating_sub(indices.len())
        }
        scalar => {
            for &index in rest {
                registry.set_checked(index, false);
            }
            registry.set_checked(first, scalar.is_truthy());
            0
        }
    }
}

/// Lists are spread one element per input; scalars go to every input.
/// Returns how many list elements had no input.
fn apply_positional(registry: &mut FieldRegistry, indices: &[usize], value: &SettingValue) -> usize {
    if indices.is_empty() {
        return 0;
    }
    match value {
        SettingValue::List(values) => {
            for (&index, value) in indices.iter().zip(values) {
                apply_one(registry, index, value);
            }
            values.len().saturating_sub(indices.len())
        }
        scalar => {
            for &index in indices {
                apply_one(registry, index, scalar);
            }
            0
        }
    }
}

fn apply_one(registry: &mut FieldRegistry, index: usize, value: &SettingValue) {
    let Some(field) = registry.field(index) else {
        return;
    };
    match coerce_out(value, field.kind, field.declared_type) {
        DisplayValue::Checked(checked) => registry.set_checked(index, checked),
        DisplayValue::Text(text) => registry.set_text(index, text),
    }
}
