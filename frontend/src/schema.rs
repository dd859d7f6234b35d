//! Inputs and validation rules of the device settings page.

use common::form::{DeclaredType, FieldDescriptor, FieldRegistry, ValidationRules};

/// Every input with its label, in page order.
pub fn device_fields() -> Vec<(&'static str, FieldDescriptor)> {
    vec![
        ("Device name", FieldDescriptor::text("device_name")),
        (
            "Inching delay (s)",
            FieldDescriptor::text("inching_delay").with_type(DeclaredType::Number),
        ),
        (
            "Status LED",
            FieldDescriptor::checkbox("led").with_type(DeclaredType::Boolean),
        ),
    ]
}

pub fn device_registry() -> (Vec<String>, FieldRegistry) {
    let (labels, fields): (Vec<_>, Vec<_>) = device_fields()
        .into_iter()
        .map(|(label, field)| (label.to_string(), field))
        .unzip();
    (labels, FieldRegistry::new(fields))
}

/// `led` stays optional so it can be saved unchecked.
pub fn device_rules() -> ValidationRules {
    ValidationRules::new()
        .required("device_name")
        .required("inching_delay")
}
