use serde::{Deserialize, Serialize};

/// `value` attribute a checkbox or radio reports when none is declared.
pub const DEFAULT_CHECKABLE_VALUE: &str = "on";

/// Type annotation carried by an input through its `data-type` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclaredType {
    #[default]
    String,
    Number,
    Boolean,
}

impl DeclaredType {
    /// Reads a `data-type` annotation. Absent or unrecognised means `String`.
    pub fn from_annotation(annotation: Option<&str>) -> Self {
        match annotation.map(str::trim) {
            Some(a) if a.eq_ignore_ascii_case("number") => DeclaredType::Number,
            Some(a) if a.eq_ignore_ascii_case("boolean") => DeclaredType::Boolean,
            _ => DeclaredType::String,
        }
    }

    /// The annotation to render back into markup, `None` for plain strings.
    pub fn annotation(self) -> Option<&'static str> {
        match self {
            DeclaredType::String => None,
            DeclaredType::Number => Some("number"),
            DeclaredType::Boolean => Some("boolean"),
        }
    }
}

/// How an input displays its value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Checkbox,
    Radio,
}

impl FieldKind {
    pub fn is_checkable(self) -> bool {
        matches!(self, FieldKind::Checkbox | FieldKind::Radio)
    }

    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Radio => "radio",
        }
    }
}

/// One input of the form: its static schema plus its live state.
///
/// `text` is the live value of a text input. Checkable inputs keep a fixed
/// `value` attribute in `text` and carry their live state in `checked`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub declared_type: DeclaredType,
    pub kind: FieldKind,
    pub text: String,
    pub checked: bool,
    default_text: String,
    default_checked: bool,
}

impl FieldDescriptor {
    pub fn text(name: impl Into<String>) -> Self {
        Self::build(name.into(), FieldKind::Text, String::new())
    }

    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::build(name.into(), FieldKind::Checkbox, DEFAULT_CHECKABLE_VALUE.to_string())
    }

    pub fn radio(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::build(name.into(), FieldKind::Radio, value.into())
    }

    fn build(name: String, kind: FieldKind, text: String) -> Self {
        Self {
            name,
            declared_type: DeclaredType::String,
            kind,
            default_text: text.clone(),
            text,
            checked: false,
            default_checked: false,
        }
    }

    pub fn with_type(mut self, declared_type: DeclaredType) -> Self {
        self.declared_type = declared_type;
        self
    }

    /// Sets the `value` attribute of a checkable input, or the initial text of a text input.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.text = value.into();
        self.default_text = self.text.clone();
        self
    }

    pub fn initially_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self.default_checked = checked;
        self
    }

    /// Whether the input takes part in a raw form serialization.
    ///
    /// Unchecked checkboxes and radios are omitted entirely.
    pub fn is_successful(&self) -> bool {
        !self.kind.is_checkable() || self.checked
    }

    /// The raw string a form serialization would report for this input.
    pub fn raw_value(&self) -> &str {
        &self.text
    }

    pub(crate) fn reset(&mut self) {
        self.text = self.default_text.clone();
        self.checked = self.default_checked;
    }
}
