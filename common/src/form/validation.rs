//! Declarative validation rules and their pass/fail verdict.
//!
//! Rules are declared per field name in the same shape the page script uses:
//! `{"rules": {"device_name": {"required": true}}}`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::registry::FieldRegistry;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationRules {
    #[serde(default)]
    pub rules: IndexMap<String, Rule>,
}

/// Verdict of a validation pass. Lists the failing field names in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub failed: Vec<String>,
}

impl ValidationOutcome {
    pub fn passed(&self) -> bool {
        self.failed.is_empty()
    }
}

impl ValidationRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.rules.insert(name.into(), Rule { required: true });
        self
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.rules.get(name).is_some_and(|r| r.required)
    }

    /// A required text input must not be blank. A required group of checkable
    /// inputs needs at least one checked. Rules for names absent from the form
    /// are ignored.
    pub fn validate(&self, registry: &FieldRegistry) -> ValidationOutcome {
        let failed = self
            .rules
            .iter()
            .filter(|(_, rule)| rule.required)
            .filter(|(name, _)| {
                let mut fields = registry.by_name(name).peekable();
                if fields.peek().is_none() {
                    return false;
                }
                !fields.any(|f| {
                    if f.kind.is_checkable() {
                        f.checked
                    } else {
                        !f.text.trim().is_empty()
                    }
                })
            })
            .map(|(name, _)| name.clone())
            .collect();
        ValidationOutcome { failed }
    }
}
