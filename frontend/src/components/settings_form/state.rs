//! Component state for the settings form.
//!
//! The form's inputs are not looked up in the DOM: the controller owns a
//! `FieldRegistry` holding every input's live value, the view renders from it,
//! and input events write back into it.

use std::rc::Rc;

use common::sync::SettingsSyncController;

use crate::schema::{device_registry, device_rules};
use crate::transport::HttpSettingsBackend;

pub struct SettingsForm {
    /// Load/save state machine, including the form's field registry.
    pub controller: SettingsSyncController,

    /// Label for each input, indexed like the registry's fields.
    pub labels: Vec<String>,

    /// Required fields that failed the last validation pass; highlighted in the view.
    pub invalid: Vec<String>,

    pub backend: Rc<HttpSettingsBackend>,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl SettingsForm {
    pub fn new(endpoint: &str) -> Self {
        let (labels, registry) = device_registry();
        Self {
            controller: SettingsSyncController::new(registry, device_rules()),
            labels,
            invalid: Vec::new(),
            backend: Rc::new(HttpSettingsBackend::new(endpoint)),
            loaded: false,
        }
    }

    pub fn label(&self, index: usize) -> &str {
        self.labels
            .get(index)
            .map(String::as_str)
            .or_else(|| self.controller.registry().field(index).map(|f| f.name.as_str()))
            .unwrap_or_default()
    }

    /// Re-runs validation once a failure is on screen, so highlights clear as
    /// soon as the user fixes a field.
    pub fn revalidate(&mut self) {
        if !self.invalid.is_empty() {
            self.invalid = self.controller.rules().validate(self.controller.registry()).failed;
        }
    }
}
