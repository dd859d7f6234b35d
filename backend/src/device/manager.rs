//! The set of parameters a device exposes through `/settings`.

use common::model::Settings;
use serde_json::{Map, Value};

use super::parameter::ConfigParameter;

#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    parameters: Vec<ConfigParameter>,
}

impl ConfigManager {
    pub fn new(parameters: impl IntoIterator<Item = ConfigParameter>) -> Self {
        Self {
            parameters: parameters.into_iter().collect(),
        }
    }

    #[cfg(test)]
    pub fn add(&mut self, parameter: ConfigParameter) {
        self.parameters.push(parameter);
    }

    pub fn get(&self, name: &str) -> Option<&ConfigParameter> {
        self.parameters.iter().find(|p| p.name() == name)
    }

    /// Payload for `GET /settings`: every parameter that is not write-only.
    pub fn to_settings(&self) -> Settings {
        self.parameters
            .iter()
            .filter(|p| p.mode().readable())
            .map(|p| (p.name().to_string(), p.value().clone()))
            .collect()
    }

    /// Applies a `PUT /settings` body to every parameter that is not read-only.
    ///
    /// Returns the names that were updated; absent and mistyped keys are skipped.
    pub fn apply(&mut self, body: &Map<String, Value>) -> Vec<String> {
        self.parameters
            .iter_mut()
            .filter(|p| p.mode().writable())
            .filter_map(|p| p.from_json(body).then(|| p.name().to_string()))
            .collect()
    }

    /// Loads persisted values into the writable parameters. Read-only ones
    /// describe the running device and keep their built-in value.
    pub fn restore(&mut self, values: &Map<String, Value>) {
        for parameter in self.parameters.iter_mut().filter(|p| p.mode().writable()) {
            parameter.from_json(values);
        }
    }

    /// Every writable parameter's value, as persisted.
    pub fn snapshot(&self) -> Map<String, Value> {
        self.parameters
            .iter()
            .filter(|p| p.mode().writable())
            .map(|p| (p.name().to_string(), p.to_json()))
            .collect()
    }

    /// Resets every writable parameter to its type default.
    pub fn clear(&mut self) {
        self.parameters
            .iter_mut()
            .filter(|p| p.mode().writable())
            .for_each(ConfigParameter::clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::parameter::ParameterMode;
    use common::model::SettingValue;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn manager() -> ConfigManager {
        ConfigManager::new([
            ConfigParameter::text("device_name", 32).with_value(json!("Gate1")),
            ConfigParameter::text("firmware", 16)
                .with_mode(ParameterMode::Get)
                .with_value(json!("0.1")),
            ConfigParameter::text("api_token", 64).with_mode(ParameterMode::Set),
            ConfigParameter::number("inching_delay").with_value(json!(5)),
        ])
    }

    #[test]
    fn get_hides_write_only_parameters() {
        let settings = manager().to_settings();
        assert_eq!(
            settings.keys().collect::<Vec<_>>(),
            vec!["device_name", "firmware", "inching_delay"]
        );
    }

    #[test]
    fn put_skips_read_only_and_mistyped_values() {
        let mut manager = manager();
        let body = json!({
            "device_name": "Gate2",
            "firmware": "9.9",
            "api_token": "secret",
            "inching_delay": "fast",
            "unknown": 1
        });

        let updated = manager.apply(body.as_object().unwrap());

        assert_eq!(updated, vec!["device_name".to_string(), "api_token".to_string()]);
        assert_eq!(manager.get("firmware").unwrap().value(), &SettingValue::from("0.1"));
        assert_eq!(manager.get("inching_delay").unwrap().value(), &SettingValue::Number(5.0));
    }

    #[test]
    fn restore_keeps_read_only_values() {
        let mut manager = manager();
        manager.restore(
            json!({"firmware": "1.0", "device_name": "Restored", "api_token": "t0k"})
                .as_object()
                .unwrap(),
        );
        assert_eq!(manager.get("firmware").unwrap().value(), &SettingValue::from("0.1"));
        assert_eq!(manager.snapshot()["device_name"], json!("Restored"));
        assert_eq!(manager.snapshot()["api_token"], json!("t0k"));
    }

    #[test]
    fn snapshot_holds_writable_parameters_only() {
        let snapshot = manager().snapshot();
        assert_eq!(
            snapshot.keys().collect::<Vec<_>>(),
            vec!["device_name", "api_token", "inching_delay"]
        );
    }

    #[test]
    fn clear_resets_writable_parameters() {
        let mut manager = manager();
        manager.clear();
        assert_eq!(manager.snapshot()["inching_delay"], json!(0));
        assert_eq!(manager.snapshot()["device_name"], json!(""));
        assert_eq!(manager.get("firmware").unwrap().value(), &SettingValue::from("0.1"));
    }
}
