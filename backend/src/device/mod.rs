//! Device side of the settings page: the parameters, their persistence and
//! the shared state handed to the HTTP handlers.

pub mod manager;
pub mod parameter;
pub mod state;
pub mod store;

use parameter::{ConfigParameter, ParameterMode};
use serde_json::json;

/// Length of the device name buffer, terminator included.
pub const DEVICE_NAME_CAPACITY: usize = 32;

pub const FIRMWARE_VERSION: &str = "firmware_version";

/// Parameters of the gate controller, with their factory values. The firmware
/// version is reported but never written.
pub fn default_parameters() -> Vec<ConfigParameter> {
    vec![
        ConfigParameter::text("device_name", DEVICE_NAME_CAPACITY).with_value(json!("Gate1")),
        ConfigParameter::number("inching_delay").with_value(json!(5)),
        ConfigParameter::boolean("led").with_value(json!(true)),
        ConfigParameter::text(FIRMWARE_VERSION, 16)
            .with_mode(ParameterMode::Get)
            .with_value(json!(env!("CARGO_PKG_VERSION"))),
    ]
}
