pub mod setting_value;
pub mod settings;

pub use setting_value::{format_number, SettingValue};
pub use settings::Settings;
