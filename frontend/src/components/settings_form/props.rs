//! Defines the properties for the `SettingsForm` component.

use common::sync::SETTINGS_PATH;
use yew::prelude::*;

/// Properties for the `SettingsForm` component.
#[derive(Properties, PartialEq, Clone)]
pub struct SettingsFormProps {
    /// URL of the device settings endpoint, used for both the initial `GET`
    /// and every `PUT`. Read once when the component is created.
    #[prop_or(AttrValue::Static(SETTINGS_PATH))]
    pub endpoint: AttrValue,
}
