//! Load and save lifecycle of the settings page.

pub mod backend;
pub mod controller;

pub use backend::{SettingsBackend, TransportError, SETTINGS_PATH};
pub use controller::{
    SettingsSyncController, SubmitError, SubmitStep, SubmitTicket, SyncState,
    STATUS_UPDATED, STATUS_UPDATE_FAILED,
};
