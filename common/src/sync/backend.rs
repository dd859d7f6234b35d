use async_trait::async_trait;
use thiserror::Error;

use crate::model::Settings;

/// Path of the device settings endpoint, for both `GET` and `PUT`.
pub const SETTINGS_PATH: &str = "/settings";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed settings payload: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode(err.to_string())
    }
}

/// The device side of the settings page: one call per request.
///
/// Futures are not required to be `Send` so browser implementations can hold
/// JS handles across awaits.
#[async_trait(?Send)]
pub trait SettingsBackend {
    /// `GET /settings`.
    async fn fetch(&self) -> Result<Settings, TransportError>;

    /// `PUT /settings` with a JSON body.
    async fn store(&self, settings: &Settings) -> Result<(), TransportError>;
}
