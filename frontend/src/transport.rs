//! `SettingsBackend` over the browser's fetch API.

use async_trait::async_trait;
use common::model::Settings;
use common::sync::{SettingsBackend, TransportError};
use gloo_net::http::{Request, Response};

#[derive(Clone, Debug, PartialEq)]
pub struct HttpSettingsBackend {
    url: String,
}

impl HttpSettingsBackend {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

fn network(err: gloo_net::Error) -> TransportError {
    TransportError::Network(err.to_string())
}

async fn status_error(response: Response) -> TransportError {
    TransportError::Status {
        status: response.status(),
        body: response.text().await.unwrap_or_default(),
    }
}

#[async_trait(?Send)]
impl SettingsBackend for HttpSettingsBackend {
    async fn fetch(&self) -> Result<Settings, TransportError> {
        let response = Request::get(&self.url).send().await.map_err(network)?;
        if !response.ok() {
            return Err(status_error(response).await);
        }
        let body = response.text().await.map_err(network)?;
        Ok(Settings::from_json_str(&body)?)
    }

    async fn store(&self, settings: &Settings) -> Result<(), TransportError> {
        let response = Request::put(&self.url)
            .json(settings)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        if response.ok() {
            Ok(())
        } else {
            Err(status_error(response).await)
        }
    }
}
