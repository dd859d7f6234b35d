//! Shared state of the settings endpoint.
//!
//! One `DeviceState` is created in `main.rs` and cloned into every Actix worker
//! as `web::Data`. Handlers read through the lock for `GET` and take the write
//! lock for `PUT`, persisting while still holding it so stored and served
//! values never diverge.

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::RwLock;

use super::manager::ConfigManager;
use super::store::{SettingsStore, StoreError};

#[derive(Clone)]
pub struct DeviceState {
    pub manager: Arc<RwLock<ConfigManager>>,
    pub store: SettingsStore,
}

impl DeviceState {
    /// Builds the state, overlaying whatever the store already holds.
    ///
    /// An unreadable store is logged and the factory values are served.
    pub fn restore(mut manager: ConfigManager, store: SettingsStore) -> Self {
        match store.load() {
            Ok(values) if !values.is_empty() => {
                manager.restore(&values);
                info!("restored {} stored setting(s)", values.len());
            }
            Ok(_) => info!("no stored settings, using factory values"),
            Err(err) => warn!("could not read stored settings: {}", err),
        }
        Self {
            manager: Arc::new(RwLock::new(manager)),
            store,
        }
    }

    pub fn persist(&self, manager: &ConfigManager) -> Result<(), StoreError> {
        self.store.save(&manager.snapshot())
    }
}
