//! State machine driving the settings page.
//!
//! ```text
//! Idle -> Loading -> Ready <-> Validating -> Submitting -> Saved | Failed
//!                 \-> Failed
//! ```
//!
//! The transitions are split into `begin_*`/`finish_*` pairs so an event-driven
//! UI can issue the request itself and feed the response back later. `load`
//! and `submit` compose the pairs around a `SettingsBackend` for callers that
//! can simply await.
//!
//! There is no in-flight guard: a submit may start while an earlier one is
//! still pending. Every submit attempt takes a ticket, including ones that fail
//! validation or coercion, and only the response for the most recent ticket
//! updates the state. An older request finishing late cannot overwrite a newer
//! outcome, whether that outcome came from the device or from the form.

use log::{debug, info, warn};
use thiserror::Error;

use super::backend::{SettingsBackend, TransportError};
use crate::form::{
    read_snapshot, write_snapshot, FieldRegistry, SnapshotError, ValidationOutcome,
    ValidationRules, WriteReport,
};
use crate::model::Settings;

/// Status text shown after a successful save.
pub const STATUS_UPDATED: &str = "Settings Updated";
/// Status text shown when the device rejects or never receives a save.
pub const STATUS_UPDATE_FAILED: &str = "Settings Update Failed";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncState {
    #[default]
    Idle,
    Loading,
    Ready,
    Validating,
    Submitting,
    Saved,
    Failed,
}

/// Identifies one submission so its response can be matched up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubmitTicket(u64);

/// Result of starting a submit.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStep {
    /// Validation passed; `settings` must be sent and the response reported
    /// through `finish_submit` with `ticket`.
    Send { ticket: SubmitTicket, settings: Settings },
    /// Validation failed; nothing is sent.
    Invalid(ValidationOutcome),
    /// Some inputs hold values that do not match their declared type.
    Rejected(SnapshotError),
    /// The initial load has not completed yet.
    NotReady,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("settings are still loading")]
    NotReady,
    #[error("validation failed for: {}", .0.failed.join(", "))]
    Invalid(ValidationOutcome),
    #[error(transparent)]
    Coercion(SnapshotError),
    #[error(transparent)]
    Transport(TransportError),
    #[error("a newer submission superseded this one")]
    Superseded,
}

#[derive(Debug, Clone)]
pub struct SettingsSyncController {
    registry: FieldRegistry,
    rules: ValidationRules,
    state: SyncState,
    status: String,
    latest_ticket: u64,
}

impl SettingsSyncController {
    pub fn new(registry: FieldRegistry, rules: ValidationRules) -> Self {
        Self {
            registry,
            rules,
            state: SyncState::Idle,
            status: String::new(),
            latest_ticket: 0,
        }
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    /// Text for the status element.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Direct access for user edits.
    pub fn registry_mut(&mut self) -> &mut FieldRegistry {
        &mut self.registry
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    pub fn begin_load(&mut self) {
        self.state = SyncState::Loading;
    }

    /// Populates the form from a fetched payload.
    ///
    /// A failed fetch leaves the form exactly as it was.
    pub fn finish_load(
        &mut self,
        result: Result<Settings, TransportError>,
    ) -> Result<WriteReport, TransportError> {
        match result {
            Ok(settings) => {
                let report = write_snapshot(&mut self.registry, &settings);
                if !report.unknown_keys.is_empty() {
                    debug!("ignored unknown settings: {}", report.unknown_keys.join(", "));
                }
                self.state = SyncState::Ready;
                info!("loaded {} setting(s)", settings.len());
                Ok(report)
            }
            Err(err) => {
                warn!("failed to load settings: {}", err);
                self.state = SyncState::Failed;
                Err(err)
            }
        }
    }

    /// Validates and serializes the form.
    pub fn begin_submit(&mut self) -> SubmitStep {
        if self.state == SyncState::Loading {
            return SubmitStep::NotReady;
        }

        self.latest_ticket += 1;
        self.status.clear();
        self.state = SyncState::Validating;

        let outcome = self.rules.validate(&self.registry);
        if !outcome.passed() {
            debug!("validation failed for: {}", outcome.failed.join(", "));
            self.state = SyncState::Ready;
            return SubmitStep::Invalid(outcome);
        }

        match read_snapshot(&self.registry) {
            Ok(settings) => {
                self.state = SyncState::Submitting;
                SubmitStep::Send {
                    ticket: SubmitTicket(self.latest_ticket),
                    settings,
                }
            }
            Err(err) => {
                self.status = format!("Invalid value for: {}", err.field_names().join(", "));
                self.state = SyncState::Ready;
                SubmitStep::Rejected(err)
            }
        }
    }

    /// Records the response of a submission.
    ///
    /// Returns `false` when `ticket` is not the latest one; the response is
    /// then dropped.
    pub fn finish_submit(&mut self, ticket: SubmitTicket, result: Result<(), TransportError>) -> bool {
        if ticket.0 != self.latest_ticket {
            debug!("dropping response for superseded submission {}", ticket.0);
            return false;
        }
        match result {
            Ok(()) => {
                self.state = SyncState::Saved;
                self.status = STATUS_UPDATED.to_string();
            }
            Err(err) => {
                warn!("failed to save settings: {}", err);
                self.state = SyncState::Failed;
                self.status = STATUS_UPDATE_FAILED.to_string();
            }
        }
        true
    }

    /// `GET` the settings and write them onto the form.
    pub async fn load<B>(&mut self, backend: &B) -> Result<WriteReport, TransportError>
    where
        B: SettingsBackend + ?Sized,
    {
        self.begin_load();
        let result = backend.fetch().await;
        self.finish_load(result)
    }

    /// Validate, serialize and `PUT` the form.
    pub async fn submit<B>(&mut self, backend: &B) -> Result<(), SubmitError>
    where
        B: SettingsBackend + ?Sized,
    {
        let (ticket, settings) = match self.begin_submit() {
            SubmitStep::Send { ticket, settings } => (ticket, settings),
            SubmitStep::Invalid(outcome) => return Err(SubmitError::Invalid(outcome)),
            SubmitStep::Rejected(err) => return Err(SubmitError::Coercion(err)),
            SubmitStep::NotReady => return Err(SubmitError::NotReady),
        };

        let result = backend.store(&settings).await;
        let outcome = result.clone().map_err(SubmitError::Transport);
        if self.finish_submit(ticket, result) {
            outcome
        } else {
            Err(SubmitError::Superseded)
        }
    }
}
