//! # Settings Service Module
//!
//! REST endpoint the settings page talks to. Everything lives under
//! `/settings` and works on the shared `DeviceState`.
//!
//! ## Sub-modules:
//! - `get`: reports the readable parameters as a flat JSON object.
//! - `put`: applies a JSON object to the writable parameters and persists them.
//! - `reset`: clears every parameter to the empty value of its type.

mod get;
mod put;
mod reset;

use actix_web::web::{delete, get, put, scope};
use actix_web::Scope;

/// The base path for the settings endpoint.
const API_PATH: &str = "/settings";

/// Configures and returns the Actix `Scope` for the settings routes.
///
/// # Registered Routes:
///
/// *   **`GET /settings`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns `200 OK` with a JSON object mapping every
///       parameter that is not write-only to its current value.
///
/// *   **`PUT /settings`**:
///     - **Handler**: `put::process`
///     - **Description**: Expects a JSON object. Each writable parameter whose key
///       is present with a value of the right type is updated; other keys are
///       ignored. The result is persisted and `204 No Content` is returned. A body
///       that is not a JSON object gets `400 Bad Request`.
///
/// *   **`DELETE /settings`**:
///     - **Handler**: `reset::process`
///     - **Description**: Clears every writable parameter to the empty value of
///       its type (`""`, `0`, `false`), persists, and returns the new readable
///       values. Read-only parameters such as the firmware version are kept.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::process))
        .route("", put().to(put::process))
        .route("", delete().to(reset::process))
}
