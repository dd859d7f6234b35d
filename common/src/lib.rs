//! Shared core of the device settings page.
//!
//! - `model`: the wire payload exchanged with the device (`Settings`, `SettingValue`).
//! - `form`: the typed form representation and the conversions between the form
//!   and the payload (coercion, snapshot reader and writer, validation rules).
//! - `sync`: the load/save lifecycle that ties the form to the device backend.

pub mod form;
pub mod model;
pub mod sync;
