//! Typed form representation of the settings page and its conversions to and
//! from the settings payload.

pub mod coercion;
pub mod field;
pub mod reader;
pub mod registry;
pub mod validation;
pub mod writer;

pub use coercion::{coerce_in, coerce_out, CoercionAnomaly, DisplayValue};
pub use field::{DeclaredType, FieldDescriptor, FieldKind, DEFAULT_CHECKABLE_VALUE};
pub use reader::{read_snapshot, FieldAnomaly, SnapshotError};
pub use registry::FieldRegistry;
pub use validation::{Rule, ValidationOutcome, ValidationRules};
pub use writer::{write_snapshot, WriteReport};
