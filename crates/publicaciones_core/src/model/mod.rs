//! Domain model for the academic-publications registry.
//!
//! # Responsibility
//! - Define the canonical records persisted by the repository layer.
//! - Provide `validate()` checks for identity fields before writes.
//!
//! # Invariants
//! - Identity fields (`rut`, journal `code`, publication `id` once assigned)
//!   are stable and never reused.
//! - Date-like fields are opaque strings; no format is enforced.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod journal;
pub mod person;
pub mod publication;

/// Validation failure for a write-path entity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required identity or display field was empty.
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { entity, field } => {
                write!(f, "{entity}.{field} must not be empty")
            }
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_non_empty(
    value: &str,
    entity: &'static str,
    field: &'static str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { entity, field });
    }
    Ok(())
}
