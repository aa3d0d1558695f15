//! Person and degree records.
//!
//! # Responsibility
//! - Define the author identity record keyed by rut (national ID).
//! - Define academic degree records attached to a person by rut.
//!
//! # Invariants
//! - `rut` identifies exactly one person and is immutable once stored.
//! - Degrees carry no uniqueness constraint; a person may hold several
//!   degrees with the same name.

use super::{require_non_empty, ValidationError};
use serde::{Deserialize, Serialize};

/// An author identified by rut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// National ID, the primary key.
    pub rut: String,
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(
        rut: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            rut: rut.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Checks identity fields before persistence.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty(&self.rut, "person", "rut")?;
        require_non_empty(&self.first_name, "person", "first_name")?;
        Ok(())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An academic credential linked to a person by rut.
///
/// The stored rut is matched by substring in lookups, so a degree row can
/// outlive or precede its person row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degree {
    pub name: String,
    /// Opaque date string; not parsed or validated.
    pub awarded_on: String,
    pub rut: String,
}

impl Degree {
    pub fn new(
        name: impl Into<String>,
        awarded_on: impl Into<String>,
        rut: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            awarded_on: awarded_on.into(),
            rut: rut.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty(&self.name, "degree", "name")?;
        require_non_empty(&self.rut, "degree", "rut")?;
        Ok(())
    }
}
