//! Publication and authorship records.
//!
//! # Responsibility
//! - Define the publication record and its storage-assigned identity.
//! - Define the authorship join linking a person to a publication.
//!
//! # Invariants
//! - `Publication.id` is unique and immutable once assigned by storage.
//! - An `(rut, publication_id)` authorship pair exists at most once.
//! - `Authorship.publication_id` may dangle; readers must resolve it
//!   leniently instead of failing.

use super::{require_non_empty, ValidationError};
use serde::{Deserialize, Serialize};

/// Storage-assigned publication identifier.
pub type PublicationId = i64;

/// A recorded academic publication.
///
/// Non-title fields are plain descriptive text filled by direct field
/// assignment before the save; none of them is interpreted by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// `None` until storage assigns an id on insert.
    pub id: Option<PublicationId>,
    pub title: String,
    /// Opaque date string: when writing began.
    pub started_on: String,
    /// Opaque date string: when the work was published and indexed.
    pub finished_on: String,
    pub abstract_text: String,
    pub research_line: String,
    pub development_area: String,
    /// Optional reference to `Journal.code`; may dangle.
    pub journal_code: Option<String>,
}

impl Publication {
    /// Creates a publication with the given title and empty descriptive
    /// fields, ready for direct field assignment.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            started_on: String::new(),
            finished_on: String::new(),
            abstract_text: String::new(),
            research_line: String::new(),
            development_area: String::new(),
            journal_code: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty(&self.title, "publication", "title")?;
        Ok(())
    }
}

/// Join record: a person authored a publication on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorship {
    pub rut: String,
    pub publication_id: PublicationId,
    /// Opaque date string; not parsed or validated.
    pub recorded_on: String,
}

impl Authorship {
    pub fn new(
        rut: impl Into<String>,
        publication_id: PublicationId,
        recorded_on: impl Into<String>,
    ) -> Self {
        Self {
            rut: rut.into(),
            publication_id,
            recorded_on: recorded_on.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty(&self.rut, "authorship", "rut")?;
        Ok(())
    }
}
