//! Journal, indexing body and impact rating records.
//!
//! # Responsibility
//! - Define the publication venue record (journal).
//! - Define ranking bodies and the quartile/impact classifications they
//!   assign to journals.
//!
//! # Invariants
//! - `Journal.code` is the primary key and immutable once stored.
//! - `ImpactRating.journal_name` links to a journal by name, assumed unique
//!   among journals; the link is not enforced by storage.

use super::{require_non_empty, ValidationError};
use serde::{Deserialize, Serialize};

/// A publication venue, keyed by a short string code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    pub code: String,
    pub name: String,
    pub issn: String,
}

impl Journal {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        issn: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            issn: issn.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty(&self.code, "journal", "code")?;
        require_non_empty(&self.name, "journal", "name")?;
        Ok(())
    }
}

/// A named indexing/ranking body (e.g. an abstracting service).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingIndex {
    pub id: i64,
    pub name: String,
}

impl RankingIndex {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty(&self.name, "ranking_index", "name")?;
        Ok(())
    }
}

/// Quartile/impact-factor classification of a journal by an index at a
/// point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactRating {
    pub id: i64,
    /// Quartile label, e.g. `Q1`.
    pub quartile: String,
    /// Opaque date string; not parsed or validated.
    pub rated_on: String,
    /// Impact factor kept as the string reported by the index.
    pub jif: String,
    /// Reference to `RankingIndex.id`; may dangle.
    pub index_id: i64,
    /// Journal name, assumed unique among journals.
    pub journal_name: String,
}

impl ImpactRating {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty(&self.quartile, "impact_rating", "quartile")?;
        require_non_empty(&self.journal_name, "impact_rating", "journal_name")?;
        Ok(())
    }
}
