//! Core domain logic for the academic-publications registry.
//! This crate is the single source of truth for registry invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::journal::{ImpactRating, Journal, RankingIndex};
pub use model::person::{Degree, Person};
pub use model::publication::{Authorship, Publication, PublicationId};
pub use model::ValidationError;
pub use repo::journal_repo::{JournalRepository, SqliteJournalRepository};
pub use repo::person_repo::{PersonRepository, SqlitePersonRepository};
pub use repo::publication_repo::{PublicationRepository, SqlitePublicationRepository};
pub use repo::{RepoError, RepoResult};
pub use service::publication_service::{
    PublicationService, ServiceError, ServiceResult, SqlitePublicationService,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
