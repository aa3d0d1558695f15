//! Publications registry façade.
//!
//! # Responsibility
//! - Provide the single entry point for all registry reads and writes.
//! - Enforce the one-time demo-seed initialization invariant.
//! - Resolve a person's publications through the authorship join.
//!
//! # Invariants
//! - The lifecycle is `Uninitialized → Initialized`, terminal; the guard is
//!   an atomic compare-and-set so racing callers cannot double-seed.
//! - Every add commits independently; no multi-entity atomicity.
//! - List/find operations never fail on zero matches; they return empty
//!   collections.

use crate::model::journal::{ImpactRating, Journal, RankingIndex};
use crate::model::person::{Degree, Person};
use crate::model::publication::{Authorship, Publication, PublicationId};
use crate::repo::journal_repo::{JournalRepository, SqliteJournalRepository};
use crate::repo::person_repo::{PersonRepository, SqlitePersonRepository};
use crate::repo::publication_repo::{PublicationRepository, SqlitePublicationRepository};
use crate::repo::{RepoError, RepoResult};
use log::{debug, info};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Façade-level error for registry operations.
#[derive(Debug)]
pub enum ServiceError {
    /// `initialize()` was called on an already-initialized service.
    AlreadyInitialized,
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyInitialized => {
                write!(f, "the registry may be initialized only once per instance")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AlreadyInitialized => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Single entry point for all registry reads and writes.
///
/// Generic over the three repository contracts so tests can substitute
/// storage; `SqlitePublicationService::try_new` wires the SQLite
/// implementations over one shared connection.
pub struct PublicationService<P, B, J> {
    persons: P,
    publications: B,
    journals: J,
    initialized: AtomicBool,
}

/// Façade wired to the SQLite repositories over one connection.
pub type SqlitePublicationService<'conn> = PublicationService<
    SqlitePersonRepository<'conn>,
    SqlitePublicationRepository<'conn>,
    SqliteJournalRepository<'conn>,
>;

impl<'conn> SqlitePublicationService<'conn> {
    /// Builds the façade from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        Ok(Self::new(
            SqlitePersonRepository::try_new(conn)?,
            SqlitePublicationRepository::try_new(conn)?,
            SqliteJournalRepository::try_new(conn)?,
        ))
    }
}

impl<P, B, J> PublicationService<P, B, J>
where
    P: PersonRepository,
    B: PublicationRepository,
    J: JournalRepository,
{
    /// Creates an uninitialized façade over the given repositories.
    pub fn new(persons: P, publications: B, journals: J) -> Self {
        Self {
            persons,
            publications,
            journals,
            initialized: AtomicBool::new(false),
        }
    }

    pub fn add_person(&self, person: &Person) -> ServiceResult<()> {
        Ok(self.persons.add_person(person)?)
    }

    /// Inserts a publication and returns the identifier storage assigned.
    pub fn add_publication(&self, publication: &Publication) -> ServiceResult<PublicationId> {
        Ok(self.publications.add_publication(publication)?)
    }

    pub fn add_authorship(&self, authorship: &Authorship) -> ServiceResult<()> {
        Ok(self.publications.add_authorship(authorship)?)
    }

    pub fn add_journal(&self, journal: &Journal) -> ServiceResult<()> {
        Ok(self.journals.add_journal(journal)?)
    }

    pub fn add_index(&self, index: &RankingIndex) -> ServiceResult<()> {
        Ok(self.journals.add_index(index)?)
    }

    pub fn add_impact_rating(&self, rating: &ImpactRating) -> ServiceResult<()> {
        Ok(self.journals.add_impact_rating(rating)?)
    }

    pub fn add_degree(&self, degree: &Degree) -> ServiceResult<()> {
        Ok(self.persons.add_degree(degree)?)
    }

    /// Persons whose first name contains the needle, ordered by name.
    pub fn find_persons(&self, name_needle: &str) -> ServiceResult<Vec<Person>> {
        Ok(self.persons.find_persons(name_needle)?)
    }

    /// Publications whose title contains the needle, ordered by title.
    pub fn find_publications(&self, title_needle: &str) -> ServiceResult<Vec<Publication>> {
        Ok(self.publications.find_publications(title_needle)?)
    }

    /// Degrees whose stored rut contains the needle.
    ///
    /// Substring matching here is deliberate: partial-ID lookups are part of
    /// the contract, unlike the exact-rut `publications_by_author`.
    pub fn find_degrees(&self, rut_needle: &str) -> ServiceResult<Vec<Degree>> {
        Ok(self.persons.find_degrees(rut_needle)?)
    }

    /// First journal whose name contains the needle, in insertion order.
    pub fn find_journal_by_name(&self, name_needle: &str) -> ServiceResult<Option<Journal>> {
        Ok(self.journals.first_journal_by_name(name_needle)?)
    }

    /// First journal whose code contains the needle, in insertion order.
    pub fn find_journal_by_code(&self, code_needle: &str) -> ServiceResult<Option<Journal>> {
        Ok(self.journals.first_journal_by_code(code_needle)?)
    }

    pub fn list_persons(&self) -> ServiceResult<Vec<Person>> {
        Ok(self.persons.list_persons()?)
    }

    pub fn list_publications(&self) -> ServiceResult<Vec<Publication>> {
        Ok(self.publications.list_publications()?)
    }

    pub fn list_authorships(&self) -> ServiceResult<Vec<Authorship>> {
        Ok(self.publications.list_authorships()?)
    }

    pub fn list_degrees(&self) -> ServiceResult<Vec<Degree>> {
        Ok(self.persons.list_degrees()?)
    }

    pub fn list_journals(&self) -> ServiceResult<Vec<Journal>> {
        Ok(self.journals.list_journals()?)
    }

    pub fn list_indices(&self) -> ServiceResult<Vec<RankingIndex>> {
        Ok(self.journals.list_indices()?)
    }

    pub fn list_impact_ratings(&self) -> ServiceResult<Vec<ImpactRating>> {
        Ok(self.journals.list_impact_ratings()?)
    }

    /// Resolves the publications a person authored.
    ///
    /// Scans authorships for exactly this rut in insertion order, then looks
    /// each referenced publication up by id. A dangling reference yields a
    /// `None` slot instead of failing the whole call, so callers must
    /// tolerate gaps. Zero authorships yield an empty vector.
    pub fn publications_by_author(
        &self,
        rut: &str,
    ) -> ServiceResult<Vec<Option<Publication>>> {
        let rows = self.publications.authorships_by_rut(rut)?;

        let mut resolved = Vec::with_capacity(rows.len());
        for row in &rows {
            resolved.push(self.publications.get_publication(row.publication_id)?);
        }

        debug!(
            "event=publications_by_author module=service status=ok rut={rut} authorships={} resolved={}",
            rows.len(),
            resolved.iter().filter(|slot| slot.is_some()).count()
        );
        Ok(resolved)
    }

    /// Seeds the registry with demo data, at most once per instance.
    ///
    /// Seeds four persons, three publications each linked to one of three
    /// journals, and five degrees. A second call fails with
    /// `AlreadyInitialized` and touches no data.
    pub fn initialize(&self) -> ServiceResult<()> {
        if self
            .initialized
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(ServiceError::AlreadyInitialized);
        }

        info!("event=seed module=service status=start");
        self.seed_demo_data()?;
        info!("event=seed module=service status=ok persons=4 publications=3 journals=3 degrees=5");
        Ok(())
    }

    fn seed_demo_data(&self) -> ServiceResult<()> {
        let persons = [
            Person::new("11.111.111-1", "Lufe", "Abarca"),
            Person::new("22.222.222-2", "Tomas", "Saldivia"),
            Person::new("33.333.333-3", "Franco", "Aravena"),
            Person::new("44.444.444-4", "Rodrigo", "Contreras"),
        ];
        for person in &persons {
            self.add_person(person)?;
            debug!(
                "event=seed_person module=service rut={} name={}",
                person.rut,
                person.full_name()
            );
        }

        let journals = [
            Journal::new("RCHC", "Revista Chilena de Computacion", "0717-2437"),
            Journal::new("JIST", "Journal of Information Systems and Technology", "1134-9088"),
            Journal::new("ACTI", "Acta de Ciencia y Tecnologia Informatica", "2215-3470"),
        ];
        for journal in &journals {
            self.add_journal(journal)?;
        }

        let titles = [
            "Modelo de clasificacion de revistas indexadas",
            "Analisis de lineas investigativas regionales",
            "Sistema de registro de publicaciones academicas",
        ];
        for (title, journal) in titles.iter().zip(&journals) {
            let mut publication = Publication::new(*title);
            publication.started_on = "2019-03-01".to_string();
            publication.finished_on = "2020-11-30".to_string();
            publication.research_line = "Sistemas de informacion".to_string();
            publication.development_area = "Ingenieria de software".to_string();
            publication.journal_code = Some(journal.code.clone());
            let id = self.add_publication(&publication)?;
            debug!("event=seed_publication module=service id={id} title={title}");
        }

        let degrees = [
            Degree::new("Licenciado en Ciencias de la Ingenieria", "2010-12-15", "11.111.111-1"),
            Degree::new("Ingeniero Civil en Informatica", "2012-06-20", "11.111.111-1"),
            Degree::new("Magister en Ingenieria Informatica", "2015-08-01", "22.222.222-2"),
            Degree::new("Doctor en Ciencias de la Computacion", "2019-03-10", "33.333.333-3"),
            Degree::new("Licenciado en Ciencias de la Ingenieria", "2011-12-15", "44.444.444-4"),
        ];
        for degree in &degrees {
            self.add_degree(degree)?;
        }

        Ok(())
    }
}
