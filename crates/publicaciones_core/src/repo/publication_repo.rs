//! Publication/authorship repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide append-and-query APIs over `publications` and `authorships`.
//! - Assign publication identifiers on insert when the caller left them out.
//!
//! # Invariants
//! - Write paths call `validate()` before SQL mutations.
//! - The `(rut, publication_id)` composite key rejects duplicate authorship
//!   of one publication by one person.
//! - `authorships_by_rut` matches the rut exactly (not by substring) and
//!   returns rows in insertion order.

use crate::model::publication::{Authorship, Publication, PublicationId};
use crate::repo::{collect_rows, ensure_schema_ready, map_insert_error, RepoResult};
use rusqlite::{params, Connection, Row};

const PUBLICATION_SELECT_SQL: &str = "SELECT
    id,
    title,
    started_on,
    finished_on,
    abstract_text,
    research_line,
    development_area,
    journal_code
FROM publications";

const AUTHORSHIP_SELECT_SQL: &str =
    "SELECT rut, publication_id, recorded_on FROM authorships";

/// Repository interface for publication and authorship operations.
pub trait PublicationRepository {
    /// Inserts one publication and returns its identifier.
    ///
    /// When `publication.id` is `None` the storage assigns the next id;
    /// a caller-provided id fails with `Duplicate` when already taken.
    fn add_publication(&self, publication: &Publication) -> RepoResult<PublicationId>;
    /// Lists publications whose title contains `needle`, ordered by title.
    fn find_publications(&self, needle: &str) -> RepoResult<Vec<Publication>>;
    /// Gets one publication by id; `None` when the id is unknown.
    fn get_publication(&self, id: PublicationId) -> RepoResult<Option<Publication>>;
    /// Returns the full publication table, unordered.
    fn list_publications(&self) -> RepoResult<Vec<Publication>>;
    /// Inserts one authorship row; fails with `Duplicate` on a repeated
    /// `(rut, publication_id)` pair.
    fn add_authorship(&self, authorship: &Authorship) -> RepoResult<()>;
    /// Lists authorships for exactly this rut, in insertion order.
    fn authorships_by_rut(&self, rut: &str) -> RepoResult<Vec<Authorship>>;
    /// Returns the full authorship table, unordered.
    fn list_authorships(&self) -> RepoResult<Vec<Authorship>>;
}

/// SQLite-backed publication/authorship repository.
pub struct SqlitePublicationRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePublicationRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn, &["publications", "authorships"])?;
        Ok(Self { conn })
    }
}

impl PublicationRepository for SqlitePublicationRepository<'_> {
    fn add_publication(&self, publication: &Publication) -> RepoResult<PublicationId> {
        publication.validate()?;

        self.conn
            .execute(
                "INSERT INTO publications (
                    id,
                    title,
                    started_on,
                    finished_on,
                    abstract_text,
                    research_line,
                    development_area,
                    journal_code
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
                params![
                    publication.id,
                    publication.title.as_str(),
                    publication.started_on.as_str(),
                    publication.finished_on.as_str(),
                    publication.abstract_text.as_str(),
                    publication.research_line.as_str(),
                    publication.development_area.as_str(),
                    publication.journal_code.as_deref(),
                ],
            )
            .map_err(|err| {
                map_insert_error(err, "publication", publication.title.as_str())
            })?;

        match publication.id {
            Some(id) => Ok(id),
            None => Ok(self.conn.last_insert_rowid()),
        }
    }

    fn find_publications(&self, needle: &str) -> RepoResult<Vec<Publication>> {
        let mut stmt = self.conn.prepare(&format!(
            "{PUBLICATION_SELECT_SQL}
             WHERE instr(title, ?1) > 0
             ORDER BY title ASC;"
        ))?;
        let items = collect_rows(stmt.query([needle])?, parse_publication_row);
        items
    }

    fn get_publication(&self, id: PublicationId) -> RepoResult<Option<Publication>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PUBLICATION_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_publication_row(row)?));
        }
        Ok(None)
    }

    fn list_publications(&self) -> RepoResult<Vec<Publication>> {
        let mut stmt = self.conn.prepare(&format!("{PUBLICATION_SELECT_SQL};"))?;
        let items = collect_rows(stmt.query([])?, parse_publication_row);
        items
    }

    fn add_authorship(&self, authorship: &Authorship) -> RepoResult<()> {
        authorship.validate()?;

        self.conn
            .execute(
                "INSERT INTO authorships (rut, publication_id, recorded_on)
                 VALUES (?1, ?2, ?3);",
                params![
                    authorship.rut.as_str(),
                    authorship.publication_id,
                    authorship.recorded_on.as_str(),
                ],
            )
            .map_err(|err| {
                map_insert_error(
                    err,
                    "authorship",
                    format!("({}, {})", authorship.rut, authorship.publication_id),
                )
            })?;

        Ok(())
    }

    fn authorships_by_rut(&self, rut: &str) -> RepoResult<Vec<Authorship>> {
        let mut stmt = self.conn.prepare(&format!(
            "{AUTHORSHIP_SELECT_SQL}
             WHERE rut = ?1
             ORDER BY rowid ASC;"
        ))?;
        let items = collect_rows(stmt.query([rut])?, parse_authorship_row);
        items
    }

    fn list_authorships(&self) -> RepoResult<Vec<Authorship>> {
        let mut stmt = self.conn.prepare(&format!("{AUTHORSHIP_SELECT_SQL};"))?;
        let items = collect_rows(stmt.query([])?, parse_authorship_row);
        items
    }
}

fn parse_publication_row(row: &Row<'_>) -> RepoResult<Publication> {
    Ok(Publication {
        id: Some(row.get("id")?),
        title: row.get("title")?,
        started_on: row.get("started_on")?,
        finished_on: row.get("finished_on")?,
        abstract_text: row.get("abstract_text")?,
        research_line: row.get("research_line")?,
        development_area: row.get("development_area")?,
        journal_code: row.get("journal_code")?,
    })
}

fn parse_authorship_row(row: &Row<'_>) -> RepoResult<Authorship> {
    Ok(Authorship {
        rut: row.get("rut")?,
        publication_id: row.get("publication_id")?,
        recorded_on: row.get("recorded_on")?,
    })
}
