//! Journal/index/impact-rating repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide append-and-query APIs over `journals`, `ranking_indices` and
//!   `impact_ratings` storage.
//!
//! # Invariants
//! - Write paths call `validate()` before SQL mutations.
//! - Single-result journal lookups return the first match in insertion
//!   order, or `None`; they never fail on zero matches.

use crate::model::journal::{ImpactRating, Journal, RankingIndex};
use crate::repo::{collect_rows, ensure_schema_ready, map_insert_error, RepoResult};
use rusqlite::{params, Connection, Row};

const JOURNAL_SELECT_SQL: &str = "SELECT code, name, issn FROM journals";

/// Repository interface for journals, ranking indices and impact ratings.
pub trait JournalRepository {
    /// Inserts one journal; fails with `Duplicate` when the code exists.
    fn add_journal(&self, journal: &Journal) -> RepoResult<()>;
    /// First journal whose name contains `needle`, in insertion order.
    fn first_journal_by_name(&self, needle: &str) -> RepoResult<Option<Journal>>;
    /// First journal whose code contains `needle`, in insertion order.
    fn first_journal_by_code(&self, needle: &str) -> RepoResult<Option<Journal>>;
    /// Returns the full journal table, unordered.
    fn list_journals(&self) -> RepoResult<Vec<Journal>>;
    /// Inserts one ranking index; fails with `Duplicate` when the id exists.
    fn add_index(&self, index: &RankingIndex) -> RepoResult<()>;
    /// Returns the full ranking-index table, unordered.
    fn list_indices(&self) -> RepoResult<Vec<RankingIndex>>;
    /// Inserts one impact rating; fails with `Duplicate` when the id exists.
    fn add_impact_rating(&self, rating: &ImpactRating) -> RepoResult<()>;
    /// Returns the full impact-rating table, unordered.
    fn list_impact_ratings(&self) -> RepoResult<Vec<ImpactRating>>;
}

/// SQLite-backed journal/index/rating repository.
pub struct SqliteJournalRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteJournalRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn, &["journals", "ranking_indices", "impact_ratings"])?;
        Ok(Self { conn })
    }

    fn first_journal_where(&self, column: &str, needle: &str) -> RepoResult<Option<Journal>> {
        let mut stmt = self.conn.prepare(&format!(
            "{JOURNAL_SELECT_SQL}
             WHERE instr({column}, ?1) > 0
             ORDER BY rowid ASC
             LIMIT 1;"
        ))?;
        let mut rows = stmt.query([needle])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_journal_row(row)?));
        }
        Ok(None)
    }
}

impl JournalRepository for SqliteJournalRepository<'_> {
    fn add_journal(&self, journal: &Journal) -> RepoResult<()> {
        journal.validate()?;

        self.conn
            .execute(
                "INSERT INTO journals (code, name, issn) VALUES (?1, ?2, ?3);",
                params![
                    journal.code.as_str(),
                    journal.name.as_str(),
                    journal.issn.as_str(),
                ],
            )
            .map_err(|err| map_insert_error(err, "journal", journal.code.as_str()))?;

        Ok(())
    }

    fn first_journal_by_name(&self, needle: &str) -> RepoResult<Option<Journal>> {
        self.first_journal_where("name", needle)
    }

    fn first_journal_by_code(&self, needle: &str) -> RepoResult<Option<Journal>> {
        self.first_journal_where("code", needle)
    }

    fn list_journals(&self) -> RepoResult<Vec<Journal>> {
        let mut stmt = self.conn.prepare(&format!("{JOURNAL_SELECT_SQL};"))?;
        let items = collect_rows(stmt.query([])?, parse_journal_row);
        items
    }

    fn add_index(&self, index: &RankingIndex) -> RepoResult<()> {
        index.validate()?;

        self.conn
            .execute(
                "INSERT INTO ranking_indices (id, name) VALUES (?1, ?2);",
                params![index.id, index.name.as_str()],
            )
            .map_err(|err| map_insert_error(err, "ranking_index", index.id.to_string()))?;

        Ok(())
    }

    fn list_indices(&self) -> RepoResult<Vec<RankingIndex>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM ranking_indices;")?;
        let items = collect_rows(stmt.query([])?, parse_index_row);
        items
    }

    fn add_impact_rating(&self, rating: &ImpactRating) -> RepoResult<()> {
        rating.validate()?;

        self.conn
            .execute(
                "INSERT INTO impact_ratings (
                    id,
                    quartile,
                    rated_on,
                    jif,
                    index_id,
                    journal_name
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
                params![
                    rating.id,
                    rating.quartile.as_str(),
                    rating.rated_on.as_str(),
                    rating.jif.as_str(),
                    rating.index_id,
                    rating.journal_name.as_str(),
                ],
            )
            .map_err(|err| map_insert_error(err, "impact_rating", rating.id.to_string()))?;

        Ok(())
    }

    fn list_impact_ratings(&self) -> RepoResult<Vec<ImpactRating>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, quartile, rated_on, jif, index_id, journal_name
             FROM impact_ratings;",
        )?;
        let items = collect_rows(stmt.query([])?, parse_rating_row);
        items
    }
}

fn parse_journal_row(row: &Row<'_>) -> RepoResult<Journal> {
    Ok(Journal {
        code: row.get("code")?,
        name: row.get("name")?,
        issn: row.get("issn")?,
    })
}

fn parse_index_row(row: &Row<'_>) -> RepoResult<RankingIndex> {
    Ok(RankingIndex {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}

fn parse_rating_row(row: &Row<'_>) -> RepoResult<ImpactRating> {
    Ok(ImpactRating {
        id: row.get("id")?,
        quartile: row.get("quartile")?,
        rated_on: row.get("rated_on")?,
        jif: row.get("jif")?,
        index_id: row.get("index_id")?,
        journal_name: row.get("journal_name")?,
    })
}
