//! Person/degree repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide append-and-query APIs over `persons` and `degrees` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `validate()` before SQL mutations.
//! - `find_persons` matches case-sensitive substrings of `first_name` and
//!   orders results by `first_name` ascending.
//! - `find_degrees` matches substrings of the stored rut, tolerating
//!   partial-ID lookups on purpose.

use crate::model::person::{Degree, Person};
use crate::repo::{collect_rows, ensure_schema_ready, map_insert_error, RepoResult};
use rusqlite::{params, Connection, Row};

const PERSON_SELECT_SQL: &str = "SELECT rut, first_name, last_name FROM persons";
const DEGREE_SELECT_SQL: &str = "SELECT name, awarded_on, rut FROM degrees";

/// Repository interface for person and degree operations.
pub trait PersonRepository {
    /// Inserts one person; fails with `Duplicate` when the rut exists.
    fn add_person(&self, person: &Person) -> RepoResult<()>;
    /// Lists persons whose first name contains `needle`, ordered by name.
    fn find_persons(&self, needle: &str) -> RepoResult<Vec<Person>>;
    /// Returns the full person table, unordered.
    fn list_persons(&self) -> RepoResult<Vec<Person>>;
    /// Inserts one degree row; no uniqueness is enforced.
    fn add_degree(&self, degree: &Degree) -> RepoResult<()>;
    /// Lists degrees whose stored rut contains `needle`.
    fn find_degrees(&self, rut_needle: &str) -> RepoResult<Vec<Degree>>;
    /// Returns the full degree table, unordered.
    fn list_degrees(&self) -> RepoResult<Vec<Degree>>;
}

/// SQLite-backed person/degree repository.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn, &["persons", "degrees"])?;
        Ok(Self { conn })
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn add_person(&self, person: &Person) -> RepoResult<()> {
        person.validate()?;

        self.conn
            .execute(
                "INSERT INTO persons (rut, first_name, last_name) VALUES (?1, ?2, ?3);",
                params![
                    person.rut.as_str(),
                    person.first_name.as_str(),
                    person.last_name.as_str(),
                ],
            )
            .map_err(|err| map_insert_error(err, "person", person.rut.as_str()))?;

        Ok(())
    }

    fn find_persons(&self, needle: &str) -> RepoResult<Vec<Person>> {
        let mut stmt = self.conn.prepare(&format!(
            "{PERSON_SELECT_SQL}
             WHERE instr(first_name, ?1) > 0
             ORDER BY first_name ASC;"
        ))?;
        let items = collect_rows(stmt.query([needle])?, parse_person_row);
        items
    }

    fn list_persons(&self) -> RepoResult<Vec<Person>> {
        let mut stmt = self.conn.prepare(&format!("{PERSON_SELECT_SQL};"))?;
        let items = collect_rows(stmt.query([])?, parse_person_row);
        items
    }

    fn add_degree(&self, degree: &Degree) -> RepoResult<()> {
        degree.validate()?;

        self.conn.execute(
            "INSERT INTO degrees (name, awarded_on, rut) VALUES (?1, ?2, ?3);",
            params![
                degree.name.as_str(),
                degree.awarded_on.as_str(),
                degree.rut.as_str(),
            ],
        )?;

        Ok(())
    }

    fn find_degrees(&self, rut_needle: &str) -> RepoResult<Vec<Degree>> {
        let mut stmt = self.conn.prepare(&format!(
            "{DEGREE_SELECT_SQL}
             WHERE instr(rut, ?1) > 0;"
        ))?;
        let items = collect_rows(stmt.query([rut_needle])?, parse_degree_row);
        items
    }

    fn list_degrees(&self) -> RepoResult<Vec<Degree>> {
        let mut stmt = self.conn.prepare(&format!("{DEGREE_SELECT_SQL};"))?;
        let items = collect_rows(stmt.query([])?, parse_degree_row);
        items
    }
}

fn parse_person_row(row: &Row<'_>) -> RepoResult<Person> {
    Ok(Person {
        rut: row.get("rut")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
    })
}

fn parse_degree_row(row: &Row<'_>) -> RepoResult<Degree> {
    Ok(Degree {
        name: row.get("name")?,
        awarded_on: row.get("awarded_on")?,
        rut: row.get("rut")?,
    })
}
