//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per aggregate.
//! - Isolate SQLite query details from the service façade.
//!
//! # Invariants
//! - Repository writes must call the entity's `validate()` before SQL
//!   mutations.
//! - Duplicate-key inserts surface as `RepoError::Duplicate`, never as raw
//!   transport errors.
//! - Repositories refuse to operate on connections whose schema has not been
//!   migrated to the latest version.

use crate::db::DbError;
use crate::model::ValidationError;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod journal_repo;
pub mod person_repo;
pub mod publication_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for registry persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    /// Primary or composite key already present for the named entity.
    Duplicate {
        entity: &'static str,
        key: String,
    },
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Duplicate { entity, key } => {
                write!(f, "{entity} with key `{key}` already exists")
            }
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it through db::open_db"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Maps an insert failure to `Duplicate` when SQLite reports a constraint
/// violation, otherwise passes the transport error through.
pub(crate) fn map_insert_error(
    err: rusqlite::Error,
    entity: &'static str,
    key: impl Into<String>,
) -> RepoError {
    if is_constraint_violation(&err) {
        return RepoError::Duplicate {
            entity,
            key: key.into(),
        };
    }
    err.into()
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(inner, _)
            if inner.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

/// Drains a query cursor into a vector using the given row parser.
pub(crate) fn collect_rows<T>(
    mut rows: rusqlite::Rows<'_>,
    parse: fn(&rusqlite::Row<'_>) -> RepoResult<T>,
) -> RepoResult<Vec<T>> {
    let mut items = Vec::new();
    while let Some(row) = rows.next()? {
        items.push(parse(row)?);
    }
    Ok(items)
}

/// Verifies the connection carries the latest schema and the tables the
/// calling repository depends on.
pub(crate) fn ensure_schema_ready(
    conn: &Connection,
    required_tables: &[&'static str],
) -> RepoResult<()> {
    let expected_version = crate::db::migrations::latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for table in required_tables {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [*table],
            |row| row.get(0),
        )?;
        if exists == 0 {
            return Err(RepoError::MissingRequiredTable(table));
        }
    }

    Ok(())
}
