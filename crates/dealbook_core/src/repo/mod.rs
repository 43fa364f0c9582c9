//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per record kind.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Domain absence is not an error: `get`/`update` return `Option`,
//!   `delete` returns `bool`.
//! - Ids are allocated from strictly monotonic per-kind counters and
//!   never reused within a process lifetime.

use crate::db::DbError;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

pub mod activity_repo;
pub mod company_repo;
pub mod contact_repo;
pub mod deal_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for record persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Persisted data cannot be converted to a valid read model.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted record data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
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

/// Allocates the next id for a record kind, e.g. `comp-7`.
///
/// The counter row is created lazily and only ever increments, so an
/// ordinal freed by a delete is never handed out again.
pub(crate) fn next_record_id(conn: &Connection, kind: &str, prefix: &str) -> RepoResult<String> {
    conn.execute(
        "INSERT INTO id_counters (kind, next_ordinal) VALUES (?1, 1)
         ON CONFLICT(kind) DO UPDATE SET next_ordinal = next_ordinal + 1;",
        [kind],
    )?;
    let ordinal: i64 = conn.query_row(
        "SELECT next_ordinal FROM id_counters WHERE kind = ?1;",
        [kind],
        |row| row.get(0),
    )?;
    Ok(format!("{prefix}-{ordinal}"))
}

/// Fast-forwards a kind counter so future allocations start past
/// `ordinal`. Used by seeding; lower values are ignored.
pub(crate) fn bump_counter_to(conn: &Connection, kind: &str, ordinal: i64) -> RepoResult<()> {
    conn.execute(
        "INSERT INTO id_counters (kind, next_ordinal) VALUES (?1, ?2)
         ON CONFLICT(kind) DO UPDATE SET next_ordinal = MAX(next_ordinal, excluded.next_ordinal);",
        rusqlite::params![kind, ordinal],
    )?;
    Ok(())
}

/// Current wall-clock time in epoch milliseconds.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
