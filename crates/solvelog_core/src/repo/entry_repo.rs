//! Entry repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/list APIs over the `entries` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `id` uniqueness is enforced by the primary key; a duplicate insert
//!   surfaces as `RepoError::DuplicateId`, never a second row.
//! - Listing applies an explicit `date_done DESC, id ASC` order.
//! - Rows that fail to parse back surface as `RepoError::InvalidData`.

use crate::db::DbError;
use crate::model::entry::{Details, JournalEntry};
use chrono::{DateTime, Utc};
use log::info;
use rusqlite::{params, Connection, ErrorCode, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ENTRY_SELECT_SQL: &str = "SELECT
    id,
    problem_name,
    problem_id,
    topic,
    difficulty,
    date_done,
    details
FROM entries";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for entry persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// An entry with the same identifier already exists.
    DuplicateId(String),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "entry already exists: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted entry data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::DuplicateId(_) => None,
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

/// Repository interface for entry persistence.
pub trait EntryRepository {
    /// Persists exactly one entry as a new row.
    fn create_entry(&self, entry: &JournalEntry) -> RepoResult<()>;
    /// Returns every persisted entry, newest `date_done` first.
    fn list_entries(&self) -> RepoResult<Vec<JournalEntry>>;
}

/// SQLite-backed entry repository.
pub struct SqliteEntryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEntryRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EntryRepository for SqliteEntryRepository<'_> {
    fn create_entry(&self, entry: &JournalEntry) -> RepoResult<()> {
        let details_json = match &entry.details {
            Some(details) => Some(serde_json::to_string(details).map_err(|err| {
                RepoError::InvalidData(format!("details not serializable: {err}"))
            })?),
            None => None,
        };

        let inserted = self.conn.execute(
            "INSERT INTO entries (
                id,
                problem_name,
                problem_id,
                topic,
                difficulty,
                date_done,
                details
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                entry.id.as_str(),
                entry.problem_name.as_str(),
                entry.problem_id.as_str(),
                entry.topic.as_str(),
                entry.difficulty.as_str(),
                entry.date_done.to_rfc3339(),
                details_json.as_deref(),
            ],
        );

        match inserted {
            Ok(_) => {
                info!(
                    "event=entry_create module=repo status=ok id={}",
                    entry.id
                );
                Ok(())
            }
            Err(err) if is_unique_violation(&err) => Err(RepoError::DuplicateId(entry.id.clone())),
            Err(err) => Err(err.into()),
        }
    }

    fn list_entries(&self) -> RepoResult<Vec<JournalEntry>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ENTRY_SELECT_SQL} ORDER BY date_done DESC, id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut entries = Vec::new();

        while let Some(row) = rows.next()? {
            entries.push(parse_entry_row(row)?);
        }

        Ok(entries)
    }
}

fn parse_entry_row(row: &Row<'_>) -> RepoResult<JournalEntry> {
    let date_text: String = row.get("date_done")?;
    let date_done = DateTime::parse_from_rfc3339(&date_text)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid timestamp `{date_text}` in entries.date_done"
            ))
        })?;

    let details = match row.get::<_, Option<String>>("details")? {
        Some(json) => Some(serde_json::from_str::<Details>(&json).map_err(|err| {
            RepoError::InvalidData(format!("invalid details document: {err}"))
        })?),
        None => None,
    };

    Ok(JournalEntry {
        id: row.get("id")?,
        problem_name: row.get("problem_name")?,
        problem_id: row.get("problem_id")?,
        date_done,
        topic: row.get("topic")?,
        difficulty: row.get("difficulty")?,
        details,
    })
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation
    )
}
