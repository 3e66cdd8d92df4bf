//! Entry payload validator and normalizer.
//!
//! # Responsibility
//! - Validate required fields of an inbound entry payload.
//! - Resolve the flexible `dateDone` text into a concrete UTC instant.
//! - Assign the stable entry identifier.
//!
//! # Invariants
//! - Required string fields are rejected when empty, exactly as sent
//!   (no trimming before the check).
//! - An unparsable non-empty date falls back to ingestion time and is
//!   reported via a `date_parse_fallback` warn event, never an error.
//! - `details` passes through unchanged; its fields are not validated.

use crate::model::entry::{Details, JournalEntry};
use chrono::{DateTime, NaiveDate, Utc};
use log::warn;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type IngestResult<T> = Result<T, IngestError>;

/// Validation error for inbound entry payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// A required field was missing or empty. Carries the wire-facing
    /// (camelCase) field name for client-visible messages.
    MissingField(&'static str),
}

impl Display for IngestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field: {field}"),
        }
    }
}

impl Error for IngestError {}

/// Loosely-typed inbound payload for one journal entry.
///
/// Everything the client may omit is optional here; `normalize` decides
/// what that omission means. Unknown JSON fields are ignored by the
/// permissive decode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewEntry {
    /// Optional numeric identifier chosen by the client.
    pub id: Option<i64>,
    pub problem_name: String,
    pub problem_id: String,
    /// Flexible date text: `YYYY-MM-DD`, RFC 3339, or anything else
    /// (which falls back to ingestion time).
    pub date_done: Option<String>,
    pub topic: String,
    pub difficulty: String,
    pub details: Option<Details>,
}

/// Validates and normalizes a payload into a canonical entry.
///
/// # Contract
/// - Fails with `MissingField` when any of `problemName`, `problemId`,
///   `topic`, `difficulty` is empty.
/// - Resolves `dateDone` per [`resolve_date_done`] using the current
///   wall clock.
/// - Assigns `id`: decimal string of the numeric input when present,
///   otherwise a generated UUID v4 string.
pub fn normalize(raw: NewEntry) -> IngestResult<JournalEntry> {
    normalize_at(raw, Utc::now())
}

/// Clock-injected variant of [`normalize`] for deterministic tests.
pub fn normalize_at(raw: NewEntry, now: DateTime<Utc>) -> IngestResult<JournalEntry> {
    require_non_empty("problemName", &raw.problem_name)?;
    require_non_empty("problemId", &raw.problem_id)?;
    require_non_empty("topic", &raw.topic)?;
    require_non_empty("difficulty", &raw.difficulty)?;

    let date_done = resolve_date_done(raw.date_done.as_deref(), now);
    let id = match raw.id {
        Some(numeric) => numeric.to_string(),
        None => Uuid::new_v4().to_string(),
    };

    Ok(JournalEntry {
        id,
        problem_name: raw.problem_name,
        problem_id: raw.problem_id,
        date_done,
        topic: raw.topic,
        difficulty: raw.difficulty,
        details: raw.details,
    })
}

fn require_non_empty(field: &'static str, value: &str) -> IngestResult<()> {
    if value.is_empty() {
        return Err(IngestError::MissingField(field));
    }
    Ok(())
}

/// Resolves flexible date text into a concrete UTC instant.
///
/// Resolution order:
/// 1. absent or empty (after trim) -> `now`
/// 2. calendar date `YYYY-MM-DD` -> midnight UTC on that date
/// 3. RFC 3339 timestamp with offset -> that exact instant
/// 4. anything else -> `now`, with a `date_parse_fallback` warn event
fn resolve_date_done(raw: Option<&str>, now: DateTime<Utc>) -> DateTime<Utc> {
    let Some(text) = raw.map(str::trim).filter(|text| !text.is_empty()) else {
        return now;
    };

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return midnight.and_utc();
        }
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return instant.with_timezone(&Utc);
    }

    // Log metadata only; the raw text is client-controlled.
    warn!(
        "event=date_parse_fallback module=ingest status=fallback raw_len={}",
        text.len()
    );
    now
}
