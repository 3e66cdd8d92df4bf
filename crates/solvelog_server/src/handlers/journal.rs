//! Journal entry endpoints.
//!
//! # Responsibility
//! - `GET /journal`: list every stored entry.
//! - `POST /journal`: validate, normalize and persist one entry.
//!
//! # Invariants
//! - Validation failures produce 400 before the store is touched.
//! - A duplicate identifier produces 409, never a second row.
//! - Store failures produce 500 with a generic message; the underlying
//!   error goes to the server log only.

use crate::envelope::{failure, success};
use crate::state::SharedState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use log::{error, warn};
use solvelog_core::{normalize, EntryRepository, NewEntry, RepoError, SqliteEntryRepository};

/// `GET /journal` — every entry, newest `dateDone` first.
pub async fn get_journal_entries(State(state): State<SharedState>) -> Response {
    let conn = state.db();
    let repo = SqliteEntryRepository::new(&conn);

    match repo.list_entries() {
        Ok(entries) => success("success", Some(entries)),
        Err(err) => {
            error!("event=journal_list module=server status=error error={err}");
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch journal entries",
            )
        }
    }
}

/// `POST /journal` — ingest one entry.
pub async fn add_journal_entry(
    State(state): State<SharedState>,
    payload: Result<Json<NewEntry>, JsonRejection>,
) -> Response {
    let Json(raw) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            warn!("event=journal_add module=server status=rejected reason=body_decode error={rejection}");
            return failure(StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };

    let entry = match normalize(raw) {
        Ok(entry) => entry,
        Err(err) => {
            warn!("event=journal_add module=server status=rejected reason=validation error={err}");
            return failure(StatusCode::BAD_REQUEST, &err.to_string());
        }
    };

    let conn = state.db();
    let repo = SqliteEntryRepository::new(&conn);

    match repo.create_entry(&entry) {
        Ok(()) => success::<()>("Entry added successfully", None),
        Err(RepoError::DuplicateId(id)) => {
            warn!("event=journal_add module=server status=rejected reason=duplicate_id id={id}");
            failure(
                StatusCode::CONFLICT,
                "An entry with this id already exists",
            )
        }
        Err(err) => {
            error!("event=journal_add module=server status=error error={err}");
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to add journal entry",
            )
        }
    }
}
