//! Injected service dependencies shared across request handlers.
//!
//! # Responsibility
//! - Hold the store connection, the LLM handle and the configuration as
//!   explicit dependencies (no ambient global state).
//!
//! # Invariants
//! - Handlers hold the connection lock only across one repository call;
//!   entry operations are short single-statement SQLite calls.

use crate::config::Config;
use crate::llm::GeminiClient;
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub type SharedState = Arc<AppState>;

/// Application state injected into every handler.
pub struct AppState {
    db: Mutex<Connection>,
    pub llm: GeminiClient,
    pub config: Config,
}

impl AppState {
    pub fn new(conn: Connection, llm: GeminiClient, config: Config) -> SharedState {
        Arc::new(Self {
            db: Mutex::new(conn),
            llm,
            config,
        })
    }

    /// Locks the store connection for one repository operation.
    ///
    /// A poisoned lock still yields the connection: SQLite state is
    /// consistent per statement and a panicked sibling request must not
    /// take the whole store down.
    pub fn db(&self) -> MutexGuard<'_, Connection> {
        self.db.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
