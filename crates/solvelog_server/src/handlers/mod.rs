//! Request handlers.
//!
//! # Responsibility
//! - Decode requests, invoke core ingestion/storage, translate results
//!   and errors into the response envelope.
//!
//! # Invariants
//! - Low-level storage errors are logged server-side and never exposed
//!   verbatim to clients.

pub mod health;
pub mod journal;
