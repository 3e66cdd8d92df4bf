//! Ingestion validation and normalization.
//!
//! # Responsibility
//! - Turn loosely-typed inbound payloads into canonical entries.
//! - Enforce required-field invariants before anything reaches storage.
//!
//! # Invariants
//! - An entry returned by `normalize` always satisfies the model
//!   invariants (`JournalEntry` docs).
//! - Normalization has no side effects beyond a diagnostic log event on
//!   the date fallback path.

pub mod normalizer;
