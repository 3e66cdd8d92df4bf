//! Journal entry domain model.
//!
//! # Responsibility
//! - Define the canonical record for one solved-problem session.
//! - Define the nested reflective write-up structures.
//!
//! # Invariants
//! - `problem_name`, `problem_id`, `topic`, `difficulty` are non-empty
//!   for any entry accepted by the store (enforced at ingestion).
//! - `date_done` is a valid UTC instant in every stored entry.
//! - `details` and everything inside it may be entirely empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted journal record of a solved problem.
///
/// Serialized with camelCase field names to match the HTTP wire; the
/// same shape is used for the stored `details` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Stable identifier. Decimal string of the client-supplied numeric
    /// id, or a server-generated UUID when the client omitted one.
    pub id: String,
    pub problem_name: String,
    pub problem_id: String,
    /// When the problem was solved. Falls back to ingestion time when
    /// the client sent nothing usable.
    pub date_done: DateTime<Utc>,
    pub topic: String,
    pub difficulty: String,
    /// Optional reflective write-up. Stored verbatim, never validated
    /// field-by-field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Details>,
}

/// Reflective write-up of the solving process.
///
/// All fields default to empty so a partially filled client payload
/// decodes without errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Details {
    pub inputs: String,
    pub outputs: String,
    pub constraints: String,
    pub core_question: String,
    pub edge_cases: String,
    /// Alternatives considered before choosing one, in the order the
    /// client listed them.
    pub ideas: Vec<Idea>,
    pub chosen_idea: String,
    pub rationale: String,
    pub pseudocode: String,
    pub implementation: String,
    pub bugs: String,
    pub missed_edge_cases: String,
    pub solution_summary: String,
    pub key_learnings: KeyLearnings,
    pub self_reflection: SelfReflection,
}

/// One solution idea considered during the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Idea {
    pub title: String,
    pub pros: String,
    pub cons: String,
}

/// Takeaways worth keeping after the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyLearnings {
    pub core_idea: String,
    pub data_structure_insights: String,
    pub algorithm_insights: String,
}

/// Self-assessment recorded by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelfReflection {
    pub what_went_well: String,
    pub what_could_be_better: String,
    pub future_study: String,
    pub confidence_level: String,
}
