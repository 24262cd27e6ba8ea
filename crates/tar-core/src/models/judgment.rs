use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reviewer's relevance call as submitted from the review UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgmentInput {
    pub document_id: String,
    pub is_relevant: bool,
    pub reviewer: Option<String>,
    pub notes: Option<String>,
}

impl JudgmentInput {
    pub fn new(document_id: impl Into<String>, is_relevant: bool) -> Self {
        Self {
            document_id: document_id.into(),
            is_relevant,
            reviewer: None,
            notes: None,
        }
    }

    pub fn by(mut self, reviewer: impl Into<String>) -> Self {
        self.reviewer = Some(reviewer.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A recorded judgment. Never edited; a correction is a later judgment for
/// the same document and supersedes this one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Judgment {
    /// Position in the project's judgment log, starting at 0.
    pub sequence: u64,
    pub document_id: String,
    pub is_relevant: bool,
    /// Submitted while the project was still collecting its seed set.
    pub is_seed: bool,
    pub reviewer: Option<String>,
    pub notes: Option<String>,
    pub judged_at: DateTime<Utc>,
}
