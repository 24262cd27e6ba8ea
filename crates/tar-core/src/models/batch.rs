use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An unjudged document with its predicted relevance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub document_id: String,
    /// Predicted probability of relevance, in [0, 1].
    pub score: f64,
}

/// A ranked slice of unjudged documents offered for human review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewBatch {
    /// 1-based, sequential within a project.
    pub batch_number: u32,
    /// Ordered by descending score.
    pub entries: Vec<ScoredDocument>,
    pub created_at: DateTime<Utc>,
}

impl ReviewBatch {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn document_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.document_id.as_str())
    }
}
