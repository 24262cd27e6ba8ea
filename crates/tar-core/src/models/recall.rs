use serde::{Deserialize, Serialize};

/// Proportional recall estimate together with the inputs it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecallEstimate {
    pub recall: f64,
    pub relevant_reviewed: usize,
    pub reviewed_total: usize,
    pub corpus_size: usize,
    /// `relevant_reviewed / reviewed_total`, 0.0 when nothing is reviewed.
    pub estimated_prevalence: f64,
    /// Prevalence extrapolated to the whole corpus.
    pub estimated_total_relevant: f64,
}

impl RecallEstimate {
    pub fn meets(&self, target: f64) -> bool {
        self.recall >= target
    }
}
