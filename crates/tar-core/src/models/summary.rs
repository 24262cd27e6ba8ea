use serde::{Deserialize, Serialize};

use super::ReviewPhase;

/// Point-in-time status of a review project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub project_id: String,
    pub case_name: String,
    pub phase: ReviewPhase,
    pub corpus_size: usize,
    pub reviewed_count: usize,
    pub relevant_count: usize,
    pub seed_count: usize,
    pub batches_issued: usize,
    pub model_accuracy: Option<f64>,
    pub model_training_size: Option<usize>,
    pub model_fingerprint: Option<String>,
    pub estimated_recall: f64,
    pub target_recall: f64,
    pub elusion_rate: Option<f64>,
    pub elusion_passes_threshold: Option<bool>,
}
