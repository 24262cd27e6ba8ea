use serde::{Deserialize, Serialize};

/// Outcome of one elusion test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElusionTestResult {
    pub sample_size: usize,
    pub relevant_found: usize,
    pub elusion_rate: f64,
    pub passes_threshold: bool,
}

impl ElusionTestResult {
    /// Result for an empty candidate pool: nothing was excluded, so nothing
    /// can have eluded review.
    pub fn empty() -> Self {
        Self {
            sample_size: 0,
            relevant_found: 0,
            elusion_rate: 0.0,
            passes_threshold: true,
        }
    }

    /// Build a result from counts. The pass test is strict: `rate < threshold`.
    pub fn from_counts(sample_size: usize, relevant_found: usize, threshold: f64) -> Self {
        let elusion_rate = if sample_size == 0 {
            0.0
        } else {
            relevant_found as f64 / sample_size as f64
        };
        Self {
            sample_size,
            relevant_found,
            elusion_rate,
            passes_threshold: elusion_rate < threshold,
        }
    }
}
