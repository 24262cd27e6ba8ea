//! Proportional recall estimation.
//!
//! Prevalence among reviewed documents is extrapolated to the corpus:
//! `total ≈ (relevant_reviewed / reviewed_total) × corpus_size` and
//! `recall = min(relevant_reviewed / max(total, 1), 1)`.
//!
//! Review order is biased toward likely-relevant documents, so this overstates
//! prevalence among the unreviewed remainder and the estimate should be read
//! together with an elusion test.

use tar_core::models::RecallEstimate;

/// Estimated recall in [0, 1]. Zero when nothing has been reviewed.
pub fn estimate_recall(relevant_reviewed: usize, reviewed_total: usize, corpus_size: usize) -> f64 {
    recall_estimate(relevant_reviewed, reviewed_total, corpus_size).recall
}

/// Full estimate with its intermediate quantities.
pub fn recall_estimate(
    relevant_reviewed: usize,
    reviewed_total: usize,
    corpus_size: usize,
) -> RecallEstimate {
    let (estimated_prevalence, estimated_total_relevant, recall) = if reviewed_total == 0 {
        (0.0, 0.0, 0.0)
    } else {
        let prevalence = relevant_reviewed as f64 / reviewed_total as f64;
        let total = prevalence * corpus_size as f64;
        let recall = (relevant_reviewed as f64 / total.max(1.0)).min(1.0);
        (prevalence, total, recall)
    };
    RecallEstimate {
        recall,
        relevant_reviewed,
        reviewed_total,
        corpus_size,
        estimated_prevalence,
        estimated_total_relevant,
    }
}

/// `found / (found + elusion_rate × pool_size)`: the share of relevant
/// documents found if the sampled rate holds across the excluded pool.
/// Zero when nothing relevant has been found or estimated.
pub fn elusion_adjusted_recall(found: usize, elusion_rate: f64, pool_size: usize) -> f64 {
    let eluded = elusion_rate * pool_size as f64;
    let denominator = found as f64 + eluded;
    if denominator <= 0.0 {
        0.0
    } else {
        found as f64 / denominator
    }
}
