//! Elusion testing: how many relevant documents hide in the pool the model
//! predicts non-relevant.

use rand::seq::index;
use rand::Rng;
use tracing::{info, warn};

use tar_core::models::ElusionTestResult;

/// Uniform sample of `min(sample_size, candidates.len())` ids without
/// replacement.
pub fn draw_sample<R: Rng + ?Sized>(
    candidates: &[String],
    sample_size: usize,
    rng: &mut R,
) -> Vec<String> {
    let amount = sample_size.min(candidates.len());
    index::sample(rng, candidates.len(), amount)
        .into_iter()
        .map(|i| candidates[i].clone())
        .collect()
}

/// Score a judged sample drawn from a pool of `pool_size` candidates.
///
/// An empty pool passes with a zero-size sample: nothing was excluded, so
/// nothing can have eluded review.
pub fn evaluate_sample(
    pool_size: usize,
    sample_size: usize,
    relevant_found: usize,
    threshold: f64,
) -> ElusionTestResult {
    if pool_size == 0 {
        warn!("elusion test on an empty candidate pool; nothing was excluded");
        return ElusionTestResult::empty();
    }

    let result = ElusionTestResult::from_counts(sample_size, relevant_found, threshold);
    info!(
        pool = pool_size,
        sample = result.sample_size,
        relevant_found,
        elusion_rate = result.elusion_rate,
        passes = result.passes_threshold,
        "elusion test complete"
    );
    result
}

/// Sample the candidate pool, judge each sampled id with `judge`, and compare
/// the observed rate to `threshold`.
pub fn elusion_test<R, F>(
    candidates: &[String],
    sample_size: usize,
    threshold: f64,
    rng: &mut R,
    mut judge: F,
) -> ElusionTestResult
where
    R: Rng + ?Sized,
    F: FnMut(&str) -> bool,
{
    let sample = draw_sample(candidates, sample_size, rng);
    let relevant_found = sample.iter().filter(|id| judge(id.as_str())).count();
    evaluate_sample(candidates.len(), sample.len(), relevant_found, threshold)
}
