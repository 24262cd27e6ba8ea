use serde::{Deserialize, Serialize};

use super::defaults;

/// CAL review loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Judged documents required before the first fit.
    pub min_seed_size: usize,
    /// Maximum documents per ranked batch.
    pub batch_size: usize,
    /// Recall that must be estimated before validation can pass.
    pub target_recall: f64,
    /// Documents scoring below this are predicted non-relevant.
    pub relevance_cutoff: f64,
    /// Seed for seed-set and elusion sampling.
    pub random_seed: u64,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            min_seed_size: defaults::DEFAULT_MIN_SEED_SIZE,
            batch_size: defaults::DEFAULT_BATCH_SIZE,
            target_recall: defaults::DEFAULT_TARGET_RECALL,
            relevance_cutoff: defaults::DEFAULT_RELEVANCE_CUTOFF,
            random_seed: defaults::DEFAULT_RANDOM_SEED,
        }
    }
}
