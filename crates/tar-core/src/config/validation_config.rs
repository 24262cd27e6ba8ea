use serde::{Deserialize, Serialize};

use super::defaults;

/// Elusion validation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// An elusion rate strictly below this passes.
    pub elusion_threshold: f64,
    /// Default number of predicted non-relevant documents to sample.
    pub sample_size: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            elusion_threshold: defaults::DEFAULT_ELUSION_THRESHOLD,
            sample_size: defaults::DEFAULT_ELUSION_SAMPLE_SIZE,
        }
    }
}
