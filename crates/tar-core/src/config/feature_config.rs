use serde::{Deserialize, Serialize};

use super::defaults;

/// Feature extraction (TF-IDF vectorizer) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Vocabulary cap; the most frequent terms are kept.
    pub max_features: usize,
    /// Smallest n-gram length.
    pub ngram_min: usize,
    /// Largest n-gram length.
    pub ngram_max: usize,
    /// Lower-case text before tokenizing.
    pub lowercase: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            max_features: defaults::DEFAULT_MAX_FEATURES,
            ngram_min: defaults::DEFAULT_NGRAM_MIN,
            ngram_max: defaults::DEFAULT_NGRAM_MAX,
            lowercase: defaults::DEFAULT_LOWERCASE,
        }
    }
}
