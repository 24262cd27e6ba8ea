//! Workspace configuration with layered resolution.

mod classifier_config;
pub mod defaults;
mod feature_config;
mod observability_config;
mod review_config;
mod validation_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use classifier_config::ClassifierConfig;
pub use feature_config::FeatureConfig;
pub use observability_config::ObservabilityConfig;
pub use review_config::ReviewConfig;
pub use validation_config::ValidationConfig;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`TAR_*`)
/// 2. TOML file passed to [`TarConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TarConfig {
    pub features: FeatureConfig,
    pub classifier: ClassifierConfig,
    pub review: ReviewConfig,
    pub validation: ValidationConfig,
    pub observability: ObservabilityConfig,
}

impl TarConfig {
    /// Load configuration from an optional TOML file plus `TAR_*` environment
    /// overrides, then validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides_from(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `TAR_*` overrides using `lookup` to read variables.
    ///
    /// Unparseable values are ignored and the previous value is kept.
    pub fn apply_env_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("TAR_MIN_SEED_SIZE").and_then(|v| v.parse().ok()) {
            self.review.min_seed_size = v;
        }
        if let Some(v) = lookup("TAR_BATCH_SIZE").and_then(|v| v.parse().ok()) {
            self.review.batch_size = v;
        }
        if let Some(v) = lookup("TAR_TARGET_RECALL").and_then(|v| v.parse().ok()) {
            self.review.target_recall = v;
        }
        if let Some(v) = lookup("TAR_RANDOM_SEED").and_then(|v| v.parse().ok()) {
            self.review.random_seed = v;
        }
        if let Some(v) = lookup("TAR_ELUSION_THRESHOLD").and_then(|v| v.parse().ok()) {
            self.validation.elusion_threshold = v;
        }
        if let Some(v) = lookup("TAR_ELUSION_SAMPLE_SIZE").and_then(|v| v.parse().ok()) {
            self.validation.sample_size = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn fail(field: &str, message: &str) -> Result<(), ConfigError> {
            Err(ConfigError::ValidationFailed {
                field: field.to_string(),
                message: message.to_string(),
            })
        }

        if self.features.max_features == 0 {
            return fail("features.max_features", "must be greater than 0");
        }
        if self.features.ngram_min == 0 || self.features.ngram_min > self.features.ngram_max {
            return fail(
                "features.ngram_min",
                "must be at least 1 and not exceed features.ngram_max",
            );
        }
        if !(self.classifier.c > 0.0 && self.classifier.c.is_finite()) {
            return fail("classifier.c", "must be a positive finite number");
        }
        if self.classifier.max_iter == 0 {
            return fail("classifier.max_iter", "must be greater than 0");
        }
        if !(self.classifier.learning_rate > 0.0 && self.classifier.learning_rate.is_finite()) {
            return fail("classifier.learning_rate", "must be a positive finite number");
        }
        if self.review.min_seed_size < 2 {
            return fail("review.min_seed_size", "must be at least 2");
        }
        if self.review.batch_size == 0 {
            return fail("review.batch_size", "must be greater than 0");
        }
        if !(self.review.target_recall > 0.0 && self.review.target_recall <= 1.0) {
            return fail("review.target_recall", "must be in (0.0, 1.0]");
        }
        if !(self.review.relevance_cutoff > 0.0 && self.review.relevance_cutoff < 1.0) {
            return fail("review.relevance_cutoff", "must be in (0.0, 1.0)");
        }
        if !(self.validation.elusion_threshold > 0.0 && self.validation.elusion_threshold <= 1.0) {
            return fail("validation.elusion_threshold", "must be in (0.0, 1.0]");
        }
        if self.validation.sample_size == 0 {
            return fail("validation.sample_size", "must be greater than 0");
        }
        Ok(())
    }
}
