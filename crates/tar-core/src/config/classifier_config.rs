use serde::{Deserialize, Serialize};

use super::defaults;

/// Logistic regression training configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Inverse L2 regularization strength (larger = weaker penalty).
    pub c: f64,
    /// Maximum gradient descent iterations.
    pub max_iter: usize,
    /// Stop once the largest absolute gradient component is below this.
    pub tolerance: f64,
    /// Gradient descent step size.
    pub learning_rate: f64,
    /// Weight classes inversely to their frequency.
    pub class_weight_balanced: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            c: defaults::DEFAULT_INVERSE_REGULARIZATION,
            max_iter: defaults::DEFAULT_MAX_ITER,
            tolerance: defaults::DEFAULT_TOLERANCE,
            learning_rate: defaults::DEFAULT_LEARNING_RATE,
            class_weight_balanced: defaults::DEFAULT_CLASS_WEIGHT_BALANCED,
        }
    }
}
