//! L2-regularised logistic regression fit by full-batch gradient descent.
//!
//! Objective, with sample weights `s` and `S = Σ s`:
//! `(1/S) Σ s_i · logloss_i + ‖w‖² / (2 · C · S)`. The intercept is not
//! penalised. There is no stochastic component, so identical inputs produce
//! bit-identical parameters.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use tar_core::config::ClassifierConfig;
use tar_core::errors::{TarError, TarResult};
use tar_core::models::SparseVector;
use tar_core::traits::IRelevanceClassifier;

use crate::class_weights::balanced_class_weights;

/// Probability cut-off used for the training accuracy figure.
const ACCURACY_CUTOFF: f64 = 0.5;

/// Fitted parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticWeights {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    pub iterations: usize,
    pub converged: bool,
}

#[derive(Debug, Clone)]
pub struct LogisticRegression {
    config: ClassifierConfig,
    min_examples: usize,
    weights: Option<LogisticWeights>,
}

impl LogisticRegression {
    /// `min_examples` is the smallest training set accepted by `train`.
    pub fn new(config: ClassifierConfig, min_examples: usize) -> Self {
        Self {
            config,
            min_examples,
            weights: None,
        }
    }

    pub fn weights(&self) -> Option<&LogisticWeights> {
        self.weights.as_ref()
    }

    fn fit(&self, vectors: &[SparseVector], labels: &[bool]) -> LogisticWeights {
        let dim = vectors.iter().map(SparseVector::min_dimension).max().unwrap_or(0);
        let sample_weights = if self.config.class_weight_balanced {
            balanced_class_weights(labels)
        } else {
            vec![1.0; labels.len()]
        };
        let total_weight: f64 = sample_weights.iter().sum();
        let penalty = 1.0 / (self.config.c * total_weight);
        let lr = self.config.learning_rate;

        let mut coef = vec![0.0; dim];
        let mut intercept = 0.0;
        let mut grad = vec![0.0; dim];
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.config.max_iter {
            iterations += 1;

            // Weighted residuals s_i · (p_i - y_i) / S.
            let residuals: Vec<f64> = vectors
                .par_iter()
                .zip(labels.par_iter())
                .zip(sample_weights.par_iter())
                .map(|((x, &y), &s)| {
                    let p = sigmoid(x.dot(&coef) + intercept);
                    let target = if y { 1.0 } else { 0.0 };
                    s * (p - target) / total_weight
                })
                .collect();

            for (g, w) in grad.iter_mut().zip(&coef) {
                *g = penalty * w;
            }
            let mut grad_intercept = 0.0;
            for (x, r) in vectors.iter().zip(&residuals) {
                grad_intercept += r;
                for (i, v) in x.iter() {
                    grad[i] += r * v;
                }
            }

            let max_grad = grad
                .iter()
                .fold(grad_intercept.abs(), |acc, g| acc.max(g.abs()));
            if max_grad < self.config.tolerance {
                converged = true;
                break;
            }

            for (w, g) in coef.iter_mut().zip(&grad) {
                *w -= lr * g;
            }
            intercept -= lr * grad_intercept;
        }

        debug!(iterations, converged, dim, "logistic regression fit finished");
        LogisticWeights {
            coefficients: coef,
            intercept,
            iterations,
            converged,
        }
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

fn probability(weights: &LogisticWeights, x: &SparseVector) -> f64 {
    sigmoid(x.dot(&weights.coefficients) + weights.intercept)
}

impl IRelevanceClassifier for LogisticRegression {
    fn train(&mut self, vectors: &[SparseVector], labels: &[bool]) -> TarResult<f64> {
        if vectors.len() != labels.len() {
            return Err(TarError::LengthMismatch {
                vectors: vectors.len(),
                labels: labels.len(),
            });
        }

        let positives = labels.iter().filter(|&&l| l).count();
        let distinct_labels = usize::from(positives > 0) + usize::from(positives < labels.len());
        if labels.len() < self.min_examples || distinct_labels < 2 {
            return Err(TarError::InsufficientSeed {
                judged: labels.len(),
                required: self.min_examples,
                distinct_labels,
            });
        }

        let fitted = self.fit(vectors, labels);
        let finite =
            fitted.intercept.is_finite() && fitted.coefficients.iter().all(|w| w.is_finite());
        if !finite {
            warn!("logistic regression produced non-finite parameters");
            return Err(TarError::TrainingFailed {
                reason: "non-finite model parameters".to_string(),
            });
        }

        let correct = vectors
            .iter()
            .zip(labels)
            .filter(|(x, y)| (probability(&fitted, x) >= ACCURACY_CUTOFF) == **y)
            .count();
        let accuracy = correct as f64 / labels.len() as f64;

        info!(
            examples = labels.len(),
            positives,
            iterations = fitted.iterations,
            converged = fitted.converged,
            accuracy,
            "relevance classifier trained"
        );
        self.weights = Some(fitted);
        Ok(accuracy)
    }

    fn predict(&self, vectors: &[SparseVector]) -> TarResult<Vec<f64>> {
        let weights = self
            .weights
            .as_ref()
            .ok_or_else(|| TarError::not_trained("predict"))?;
        Ok(vectors.par_iter().map(|x| probability(weights, x)).collect())
    }

    fn is_trained(&self) -> bool {
        self.weights.is_some()
    }
}
