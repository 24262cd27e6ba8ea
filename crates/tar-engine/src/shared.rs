//! Lockable project handle for embedding in a multi-threaded host.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::warn;

use tar_core::errors::TarResult;
use tar_core::models::{
    Judgment, JudgmentInput, ProjectSummary, RecallEstimate, ReviewBatch, ReviewPhase,
    ValidationReport,
};

use crate::controller::{ElusionSample, ReviewController};

/// Cloneable, thread-safe handle to one [`ReviewController`].
///
/// Each call holds the lock only for the duration of the controller
/// operation. `validate` releases it while the judgment callback runs.
#[derive(Debug, Clone)]
pub struct SharedReviewProject {
    inner: Arc<Mutex<ReviewController>>,
}

impl SharedReviewProject {
    pub fn new(controller: ReviewController) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ReviewController> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("review project lock poisoned; continuing with inner state");
            poisoned.into_inner()
        })
    }

    /// Run `f` with exclusive access to the controller.
    pub fn with<R>(&self, f: impl FnOnce(&mut ReviewController) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn phase(&self) -> ReviewPhase {
        self.lock().phase()
    }

    pub fn submit_judgment(&self, input: JudgmentInput) -> TarResult<Judgment> {
        self.lock().submit_judgment(input)
    }

    pub fn submit_judgments(
        &self,
        inputs: impl IntoIterator<Item = JudgmentInput>,
    ) -> TarResult<usize> {
        self.lock().submit_judgments(inputs)
    }

    /// Retrain and return the new model's training accuracy.
    pub fn train(&self) -> TarResult<f64> {
        self.lock().train().map(|m| m.training_accuracy())
    }

    pub fn rank_next_batch(&self) -> TarResult<ReviewBatch> {
        self.lock().rank_next_batch()
    }

    pub fn estimate_recall(&self) -> RecallEstimate {
        self.lock().estimate_recall()
    }

    pub fn summary(&self) -> ProjectSummary {
        self.lock().summary()
    }

    /// Draw an elusion sample under the lock, judge it with the lock
    /// released, then score it under the lock again.
    pub fn validate(
        &self,
        sample_size: usize,
        judge: impl FnMut(&str) -> bool,
    ) -> TarResult<ValidationReport> {
        let sample = self.lock().begin_validation(sample_size)?;
        self.judge_and_complete(&sample, judge)
    }

    /// [`Self::validate`] with `validation.sample_size` from the project
    /// config.
    pub fn validate_with_configured_sample(
        &self,
        judge: impl FnMut(&str) -> bool,
    ) -> TarResult<ValidationReport> {
        let sample = self.lock().begin_validation_with_configured_sample()?;
        self.judge_and_complete(&sample, judge)
    }

    /// Judge `sample` without the lock. Fails with `InvalidPhase` if another
    /// caller drew a newer sample in the meantime.
    fn judge_and_complete(
        &self,
        sample: &ElusionSample,
        mut judge: impl FnMut(&str) -> bool,
    ) -> TarResult<ValidationReport> {
        let verdicts: Vec<bool> = sample
            .document_ids
            .iter()
            .map(|id| judge(id.as_str()))
            .collect();
        self.lock().complete_validation(sample, &verdicts)
    }
}
