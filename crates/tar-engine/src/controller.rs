//! Review-loop state machine.
//!
//! ```text
//! SeedCollection ──(min_seed_size judged)──▶ Training ──train()──▶ Ranking
//!        ▲                                      ▲                     │
//!        └──── InsufficientSeed ────────────────┤           rank_next_batch()
//!                                               │                     ▼
//!                            submit_judgment() ─┴──────────── AwaitingJudgment
//!                                                                     │
//!                    Validated / RecallInsufficient ◀── Validating ◀──┘
//!                                                  begin_validation()
//! ```
//!
//! Any judgment submitted after seed collection sends the project back to
//! `Training`. `Validated` is terminal for ranking and validation; only a new
//! judgment reopens the project.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use tar_core::config::TarConfig;
use tar_core::errors::{TarError, TarResult};
use tar_core::models::{
    CorpusDocument, Judgment, JudgmentInput, ProjectSummary, RecallEstimate, ReviewBatch,
    ReviewPhase, ScoredDocument, ValidationReport,
};

use crate::corpus::ReviewCorpus;
use crate::elusion;
use crate::judgments::JudgmentLog;
use crate::model::RelevanceModel;
use crate::ranking;
use crate::recall;

/// Documents drawn for an elusion review, waiting for verdicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElusionSample {
    /// 1-based, sequential within a project.
    pub draw_number: u32,
    pub document_ids: Vec<String>,
    /// Size of the predicted non-relevant pool at draw time.
    pub candidate_pool_size: usize,
    pub requested_size: usize,
    pub drawn_at: DateTime<Utc>,
}

impl ElusionSample {
    pub fn len(&self) -> usize {
        self.document_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document_ids.is_empty()
    }
}

/// One review project: a fixed corpus, its judgments, and the current model.
///
/// Not internally synchronised. See [`crate::SharedReviewProject`] for a
/// lockable handle.
#[derive(Debug)]
pub struct ReviewController {
    project_id: String,
    case_name: String,
    config: TarConfig,
    corpus: ReviewCorpus,
    judgments: JudgmentLog,
    model: Option<RelevanceModel>,
    /// Judgment log length when `model` was fit.
    trained_log_len: usize,
    batches: Vec<ReviewBatch>,
    rng: StdRng,
    phase: ReviewPhase,
    last_validation: Option<ValidationReport>,
    /// The only sample `complete_validation` will accept.
    pending_sample: Option<ElusionSample>,
    samples_drawn: u32,
}

impl ReviewController {
    pub fn new(
        case_name: impl Into<String>,
        documents: impl IntoIterator<Item = CorpusDocument>,
        config: TarConfig,
    ) -> TarResult<Self> {
        config.validate()?;
        let corpus = ReviewCorpus::new(documents)?;
        let case_name = case_name.into();
        let project_id = Uuid::new_v4().to_string();

        info!(
            project_id = %project_id,
            case_name = %case_name,
            corpus_size = corpus.len(),
            "review project created"
        );

        Ok(Self {
            project_id,
            case_name,
            rng: StdRng::seed_from_u64(config.review.random_seed),
            config,
            corpus,
            judgments: JudgmentLog::new(),
            model: None,
            trained_log_len: 0,
            batches: Vec::new(),
            phase: ReviewPhase::SeedCollection,
            last_validation: None,
            pending_sample: None,
            samples_drawn: 0,
        })
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn case_name(&self) -> &str {
        &self.case_name
    }

    pub fn phase(&self) -> ReviewPhase {
        self.phase
    }

    pub fn config(&self) -> &TarConfig {
        &self.config
    }

    pub fn corpus(&self) -> &ReviewCorpus {
        &self.corpus
    }

    pub fn judgments(&self) -> &JudgmentLog {
        &self.judgments
    }

    pub fn model(&self) -> Option<&RelevanceModel> {
        self.model.as_ref()
    }

    pub fn batches(&self) -> &[ReviewBatch] {
        &self.batches
    }

    pub fn last_validation(&self) -> Option<&ValidationReport> {
        self.last_validation.as_ref()
    }

    /// Random unjudged documents for the initial seed review.
    pub fn draw_seed_sample(&mut self, size: usize) -> Vec<String> {
        let unjudged: Vec<String> = self
            .corpus
            .iter()
            .filter(|d| !self.judgments.is_judged(&d.id))
            .map(|d| d.id.clone())
            .collect();
        let sample = elusion::draw_sample(&unjudged, size, &mut self.rng);
        info!(
            requested = size,
            drawn = sample.len(),
            "seed sample drawn"
        );
        sample
    }

    pub fn submit_judgment(&mut self, input: JudgmentInput) -> TarResult<Judgment> {
        if !self.corpus.contains(&input.document_id) {
            return Err(TarError::UnknownDocument {
                id: input.document_id,
            });
        }
        let is_seed = self.phase == ReviewPhase::SeedCollection;
        let judgment = self.judgments.record(input, is_seed).clone();
        debug!(
            document_id = %judgment.document_id,
            is_relevant = judgment.is_relevant,
            is_seed,
            "judgment recorded"
        );
        self.advance_after_judgment();
        Ok(judgment)
    }

    /// Record several judgments. Either all ids are known and every judgment
    /// is recorded, or nothing is.
    pub fn submit_judgments(
        &mut self,
        inputs: impl IntoIterator<Item = JudgmentInput>,
    ) -> TarResult<usize> {
        let inputs: Vec<JudgmentInput> = inputs.into_iter().collect();
        if let Some(unknown) = inputs
            .iter()
            .find(|j| !self.corpus.contains(&j.document_id))
        {
            return Err(TarError::UnknownDocument {
                id: unknown.document_id.clone(),
            });
        }

        let is_seed = self.phase == ReviewPhase::SeedCollection;
        let count = inputs.len();
        for input in inputs {
            self.judgments.record(input, is_seed);
        }
        debug!(count, is_seed, "judgments recorded");
        self.advance_after_judgment();
        Ok(count)
    }

    fn advance_after_judgment(&mut self) {
        match self.phase {
            ReviewPhase::SeedCollection => {
                if self.judgments.judged_count() >= self.config.review.min_seed_size {
                    self.transition(ReviewPhase::Training);
                }
            }
            ReviewPhase::Training => {}
            ReviewPhase::Ranking
            | ReviewPhase::AwaitingJudgment
            | ReviewPhase::Validating
            | ReviewPhase::Validated
            | ReviewPhase::RecallInsufficient => {
                self.pending_sample = None;
                self.transition(ReviewPhase::Training);
            }
        }
    }

    fn transition(&mut self, to: ReviewPhase) {
        if self.phase != to {
            info!(from = %self.phase, to = %to, "review phase changed");
            self.phase = to;
        }
    }

    fn invalid_phase(&self, operation: &str) -> TarError {
        TarError::InvalidPhase {
            operation: operation.to_string(),
            phase: self.phase.to_string(),
        }
    }

    /// Fit a fresh model on every effective judgment, in corpus order.
    pub fn train(&mut self) -> TarResult<&RelevanceModel> {
        let labelled = self.judgments.labelled(&self.corpus);
        let span = crate::train_span!(labelled.len());
        let _enter = span.enter();

        let required = self.config.review.min_seed_size;
        let positives = labelled.iter().filter(|(_, l)| *l).count();
        let distinct_labels =
            usize::from(positives > 0) + usize::from(positives < labelled.len());
        if labelled.len() < required || distinct_labels < 2 {
            warn!(
                judged = labelled.len(),
                required,
                distinct_labels,
                "not enough judgments to train"
            );
            let judged = labelled.len();
            self.transition(ReviewPhase::SeedCollection);
            return Err(TarError::InsufficientSeed {
                judged,
                required,
                distinct_labels,
            });
        }

        let rows: Vec<(&str, &str, bool)> = labelled
            .iter()
            .filter_map(|&(id, label)| self.corpus.text(id).map(|text| (id, text, label)))
            .collect();

        match RelevanceModel::fit(&self.config, &rows) {
            Ok(model) => {
                info!(
                    training_size = model.training_size(),
                    accuracy = model.training_accuracy(),
                    vocabulary = model.vocabulary_size(),
                    fingerprint = %model.fingerprint(),
                    "relevance model trained"
                );
                self.trained_log_len = self.judgments.len();
                self.transition(ReviewPhase::Ranking);
                Ok(self.model.insert(model))
            }
            Err(e) => {
                warn!(error = %e, transient = e.is_transient(), "training failed");
                self.transition(ReviewPhase::Training);
                Err(e)
            }
        }
    }

    fn scored_unjudged(&self, operation: &str) -> TarResult<Vec<ScoredDocument>> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| TarError::not_trained(operation))?;
        let (ids, texts): (Vec<&str>, Vec<String>) = self
            .corpus
            .iter()
            .filter(|d| !self.judgments.is_judged(&d.id))
            .map(|d| (d.id.as_str(), d.text.clone()))
            .unzip();
        let scores = model.score(&texts)?;
        Ok(ids
            .into_iter()
            .zip(scores)
            .map(|(id, score)| ScoredDocument {
                document_id: id.to_string(),
                score,
            })
            .collect())
    }

    /// Every unjudged document with its current relevance score, in corpus
    /// order.
    pub fn score_unjudged(&self) -> TarResult<Vec<ScoredDocument>> {
        self.scored_unjudged("score_unjudged")
    }

    /// Unjudged documents scoring below `relevance_cutoff`: the pool an
    /// elusion test samples from.
    pub fn predicted_non_relevant(&self) -> TarResult<Vec<String>> {
        self.non_relevant_pool("predicted_non_relevant")
    }

    fn non_relevant_pool(&self, operation: &str) -> TarResult<Vec<String>> {
        let cutoff = self.config.review.relevance_cutoff;
        Ok(self
            .scored_unjudged(operation)?
            .into_iter()
            .filter(|d| d.score < cutoff)
            .map(|d| d.document_id)
            .collect())
    }

    /// Rank the unjudged pool and issue the top `batch_size` for review.
    pub fn rank_next_batch(&mut self) -> TarResult<ReviewBatch> {
        if self.phase == ReviewPhase::Validating || self.phase.is_terminal() {
            return Err(self.invalid_phase("rank_next_batch"));
        }
        let scored = self.scored_unjudged("rank_next_batch")?;
        let batch_size = self.config.review.batch_size;
        let span = crate::rank_span!(scored.len(), batch_size);
        let _enter = span.enter();

        if self.judgments.len() > self.trained_log_len {
            warn!(
                new_judgments = self.judgments.len() - self.trained_log_len,
                "ranking with a model that predates recent judgments"
            );
        }
        if scored.is_empty() {
            warn!("no unjudged documents left to rank");
        }

        let entries = ranking::rank(scored, batch_size);
        let batch = ReviewBatch {
            batch_number: self.batches.len() as u32 + 1,
            entries,
            created_at: Utc::now(),
        };
        info!(
            batch_number = batch.batch_number,
            size = batch.len(),
            top_score = batch.entries.first().map(|e| e.score),
            "review batch issued"
        );
        self.batches.push(batch.clone());
        self.transition(ReviewPhase::AwaitingJudgment);
        Ok(batch)
    }

    pub fn estimate_recall(&self) -> RecallEstimate {
        recall::recall_estimate(
            self.judgments.relevant_count(),
            self.judgments.judged_count(),
            self.corpus.len(),
        )
    }

    /// Draw an elusion sample from the predicted non-relevant pool. Any
    /// sample drawn earlier and not yet completed is discarded.
    pub fn begin_validation(&mut self, sample_size: usize) -> TarResult<ElusionSample> {
        if self.phase.is_terminal() {
            return Err(self.invalid_phase("begin_validation"));
        }
        if sample_size == 0 {
            return Err(TarError::empty("elusion sample size must be greater than 0"));
        }
        let pool = self.non_relevant_pool("begin_validation")?;
        let document_ids = elusion::draw_sample(&pool, sample_size, &mut self.rng);
        self.samples_drawn += 1;
        info!(
            draw_number = self.samples_drawn,
            pool = pool.len(),
            requested = sample_size,
            drawn = document_ids.len(),
            "elusion sample drawn"
        );
        let sample = ElusionSample {
            draw_number: self.samples_drawn,
            document_ids,
            candidate_pool_size: pool.len(),
            requested_size: sample_size,
            drawn_at: Utc::now(),
        };
        self.pending_sample = Some(sample.clone());
        self.transition(ReviewPhase::Validating);
        Ok(sample)
    }

    /// [`Self::begin_validation`] with `validation.sample_size` from config.
    pub fn begin_validation_with_configured_sample(&mut self) -> TarResult<ElusionSample> {
        self.begin_validation(self.config.validation.sample_size)
    }

    /// Score an elusion sample. `verdicts[i]` is the relevance call for
    /// `sample.document_ids[i]`. Verdicts are not added to the judgment log.
    ///
    /// `sample` must be the one returned by the latest `begin_validation`.
    pub fn complete_validation(
        &mut self,
        sample: &ElusionSample,
        verdicts: &[bool],
    ) -> TarResult<ValidationReport> {
        if self.phase != ReviewPhase::Validating {
            return Err(self.invalid_phase("complete_validation"));
        }
        if self.pending_sample.as_ref() != Some(sample) {
            warn!(
                draw_number = sample.draw_number,
                latest = self.samples_drawn,
                "elusion sample is not the outstanding draw"
            );
            return Err(self.invalid_phase("complete_validation with a superseded sample"));
        }
        if verdicts.len() != sample.len() {
            return Err(TarError::LengthMismatch {
                vectors: sample.len(),
                labels: verdicts.len(),
            });
        }

        let threshold = self.config.validation.elusion_threshold;
        let target_recall = self.config.review.target_recall;
        let relevant_found = verdicts.iter().filter(|&&v| v).count();
        let elusion = elusion::evaluate_sample(
            sample.candidate_pool_size,
            sample.len(),
            relevant_found,
            threshold,
        );
        let recall = self.estimate_recall();
        let elusion_adjusted_recall = recall::elusion_adjusted_recall(
            recall.relevant_reviewed,
            elusion.elusion_rate,
            sample.candidate_pool_size,
        );
        let outcome = if elusion.passes_threshold && recall.meets(target_recall) {
            ReviewPhase::Validated
        } else {
            ReviewPhase::RecallInsufficient
        };

        info!(
            recall = recall.recall,
            target_recall,
            elusion_rate = elusion.elusion_rate,
            elusion_threshold = threshold,
            elusion_adjusted_recall,
            outcome = %outcome,
            "validation complete"
        );

        let report = ValidationReport {
            recall,
            elusion,
            target_recall,
            elusion_threshold: threshold,
            candidate_pool_size: sample.candidate_pool_size,
            elusion_adjusted_recall,
            outcome,
            validated_at: Utc::now(),
        };
        self.pending_sample = None;
        self.transition(outcome);
        self.last_validation = Some(report.clone());
        Ok(report)
    }

    /// Draw an elusion sample, judge it with `judge`, and report.
    pub fn validate(
        &mut self,
        sample_size: usize,
        mut judge: impl FnMut(&str) -> bool,
    ) -> TarResult<ValidationReport> {
        let span = crate::validate_span!(sample_size);
        let _enter = span.enter();

        let sample = self.begin_validation(sample_size)?;
        let verdicts: Vec<bool> = sample
            .document_ids
            .iter()
            .map(|id| judge(id.as_str()))
            .collect();
        self.complete_validation(&sample, &verdicts)
    }

    /// [`Self::validate`] with `validation.sample_size` from config.
    pub fn validate_with_configured_sample(
        &mut self,
        judge: impl FnMut(&str) -> bool,
    ) -> TarResult<ValidationReport> {
        self.validate(self.config.validation.sample_size, judge)
    }

    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            project_id: self.project_id.clone(),
            case_name: self.case_name.clone(),
            phase: self.phase,
            corpus_size: self.corpus.len(),
            reviewed_count: self.judgments.judged_count(),
            relevant_count: self.judgments.relevant_count(),
            seed_count: self.judgments.seed_count(),
            batches_issued: self.batches.len(),
            model_accuracy: self.model.as_ref().map(RelevanceModel::training_accuracy),
            model_training_size: self.model.as_ref().map(RelevanceModel::training_size),
            model_fingerprint: self.model.as_ref().map(|m| m.fingerprint().to_string()),
            estimated_recall: self.estimate_recall().recall,
            target_recall: self.config.review.target_recall,
            elusion_rate: self
                .last_validation
                .as_ref()
                .map(|r| r.elusion.elusion_rate),
            elusion_passes_threshold: self
                .last_validation
                .as_ref()
                .map(|r| r.elusion.passes_threshold),
        }
    }
}
