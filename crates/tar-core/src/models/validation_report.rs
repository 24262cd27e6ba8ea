use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ElusionTestResult, RecallEstimate, ReviewPhase};
use crate::errors::TarResult;

/// Everything compliance reporting needs from one validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub recall: RecallEstimate,
    pub elusion: ElusionTestResult,
    pub target_recall: f64,
    pub elusion_threshold: f64,
    /// Size of the predicted non-relevant pool the sample was drawn from.
    pub candidate_pool_size: usize,
    /// `found / (found + elusion_rate * pool)`. Informational only; the gate
    /// uses `recall`.
    pub elusion_adjusted_recall: f64,
    /// `Validated` or `RecallInsufficient`.
    pub outcome: ReviewPhase,
    pub validated_at: DateTime<Utc>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.outcome == ReviewPhase::Validated
    }

    pub fn to_json(&self) -> TarResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
