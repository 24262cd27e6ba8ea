use serde::{Deserialize, Serialize};

/// Where a review project sits in the CAL protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewPhase {
    /// Accumulating the initial judged sample.
    SeedCollection,
    /// Enough judgments exist; a (re)fit is due.
    Training,
    /// A model is fit and the next batch can be ranked.
    Ranking,
    /// A batch is out with reviewers.
    AwaitingJudgment,
    /// An elusion sample has been drawn and is being reviewed.
    Validating,
    /// Elusion and recall both met their targets.
    Validated,
    /// Validation ran and failed; ranking continues.
    RecallInsufficient,
}

impl ReviewPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SeedCollection => "seed_collection",
            Self::Training => "training",
            Self::Ranking => "ranking",
            Self::AwaitingJudgment => "awaiting_judgment",
            Self::Validating => "validating",
            Self::Validated => "validated",
            Self::RecallInsufficient => "recall_insufficient",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Validated)
    }
}

impl std::fmt::Display for ReviewPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
