mod batch;
mod document;
mod elusion;
mod judgment;
mod phase;
mod recall;
mod sparse_vector;
mod summary;
mod validation_report;

pub use batch::{ReviewBatch, ScoredDocument};
pub use document::CorpusDocument;
pub use elusion::ElusionTestResult;
pub use judgment::{Judgment, JudgmentInput};
pub use phase::ReviewPhase;
pub use recall::RecallEstimate;
pub use sparse_vector::SparseVector;
pub use summary::ProjectSummary;
pub use validation_report::ValidationReport;
