//! # tar-engine
//!
//! The continuous active learning loop. A [`ReviewController`] owns one
//! corpus and drives it from seed collection through ranked review rounds to
//! elusion-tested validation.

pub mod controller;
pub mod corpus;
pub mod elusion;
pub mod judgments;
pub mod model;
pub mod ranking;
pub mod recall;
pub mod shared;
pub mod spans;

pub use controller::{ElusionSample, ReviewController};
pub use corpus::ReviewCorpus;
pub use judgments::JudgmentLog;
pub use model::RelevanceModel;
pub use shared::SharedReviewProject;
