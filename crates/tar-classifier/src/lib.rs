//! # tar-classifier
//!
//! Binary relevance classifier trained on judged documents.

pub mod class_weights;
pub mod logistic;

pub use class_weights::balanced_class_weights;
pub use logistic::LogisticRegression;
