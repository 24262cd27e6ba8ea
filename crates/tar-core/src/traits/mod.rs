mod classifier;
mod feature_extractor;

pub use classifier::IRelevanceClassifier;
pub use feature_extractor::IFeatureExtractor;
