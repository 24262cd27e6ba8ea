use crate::errors::TarResult;
use crate::models::SparseVector;

/// Binary relevance classifier with probability output.
pub trait IRelevanceClassifier: Send + Sync {
    /// Fit on labelled vectors (`true` = relevant) and return training-set
    /// accuracy. The accuracy is a sanity signal, not a generalisation estimate.
    fn train(&mut self, vectors: &[SparseVector], labels: &[bool]) -> TarResult<f64>;

    /// Relevance probabilities in [0, 1], one per vector.
    fn predict(&self, vectors: &[SparseVector]) -> TarResult<Vec<f64>>;

    fn is_trained(&self) -> bool;
}
