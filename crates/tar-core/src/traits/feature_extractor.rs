use crate::errors::TarResult;
use crate::models::SparseVector;

/// Deterministic text → sparse vector mapping.
pub trait IFeatureExtractor: Send + Sync {
    /// Build a new vocabulary from `texts`, replacing any previous one, and
    /// vectorize them. Fails with `EmptyInput` on an empty slice.
    fn fit_transform(&mut self, texts: &[String]) -> TarResult<Vec<SparseVector>>;

    /// Vectorize `texts` with the fitted vocabulary. Unknown terms are dropped.
    fn transform(&self, texts: &[String]) -> TarResult<Vec<SparseVector>>;

    /// Number of terms in the fitted vocabulary (0 before fitting).
    fn vocabulary_size(&self) -> usize;

    fn is_fitted(&self) -> bool;
}
