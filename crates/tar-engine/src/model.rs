//! A fitted vectorizer and classifier pair.

use chrono::{DateTime, Utc};
use tracing::debug;

use tar_classifier::LogisticRegression;
use tar_core::config::TarConfig;
use tar_core::errors::{TarError, TarResult};
use tar_core::traits::{IFeatureExtractor, IRelevanceClassifier};
use tar_features::TfIdfVectorizer;

/// Relevance model fit on one snapshot of the effective judgments.
///
/// Never updated in place. Retraining builds a new model from scratch.
#[derive(Debug, Clone)]
pub struct RelevanceModel {
    vectorizer: TfIdfVectorizer,
    classifier: LogisticRegression,
    training_size: usize,
    training_accuracy: f64,
    fingerprint: String,
    trained_at: DateTime<Utc>,
}

impl RelevanceModel {
    /// Fit on `(document_id, text, label)` rows. The rows' order is part of
    /// the model's identity.
    pub fn fit(config: &TarConfig, rows: &[(&str, &str, bool)]) -> TarResult<Self> {
        if rows.is_empty() {
            return Err(TarError::empty("no judged documents to train on"));
        }
        let texts: Vec<String> = rows.iter().map(|(_, t, _)| t.to_string()).collect();
        let labels: Vec<bool> = rows.iter().map(|&(_, _, l)| l).collect();

        let mut vectorizer = TfIdfVectorizer::new(config.features.clone());
        let vectors = vectorizer.fit_transform(&texts)?;

        let mut classifier =
            LogisticRegression::new(config.classifier.clone(), config.review.min_seed_size);
        let training_accuracy = classifier.train(&vectors, &labels)?;

        let fingerprint = training_fingerprint(rows.iter().map(|&(id, _, l)| (id, l)));
        debug!(
            vocabulary = vectorizer.vocabulary_size(),
            fingerprint = %fingerprint,
            "relevance model fit"
        );

        Ok(Self {
            vectorizer,
            classifier,
            training_size: rows.len(),
            training_accuracy,
            fingerprint,
            trained_at: Utc::now(),
        })
    }

    /// Relevance probabilities for `texts`, in input order.
    pub fn score(&self, texts: &[String]) -> TarResult<Vec<f64>> {
        let vectors = self.vectorizer.transform(texts)?;
        self.classifier.predict(&vectors)
    }

    pub fn training_size(&self) -> usize {
        self.training_size
    }

    /// Accuracy on the training set at a 0.5 cut-off. A sanity signal only.
    pub fn training_accuracy(&self) -> f64 {
        self.training_accuracy
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn trained_at(&self) -> DateTime<Utc> {
        self.trained_at
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }
}

/// blake3 digest of an ordered `(document_id, label)` sequence.
pub fn training_fingerprint<'a>(pairs: impl IntoIterator<Item = (&'a str, bool)>) -> String {
    let mut hasher = blake3::Hasher::new();
    for (id, label) in pairs {
        hasher.update(id.as_bytes());
        hasher.update(&[0, u8::from(label)]);
    }
    hasher.finalize().to_hex().to_string()
}
