//! TF-IDF vectorizer with smoothed idf and L2-normalised rows.
//!
//! Term weights are `count × idf` with `idf = ln((1 + n) / (1 + df)) + 1`.
//! When the vocabulary exceeds `max_features`, the terms with the highest
//! corpus-wide count are kept (ties broken lexicographically) and indexed in
//! lexicographic order.

use std::collections::HashMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use tar_core::config::FeatureConfig;
use tar_core::errors::{TarError, TarResult};
use tar_core::models::SparseVector;
use tar_core::traits::IFeatureExtractor;

use crate::tokenizer::Tokenizer;

/// Fitted state: term → column index, and the idf of each column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Vocabulary {
    terms: HashMap<String, usize>,
    idf: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    config: FeatureConfig,
    tokenizer: Tokenizer,
    vocabulary: Option<Vocabulary>,
}

impl TfIdfVectorizer {
    pub fn new(config: FeatureConfig) -> Self {
        let tokenizer = Tokenizer::new(config.ngram_min, config.ngram_max, config.lowercase);
        Self {
            config,
            tokenizer,
            vocabulary: None,
        }
    }

    /// Column index of `term`, if it is in the fitted vocabulary.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.as_ref()?.terms.get(term).copied()
    }

    /// Inverse document frequency of `term`, if it is in the vocabulary.
    pub fn idf(&self, term: &str) -> Option<f64> {
        let vocab = self.vocabulary.as_ref()?;
        vocab.terms.get(term).map(|&i| vocab.idf[i])
    }

    fn term_counts(&self, text: &str) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for gram in self.tokenizer.ngrams(text) {
            *counts.entry(gram).or_insert(0) += 1;
        }
        counts
    }

    fn select_terms(&self, counts: &[HashMap<String, usize>]) -> Vec<String> {
        let mut totals: HashMap<&str, usize> = HashMap::new();
        for doc in counts {
            for (term, &c) in doc {
                *totals.entry(term.as_str()).or_insert(0) += c;
            }
        }

        let mut ranked: Vec<(&str, usize)> = totals.into_iter().collect();
        if ranked.len() > self.config.max_features {
            ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            ranked.truncate(self.config.max_features);
        }

        let mut kept: Vec<String> = ranked.into_iter().map(|(t, _)| t.to_string()).collect();
        kept.sort_unstable();
        kept
    }
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new(FeatureConfig::default())
    }
}

fn weigh(counts: &HashMap<String, usize>, vocab: &Vocabulary) -> SparseVector {
    let pairs = counts
        .iter()
        .filter_map(|(term, &c)| {
            vocab
                .terms
                .get(term)
                .map(|&i| (i, c as f64 * vocab.idf[i]))
        })
        .collect();
    let mut vector = SparseVector::from_pairs(pairs);
    vector.normalize();
    vector
}

impl IFeatureExtractor for TfIdfVectorizer {
    fn fit_transform(&mut self, texts: &[String]) -> TarResult<Vec<SparseVector>> {
        if texts.is_empty() {
            return Err(TarError::empty("cannot fit a vocabulary on zero documents"));
        }

        let counts: Vec<HashMap<String, usize>> =
            texts.par_iter().map(|t| self.term_counts(t)).collect();

        let kept = self.select_terms(&counts);
        if kept.is_empty() {
            return Err(TarError::empty(
                "no tokens of two or more word characters in the training documents",
            ));
        }

        let terms: HashMap<String, usize> = kept
            .into_iter()
            .enumerate()
            .map(|(i, t)| (t, i))
            .collect();

        let mut df = vec![0usize; terms.len()];
        for doc in &counts {
            for term in doc.keys() {
                if let Some(&i) = terms.get(term) {
                    df[i] += 1;
                }
            }
        }

        let n = texts.len() as f64;
        let idf = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let vocab = Vocabulary { terms, idf };
        let vectors = counts.par_iter().map(|c| weigh(c, &vocab)).collect();

        debug!(
            documents = texts.len(),
            vocabulary = vocab.idf.len(),
            "tfidf vocabulary fitted"
        );
        self.vocabulary = Some(vocab);
        Ok(vectors)
    }

    fn transform(&self, texts: &[String]) -> TarResult<Vec<SparseVector>> {
        let vocab = self
            .vocabulary
            .as_ref()
            .ok_or_else(|| TarError::not_trained("transform"))?;
        Ok(texts
            .par_iter()
            .map(|t| weigh(&self.term_counts(t), vocab))
            .collect())
    }

    fn vocabulary_size(&self) -> usize {
        self.vocabulary.as_ref().map_or(0, |v| v.idf.len())
    }

    fn is_fitted(&self) -> bool {
        self.vocabulary.is_some()
    }
}
