//! The fixed document population of a review project.

use std::collections::HashMap;

use tar_core::errors::{TarError, TarResult};
use tar_core::models::CorpusDocument;

/// Documents in submission order with an id index. Immutable once built.
#[derive(Debug, Clone)]
pub struct ReviewCorpus {
    documents: Vec<CorpusDocument>,
    positions: HashMap<String, usize>,
}

impl ReviewCorpus {
    pub fn new(documents: impl IntoIterator<Item = CorpusDocument>) -> TarResult<Self> {
        let documents: Vec<CorpusDocument> = documents.into_iter().collect();
        if documents.is_empty() {
            return Err(TarError::empty("a review corpus needs at least one document"));
        }

        let mut positions = HashMap::with_capacity(documents.len());
        for (pos, doc) in documents.iter().enumerate() {
            if positions.insert(doc.id.clone(), pos).is_some() {
                return Err(TarError::DuplicateDocument { id: doc.id.clone() });
            }
        }
        Ok(Self {
            documents,
            positions,
        })
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Submission position of `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn get(&self, id: &str) -> Option<&CorpusDocument> {
        self.position(id).map(|p| &self.documents[p])
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.get(id).map(|d| d.text.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CorpusDocument> {
        self.documents.iter()
    }
}
