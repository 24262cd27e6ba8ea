//! Append-only judgment log.
//!
//! Every submission is kept. The effective label of a document is its most
//! recent judgment, so a correction is simply a later entry.

use std::collections::HashMap;

use chrono::Utc;

use tar_core::models::{Judgment, JudgmentInput};

use crate::corpus::ReviewCorpus;

#[derive(Debug, Clone, Default)]
pub struct JudgmentLog {
    entries: Vec<Judgment>,
    /// document id → index of its latest entry.
    latest: HashMap<String, usize>,
    relevant: usize,
}

impl JudgmentLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a judgment and make it the document's effective label.
    pub fn record(&mut self, input: JudgmentInput, is_seed: bool) -> &Judgment {
        let index = self.entries.len();
        if let Some(prev) = self.latest.insert(input.document_id.clone(), index) {
            if self.entries[prev].is_relevant {
                self.relevant -= 1;
            }
        }
        if input.is_relevant {
            self.relevant += 1;
        }

        self.entries.push(Judgment {
            sequence: index as u64,
            document_id: input.document_id,
            is_relevant: input.is_relevant,
            is_seed,
            reviewer: input.reviewer,
            notes: input.notes,
            judged_at: Utc::now(),
        });
        &self.entries[index]
    }

    /// Latest judgment for `id`.
    pub fn effective(&self, id: &str) -> Option<&Judgment> {
        self.latest.get(id).map(|&i| &self.entries[i])
    }

    pub fn is_judged(&self, id: &str) -> bool {
        self.latest.contains_key(id)
    }

    /// Distinct documents with at least one judgment.
    pub fn judged_count(&self) -> usize {
        self.latest.len()
    }

    /// Distinct documents whose effective label is relevant.
    pub fn relevant_count(&self) -> usize {
        self.relevant
    }

    /// Distinct documents whose effective judgment was a seed judgment.
    pub fn seed_count(&self) -> usize {
        self.latest
            .values()
            .filter(|&&i| self.entries[i].is_seed)
            .count()
    }

    /// Every submission, oldest first.
    pub fn entries(&self) -> &[Judgment] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All judgments for `id`, oldest first.
    pub fn history<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Judgment> + 'a {
        self.entries.iter().filter(move |j| j.document_id == id)
    }

    /// Documents judged both relevant and non-relevant at some point, in
    /// order of first judgment.
    pub fn conflicts(&self) -> Vec<String> {
        let mut seen: HashMap<&str, (bool, bool)> = HashMap::new();
        let mut order = Vec::new();
        for j in &self.entries {
            let labels = seen.entry(j.document_id.as_str()).or_insert_with(|| {
                order.push(j.document_id.as_str());
                (false, false)
            });
            if j.is_relevant {
                labels.0 = true;
            } else {
                labels.1 = true;
            }
        }
        order
            .into_iter()
            .filter(|id| seen.get(id).is_some_and(|&(r, n)| r && n))
            .map(str::to_string)
            .collect()
    }

    /// Effective labels of judged documents, in corpus order.
    pub fn labelled<'c>(&self, corpus: &'c ReviewCorpus) -> Vec<(&'c str, bool)> {
        corpus
            .iter()
            .filter_map(|doc| {
                self.effective(&doc.id)
                    .map(|j| (doc.id.as_str(), j.is_relevant))
            })
            .collect()
    }
}
