//! Synthetic corpora and golden data for review-engine tests and benches.
//!
//! Everything here is deterministic: the same arguments always produce the
//! same documents in the same order.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tar_core::models::{CorpusDocument, JudgmentInput};

/// Filler words shared by both classes so only the class marker separates
/// them.
const TOPICS: [&str; 15] = [
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india", "juliet",
    "kilo", "lima", "mike", "november", "oscar",
];

/// A document with its ground-truth label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticDocument {
    pub id: String,
    pub text: String,
    pub relevant: bool,
}

impl SyntheticDocument {
    pub fn to_corpus_document(&self) -> CorpusDocument {
        CorpusDocument::new(self.id.clone(), self.text.clone())
    }

    /// The judgment a perfect reviewer would submit.
    pub fn judgment(&self) -> JudgmentInput {
        JudgmentInput::new(self.id.clone(), self.relevant).by("fixture-oracle")
    }
}

/// Seeds and unjudged documents for the "contract" ranking scenario.
#[derive(Debug, Clone)]
pub struct ContractScenario {
    /// 15 relevant documents mentioning "contract", then 15 that do not.
    pub seeds: Vec<SyntheticDocument>,
    /// 50 documents alternating between mentioning "contract" and not.
    pub unjudged: Vec<SyntheticDocument>,
}

impl ContractScenario {
    /// Seeds followed by unjudged documents, as corpus input.
    pub fn corpus(&self) -> Vec<CorpusDocument> {
        self.seeds
            .iter()
            .chain(&self.unjudged)
            .map(SyntheticDocument::to_corpus_document)
            .collect()
    }
}

pub fn contract_scenario() -> ContractScenario {
    let mut seeds = Vec::with_capacity(30);
    for (i, topic) in TOPICS.iter().enumerate() {
        seeds.push(SyntheticDocument {
            id: format!("SEED-R{i:02}"),
            text: format!("the contract {topic}"),
            relevant: true,
        });
    }
    for (i, topic) in TOPICS.iter().enumerate() {
        seeds.push(SyntheticDocument {
            id: format!("SEED-N{i:02}"),
            text: format!("the memo {topic}"),
            relevant: false,
        });
    }

    let unjudged = (0..50)
        .map(|i| {
            let topic = TOPICS[(i / 2) % TOPICS.len()];
            let relevant = i % 2 == 0;
            let marker = if relevant { "contract" } else { "memo" };
            SyntheticDocument {
                id: format!("DOC-{i:03}"),
                text: format!("the {marker} {topic}"),
                relevant,
            }
        })
        .collect();

    ContractScenario { seeds, unjudged }
}

/// `size` documents where every `relevant_every`-th one (starting at index 0)
/// is relevant.
pub fn synthetic_corpus(size: usize, relevant_every: usize) -> Vec<SyntheticDocument> {
    let every = relevant_every.max(1);
    (0..size)
        .map(|i| {
            let topic = TOPICS[i % TOPICS.len()];
            let relevant = i % every == 0;
            let text = if relevant {
                format!("privileged contract breach notice from counsel about {topic}")
            } else {
                format!("quarterly newsletter cafeteria menu and parking update about {topic}")
            };
            SyntheticDocument {
                id: format!("DOC-{i:04}"),
                text,
                relevant,
            }
        })
        .collect()
}

pub fn corpus_documents(docs: &[SyntheticDocument]) -> Vec<CorpusDocument> {
    docs.iter().map(SyntheticDocument::to_corpus_document).collect()
}

/// Ground truth by document id.
pub fn oracle(docs: &[SyntheticDocument]) -> HashMap<String, bool> {
    docs.iter().map(|d| (d.id.clone(), d.relevant)).collect()
}

/// The first `relevant` relevant and first `non_relevant` non-relevant
/// documents, relevant ones first.
pub fn seed_selection(
    docs: &[SyntheticDocument],
    relevant: usize,
    non_relevant: usize,
) -> Vec<SyntheticDocument> {
    let pos = docs.iter().filter(|d| d.relevant).take(relevant);
    let neg = docs.iter().filter(|d| !d.relevant).take(non_relevant);
    pos.chain(neg).cloned().collect()
}

/// Golden elusion arithmetic case.
#[derive(Debug, Clone, Deserialize)]
pub struct ElusionCase {
    pub name: String,
    pub sample_size: usize,
    pub relevant_found: usize,
    pub threshold: f64,
    pub expected_rate: f64,
    pub expected_pass: bool,
}

fn data_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON file under `data/`.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = data_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}
