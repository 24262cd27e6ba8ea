//! # tar-features
//!
//! Sparse TF-IDF features over word n-grams. The vocabulary is fit on the
//! judged documents and reused to score the rest of the corpus.

pub mod tokenizer;
pub mod vectorizer;

pub use tokenizer::Tokenizer;
pub use vectorizer::TfIdfVectorizer;
