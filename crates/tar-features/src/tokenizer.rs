//! Word tokenization and n-gram expansion.

use std::sync::LazyLock;

use regex::Regex;

/// Tokens are runs of two or more word characters.
static TOKEN_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?u)\b\w\w+\b").ok());

/// Splits text into word n-grams.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    ngram_min: usize,
    ngram_max: usize,
    lowercase: bool,
}

impl Tokenizer {
    pub fn new(ngram_min: usize, ngram_max: usize, lowercase: bool) -> Self {
        let ngram_min = ngram_min.max(1);
        Self {
            ngram_min,
            ngram_max: ngram_max.max(ngram_min),
            lowercase,
        }
    }

    /// Unigram tokens in document order.
    pub fn words(&self, text: &str) -> Vec<String> {
        let Some(re) = TOKEN_RE.as_ref() else {
            return Vec::new();
        };
        let iter = re.find_iter(text).map(|m| m.as_str());
        if self.lowercase {
            iter.map(str::to_lowercase).collect()
        } else {
            iter.map(str::to_string).collect()
        }
    }

    /// All n-grams with `ngram_min <= n <= ngram_max`, words joined by a
    /// single space.
    pub fn ngrams(&self, text: &str) -> Vec<String> {
        let words = self.words(text);
        let mut out = Vec::new();
        for n in self.ngram_min..=self.ngram_max {
            if n > words.len() {
                break;
            }
            if n == 1 {
                out.extend(words.iter().cloned());
            } else {
                out.extend(words.windows(n).map(|w| w.join(" ")));
            }
        }
        out
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(1, 2, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_single_character_tokens_and_punctuation() {
        let t = Tokenizer::default();
        assert_eq!(
            t.words("A Master Services Agreement, i.e. the MSA!"),
            vec!["master", "services", "agreement", "the", "msa"]
        );
    }

    #[test]
    fn produces_unigrams_then_bigrams() {
        let t = Tokenizer::new(1, 2, true);
        assert_eq!(
            t.ngrams("breach of contract"),
            vec!["breach", "of", "contract", "breach of", "of contract"]
        );
    }

    #[test]
    fn bigram_only_on_short_text() {
        let t = Tokenizer::new(2, 2, true);
        assert!(t.ngrams("indemnity").is_empty());
    }

    #[test]
    fn preserves_case_when_configured() {
        let t = Tokenizer::new(1, 1, false);
        assert_eq!(t.words("NDA Draft"), vec!["NDA", "Draft"]);
    }
}
