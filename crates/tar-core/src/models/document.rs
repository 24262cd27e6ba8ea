use serde::{Deserialize, Serialize};

/// A member of the review corpus as delivered by collection tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusDocument {
    pub id: String,
    pub text: String,
}

impl CorpusDocument {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

impl<I: Into<String>, T: Into<String>> From<(I, T)> for CorpusDocument {
    fn from((id, text): (I, T)) -> Self {
        Self::new(id, text)
    }
}
