//! Batch ordering.

use tar_core::models::ScoredDocument;

/// Sort by descending score and keep the first `limit`.
///
/// The sort is stable, so equal scores keep their input (corpus) order.
pub fn rank(mut scored: Vec<ScoredDocument>, limit: usize) -> Vec<ScoredDocument> {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, score: f64) -> ScoredDocument {
        ScoredDocument {
            document_id: id.to_string(),
            score,
        }
    }

    #[test]
    fn sorts_descending_and_truncates() {
        let out = rank(vec![doc("a", 0.2), doc("b", 0.9), doc("c", 0.5)], 2);
        let ids: Vec<_> = out.iter().map(|d| d.document_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let out = rank(vec![doc("x", 0.5), doc("y", 0.7), doc("z", 0.5)], 10);
        let ids: Vec<_> = out.iter().map(|d| d.document_id.as_str()).collect();
        assert_eq!(ids, vec!["y", "x", "z"]);
    }
}
