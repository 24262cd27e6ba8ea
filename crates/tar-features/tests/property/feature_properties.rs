use proptest::prelude::*;
use tar_core::traits::IFeatureExtractor;
use tar_features::TfIdfVectorizer;

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{2,8}", 1..12).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn rows_have_unit_or_zero_norm(texts in prop::collection::vec(arb_text(), 1..20)) {
        let mut v = TfIdfVectorizer::default();
        let rows = v.fit_transform(&texts).unwrap();
        prop_assert_eq!(rows.len(), texts.len());
        for row in rows {
            let norm = row.l2_norm();
            prop_assert!(row.is_empty() || (norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn indices_stay_within_vocabulary(
        train in prop::collection::vec(arb_text(), 1..10),
        probe in prop::collection::vec(arb_text(), 1..10),
    ) {
        let mut v = TfIdfVectorizer::default();
        v.fit_transform(&train).unwrap();
        let dim = v.vocabulary_size();
        for row in v.transform(&probe).unwrap() {
            prop_assert!(row.min_dimension() <= dim);
        }
    }

    #[test]
    fn fitting_is_deterministic(texts in prop::collection::vec(arb_text(), 1..10)) {
        let mut a = TfIdfVectorizer::default();
        let mut b = TfIdfVectorizer::default();
        prop_assert_eq!(a.fit_transform(&texts).unwrap(), b.fit_transform(&texts).unwrap());
    }
}
