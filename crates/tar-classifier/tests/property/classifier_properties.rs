use proptest::prelude::*;
use tar_core::config::ClassifierConfig;
use tar_core::models::SparseVector;
use tar_core::traits::IRelevanceClassifier;
use tar_classifier::LogisticRegression;

fn arb_vector() -> impl Strategy<Value = SparseVector> {
    prop::collection::vec((0usize..16, -3.0f64..3.0), 0..6).prop_map(SparseVector::from_pairs)
}

fn arb_training_set() -> impl Strategy<Value = (Vec<SparseVector>, Vec<bool>)> {
    prop::collection::vec((arb_vector(), any::<bool>()), 4..30).prop_map(|rows| {
        let (x, mut y): (Vec<_>, Vec<_>) = rows.into_iter().unzip();
        // Guarantee both labels are present.
        y[0] = true;
        y[1] = false;
        (x, y)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn probabilities_are_in_unit_interval(
        (x, y) in arb_training_set(),
        probe in prop::collection::vec(arb_vector(), 1..10),
    ) {
        let mut clf = LogisticRegression::new(ClassifierConfig::default(), 2);
        let accuracy = clf.train(&x, &y).unwrap();
        prop_assert!((0.0..=1.0).contains(&accuracy));
        for p in clf.predict(&probe).unwrap() {
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn identical_inputs_give_identical_predictions(
        (x, y) in arb_training_set(),
        probe in prop::collection::vec(arb_vector(), 1..10),
    ) {
        let mut a = LogisticRegression::new(ClassifierConfig::default(), 2);
        let mut b = LogisticRegression::new(ClassifierConfig::default(), 2);
        a.train(&x, &y).unwrap();
        b.train(&x, &y).unwrap();
        prop_assert_eq!(a.predict(&probe).unwrap(), b.predict(&probe).unwrap());
    }
}
