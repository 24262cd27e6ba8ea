use proptest::prelude::*;
use tar_engine::recall::{estimate_recall, recall_estimate};

proptest! {
    #[test]
    fn recall_is_bounded(
        corpus in 1usize..5000,
        reviewed_frac in 0.0f64..=1.0,
        relevant_frac in 0.0f64..=1.0,
    ) {
        let reviewed = (corpus as f64 * reviewed_frac) as usize;
        let relevant = (reviewed as f64 * relevant_frac) as usize;
        let r = estimate_recall(relevant, reviewed, corpus);
        prop_assert!((0.0..=1.0).contains(&r));
    }

    #[test]
    fn recall_non_decreasing_in_relevant_reviewed(
        corpus in 1usize..5000,
        reviewed_frac in 0.0f64..=1.0,
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
    ) {
        let reviewed = (corpus as f64 * reviewed_frac) as usize;
        let lo = (reviewed as f64 * a.min(b)) as usize;
        let hi = (reviewed as f64 * a.max(b)) as usize;
        let r_lo = estimate_recall(lo, reviewed, corpus);
        let r_hi = estimate_recall(hi, reviewed, corpus);
        prop_assert!(r_lo <= r_hi + 1e-12, "{} > {}", r_lo, r_hi);
    }

    #[test]
    fn nothing_reviewed_means_zero_recall(corpus in 0usize..100_000) {
        prop_assert_eq!(estimate_recall(0, 0, corpus), 0.0);
    }

    #[test]
    fn prevalence_is_relevant_share(
        reviewed in 1usize..1000,
        frac in 0.0f64..=1.0,
    ) {
        let relevant = (reviewed as f64 * frac) as usize;
        let est = recall_estimate(relevant, reviewed, 10_000);
        prop_assert!((est.estimated_prevalence - relevant as f64 / reviewed as f64).abs() < 1e-12);
    }
}
