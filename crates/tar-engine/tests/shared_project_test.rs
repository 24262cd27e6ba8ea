use std::thread;

use tar_core::config::TarConfig;
use tar_core::errors::TarError;
use tar_core::models::{JudgmentInput, ReviewPhase};
use tar_engine::{ReviewController, SharedReviewProject};
use test_fixtures::{contract_scenario, oracle, SyntheticDocument};

fn project() -> (SharedReviewProject, test_fixtures::ContractScenario) {
    let scenario = contract_scenario();
    let mut config = TarConfig::default();
    config.review.batch_size = 20;
    let controller = ReviewController::new("shared", scenario.corpus(), config).unwrap();
    (SharedReviewProject::new(controller), scenario)
}

#[test]
fn judgments_from_several_threads_are_all_recorded() {
    let (shared, scenario) = project();
    let handles: Vec<_> = scenario
        .seeds
        .chunks(10)
        .map(|chunk| {
            let shared = shared.clone();
            let chunk = chunk.to_vec();
            thread::spawn(move || {
                for doc in chunk {
                    shared.submit_judgment(doc.judgment()).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(shared.summary().reviewed_count, 30);
    assert_eq!(shared.phase(), ReviewPhase::Training);
    assert_eq!(shared.train().unwrap(), 1.0);
}

#[test]
fn validation_callback_runs_without_holding_the_lock() {
    let (shared, scenario) = project();
    shared
        .submit_judgments(scenario.seeds.iter().map(SyntheticDocument::judgment))
        .unwrap();
    shared.train().unwrap();
    let truth = oracle(&scenario.unjudged);

    let observer = shared.clone();
    let report = shared
        .validate(10, |id| {
            // would deadlock if the lock were held here
            assert_eq!(observer.phase(), ReviewPhase::Validating);
            truth[id]
        })
        .unwrap();

    assert_eq!(report.elusion.relevant_found, 0);
    assert_eq!(shared.phase(), report.outcome);
}

#[test]
fn with_gives_direct_access() {
    let (shared, _) = project();
    let n = shared.with(|c| {
        c.submit_judgment(JudgmentInput::new("SEED-R00", true)).unwrap();
        c.judgments().len()
    });
    assert_eq!(n, 1);
}

#[test]
fn validation_with_configured_sample_size() {
    let scenario = contract_scenario();
    let mut config = TarConfig::default();
    config.validation.sample_size = 6;
    let controller = ReviewController::new("shared", scenario.corpus(), config).unwrap();
    let shared = SharedReviewProject::new(controller);
    shared
        .submit_judgments(scenario.seeds.iter().map(SyntheticDocument::judgment))
        .unwrap();
    shared.train().unwrap();

    let report = shared.validate_with_configured_sample(|_| false).unwrap();
    assert_eq!(report.elusion.sample_size, 6);
}

#[test]
fn sample_redrawn_during_judging_invalidates_the_first() {
    let (shared, scenario) = project();
    shared
        .submit_judgments(scenario.seeds.iter().map(SyntheticDocument::judgment))
        .unwrap();
    shared.train().unwrap();

    let other = shared.clone();
    let mut redrawn = None;
    let err = shared
        .validate(5, |_| {
            if redrawn.is_none() {
                redrawn = Some(other.with(|c| c.begin_validation(5)).unwrap());
            }
            false
        })
        .unwrap_err();
    assert!(matches!(err, TarError::InvalidPhase { .. }));

    let sample = redrawn.unwrap();
    let report = shared
        .with(|c| c.complete_validation(&sample, &vec![false; sample.len()]))
        .unwrap();
    assert_eq!(report.elusion.sample_size, sample.len());
}
