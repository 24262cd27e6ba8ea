use tar_core::errors::*;

#[test]
fn insufficient_seed_carries_counts() {
    let err = TarError::InsufficientSeed {
        judged: 12,
        required: 25,
        distinct_labels: 1,
    };
    let msg = err.to_string();
    assert!(msg.contains("12"));
    assert!(msg.contains("25"));
}

#[test]
fn model_not_trained_names_operation() {
    let err = TarError::not_trained("rank");
    assert!(err.to_string().contains("rank"));
    assert!(!err.is_transient());
}

#[test]
fn empty_input_carries_reason() {
    let err = TarError::empty("no texts to fit");
    assert!(matches!(err, TarError::EmptyInput { .. }));
    assert!(err.to_string().contains("no texts to fit"));
}

#[test]
fn training_failure_is_transient() {
    let err = TarError::TrainingFailed {
        reason: "non-finite weights".into(),
    };
    assert!(err.is_transient());
}

#[test]
fn unknown_document_carries_id() {
    let err = TarError::UnknownDocument {
        id: "DOC-0042".into(),
    };
    assert!(err.to_string().contains("DOC-0042"));
}

// --- From impls ---

#[test]
fn config_error_converts_to_tar_error() {
    let cfg_err = ConfigError::ValidationFailed {
        field: "review.batch_size".into(),
        message: "must be greater than 0".into(),
    };
    let err: TarError = cfg_err.into();
    assert!(matches!(err, TarError::ConfigError(_)));
    assert!(err.to_string().contains("review.batch_size"));
}

#[test]
fn serde_json_error_converts_to_tar_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: TarError = json_err.into();
    assert!(matches!(err, TarError::SerializationError(_)));
}
