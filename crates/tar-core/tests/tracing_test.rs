use tar_core::config::ObservabilityConfig;
use tar_core::tracing_setup::init_tracing;

#[test]
fn init_tracing_is_idempotent() {
    let config = ObservabilityConfig {
        log_level: "debug".to_string(),
        json_logs: true,
    };
    init_tracing(&config);
    init_tracing(&ObservabilityConfig::default());
    tracing::info!(target: "tar_core", "tracing initialised");
}
