// Single source of truth for all default values.

// --- Features ---
pub const DEFAULT_MAX_FEATURES: usize = 50_000;
pub const DEFAULT_NGRAM_MIN: usize = 1;
pub const DEFAULT_NGRAM_MAX: usize = 2;
pub const DEFAULT_LOWERCASE: bool = true;

// --- Classifier ---
pub const DEFAULT_INVERSE_REGULARIZATION: f64 = 1.0;
pub const DEFAULT_MAX_ITER: usize = 1_000;
pub const DEFAULT_TOLERANCE: f64 = 1e-4;
pub const DEFAULT_LEARNING_RATE: f64 = 1.0;
pub const DEFAULT_CLASS_WEIGHT_BALANCED: bool = true;

// --- Review loop ---
pub const DEFAULT_MIN_SEED_SIZE: usize = 25;
pub const DEFAULT_BATCH_SIZE: usize = 100;
pub const DEFAULT_TARGET_RECALL: f64 = 0.85;
pub const DEFAULT_RELEVANCE_CUTOFF: f64 = 0.5;
pub const DEFAULT_RANDOM_SEED: u64 = 42;

// --- Validation ---
pub const DEFAULT_ELUSION_THRESHOLD: f64 = 0.01; // TREC Total Recall acceptance
pub const DEFAULT_ELUSION_SAMPLE_SIZE: usize = 385; // 95% confidence, ±5% margin

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
