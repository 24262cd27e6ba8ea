//! Spans for the review loop's long-running operations.

/// Span around model training.
#[macro_export]
macro_rules! train_span {
    ($judged:expr) => {
        tracing::info_span!($crate::spans::names::TRAIN, judged = $judged)
    };
}

/// Span around ranking a batch.
#[macro_export]
macro_rules! rank_span {
    ($unjudged:expr, $batch_size:expr) => {
        tracing::info_span!(
            $crate::spans::names::RANK,
            unjudged = $unjudged,
            batch_size = $batch_size
        )
    };
}

/// Span around a validation run.
#[macro_export]
macro_rules! validate_span {
    ($sample_size:expr) => {
        tracing::info_span!($crate::spans::names::VALIDATE, sample_size = $sample_size)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const TRAIN: &str = "tar.train";
    pub const RANK: &str = "tar.rank";
    pub const VALIDATE: &str = "tar.validate";
}

#[cfg(test)]
mod tests {
    use super::names;

    fn span_name(span: tracing::Span) -> Option<&'static str> {
        span.metadata().map(|m| m.name())
    }

    #[test]
    fn macros_use_exported_names() {
        tracing::subscriber::with_default(tracing_subscriber::registry(), || {
            assert_eq!(span_name(crate::train_span!(30)), Some(names::TRAIN));
            assert_eq!(span_name(crate::rank_span!(50, 10)), Some(names::RANK));
            assert_eq!(span_name(crate::validate_span!(385)), Some(names::VALIDATE));
        });
    }
}
