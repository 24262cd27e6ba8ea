mod config_error;
mod tar_error;

pub use config_error::ConfigError;
pub use tar_error::TarError;

/// Convenience alias used across the workspace.
pub type TarResult<T> = Result<T, TarError>;
