use thiserror::Error;

/// Configuration failures, the only errors this tool lets escape a
/// component. Load failures carry their own tagged type in the loader, and
/// request failures are outcomes, not errors.
#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, SweepError>;
