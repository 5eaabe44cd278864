use std::io;

use thiserror::Error;

/// Library-wide error type for viaja operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// User input rejected before any request is built.
    #[error("{0}")]
    Validation(String),

    /// Day count outside the supported stay length.
    #[error("Invalid day count {0}: must be between 1 and 7")]
    InvalidDays(u32),

    /// The external generation call failed.
    #[error("Generation failed: {0}")]
    Generation(String),

    /// Prompt template could not be rendered.
    #[error("Prompt rendering failed: {0}")]
    PromptRender(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Whether the error was raised by input checks rather than by I/O or the remote service.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_) | AppError::InvalidDays(_))
    }
}
