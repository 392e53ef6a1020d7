use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid draw: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid data file format: {0}")]
    Format(String),

    #[error("Failed to load default lotto data: {0}")]
    LoadFailure(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}

impl AppError {
    /// Errors caused by what the user typed or supplied, as opposed to the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(self, AppError::Validation(_) | AppError::Format(_))
    }
}

/// Why a proposed draw was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please enter 6 numbers")]
    EmptyInput,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("expected 6 numbers, got {found}")]
    WrongCount { found: usize },

    #[error("{0} is outside 1-45")]
    OutOfRange(i64),

    #[error("{0} appears more than once")]
    Duplicate(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_converts_into_app_error() {
        let err: AppError = ValidationError::Duplicate(7).into();
        assert!(err.is_user_error());
        assert_eq!(err.to_string(), "Invalid draw: 7 appears more than once");
    }

    #[test]
    fn test_environment_errors_are_not_user_errors() {
        assert!(!AppError::LoadFailure("status 404".into()).is_user_error());
        assert!(!AppError::Storage("disk full".into()).is_user_error());
    }
}
