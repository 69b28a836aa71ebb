use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("At least one ingredient is required")]
    NoIngredients,

    #[error("Invalid input")]
    Invalid,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error")]
    InternalServerError,
}
