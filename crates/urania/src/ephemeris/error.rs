use thiserror::Error;

/// Errors that can occur while obtaining positions
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Failed to calculate position for {body}: {message}")]
    CalculationFailed { body: String, message: String },
    #[error("Provider reported no position for {0}")]
    MissingBody(String),
    #[error("Expected {expected} house cusps, got {found}")]
    InvalidCusps { expected: usize, found: usize },
    #[error("Failed to parse positions: {0}")]
    Parse(String),
    #[error("Failed to read positions: {0}")]
    Io(#[from] std::io::Error),
}
