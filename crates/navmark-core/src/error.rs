use thiserror::Error;

/// Per-record and per-argument faults exposed by `navmark-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("invalid date '{value}', expected MM/DD/YYYY")]
    InvalidDate { value: String },

    #[error("invalid numeric value '{value}'")]
    InvalidValue { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },

    #[error("invalid window '{value}', expected one of 1M, 3M, 6M, 1Y, 3Y, 5Y, ALL")]
    InvalidWindow { value: String },

    #[error("normalization base must be a finite non-zero number, got {value}")]
    InvalidBase { value: f64 },

    #[error("principal must be a finite positive number, got {value}")]
    InvalidPrincipal { value: f64 },
}

/// Structural faults callers must branch on.
///
/// `InsufficientData` covers every empty-input condition: a parse that
/// yields no points, an alignment with no overlapping dates, or a window
/// filter that leaves nothing. The engine never substitutes a zero return
/// for any of these.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("insufficient data for the requested computation")]
    InsufficientData,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
