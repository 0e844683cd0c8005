use navmark_core::EngineError;
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] navmark_core::ValidationError),

    #[error("insufficient data: {0}")]
    InsufficientData(String),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::InsufficientData(_) => 3,
            Self::Command(_) | Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}

impl From<EngineError> for CliError {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::Validation(validation) => Self::Validation(validation),
            EngineError::InsufficientData => {
                Self::InsufficientData(String::from("no overlapping data points"))
            }
            EngineError::Serialization(serialization) => Self::Serialization(serialization),
        }
    }
}
