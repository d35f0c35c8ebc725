use super::config::ConfigError;
use crate::core::models::motif::MotifSetError;
use crate::core::scoring::ScoringError;
use thiserror::Error;

/// Coarse classification of [`EngineError`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    EmptyInput,
    Internal,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Scoring failed: {source}")]
    Scoring {
        #[from]
        source: ScoringError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Invalid motif set: {source}")]
    MotifSet {
        #[from]
        source: MotifSetError,
    },

    #[error("Internal logic error: {0}")]
    Internal(String),
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::InvalidInput(_) | EngineError::Config { .. } => ErrorKind::InvalidInput,
            EngineError::EmptyInput(_) => ErrorKind::EmptyInput,
            EngineError::Scoring { source } => match source {
                ScoringError::EmptyInput(_) => ErrorKind::EmptyInput,
                ScoringError::InvalidInput(_) => ErrorKind::InvalidInput,
            },
            EngineError::MotifSet { source } => match source {
                MotifSetError::Empty => ErrorKind::EmptyInput,
                _ => ErrorKind::InvalidInput,
            },
            EngineError::Internal(_) => ErrorKind::Internal,
        }
    }
}
