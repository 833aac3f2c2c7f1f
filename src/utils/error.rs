use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

/// The two outcomes a failed job is reported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    ConversionFailure,
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::NotFound { .. } => ErrorKind::NotFound,
            _ => ErrorKind::ConversionFailure,
        }
    }

    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ConvertError::NotFound { path: path.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ConvertError::ValidationError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
