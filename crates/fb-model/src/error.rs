use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    /// Unsupported or malformed input file (override file, sheet selection).
    #[error("configuration error: {0}")]
    Config(String),
    /// A required field is absent or unusable in an override file.
    #[error("validation error: {0}")]
    Validation(String),
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read spreadsheet {}: {message}", path.display())]
    Spreadsheet { path: PathBuf, message: String },
    #[error("failed to write {}: {message}", path.display())]
    Write { path: PathBuf, message: String },
}

impl ImportError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
