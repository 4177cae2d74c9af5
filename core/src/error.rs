use thiserror::Error;

use crate::types::StaffId;

#[derive(Error, Debug)]
pub enum OpsError {
    #[error("Staff not found: {id}")]
    NotFound { id: StaffId },

    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Cannot read staff store {path}: {reason}")]
    StoreRead { path: String, reason: String },

    #[error("Cannot load historical dataset {path}: {reason}")]
    DatasetLoad { path: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OpsError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation { field, reason: reason.into() }
    }

    /// Transport-facing classification. Caller mistakes map to 4xx,
    /// everything else is a server-side failure.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. }   => 404,
            Self::Validation { .. } => 422,
            _                       => 500,
        }
    }
}

pub type OpsResult<T> = Result<T, OpsError>;
