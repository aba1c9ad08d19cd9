//! Error types for loading inputs and exporting projections

use std::path::PathBuf;

/// Errors raised outside the calculator itself
///
/// The corpus calculator is total over non-negative inputs; everything that can
/// fail lives around it (file loading, validation, export).
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A form value outside its accepted range
    #[error("invalid {field}: {message}")]
    InvalidInput { field: String, message: String },

    #[error("unsupported file format: {0}")]
    UnsupportedFormat(PathBuf),
}

impl PlannerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
