//! Error types for reqgen Core
//!
//! Provides error handling for:
//! - Requirement normalization failures
//! - Traceability and metrics on unusable suites
//! - Requirement text extraction
//! - Configuration loading
//! - Requirement document parsing

use reqgen_coverage::{MetricsError, TraceabilityError};
use reqgen_requirement::ValidationError;
use std::path::PathBuf;

/// Main generator error type
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Requirement failed normalization
    #[error("invalid requirement: {0}")]
    Validation(#[from] ValidationError),

    /// Traceability matrix could not be built
    #[error("traceability failed: {0}")]
    Traceability(#[from] TraceabilityError),

    /// Metrics could not be calculated
    #[error("metrics failed: {0}")]
    Metrics(#[from] MetricsError),

    /// Free text could not be turned into a requirement
    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Requirement document could not be parsed
    #[error("document error: {0}")]
    Document(#[from] DocumentError),
}

impl GenerateError {
    /// Check if the caller supplied a bad requirement (as opposed to bad setup)
    #[inline]
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Extraction(_) | Self::Document(_)
        )
    }
}

/// Requirement extraction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    /// Nothing to extract from
    #[error("requirement text is empty")]
    EmptyInput,

    /// Backend produced something unusable
    #[error("extraction backend failed: {0}")]
    Backend(String),
}

impl ExtractionError {
    /// Create backend error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for [`GeneratorConfig`](crate::GeneratorConfig)
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Requirement document errors
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("invalid JSON requirement: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML requirement: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File extension names no known format
    #[error("unsupported requirement format: {0}")]
    UnsupportedFormat(String),
}

impl DocumentError {
    /// Create unsupported-format error
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat(extension.into())
    }
}
