//! Requirement documents on disk
//!
//! Structured requirements arrive as JSON or YAML. Both are read into a
//! [`serde_json::Value`] so the normalizer sees one shape.

use crate::error::DocumentError;
use serde_json::Value;
use std::path::Path;

/// Serialization format of a requirement document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Infer format from a file extension (`json`, `yaml`, `yml`)
    pub fn from_extension(extension: &str) -> Result<Self, DocumentError> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(DocumentError::unsupported_format(other)),
        }
    }

    /// Infer format from a path; paths without an extension are JSON
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(Ok(Self::Json), Self::from_extension)
    }
}

/// Raw, not yet normalized requirement document
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementDocument {
    value: Value,
}

impl RequirementDocument {
    /// Parse document text
    pub fn parse(text: &str, format: DocumentFormat) -> Result<Self, DocumentError> {
        let value = match format {
            DocumentFormat::Json => serde_json::from_str(text)?,
            DocumentFormat::Yaml => serde_yaml::from_str(text)?,
        };
        Ok(Self { value })
    }

    /// Wrap an already parsed value
    #[inline]
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        Self { value }
    }

    /// Parsed value, ready for normalization
    #[inline]
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    #[inline]
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }
}
