//! Generator configuration

use crate::error::ConfigError;
use reqgen_coverage::TraceabilityBuilder;
use reqgen_synthesis::{AutomationConfig, SynthesisConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Traceability settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraceabilityConfig {
    /// Prepended to the upper-cased feature name
    pub requirement_id_prefix: String,
}

impl Default for TraceabilityConfig {
    fn default() -> Self {
        Self {
            requirement_id_prefix: TraceabilityBuilder::DEFAULT_PREFIX.to_string(),
        }
    }
}

/// Generator configuration
///
/// ```toml
/// [synthesis]
/// boundary_keywords = ["min", "max"]
///
/// [automation]
/// package = "com.automation.tests"
/// base_url = "http://localhost:8080"
/// driver_path = "path/to/chromedriver"
/// implicit_wait_secs = 10
///
/// [traceability]
/// requirement_id_prefix = "REQ_"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub synthesis: SynthesisConfig,
    pub automation: AutomationConfig,
    pub traceability: TraceabilityConfig,
}

impl GeneratorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    ///
    /// Missing sections and keys take their defaults; unknown keys fail.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded generator configuration");
        Ok(config)
    }

    /// With boundary keywords
    #[inline]
    #[must_use]
    pub fn with_boundary_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synthesis.boundary_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// With Java package for automation scripts
    #[inline]
    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.automation.package = package.into();
        self
    }

    /// With application base URL for automation scripts
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.automation.base_url = base_url.into();
        self
    }

    /// With requirement id prefix
    #[inline]
    #[must_use]
    pub fn with_requirement_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.traceability.requirement_id_prefix = prefix.into();
        self
    }
}
