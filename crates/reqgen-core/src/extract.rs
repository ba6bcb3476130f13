//! Free-text requirement extraction
//!
//! An extractor turns a requirement sentence into a raw structured value for
//! the normalizer. Model-backed extractors live outside this workspace and
//! plug in through [`RequirementExtractor`].

use crate::error::ExtractionError;
use serde_json::{json, Value};

/// Turns free-text requirements into raw structured values
pub trait RequirementExtractor: std::fmt::Debug + Send + Sync {
    /// Extract a structured requirement from `raw_text`
    ///
    /// The returned value may use any key aliases the normalizer accepts.
    fn extract(&self, raw_text: &str) -> Result<Value, ExtractionError>;
}

/// Deterministic fallback used when no extraction backend is configured
///
/// Always yields the same sample requirement, whatever the text says.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateExtractor;

impl TemplateExtractor {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RequirementExtractor for TemplateExtractor {
    fn extract(&self, raw_text: &str) -> Result<Value, ExtractionError> {
        if raw_text.trim().is_empty() {
            return Err(ExtractionError::EmptyInput);
        }

        tracing::warn!(
            chars = raw_text.len(),
            "no extraction backend configured, using sample requirement"
        );

        Ok(json!({
            "feature_name": "Sample Feature",
            "actors": ["User"],
            "functional_fields": ["Field1"],
            "validations": {"Field1": "Required"},
            "business_rules": ["Rule 1"],
            "edge_cases": ["Edge 1"],
            "risk_analysis": {
                "high_risk_areas": ["Validation"],
                "ambiguities": ["None"],
                "missing_requirements": ["None"],
            },
        }))
    }
}
