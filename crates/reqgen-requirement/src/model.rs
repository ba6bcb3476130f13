//! Canonical requirement types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field name to free-text validation rule, in declaration order
pub type Validations = IndexMap<String, String>;

/// Canonical structured description of a feature under test
///
/// Produced by [`normalize`](crate::normalize). Sequences may be empty but are
/// never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Feature name (e.g. "Login")
    pub feature: String,
    /// Input fields, in declaration order
    #[serde(default)]
    pub fields: Vec<String>,
    /// Validation rule per field
    #[serde(default)]
    pub validations: Validations,
    /// Actors allowed to use the feature
    #[serde(default)]
    pub roles: Vec<String>,
    /// Edge cases to exercise
    #[serde(default)]
    pub edge_cases: Vec<String>,
    /// Business rules stated alongside the feature
    #[serde(default)]
    pub business_rules: Vec<String>,
    /// Risk notes from extraction
    #[serde(default)]
    pub risk_analysis: RiskAnalysis,
}

impl Requirement {
    /// Create requirement with only a feature name
    #[inline]
    #[must_use]
    pub fn new(feature: impl Into<String>) -> Self {
        Self {
            feature: feature.into(),
            ..Self::default()
        }
    }

    /// With input fields
    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// With one validation rule (appended in order)
    #[must_use]
    pub fn with_validation(mut self, field: impl Into<String>, rule: impl Into<String>) -> Self {
        self.validations.insert(field.into(), rule.into());
        self
    }

    /// With roles
    #[must_use]
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// With edge cases
    #[must_use]
    pub fn with_edge_cases<I, S>(mut self, edge_cases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.edge_cases = edge_cases.into_iter().map(Into::into).collect();
        self
    }

    /// With business rules
    #[must_use]
    pub fn with_business_rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.business_rules = rules.into_iter().map(Into::into).collect();
        self
    }

    /// With risk analysis
    #[inline]
    #[must_use]
    pub fn with_risk_analysis(mut self, risk_analysis: RiskAnalysis) -> Self {
        self.risk_analysis = risk_analysis;
        self
    }

    /// Number of traceable elements (fields + edge cases)
    #[inline]
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.fields.len() + self.edge_cases.len()
    }

    /// Feature name with spaces removed, used for generated identifiers
    #[must_use]
    pub fn compact_feature(&self) -> String {
        self.feature.replace(' ', "")
    }

    /// Lower-cased, space-to-underscore form used for element locators
    #[must_use]
    pub fn locator_id(name: &str) -> String {
        name.to_lowercase().replace(' ', "_")
    }
}

/// Risk notes attached to a requirement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAnalysis {
    /// Areas most likely to break
    #[serde(default)]
    pub high_risk_areas: Vec<String>,
    /// Unclear statements in the source text
    #[serde(default)]
    pub ambiguities: Vec<String>,
    /// Gaps noticed during extraction
    #[serde(default)]
    pub missing_requirements: Vec<String>,
}

impl RiskAnalysis {
    /// True when no risk notes were recorded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.high_risk_areas.is_empty()
            && self.ambiguities.is_empty()
            && self.missing_requirements.is_empty()
    }
}
