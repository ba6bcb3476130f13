//! Coverage error types

/// Traceability construction error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceabilityError {
    #[error("cannot create traceability matrix for '{feature}': test suite is empty")]
    EmptySuite { feature: String },
}

impl TraceabilityError {
    /// Create empty-suite error
    pub fn empty_suite(feature: impl Into<String>) -> Self {
        Self::EmptySuite {
            feature: feature.into(),
        }
    }
}

/// Metrics calculation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricsError {
    #[error("cannot calculate metrics for '{feature}': test suite is empty")]
    EmptySuite { feature: String },
}

impl MetricsError {
    /// Create empty-suite error
    pub fn empty_suite(feature: impl Into<String>) -> Self {
        Self::EmptySuite {
            feature: feature.into(),
        }
    }
}
