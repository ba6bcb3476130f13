//! Error types for requirement normalization

/// Errors raised while folding raw extraction output into a [`Requirement`].
///
/// [`Requirement`]: crate::Requirement
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Input was not a JSON object
    #[error("requirement must be an object, got {0}")]
    NotAnObject(&'static str),

    /// Neither `feature` nor `feature_name` was supplied
    #[error("missing required key: feature")]
    MissingFeature,

    /// A known key holds a value of the wrong shape
    #[error("'{key}' must be {expected}, got {actual}")]
    WrongType {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl ValidationError {
    /// Create wrong-type error for key
    pub fn wrong_type(key: impl Into<String>, expected: &'static str, actual: &'static str) -> Self {
        Self::WrongType {
            key: key.into(),
            expected,
            actual,
        }
    }

    /// Key the error refers to, if any
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::NotAnObject(_) => None,
            Self::MissingFeature => Some("feature"),
            Self::WrongType { key, .. } => Some(key),
        }
    }
}
