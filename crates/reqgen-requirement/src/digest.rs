//! Content digest of a canonical requirement
//!
//! Two requirements with equal digests produce identical generated artifacts,
//! so callers can skip regeneration and change-impact work.

use crate::model::Requirement;
use serde::{Serialize, Serializer};
use std::fmt::{self, Display, Formatter};

/// Blake3 digest over every member of a [`Requirement`], in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequirementDigest([u8; 32]);

impl RequirementDigest {
    /// Compute digest of a requirement
    #[must_use]
    pub fn of(requirement: &Requirement) -> Self {
        let mut hasher = blake3::Hasher::new();

        update_str(&mut hasher, &requirement.feature);
        update_list(&mut hasher, &requirement.fields);
        hasher.update(&(requirement.validations.len() as u64).to_le_bytes());
        for (field, rule) in &requirement.validations {
            update_str(&mut hasher, field);
            update_str(&mut hasher, rule);
        }
        update_list(&mut hasher, &requirement.roles);
        update_list(&mut hasher, &requirement.edge_cases);
        update_list(&mut hasher, &requirement.business_rules);
        update_list(&mut hasher, &requirement.risk_analysis.high_risk_areas);
        update_list(&mut hasher, &requirement.risk_analysis.ambiguities);
        update_list(&mut hasher, &requirement.risk_analysis.missing_requirements);

        Self(*hasher.finalize().as_bytes())
    }

    /// Get reference to the underlying bytes
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Short string representation (first 16 hex chars)
    #[must_use]
    pub fn short(&self) -> String {
        let mut full = self.to_string();
        full.truncate(16);
        full
    }
}

// Length prefixes keep ["ab", "c"] and ["a", "bc"] apart.
fn update_str(hasher: &mut blake3::Hasher, value: &str) {
    hasher.update(&(value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

fn update_list(hasher: &mut blake3::Hasher, values: &[String]) {
    hasher.update(&(values.len() as u64).to_le_bytes());
    for value in values {
        update_str(hasher, value);
    }
}

impl Display for RequirementDigest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", blake3::Hash::from(self.0).to_hex())
    }
}

impl Serialize for RequirementDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Requirement {
    /// Content digest of this requirement
    #[inline]
    #[must_use]
    pub fn digest(&self) -> RequirementDigest {
        RequirementDigest::of(self)
    }
}
