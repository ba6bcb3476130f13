//! Requirement-to-test traceability

use crate::error::TraceabilityError;
use indexmap::IndexMap;
use reqgen_requirement::Requirement;
use reqgen_synthesis::{TestCaseId, TestSuite};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Kind of requirement element an entry traces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Field,
    EdgeCase,
}

/// One requirement element and the tests that mention it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceabilityEntry {
    pub requirement_element: String,
    pub element_kind: ElementKind,
    /// Ascending; serialized as a list
    pub covering_test_ids: BTreeSet<TestCaseId>,
}

impl TraceabilityEntry {
    /// True when at least one test mentions the element
    #[inline]
    #[must_use]
    pub fn is_covered(&self) -> bool {
        !self.covering_test_ids.is_empty()
    }
}

/// Element and test case totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageSummary {
    /// Fields plus edge cases
    pub total_requirements: usize,
    pub total_test_cases: usize,
    /// `"<test cases> : <requirements>"`
    pub coverage_ratio: String,
}

/// Mapping from every field and edge case to its covering tests
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceabilityMatrix {
    pub feature: String,
    pub requirement_id: String,
    /// All ids in suite order
    pub test_case_ids: Vec<TestCaseId>,
    pub coverage: CoverageSummary,
    /// Fields first, then edge cases
    pub entries: Vec<TraceabilityEntry>,
}

impl TraceabilityMatrix {
    /// Field entries keyed by field name
    #[must_use]
    pub fn fields_covered(&self) -> IndexMap<&str, &BTreeSet<TestCaseId>> {
        self.covered(ElementKind::Field)
    }

    /// Edge case entries keyed by edge case text
    #[must_use]
    pub fn edge_cases_covered(&self) -> IndexMap<&str, &BTreeSet<TestCaseId>> {
        self.covered(ElementKind::EdgeCase)
    }

    /// Elements no test mentions
    #[must_use]
    pub fn uncovered(&self) -> Vec<&TraceabilityEntry> {
        self.entries.iter().filter(|e| !e.is_covered()).collect()
    }

    fn covered(&self, kind: ElementKind) -> IndexMap<&str, &BTreeSet<TestCaseId>> {
        self.entries
            .iter()
            .filter(|e| e.element_kind == kind)
            .map(|e| (e.requirement_element.as_str(), &e.covering_test_ids))
            .collect()
    }
}

/// Builds [`TraceabilityMatrix`] values
#[derive(Debug, Clone)]
pub struct TraceabilityBuilder {
    requirement_id_prefix: String,
}

impl TraceabilityBuilder {
    /// Default requirement id prefix
    pub const DEFAULT_PREFIX: &'static str = "REQ_";

    /// Create builder with the default `REQ_` prefix
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_prefix(Self::DEFAULT_PREFIX)
    }

    /// Create builder with a custom requirement id prefix
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            requirement_id_prefix: prefix.into(),
        }
    }

    /// Requirement id for a feature (`REQ_USER_LOGIN`)
    #[must_use]
    pub fn requirement_id(&self, feature: &str) -> String {
        format!(
            "{}{}",
            self.requirement_id_prefix,
            feature.to_uppercase().replace(' ', "_")
        )
    }

    /// Trace every field and edge case to the tests whose titles mention it
    ///
    /// # Errors
    ///
    /// [`TraceabilityError::EmptySuite`] when `suite` has no test cases.
    pub fn build(
        &self,
        requirement: &Requirement,
        suite: &TestSuite,
    ) -> Result<TraceabilityMatrix, TraceabilityError> {
        if suite.is_empty() {
            return Err(TraceabilityError::empty_suite(&requirement.feature));
        }

        let trace = |element: &String, kind: ElementKind| TraceabilityEntry {
            requirement_element: element.clone(),
            element_kind: kind,
            covering_test_ids: suite.ids_mentioning(element).into_iter().collect(),
        };

        let entries: Vec<TraceabilityEntry> = requirement
            .fields
            .iter()
            .map(|field| trace(field, ElementKind::Field))
            .chain(
                requirement
                    .edge_cases
                    .iter()
                    .map(|edge| trace(edge, ElementKind::EdgeCase)),
            )
            .collect();

        let total_requirements = requirement.element_count();
        let matrix = TraceabilityMatrix {
            feature: requirement.feature.clone(),
            requirement_id: self.requirement_id(&requirement.feature),
            test_case_ids: suite.ids(),
            coverage: CoverageSummary {
                total_requirements,
                total_test_cases: suite.len(),
                coverage_ratio: format!("{} : {total_requirements}", suite.len()),
            },
            entries,
        };

        tracing::debug!(
            requirement_id = %matrix.requirement_id,
            entries = matrix.entries.len(),
            uncovered = matrix.uncovered().len(),
            "built traceability matrix"
        );

        Ok(matrix)
    }
}

impl Default for TraceabilityBuilder {
    fn default() -> Self {
        Self::new()
    }
}
