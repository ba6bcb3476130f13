//! Template-based test case synthesis
//!
//! Emits cases in four contiguous phases, numbering them from one
//! [`IdSequence`] owned by the call:
//!
//! 1. one Positive case per field
//! 2. one Negative case per validation rule, each followed by a Boundary case
//!    when the rule names a numeric limit
//! 3. one Negative case per edge case
//! 4. one Positive case per role

use crate::test_case::{IdSequence, TestCase, TestKind, TestSuite};
use reqgen_requirement::Requirement;
use serde::{Deserialize, Serialize};

/// Synthesis settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynthesisConfig {
    /// Words that mark a validation rule as a numeric limit (case-insensitive)
    pub boundary_keywords: Vec<String>,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            boundary_keywords: vec!["min".to_string(), "max".to_string()],
        }
    }
}

/// Deterministic test case synthesizer
#[derive(Debug, Clone)]
pub struct TestCaseSynthesizer {
    boundary_keywords: Vec<String>,
}

impl TestCaseSynthesizer {
    /// Create synthesizer with default settings
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&SynthesisConfig::default())
    }

    /// Create synthesizer from settings
    #[must_use]
    pub fn from_config(config: &SynthesisConfig) -> Self {
        Self {
            boundary_keywords: config
                .boundary_keywords
                .iter()
                .map(|k| k.to_lowercase())
                .collect(),
        }
    }

    /// Derive the test suite for a requirement
    ///
    /// Pure: the same requirement always yields the same suite.
    #[must_use]
    pub fn synthesize(&self, requirement: &Requirement) -> TestSuite {
        let feature = requirement.feature.as_str();
        let mut ids = IdSequence::new();
        let mut cases = Vec::with_capacity(
            requirement.fields.len()
                + requirement.validations.len() * 2
                + requirement.edge_cases.len()
                + requirement.roles.len(),
        );

        for field in &requirement.fields {
            cases.push(TestCase {
                id: ids.next_id(),
                title: format!("Valid {feature} with correct {field}"),
                kind: TestKind::Positive,
                steps: vec![
                    format!("Open {feature} page"),
                    format!("Enter valid {field}"),
                    "Submit the form".to_string(),
                    "Verify submission".to_string(),
                ],
                expected_result: format!("{feature} successful with valid {field}"),
            });
        }

        for (field, rule) in &requirement.validations {
            cases.push(TestCase {
                id: ids.next_id(),
                title: format!("Invalid {feature} - {field} fails {rule}"),
                kind: TestKind::Negative,
                steps: vec![
                    format!("Open {feature} page"),
                    format!("Enter invalid {field} (violates: {rule})"),
                    "Submit the form".to_string(),
                    "Verify error message".to_string(),
                ],
                expected_result: format!("Error message displayed: {rule} validation failed"),
            });

            if let Some(limit) = self.boundary_value(rule) {
                let limit = i128::from(limit);
                cases.push(TestCase {
                    id: ids.next_id(),
                    title: format!("Boundary test for {field} - {rule}"),
                    kind: TestKind::Boundary,
                    steps: vec![
                        format!("Open {feature} page"),
                        format!(
                            "Enter {field} with boundary value ({}, {limit}, {})",
                            limit - 1,
                            limit + 1
                        ),
                        "Submit the form".to_string(),
                        "Verify behavior at boundary".to_string(),
                    ],
                    expected_result: format!("Correct behavior at {rule} boundary"),
                });
            }
        }

        for edge_case in &requirement.edge_cases {
            cases.push(TestCase {
                id: ids.next_id(),
                title: format!("{feature} with {edge_case}"),
                kind: TestKind::Negative,
                steps: vec![
                    format!("Open {feature} page"),
                    format!("Test with {edge_case}"),
                    "Submit the form".to_string(),
                    "Verify system handles edge case".to_string(),
                ],
                expected_result: format!("System properly handles {edge_case} scenario"),
            });
        }

        for role in &requirement.roles {
            cases.push(TestCase {
                id: ids.next_id(),
                title: format!("{feature} access for {role} role"),
                kind: TestKind::Positive,
                steps: vec![
                    format!("Login as {role}"),
                    format!("Access {feature} feature"),
                    "Verify access permissions".to_string(),
                    format!("Perform {feature} operation"),
                ],
                expected_result: format!("{role} can access and use {feature} feature correctly"),
            });
        }

        tracing::debug!(
            feature,
            cases = cases.len(),
            last_id = ids.issued(),
            "synthesized test cases"
        );

        TestSuite::new(cases)
    }

    /// Numeric limit named by a validation rule, if any
    ///
    /// The rule must mention a boundary keyword and contain a
    /// whitespace-delimited token made only of ASCII digits; the first such
    /// token is the limit. `"min 8 chars"` yields 8; `"min 1, max 100"`
    /// yields 100 since `"1,"` is not a bare number. A first number too large
    /// for `i64` yields no limit; later numbers are never consulted.
    #[must_use]
    pub fn boundary_value(&self, rule: &str) -> Option<i64> {
        let lowered = rule.to_lowercase();
        if !self
            .boundary_keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
        {
            return None;
        }

        let token = rule
            .split_whitespace()
            .find(|token| token.bytes().all(|b| b.is_ascii_digit()))?;
        match token.parse() {
            Ok(limit) => Some(limit),
            Err(_) => {
                tracing::debug!(rule, token, "boundary limit out of range, skipping");
                None
            }
        }
    }
}

impl Default for TestCaseSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn login() -> Requirement {
        Requirement::new("Login")
            .with_fields(["email", "password"])
            .with_validation("password", "min 8 chars")
            .with_roles(["admin"])
            .with_edge_cases(["sql injection"])
    }

    #[test]
    fn login_example_yields_six_cases_in_phase_order() {
        let suite = TestCaseSynthesizer::new().synthesize(&login());

        let summary: Vec<(String, TestKind)> = suite
            .iter()
            .map(|tc| (tc.id.to_string(), tc.kind))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("TC_001".to_string(), TestKind::Positive),
                ("TC_002".to_string(), TestKind::Positive),
                ("TC_003".to_string(), TestKind::Negative),
                ("TC_004".to_string(), TestKind::Boundary),
                ("TC_005".to_string(), TestKind::Negative),
                ("TC_006".to_string(), TestKind::Positive),
            ]
        );

        let titles: Vec<&str> = suite.iter().map(|tc| tc.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Valid Login with correct email",
                "Valid Login with correct password",
                "Invalid Login - password fails min 8 chars",
                "Boundary test for password - min 8 chars",
                "Login with sql injection",
                "Login access for admin role",
            ]
        );
    }

    #[test]
    fn boundary_case_tests_around_limit() {
        let suite = TestCaseSynthesizer::new().synthesize(&login());
        let boundary = &suite.cases()[3];
        assert_eq!(
            boundary.steps[1],
            "Enter password with boundary value (7, 8, 9)"
        );
        assert_eq!(boundary.expected_result, "Correct behavior at min 8 chars boundary");
    }

    #[test]
    fn positive_case_text() {
        let suite = TestCaseSynthesizer::new().synthesize(&login());
        let first = &suite.cases()[0];
        assert_eq!(
            first.steps,
            vec![
                "Open Login page",
                "Enter valid email",
                "Submit the form",
                "Verify submission"
            ]
        );
        assert_eq!(first.expected_result, "Login successful with valid email");
    }

    #[test]
    fn role_case_names_feature_operation() {
        let suite = TestCaseSynthesizer::new().synthesize(&login());
        let role = &suite.cases()[5];
        assert_eq!(role.steps[3], "Perform Login operation");
        assert_eq!(
            role.expected_result,
            "admin can access and use Login feature correctly"
        );
    }

    #[test]
    fn empty_requirement_yields_empty_suite() {
        let suite = TestCaseSynthesizer::new().synthesize(&Requirement::new("Nothing"));
        assert!(suite.is_empty());
    }

    #[test]
    fn boundary_value_detection() {
        let synth = TestCaseSynthesizer::new();
        assert_eq!(synth.boundary_value("min 8 chars"), Some(8));
        assert_eq!(synth.boundary_value("MAX 100 items"), Some(100));
        assert_eq!(synth.boundary_value("maximum of 3 retries, then 10"), Some(3));
        assert_eq!(synth.boundary_value("min 1, max 100"), Some(100));
        assert_eq!(synth.boundary_value("min 1,max 5"), None);
        assert_eq!(synth.boundary_value("10 digits"), None);
        assert_eq!(synth.boundary_value("min length"), None);
        assert_eq!(synth.boundary_value("min 0"), Some(0));
    }

    #[test]
    fn oversized_first_number_is_not_replaced_by_a_later_one() {
        let synth = TestCaseSynthesizer::new();
        assert_eq!(synth.boundary_value("max 10000000000000000000 then 5"), None);
        assert_eq!(
            synth.boundary_value("max 9223372036854775807 then 5"),
            Some(i64::MAX)
        );

        let req = Requirement::new("Upload").with_validation("size", "max 10000000000000000000 then 5");
        let suite = TestCaseSynthesizer::new().synthesize(&req);
        assert_eq!(suite.len(), 1);
        assert!(!suite.has_kind(TestKind::Boundary));
    }

    #[test]
    fn zero_limit_tests_negative_value() {
        let req = Requirement::new("Cart").with_validation("quantity", "min 0");
        let suite = TestCaseSynthesizer::new().synthesize(&req);
        assert_eq!(suite.len(), 2);
        assert_eq!(
            suite.cases()[1].steps[1],
            "Enter quantity with boundary value (-1, 0, 1)"
        );
    }

    #[test]
    fn custom_boundary_keywords() {
        let config = SynthesisConfig {
            boundary_keywords: vec!["At Least".to_string()],
        };
        let synth = TestCaseSynthesizer::from_config(&config);
        assert_eq!(synth.boundary_value("at least 18 years"), Some(18));
        assert_eq!(synth.boundary_value("min 8 chars"), None);
    }

    #[test]
    fn validations_keep_declaration_order() {
        let req = Requirement::new("Signup")
            .with_validation("zip", "5 digits")
            .with_validation("age", "min 18");
        let suite = TestCaseSynthesizer::new().synthesize(&req);
        let titles: Vec<&str> = suite.iter().map(|tc| tc.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Invalid Signup - zip fails 5 digits",
                "Invalid Signup - age fails min 18",
                "Boundary test for age - min 18",
            ]
        );
    }
}
