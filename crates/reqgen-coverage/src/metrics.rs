//! Coverage and quality metrics
//!
//! Scores are heuristics over titles: an element counts as covered when some
//! test title contains it as a case-insensitive substring.

#![allow(clippy::cast_precision_loss)]

use crate::error::MetricsError;
use reqgen_requirement::Requirement;
use reqgen_synthesis::{TestKind, TestSuite};
use serde::Serialize;

/// Test case count per kind; every kind is always present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TypeDistribution {
    #[serde(rename = "Positive")]
    pub positive: usize,
    #[serde(rename = "Negative")]
    pub negative: usize,
    #[serde(rename = "Boundary")]
    pub boundary: usize,
}

impl TypeDistribution {
    /// Count kinds in a suite
    #[must_use]
    pub fn of(suite: &TestSuite) -> Self {
        suite.iter().fold(Self::default(), |mut dist, tc| {
            match tc.kind {
                TestKind::Positive => dist.positive += 1,
                TestKind::Negative => dist.negative += 1,
                TestKind::Boundary => dist.boundary += 1,
            }
            dist
        })
    }

    /// Count for one kind
    #[inline]
    #[must_use]
    pub fn get(&self, kind: TestKind) -> usize {
        match kind {
            TestKind::Positive => self.positive,
            TestKind::Negative => self.negative,
            TestKind::Boundary => self.boundary,
        }
    }
}

/// Requirement member counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub fields: usize,
    pub validations: usize,
    pub edge_cases: usize,
    pub roles: usize,
}

impl Breakdown {
    #[must_use]
    pub fn of(requirement: &Requirement) -> Self {
        Self {
            fields: requirement.fields.len(),
            validations: requirement.validations.len(),
            edge_cases: requirement.edge_cases.len(),
            roles: requirement.roles.len(),
        }
    }
}

/// Summary indicators for one synthesized suite
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageMetrics {
    pub total_fields: usize,
    pub total_test_cases: usize,
    /// Tests per requirement element, times ten
    pub coverage_score: f64,
    /// Tests per requirement element, halved (two tests per element is full)
    ///
    /// Rounded on its own to two decimals, so it can disagree with
    /// `coverage_percentage` in the third digit (0.08 next to 8.33).
    pub coverage_ratio: f64,
    /// Unrounded coverage ratio as a percentage, capped at 100
    pub coverage_percentage: f64,
    /// 0 to 100
    pub quality_score: f64,
    pub type_distribution: TypeDistribution,
    pub breakdown: Breakdown,
    pub is_automation_ready: bool,
}

/// Computes [`CoverageMetrics`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsCalculator;

impl MetricsCalculator {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compute metrics for a suite synthesized from `requirement`
    ///
    /// # Errors
    ///
    /// [`MetricsError::EmptySuite`] when `suite` has no test cases.
    pub fn calculate(
        &self,
        requirement: &Requirement,
        suite: &TestSuite,
    ) -> Result<CoverageMetrics, MetricsError> {
        if suite.is_empty() {
            return Err(MetricsError::empty_suite(&requirement.feature));
        }

        let metrics = CoverageMetrics {
            total_fields: requirement.fields.len(),
            total_test_cases: suite.len(),
            coverage_score: coverage_score(requirement, suite),
            coverage_ratio: coverage_ratio(requirement, suite),
            coverage_percentage: coverage_percentage(requirement, suite),
            quality_score: quality_score(requirement, suite),
            type_distribution: TypeDistribution::of(suite),
            breakdown: Breakdown::of(requirement),
            is_automation_ready: true,
        };

        tracing::debug!(
            feature = %requirement.feature,
            coverage = metrics.coverage_percentage,
            quality = metrics.quality_score,
            "calculated coverage metrics"
        );

        Ok(metrics)
    }
}

/// `tests / elements * 10`, or 0 without elements
#[must_use]
pub fn coverage_score(requirement: &Requirement, suite: &TestSuite) -> f64 {
    let elements = requirement.element_count();
    if elements == 0 {
        return 0.0;
    }
    round2(suite.len() as f64 / elements as f64 * 10.0)
}

/// `tests / (elements * 2)`, or 0 without elements
#[must_use]
pub fn coverage_ratio(requirement: &Requirement, suite: &TestSuite) -> f64 {
    round2(raw_ratio(requirement, suite))
}

/// Coverage ratio as a percentage, in `[0, 100]`
///
/// Computed from the unrounded ratio, not from [`coverage_ratio`].
#[must_use]
pub fn coverage_percentage(requirement: &Requirement, suite: &TestSuite) -> f64 {
    round2((raw_ratio(requirement, suite) * 100.0).min(100.0))
}

/// Heuristic suite quality in `[0, 100]`
///
/// | criterion                              | points |
/// |----------------------------------------|--------|
/// | both Positive and Negative cases       | 30     |
/// | only one of them                       | 15     |
/// | any Boundary case                      | 20     |
/// | fraction of fields mentioned in titles | 25     |
/// | fraction of edge cases mentioned       | 25     |
#[must_use]
pub fn quality_score(requirement: &Requirement, suite: &TestSuite) -> f64 {
    let mut score = match (
        suite.has_kind(TestKind::Positive),
        suite.has_kind(TestKind::Negative),
    ) {
        (true, true) => 30.0,
        (true, false) | (false, true) => 15.0,
        (false, false) => 0.0,
    };
    if suite.has_kind(TestKind::Boundary) {
        score += 20.0;
    }

    score += mentioned_fraction(&requirement.fields, suite) * 25.0;
    score += mentioned_fraction(&requirement.edge_cases, suite) * 25.0;

    round2(score)
}

fn raw_ratio(requirement: &Requirement, suite: &TestSuite) -> f64 {
    let elements = requirement.element_count();
    if elements == 0 {
        return 0.0;
    }
    suite.len() as f64 / (elements as f64 * 2.0)
}

/// Share of `elements` that some title mentions; 0 when empty
fn mentioned_fraction(elements: &[String], suite: &TestSuite) -> f64 {
    if elements.is_empty() {
        return 0.0;
    }
    let mentioned = elements
        .iter()
        .filter(|element| suite.any_mentions(element))
        .count();
    mentioned as f64 / elements.len() as f64
}

/// Round to two decimals, ties to even (`10.625` becomes `10.62`)
#[allow(clippy::float_cmp)]
fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    let floor = scaled.floor();
    let rounded = if scaled - floor == 0.5 {
        if floor % 2.0 == 0.0 {
            floor
        } else {
            floor + 1.0
        }
    } else {
        scaled.round()
    };
    rounded / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reqgen_synthesis::{TestCase, TestCaseId, TestCaseSynthesizer};

    fn login() -> Requirement {
        Requirement::new("Login")
            .with_fields(["email", "password"])
            .with_validation("password", "min 8 chars")
            .with_roles(["admin"])
            .with_edge_cases(["sql injection"])
    }

    fn case(number: u32, title: &str, kind: TestKind) -> TestCase {
        TestCase {
            id: TestCaseId::new(number),
            title: title.to_string(),
            kind,
            steps: Vec::new(),
            expected_result: String::new(),
        }
    }

    #[test]
    fn login_metrics() {
        let req = login();
        let suite = TestCaseSynthesizer::new().synthesize(&req);
        let metrics = MetricsCalculator::new().calculate(&req, &suite).unwrap();

        assert_eq!(
            metrics,
            CoverageMetrics {
                total_fields: 2,
                total_test_cases: 6,
                coverage_score: 20.0,
                coverage_ratio: 1.0,
                coverage_percentage: 100.0,
                quality_score: 100.0,
                type_distribution: TypeDistribution {
                    positive: 3,
                    negative: 2,
                    boundary: 1,
                },
                breakdown: Breakdown {
                    fields: 2,
                    validations: 1,
                    edge_cases: 1,
                    roles: 1,
                },
                is_automation_ready: true,
            }
        );
    }

    #[test]
    fn ratio_is_rounded_and_capped() {
        let req = Requirement::new("Search").with_fields(["query", "filter", "sort"]);
        let suite = TestCaseSynthesizer::new().synthesize(&req);

        assert_eq!(coverage_ratio(&req, &suite), 0.5);
        assert_eq!(coverage_percentage(&req, &suite), 50.0);
        assert_eq!(coverage_score(&req, &suite), 10.0);

        let thin = Requirement::new("Search").with_fields(["a", "b", "c", "d", "e", "f"]);
        let one = TestSuite::new(vec![case(1, "x", TestKind::Positive)]);
        assert_eq!(coverage_ratio(&thin, &one), 0.08);
        assert_eq!(coverage_percentage(&thin, &one), 8.33);
        assert_eq!(coverage_score(&thin, &one), 1.67);
    }

    #[test]
    fn percentage_keeps_precision_the_rounded_ratio_drops() {
        let thin = Requirement::new("Search").with_fields(["a", "b", "c", "d", "e", "f"]);
        let one = TestSuite::new(vec![case(1, "x", TestKind::Positive)]);
        let metrics = MetricsCalculator::new().calculate(&thin, &one).unwrap();

        assert_eq!(metrics.coverage_ratio, 0.08);
        assert_eq!(metrics.coverage_percentage, 8.33);
        assert_ne!(metrics.coverage_ratio * 100.0, metrics.coverage_percentage);
    }

    #[test]
    fn exact_halves_round_to_even() {
        let fields: Vec<String> = (1..=16).map(|i| format!("field{i:02}")).collect();
        let req = Requirement::new("Profile").with_fields(fields).with_roles(["owner"]);
        let suite = TestCaseSynthesizer::new().synthesize(&req);
        assert_eq!(suite.len(), 17);

        // 17 / 16 * 10 = 10.625 and 17 / 32 * 100 = 53.125, both exact in binary
        assert_eq!(coverage_score(&req, &suite), 10.62);
        assert_eq!(coverage_percentage(&req, &suite), 53.12);
        assert_eq!(coverage_ratio(&req, &suite), 0.53);
    }

    #[test]
    fn round2_ties() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(2.5), 2.5);
        assert_eq!(round2(1.0 / 3.0), 0.33);
        assert_eq!(round2(2.0 / 3.0), 0.67);
    }

    #[test]
    fn quality_partial_credit() {
        let req = Requirement::new("Login")
            .with_fields(["email", "password"])
            .with_edge_cases(["timeout"]);
        let suite = TestSuite::new(vec![case(1, "Valid Login with correct email", TestKind::Positive)]);

        // 15 (one polarity) + 0 (no boundary) + 12.5 (half the fields) + 0
        assert_eq!(quality_score(&req, &suite), 27.5);
    }

    #[test]
    fn quality_counts_elements_regardless_of_case() {
        let req = Requirement::new("Login")
            .with_fields(["EMAIL"])
            .with_edge_cases(["Expired Session"]);
        let suite = TestSuite::new(vec![
            case(1, "Valid Login with correct email", TestKind::Positive),
            case(2, "login with expired session", TestKind::Negative),
        ]);

        // 30 (both polarities) + 25 (field) + 25 (edge case)
        assert_eq!(quality_score(&req, &suite), 80.0);
    }

    #[test]
    fn empty_input_scores_zero() {
        let req = Requirement::new("Nothing");
        let suite = TestCaseSynthesizer::new().synthesize(&req);
        assert!(suite.is_empty());
        assert_eq!(coverage_percentage(&req, &suite), 0.0);
        assert_eq!(quality_score(&req, &suite), 0.0);
        assert_eq!(coverage_score(&req, &suite), 0.0);
    }

    #[test]
    fn calculate_rejects_empty_suite() {
        let err = MetricsCalculator::new()
            .calculate(&login(), &TestSuite::default())
            .unwrap_err();
        assert_eq!(err, MetricsError::empty_suite("Login"));
    }

    #[test]
    fn distribution_wire_shape() {
        let suite = TestCaseSynthesizer::new().synthesize(&login());
        let json = serde_json::to_value(TypeDistribution::of(&suite)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Positive": 3, "Negative": 2, "Boundary": 1})
        );
        assert_eq!(TypeDistribution::of(&suite).get(TestKind::Boundary), 1);
    }
}
