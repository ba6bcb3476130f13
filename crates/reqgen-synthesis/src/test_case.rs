//! Test case types
//!
//! Serialized shape matches what extraction backends and dashboards exchange:
//! `{"tc_id": "TC_001", "title": ..., "type": "Positive", "steps": [...],
//! "expected_result": ...}`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

const ID_PREFIX: &str = "TC_";

/// Test case identifier (`TC_001`, `TC_002`, ...)
///
/// Ordered by number, not by string, so `TC_1000` sorts after `TC_999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TestCaseId(u32);

impl TestCaseId {
    /// Create identifier from its 1-based number
    #[inline]
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// 1-based sequence number
    #[inline]
    #[must_use]
    pub const fn number(self) -> u32 {
        self.0
    }
}

impl Display for TestCaseId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{ID_PREFIX}{:03}", self.0)
    }
}

impl FromStr for TestCaseId {
    type Err = TestCaseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(ID_PREFIX)
            .ok_or_else(|| TestCaseIdError::MissingPrefix(s.to_string()))?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TestCaseIdError::InvalidNumber(s.to_string()));
        }
        digits
            .parse()
            .map(Self)
            .map_err(|_| TestCaseIdError::InvalidNumber(s.to_string()))
    }
}

impl Serialize for TestCaseId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TestCaseId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Error parsing a [`TestCaseId`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestCaseIdError {
    #[error("test case id '{0}' does not start with TC_")]
    MissingPrefix(String),

    #[error("test case id '{0}' has no valid number")]
    InvalidNumber(String),
}

/// Per-call id counter
///
/// Every synthesis run owns one; ids never leak between runs.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    issued: u32,
}

impl IdSequence {
    /// Create sequence that will issue `TC_001` first
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next identifier
    #[inline]
    pub fn next_id(&mut self) -> TestCaseId {
        self.issued += 1;
        TestCaseId(self.issued)
    }

    /// Number of identifiers issued so far
    #[inline]
    #[must_use]
    pub fn issued(&self) -> u32 {
        self.issued
    }
}

/// Test case category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TestKind {
    /// Happy path
    Positive,
    /// Invalid input or hostile condition
    Negative,
    /// Values just below, at and above a numeric threshold
    Boundary,
}

impl TestKind {
    /// All kinds, in reporting order
    pub const ALL: [TestKind; 3] = [TestKind::Positive, TestKind::Negative, TestKind::Boundary];

    /// Name as serialized
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TestKind::Positive => "Positive",
            TestKind::Negative => "Negative",
            TestKind::Boundary => "Boundary",
        }
    }
}

impl Display for TestKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One synthesized test scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    #[serde(rename = "tc_id")]
    pub id: TestCaseId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: TestKind,
    pub steps: Vec<String>,
    pub expected_result: String,
}

impl TestCase {
    /// True when `element` occurs in the title, ignoring case
    ///
    /// Plain substring matching: a short element such as "id" also matches
    /// titles mentioning "valid". Traceability and quality scoring both go
    /// through this check.
    #[must_use]
    pub fn title_mentions(&self, element: &str) -> bool {
        self.title.to_lowercase().contains(&element.to_lowercase())
    }
}

/// Ordered list of test cases from one synthesis run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestSuite {
    cases: Vec<TestCase>,
}

impl TestSuite {
    /// Wrap an existing list of test cases
    #[inline]
    #[must_use]
    pub fn new(cases: Vec<TestCase>) -> Self {
        Self { cases }
    }

    /// Test cases in synthesis order
    #[inline]
    #[must_use]
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Number of test cases
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// True when nothing was synthesized
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Iterate test cases
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, TestCase> {
        self.cases.iter()
    }

    /// All ids in order
    #[must_use]
    pub fn ids(&self) -> Vec<TestCaseId> {
        self.cases.iter().map(|tc| tc.id).collect()
    }

    /// Look up a test case by id
    #[must_use]
    pub fn get(&self, id: TestCaseId) -> Option<&TestCase> {
        self.cases.iter().find(|tc| tc.id == id)
    }

    /// Number of cases of `kind`
    #[must_use]
    pub fn count_of(&self, kind: TestKind) -> usize {
        self.cases.iter().filter(|tc| tc.kind == kind).count()
    }

    /// True when at least one case is of `kind`
    #[must_use]
    pub fn has_kind(&self, kind: TestKind) -> bool {
        self.cases.iter().any(|tc| tc.kind == kind)
    }

    /// Ids of cases whose title mentions `element` (case-insensitive)
    #[must_use]
    pub fn ids_mentioning(&self, element: &str) -> Vec<TestCaseId> {
        self.cases
            .iter()
            .filter(|tc| tc.title_mentions(element))
            .map(|tc| tc.id)
            .collect()
    }

    /// True when some title mentions `element` (case-insensitive)
    #[must_use]
    pub fn any_mentions(&self, element: &str) -> bool {
        self.cases.iter().any(|tc| tc.title_mentions(element))
    }

    /// Unwrap into the underlying list
    #[inline]
    #[must_use]
    pub fn into_cases(self) -> Vec<TestCase> {
        self.cases
    }
}

impl FromIterator<TestCase> for TestSuite {
    fn from_iter<I: IntoIterator<Item = TestCase>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for TestSuite {
    type Item = TestCase;
    type IntoIter = std::vec::IntoIter<TestCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.into_iter()
    }
}

impl<'a> IntoIterator for &'a TestSuite {
    type Item = &'a TestCase;
    type IntoIter = std::slice::Iter<'a, TestCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn id_display_is_zero_padded() {
        assert_eq!(TestCaseId::new(1).to_string(), "TC_001");
        assert_eq!(TestCaseId::new(42).to_string(), "TC_042");
        assert_eq!(TestCaseId::new(1234).to_string(), "TC_1234");
    }

    #[test]
    fn id_parse() {
        assert_eq!("TC_007".parse::<TestCaseId>(), Ok(TestCaseId::new(7)));
        assert_eq!("TC_1000".parse::<TestCaseId>(), Ok(TestCaseId::new(1000)));
        assert!(matches!(
            "TC-007".parse::<TestCaseId>(),
            Err(TestCaseIdError::MissingPrefix(_))
        ));
        assert!(matches!(
            "TC_".parse::<TestCaseId>(),
            Err(TestCaseIdError::InvalidNumber(_))
        ));
        assert!(matches!(
            "TC_+1".parse::<TestCaseId>(),
            Err(TestCaseIdError::InvalidNumber(_))
        ));
    }

    #[test]
    fn id_orders_numerically() {
        assert!(TestCaseId::new(999) < TestCaseId::new(1000));
    }

    #[test]
    fn sequence_starts_at_one() {
        let mut seq = IdSequence::new();
        assert_eq!(seq.next_id().to_string(), "TC_001");
        assert_eq!(seq.next_id().to_string(), "TC_002");
        assert_eq!(seq.issued(), 2);
    }

    #[test]
    fn test_case_wire_shape() {
        let tc = TestCase {
            id: TestCaseId::new(3),
            title: "Valid Login with correct email".into(),
            kind: TestKind::Positive,
            steps: vec!["Open Login page".into()],
            expected_result: "Login successful with valid email".into(),
        };

        let json = serde_json::to_value(&tc).unwrap();
        assert_eq!(json["tc_id"], "TC_003");
        assert_eq!(json["type"], "Positive");

        let back: TestCase = serde_json::from_value(json).unwrap();
        assert_eq!(back, tc);
    }

    #[test]
    fn suite_queries() {
        let suite: TestSuite = vec![
            case(1, "Valid Login with correct email", TestKind::Positive),
            case(2, "Invalid Login - password fails min 8 chars", TestKind::Negative),
            case(3, "Login with SQL injection", TestKind::Negative),
        ]
        .into_iter()
        .collect();

        assert_eq!(suite.len(), 3);
        assert_eq!(suite.count_of(TestKind::Negative), 2);
        assert!(!suite.has_kind(TestKind::Boundary));
        assert_eq!(suite.ids_mentioning("EMAIL"), vec![TestCaseId::new(1)]);
        assert_eq!(suite.ids_mentioning("sql injection"), vec![TestCaseId::new(3)]);
        assert_eq!(
            suite.get(TestCaseId::new(2)).map(|tc| tc.kind),
            Some(TestKind::Negative)
        );
        assert!(suite.cases()[0].title_mentions("login"));
        assert!(suite.any_mentions("SQL Injection"));
        assert!(!suite.any_mentions("captcha"));
    }

    #[test]
    fn suite_serializes_as_list() {
        let suite = TestSuite::new(vec![case(1, "t", TestKind::Boundary)]);
        let json = serde_json::to_value(&suite).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["type"], "Boundary");
    }
}
