//! Artifact Generator
//!
//! The pipeline entry point:
//! - Normalizes raw requirement values
//! - Synthesizes test cases and the automation script
//! - Builds traceability and coverage metrics
//! - Compares requirement versions and flags stale tests

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::extract::{RequirementExtractor, TemplateExtractor};
use reqgen_coverage::{CoverageMetrics, MetricsCalculator, TraceabilityBuilder, TraceabilityMatrix};
use reqgen_requirement::{normalize, ChangeImpact, Requirement};
use reqgen_synthesis::{
    AutomationScript, ScriptSynthesizer, TestCaseId, TestCaseSynthesizer, TestSuite,
};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;

/// Every artifact produced for one requirement
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactBundle {
    pub requirement: Requirement,
    pub test_cases: TestSuite,
    pub automation_script: AutomationScript,
    /// None when the suite was empty
    pub traceability: Option<TraceabilityMatrix>,
    /// None when the suite was empty
    pub metrics: Option<CoverageMetrics>,
}

/// Change impact plus the existing tests it invalidates
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub impact: ChangeImpact,
    /// Ids from the old requirement's suite that need review, ascending
    pub stale_test_ids: Vec<TestCaseId>,
}

/// Runs the requirement-to-artifacts pipeline
#[derive(Debug)]
pub struct ArtifactGenerator {
    config: GeneratorConfig,
    extractor: Box<dyn RequirementExtractor>,
    test_cases: TestCaseSynthesizer,
    scripts: ScriptSynthesizer,
    traceability: TraceabilityBuilder,
    metrics: MetricsCalculator,
}

impl ArtifactGenerator {
    /// Create generator using the template extractor
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            test_cases: TestCaseSynthesizer::from_config(&config.synthesis),
            scripts: ScriptSynthesizer::from_config(&config.automation),
            traceability: TraceabilityBuilder::with_prefix(
                config.traceability.requirement_id_prefix.clone(),
            ),
            metrics: MetricsCalculator::new(),
            extractor: Box::new(TemplateExtractor::new()),
            config,
        }
    }

    /// With a custom extraction backend
    #[inline]
    #[must_use]
    pub fn with_extractor(mut self, extractor: impl RequirementExtractor + 'static) -> Self {
        self.extractor = Box::new(extractor);
        self
    }

    /// Configuration in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Normalize a raw requirement value
    pub fn normalize(&self, raw: &Value) -> Result<Requirement, GenerateError> {
        Ok(normalize(raw)?)
    }

    /// Synthesize the test suite for a raw requirement
    pub fn generate_test_cases(&self, raw: &Value) -> Result<TestSuite, GenerateError> {
        let requirement = self.normalize(raw)?;
        Ok(self.test_cases.synthesize(&requirement))
    }

    /// Render the automation script for a raw requirement
    pub fn generate_automation_script(
        &self,
        raw: &Value,
    ) -> Result<AutomationScript, GenerateError> {
        let requirement = self.normalize(raw)?;
        Ok(self.scripts.synthesize(&requirement))
    }

    /// Trace requirement elements to covering tests
    pub fn create_traceability_matrix(
        &self,
        requirement: &Requirement,
        suite: &TestSuite,
    ) -> Result<TraceabilityMatrix, GenerateError> {
        Ok(self.traceability.build(requirement, suite)?)
    }

    /// Compute coverage metrics for a suite
    pub fn calculate_coverage_metrics(
        &self,
        requirement: &Requirement,
        suite: &TestSuite,
    ) -> Result<CoverageMetrics, GenerateError> {
        Ok(self.metrics.calculate(requirement, suite)?)
    }

    /// Run the whole pipeline on a raw requirement
    ///
    /// Fails only when the requirement does not normalize. An empty suite
    /// leaves traceability and metrics unset and logs a warning.
    pub fn generate_bundle(&self, raw: &Value) -> Result<ArtifactBundle, GenerateError> {
        let requirement = self.normalize(raw)?;
        tracing::info!(feature = %requirement.feature, "generating artifacts");

        let test_cases = self.test_cases.synthesize(&requirement);
        tracing::debug!(count = test_cases.len(), "synthesized test cases");

        let automation_script = self.scripts.synthesize(&requirement);

        let traceability = match self.traceability.build(&requirement, &test_cases) {
            Ok(matrix) => Some(matrix),
            Err(e) => {
                tracing::warn!("skipping traceability: {}", e);
                None
            }
        };
        let metrics = match self.metrics.calculate(&requirement, &test_cases) {
            Ok(metrics) => Some(metrics),
            Err(e) => {
                tracing::warn!("skipping metrics: {}", e);
                None
            }
        };

        tracing::info!(
            feature = %requirement.feature,
            test_cases = test_cases.len(),
            script = %automation_script.file_name,
            "artifacts generated"
        );

        Ok(ArtifactBundle {
            requirement,
            test_cases,
            automation_script,
            traceability,
            metrics,
        })
    }

    /// Extract a requirement from free text, then run the pipeline
    pub fn generate_from_text(&self, raw_text: &str) -> Result<ArtifactBundle, GenerateError> {
        let raw = self.extractor.extract(raw_text)?;
        self.generate_bundle(&raw)
    }

    /// Compare two requirement versions
    ///
    /// Stale ids refer to the suite synthesized from `old`.
    pub fn compare(&self, old: &Value, new: &Value) -> Result<ComparisonReport, GenerateError> {
        let old = self.normalize(old)?;
        let new = self.normalize(new)?;

        let impact = ChangeImpact::between(&old, &new);
        let old_suite = self.test_cases.synthesize(&old);

        let stale: BTreeSet<TestCaseId> = impact
            .invalidated_elements()
            .into_iter()
            .flat_map(|element| old_suite.ids_mentioning(element))
            .collect();

        tracing::info!(
            unchanged = impact.is_unchanged(),
            stale = stale.len(),
            "compared requirement versions"
        );

        Ok(ComparisonReport {
            impact,
            stale_test_ids: stale.into_iter().collect(),
        })
    }
}

impl Default for ArtifactGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}
