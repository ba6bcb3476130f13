//! Artifact files and console summaries

use anyhow::{Context, Result};
use reqgen_core::ArtifactBundle;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Write every artifact of a bundle into `dir`, returning the paths written
pub(crate) fn write_bundle(bundle: &ArtifactBundle, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let stem = file_stem(&bundle.requirement.feature);
    let mut written = Vec::new();

    written.push(write_json(dir.join(format!("{stem}_test_cases.json")), &bundle.test_cases)?);

    let script_path = dir.join(&bundle.automation_script.file_name);
    fs::write(&script_path, &bundle.automation_script.source)
        .with_context(|| format!("failed to write {}", script_path.display()))?;
    written.push(script_path);

    if let Some(matrix) = &bundle.traceability {
        written.push(write_json(dir.join(format!("{stem}_traceability.json")), matrix)?);
    }
    if let Some(metrics) = &bundle.metrics {
        written.push(write_json(dir.join(format!("{stem}_metrics.json")), metrics)?);
    }

    tracing::info!(dir = %dir.display(), files = written.len(), "wrote artifacts");
    Ok(written)
}

/// Lower-cased feature with every character other than alphanumerics and
/// `_` replaced by `_`, so the name stays a single component inside `dir`
fn file_stem(feature: &str) -> String {
    feature
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

fn write_json<T: Serialize>(path: PathBuf, value: &T) -> Result<PathBuf> {
    let text = serde_json::to_string_pretty(value)
        .with_context(|| format!("failed to serialize {}", path.display()))?;
    fs::write(&path, text).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

/// Human-readable bundle summary
pub(crate) fn summary(bundle: &ArtifactBundle) -> String {
    let mut out = String::new();
    let req = &bundle.requirement;

    let _ = writeln!(out, "Feature: {}", req.feature);
    let _ = writeln!(out, "Requirement digest: {}", req.digest().short());
    let _ = writeln!(out);
    let _ = writeln!(out, "Test Cases ({}):", bundle.test_cases.len());
    for tc in &bundle.test_cases {
        let _ = writeln!(out, "  {} [{}] {}", tc.id, tc.kind, tc.title);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Automation Script: {}", bundle.automation_script.file_name);

    match &bundle.traceability {
        Some(matrix) => {
            let _ = writeln!(out, "Requirement ID: {}", matrix.requirement_id);
            let _ = writeln!(out, "Coverage Ratio: {}", matrix.coverage.coverage_ratio);
            let uncovered: Vec<&str> = matrix
                .uncovered()
                .into_iter()
                .map(|e| e.requirement_element.as_str())
                .collect();
            if !uncovered.is_empty() {
                let _ = writeln!(out, "Untraced Elements: {}", uncovered.join(", "));
            }
        }
        None => {
            let _ = writeln!(out, "Traceability: unavailable (no test cases)");
        }
    }

    match &bundle.metrics {
        Some(metrics) => {
            let _ = writeln!(out, "Coverage Score: {}", metrics.coverage_score);
            let _ = writeln!(out, "Coverage: {}%", metrics.coverage_percentage);
            let _ = writeln!(out, "Quality Score: {}/100", metrics.quality_score);
            let dist = &metrics.type_distribution;
            let _ = writeln!(
                out,
                "Distribution: {} positive, {} negative, {} boundary",
                dist.positive, dist.negative, dist.boundary
            );
        }
        None => {
            let _ = writeln!(out, "Metrics: unavailable (no test cases)");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqgen_core::ArtifactGenerator;
    use reqgen_test_utils::{login_json, shopping_cart_json};

    #[test]
    fn writes_all_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = ArtifactGenerator::default()
            .generate_bundle(&shopping_cart_json())
            .unwrap();

        let written = write_bundle(&bundle, dir.path()).unwrap();
        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "shopping_cart_test_cases.json",
                "ShoppingCartTest.java",
                "shopping_cart_traceability.json",
                "shopping_cart_metrics.json",
            ]
        );

        let cases: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&written[0]).unwrap()).unwrap();
        assert_eq!(cases.as_array().map(Vec::len), Some(12));
    }

    #[test]
    fn feature_names_cannot_leave_the_output_directory() {
        assert_eq!(file_stem("Q1/Q2 Report"), "q1_q2_report");
        assert_eq!(file_stem("../escape"), "___escape");
        assert_eq!(file_stem("Shopping Cart"), "shopping_cart");

        let dir = tempfile::tempdir().unwrap();
        for (feature, expected) in [
            ("Q1/Q2 Report", "q1_q2_report_test_cases.json"),
            ("../escape", "___escape_test_cases.json"),
        ] {
            let bundle = ArtifactGenerator::default()
                .generate_bundle(&serde_json::json!({"feature": feature, "fields": ["name"]}))
                .unwrap();
            let written = write_bundle(&bundle, dir.path()).unwrap();

            assert_eq!(written[0].file_name().unwrap().to_string_lossy(), expected);
            for path in &written {
                assert_eq!(path.parent(), Some(dir.path()));
                assert!(path.exists());
            }
        }
    }

    #[test]
    fn empty_suite_skips_derived_files() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = ArtifactGenerator::default()
            .generate_bundle(&serde_json::json!({"feature": "Placeholder"}))
            .unwrap();

        let written = write_bundle(&bundle, dir.path()).unwrap();
        assert_eq!(written.len(), 2);
        assert!(summary(&bundle).contains("Metrics: unavailable (no test cases)"));
    }

    #[test]
    fn summary_lists_cases_and_scores() {
        let bundle = ArtifactGenerator::default()
            .generate_bundle(&login_json())
            .unwrap();
        let text = summary(&bundle);

        assert!(text.starts_with("Feature: Login\n"));
        assert!(text.contains("  TC_004 [Boundary] Boundary test for password - min 8 chars\n"));
        assert!(text.contains("Coverage Ratio: 6 : 3\n"));
        assert!(text.contains("Quality Score: 100/100\n"));
        assert!(!text.contains("Untraced Elements"));
    }
}
