//! Change-impact diffing between two requirement versions

use crate::digest::RequirementDigest;
use crate::model::Requirement;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::Write as _;

/// One validation rule that was added, removed or rewritten
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationChange {
    /// Field the rule applies to
    pub field: String,
    /// Rule in the old requirement (None if newly added)
    pub old_rule: Option<String>,
    /// Rule in the new requirement (None if removed)
    pub new_rule: Option<String>,
}

/// Structural difference between an old and a new requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeImpact {
    /// Feature rename, as (old, new)
    pub feature_renamed: Option<(String, String)>,
    pub added_fields: Vec<String>,
    pub removed_fields: Vec<String>,
    pub modified_validations: Vec<ValidationChange>,
    pub added_rules: Vec<String>,
    pub removed_rules: Vec<String>,
    pub added_edge_cases: Vec<String>,
    pub removed_edge_cases: Vec<String>,
    pub added_roles: Vec<String>,
    pub removed_roles: Vec<String>,
    /// High-risk areas present only in the new requirement
    pub risk_increase: Vec<String>,
    pub old_digest: RequirementDigest,
    pub new_digest: RequirementDigest,
    /// Human-readable summary of the above
    pub impact_analysis_summary: String,
}

impl ChangeImpact {
    /// Compare two requirement versions
    #[must_use]
    pub fn between(old: &Requirement, new: &Requirement) -> Self {
        let feature_renamed =
            (old.feature != new.feature).then(|| (old.feature.clone(), new.feature.clone()));

        let mut modified_validations = Vec::new();
        for (field, old_rule) in &old.validations {
            match new.validations.get(field) {
                Some(new_rule) if new_rule == old_rule => {}
                new_rule => modified_validations.push(ValidationChange {
                    field: field.clone(),
                    old_rule: Some(old_rule.clone()),
                    new_rule: new_rule.cloned(),
                }),
            }
        }
        for (field, new_rule) in &new.validations {
            if !old.validations.contains_key(field) {
                modified_validations.push(ValidationChange {
                    field: field.clone(),
                    old_rule: None,
                    new_rule: Some(new_rule.clone()),
                });
            }
        }

        let mut impact = Self {
            feature_renamed,
            added_fields: only_in(&new.fields, &old.fields),
            removed_fields: only_in(&old.fields, &new.fields),
            modified_validations,
            added_rules: only_in(&new.business_rules, &old.business_rules),
            removed_rules: only_in(&old.business_rules, &new.business_rules),
            added_edge_cases: only_in(&new.edge_cases, &old.edge_cases),
            removed_edge_cases: only_in(&old.edge_cases, &new.edge_cases),
            added_roles: only_in(&new.roles, &old.roles),
            removed_roles: only_in(&old.roles, &new.roles),
            risk_increase: only_in(
                &new.risk_analysis.high_risk_areas,
                &old.risk_analysis.high_risk_areas,
            ),
            old_digest: old.digest(),
            new_digest: new.digest(),
            impact_analysis_summary: String::new(),
        };
        impact.impact_analysis_summary = impact.summarize();

        tracing::debug!(
            added_fields = impact.added_fields.len(),
            removed_fields = impact.removed_fields.len(),
            modified_validations = impact.modified_validations.len(),
            "computed change impact"
        );

        impact
    }

    /// True when both versions are content-identical
    #[inline]
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.old_digest == self.new_digest
    }

    /// True when no tracked member differs
    ///
    /// Reordering alone changes the digest but not the structural diff, so
    /// this can hold while [`is_unchanged`](Self::is_unchanged) does not.
    #[must_use]
    pub fn is_structurally_empty(&self) -> bool {
        self.feature_renamed.is_none()
            && self.added_fields.is_empty()
            && self.removed_fields.is_empty()
            && self.modified_validations.is_empty()
            && self.added_rules.is_empty()
            && self.removed_rules.is_empty()
            && self.added_edge_cases.is_empty()
            && self.removed_edge_cases.is_empty()
            && self.added_roles.is_empty()
            && self.removed_roles.is_empty()
            && self.risk_increase.is_empty()
    }

    /// Elements whose existing tests no longer describe the new requirement
    ///
    /// Removed fields, fields with changed validation rules, removed edge
    /// cases and removed roles.
    #[must_use]
    pub fn invalidated_elements(&self) -> Vec<&str> {
        let candidates = self
            .removed_fields
            .iter()
            .chain(self.modified_validations.iter().map(|change| &change.field))
            .chain(&self.removed_edge_cases)
            .chain(&self.removed_roles);

        let mut elements: Vec<&str> = Vec::new();
        for element in candidates {
            if !elements.contains(&element.as_str()) {
                elements.push(element);
            }
        }
        elements
    }

    fn summarize(&self) -> String {
        if self.is_structurally_empty() {
            return if self.is_unchanged() {
                "No changes detected.".to_string()
            } else {
                "No structural changes detected; only ordering differs.".to_string()
            };
        }

        let mut parts: Vec<String> = Vec::new();
        if let Some((old, new)) = &self.feature_renamed {
            parts.push(format!("feature renamed from '{old}' to '{new}'"));
        }
        describe(&mut parts, "field", "added", &self.added_fields);
        describe(&mut parts, "field", "removed", &self.removed_fields);
        if !self.modified_validations.is_empty() {
            parts.push(format!(
                "{} validation rule(s) changed",
                self.modified_validations.len()
            ));
        }
        describe(&mut parts, "business rule", "added", &self.added_rules);
        describe(&mut parts, "business rule", "removed", &self.removed_rules);
        describe(&mut parts, "edge case", "added", &self.added_edge_cases);
        describe(&mut parts, "edge case", "removed", &self.removed_edge_cases);
        describe(&mut parts, "role", "added", &self.added_roles);
        describe(&mut parts, "role", "removed", &self.removed_roles);
        describe(&mut parts, "high-risk area", "introduced", &self.risk_increase);

        let mut summary = String::new();
        let _ = write!(summary, "{}.", parts.join("; "));
        let invalidated = self.invalidated_elements().len();
        if invalidated > 0 {
            let _ = write!(
                summary,
                " Tests covering {invalidated} element(s) need review."
            );
        }
        summary
    }
}

fn describe(parts: &mut Vec<String>, noun: &str, verb: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let quoted: Vec<String> = items.iter().map(|item| format!("'{item}'")).collect();
    parts.push(format!(
        "{} {noun}(s) {verb}: {}",
        items.len(),
        quoted.join(", ")
    ));
}

/// Items of `left` absent from `right`, in `left` order, without duplicates
fn only_in(left: &[String], right: &[String]) -> Vec<String> {
    let right: HashSet<&str> = right.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();
    left.iter()
        .filter(|item| !right.contains(item.as_str()) && seen.insert(item.as_str()))
        .cloned()
        .collect()
}
