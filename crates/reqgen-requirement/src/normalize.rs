//! Normalization of raw extraction output
//!
//! Extraction backends disagree on key names. This module resolves the
//! aliases once so that nothing downstream has to care:
//!
//! | canonical    | accepted keys (first present wins) |
//! |--------------|------------------------------------|
//! | `feature`    | `feature`, `feature_name`          |
//! | `fields`     | `fields`, `functional_fields`      |
//! | `roles`      | `actors`, `roles`                  |
//!
//! Absent (or `null`) optional members default to empty.

use crate::error::ValidationError;
use crate::model::{Requirement, RiskAnalysis, Validations};
use serde_json::{Map, Value};

/// Key names understood by [`normalize`]
pub mod keys {
    pub const FEATURE: &str = "feature";
    pub const FEATURE_NAME: &str = "feature_name";
    pub const FIELDS: &str = "fields";
    pub const FUNCTIONAL_FIELDS: &str = "functional_fields";
    pub const VALIDATIONS: &str = "validations";
    pub const ROLES: &str = "roles";
    pub const ACTORS: &str = "actors";
    pub const EDGE_CASES: &str = "edge_cases";
    pub const BUSINESS_RULES: &str = "business_rules";
    pub const RISK_ANALYSIS: &str = "risk_analysis";
    pub const HIGH_RISK_AREAS: &str = "high_risk_areas";
    pub const AMBIGUITIES: &str = "ambiguities";
    pub const MISSING_REQUIREMENTS: &str = "missing_requirements";
}

/// Fold a requirement-shaped JSON value into the canonical [`Requirement`]
///
/// # Errors
/// - [`ValidationError::NotAnObject`] if `raw` is not an object
/// - [`ValidationError::MissingFeature`] if no feature name is present
/// - [`ValidationError::WrongType`] if a known key has the wrong shape
pub fn normalize(raw: &Value) -> Result<Requirement, ValidationError> {
    let map = raw
        .as_object()
        .ok_or_else(|| ValidationError::NotAnObject(kind_of(raw)))?;

    let (feature_key, feature) = first_present(map, &[keys::FEATURE, keys::FEATURE_NAME])
        .ok_or(ValidationError::MissingFeature)?;
    let feature = string_value(feature_key, feature)?;

    let fields = optional_list(map, &[keys::FIELDS, keys::FUNCTIONAL_FIELDS])?;
    let roles = optional_list(map, &[keys::ACTORS, keys::ROLES])?;
    let edge_cases = optional_list(map, &[keys::EDGE_CASES])?;
    let business_rules = optional_list(map, &[keys::BUSINESS_RULES])?;

    let validations = match first_present(map, &[keys::VALIDATIONS]) {
        Some((key, value)) => validation_map(key, value)?,
        None => Validations::new(),
    };

    let risk_analysis = match first_present(map, &[keys::RISK_ANALYSIS]) {
        Some((key, value)) => risk_analysis(key, value)?,
        None => RiskAnalysis::default(),
    };

    tracing::debug!(
        feature = %feature,
        fields = fields.len(),
        validations = validations.len(),
        roles = roles.len(),
        edge_cases = edge_cases.len(),
        "normalized requirement"
    );

    Ok(Requirement {
        feature,
        fields,
        validations,
        roles,
        edge_cases,
        business_rules,
        risk_analysis,
    })
}

/// First alias holding a non-null value
fn first_present<'a>(
    map: &'a Map<String, Value>,
    aliases: &[&'static str],
) -> Option<(&'static str, &'a Value)> {
    aliases.iter().find_map(|&key| match map.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => Some((key, value)),
    })
}

fn optional_list(
    map: &Map<String, Value>,
    aliases: &[&'static str],
) -> Result<Vec<String>, ValidationError> {
    match first_present(map, aliases) {
        Some((key, value)) => string_list(key, value),
        None => Ok(Vec::new()),
    }
}

fn string_value(key: &str, value: &Value) -> Result<String, ValidationError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(ValidationError::wrong_type(key, "a string", kind_of(other))),
    }
}

fn string_list(key: &str, value: &Value) -> Result<Vec<String>, ValidationError> {
    let Value::Array(items) = value else {
        return Err(ValidationError::wrong_type(key, "a list", kind_of(value)));
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(ValidationError::wrong_type(
                format!("{key}[{i}]"),
                "a string",
                kind_of(other),
            )),
        })
        .collect()
}

fn validation_map(key: &str, value: &Value) -> Result<Validations, ValidationError> {
    let Value::Object(entries) = value else {
        return Err(ValidationError::wrong_type(key, "a mapping", kind_of(value)));
    };

    entries
        .iter()
        .map(|(field, rule)| match rule {
            Value::String(rule) => Ok((field.clone(), rule.clone())),
            other => Err(ValidationError::wrong_type(
                format!("{key}.{field}"),
                "a string",
                kind_of(other),
            )),
        })
        .collect()
}

fn risk_analysis(key: &str, value: &Value) -> Result<RiskAnalysis, ValidationError> {
    let Value::Object(entries) = value else {
        return Err(ValidationError::wrong_type(key, "a mapping", kind_of(value)));
    };

    let section = |name: &'static str| -> Result<Vec<String>, ValidationError> {
        match entries.get(name) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(list) => string_list(&format!("{key}.{name}"), list),
        }
    };

    Ok(RiskAnalysis {
        high_risk_areas: section(keys::HIGH_RISK_AREAS)?,
        ambiguities: section(keys::AMBIGUITIES)?,
        missing_requirements: section(keys::MISSING_REQUIREMENTS)?,
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn canonical_keys_pass_through() {
        let req = normalize(&json!({
            "feature": "Login",
            "fields": ["email", "password"],
            "validations": {"password": "min 8 chars"},
            "roles": ["admin"],
            "edge_cases": ["sql injection"]
        }))
        .unwrap();

        assert_eq!(
            req,
            Requirement::new("Login")
                .with_fields(["email", "password"])
                .with_validation("password", "min 8 chars")
                .with_roles(["admin"])
                .with_edge_cases(["sql injection"])
        );
    }

    #[test]
    fn extraction_aliases_are_resolved() {
        let req = normalize(&json!({
            "feature_name": "Checkout",
            "functional_fields": ["card number"],
            "actors": ["customer", "guest"],
            "business_rules": ["Orders over 100 ship free"],
            "risk_analysis": {
                "high_risk_areas": ["payment"],
                "ambiguities": ["currency"]
            }
        }))
        .unwrap();

        assert_eq!(req.feature, "Checkout");
        assert_eq!(req.fields, vec!["card number"]);
        assert_eq!(req.roles, vec!["customer", "guest"]);
        assert_eq!(req.business_rules, vec!["Orders over 100 ship free"]);
        assert_eq!(req.risk_analysis.high_risk_areas, vec!["payment"]);
        assert!(req.risk_analysis.missing_requirements.is_empty());
    }

    #[test]
    fn canonical_key_wins_over_alias() {
        let req = normalize(&json!({
            "feature": "A",
            "feature_name": "B",
            "fields": ["x"],
            "functional_fields": ["y"],
            "actors": ["actor"],
            "roles": ["role"]
        }))
        .unwrap();

        assert_eq!(req.feature, "A");
        assert_eq!(req.fields, vec!["x"]);
        assert_eq!(req.roles, vec!["actor"]);
    }

    #[test]
    fn missing_members_default_to_empty() {
        let req = normalize(&json!({"feature": "Search", "roles": null})).unwrap();
        assert!(req.fields.is_empty());
        assert!(req.validations.is_empty());
        assert!(req.roles.is_empty());
        assert!(req.edge_cases.is_empty());
        assert!(req.risk_analysis.is_empty());
    }

    #[test]
    fn validation_order_is_preserved() {
        let req = normalize(&json!({
            "feature": "Signup",
            "validations": {"zip": "5 digits", "age": "min 18", "email": "valid"}
        }))
        .unwrap();

        let fields: Vec<_> = req.validations.keys().cloned().collect();
        assert_eq!(fields, vec!["zip", "age", "email"]);
    }

    #[test]
    fn missing_feature_is_rejected() {
        let err = normalize(&json!({"fields": ["email"]})).unwrap_err();
        assert_eq!(err, ValidationError::MissingFeature);

        let err = normalize(&json!({"feature": null})).unwrap_err();
        assert_eq!(err, ValidationError::MissingFeature);
    }

    #[test]
    fn malformed_members_are_rejected() {
        let err = normalize(&json!({"feature": "Login", "fields": "email"})).unwrap_err();
        assert_eq!(err, ValidationError::wrong_type("fields", "a list", "a string"));

        let err = normalize(&json!({"feature": "Login", "edge_cases": ["ok", 3]})).unwrap_err();
        assert_eq!(err.key(), Some("edge_cases[1]"));

        let err = normalize(&json!({"feature": "Login", "validations": {"age": 18}})).unwrap_err();
        assert_eq!(err.key(), Some("validations.age"));

        let err = normalize(&json!({"feature": 7})).unwrap_err();
        assert_eq!(err.key(), Some("feature"));
    }

    #[test]
    fn non_object_is_rejected() {
        let err = normalize(&json!(["Login"])).unwrap_err();
        assert_eq!(err, ValidationError::NotAnObject("a list"));
    }
}
