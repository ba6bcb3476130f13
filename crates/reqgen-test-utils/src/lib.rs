//! Testing utilities for reqgen workspace
//!
//! Shared requirement fixtures, in canonical and raw (extraction output) form.

#![allow(missing_docs)]

use reqgen_requirement::{Requirement, RiskAnalysis};
use serde_json::{json, Value};

/// Login with one boundary rule: 6 test cases
pub fn login_requirement() -> Requirement {
    Requirement::new("Login")
        .with_fields(["email", "password"])
        .with_validation("password", "min 8 chars")
        .with_roles(["admin"])
        .with_edge_cases(["sql injection"])
}

/// Raw form of [`login_requirement`] using canonical keys
pub fn login_json() -> Value {
    json!({
        "feature": "Login",
        "fields": ["email", "password"],
        "validations": {"password": "min 8 chars"},
        "roles": ["admin"],
        "edge_cases": ["sql injection"],
    })
}

/// Multi-word feature with two boundary rules and risk notes
pub fn shopping_cart_requirement() -> Requirement {
    Requirement::new("Shopping Cart")
        .with_fields(["product id", "quantity", "coupon code"])
        .with_validation("quantity", "min 1 item, max 99 items")
        .with_validation("coupon code", "max 12 characters")
        .with_validation("product id", "must exist in catalog")
        .with_roles(["guest", "customer"])
        .with_edge_cases(["out of stock", "expired coupon"])
        .with_business_rules(["Free shipping over 50"])
        .with_risk_analysis(RiskAnalysis {
            high_risk_areas: vec!["pricing".into()],
            ..RiskAnalysis::default()
        })
}

/// Raw form of [`shopping_cart_requirement`] using extraction-style aliases
pub fn shopping_cart_json() -> Value {
    json!({
        "feature_name": "Shopping Cart",
        "functional_fields": ["product id", "quantity", "coupon code"],
        "validations": {
            "quantity": "min 1 item, max 99 items",
            "coupon code": "max 12 characters",
            "product id": "must exist in catalog",
        },
        "actors": ["guest", "customer"],
        "edge_cases": ["out of stock", "expired coupon"],
        "business_rules": ["Free shipping over 50"],
        "risk_analysis": {"high_risk_areas": ["pricing"]},
    })
}

/// Registration with validations only partly matching fields
pub fn registration_requirement() -> Requirement {
    Requirement::new("User Registration")
        .with_fields(["username", "email", "password", "confirm password"])
        .with_validation("username", "min 3 chars")
        .with_validation("email", "valid format")
        .with_validation("password", "min 8 chars, one digit")
        .with_validation("terms", "must be accepted")
        .with_edge_cases(["duplicate email", "password mismatch"])
}

/// Raw form of [`registration_requirement`]
pub fn registration_json() -> Value {
    json!({
        "feature": "User Registration",
        "fields": ["username", "email", "password", "confirm password"],
        "validations": {
            "username": "min 3 chars",
            "email": "valid format",
            "password": "min 8 chars, one digit",
            "terms": "must be accepted",
        },
        "edge_cases": ["duplicate email", "password mismatch"],
    })
}
