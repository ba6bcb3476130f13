//! reqgen Requirement Model
//!
//! The canonical shape every downstream generator works from.
//!
//! # Core Concepts
//!
//! - [`Requirement`]: canonical feature description (fields, validations,
//!   roles, edge cases, business rules, risk analysis)
//! - [`normalize`]: folds heterogeneous extraction output (`fields` vs
//!   `functional_fields`, `roles` vs `actors`) into a [`Requirement`]
//! - [`RequirementDigest`]: Blake3 content digest of a requirement
//! - [`ChangeImpact`]: structural difference between two requirements
//!
//! # Example
//!
//! ```rust,ignore
//! use reqgen_requirement::normalize;
//! use serde_json::json;
//!
//! let requirement = normalize(&json!({
//!     "feature_name": "Login",
//!     "functional_fields": ["email", "password"],
//!     "actors": ["admin"],
//! }))?;
//!
//! assert_eq!(requirement.roles, vec!["admin".to_string()]);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod diff;
mod digest;
mod error;
mod model;
mod normalize;

// Re-exports
pub use diff::{ChangeImpact, ValidationChange};
pub use digest::RequirementDigest;
pub use error::ValidationError;
pub use model::{Requirement, RiskAnalysis, Validations};
pub use normalize::{normalize, keys};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
