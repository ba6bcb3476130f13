//! reqgen Core - Artifact Generator
//!
//! Runs the requirement pipeline end to end: normalize a raw structured
//! requirement, synthesize test cases and an automation script, then build
//! traceability and coverage metrics over the suite.
//!
//! # Core Concepts
//!
//! - [`ArtifactGenerator`]: pipeline entry point
//! - [`GeneratorConfig`]: TOML-loadable settings for every stage
//! - [`RequirementExtractor`]: seam for free-text extraction backends
//! - [`RequirementDocument`]: JSON or YAML requirement input
//!
//! # Example
//!
//! ```rust,ignore
//! use reqgen_core::{ArtifactGenerator, GeneratorConfig};
//! use serde_json::json;
//!
//! let generator = ArtifactGenerator::new(GeneratorConfig::default());
//! let bundle = generator.generate_bundle(&json!({
//!     "feature": "Login",
//!     "fields": ["email", "password"],
//!     "validations": {"password": "min 8 chars"},
//! }))?;
//!
//! println!("{}", bundle.automation_script.source);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod config;
mod document;
mod error;
mod extract;
mod generator;

// Re-exports
pub use config::{GeneratorConfig, TraceabilityConfig};
pub use document::{DocumentFormat, RequirementDocument};
pub use error::{ConfigError, DocumentError, ExtractionError, GenerateError};
pub use extract::{RequirementExtractor, TemplateExtractor};
pub use generator::{ArtifactBundle, ArtifactGenerator, ComparisonReport};

// Component crates, for callers that only depend on reqgen-core
pub use reqgen_coverage as coverage;
pub use reqgen_requirement as requirement;
pub use reqgen_synthesis as synthesis;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
