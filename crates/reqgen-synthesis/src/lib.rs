//! reqgen Synthesis
//!
//! Deterministic, template-based generators driven by a canonical
//! [`Requirement`](reqgen_requirement::Requirement).
//!
//! # Core Concepts
//!
//! - [`TestCaseSynthesizer`]: requirement to ordered [`TestSuite`]
//! - [`ScriptSynthesizer`]: requirement to Selenium/TestNG Java source
//! - [`TestCaseId`]: `TC_NNN` identifier, numbered per synthesis run
//!
//! # Example
//!
//! ```rust,ignore
//! use reqgen_requirement::Requirement;
//! use reqgen_synthesis::TestCaseSynthesizer;
//!
//! let requirement = Requirement::new("Login")
//!     .with_fields(["email", "password"])
//!     .with_validation("password", "min 8 chars");
//!
//! let suite = TestCaseSynthesizer::new().synthesize(&requirement);
//! assert_eq!(suite.len(), 4);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod automation;
mod synthesizer;
mod test_case;

// Re-exports
pub use automation::{AutomationConfig, AutomationScript, ScriptSynthesizer};
pub use synthesizer::{SynthesisConfig, TestCaseSynthesizer};
pub use test_case::{IdSequence, TestCase, TestCaseId, TestCaseIdError, TestKind, TestSuite};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
