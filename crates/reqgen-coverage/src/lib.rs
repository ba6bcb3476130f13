//! reqgen Coverage
//!
//! Read-only analyses of a synthesized [`TestSuite`](reqgen_synthesis::TestSuite)
//! against the [`Requirement`](reqgen_requirement::Requirement) it came from.
//!
//! # Core Concepts
//!
//! - [`TraceabilityBuilder`]: requirement element to covering test ids
//! - [`MetricsCalculator`]: coverage ratio, quality score, type distribution
//!
//! Both reject an empty suite; the standalone [`coverage_percentage`] and
//! [`quality_score`] functions do not and return 0 instead.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod error;
mod metrics;
mod traceability;

// Re-exports
pub use error::{MetricsError, TraceabilityError};
pub use metrics::{
    coverage_percentage, coverage_ratio, coverage_score, quality_score, Breakdown,
    CoverageMetrics, MetricsCalculator, TypeDistribution,
};
pub use traceability::{
    CoverageSummary, ElementKind, TraceabilityBuilder, TraceabilityEntry, TraceabilityMatrix,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
