//! Production-management ROI estimation library
//!
//! This crate provides the derivation engine that turns a flat set of
//! operational parameters into time-saving, efficiency, and cost metrics for
//! four production-management improvements:
//! - Time-study digitization (Study App)
//! - Absence replacement and line rebalancing (Absentee Balancing)
//! - Capacity rebalancing (Capacity Balancing)
//! - Automated reporting (Reports)
//!
//! The module benefits are aggregated into a total monthly benefit, an ROI
//! percentage, and a payback period in days.
//!
//! The engine is a pure function over value types:
//!
//! ```
//! use roiplan_core::{ParameterSet, derive_metrics};
//!
//! let params = ParameterSet::default();
//! let metrics = derive_metrics(&params);
//! assert_eq!(
//!     metrics.summary.total_benefits,
//!     metrics.study_app.total_benefit
//!         + metrics.absentee.total_benefit
//!         + metrics.capacity.total_benefit
//!         + metrics.reports.total_benefit
//! );
//! ```
//!
//! Derivation never fails: anomalous input (zero denominators, savings deltas
//! below the improved-process baseline) produces NaN/Infinity or negative
//! values by ordinary IEEE-754 arithmetic. The optional [`validate`] layer
//! reports such inputs as warnings without blocking the computation.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod engine;
pub mod error;
pub mod modules;
pub mod validate;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use engine::derive_metrics;
pub use error::OverrideError;
pub use model::{
    AbsenteeMetrics, CapacityMetrics, DerivedMetrics, ParamField, ParamGroup, ParameterSet,
    ReportsMetrics, RoiSummary, StudyAppMetrics,
};
pub use validate::{ParameterWarning, validate};
