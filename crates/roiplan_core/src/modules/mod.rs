//! The four module calculators.
//!
//! Each is a pure function of the parameter set (three of them also read the
//! Study App working-hour/cost reference); they are mutually independent
//! otherwise and run in a fixed order from [`crate::engine::derive_metrics`].

pub mod absentee;
pub mod capacity;
pub mod reports;
pub mod study_app;

/// The original formulation scales weekly figures by a 4-week month
/// everywhere except the payback ratio (see [`crate::engine`]).
pub(crate) const WEEKS_PER_MONTH: f64 = 4.0;

pub(crate) const MINUTES_PER_HOUR: f64 = 60.0;
