//! Derived metric definitions
//!
//! [`DerivedMetrics`] is the full output of one engine pass: the complete
//! chain of intermediate quantities per module plus the aggregated summary.
//! It is recomputed wholesale on every parameter change and never patched,
//! so it carries no identity of its own.
//!
//! Fields may be NaN or Infinity when an input zeroes a denominator; that is
//! valid output, not an error (the caller decides how to display it).

use serde::{Deserialize, Serialize};

/// Study App (time-study digitization) metric chain.
///
/// Times are minutes unless the name says hours; hour bases are per month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyAppMetrics {
    /// Minutes saved per line per day (note-down + entry).
    pub time_saving_per_line: f64,
    /// Average lines handled per officer; fractional values are fine.
    pub lines_per_officer: f64,
    pub time_saving_per_officer: f64,
    pub total_time_saving_per_day: f64,
    pub total_time_saving_per_month: f64,
    pub total_time_saving_hours_per_month: f64,
    /// Reference working hours per officer per month; also the base the
    /// Absentee and Reports modules measure officer time against.
    pub total_working_hours_per_officer: f64,
    pub total_working_hours_all_officers: f64,
    /// Saved hours as a share of all-officer hours, already scaled to 0-100.
    pub saved_time_percentage: f64,
    pub total_cost_per_officer: f64,
    pub total_cost_all_officers: f64,
    /// Monthly monetary benefit of this module.
    pub total_benefit: f64,
}

/// Absentee Balancing metric chain: an employee-side stream and an
/// IE-officer-side stream, summed into one benefit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenteeMetrics {
    /// Manual rebalance time minus the 5-minute improved-process baseline.
    /// Goes negative below the baseline; flows through unguarded.
    pub rebalancing_time_saving: f64,
    pub total_time_saving_per_line: f64,
    pub total_time_per_employee: f64,
    pub total_time_per_line_per_day: f64,
    pub total_time_per_week: f64,
    /// Hours, unlike the rest of the chain.
    pub total_time_per_month: f64,
    pub total_working_hours_per_line: f64,
    pub saving_time_percentage: f64,
    pub total_labor_cost_per_line: f64,
    pub ie_saving_time_per_month: f64,
    /// Unclamped; legitimately exceeds 100 when line count outstrips the
    /// per-officer hour base.
    pub ie_saving_percentage: f64,
    pub ie_saving_cost: f64,
    pub employee_saving_cost: f64,
    pub total_benefit: f64,
}

/// Capacity Balancing metric chain (models IE-officer time, not floor time).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityMetrics {
    pub time_saving_per_line_per_day: f64,
    pub time_saving_all_lines_per_day: f64,
    pub time_saving_all_lines_per_month: f64,
    pub saved_time_percentage: f64,
    pub total_benefit: f64,
}

/// Reports metric chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportsMetrics {
    pub time_saving_per_day: f64,
    pub time_saving_per_month: f64,
    pub saved_time_percentage: f64,
    pub total_benefit: f64,
}

/// Engine-wide aggregation over the four module benefits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiSummary {
    pub total_benefits: f64,
    /// Percentage return of monthly benefits over monthly investment cost.
    pub roi: f64,
    /// Days to recover the investment, on a 30-day month.
    pub payback_period_days: f64,
}

/// Complete results of one derivation pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub study_app: StudyAppMetrics,
    pub absentee: AbsenteeMetrics,
    pub capacity: CapacityMetrics,
    pub reports: ReportsMetrics,
    pub summary: RoiSummary,
}

impl DerivedMetrics {
    /// The four module benefits with display labels, in module order.
    pub fn module_benefits(&self) -> [(&'static str, f64); 4] {
        [
            ("Study App", self.study_app.total_benefit),
            ("Absentee", self.absentee.total_benefit),
            ("Capacity", self.capacity.total_benefit),
            ("Reports", self.reports.total_benefit),
        ]
    }

    /// One module's share of the total benefits, as a fraction.
    /// Non-finite when `total_benefits` is zero, like everything downstream
    /// of that divisor.
    pub fn benefit_share(&self, benefit: f64) -> f64 {
        benefit / self.summary.total_benefits
    }
}
