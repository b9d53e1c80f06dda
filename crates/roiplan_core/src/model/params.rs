//! Input parameter definitions
//!
//! A [`ParameterSet`] is an immutable-per-computation value object: the caller
//! owns its lifecycle (create from defaults, overwrite fields on edit, rebuild
//! on reset) and the engine only ever reads it. All fields are non-negative
//! real numbers representing a duration in minutes or hours, a count, or a
//! monetary amount per month; negative values are a caller-side precondition
//! violation, reported by the validation layer but never rejected here.
//!
//! The serialized form is the flat camelCase schema of the upstream input
//! layer, reproduced exactly (including the `IE` capitalization quirks).

use serde::{Deserialize, Serialize};

/// Fixed conversion applied once to the three monetary defaults, which were
/// originally quoted in Sri Lankan rupees. The engine itself is
/// currency-agnostic.
pub const LKR_TO_USD: f64 = 0.0033;

/// Plant-wide parameters shared by all four modules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralParams {
    pub working_days_per_week: f64,
    pub number_of_lines: f64,
    #[serde(rename = "numberOfIEOfficers")]
    pub number_of_ie_officers: f64,
    #[serde(rename = "workingHoursPerWeekIE")]
    pub working_hours_per_week_ie: f64,
    /// Average IE officer salary per month.
    pub avg_salary_officer: f64,
}

/// Time-study digitization parameters (minutes per line per day).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyAppParams {
    pub studies_note_down_time: f64,
    pub time_to_enter_study_times: f64,
}

/// Absence replacement and rebalancing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenteeParams {
    pub replace_employees_finding_time: f64,
    pub rebalance_time: f64,
    pub employees_per_line: f64,
    /// Employee working hours per week.
    pub employee_working_hours: f64,
    /// Average employee salary per month.
    pub employee_avg_salary: f64,
}

/// Capacity rebalancing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityParams {
    pub study_data_analysis_time: f64,
    pub rebalancing_time_capacity: f64,
    /// Accepted but not consumed by the current payoff formula; kept so the
    /// input schema stays compatible with the upstream form.
    pub capacity_balancing_times_per_month: f64,
}

/// Automated reporting parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportsParams {
    pub report_quantity: f64,
    pub report_data_analysis_time: f64,
    pub report_creation_time: f64,
}

/// Investment parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentParams {
    pub cost_of_investment_per_month: f64,
}

/// The complete 19-field input to the derivation engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    #[serde(flatten)]
    pub general: GeneralParams,
    #[serde(flatten)]
    pub study_app: StudyAppParams,
    #[serde(flatten)]
    pub absentee: AbsenteeParams,
    #[serde(flatten)]
    pub capacity: CapacityParams,
    #[serde(flatten)]
    pub reports: ReportsParams,
    #[serde(flatten)]
    pub investment: InvestmentParams,
}

impl Default for ParameterSet {
    /// The documented reference scenario. The three monetary defaults apply
    /// [`LKR_TO_USD`] at construction; this is the only place any currency
    /// conversion happens.
    fn default() -> Self {
        Self {
            general: GeneralParams {
                working_days_per_week: 6.0,
                number_of_lines: 40.0,
                number_of_ie_officers: 5.0,
                working_hours_per_week_ie: 45.0,
                avg_salary_officer: 75_000.0 * LKR_TO_USD,
            },
            study_app: StudyAppParams {
                studies_note_down_time: 5.0,
                time_to_enter_study_times: 15.0,
            },
            absentee: AbsenteeParams {
                replace_employees_finding_time: 10.0,
                rebalance_time: 15.0,
                employees_per_line: 10.0,
                employee_working_hours: 50.0,
                employee_avg_salary: 50_000.0 * LKR_TO_USD,
            },
            capacity: CapacityParams {
                study_data_analysis_time: 15.0,
                rebalancing_time_capacity: 15.0,
                capacity_balancing_times_per_month: 5.0,
            },
            reports: ReportsParams {
                report_quantity: 5.0,
                report_data_analysis_time: 15.0,
                report_creation_time: 10.0,
            },
            investment: InvestmentParams {
                cost_of_investment_per_month: 300_000.0 * LKR_TO_USD,
            },
        }
    }
}
