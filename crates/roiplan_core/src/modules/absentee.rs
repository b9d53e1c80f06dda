//! Absentee Balancing calculator: time saved replacing absent employees and
//! rebalancing their lines.
//!
//! Two independent saving streams are summed: floor employees (coordination
//! around replacements) and IE officers (a fixed weekly allowance per line).
//! The hours do not overlap, so the sum is not double counting.

use super::{MINUTES_PER_HOUR, WEEKS_PER_MONTH};
use crate::model::{AbsenteeMetrics, ParameterSet, StudyAppMetrics};

/// Minutes one rebalance takes with the app; savings are measured against it.
const APP_REBALANCE_MINUTES: f64 = 5.0;

/// Fixed IE-officer coordination saving, minutes per line per week.
const IE_SAVING_MINUTES_PER_LINE_PER_WEEK: f64 = 10.0;

pub fn evaluate(params: &ParameterSet, study_app: &StudyAppMetrics) -> AbsenteeMetrics {
    let general = &params.general;
    let inputs = &params.absentee;

    // Goes negative when the manual time is already under the app baseline;
    // that flows through unguarded.
    let rebalancing_time_saving = inputs.rebalance_time - APP_REBALANCE_MINUTES;
    let total_time_saving_per_line =
        inputs.replace_employees_finding_time + rebalancing_time_saving;
    // Two employees share the coordination effort around each replacement.
    let total_time_per_employee = total_time_saving_per_line / 2.0;
    let total_time_per_line_per_day = total_time_per_employee * inputs.employees_per_line;
    let total_time_per_week = total_time_per_line_per_day * general.working_days_per_week;
    let total_time_per_month = (total_time_per_week * WEEKS_PER_MONTH) / MINUTES_PER_HOUR;

    let total_working_hours_per_line =
        inputs.employee_working_hours * inputs.employees_per_line * WEEKS_PER_MONTH;
    let saving_time_percentage = (total_time_per_month / total_working_hours_per_line) * 100.0;
    let total_labor_cost_per_line = inputs.employee_avg_salary * inputs.employees_per_line;

    let ie_saving_time_per_month =
        (general.number_of_lines * IE_SAVING_MINUTES_PER_LINE_PER_WEEK * WEEKS_PER_MONTH)
            / MINUTES_PER_HOUR;
    let ie_saving_percentage =
        (ie_saving_time_per_month / study_app.total_working_hours_per_officer) * 100.0;
    let ie_saving_cost = (ie_saving_time_per_month / study_app.total_working_hours_per_officer)
        * general.avg_salary_officer;
    let employee_saving_cost =
        (total_time_per_month / total_working_hours_per_line) * total_labor_cost_per_line;
    let total_benefit = ie_saving_cost + employee_saving_cost;

    AbsenteeMetrics {
        rebalancing_time_saving,
        total_time_saving_per_line,
        total_time_per_employee,
        total_time_per_line_per_day,
        total_time_per_week,
        total_time_per_month,
        total_working_hours_per_line,
        saving_time_percentage,
        total_labor_cost_per_line,
        ie_saving_time_per_month,
        ie_saving_percentage,
        ie_saving_cost,
        employee_saving_cost,
        total_benefit,
    }
}
