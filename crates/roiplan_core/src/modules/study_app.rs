//! Study App calculator: time saved by digitizing time studies.
//!
//! Besides its own benefit, this module produces the officer working-hour and
//! cost references the Absentee, Capacity, and Reports modules measure
//! against, so it always runs first.

use super::{MINUTES_PER_HOUR, WEEKS_PER_MONTH};
use crate::model::{ParameterSet, StudyAppMetrics};

pub fn evaluate(params: &ParameterSet) -> StudyAppMetrics {
    let general = &params.general;
    let inputs = &params.study_app;

    let time_saving_per_line = inputs.studies_note_down_time + inputs.time_to_enter_study_times;
    // Fractional lines per officer model average workload, not assignment.
    let lines_per_officer = general.number_of_lines / general.number_of_ie_officers;
    let time_saving_per_officer = time_saving_per_line * lines_per_officer;
    let total_time_saving_per_day = time_saving_per_officer * general.number_of_ie_officers;
    let total_time_saving_per_month =
        total_time_saving_per_day * general.working_days_per_week * WEEKS_PER_MONTH;
    let total_time_saving_hours_per_month = total_time_saving_per_month / MINUTES_PER_HOUR;

    let total_working_hours_per_officer = general.working_hours_per_week_ie * WEEKS_PER_MONTH;
    let total_working_hours_all_officers =
        total_working_hours_per_officer * general.number_of_ie_officers;
    let saved_time_percentage =
        (total_time_saving_hours_per_month / total_working_hours_all_officers) * 100.0;

    let total_cost_per_officer = general.avg_salary_officer;
    let total_cost_all_officers = total_cost_per_officer * general.number_of_ie_officers;
    let total_benefit = (total_time_saving_hours_per_month / total_working_hours_all_officers)
        * total_cost_all_officers;

    StudyAppMetrics {
        time_saving_per_line,
        lines_per_officer,
        time_saving_per_officer,
        total_time_saving_per_day,
        total_time_saving_per_month,
        total_time_saving_hours_per_month,
        total_working_hours_per_officer,
        total_working_hours_all_officers,
        saved_time_percentage,
        total_cost_per_officer,
        total_cost_all_officers,
        total_benefit,
    }
}
