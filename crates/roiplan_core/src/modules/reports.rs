//! Reports calculator: IE-officer time saved by automated report generation.
//!
//! Unlike the other officer-time modules this one measures against the
//! per-officer reference hours, not the all-officer total.

use super::{MINUTES_PER_HOUR, WEEKS_PER_MONTH};
use crate::model::{ParameterSet, ReportsMetrics, StudyAppMetrics};

pub fn evaluate(params: &ParameterSet, study_app: &StudyAppMetrics) -> ReportsMetrics {
    let general = &params.general;
    let inputs = &params.reports;

    // Halved: report work partially overlaps across officers.
    let time_saving_per_day = (inputs.report_data_analysis_time + inputs.report_creation_time)
        * inputs.report_quantity
        / 2.0;
    let time_saving_per_month =
        (time_saving_per_day * general.working_days_per_week * WEEKS_PER_MONTH)
            / MINUTES_PER_HOUR;

    let saved_time_percentage =
        (time_saving_per_month / study_app.total_working_hours_per_officer) * 100.0;
    let total_benefit = (time_saving_per_month / study_app.total_working_hours_per_officer)
        * general.avg_salary_officer
        * general.number_of_ie_officers;

    ReportsMetrics {
        time_saving_per_day,
        time_saving_per_month,
        saved_time_percentage,
        total_benefit,
    }
}
