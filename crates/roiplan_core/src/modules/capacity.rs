//! Capacity Balancing calculator: IE-officer time saved on study analysis and
//! capacity rebalancing, measured against the Study App all-officer reference.
//!
//! `capacityBalancingTimesPerMonth` is accepted as an input but not consumed
//! by the current payoff formula.

use super::{MINUTES_PER_HOUR, WEEKS_PER_MONTH};
use crate::model::{CapacityMetrics, ParameterSet, StudyAppMetrics};

pub fn evaluate(params: &ParameterSet, study_app: &StudyAppMetrics) -> CapacityMetrics {
    let general = &params.general;
    let inputs = &params.capacity;

    let time_saving_per_line_per_day =
        inputs.study_data_analysis_time + inputs.rebalancing_time_capacity;
    let time_saving_all_lines_per_day = time_saving_per_line_per_day * general.number_of_lines;
    let time_saving_all_lines_per_month = (time_saving_all_lines_per_day
        * general.working_days_per_week
        * WEEKS_PER_MONTH)
        / MINUTES_PER_HOUR;

    let saved_time_percentage =
        (time_saving_all_lines_per_month / study_app.total_working_hours_all_officers) * 100.0;
    let total_benefit = (time_saving_all_lines_per_month
        / study_app.total_working_hours_all_officers)
        * study_app.total_cost_all_officers;

    CapacityMetrics {
        time_saving_per_line_per_day,
        time_saving_all_lines_per_day,
        time_saving_all_lines_per_month,
        saved_time_percentage,
        total_benefit,
    }
}
