//! Anomalous-input behavior: the engine never rejects, it degrades.

use crate::engine::derive_metrics;
use crate::model::ParameterSet;

#[test]
fn test_rebalance_below_baseline_gives_negative_savings() {
    let mut params = ParameterSet::default();
    params.absentee.rebalance_time = 2.0;
    params.absentee.replace_employees_finding_time = 0.0;
    let m = derive_metrics(&params).absentee;

    assert_eq!(m.rebalancing_time_saving, -3.0);
    assert_eq!(m.total_time_saving_per_line, -3.0);
    assert!(m.total_time_per_month < 0.0);
    assert!(m.employee_saving_cost < 0.0);
    // The fixed IE stream is unaffected and can still carry the benefit
    assert!(m.ie_saving_cost > 0.0);
    assert_eq!(m.total_benefit, m.ie_saving_cost + m.employee_saving_cost);
}

#[test]
fn test_zero_benefits_give_infinite_payback() {
    // No lines: every saving stream collapses to zero
    let mut params = ParameterSet::default();
    params.general.number_of_lines = 0.0;
    params.absentee.rebalance_time = 5.0;
    params.absentee.replace_employees_finding_time = 0.0;
    params.reports.report_quantity = 0.0;
    let m = derive_metrics(&params);

    assert_eq!(m.summary.total_benefits, 0.0);
    // The whole investment is lost and never paid back
    assert_eq!(m.summary.roi, -100.0);
    assert!(m.summary.payback_period_days.is_infinite());
    assert!(m.summary.payback_period_days > 0.0);
}

#[test]
fn test_percentages_are_not_clamped() {
    // Enough lines that the fixed IE allowance alone outstrips one officer's
    // monthly hours
    let mut params = ParameterSet::default();
    params.general.number_of_lines = 600.0;
    let m = derive_metrics(&params).absentee;

    // 600 lines * 10 min * 4 weeks / 60 = 400 h against a 180 h base
    assert!((m.ie_saving_time_per_month - 400.0).abs() < 1e-9);
    assert!(m.ie_saving_percentage > 100.0);
    assert!((m.ie_saving_percentage - 400.0 / 180.0 * 100.0).abs() < 1e-9);
}

#[test]
fn test_zero_investment_cost_blows_up_roi_only() {
    let mut params = ParameterSet::default();
    params.investment.cost_of_investment_per_month = 0.0;
    let m = derive_metrics(&params);

    // Module metrics never touch the investment cost
    assert!(m.summary.total_benefits.is_finite());
    assert!(m.study_app.total_benefit.is_finite());
    // (benefits - 0) / 0 and 0 / (benefits / 30)
    assert!(m.summary.roi.is_infinite());
    assert_eq!(m.summary.payback_period_days, 0.0);
}

#[test]
fn test_unused_capacity_runs_input_has_no_effect() {
    let mut params = ParameterSet::default();
    let baseline = derive_metrics(&params);
    params.capacity.capacity_balancing_times_per_month = 99.0;
    assert_eq!(derive_metrics(&params), baseline);
}
