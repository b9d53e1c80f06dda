//! The derivation pipeline.
//!
//! A single synchronous pass: Study App first (its working-hour and cost
//! references feed the other three modules), then the remaining calculators,
//! then the ROI aggregation. No state survives between calls.

use crate::model::{DerivedMetrics, ParameterSet, RoiSummary};
use crate::modules;

/// Day count used only by the payback ratio. The module formulas use a 4-week
/// month instead; the mismatch is inherited from the original formulation and
/// preserved literally.
const PAYBACK_DAYS_PER_MONTH: f64 = 30.0;

/// Derive the full metric set from one parameter snapshot.
///
/// Total: never fails. Zero denominators (officer count, working-hour bases,
/// total benefits) surface as NaN/Infinity in the affected fields and
/// propagate downstream; callers that want to reject such input run
/// [`crate::validate`] first.
pub fn derive_metrics(params: &ParameterSet) -> DerivedMetrics {
    let study_app = modules::study_app::evaluate(params);
    let absentee = modules::absentee::evaluate(params, &study_app);
    let capacity = modules::capacity::evaluate(params, &study_app);
    let reports = modules::reports::evaluate(params, &study_app);

    let total_benefits = study_app.total_benefit
        + absentee.total_benefit
        + capacity.total_benefit
        + reports.total_benefit;
    let investment = params.investment.cost_of_investment_per_month;
    let roi = ((total_benefits - investment) / investment) * 100.0;
    let payback_period_days = investment / (total_benefits / PAYBACK_DAYS_PER_MONTH);

    DerivedMetrics {
        study_app,
        absentee,
        capacity,
        reports,
        summary: RoiSummary {
            total_benefits,
            roi,
            payback_period_days,
        },
    }
}
