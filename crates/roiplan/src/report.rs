//! Headless report rendering for `--report` mode.
//!
//! Text reports mirror the layout of the Results and Breakdown screens; JSON
//! reports reuse the core serde schemas so scripted consumers see the exact
//! field names of the input form.

use std::fmt::Write;

use roiplan_core::{DerivedMetrics, ParamField, ParameterSet, ParameterWarning};
use serde::Serialize;

use crate::util::format::{format_currency, format_hours, format_percentage};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    parameters: &'a ParameterSet,
    metrics: &'a DerivedMetrics,
    warnings: Vec<String>,
}

/// Render the plain-text report printed by `--report text`.
pub fn render_text(
    params: &ParameterSet,
    metrics: &DerivedMetrics,
    warnings: &[ParameterWarning],
) -> String {
    let mut out = String::new();
    let s = &metrics.summary;

    let _ = writeln!(out, "ROI estimate");
    let _ = writeln!(out, "============");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Total monthly benefits:  {}",
        format_currency(s.total_benefits)
    );
    let _ = writeln!(out, "Return on investment:    {}", format_percentage(s.roi));
    let _ = writeln!(
        out,
        "Payback period:          {}",
        if s.payback_period_days.is_finite() {
            format!("{:.1} days", s.payback_period_days)
        } else {
            "--".to_string()
        }
    );
    let _ = writeln!(
        out,
        "Monthly investment:      {}",
        format_currency(params.investment.cost_of_investment_per_month)
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Per module");
    let _ = writeln!(out, "----------");
    let modules: [(&str, f64, f64, f64); 4] = [
        (
            "Study App",
            metrics.study_app.total_time_saving_hours_per_month,
            metrics.study_app.saved_time_percentage,
            metrics.study_app.total_benefit,
        ),
        (
            "Absentee",
            metrics.absentee.total_time_per_month + metrics.absentee.ie_saving_time_per_month,
            metrics.absentee.saving_time_percentage,
            metrics.absentee.total_benefit,
        ),
        (
            "Capacity",
            metrics.capacity.time_saving_all_lines_per_month,
            metrics.capacity.saved_time_percentage,
            metrics.capacity.total_benefit,
        ),
        (
            "Reports",
            metrics.reports.time_saving_per_month,
            metrics.reports.saved_time_percentage,
            metrics.reports.total_benefit,
        ),
    ];
    for (name, hours, percentage, benefit) in modules {
        let share = metrics.benefit_share(benefit) * 100.0;
        let _ = writeln!(
            out,
            "{:<12} saved {:>10}  ({:>8} of working time)  benefit {:>10}  share {:>8}",
            name,
            format_hours(hours),
            format_percentage(percentage),
            format_currency(benefit),
            format_percentage(share),
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Parameters");
    let _ = writeln!(out, "----------");
    for field in ParamField::ALL {
        let _ = writeln!(
            out,
            "{:<32} {:>12} {}",
            field.key(),
            crate::util::format::format_number(field.get(params), 2),
            field.unit()
        );
    }

    if !warnings.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Warnings");
        let _ = writeln!(out, "--------");
        for warning in warnings {
            let _ = writeln!(out, "! {warning}");
        }
    }

    out
}

/// Render the pretty JSON document printed by `--report json`.
pub fn render_json(
    params: &ParameterSet,
    metrics: &DerivedMetrics,
    warnings: &[ParameterWarning],
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report {
        parameters: params,
        metrics,
        warnings: warnings.iter().map(|w| w.to_string()).collect(),
    })
}
