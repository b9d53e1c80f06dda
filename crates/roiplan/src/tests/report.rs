//! Headless report rendering.

use roiplan_core::{ParameterSet, derive_metrics, validate};

use crate::report::{render_json, render_text};

#[test]
fn test_text_report_reference_scenario() {
    let params = ParameterSet::default();
    let metrics = derive_metrics(&params);
    let text = render_text(&params, &metrics, &validate(&params));

    assert!(text.contains("Total monthly benefits:  $1,342"));
    assert!(text.contains("Return on investment:    35.51%"));
    assert!(text.contains("Payback period:          22.1 days"));
    assert!(text.contains("Monthly investment:      $990"));
    // One line per module and one per parameter
    assert!(text.contains("Study App"));
    assert!(text.contains("numberOfIEOfficers"));
    // Clean defaults produce no warnings section
    assert!(!text.contains("Warnings"));
}

#[test]
fn test_text_report_includes_warnings() {
    let mut params = ParameterSet::default();
    params.general.number_of_ie_officers = 0.0;
    let metrics = derive_metrics(&params);
    let text = render_text(&params, &metrics, &validate(&params));

    assert!(text.contains("Warnings"));
    assert!(text.contains("Number of IE officers is zero"));
    // Non-finite aggregates render as the placeholder, not as "NaN"
    assert!(text.contains("Total monthly benefits:  --"));
    assert!(!text.contains("NaN"));
}

#[test]
fn test_json_report_schema() {
    let params = ParameterSet::default();
    let metrics = derive_metrics(&params);
    let json = render_json(&params, &metrics, &validate(&params)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["parameters"]["numberOfIEOfficers"].as_f64(), Some(5.0));
    assert_eq!(value["parameters"]["workingHoursPerWeekIE"].as_f64(), Some(45.0));
    assert_eq!(
        value["metrics"]["summary"]["totalBenefits"].as_f64(),
        Some(metrics.summary.total_benefits)
    );
    assert_eq!(
        value["metrics"]["studyApp"]["totalTimeSavingHoursPerMonth"].as_f64(),
        Some(320.0)
    );
    assert_eq!(value["warnings"].as_array().map(|a| a.len()), Some(0));
}
