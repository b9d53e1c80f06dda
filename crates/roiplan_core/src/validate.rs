//! Parameter sanity warnings.
//!
//! The optional guard layer above [`crate::derive_metrics`]: it observes
//! inputs the engine accepts but which produce non-finite or negative
//! downstream values, and reports them as warnings. It never blocks a
//! computation and the engine never consults it.

use std::fmt;

use crate::model::{ParamField, ParameterSet};

/// A non-blocking observation about one parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterWarning {
    /// A field is below zero; all fields are modeled as non-negative.
    NegativeInput { field: ParamField, value: f64 },
    /// A field used (directly or as a factor) in a divisor is zero, so
    /// dependent percentages, benefits, or the payback period go non-finite.
    ZeroDenominator { field: ParamField },
    /// Manual rebalance time is under the 5-minute improved-process baseline,
    /// so the modeled rebalancing saving is negative.
    BelowAppBaseline { field: ParamField, value: f64 },
}

impl fmt::Display for ParameterWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterWarning::NegativeInput { field, value } => {
                write!(f, "{} is negative ({value})", field.label())
            }
            ParameterWarning::ZeroDenominator { field } => {
                write!(
                    f,
                    "{} is zero; dependent metrics will be non-finite",
                    field.label()
                )
            }
            ParameterWarning::BelowAppBaseline { field, value } => {
                write!(
                    f,
                    "{} ({value} min) is under the 5 min app baseline; rebalancing saving goes negative",
                    field.label()
                )
            }
        }
    }
}

/// Fields that zero out a divisor somewhere in the derivation: the officer
/// count and per-officer hour base, the factors of the line-hours base, and
/// the investment cost (divisor of ROI and payback).
const DENOMINATOR_FIELDS: [ParamField; 5] = [
    ParamField::NumberOfIeOfficers,
    ParamField::WorkingHoursPerWeekIe,
    ParamField::EmployeesPerLine,
    ParamField::EmployeeWorkingHours,
    ParamField::CostOfInvestmentPerMonth,
];

/// Scan a parameter set for values the engine will silently turn into
/// non-finite or negative results.
pub fn validate(params: &ParameterSet) -> Vec<ParameterWarning> {
    let mut warnings = Vec::new();

    for field in ParamField::ALL {
        let value = field.get(params);
        if value < 0.0 {
            warnings.push(ParameterWarning::NegativeInput { field, value });
        }
    }

    for field in DENOMINATOR_FIELDS {
        if field.get(params) == 0.0 {
            warnings.push(ParameterWarning::ZeroDenominator { field });
        }
    }

    let rebalance = ParamField::RebalanceTime.get(params);
    if (0.0..5.0).contains(&rebalance) {
        warnings.push(ParameterWarning::BelowAppBaseline {
            field: ParamField::RebalanceTime,
            value: rebalance,
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_clean() {
        assert!(validate(&ParameterSet::default()).is_empty());
    }

    #[test]
    fn test_negative_input_warns() {
        let mut params = ParameterSet::default();
        params.reports.report_quantity = -1.0;
        let warnings = validate(&params);
        assert_eq!(
            warnings,
            vec![ParameterWarning::NegativeInput {
                field: ParamField::ReportQuantity,
                value: -1.0
            }]
        );
    }

    #[test]
    fn test_zero_officers_warns() {
        let mut params = ParameterSet::default();
        params.general.number_of_ie_officers = 0.0;
        let warnings = validate(&params);
        assert!(warnings.contains(&ParameterWarning::ZeroDenominator {
            field: ParamField::NumberOfIeOfficers
        }));
    }

    #[test]
    fn test_rebalance_under_baseline_warns() {
        let mut params = ParameterSet::default();
        params.absentee.rebalance_time = 3.0;
        let warnings = validate(&params);
        assert_eq!(
            warnings,
            vec![ParameterWarning::BelowAppBaseline {
                field: ParamField::RebalanceTime,
                value: 3.0
            }]
        );

        // A negative rebalance time reports as negative input, not baseline
        params.absentee.rebalance_time = -2.0;
        let warnings = validate(&params);
        assert_eq!(
            warnings,
            vec![ParameterWarning::NegativeInput {
                field: ParamField::RebalanceTime,
                value: -2.0
            }]
        );
    }

    #[test]
    fn test_warning_display() {
        let warning = ParameterWarning::ZeroDenominator {
            field: ParamField::NumberOfIeOfficers,
        };
        assert_eq!(
            warning.to_string(),
            "Number of IE officers is zero; dependent metrics will be non-finite"
        );
    }
}
