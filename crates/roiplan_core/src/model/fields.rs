//! Parameter field registry
//!
//! One enum variant per input field, with accessors for group, display
//! label, unit, serialization key, and read/write against a
//! [`ParameterSet`]. Field lists in the UI and `key=value` overrides on the
//! CLI are both driven from here, so the two surfaces cannot drift apart.

use crate::error::OverrideError;
use crate::model::ParameterSet;

/// The six input groups, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamGroup {
    General,
    StudyApp,
    Absentee,
    Capacity,
    Reports,
    Investment,
}

impl ParamGroup {
    pub const ALL: [ParamGroup; 6] = [
        ParamGroup::General,
        ParamGroup::StudyApp,
        ParamGroup::Absentee,
        ParamGroup::Capacity,
        ParamGroup::Reports,
        ParamGroup::Investment,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ParamGroup::General => "General",
            ParamGroup::StudyApp => "Study App",
            ParamGroup::Absentee => "Absentee Balancing",
            ParamGroup::Capacity => "Capacity Balancing",
            ParamGroup::Reports => "Reports",
            ParamGroup::Investment => "Investment",
        }
    }
}

/// The 19 input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamField {
    // General
    WorkingDaysPerWeek,
    NumberOfLines,
    NumberOfIeOfficers,
    WorkingHoursPerWeekIe,
    AvgSalaryOfficer,
    // Study App
    StudiesNoteDownTime,
    TimeToEnterStudyTimes,
    // Absentee Balancing
    ReplaceEmployeesFindingTime,
    RebalanceTime,
    EmployeesPerLine,
    EmployeeWorkingHours,
    EmployeeAvgSalary,
    // Capacity Balancing
    StudyDataAnalysisTime,
    RebalancingTimeCapacity,
    CapacityBalancingTimesPerMonth,
    // Reports
    ReportQuantity,
    ReportDataAnalysisTime,
    ReportCreationTime,
    // Investment
    CostOfInvestmentPerMonth,
}

impl ParamField {
    pub const ALL: [ParamField; 19] = [
        ParamField::WorkingDaysPerWeek,
        ParamField::NumberOfLines,
        ParamField::NumberOfIeOfficers,
        ParamField::WorkingHoursPerWeekIe,
        ParamField::AvgSalaryOfficer,
        ParamField::StudiesNoteDownTime,
        ParamField::TimeToEnterStudyTimes,
        ParamField::ReplaceEmployeesFindingTime,
        ParamField::RebalanceTime,
        ParamField::EmployeesPerLine,
        ParamField::EmployeeWorkingHours,
        ParamField::EmployeeAvgSalary,
        ParamField::StudyDataAnalysisTime,
        ParamField::RebalancingTimeCapacity,
        ParamField::CapacityBalancingTimesPerMonth,
        ParamField::ReportQuantity,
        ParamField::ReportDataAnalysisTime,
        ParamField::ReportCreationTime,
        ParamField::CostOfInvestmentPerMonth,
    ];

    pub fn group(&self) -> ParamGroup {
        match self {
            ParamField::WorkingDaysPerWeek
            | ParamField::NumberOfLines
            | ParamField::NumberOfIeOfficers
            | ParamField::WorkingHoursPerWeekIe
            | ParamField::AvgSalaryOfficer => ParamGroup::General,
            ParamField::StudiesNoteDownTime | ParamField::TimeToEnterStudyTimes => {
                ParamGroup::StudyApp
            }
            ParamField::ReplaceEmployeesFindingTime
            | ParamField::RebalanceTime
            | ParamField::EmployeesPerLine
            | ParamField::EmployeeWorkingHours
            | ParamField::EmployeeAvgSalary => ParamGroup::Absentee,
            ParamField::StudyDataAnalysisTime
            | ParamField::RebalancingTimeCapacity
            | ParamField::CapacityBalancingTimesPerMonth => ParamGroup::Capacity,
            ParamField::ReportQuantity
            | ParamField::ReportDataAnalysisTime
            | ParamField::ReportCreationTime => ParamGroup::Reports,
            ParamField::CostOfInvestmentPerMonth => ParamGroup::Investment,
        }
    }

    /// Human-readable form label.
    pub fn label(&self) -> &'static str {
        match self {
            ParamField::WorkingDaysPerWeek => "Working days per week",
            ParamField::NumberOfLines => "Number of lines",
            ParamField::NumberOfIeOfficers => "Number of IE officers",
            ParamField::WorkingHoursPerWeekIe => "IE working hours per week",
            ParamField::AvgSalaryOfficer => "Avg officer salary",
            ParamField::StudiesNoteDownTime => "Study note-down time saved",
            ParamField::TimeToEnterStudyTimes => "Study entry time saved",
            ParamField::ReplaceEmployeesFindingTime => "Replacement finding time",
            ParamField::RebalanceTime => "Manual rebalance time",
            ParamField::EmployeesPerLine => "Employees per line",
            ParamField::EmployeeWorkingHours => "Employee working hours",
            ParamField::EmployeeAvgSalary => "Avg employee salary",
            ParamField::StudyDataAnalysisTime => "Study data analysis time",
            ParamField::RebalancingTimeCapacity => "Capacity rebalancing time",
            ParamField::CapacityBalancingTimesPerMonth => "Balancing runs per month",
            ParamField::ReportQuantity => "Reports per day",
            ParamField::ReportDataAnalysisTime => "Report data analysis time",
            ParamField::ReportCreationTime => "Report creation time",
            ParamField::CostOfInvestmentPerMonth => "Investment cost per month",
        }
    }

    /// Display unit for the field's value.
    pub fn unit(&self) -> &'static str {
        match self {
            ParamField::WorkingDaysPerWeek => "days/week",
            ParamField::NumberOfLines => "lines",
            ParamField::NumberOfIeOfficers => "officers",
            ParamField::WorkingHoursPerWeekIe
            | ParamField::EmployeeWorkingHours => "h/week",
            ParamField::AvgSalaryOfficer
            | ParamField::EmployeeAvgSalary
            | ParamField::CostOfInvestmentPerMonth => "$/month",
            ParamField::StudiesNoteDownTime
            | ParamField::TimeToEnterStudyTimes
            | ParamField::ReplaceEmployeesFindingTime
            | ParamField::RebalanceTime
            | ParamField::StudyDataAnalysisTime
            | ParamField::RebalancingTimeCapacity
            | ParamField::ReportDataAnalysisTime
            | ParamField::ReportCreationTime => "min",
            ParamField::CapacityBalancingTimesPerMonth => "runs/month",
            ParamField::EmployeesPerLine => "employees",
            ParamField::ReportQuantity => "reports/day",
        }
    }

    /// The serialization key, identical to the upstream input schema.
    pub fn key(&self) -> &'static str {
        match self {
            ParamField::WorkingDaysPerWeek => "workingDaysPerWeek",
            ParamField::NumberOfLines => "numberOfLines",
            ParamField::NumberOfIeOfficers => "numberOfIEOfficers",
            ParamField::WorkingHoursPerWeekIe => "workingHoursPerWeekIE",
            ParamField::AvgSalaryOfficer => "avgSalaryOfficer",
            ParamField::StudiesNoteDownTime => "studiesNoteDownTime",
            ParamField::TimeToEnterStudyTimes => "timeToEnterStudyTimes",
            ParamField::ReplaceEmployeesFindingTime => "replaceEmployeesFindingTime",
            ParamField::RebalanceTime => "rebalanceTime",
            ParamField::EmployeesPerLine => "employeesPerLine",
            ParamField::EmployeeWorkingHours => "employeeWorkingHours",
            ParamField::EmployeeAvgSalary => "employeeAvgSalary",
            ParamField::StudyDataAnalysisTime => "studyDataAnalysisTime",
            ParamField::RebalancingTimeCapacity => "rebalancingTimeCapacity",
            ParamField::CapacityBalancingTimesPerMonth => "capacityBalancingTimesPerMonth",
            ParamField::ReportQuantity => "reportQuantity",
            ParamField::ReportDataAnalysisTime => "reportDataAnalysisTime",
            ParamField::ReportCreationTime => "reportCreationTime",
            ParamField::CostOfInvestmentPerMonth => "costOfInvestmentPerMonth",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }

    /// All fields belonging to `group`, in registry order.
    pub fn fields_in(group: ParamGroup) -> Vec<ParamField> {
        Self::ALL
            .iter()
            .copied()
            .filter(|f| f.group() == group)
            .collect()
    }

    pub fn get(&self, params: &ParameterSet) -> f64 {
        match self {
            ParamField::WorkingDaysPerWeek => params.general.working_days_per_week,
            ParamField::NumberOfLines => params.general.number_of_lines,
            ParamField::NumberOfIeOfficers => params.general.number_of_ie_officers,
            ParamField::WorkingHoursPerWeekIe => params.general.working_hours_per_week_ie,
            ParamField::AvgSalaryOfficer => params.general.avg_salary_officer,
            ParamField::StudiesNoteDownTime => params.study_app.studies_note_down_time,
            ParamField::TimeToEnterStudyTimes => params.study_app.time_to_enter_study_times,
            ParamField::ReplaceEmployeesFindingTime => {
                params.absentee.replace_employees_finding_time
            }
            ParamField::RebalanceTime => params.absentee.rebalance_time,
            ParamField::EmployeesPerLine => params.absentee.employees_per_line,
            ParamField::EmployeeWorkingHours => params.absentee.employee_working_hours,
            ParamField::EmployeeAvgSalary => params.absentee.employee_avg_salary,
            ParamField::StudyDataAnalysisTime => params.capacity.study_data_analysis_time,
            ParamField::RebalancingTimeCapacity => params.capacity.rebalancing_time_capacity,
            ParamField::CapacityBalancingTimesPerMonth => {
                params.capacity.capacity_balancing_times_per_month
            }
            ParamField::ReportQuantity => params.reports.report_quantity,
            ParamField::ReportDataAnalysisTime => params.reports.report_data_analysis_time,
            ParamField::ReportCreationTime => params.reports.report_creation_time,
            ParamField::CostOfInvestmentPerMonth => {
                params.investment.cost_of_investment_per_month
            }
        }
    }

    pub fn set(&self, params: &mut ParameterSet, value: f64) {
        match self {
            ParamField::WorkingDaysPerWeek => params.general.working_days_per_week = value,
            ParamField::NumberOfLines => params.general.number_of_lines = value,
            ParamField::NumberOfIeOfficers => params.general.number_of_ie_officers = value,
            ParamField::WorkingHoursPerWeekIe => {
                params.general.working_hours_per_week_ie = value
            }
            ParamField::AvgSalaryOfficer => params.general.avg_salary_officer = value,
            ParamField::StudiesNoteDownTime => params.study_app.studies_note_down_time = value,
            ParamField::TimeToEnterStudyTimes => {
                params.study_app.time_to_enter_study_times = value
            }
            ParamField::ReplaceEmployeesFindingTime => {
                params.absentee.replace_employees_finding_time = value
            }
            ParamField::RebalanceTime => params.absentee.rebalance_time = value,
            ParamField::EmployeesPerLine => params.absentee.employees_per_line = value,
            ParamField::EmployeeWorkingHours => {
                params.absentee.employee_working_hours = value
            }
            ParamField::EmployeeAvgSalary => params.absentee.employee_avg_salary = value,
            ParamField::StudyDataAnalysisTime => {
                params.capacity.study_data_analysis_time = value
            }
            ParamField::RebalancingTimeCapacity => {
                params.capacity.rebalancing_time_capacity = value
            }
            ParamField::CapacityBalancingTimesPerMonth => {
                params.capacity.capacity_balancing_times_per_month = value
            }
            ParamField::ReportQuantity => params.reports.report_quantity = value,
            ParamField::ReportDataAnalysisTime => {
                params.reports.report_data_analysis_time = value
            }
            ParamField::ReportCreationTime => params.reports.report_creation_time = value,
            ParamField::CostOfInvestmentPerMonth => {
                params.investment.cost_of_investment_per_month = value
            }
        }
    }

    /// Parse a `key=value` assignment against the registry.
    pub fn parse_assignment(input: &str) -> Result<(ParamField, f64), OverrideError> {
        let (key, value) = input
            .split_once('=')
            .ok_or_else(|| OverrideError::MissingSeparator(input.to_string()))?;
        let field = ParamField::from_key(key.trim())
            .ok_or_else(|| OverrideError::UnknownField(key.trim().to_string()))?;
        let value: f64 = value.trim().parse().map_err(|_| OverrideError::InvalidValue {
            field,
            value: value.trim().to_string(),
        })?;
        Ok((field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for field in ParamField::ALL {
            assert_eq!(ParamField::from_key(field.key()), Some(field));
        }
    }

    #[test]
    fn test_groups_cover_all_fields() {
        let total: usize = ParamGroup::ALL
            .iter()
            .map(|g| ParamField::fields_in(*g).len())
            .sum();
        assert_eq!(total, ParamField::ALL.len());
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut params = ParameterSet::default();
        for field in ParamField::ALL {
            field.set(&mut params, 123.5);
            assert_eq!(field.get(&params), 123.5, "field {field:?}");
        }
    }

    #[test]
    fn test_parse_assignment() {
        let (field, value) = ParamField::parse_assignment("numberOfLines=25").unwrap();
        assert_eq!(field, ParamField::NumberOfLines);
        assert_eq!(value, 25.0);

        // Whitespace around key and value is tolerated
        let (field, value) = ParamField::parse_assignment(" rebalanceTime = 7.5 ").unwrap();
        assert_eq!(field, ParamField::RebalanceTime);
        assert_eq!(value, 7.5);

        assert!(matches!(
            ParamField::parse_assignment("numberOfLines"),
            Err(OverrideError::MissingSeparator(_))
        ));
        assert!(matches!(
            ParamField::parse_assignment("notAField=3"),
            Err(OverrideError::UnknownField(_))
        ));
        assert!(matches!(
            ParamField::parse_assignment("numberOfLines=abc"),
            Err(OverrideError::InvalidValue { .. })
        ));
    }
}
