mod fields;
mod metrics;
mod params;

pub use fields::{ParamField, ParamGroup};
pub use metrics::{
    AbsenteeMetrics, CapacityMetrics, DerivedMetrics, ReportsMetrics, RoiSummary, StudyAppMetrics,
};
pub use params::{
    AbsenteeParams, CapacityParams, GeneralParams, InvestmentParams, LKR_TO_USD, ParameterSet,
    ReportsParams, StudyAppParams,
};
