use roiplan_core::{
    DerivedMetrics, ParamField, ParameterSet, ParameterWarning, derive_metrics, validate,
};

use super::screen_state::{BreakdownState, ParametersState, ResultsState};
use super::tabs::TabId;

/// All mutable application state. The parameter set is the single editable
/// object; metrics and warnings are derived views of it, refreshed by
/// [`AppState::recompute`] after every committed change.
pub struct AppState {
    pub active_tab: TabId,
    pub params: ParameterSet,
    pub metrics: DerivedMetrics,
    pub warnings: Vec<ParameterWarning>,

    pub parameters_state: ParametersState,
    pub results_state: ResultsState,
    pub breakdown_state: BreakdownState,

    pub error_message: Option<String>,
    pub status_message: Option<String>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_params(ParameterSet::default())
    }
}

impl AppState {
    pub fn with_params(params: ParameterSet) -> Self {
        Self {
            active_tab: TabId::Parameters,
            metrics: derive_metrics(&params),
            warnings: validate(&params),
            params,
            parameters_state: ParametersState::default(),
            results_state: ResultsState::default(),
            breakdown_state: BreakdownState::default(),
            error_message: None,
            status_message: None,
            exit: false,
        }
    }

    /// Re-derive metrics and warnings from the current parameters.
    pub fn recompute(&mut self) {
        self.metrics = derive_metrics(&self.params);
        self.warnings = validate(&self.params);
    }

    /// Write one field and refresh the derived state.
    pub fn set_field(&mut self, field: ParamField, value: f64) {
        field.set(&mut self.params, value);
        self.recompute();
        tracing::debug!(
            "Set {} = {value}; total benefits now {:.2}",
            field.key(),
            self.metrics.summary.total_benefits
        );
    }

    /// Restore all parameters to the default scenario.
    pub fn reset_params(&mut self) {
        self.params = ParameterSet::default();
        self.recompute();
        self.set_status("Parameters reset to defaults".to_string());
        tracing::info!("Parameters reset to defaults");
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
        self.status_message = None;
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.error_message = None;
    }
}
