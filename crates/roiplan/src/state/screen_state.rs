/// Per-screen state structs.

/// Which of a screen's two panels has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPanel {
    Left,
    Right,
}

#[derive(Debug)]
pub struct ParametersState {
    pub focused_panel: FocusedPanel,
    pub selected_group_index: usize,
    pub selected_field_index: usize,
    /// True while a field value is being typed into `edit_buffer`.
    pub editing: bool,
    pub edit_buffer: String,
}

impl Default for ParametersState {
    fn default() -> Self {
        Self {
            focused_panel: FocusedPanel::Left,
            selected_group_index: 0,
            selected_field_index: 0,
            editing: false,
            edit_buffer: String::new(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ResultsState {
    pub scroll_offset: usize,
}

#[derive(Debug, Default)]
pub struct BreakdownState {
    /// Index into the four modules plus the summary section.
    pub selected_section_index: usize,
}
