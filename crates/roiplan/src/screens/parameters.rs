use crate::components::{Component, EventResult};
use crate::state::{AppState, FocusedPanel};
use crate::util::format::{format_currency, format_number, format_percentage};
use crate::util::styles::{HELP_COLOR, WARNING_COLOR, focused_block};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};
use roiplan_core::{ParamField, ParamGroup};

use super::Screen;

pub struct ParametersScreen;

impl ParametersScreen {
    pub fn new() -> Self {
        Self
    }

    fn selected_group(state: &AppState) -> ParamGroup {
        ParamGroup::ALL[state.parameters_state.selected_group_index % ParamGroup::ALL.len()]
    }

    fn selected_field(state: &AppState) -> Option<ParamField> {
        ParamField::fields_in(Self::selected_group(state))
            .get(state.parameters_state.selected_field_index)
            .copied()
    }

    fn start_editing(state: &mut AppState) {
        if Self::selected_field(state).is_some() {
            state.parameters_state.editing = true;
            state.parameters_state.edit_buffer.clear();
            state.clear_error();
        }
    }

    fn commit_edit(state: &mut AppState) {
        let Some(field) = Self::selected_field(state) else {
            return;
        };
        let buffer = state.parameters_state.edit_buffer.clone();
        // Remove commas before parsing; an empty buffer commits zero, like
        // the upstream form's parse-or-zero inputs
        let clean_buffer: String = buffer.chars().filter(|c| *c != ',').collect();
        let parsed = if clean_buffer.is_empty() {
            Ok(0.0)
        } else {
            clean_buffer.parse::<f64>()
        };

        match parsed {
            Ok(value) => {
                state.set_field(field, value);
                state.parameters_state.editing = false;
                state.parameters_state.edit_buffer.clear();
            }
            Err(_) => {
                state.set_error("Invalid number format".to_string());
            }
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Esc => {
                state.parameters_state.editing = false;
                state.parameters_state.edit_buffer.clear();
                EventResult::Handled
            }
            KeyCode::Enter => {
                Self::commit_edit(state);
                EventResult::Handled
            }
            KeyCode::Backspace => {
                state.parameters_state.edit_buffer.pop();
                EventResult::Handled
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == ',' || c == '-' => {
                state.parameters_state.edit_buffer.push(c);
                EventResult::Handled
            }
            _ => EventResult::Handled,
        }
    }

    fn render_group_list(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let is_focused = state.parameters_state.focused_panel == FocusedPanel::Left;

        let items: Vec<ListItem> = ParamGroup::ALL
            .iter()
            .enumerate()
            .map(|(idx, group)| {
                let count = ParamField::fields_in(*group).len();
                let content = format!("{:<22} {:>2}", group.name(), count);

                let style = if idx == state.parameters_state.selected_group_index {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                ListItem::new(Line::from(Span::styled(content, style)))
            })
            .collect();

        let list = List::new(items).block(focused_block(" GROUPS ", is_focused));
        frame.render_widget(list, area);
    }

    fn render_field_list(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let is_focused = state.parameters_state.focused_panel == FocusedPanel::Right;
        let group = Self::selected_group(state);

        let items: Vec<ListItem> = ParamField::fields_in(group)
            .iter()
            .enumerate()
            .map(|(idx, field)| {
                let selected = idx == state.parameters_state.selected_field_index;
                let value = if selected && state.parameters_state.editing {
                    // Trailing underscore marks the input cursor
                    format!("{}_", state.parameters_state.edit_buffer)
                } else {
                    format_number(field.get(&state.params), 1)
                };
                let content = format!("{:<28} {:>14} {}", field.label(), value, field.unit());

                let style = if selected && is_focused {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                ListItem::new(Line::from(Span::styled(content, style)))
            })
            .collect();

        let title = format!(" {} ", group.name().to_uppercase());
        let list = List::new(items).block(focused_block(&title, is_focused));
        frame.render_widget(list, area);
    }

    fn render_warnings(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let lines: Vec<Line> = state
            .warnings
            .iter()
            .map(|w| {
                Line::from(Span::styled(
                    format!("! {w}"),
                    Style::default().fg(WARNING_COLOR),
                ))
            })
            .collect();

        let paragraph = Paragraph::new(lines).block(focused_block(" WARNINGS ", false));
        frame.render_widget(paragraph, area);
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let summary = &state.metrics.summary;
        let line = Line::from(vec![
            Span::styled("Total benefits: ", Style::default().fg(HELP_COLOR)),
            Span::raw(format_currency(summary.total_benefits)),
            Span::styled("   ROI: ", Style::default().fg(HELP_COLOR)),
            Span::raw(format_percentage(summary.roi)),
            Span::styled("   Payback: ", Style::default().fg(HELP_COLOR)),
            Span::raw(if summary.payback_period_days.is_finite() {
                format!("{:.1} days", summary.payback_period_days)
            } else {
                "--".to_string()
            }),
            Span::styled("   Investment: ", Style::default().fg(HELP_COLOR)),
            Span::raw(format_currency(
                state.params.investment.cost_of_investment_per_month,
            )),
        ]);

        let paragraph = Paragraph::new(line).block(focused_block(" LIVE SUMMARY ", false));
        frame.render_widget(paragraph, area);
    }
}

impl Default for ParametersScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ParametersScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if state.parameters_state.editing {
            return self.handle_edit_key(key, state);
        }

        let field_count = ParamField::fields_in(Self::selected_group(state)).len();
        match key.code {
            KeyCode::Tab => {
                state.parameters_state.focused_panel =
                    match state.parameters_state.focused_panel {
                        FocusedPanel::Left => FocusedPanel::Right,
                        FocusedPanel::Right => FocusedPanel::Left,
                    };
                EventResult::Handled
            }
            KeyCode::Char('j') | KeyCode::Down => {
                match state.parameters_state.focused_panel {
                    FocusedPanel::Left => {
                        state.parameters_state.selected_group_index =
                            (state.parameters_state.selected_group_index + 1)
                                % ParamGroup::ALL.len();
                        state.parameters_state.selected_field_index = 0;
                    }
                    FocusedPanel::Right => {
                        state.parameters_state.selected_field_index =
                            (state.parameters_state.selected_field_index + 1) % field_count;
                    }
                }
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                match state.parameters_state.focused_panel {
                    FocusedPanel::Left => {
                        let len = ParamGroup::ALL.len();
                        state.parameters_state.selected_group_index =
                            (state.parameters_state.selected_group_index + len - 1) % len;
                        state.parameters_state.selected_field_index = 0;
                    }
                    FocusedPanel::Right => {
                        state.parameters_state.selected_field_index =
                            (state.parameters_state.selected_field_index + field_count - 1)
                                % field_count;
                    }
                }
                EventResult::Handled
            }
            KeyCode::Enter => {
                match state.parameters_state.focused_panel {
                    FocusedPanel::Left => {
                        state.parameters_state.focused_panel = FocusedPanel::Right;
                    }
                    FocusedPanel::Right => Self::start_editing(state),
                }
                EventResult::Handled
            }
            KeyCode::Char('e') => {
                state.parameters_state.focused_panel = FocusedPanel::Right;
                Self::start_editing(state);
                EventResult::Handled
            }
            KeyCode::Char('r') => {
                state.reset_params();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let warning_rows = state.warnings.len().min(4) as u16;
        let mut constraints = vec![Constraint::Min(0)];
        if warning_rows > 0 {
            constraints.push(Constraint::Length(warning_rows + 2));
        }
        constraints.push(Constraint::Length(3));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(32), Constraint::Percentage(68)])
            .split(chunks[0]);

        self.render_group_list(frame, panels[0], state);
        self.render_field_list(frame, panels[1], state);

        if warning_rows > 0 {
            self.render_warnings(frame, chunks[1], state);
        }
        self.render_summary(frame, chunks[chunks.len() - 1], state);
    }
}

impl Screen for ParametersScreen {
    fn title(&self) -> &str {
        "Parameters"
    }
}
