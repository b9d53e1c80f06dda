use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::{format_currency, format_hours, format_number, format_percentage};
use crate::util::styles::{focused_block, value_style};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use super::Screen;

const SECTIONS: [&str; 5] = [
    "Study App",
    "Absentee Balancing",
    "Capacity Balancing",
    "Reports",
    "Summary",
];

/// Width of the benefit-share bars, in cells.
const SHARE_BAR_WIDTH: usize = 24;

pub struct BreakdownScreen;

impl BreakdownScreen {
    pub fn new() -> Self {
        Self
    }

    fn row(label: &str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{:<36}", label),
                Style::default().fg(Color::Gray),
            ),
            Span::raw(value),
        ])
    }

    fn minutes(value: f64) -> String {
        format!("{} min", format_number(value, 1))
    }

    fn section_rows(state: &AppState) -> Vec<Line<'static>> {
        let m = &state.metrics;
        match state.breakdown_state.selected_section_index {
            0 => {
                let s = &m.study_app;
                vec![
                    Self::row("Time saving per line", Self::minutes(s.time_saving_per_line)),
                    Self::row("Lines per officer", format_number(s.lines_per_officer, 1)),
                    Self::row(
                        "Time saving per officer",
                        Self::minutes(s.time_saving_per_officer),
                    ),
                    Self::row(
                        "Total saving per day",
                        Self::minutes(s.total_time_saving_per_day),
                    ),
                    Self::row(
                        "Total saving per month",
                        Self::minutes(s.total_time_saving_per_month),
                    ),
                    Self::row(
                        "Total saving per month",
                        format_hours(s.total_time_saving_hours_per_month),
                    ),
                    Self::row(
                        "Working hours per officer",
                        format_hours(s.total_working_hours_per_officer),
                    ),
                    Self::row(
                        "Working hours all officers",
                        format_hours(s.total_working_hours_all_officers),
                    ),
                    Self::row(
                        "Saved time percentage",
                        format_percentage(s.saved_time_percentage),
                    ),
                    Self::row("Cost per officer", format_currency(s.total_cost_per_officer)),
                    Self::row(
                        "Cost all officers",
                        format_currency(s.total_cost_all_officers),
                    ),
                    Self::row("Monthly benefit", format_currency(s.total_benefit)),
                ]
            }
            1 => {
                let a = &m.absentee;
                vec![
                    Self::row(
                        "Rebalancing time saving",
                        Self::minutes(a.rebalancing_time_saving),
                    ),
                    Self::row(
                        "Total saving per line",
                        Self::minutes(a.total_time_saving_per_line),
                    ),
                    Self::row("Time per employee", Self::minutes(a.total_time_per_employee)),
                    Self::row(
                        "Time per line per day",
                        Self::minutes(a.total_time_per_line_per_day),
                    ),
                    Self::row("Time per week", Self::minutes(a.total_time_per_week)),
                    Self::row("Time per month", format_hours(a.total_time_per_month)),
                    Self::row(
                        "Working hours per line",
                        format_hours(a.total_working_hours_per_line),
                    ),
                    Self::row(
                        "Employee saving percentage",
                        format_percentage(a.saving_time_percentage),
                    ),
                    Self::row(
                        "Labor cost per line",
                        format_currency(a.total_labor_cost_per_line),
                    ),
                    Self::row(
                        "IE saving per month",
                        format_hours(a.ie_saving_time_per_month),
                    ),
                    Self::row(
                        "IE saving percentage",
                        format_percentage(a.ie_saving_percentage),
                    ),
                    Self::row("IE saving cost", format_currency(a.ie_saving_cost)),
                    Self::row(
                        "Employee saving cost",
                        format_currency(a.employee_saving_cost),
                    ),
                    Self::row("Monthly benefit", format_currency(a.total_benefit)),
                ]
            }
            2 => {
                let c = &m.capacity;
                vec![
                    Self::row(
                        "Saving per line per day",
                        Self::minutes(c.time_saving_per_line_per_day),
                    ),
                    Self::row(
                        "Saving all lines per day",
                        Self::minutes(c.time_saving_all_lines_per_day),
                    ),
                    Self::row(
                        "Saving all lines per month",
                        format_hours(c.time_saving_all_lines_per_month),
                    ),
                    Self::row(
                        "Saved time percentage",
                        format_percentage(c.saved_time_percentage),
                    ),
                    Self::row("Monthly benefit", format_currency(c.total_benefit)),
                ]
            }
            3 => {
                let r = &m.reports;
                vec![
                    Self::row("Saving per day", Self::minutes(r.time_saving_per_day)),
                    Self::row("Saving per month", format_hours(r.time_saving_per_month)),
                    Self::row(
                        "Saved time percentage",
                        format_percentage(r.saved_time_percentage),
                    ),
                    Self::row("Monthly benefit", format_currency(r.total_benefit)),
                ]
            }
            _ => {
                let s = &m.summary;
                vec![
                    Self::row("Total monthly benefits", format_currency(s.total_benefits)),
                    Self::row("Return on investment", format_percentage(s.roi)),
                    Self::row(
                        "Payback period",
                        if s.payback_period_days.is_finite() {
                            format!("{:.1} days", s.payback_period_days)
                        } else {
                            "--".to_string()
                        },
                    ),
                    Self::row(
                        "Monthly investment",
                        format_currency(state.params.investment.cost_of_investment_per_month),
                    ),
                ]
            }
        }
    }

    fn render_section_list(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let items: Vec<ListItem> = SECTIONS
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let style = if idx == state.breakdown_state.selected_section_index {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(Span::styled(*name, style)))
            })
            .collect();

        let list = List::new(items).block(focused_block(" MODULES ", true));
        frame.render_widget(list, area);
    }

    fn render_metric_chain(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let title = format!(
            " {} ",
            SECTIONS[state.breakdown_state.selected_section_index].to_uppercase()
        );
        let paragraph =
            Paragraph::new(Self::section_rows(state)).block(focused_block(&title, false));
        frame.render_widget(paragraph, area);
    }

    fn render_share_bars(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let lines: Vec<Line> = state
            .metrics
            .module_benefits()
            .iter()
            .map(|(label, benefit)| {
                let share = state.metrics.benefit_share(*benefit);
                // Degenerate shares (NaN, infinite, negative) draw empty
                let filled = if share.is_finite() && share > 0.0 {
                    ((share * SHARE_BAR_WIDTH as f64).round() as usize).min(SHARE_BAR_WIDTH)
                } else {
                    0
                };
                let bar: String = "█".repeat(filled) + &"░".repeat(SHARE_BAR_WIDTH - filled);

                Line::from(vec![
                    Span::raw(format!("{label:<12}")),
                    Span::styled(bar, value_style(*benefit)),
                    Span::raw(format!(
                        " {}  ({})",
                        format_percentage(share * 100.0),
                        format_currency(*benefit)
                    )),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines).block(focused_block(" BENEFIT SHARE ", false));
        frame.render_widget(paragraph, area);
    }
}

impl Default for BreakdownScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for BreakdownScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                state.breakdown_state.selected_section_index =
                    (state.breakdown_state.selected_section_index + 1) % SECTIONS.len();
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.breakdown_state.selected_section_index =
                    (state.breakdown_state.selected_section_index + SECTIONS.len() - 1)
                        % SECTIONS.len();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(6)])
            .split(area);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(chunks[0]);

        self.render_section_list(frame, panels[0], state);
        self.render_metric_chain(frame, panels[1], state);
        self.render_share_bars(frame, chunks[1], state);
    }
}

impl Screen for BreakdownScreen {
    fn title(&self) -> &str {
        "Breakdown"
    }
}
