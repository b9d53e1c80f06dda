use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::{format_currency, format_hours, format_percentage};
use crate::util::styles::value_style;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem},
};

use super::Screen;

pub struct ResultsScreen;

impl ResultsScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let summary = &state.metrics.summary;

        let payback = if summary.payback_period_days.is_finite() {
            format!("{:.1} days", summary.payback_period_days)
        } else {
            "--".to_string()
        };

        let lines = vec![
            Line::from(Span::styled(
                "SUMMARY",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("  Total monthly benefits:  "),
                Span::styled(
                    format_currency(summary.total_benefits),
                    value_style(summary.total_benefits),
                ),
            ]),
            Line::from(vec![
                Span::raw("  Return on investment:    "),
                Span::styled(format_percentage(summary.roi), value_style(summary.roi)),
            ]),
            Line::from(format!("  Payback period:          {payback}")),
            Line::from(format!(
                "  Monthly investment:      {}",
                format_currency(state.params.investment.cost_of_investment_per_month)
            )),
        ];

        let paragraph =
            ratatui::widgets::Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" MODULE BENEFITS ");

        let bars: Vec<Bar> = state
            .metrics
            .module_benefits()
            .iter()
            .map(|(label, benefit)| {
                // Non-finite and negative benefits draw as empty bars; the
                // text value still shows what happened
                let value = if benefit.is_finite() {
                    benefit.max(0.0).round() as u64
                } else {
                    0
                };

                Bar::default()
                    .value(value)
                    .label(Line::from(*label))
                    .text_value(format_currency(*benefit))
                    .style(value_style(*benefit))
            })
            .collect();

        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(12)
            .bar_gap(2)
            .direction(Direction::Vertical);

        frame.render_widget(chart, area);
    }

    fn module_detail_lines(state: &AppState) -> Vec<String> {
        let m = &state.metrics;
        let mut lines = Vec::new();

        let details: [(&str, f64, f64, f64); 4] = [
            (
                "Study App",
                m.study_app.total_time_saving_hours_per_month,
                m.study_app.saved_time_percentage,
                m.study_app.total_benefit,
            ),
            (
                "Absentee",
                m.absentee.total_time_per_month + m.absentee.ie_saving_time_per_month,
                m.absentee.saving_time_percentage,
                m.absentee.total_benefit,
            ),
            (
                "Capacity",
                m.capacity.time_saving_all_lines_per_month,
                m.capacity.saved_time_percentage,
                m.capacity.total_benefit,
            ),
            (
                "Reports",
                m.reports.time_saving_per_month,
                m.reports.saved_time_percentage,
                m.reports.total_benefit,
            ),
        ];

        for (name, hours, percentage, benefit) in details {
            lines.push(format!(
                "{:<12} saved {:>10}  ({:>8} of working time)  benefit {:>10}",
                name,
                format_hours(hours),
                format_percentage(percentage),
                format_currency(benefit)
            ));
        }

        lines
    }

    fn render_details(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let lines = Self::module_detail_lines(state);
        let items: Vec<ListItem> = lines
            .iter()
            .skip(state.results_state.scroll_offset)
            .map(|line| ListItem::new(Line::from(line.clone())))
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" PER MODULE "),
        );
        frame.render_widget(list, area);
    }
}

impl Default for ResultsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ResultsScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if state.results_state.scroll_offset + 1 < Self::module_detail_lines(state).len()
                {
                    state.results_state.scroll_offset += 1;
                }
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.results_state.scroll_offset =
                    state.results_state.scroll_offset.saturating_sub(1);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),
                Constraint::Min(8),
                Constraint::Length(6),
            ])
            .split(area);

        self.render_summary(frame, chunks[0], state);
        self.render_chart(frame, chunks[1], state);
        self.render_details(frame, chunks[2], state);
    }
}

impl Screen for ResultsScreen {
    fn title(&self) -> &str {
        "Results"
    }
}
