use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};
use roiplan_core::ParameterSet;

use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::screens::{
    breakdown::BreakdownScreen, parameters::ParametersScreen, results::ResultsScreen,
};
use crate::state::{AppState, TabId};

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    parameters_screen: ParametersScreen,
    results_screen: ResultsScreen,
    breakdown_screen: BreakdownScreen,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_params(ParameterSet::default())
    }

    /// Create the app with a starting parameter set (defaults plus any CLI
    /// overrides).
    pub fn with_params(params: ParameterSet) -> Self {
        Self {
            state: AppState::with_params(params),
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            parameters_screen: ParametersScreen::new(),
            results_screen: ResultsScreen::new(),
            breakdown_screen: BreakdownScreen::new(),
        }
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Main layout: tab bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_tab {
            TabId::Parameters => self.parameters_screen.render(frame, area, &self.state),
            TabId::Results => self.results_screen.render(frame, area, &self.state),
            TabId::Breakdown => self.breakdown_screen.render(frame, area, &self.state),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Global key bindings
        match key_event.code {
            KeyCode::Char('q')
                if key_event.modifiers.is_empty() && !self.state.parameters_state.editing =>
            {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Esc => {
                if self.state.parameters_state.editing {
                    // Fall through so the edit buffer can cancel itself
                } else {
                    self.state.clear_error();
                    return;
                }
            }
            _ => {}
        }

        // Any other key replaces a stale status line
        self.state.status_message = None;

        // Try tab bar first
        let result = self.tab_bar.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        // Then the active screen
        let result = match self.state.active_tab {
            TabId::Parameters => self.parameters_screen.handle_key(key_event, &mut self.state),
            TabId::Results => self.results_screen.handle_key(key_event, &mut self.state),
            TabId::Breakdown => self.breakdown_screen.handle_key(key_event, &mut self.state),
        };

        if result == EventResult::Exit {
            self.state.exit = true
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn press(&mut self, key_event: KeyEvent) {
        self.handle_key_event(key_event);
    }
}
