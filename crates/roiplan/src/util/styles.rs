//! Common styling utilities for TUI components

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for focused panels
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for warnings
pub const WARNING_COLOR: Color = Color::Yellow;

/// Standard color for positive values
pub const POSITIVE_COLOR: Color = Color::Green;

/// Standard color for negative values
pub const NEGATIVE_COLOR: Color = Color::Red;

/// Create a block with a title that shows focused state via border color.
///
/// When focused, the border is yellow. When unfocused, it's the default color.
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

/// Get the appropriate color for a monetary value (green for positive, red
/// for negative). Non-finite values read as negative news here.
pub fn value_color(value: f64) -> Color {
    if value.is_finite() && value >= 0.0 {
        POSITIVE_COLOR
    } else {
        NEGATIVE_COLOR
    }
}

/// Get the appropriate style for a monetary value.
pub fn value_style(value: f64) -> Style {
    Style::default().fg(value_color(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_color() {
        assert_eq!(value_color(100.0), POSITIVE_COLOR);
        assert_eq!(value_color(0.0), POSITIVE_COLOR);
        assert_eq!(value_color(-100.0), NEGATIVE_COLOR);
        assert_eq!(value_color(f64::NAN), NEGATIVE_COLOR);
    }
}
