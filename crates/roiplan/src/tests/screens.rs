//! Key handling and state transitions, driven through the app's dispatcher
//! exactly as a user would.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::state::{FocusedPanel, TabId};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press_chars(app: &mut App, chars: &str) {
    for c in chars.chars() {
        app.press(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_number_keys_switch_tabs() {
    let mut app = App::new();
    assert_eq!(app.state().active_tab, TabId::Parameters);

    app.press(key(KeyCode::Char('2')));
    assert_eq!(app.state().active_tab, TabId::Results);

    app.press(key(KeyCode::Char('3')));
    assert_eq!(app.state().active_tab, TabId::Breakdown);

    app.press(key(KeyCode::Char('1')));
    assert_eq!(app.state().active_tab, TabId::Parameters);
}

#[test]
fn test_q_and_ctrl_c_exit() {
    let mut app = App::new();
    app.press(key(KeyCode::Char('q')));
    assert!(app.state().exit);

    let mut app = App::new();
    app.press(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.state().exit);
}

#[test]
fn test_group_navigation_wraps_and_resets_field_selection() {
    let mut app = App::new();
    assert_eq!(app.state().parameters_state.focused_panel, FocusedPanel::Left);

    app.press(key(KeyCode::Char('k')));
    assert_eq!(app.state().parameters_state.selected_group_index, 5); // wrapped to Investment

    for _ in 0..6 {
        app.press(key(KeyCode::Char('j')));
    }
    assert_eq!(app.state().parameters_state.selected_group_index, 5);
    assert_eq!(app.state().parameters_state.selected_field_index, 0);
}

#[test]
fn test_edit_commit_recomputes_metrics() {
    let mut app = App::new();
    let baseline = app.state().metrics.summary.total_benefits;

    // 'e' jumps to the field panel and opens the first General field
    // (working days per week) for editing
    app.press(key(KeyCode::Char('e')));
    assert!(app.state().parameters_state.editing);

    press_chars(&mut app, "3");
    app.press(key(KeyCode::Enter));

    assert!(!app.state().parameters_state.editing);
    assert_eq!(app.state().params.general.working_days_per_week, 3.0);
    // Fewer working days means fewer saved hours everywhere
    assert!(app.state().metrics.summary.total_benefits < baseline);
}

#[test]
fn test_edit_strips_commas() {
    let mut app = App::new();

    // Second General field: number of lines
    app.press(key(KeyCode::Tab));
    app.press(key(KeyCode::Char('j')));
    app.press(key(KeyCode::Char('e')));
    press_chars(&mut app, "2,500");
    app.press(key(KeyCode::Enter));

    assert_eq!(app.state().params.general.number_of_lines, 2500.0);
}

#[test]
fn test_empty_edit_commits_zero() {
    let mut app = App::new();

    // Third General field: number of IE officers
    app.press(key(KeyCode::Tab));
    app.press(key(KeyCode::Char('j')));
    app.press(key(KeyCode::Char('j')));
    app.press(key(KeyCode::Char('e')));
    app.press(key(KeyCode::Enter));

    assert_eq!(app.state().params.general.number_of_ie_officers, 0.0);
    // The recompute runs immediately: zero officers drags the total to NaN
    // and the warning layer flags the denominator
    assert!(app.state().metrics.summary.total_benefits.is_nan());
    assert!(!app.state().warnings.is_empty());
}

#[test]
fn test_invalid_edit_sets_error_and_stays_editing() {
    let mut app = App::new();

    app.press(key(KeyCode::Char('e')));
    press_chars(&mut app, "1.2.3");
    app.press(key(KeyCode::Enter));

    assert!(app.state().parameters_state.editing);
    assert!(app.state().error_message.is_some());
    assert_eq!(app.state().params.general.working_days_per_week, 6.0);
}

#[test]
fn test_escape_cancels_edit_without_committing() {
    let mut app = App::new();

    app.press(key(KeyCode::Char('e')));
    press_chars(&mut app, "99");
    app.press(key(KeyCode::Esc));

    assert!(!app.state().parameters_state.editing);
    assert!(app.state().parameters_state.edit_buffer.is_empty());
    assert_eq!(app.state().params.general.working_days_per_week, 6.0);
}

#[test]
fn test_keys_are_typed_not_dispatched_while_editing() {
    let mut app = App::new();

    app.press(key(KeyCode::Char('e')));
    // 'q' must not quit and '2' must go into the buffer, not switch tabs
    app.press(key(KeyCode::Char('q')));
    app.press(key(KeyCode::Char('2')));

    assert!(!app.state().exit);
    assert_eq!(app.state().active_tab, TabId::Parameters);
    assert_eq!(app.state().parameters_state.edit_buffer, "2");
}

#[test]
fn test_reset_restores_defaults() {
    let mut app = App::new();

    app.press(key(KeyCode::Char('e')));
    press_chars(&mut app, "3");
    app.press(key(KeyCode::Enter));
    assert_eq!(app.state().params.general.working_days_per_week, 3.0);

    app.press(key(KeyCode::Char('r')));
    assert_eq!(app.state().params.general.working_days_per_week, 6.0);
    assert!(app.state().status_message.is_some());
    assert!((app.state().metrics.summary.total_benefits - 1341.54).abs() < 0.01);
}

#[test]
fn test_breakdown_selection_wraps() {
    let mut app = App::new();
    app.press(key(KeyCode::Char('3')));

    app.press(key(KeyCode::Char('k')));
    assert_eq!(app.state().breakdown_state.selected_section_index, 4); // Summary

    app.press(key(KeyCode::Char('j')));
    assert_eq!(app.state().breakdown_state.selected_section_index, 0);
}

#[test]
fn test_results_scroll_is_bounded() {
    let mut app = App::new();
    app.press(key(KeyCode::Char('2')));

    for _ in 0..10 {
        app.press(key(KeyCode::Char('j')));
    }
    // Four module detail lines: the offset can never reach past the last
    assert_eq!(app.state().results_state.scroll_offset, 3);

    for _ in 0..10 {
        app.press(key(KeyCode::Char('k')));
    }
    assert_eq!(app.state().results_state.scroll_offset, 0);
}
