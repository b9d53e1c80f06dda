//! Integration tests for the TUI front-end
//!
//! Tests are organized by topic:
//! - `screens` - Key handling, edit flow, and state transitions
//! - `report` - Headless text and JSON report rendering

mod report;
mod screens;
