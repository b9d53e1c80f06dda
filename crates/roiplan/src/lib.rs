//! Terminal front-end for the ROI derivation engine
//!
//! This crate is the presentation layer over `roiplan_core`: an interactive
//! terminal UI for editing the parameter set and browsing the derived
//! metrics, plus a headless report mode for scripting. It owns the mutable
//! state (parameters, active tab, edit buffers) the engine deliberately has
//! none of, and recomputes the full metric set on every committed edit.

// ============================================================================
// Core modules
// ============================================================================

pub mod app;
pub mod logging;
pub mod report;

// ============================================================================
// UI modules
// ============================================================================

pub mod components;
pub mod screens;
pub mod state;
pub mod util;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use app::App;
pub use logging::init_logging;
