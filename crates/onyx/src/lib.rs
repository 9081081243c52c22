//! Themed terminal widgets for remote/appliance-control interfaces
//!
//! This crate layers a widget set (dropdowns, pickers, temperature controls,
//! toggle buttons, scroll containers) over the `onyx_core` synchronizer. Two
//! input regimes are supported everywhere: 5-way key navigation and pointer
//! interaction, tracked by a spotlight manager the application owns. The
//! `onyx` binary is a small appliance-control demo wired through the same
//! public API.

#![warn(clippy::all)]

// ============================================================================
// Widget and framework modules
// ============================================================================

pub mod components;
pub mod theme;

// ============================================================================
// Demo application modules
// ============================================================================

pub mod app;
pub mod event;
pub mod logging;
pub mod screens;
pub mod state;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use app::App;
pub use components::{Component, EventResult, PanelCycle, UiContext};
pub use logging::init_logging;
pub use theme::{Skin, SkinName};
