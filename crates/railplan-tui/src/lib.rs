//! railplan-tui - Terminal UI for Railplan
//!
//! This crate provides the ratatui-based terminal interface. It drives the
//! engine from railplan-app and adds terminal rendering, event polling,
//! and widget display.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
