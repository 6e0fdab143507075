//! # railplan-app - Application Engine
//!
//! State, update loop, and background actions for Railplan, frontend
//! agnostic (the TUI crate is one consumer).
//!
//! ## Architecture
//!
//! The Elm Architecture: [`Message`]s flow into [`update()`], which mutates
//! [`AppState`] and may return an [`UpdateAction`] for the event loop to
//! dispatch to [`handle_action()`], which spawns background work that
//! completes by sending further messages.
//!
//! ## Modules
//!
//! - `form`: Live form state, focus model, and front-line validation
//! - `handler`: `update()` and key handlers
//! - `actions`: Background task execution (network, disk)
//! - `store`: Save/load of raw-field snapshots
//! - `config`: User settings from `~/.config/railplan/config.toml`
//! - `input_key`: Terminal-independent key events

pub mod actions;
pub mod config;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;
pub mod store;

pub use actions::handle_action;
pub use config::Settings;
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, Notice, NoticeKind, UiMode};
