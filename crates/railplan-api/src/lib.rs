//! # railplan-api - Remote Service Client
//!
//! HTTP client for the computation and drawing service. The service owns
//! all fabrication math; this crate only ships documents back and forth:
//!
//! - [`ApiClient::compute`] - POST the order, get back a [`railplan_core::Proposal`]
//! - [`ApiClient::export`] - POST a cached proposal, get back drawing bytes
//! - [`ExportFormat`] - The three drawing formats (PDF, DXF, DWG)
//!
//! Uses `ureq` (sync) wrapped in `tokio::task::spawn_blocking` so callers
//! on the async runtime never block an executor thread.

pub mod client;
pub mod format;

pub use client::ApiClient;
pub use format::ExportFormat;
