//! Message types for the update loop (TEA pattern)

use std::path::PathBuf;

use railplan_api::ExportFormat;
use railplan_core::{FieldMap, Proposal};

use crate::input_key::InputKey;

/// All messages that drive state transitions.
///
/// Background tasks complete by sending one of the `*Succeeded` /
/// `*Failed` variants; failures carry display strings, not error values,
/// so messages stay `Clone`.
#[derive(Debug, Clone)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────
    /// Keyboard input, already abstracted from the terminal library.
    Key(InputKey),

    /// Periodic tick from the event loop.
    Tick,

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────
    /// User asked to quit.
    Quit,

    // ─────────────────────────────────────────────────────────
    // Computation
    // ─────────────────────────────────────────────────────────
    /// Validate and submit the current form to the computation service.
    Submit,

    /// The service returned a computed proposal.
    ComputeSucceeded(Box<Proposal>),

    /// Computation failed (validation detail or transport failure).
    ComputeFailed { message: String },

    // ─────────────────────────────────────────────────────────
    // Exports
    // ─────────────────────────────────────────────────────────
    /// Request a drawing export of the cached proposal.
    Export(ExportFormat),

    /// A drawing was fetched and written to disk.
    ExportSucceeded { format: ExportFormat, path: PathBuf },

    ExportFailed { format: ExportFormat, message: String },

    // ─────────────────────────────────────────────────────────
    // Save / load
    // ─────────────────────────────────────────────────────────
    /// Snapshot the current form to the store.
    SaveProject,

    ProjectSaved { path: PathBuf },

    /// Restore the form from the store.
    LoadProject,

    ProjectLoaded(FieldMap),

    StoreFailed { message: String },

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Leave the results view and return to the form, keeping the cached
    /// proposal for further exports.
    BackToForm,
}
