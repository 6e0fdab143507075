//! Handler module - TEA update function and key handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for the form and results screens

pub(crate) mod keys;
pub(crate) mod update;


use railplan_api::ExportFormat;
use railplan_core::{FieldMap, Project, Proposal};

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Submit a serialized order to the computation service.
    SubmitProject(Box<Project>),

    /// Fetch a drawing of the cached proposal and write it to disk.
    FetchExport {
        format: ExportFormat,
        proposal: Box<Proposal>,
    },

    /// Snapshot the raw form fields to the store.
    SaveSnapshot(FieldMap),

    /// Read the stored snapshot back.
    LoadSnapshot,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
