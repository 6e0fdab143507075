//! Main update function - handles state transitions (TEA pattern)

use railplan_core::prelude::*;
use railplan_core::serialize_project;

use crate::message::Message;
use crate::state::{AppState, Notice, UiMode};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Computation
        // ─────────────────────────────────────────────────────────
        Message::Submit => {
            if state.computing {
                return UpdateResult::none();
            }
            if let Err(e) = state.form.validate() {
                warn!("submission rejected: {e}");
                state.notify(Notice::error(e.to_string()));
                return UpdateResult::none();
            }
            let project = serialize_project(&state.form.to_fields());
            state.computing = true;
            state.notify(Notice::info("Calcul du plan en cours..."));
            UpdateResult::action(UpdateAction::SubmitProject(Box::new(project)))
        }

        Message::ComputeSucceeded(proposal) => {
            state.computing = false;
            state.proposal = Some(*proposal);
            state.ui_mode = UiMode::Results;
            state.notify(Notice::success("Plan calculé"));
            UpdateResult::none()
        }

        Message::ComputeFailed { message } => {
            // Form values and any previously cached proposal are kept.
            state.computing = false;
            state.notify(Notice::error(message));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Exports
        // ─────────────────────────────────────────────────────────
        Message::Export(format) => {
            let Some(proposal) = state.proposal.clone() else {
                state.notify(Notice::error(Error::NoProposalAvailable.to_string()));
                return UpdateResult::none();
            };
            if state.exports.is_in_flight(format) {
                return UpdateResult::none();
            }
            state.exports.set_in_flight(format, true);
            state.notify(Notice::info(format!("Export {format} en cours...")));
            UpdateResult::action(UpdateAction::FetchExport {
                format,
                proposal: Box::new(proposal),
            })
        }

        Message::ExportSucceeded { format, path } => {
            state.exports.set_in_flight(format, false);
            state.notify(Notice::success(format!(
                "{format} enregistré: {}",
                path.display()
            )));
            UpdateResult::none()
        }

        Message::ExportFailed { format, message } => {
            state.exports.set_in_flight(format, false);
            state.notify(Notice::error(format!("Export {format}: {message}")));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Save / load
        // ─────────────────────────────────────────────────────────
        Message::SaveProject => {
            UpdateResult::action(UpdateAction::SaveSnapshot(state.form.to_fields()))
        }

        Message::ProjectSaved { path } => {
            state.notify(Notice::success(format!("Projet sauvegardé: {}", path.display())));
            UpdateResult::none()
        }

        Message::LoadProject => UpdateResult::action(UpdateAction::LoadSnapshot),

        Message::ProjectLoaded(fields) => {
            state.form.restore(&fields);
            state.ui_mode = UiMode::Form;
            state.notify(Notice::success("Projet restauré"));
            UpdateResult::none()
        }

        Message::StoreFailed { message } => {
            state.notify(Notice::error(message));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::BackToForm => {
            state.ui_mode = UiMode::Form;
            UpdateResult::none()
        }
    }
}
