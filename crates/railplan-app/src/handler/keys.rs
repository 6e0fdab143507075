//! Key event handlers for the form and results screens.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

use railplan_api::ExportFormat;

/// Route a key to the active screen. Returns a follow-up message when the
/// key triggers an operation rather than a pure state edit.
pub fn handle_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }
    match state.ui_mode {
        UiMode::Form => handle_form_key(state, key),
        UiMode::Results => handle_results_key(state, key),
    }
}

fn handle_form_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('s') => Some(Message::SaveProject),
        InputKey::CharCtrl('o') => Some(Message::LoadProject),
        // Jump back to the cached results without recomputing.
        InputKey::CharCtrl('r') => {
            if state.proposal.is_some() {
                state.ui_mode = UiMode::Results;
            }
            None
        }
        InputKey::Enter => Some(Message::Submit),
        InputKey::Esc => Some(Message::Quit),

        InputKey::Tab | InputKey::Down => {
            state.form.focus_next();
            None
        }
        InputKey::BackTab | InputKey::Up => {
            state.form.focus_prev();
            None
        }
        InputKey::Right => {
            state.form.cycle_next();
            None
        }
        InputKey::Left => {
            state.form.cycle_prev();
            None
        }
        InputKey::Char(c) => {
            state.form.insert_char(c);
            None
        }
        InputKey::Backspace => {
            state.form.backspace();
            None
        }
        InputKey::Delete => {
            state.form.clear_field();
            None
        }
        _ => None,
    }
}

fn handle_results_key(_state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('p') | InputKey::Char('P') => Some(Message::Export(ExportFormat::Pdf)),
        InputKey::Char('d') | InputKey::Char('D') => Some(Message::Export(ExportFormat::Dxf)),
        InputKey::Char('w') | InputKey::Char('W') => Some(Message::Export(ExportFormat::Dwg)),
        InputKey::Esc | InputKey::Char('e') | InputKey::Char('E') => Some(Message::BackToForm),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
