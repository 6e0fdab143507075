//! Main event loop: draw, drain messages, poll the terminal.

use tokio::sync::mpsc;

use railplan_api::ApiClient;
use railplan_app::{handle_action, update, AppState, Message, Settings};
use railplan_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI until the user quits.
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::init();
    let result = run_loop(&mut term, settings).await;
    ratatui::restore();
    result
}

async fn run_loop(term: &mut ratatui::DefaultTerminal, settings: Settings) -> Result<()> {
    let client = ApiClient::new(&settings.api_base_url);
    info!(api = %client.base_url(), "starting event loop");

    let mut state = AppState::new(settings);
    let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<Message>();

    loop {
        term.draw(|frame| render::view(frame, &state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        // Completions from background tasks first, then fresh input.
        while let Ok(message) = msg_rx.try_recv() {
            process_message(&mut state, message, &msg_tx, &client);
        }

        if let Some(message) = event::poll()? {
            process_message(&mut state, message, &msg_tx, &client);
        }

        if state.should_quit {
            info!("quit requested, leaving event loop");
            return Ok(());
        }
    }
}

/// Process a message through the update function, dispatching any action
/// and chaining follow-up messages.
fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::UnboundedSender<Message>,
    client: &ApiClient,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), client.clone(), state.settings.clone());
        }
        msg = result.message;
    }
}
