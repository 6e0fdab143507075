//! Main render/view function (View in TEA pattern)

use railplan_app::state::{AppState, UiMode};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::layout;
use crate::widgets::{FormView, MainHeader, ProposalView, StatusBar};

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - it does not modify state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let areas = layout::create(frame.area());

    frame.render_widget(MainHeader::new(state.ui_mode), areas.header);

    match state.ui_mode {
        UiMode::Form => frame.render_widget(FormView::new(&state.form), areas.content),
        UiMode::Results => match &state.proposal {
            Some(proposal) => frame.render_widget(ProposalView::new(proposal), areas.content),
            // Results mode without a cached proposal is transient; show a
            // neutral placeholder rather than panic.
            None => frame.render_widget(
                Paragraph::new(Line::from("Aucun plan calculé"))
                    .style(Style::default())
                    .block(Block::default().borders(Borders::ALL)),
                areas.content,
            ),
        },
    }

    frame.render_widget(StatusBar::new(state), areas.status);
}
