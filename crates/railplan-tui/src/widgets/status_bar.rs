//! Status bar widget
//!
//! Shows the latest notice plus in-flight computation/export indicators.

use railplan_api::ExportFormat;
use railplan_app::state::{AppState, NoticeKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn notice_span(&self) -> Option<Span<'static>> {
        let notice = self.state.notice.as_ref()?;
        let style = match notice.kind {
            NoticeKind::Info => Style::default().fg(Color::Gray),
            NoticeKind::Success => Style::default().fg(Color::Green),
            NoticeKind::Error => Style::default().fg(Color::Red),
        };
        Some(Span::styled(notice.text.clone(), style))
    }

    fn busy_span(&self) -> Option<Span<'static>> {
        let mut busy = Vec::new();
        if self.state.computing {
            busy.push("calcul".to_string());
        }
        for format in ExportFormat::ALL {
            if self.state.exports.is_in_flight(format) {
                busy.push(format!("export {format}"));
            }
        }
        if busy.is_empty() {
            return None;
        }
        Some(Span::styled(
            format!("⏳ {}", busy.join(", ")),
            Style::default().fg(Color::Yellow),
        ))
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        if let Some(busy) = self.busy_span() {
            spans.push(busy);
            spans.push(Span::raw("  "));
        }
        if let Some(notice) = self.notice_span() {
            spans.push(notice);
        }
        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railplan_app::state::Notice;

    fn render_to_string(state: &AppState) -> String {
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);
        StatusBar::new(state).render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn shows_the_latest_notice() {
        let mut state = AppState::default();
        state.notify(Notice::success("Plan calculé"));
        assert!(render_to_string(&state).contains("Plan calculé"));
    }

    #[test]
    fn shows_in_flight_operations() {
        let mut state = AppState::default();
        state.computing = true;
        state.exports.set_in_flight(ExportFormat::Pdf, true);
        let text = render_to_string(&state);
        assert!(text.contains("calcul"));
        assert!(text.contains("export PDF"));
    }
}
