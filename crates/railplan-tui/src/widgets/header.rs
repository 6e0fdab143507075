//! Header widget with title and key hints.

use railplan_app::state::UiMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct MainHeader {
    mode: UiMode,
}

impl MainHeader {
    pub fn new(mode: UiMode) -> Self {
        Self { mode }
    }

    fn hints(&self) -> &'static str {
        match self.mode {
            UiMode::Form => {
                "Tab/flèches: champs · gauche/droite: choix · Entrée: calculer · ^S: sauver · ^O: charger"
            }
            UiMode::Results => "p: PDF · d: DXF · w: DWG · Échap: formulaire · q: quitter",
        }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(
                " Railplan ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("· garde-corps ", Style::default().fg(Color::DarkGray)),
            Span::styled(self.hints(), Style::default().fg(Color::Gray)),
        ]);
        Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(widget: MainHeader) -> String {
        let area = Rect::new(0, 0, 100, 3);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
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
    fn form_header_shows_submit_hint() {
        let text = render_to_string(MainHeader::new(UiMode::Form));
        assert!(text.contains("Railplan"));
        assert!(text.contains("Entrée: calculer"));
    }

    #[test]
    fn results_header_shows_export_hints() {
        let text = render_to_string(MainHeader::new(UiMode::Results));
        assert!(text.contains("p: PDF"));
        assert!(text.contains("w: DWG"));
    }
}
