//! Form widget: the order entry screen.
//!
//! Renders the focusable field list produced by the form state, one field
//! per row, with section headers for the baseplate block and each visible
//! segment. Scrolls so the focused row stays on screen.

use railplan_app::form::{FieldId, FormState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct FormView<'a> {
    form: &'a FormState,
}

impl<'a> FormView<'a> {
    pub fn new(form: &'a FormState) -> Self {
        Self { form }
    }

    /// Header line to insert before a field, when it starts a group.
    fn group_header(&self, id: FieldId) -> Option<String> {
        match id {
            FieldId::PlanTitle => Some("Projet".to_string()),
            FieldId::TotalHeight => Some("Dimensions".to_string()),
            FieldId::BaseplateDims => Some("Platine".to_string()),
            FieldId::SegmentCount => Some("Morceaux".to_string()),
            FieldId::SegmentAngle(i) => Some(if self.form.identical {
                "Morceau type".to_string()
            } else {
                format!("Morceau {}", i + 1)
            }),
            _ => None,
        }
    }

    fn field_line(&self, id: FieldId, focused: bool) -> Line<'static> {
        let label = FormState::field_label(id);
        let value = self.form.field_value(id);

        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let value_style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };

        let marker = if focused { "▸ " } else { "  " };
        let mut spans = vec![
            Span::raw(marker),
            Span::styled(format!("{label:<28}"), label_style),
            Span::styled(format!(" {value} "), value_style),
        ];
        if focused && !id.is_text() {
            spans.push(Span::styled("◂ ▸", Style::default().fg(Color::DarkGray)));
        }
        Line::from(spans)
    }

    fn lines(&self) -> (Vec<Line<'static>>, usize) {
        let focusable = self.form.focusable();
        let focus = self.form.focus.min(focusable.len() - 1);

        let mut lines = Vec::new();
        let mut focused_row = 0;
        for (idx, id) in focusable.iter().enumerate() {
            if let Some(header) = self.group_header(*id) {
                lines.push(Line::from(Span::styled(
                    header,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            if idx == focus {
                focused_row = lines.len();
            }
            lines.push(self.field_line(*id, idx == focus));
        }
        if self.form.identical && self.form.segment_count() > 1 {
            lines.push(Line::from(Span::styled(
                format!(
                    "Les {} morceaux reprennent le morceau type",
                    self.form.segment_count()
                ),
                Style::default().fg(Color::DarkGray),
            )));
        }
        (lines, focused_row)
    }
}

impl Widget for FormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (lines, focused_row) = self.lines();

        // Keep the focused row inside the inner area.
        let inner_height = area.height.saturating_sub(2) as usize;
        let offset = if inner_height == 0 {
            0
        } else {
            (focused_row + 1).saturating_sub(inner_height)
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Commande garde-corps "),
            )
            .scroll((offset as u16, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(form: &FormState, height: u16) -> String {
        let area = Rect::new(0, 0, 90, height);
        let mut buf = Buffer::empty(area);
        FormView::new(form).render(area, &mut buf);
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
    fn renders_global_fields_with_defaults() {
        let form = FormState::default();
        let text = render_to_string(&form, 40);
        assert!(text.contains("Titre du plan"));
        assert!(text.contains("1020"));
        assert!(text.contains("Morceau 1"));
    }

    #[test]
    fn focused_field_carries_the_marker() {
        let form = FormState::default();
        let text = render_to_string(&form, 40);
        assert!(text.contains("▸ Titre du plan"));
    }

    #[test]
    fn scrolls_to_keep_a_late_field_visible() {
        let mut form = FormState::default();
        let last = form.focusable().len() - 1;
        form.focus = last;
        let text = render_to_string(&form, 10);
        // The focused section-length row is visible despite the small area.
        assert!(text.contains("Section 1 (mm)"));
    }

    #[test]
    fn identical_mode_note_names_the_copy_count() {
        let mut form = FormState::default();
        form.segment_count_text = "3".into();
        form.sync_segments();
        form.identical = true;
        let text = render_to_string(&form, 40);
        assert!(text.contains("Les 3 morceaux reprennent le morceau type"));
    }

    #[test]
    fn identical_mode_heads_the_group_as_the_template() {
        let mut form = FormState::default();
        form.identical = true;
        let text = render_to_string(&form, 40);
        assert!(text.contains("Morceau type"));
        assert!(!text.contains("Morceau 1"));
    }
}
