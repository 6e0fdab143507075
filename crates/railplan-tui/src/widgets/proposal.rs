//! Results widget: nomenclature and cutting plans of a computed proposal.

use railplan_core::{Proposal, SegmentPlan, StructureElement};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Widget},
};

pub struct ProposalView<'a> {
    proposal: &'a Proposal,
}

impl<'a> ProposalView<'a> {
    pub fn new(proposal: &'a Proposal) -> Self {
        Self { proposal }
    }

    fn nomenclature_table(&self) -> Table<'static> {
        let header = Row::new(["Élément", "Détails", "Qté", "Lg unitaire"])
            .style(Style::default().add_modifier(Modifier::BOLD));
        let rows: Vec<Row> = self
            .proposal
            .nomenclature
            .iter()
            .map(|item| {
                Row::new([
                    item.item.clone(),
                    item.details.clone(),
                    item.quantity.to_string(),
                    format!("{} mm", item.unit_length_mm),
                ])
            })
            .collect();
        Table::new(
            rows,
            [
                Constraint::Percentage(30),
                Constraint::Percentage(35),
                Constraint::Length(6),
                Constraint::Length(14),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" Nomenclature "))
    }

    fn structure_summary(segment: &SegmentPlan) -> String {
        segment
            .structure
            .iter()
            .map(|el| match el {
                StructureElement::Junction { kind } => kind.label().to_string(),
                StructureElement::Section { length_mm } => format!("{length_mm:.1}"),
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }

    fn plan_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for segment in &self.proposal.segments {
            lines.push(Line::from(Span::styled(
                format!(
                    "Morceau {} · {:.1} mm · angle {:.1}°",
                    segment.id + 1,
                    segment.total_length_mm,
                    segment.angle
                ),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!("  {}", Self::structure_summary(segment))));
            for (j, section) in segment.sections.iter().enumerate() {
                let mut detail = format!(
                    "  Section {}: {:.1} mm, libre {:.1} mm",
                    j + 1,
                    section.section_length_mm,
                    section.free_length_mm
                );
                if section.bar_count > 0 {
                    detail.push_str(&format!(
                        ", {} barreaux, vide {:.1} mm, jeu {:.1} mm",
                        section.bar_count, section.gap_between_bars_mm, section.start_clearance_mm
                    ));
                }
                lines.push(Line::from(detail));
            }
            lines.push(Line::default());
        }

        if let Some(layout) = &self.proposal.bar_layout {
            lines.push(Line::from(format!(
                "Répartition horizontale: {} barreaux, vide {:.1} mm, jeu {:.1} mm",
                layout.bar_count, layout.gap_between_bars_mm, layout.start_clearance_mm
            )));
        }
        if let Some(plate) = &self.proposal.baseplate {
            lines.push(Line::from(format!(
                "Platine {:.0}x{:.0}x{:.0} mm, {} trous D{:.0}, entraxes {:.0}x{:.0}",
                plate.length_mm,
                plate.width_mm,
                plate.thickness_mm,
                plate.hole_count,
                plate.hole_diameter_mm,
                plate.spacing_length_mm,
                plate.spacing_width_mm
            )));
        }
        lines
    }
}

impl Widget for ProposalView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Nomenclature only takes space when the service returned lines.
        let table_height = if self.proposal.nomenclature.is_empty() {
            0
        } else {
            (self.proposal.nomenclature.len() as u16 + 3).min(area.height / 2)
        };

        let chunks = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(table_height),
            Constraint::Min(3),
        ])
        .split(area);

        Paragraph::new(vec![
            Line::from(Span::styled(
                format!(
                    " {} · {} · {}",
                    self.proposal.plan_title, self.proposal.client_name, self.proposal.site_date
                ),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(" {}", self.proposal.project_description),
                Style::default().fg(Color::Gray),
            )),
        ])
        .render(chunks[0], buf);

        if table_height > 0 {
            self.nomenclature_table().render(chunks[1], buf);
        }

        Paragraph::new(self.plan_lines())
            .block(Block::default().borders(Borders::ALL).title(" Plans de coupe "))
            .render(chunks[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_proposal() -> Proposal {
        serde_json::from_value(serde_json::json!({
            "titre_plan": "Terrasse Sud",
            "nom_client": "Dupont",
            "date_chantier": "2026-09-01",
            "description_projet": "Garde-corps détaillé en 1 morceau(x).",
            "nomenclature": [
                {"item": "Poteaux", "details": "40x40", "quantite": 2, "longueur_unitaire_mm": 1020},
                {"item": "Barreaux", "details": "20x20", "quantite": 7, "longueur_unitaire_mm": 840}
            ],
            "morceaux": [
                {
                    "id": 0,
                    "longueur_totale": 1000.0,
                    "angle": 0.0,
                    "structure": [
                        {"type": "poteau"},
                        {"type": "section", "longueur": 1000.0},
                        {"type": "poteau"}
                    ],
                    "sections_details": [
                        {
                            "longueur_section": 1000.0,
                            "longueur_libre": 920.0,
                            "nombre_barreaux": 7,
                            "vide_entre_barreaux_mm": 95.55,
                            "jeu_depart_mm": 47.78
                        }
                    ]
                }
            ],
            "hauteur_totale": 1020,
            "hauteur_lisse_basse": 100,
            "poteau_dims": "40x40",
            "liaison_dims": "40x20",
            "lissehaute_dims": "40x40",
            "lissebasse_dims": "40x40",
            "barreau_dims": "20x20",
            "platine_details": null,
            "remplissage_type": "barreaudage_vertical",
            "remplissage_details": null
        }))
        .unwrap()
    }

    fn render_to_string(proposal: &Proposal) -> String {
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        ProposalView::new(proposal).render(area, &mut buf);
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
    fn renders_nomenclature_and_cutting_plan() {
        let text = render_to_string(&sample_proposal());
        assert!(text.contains("Nomenclature"));
        assert!(text.contains("Poteaux"));
        assert!(text.contains("1020 mm"));
        assert!(text.contains("Morceau 1"));
        assert!(text.contains("Poteau | 1000.0 | Poteau"));
    }

    #[test]
    fn gaps_are_rounded_to_one_decimal() {
        let text = render_to_string(&sample_proposal());
        assert!(text.contains("vide 95.5 mm"));
        assert!(text.contains("jeu 47.8 mm"));
        assert!(!text.contains("95.55"));
    }

    #[test]
    fn empty_nomenclature_omits_the_table() {
        let mut proposal = sample_proposal();
        proposal.nomenclature.clear();
        let text = render_to_string(&proposal);
        assert!(!text.contains("Nomenclature"));
        assert!(text.contains("Plans de coupe"));
    }

    #[test]
    fn optional_detail_blocks_render_when_present() {
        let mut proposal = sample_proposal();
        proposal.bar_layout = serde_json::from_value(serde_json::json!({
            "nombre_barreaux": 6,
            "vide_entre_barreaux_mm": 101.25,
            "jeu_depart_mm": 50.6
        }))
        .ok();
        let text = render_to_string(&proposal);
        assert!(text.contains("Répartition horizontale: 6 barreaux"));
    }
}
