//! The canonical Project document and the raw-field serializer.
//!
//! The serializer walks the flat raw-field mapping produced by the live
//! form (see [`crate::fields`]) and builds the JSON document the remote
//! computation service expects. It never raises: malformed numeric input is
//! recovered by defaulting, and front-line validation is the caller's
//! responsibility before serialization is attempted.

use serde::Serialize;

use crate::fields::{self, FieldMap};
use crate::segment::{replicate, Segment};
use crate::structure::{JunctionKind, StructureElement};

/// Optional baseplate descriptor. All-or-nothing: present on the project
/// only when at least one sub-field was supplied; absent otherwise (never
/// serialized as an empty object).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Baseplate {
    #[serde(rename = "platine_dimensions", skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(rename = "platine_trous", skip_serializing_if = "Option::is_none")]
    pub holes: Option<String>,
    #[serde(rename = "platine_entraxes", skip_serializing_if = "Option::is_none")]
    pub hole_spacing: Option<String>,
}

/// The canonical order document posted to `/api/process-data`.
///
/// Field names on the wire are the French service vocabulary; the Rust
/// names follow the domain glossary. `morceaux.len() == segment_count`
/// always holds for serializer output; in identical mode every entry is an
/// independent deep copy of the index-0 template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    #[serde(rename = "titre_plan")]
    pub plan_title: String,
    #[serde(rename = "nom_client")]
    pub client_name: String,
    #[serde(rename = "date_chantier")]
    pub site_date: String,
    #[serde(rename = "hauteur_totale")]
    pub total_height_mm: i64,
    #[serde(rename = "hauteur_lisse_basse")]
    pub bottom_rail_height_mm: i64,
    #[serde(rename = "poteau_dims")]
    pub post_dims: String,
    #[serde(rename = "liaison_dims")]
    pub link_dims: String,
    #[serde(rename = "lissehaute_dims")]
    pub top_rail_dims: String,
    #[serde(rename = "lissebasse_dims")]
    pub bottom_rail_dims: String,
    #[serde(rename = "barreau_dims")]
    pub bar_dims: String,
    #[serde(rename = "ecart_barreaux")]
    pub bar_spacing_mm: i64,
    #[serde(rename = "type_fixation")]
    pub fixation_type: String,
    #[serde(rename = "remplissage_type")]
    pub infill_type: String,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub baseplate: Option<Baseplate>,
    #[serde(rename = "nombre_morceaux")]
    pub segment_count: u32,
    #[serde(rename = "morceaux_identiques")]
    pub identical_segments: String,
    #[serde(rename = "morceaux")]
    pub segments: Vec<Segment>,
}

impl Project {
    /// Whether the identical-segments ("morceaux identiques") mode is set.
    pub fn is_identical(&self) -> bool {
        self.identical_segments == "oui"
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serializer
// ─────────────────────────────────────────────────────────────────────────────

fn text(fields: &FieldMap, name: &str) -> String {
    fields.get(name).cloned().unwrap_or_default()
}

fn int(fields: &FieldMap, name: &str) -> i64 {
    fields
        .get(name)
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(0)
}

fn float(fields: &FieldMap, name: &str) -> f64 {
    fields
        .get(name)
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

fn optional(fields: &FieldMap, name: &str) -> Option<String> {
    fields.get(name).filter(|v| !v.is_empty()).cloned()
}

/// Build one segment from the fields at index `segment`.
///
/// For boundary `j` in `[0, section_count]` the junction field is read,
/// falling back to [`JunctionKind::None`] when absent or unrecognized:
/// an unrendered slot has no selection, so serialization treats it as
/// "no fitting" rather than the UI default of `poteau`. Unparsable
/// section lengths coerce to `0.0`. Every structurally expected slot yields
/// an element; nothing is silently dropped.
fn build_segment(fields: &FieldMap, segment: usize) -> Segment {
    let section_count = int(fields, &fields::segment_section_count(segment)).max(0) as usize;
    let angle_degrees = float(fields, &fields::segment_angle(segment));

    let mut structure = Vec::with_capacity(2 * section_count + 1);
    for j in 0..=section_count {
        let kind = fields
            .get(&fields::junction(segment, j))
            .and_then(|v| JunctionKind::from_wire(v))
            .unwrap_or(JunctionKind::None);
        structure.push(StructureElement::junction(kind));
        if j < section_count {
            structure.push(StructureElement::section(float(
                fields,
                &fields::section_length(segment, j),
            )));
        }
    }

    Segment {
        section_count: section_count as u32,
        angle_degrees,
        structure,
    }
}

/// Serialize the flat raw-field mapping into the canonical [`Project`].
///
/// Identical mode builds one template segment from the index-0 fields and
/// deep-replicates it `nombre_morceaux` times; distinct mode builds each
/// segment from its own index.
pub fn serialize_project(fields: &FieldMap) -> Project {
    let segment_count = int(fields, fields::NOMBRE_MORCEAUX).max(0) as usize;
    let identical_segments = fields
        .get(fields::MORCEAUX_IDENTIQUES)
        .cloned()
        .unwrap_or_else(|| "non".to_string());

    let segments = if identical_segments == "oui" {
        let template = build_segment(fields, 0);
        replicate(&template, segment_count)
    } else {
        (0..segment_count).map(|i| build_segment(fields, i)).collect()
    };

    let baseplate = {
        let dimensions = optional(fields, fields::PLATINE_DIMENSIONS);
        let holes = optional(fields, fields::PLATINE_TROUS);
        let hole_spacing = optional(fields, fields::PLATINE_ENTRAXES);
        if dimensions.is_some() || holes.is_some() || hole_spacing.is_some() {
            Some(Baseplate {
                dimensions,
                holes,
                hole_spacing,
            })
        } else {
            None
        }
    };

    Project {
        plan_title: text(fields, fields::TITRE_PLAN),
        client_name: text(fields, fields::NOM_CLIENT),
        site_date: text(fields, fields::DATE_CHANTIER),
        total_height_mm: int(fields, fields::HAUTEUR_TOTALE),
        bottom_rail_height_mm: int(fields, fields::HAUTEUR_LISSE_BASSE),
        post_dims: text(fields, fields::POTEAU_DIMS),
        link_dims: text(fields, fields::LIAISON_DIMS),
        top_rail_dims: text(fields, fields::LISSEHAUTE_DIMS),
        bottom_rail_dims: text(fields, fields::LISSEBASSE_DIMS),
        bar_dims: text(fields, fields::BARREAU_DIMS),
        bar_spacing_mm: int(fields, fields::ECART_BARREAUX),
        fixation_type: text(fields, fields::TYPE_FIXATION),
        infill_type: text(fields, fields::REMPLISSAGE_TYPE),
        baseplate,
        segment_count: segment_count as u32,
        identical_segments,
        segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_fields() -> FieldMap {
        let mut f = FieldMap::new();
        f.insert(fields::TITRE_PLAN.into(), "Terrasse Sud".into());
        f.insert(fields::NOM_CLIENT.into(), "Dupont".into());
        f.insert(fields::DATE_CHANTIER.into(), "2026-09-01".into());
        f.insert(fields::HAUTEUR_TOTALE.into(), "1020".into());
        f.insert(fields::HAUTEUR_LISSE_BASSE.into(), "100".into());
        f.insert(fields::POTEAU_DIMS.into(), "40x40".into());
        f.insert(fields::LISSEHAUTE_DIMS.into(), "40x40".into());
        f.insert(fields::LISSEBASSE_DIMS.into(), "40x40".into());
        f.insert(fields::BARREAU_DIMS.into(), "20x20".into());
        f.insert(fields::ECART_BARREAUX.into(), "110".into());
        f.insert(fields::TYPE_FIXATION.into(), "platine".into());
        f.insert(fields::REMPLISSAGE_TYPE.into(), "barreaudage_vertical".into());
        f
    }

    #[test]
    fn distinct_mode_builds_each_segment_from_its_own_index() {
        let mut f = base_fields();
        f.insert(fields::NOMBRE_MORCEAUX.into(), "2".into());
        f.insert(fields::MORCEAUX_IDENTIQUES.into(), "non".into());
        // Segment 0: one section of 1000 between two posts.
        f.insert(fields::segment_section_count(0), "1".into());
        f.insert(fields::junction(0, 0), "poteau".into());
        f.insert(fields::section_length(0, 0), "1000".into());
        f.insert(fields::junction(0, 1), "poteau".into());
        // Segment 1: two sections 500/700, junctions post/link/post.
        f.insert(fields::segment_section_count(1), "2".into());
        f.insert(fields::junction(1, 0), "poteau".into());
        f.insert(fields::section_length(1, 0), "500".into());
        f.insert(fields::junction(1, 1), "liaison".into());
        f.insert(fields::section_length(1, 1), "700".into());
        f.insert(fields::junction(1, 2), "poteau".into());

        let project = serialize_project(&f);
        assert_eq!(project.segments.len(), 2);
        assert_eq!(project.segments[0].structure.len(), 3);
        assert_eq!(project.segments[1].structure.len(), 5);
        assert_eq!(
            project.segments[1].structure[2],
            StructureElement::junction(JunctionKind::Link)
        );
        assert_eq!(project.segments[1].structure[3], StructureElement::section(700.0));
    }

    #[test]
    fn identical_mode_replicates_the_index_zero_template() {
        let mut f = base_fields();
        f.insert(fields::NOMBRE_MORCEAUX.into(), "3".into());
        f.insert(fields::MORCEAUX_IDENTIQUES.into(), "oui".into());
        f.insert(fields::segment_section_count(0), "1".into());
        f.insert(fields::junction(0, 0), "poteau".into());
        f.insert(fields::section_length(0, 0), "800".into());
        f.insert(fields::junction(0, 1), "poteau".into());

        let mut project = serialize_project(&f);
        assert!(project.is_identical());
        assert_eq!(project.segments.len(), 3);
        for segment in &project.segments {
            assert_eq!(segment.section_count, 1);
            assert_eq!(segment.structure[1], StructureElement::section(800.0));
        }

        // Copies are independent objects.
        project.segments[0].structure[1] = StructureElement::section(1.0);
        assert_eq!(project.segments[1].structure[1], StructureElement::section(800.0));
        assert_eq!(project.segments[2].structure[1], StructureElement::section(800.0));
    }

    #[test]
    fn absent_junction_fields_fall_back_to_none_not_post() {
        let mut f = base_fields();
        f.insert(fields::NOMBRE_MORCEAUX.into(), "1".into());
        f.insert(fields::MORCEAUX_IDENTIQUES.into(), "non".into());
        f.insert(fields::segment_section_count(0), "1".into());
        f.insert(fields::section_length(0, 0), "1200".into());
        // No junction fields at all.

        let project = serialize_project(&f);
        assert_eq!(
            project.segments[0].structure[0],
            StructureElement::junction(JunctionKind::None)
        );
        assert_eq!(
            project.segments[0].structure[2],
            StructureElement::junction(JunctionKind::None)
        );
    }

    #[test]
    fn unparsable_lengths_and_counts_default_to_zero() {
        let mut f = base_fields();
        f.insert(fields::NOMBRE_MORCEAUX.into(), "1".into());
        f.insert(fields::MORCEAUX_IDENTIQUES.into(), "non".into());
        f.insert(fields::segment_section_count(0), "1".into());
        f.insert(fields::junction(0, 0), "poteau".into());
        f.insert(fields::section_length(0, 0), "abc".into());
        f.insert(fields::junction(0, 1), "poteau".into());
        f.insert(fields::HAUTEUR_TOTALE.into(), "not a number".into());

        let project = serialize_project(&f);
        assert_eq!(project.total_height_mm, 0);
        assert_eq!(project.segments[0].structure[1], StructureElement::section(0.0));
    }

    #[test]
    fn baseplate_is_absent_unless_a_subfield_is_supplied() {
        let mut f = base_fields();
        f.insert(fields::NOMBRE_MORCEAUX.into(), "0".into());
        f.insert(fields::PLATINE_DIMENSIONS.into(), "".into());

        let project = serialize_project(&f);
        assert!(project.baseplate.is_none());
        let json = serde_json::to_value(&project).unwrap();
        assert!(json.get("platine_dimensions").is_none());

        f.insert(fields::PLATINE_TROUS.into(), "4 x D12".into());
        let project = serialize_project(&f);
        let baseplate = project.baseplate.as_ref().expect("one subfield is enough");
        assert_eq!(baseplate.holes.as_deref(), Some("4 x D12"));
        assert!(baseplate.dimensions.is_none());
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["platine_trous"], "4 x D12");
        assert!(json.get("platine_dimensions").is_none());
    }

    #[test]
    fn project_serializes_with_service_field_names() {
        let mut f = base_fields();
        f.insert(fields::NOMBRE_MORCEAUX.into(), "1".into());
        f.insert(fields::MORCEAUX_IDENTIQUES.into(), "non".into());
        f.insert(fields::segment_section_count(0), "1".into());
        f.insert(fields::junction(0, 0), "poteau".into());
        f.insert(fields::section_length(0, 0), "1000".into());
        f.insert(fields::junction(0, 1), "poteau".into());

        let json = serde_json::to_value(serialize_project(&f)).unwrap();
        assert_eq!(json["titre_plan"], "Terrasse Sud");
        assert_eq!(json["hauteur_totale"], 1020);
        assert_eq!(json["ecart_barreaux"], 110);
        assert_eq!(json["liaison_dims"], "");
        assert_eq!(json["nombre_morceaux"], 1);
        assert_eq!(json["morceaux_identiques"], "non");
        assert_eq!(json["morceaux"][0]["nombre_sections"], 1);
    }
}
