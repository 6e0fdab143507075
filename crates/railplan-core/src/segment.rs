//! Segments ("morceaux") and template replication.

use serde::{Deserialize, Serialize};

use crate::structure::StructureElement;

/// One contiguous physical run of railing, composed of sections separated
/// by junctions.
///
/// Invariant: `structure.len() == 2 * section_count + 1`, strictly
/// alternating junction/section and starting/ending with a junction
/// (see [`crate::structure::structure_is_well_formed`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(rename = "nombre_sections")]
    pub section_count: u32,
    #[serde(rename = "angle", default)]
    pub angle_degrees: f64,
    pub structure: Vec<StructureElement>,
}

impl Segment {
    /// Sum of all section lengths in this segment.
    pub fn total_length_mm(&self) -> f64 {
        self.structure.iter().filter_map(|el| el.length_mm()).sum()
    }
}

/// Deep-replicate a template segment `count` times (identical-segments mode).
///
/// Every entry is a structural clone with no shared mutable substructure:
/// mutating one returned segment never affects another. The angle is taken
/// from the template for every copy.
pub fn replicate(template: &Segment, count: usize) -> Vec<Segment> {
    std::iter::repeat_with(|| template.clone()).take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{build_structure, JunctionKind};

    fn template_with_length(length_mm: f64) -> Segment {
        let mut structure = build_structure(1);
        structure[1] = StructureElement::section(length_mm);
        Segment {
            section_count: 1,
            angle_degrees: 15.0,
            structure,
        }
    }

    #[test]
    fn replicate_produces_count_structural_copies() {
        let template = template_with_length(800.0);
        let copies = replicate(&template, 3);
        assert_eq!(copies.len(), 3);
        for copy in &copies {
            assert_eq!(copy, &template);
            assert_eq!(copy.section_count, 1);
            assert_eq!(copy.structure[1], StructureElement::section(800.0));
        }
    }

    #[test]
    fn replicated_segments_are_independent() {
        let template = template_with_length(800.0);
        let mut copies = replicate(&template, 3);
        copies[0].structure[1] = StructureElement::section(999.0);
        copies[0].structure[0] = StructureElement::junction(JunctionKind::Link);

        assert_eq!(copies[1].structure[1], StructureElement::section(800.0));
        assert_eq!(copies[2].structure[1], StructureElement::section(800.0));
        assert_eq!(
            copies[1].structure[0],
            StructureElement::junction(JunctionKind::Post)
        );
        assert_eq!(template.structure[1], StructureElement::section(800.0));
    }

    #[test]
    fn replicate_zero_yields_empty_list() {
        let template = template_with_length(100.0);
        assert!(replicate(&template, 0).is_empty());
    }

    #[test]
    fn angle_is_taken_from_the_template_for_every_copy() {
        let template = template_with_length(500.0);
        for copy in replicate(&template, 4) {
            assert_eq!(copy.angle_degrees, 15.0);
        }
    }

    #[test]
    fn total_length_sums_sections_only() {
        let mut structure = build_structure(2);
        structure[1] = StructureElement::section(500.0);
        structure[3] = StructureElement::section(700.0);
        let segment = Segment {
            section_count: 2,
            angle_degrees: 0.0,
            structure,
        };
        assert_eq!(segment.total_length_mm(), 1200.0);
    }

    #[test]
    fn segment_serializes_with_service_field_names() {
        let segment = template_with_length(800.0);
        let value = serde_json::to_value(&segment).unwrap();
        assert_eq!(value["nombre_sections"], 1);
        assert_eq!(value["angle"], 15.0);
        assert_eq!(value["structure"][0]["type"], "poteau");
        assert_eq!(value["structure"][1]["longueur"], 800.0);
    }
}
