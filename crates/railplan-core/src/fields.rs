//! Raw-field naming shared by the form, the serializer, and the save/load
//! store.
//!
//! The live form flattens to a `field name -> string` mapping using the same
//! names the remote service's original HTML form used. The serializer
//! ([`crate::project::serialize_project`]) and the restore path both walk
//! this mapping, so the names here are the single source of truth.

use std::collections::BTreeMap;

/// Flat raw-field mapping. `BTreeMap` keeps saved projects diff-friendly.
pub type FieldMap = BTreeMap<String, String>;

// ── Global field names ────────────────────────────────────────────────────────

pub const TITRE_PLAN: &str = "titre_plan";
pub const NOM_CLIENT: &str = "nom_client";
pub const DATE_CHANTIER: &str = "date_chantier";
pub const HAUTEUR_TOTALE: &str = "hauteur_totale";
pub const HAUTEUR_LISSE_BASSE: &str = "hauteur_lisse_basse";
pub const POTEAU_DIMS: &str = "poteau_dims";
pub const LIAISON_DIMS: &str = "liaison_dims";
pub const LISSEHAUTE_DIMS: &str = "lissehaute_dims";
pub const LISSEBASSE_DIMS: &str = "lissebasse_dims";
pub const BARREAU_DIMS: &str = "barreau_dims";
pub const ECART_BARREAUX: &str = "ecart_barreaux";
pub const TYPE_FIXATION: &str = "type_fixation";
pub const REMPLISSAGE_TYPE: &str = "remplissage_type";
pub const PLATINE_DIMENSIONS: &str = "platine_dimensions";
pub const PLATINE_TROUS: &str = "platine_trous";
pub const PLATINE_ENTRAXES: &str = "platine_entraxes";
pub const NOMBRE_MORCEAUX: &str = "nombre_morceaux";
pub const MORCEAUX_IDENTIQUES: &str = "morceaux_identiques";

// ── Per-segment field names ───────────────────────────────────────────────────

/// `morceau_{i}_angle`
pub fn segment_angle(segment: usize) -> String {
    format!("morceau_{segment}_angle")
}

/// `morceau_{i}_nombre_sections`
pub fn segment_section_count(segment: usize) -> String {
    format!("morceau_{segment}_nombre_sections")
}

/// `morceau_{i}_jonction_{j}`: junction at boundary `j` in `[0, sections]`.
pub fn junction(segment: usize, boundary: usize) -> String {
    format!("morceau_{segment}_jonction_{boundary}")
}

/// `morceau_{i}_section_longueur_{j}`: length of section `j`.
pub fn section_length(segment: usize, section: usize) -> String {
    format!("morceau_{segment}_section_longueur_{section}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_segment_names_match_the_form_convention() {
        assert_eq!(segment_angle(0), "morceau_0_angle");
        assert_eq!(segment_section_count(2), "morceau_2_nombre_sections");
        assert_eq!(junction(1, 0), "morceau_1_jonction_0");
        assert_eq!(section_length(1, 3), "morceau_1_section_longueur_3");
    }
}
