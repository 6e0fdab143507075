//! The computed proposal returned by the remote service.
//!
//! The computation endpoint echoes the order back enriched with the
//! nomenclature, per-segment cutting plans, and bar layout. The whole
//! document is cached and later re-posted verbatim to the drawing
//! endpoints, so every field the service sends must survive a
//! deserialize/serialize round trip, including explicit nulls.

use serde::{Deserialize, Serialize};

use crate::structure::StructureElement;

/// One line of the parts nomenclature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NomenclatureItem {
    pub item: String,
    pub details: String,
    #[serde(rename = "quantite")]
    pub quantity: u32,
    #[serde(rename = "longueur_unitaire_mm")]
    pub unit_length_mm: i64,
}

/// Infill computation for one section: how many bars fit and the resulting
/// gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionPlan {
    #[serde(rename = "longueur_section")]
    pub section_length_mm: f64,
    #[serde(rename = "longueur_libre")]
    pub free_length_mm: f64,
    #[serde(rename = "nombre_barreaux")]
    pub bar_count: u32,
    #[serde(rename = "vide_entre_barreaux_mm")]
    pub gap_between_bars_mm: f64,
    #[serde(rename = "jeu_depart_mm")]
    pub start_clearance_mm: f64,
}

/// Cutting plan for one segment, echoing its structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentPlan {
    pub id: u32,
    #[serde(rename = "longueur_totale")]
    pub total_length_mm: f64,
    pub angle: f64,
    pub structure: Vec<StructureElement>,
    #[serde(rename = "sections_details")]
    pub sections: Vec<SectionPlan>,
}

/// Parsed baseplate geometry, present only for baseplate fixation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseplateDetails {
    #[serde(rename = "longueur")]
    pub length_mm: f64,
    #[serde(rename = "largeur")]
    pub width_mm: f64,
    #[serde(rename = "epaisseur")]
    pub thickness_mm: f64,
    #[serde(rename = "nombre_trous")]
    pub hole_count: u32,
    #[serde(rename = "diametre_trous")]
    pub hole_diameter_mm: f64,
    #[serde(rename = "entraxe_longueur")]
    pub spacing_length_mm: f64,
    #[serde(rename = "entraxe_largeur")]
    pub spacing_width_mm: f64,
}

/// Representative bar layout for the whole order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    #[serde(rename = "nombre_barreaux")]
    pub bar_count: u32,
    #[serde(rename = "vide_entre_barreaux_mm")]
    pub gap_between_bars_mm: f64,
    #[serde(rename = "jeu_depart_mm")]
    pub start_clearance_mm: f64,
}

/// The full computed proposal document.
///
/// Optional detail blocks serialize as explicit `null` when absent; the
/// drawing endpoints expect the document exactly as the computation
/// endpoint produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    #[serde(rename = "titre_plan")]
    pub plan_title: String,
    #[serde(rename = "nom_client")]
    pub client_name: String,
    #[serde(rename = "date_chantier")]
    pub site_date: String,
    #[serde(rename = "description_projet")]
    pub project_description: String,
    pub nomenclature: Vec<NomenclatureItem>,
    #[serde(rename = "morceaux")]
    pub segments: Vec<SegmentPlan>,
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
    #[serde(rename = "platine_details")]
    pub baseplate: Option<BaseplateDetails>,
    #[serde(rename = "remplissage_type")]
    pub infill_type: String,
    #[serde(rename = "remplissage_details")]
    pub bar_layout: Option<BarLayout>,
}
