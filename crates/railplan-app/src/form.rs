//! Live form state for the railing order.
//!
//! The form owns every editable value as text plus the structured
//! per-segment slots (junction kinds, section lengths). Changing a count
//! field resizes the affected slot vectors in place, preserving every
//! already-entered value at its index; shrinking then re-growing restores
//! nothing (truncated values are gone), which matches the one-way nature
//! of the resize.

use railplan_core::fields::{self, FieldMap};
use railplan_core::prelude::*;
use railplan_core::JunctionKind;

// ─────────────────────────────────────────────────────────────────────────────
// Select vocabularies
// ─────────────────────────────────────────────────────────────────────────────

/// How posts are fixed to the support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixationType {
    /// Sealed into the slab.
    #[default]
    Sealed,
    /// Bolted baseplate; enables the baseplate detail fields.
    Baseplate,
}

impl FixationType {
    pub fn as_wire(&self) -> &'static str {
        match self {
            FixationType::Sealed => "scellement",
            FixationType::Baseplate => "platine",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "scellement" => Some(FixationType::Sealed),
            "platine" => Some(FixationType::Baseplate),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FixationType::Sealed => "Scellement",
            FixationType::Baseplate => "Platine",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            FixationType::Sealed => FixationType::Baseplate,
            FixationType::Baseplate => FixationType::Sealed,
        }
    }
}

/// What fills the space between rails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InfillType {
    #[default]
    VerticalBars,
    HorizontalBars,
    None,
}

impl InfillType {
    pub fn as_wire(&self) -> &'static str {
        match self {
            InfillType::VerticalBars => "barreaudage_vertical",
            InfillType::HorizontalBars => "barreaudage_horizontal",
            InfillType::None => "aucun",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "barreaudage_vertical" => Some(InfillType::VerticalBars),
            "barreaudage_horizontal" => Some(InfillType::HorizontalBars),
            "aucun" => Some(InfillType::None),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InfillType::VerticalBars => "Barreaudage vertical",
            InfillType::HorizontalBars => "Barreaudage horizontal",
            InfillType::None => "Aucun",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            InfillType::VerticalBars => InfillType::HorizontalBars,
            InfillType::HorizontalBars => InfillType::None,
            InfillType::None => InfillType::VerticalBars,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            InfillType::VerticalBars => InfillType::None,
            InfillType::HorizontalBars => InfillType::VerticalBars,
            InfillType::None => InfillType::HorizontalBars,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Field identity
// ─────────────────────────────────────────────────────────────────────────────

/// Identity of one focusable form field. Indexed variants address the
/// dynamic per-segment fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    PlanTitle,
    ClientName,
    SiteDate,
    TotalHeight,
    BottomRailHeight,
    PostDims,
    LinkDims,
    TopRailDims,
    BottomRailDims,
    BarDims,
    BarSpacing,
    Fixation,
    BaseplateDims,
    BaseplateHoles,
    BaseplateSpacing,
    Infill,
    SegmentCount,
    IdenticalSegments,
    SegmentAngle(usize),
    SegmentSectionCount(usize),
    /// Junction at boundary `j` of segment `i`.
    Junction(usize, usize),
    /// Length of section `j` of segment `i`.
    SectionLength(usize, usize),
}

impl FieldId {
    /// Whether this field edits free text (as opposed to cycling a choice).
    pub fn is_text(&self) -> bool {
        !matches!(
            self,
            FieldId::Fixation
                | FieldId::Infill
                | FieldId::IdenticalSegments
                | FieldId::Junction(_, _)
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Segment form
// ─────────────────────────────────────────────────────────────────────────────

/// Editable state for one segment.
///
/// `junctions.len() == section_count + 1` and
/// `section_lengths.len() == section_count` whenever `section_count > 0`;
/// both are empty when it is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentForm {
    pub angle: String,
    pub section_count_text: String,
    pub junctions: Vec<JunctionKind>,
    pub section_lengths: Vec<String>,
}

impl Default for SegmentForm {
    fn default() -> Self {
        let mut form = Self {
            angle: "0".to_string(),
            section_count_text: "1".to_string(),
            junctions: Vec::new(),
            section_lengths: Vec::new(),
        };
        form.sync_structure();
        form
    }
}

impl SegmentForm {
    /// Parsed section count, zero for blank or invalid text.
    pub fn section_count(&self) -> usize {
        self.section_count_text.trim().parse().unwrap_or(0)
    }

    /// Resize the junction and length slots to match the count text,
    /// keeping existing values at their indices. New junction slots
    /// default to [`JunctionKind::Post`], new lengths to blank.
    pub fn sync_structure(&mut self) {
        let count = self.section_count();
        if count == 0 {
            self.junctions.clear();
            self.section_lengths.clear();
            return;
        }
        self.junctions.resize(count + 1, JunctionKind::Post);
        self.section_lengths.resize(count, String::new());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Form state
// ─────────────────────────────────────────────────────────────────────────────

/// The whole live form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub plan_title: String,
    pub client_name: String,
    pub site_date: String,
    pub total_height: String,
    pub bottom_rail_height: String,
    pub post_dims: String,
    pub link_dims: String,
    pub top_rail_dims: String,
    pub bottom_rail_dims: String,
    pub bar_dims: String,
    pub bar_spacing: String,
    pub fixation: FixationType,
    pub baseplate_dims: String,
    pub baseplate_holes: String,
    pub baseplate_spacing: String,
    pub infill: InfillType,
    pub segment_count_text: String,
    pub identical: bool,
    pub segments: Vec<SegmentForm>,
    /// Index into [`FormState::focusable`].
    pub focus: usize,
}

impl Default for FormState {
    fn default() -> Self {
        let mut form = Self {
            plan_title: String::new(),
            client_name: String::new(),
            site_date: String::new(),
            total_height: "1020".to_string(),
            bottom_rail_height: "100".to_string(),
            post_dims: "40x40".to_string(),
            link_dims: "40x20".to_string(),
            top_rail_dims: "40x40".to_string(),
            bottom_rail_dims: "40x40".to_string(),
            bar_dims: "20x20".to_string(),
            bar_spacing: "110".to_string(),
            fixation: FixationType::default(),
            baseplate_dims: String::new(),
            baseplate_holes: String::new(),
            baseplate_spacing: String::new(),
            infill: InfillType::default(),
            segment_count_text: "1".to_string(),
            identical: false,
            segments: Vec::new(),
            focus: 0,
        };
        form.sync_segments();
        form
    }
}

impl FormState {
    /// Parsed segment count, zero for blank or invalid text.
    pub fn segment_count(&self) -> usize {
        self.segment_count_text.trim().parse().unwrap_or(0)
    }

    /// Number of segment blocks the UI shows: one in identical mode,
    /// otherwise all of them.
    pub fn visible_segments(&self) -> usize {
        if self.identical {
            self.segment_count().min(1)
        } else {
            self.segment_count()
        }
    }

    /// Resize the segment list to match the count text, preserving the
    /// state of segments that keep their index.
    pub fn sync_segments(&mut self) {
        let count = self.segment_count();
        self.segments.resize_with(count, SegmentForm::default);
    }

    // ── Focus ────────────────────────────────────────────────────────────

    /// Ordered list of currently focusable fields. Baseplate fields appear
    /// only for baseplate fixation; segment fields follow the visible
    /// segment blocks and interleave junctions with section lengths the
    /// way the structure alternates.
    pub fn focusable(&self) -> Vec<FieldId> {
        let mut out = vec![
            FieldId::PlanTitle,
            FieldId::ClientName,
            FieldId::SiteDate,
            FieldId::TotalHeight,
            FieldId::BottomRailHeight,
            FieldId::PostDims,
            FieldId::LinkDims,
            FieldId::TopRailDims,
            FieldId::BottomRailDims,
            FieldId::BarDims,
            FieldId::BarSpacing,
            FieldId::Fixation,
        ];
        if self.fixation == FixationType::Baseplate {
            out.push(FieldId::BaseplateDims);
            out.push(FieldId::BaseplateHoles);
            out.push(FieldId::BaseplateSpacing);
        }
        out.push(FieldId::Infill);
        out.push(FieldId::SegmentCount);
        out.push(FieldId::IdenticalSegments);
        for i in 0..self.visible_segments() {
            out.push(FieldId::SegmentAngle(i));
            out.push(FieldId::SegmentSectionCount(i));
            let sections = self.segments.get(i).map(|s| s.section_count()).unwrap_or(0);
            for j in 0..=sections {
                if sections > 0 {
                    out.push(FieldId::Junction(i, j));
                }
                if j < sections {
                    out.push(FieldId::SectionLength(i, j));
                }
            }
        }
        out
    }

    /// The currently focused field.
    pub fn focused(&self) -> FieldId {
        let fields = self.focusable();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        let len = self.focusable().len();
        self.focus = (self.focus + 1) % len;
    }

    pub fn focus_prev(&mut self) {
        let len = self.focusable().len();
        self.focus = (self.focus + len - 1) % len;
    }

    fn clamp_focus(&mut self) {
        let len = self.focusable().len();
        if self.focus >= len {
            self.focus = len - 1;
        }
    }

    // ── Editing ──────────────────────────────────────────────────────────

    fn text_field_mut(&mut self, id: FieldId) -> Option<&mut String> {
        match id {
            FieldId::PlanTitle => Some(&mut self.plan_title),
            FieldId::ClientName => Some(&mut self.client_name),
            FieldId::SiteDate => Some(&mut self.site_date),
            FieldId::TotalHeight => Some(&mut self.total_height),
            FieldId::BottomRailHeight => Some(&mut self.bottom_rail_height),
            FieldId::PostDims => Some(&mut self.post_dims),
            FieldId::LinkDims => Some(&mut self.link_dims),
            FieldId::TopRailDims => Some(&mut self.top_rail_dims),
            FieldId::BottomRailDims => Some(&mut self.bottom_rail_dims),
            FieldId::BarDims => Some(&mut self.bar_dims),
            FieldId::BarSpacing => Some(&mut self.bar_spacing),
            FieldId::BaseplateDims => Some(&mut self.baseplate_dims),
            FieldId::BaseplateHoles => Some(&mut self.baseplate_holes),
            FieldId::BaseplateSpacing => Some(&mut self.baseplate_spacing),
            FieldId::SegmentCount => Some(&mut self.segment_count_text),
            FieldId::SegmentAngle(i) => self.segments.get_mut(i).map(|s| &mut s.angle),
            FieldId::SegmentSectionCount(i) => {
                self.segments.get_mut(i).map(|s| &mut s.section_count_text)
            }
            FieldId::SectionLength(i, j) => self
                .segments
                .get_mut(i)
                .and_then(|s| s.section_lengths.get_mut(j)),
            _ => None,
        }
    }

    /// Type a character into the focused text field. Count fields trigger
    /// a structure resync.
    pub fn insert_char(&mut self, c: char) {
        let id = self.focused();
        if let Some(field) = self.text_field_mut(id) {
            field.push(c);
            self.after_edit(id);
        }
    }

    /// Delete the last character of the focused text field.
    pub fn backspace(&mut self) {
        let id = self.focused();
        if let Some(field) = self.text_field_mut(id) {
            field.pop();
            self.after_edit(id);
        }
    }

    /// Clear the focused text field.
    pub fn clear_field(&mut self) {
        let id = self.focused();
        if let Some(field) = self.text_field_mut(id) {
            field.clear();
            self.after_edit(id);
        }
    }

    fn after_edit(&mut self, id: FieldId) {
        match id {
            FieldId::SegmentCount => {
                self.sync_segments();
                self.clamp_focus();
            }
            FieldId::SegmentSectionCount(i) => {
                if let Some(segment) = self.segments.get_mut(i) {
                    segment.sync_structure();
                }
                self.clamp_focus();
            }
            _ => {}
        }
    }

    /// Cycle the focused choice field forward.
    pub fn cycle_next(&mut self) {
        match self.focused() {
            FieldId::Fixation => {
                self.fixation = self.fixation.toggle();
                self.clamp_focus();
            }
            FieldId::Infill => self.infill = self.infill.next(),
            FieldId::IdenticalSegments => {
                self.identical = !self.identical;
                self.clamp_focus();
            }
            FieldId::Junction(i, j) => {
                if let Some(kind) = self.segments.get_mut(i).and_then(|s| s.junctions.get_mut(j)) {
                    *kind = kind.next();
                }
            }
            _ => {}
        }
    }

    /// Cycle the focused choice field backward.
    pub fn cycle_prev(&mut self) {
        match self.focused() {
            FieldId::Fixation => {
                self.fixation = self.fixation.toggle();
                self.clamp_focus();
            }
            FieldId::Infill => self.infill = self.infill.prev(),
            FieldId::IdenticalSegments => {
                self.identical = !self.identical;
                self.clamp_focus();
            }
            FieldId::Junction(i, j) => {
                if let Some(kind) = self.segments.get_mut(i).and_then(|s| s.junctions.get_mut(j)) {
                    *kind = kind.prev();
                }
            }
            _ => {}
        }
    }

    // ── Display helpers ──────────────────────────────────────────────────

    /// Display value of a field (choice fields show their label).
    pub fn field_value(&self, id: FieldId) -> String {
        match id {
            FieldId::PlanTitle => self.plan_title.clone(),
            FieldId::ClientName => self.client_name.clone(),
            FieldId::SiteDate => self.site_date.clone(),
            FieldId::TotalHeight => self.total_height.clone(),
            FieldId::BottomRailHeight => self.bottom_rail_height.clone(),
            FieldId::PostDims => self.post_dims.clone(),
            FieldId::LinkDims => self.link_dims.clone(),
            FieldId::TopRailDims => self.top_rail_dims.clone(),
            FieldId::BottomRailDims => self.bottom_rail_dims.clone(),
            FieldId::BarDims => self.bar_dims.clone(),
            FieldId::BarSpacing => self.bar_spacing.clone(),
            FieldId::Fixation => self.fixation.label().to_string(),
            FieldId::BaseplateDims => self.baseplate_dims.clone(),
            FieldId::BaseplateHoles => self.baseplate_holes.clone(),
            FieldId::BaseplateSpacing => self.baseplate_spacing.clone(),
            FieldId::Infill => self.infill.label().to_string(),
            FieldId::SegmentCount => self.segment_count_text.clone(),
            FieldId::IdenticalSegments => {
                if self.identical { "Oui" } else { "Non" }.to_string()
            }
            FieldId::SegmentAngle(i) => {
                self.segments.get(i).map(|s| s.angle.clone()).unwrap_or_default()
            }
            FieldId::SegmentSectionCount(i) => self
                .segments
                .get(i)
                .map(|s| s.section_count_text.clone())
                .unwrap_or_default(),
            FieldId::Junction(i, j) => self
                .segments
                .get(i)
                .and_then(|s| s.junctions.get(j))
                .map(|k| k.label().to_string())
                .unwrap_or_default(),
            FieldId::SectionLength(i, j) => self
                .segments
                .get(i)
                .and_then(|s| s.section_lengths.get(j))
                .cloned()
                .unwrap_or_default(),
        }
    }

    /// Human label of a field for rendering.
    pub fn field_label(id: FieldId) -> String {
        match id {
            FieldId::PlanTitle => "Titre du plan".to_string(),
            FieldId::ClientName => "Client".to_string(),
            FieldId::SiteDate => "Date chantier".to_string(),
            FieldId::TotalHeight => "Hauteur totale (mm)".to_string(),
            FieldId::BottomRailHeight => "Hauteur lisse basse (mm)".to_string(),
            FieldId::PostDims => "Poteaux".to_string(),
            FieldId::LinkDims => "Liaisons".to_string(),
            FieldId::TopRailDims => "Lisse haute".to_string(),
            FieldId::BottomRailDims => "Lisse basse".to_string(),
            FieldId::BarDims => "Barreaux".to_string(),
            FieldId::BarSpacing => "Écart barreaux max (mm)".to_string(),
            FieldId::Fixation => "Fixation".to_string(),
            FieldId::BaseplateDims => "Platine: dimensions".to_string(),
            FieldId::BaseplateHoles => "Platine: trous".to_string(),
            FieldId::BaseplateSpacing => "Platine: entraxes".to_string(),
            FieldId::Infill => "Remplissage".to_string(),
            FieldId::SegmentCount => "Nombre de morceaux".to_string(),
            FieldId::IdenticalSegments => "Morceaux identiques".to_string(),
            FieldId::SegmentAngle(i) => format!("Morceau {}: angle (°)", i + 1),
            FieldId::SegmentSectionCount(i) => format!("Morceau {}: sections", i + 1),
            FieldId::Junction(_, j) => format!("Jonction {}", j + 1),
            FieldId::SectionLength(_, j) => format!("Section {} (mm)", j + 1),
        }
    }

    // ── Raw fields ───────────────────────────────────────────────────────

    /// Flatten the form to the raw-field mapping consumed by the
    /// serializer and the save/load store. Baseplate fields are emitted
    /// only for baseplate fixation.
    pub fn to_fields(&self) -> FieldMap {
        let mut out = FieldMap::new();
        out.insert(fields::TITRE_PLAN.into(), self.plan_title.clone());
        out.insert(fields::NOM_CLIENT.into(), self.client_name.clone());
        out.insert(fields::DATE_CHANTIER.into(), self.site_date.clone());
        out.insert(fields::HAUTEUR_TOTALE.into(), self.total_height.clone());
        out.insert(
            fields::HAUTEUR_LISSE_BASSE.into(),
            self.bottom_rail_height.clone(),
        );
        out.insert(fields::POTEAU_DIMS.into(), self.post_dims.clone());
        out.insert(fields::LIAISON_DIMS.into(), self.link_dims.clone());
        out.insert(fields::LISSEHAUTE_DIMS.into(), self.top_rail_dims.clone());
        out.insert(fields::LISSEBASSE_DIMS.into(), self.bottom_rail_dims.clone());
        out.insert(fields::BARREAU_DIMS.into(), self.bar_dims.clone());
        out.insert(fields::ECART_BARREAUX.into(), self.bar_spacing.clone());
        out.insert(fields::TYPE_FIXATION.into(), self.fixation.as_wire().into());
        out.insert(fields::REMPLISSAGE_TYPE.into(), self.infill.as_wire().into());
        if self.fixation == FixationType::Baseplate {
            out.insert(fields::PLATINE_DIMENSIONS.into(), self.baseplate_dims.clone());
            out.insert(fields::PLATINE_TROUS.into(), self.baseplate_holes.clone());
            out.insert(fields::PLATINE_ENTRAXES.into(), self.baseplate_spacing.clone());
        }
        out.insert(fields::NOMBRE_MORCEAUX.into(), self.segment_count_text.clone());
        out.insert(
            fields::MORCEAUX_IDENTIQUES.into(),
            if self.identical { "oui" } else { "non" }.to_string(),
        );
        for (i, segment) in self.segments.iter().enumerate() {
            out.insert(fields::segment_angle(i), segment.angle.clone());
            out.insert(
                fields::segment_section_count(i),
                segment.section_count_text.clone(),
            );
            for (j, kind) in segment.junctions.iter().enumerate() {
                out.insert(fields::junction(i, j), kind.as_wire().to_string());
            }
            for (j, length) in segment.section_lengths.iter().enumerate() {
                out.insert(fields::section_length(i, j), length.clone());
            }
        }
        out
    }

    /// Restore the form from a raw-field snapshot.
    ///
    /// Two phases: counts first, so the segment and section slots exist,
    /// then values into the freshly-sized slots. Fields absent from the
    /// snapshot keep their defaults.
    pub fn restore(&mut self, saved: &FieldMap) {
        let get = |name: &str| saved.get(name).cloned();

        if let Some(v) = get(fields::TITRE_PLAN) {
            self.plan_title = v;
        }
        if let Some(v) = get(fields::NOM_CLIENT) {
            self.client_name = v;
        }
        if let Some(v) = get(fields::DATE_CHANTIER) {
            self.site_date = v;
        }
        if let Some(v) = get(fields::HAUTEUR_TOTALE) {
            self.total_height = v;
        }
        if let Some(v) = get(fields::HAUTEUR_LISSE_BASSE) {
            self.bottom_rail_height = v;
        }
        if let Some(v) = get(fields::POTEAU_DIMS) {
            self.post_dims = v;
        }
        if let Some(v) = get(fields::LIAISON_DIMS) {
            self.link_dims = v;
        }
        if let Some(v) = get(fields::LISSEHAUTE_DIMS) {
            self.top_rail_dims = v;
        }
        if let Some(v) = get(fields::LISSEBASSE_DIMS) {
            self.bottom_rail_dims = v;
        }
        if let Some(v) = get(fields::BARREAU_DIMS) {
            self.bar_dims = v;
        }
        if let Some(v) = get(fields::ECART_BARREAUX) {
            self.bar_spacing = v;
        }
        if let Some(v) = get(fields::TYPE_FIXATION).and_then(|v| FixationType::from_wire(&v)) {
            self.fixation = v;
        }
        if let Some(v) = get(fields::REMPLISSAGE_TYPE).and_then(|v| InfillType::from_wire(&v)) {
            self.infill = v;
        }
        self.baseplate_dims = get(fields::PLATINE_DIMENSIONS).unwrap_or_default();
        self.baseplate_holes = get(fields::PLATINE_TROUS).unwrap_or_default();
        self.baseplate_spacing = get(fields::PLATINE_ENTRAXES).unwrap_or_default();
        if let Some(v) = get(fields::MORCEAUX_IDENTIQUES) {
            self.identical = v == "oui";
        }

        // Phase 1: counts, building the slots.
        if let Some(v) = get(fields::NOMBRE_MORCEAUX) {
            self.segment_count_text = v;
        }
        self.sync_segments();
        for i in 0..self.segments.len() {
            if let Some(v) = get(&fields::segment_section_count(i)) {
                self.segments[i].section_count_text = v;
            }
            self.segments[i].sync_structure();
        }

        // Phase 2: values into the sized slots.
        for (i, segment) in self.segments.iter_mut().enumerate() {
            if let Some(v) = get(&fields::segment_angle(i)) {
                segment.angle = v;
            }
            for j in 0..segment.junctions.len() {
                if let Some(kind) =
                    get(&fields::junction(i, j)).and_then(|v| JunctionKind::from_wire(&v))
                {
                    segment.junctions[j] = kind;
                }
            }
            for j in 0..segment.section_lengths.len() {
                if let Some(v) = get(&fields::section_length(i, j)) {
                    segment.section_lengths[j] = v;
                }
            }
        }

        self.focus = 0;
        debug!(segments = self.segments.len(), "form restored from snapshot");
    }

    // ── Validation ───────────────────────────────────────────────────────

    /// Front-line validation, run before serialization. Returns the first
    /// violation; field names in errors are the wire names.
    pub fn validate(&self) -> Result<()> {
        fn required(value: &str, field: &str) -> Result<()> {
            if value.trim().is_empty() {
                return Err(Error::validation(field, "champ obligatoire"));
            }
            Ok(())
        }

        fn positive_int(value: &str, field: &str) -> Result<()> {
            match value.trim().parse::<i64>() {
                Ok(n) if n > 0 => Ok(()),
                _ => Err(Error::validation(field, "nombre entier positif attendu")),
            }
        }

        required(&self.plan_title, fields::TITRE_PLAN)?;
        required(&self.client_name, fields::NOM_CLIENT)?;
        required(&self.site_date, fields::DATE_CHANTIER)?;
        positive_int(&self.total_height, fields::HAUTEUR_TOTALE)?;
        positive_int(&self.bottom_rail_height, fields::HAUTEUR_LISSE_BASSE)?;
        required(&self.post_dims, fields::POTEAU_DIMS)?;
        required(&self.top_rail_dims, fields::LISSEHAUTE_DIMS)?;
        required(&self.bottom_rail_dims, fields::LISSEBASSE_DIMS)?;
        required(&self.bar_dims, fields::BARREAU_DIMS)?;
        positive_int(&self.bar_spacing, fields::ECART_BARREAUX)?;
        if self.fixation == FixationType::Baseplate {
            required(&self.baseplate_dims, fields::PLATINE_DIMENSIONS)?;
            required(&self.baseplate_holes, fields::PLATINE_TROUS)?;
            required(&self.baseplate_spacing, fields::PLATINE_ENTRAXES)?;
        }
        positive_int(&self.segment_count_text, fields::NOMBRE_MORCEAUX)?;

        for i in 0..self.visible_segments() {
            let segment = &self.segments[i];
            positive_int(&segment.section_count_text, &fields::segment_section_count(i))?;
            for (j, length) in segment.section_lengths.iter().enumerate() {
                let field = fields::section_length(i, j);
                match length.trim().parse::<f64>() {
                    Ok(n) if n > 0.0 => {}
                    _ => return Err(Error::validation(field, "longueur en mm attendue")),
                }
            }
        }
        Ok(())
    }
}
