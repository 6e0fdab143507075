//! Junction vocabulary and the segment structure builder.
//!
//! A segment's structure is a strictly alternating sequence of junctions and
//! sections: `Junction, Section, Junction, ..., Junction`. The element at
//! even position `2i` is the junction *before* section `i`; the element at
//! `2 * section_count` is the closing junction.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fitting type at a structural boundary between sections.
///
/// Wire names are the French service vocabulary (`rien`, `poteau`,
/// `liaison`). The UI default at every boundary is [`JunctionKind::Post`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JunctionKind {
    /// No fitting at this boundary.
    None,
    /// A post ("poteau").
    #[default]
    Post,
    /// A link connector ("liaison").
    Link,
}

impl JunctionKind {
    /// All kinds in UI cycling order.
    pub const ALL: [JunctionKind; 3] = [JunctionKind::None, JunctionKind::Post, JunctionKind::Link];

    /// Wire name understood by the remote service.
    pub fn as_wire(&self) -> &'static str {
        match self {
            JunctionKind::None => "rien",
            JunctionKind::Post => "poteau",
            JunctionKind::Link => "liaison",
        }
    }

    /// Parse a wire name. Unknown strings yield `None`.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "rien" => Some(JunctionKind::None),
            "poteau" => Some(JunctionKind::Post),
            "liaison" => Some(JunctionKind::Link),
            _ => None,
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            JunctionKind::None => "Rien",
            JunctionKind::Post => "Poteau",
            JunctionKind::Link => "Liaison",
        }
    }

    /// Next kind in cycling order (wraps).
    pub fn next(&self) -> Self {
        match self {
            JunctionKind::None => JunctionKind::Post,
            JunctionKind::Post => JunctionKind::Link,
            JunctionKind::Link => JunctionKind::None,
        }
    }

    /// Previous kind in cycling order (wraps).
    pub fn prev(&self) -> Self {
        match self {
            JunctionKind::None => JunctionKind::Link,
            JunctionKind::Post => JunctionKind::None,
            JunctionKind::Link => JunctionKind::Post,
        }
    }
}

/// One slot of a segment's structure: a junction fitting or a straight
/// section of a given length.
#[derive(Debug, Clone, PartialEq)]
pub enum StructureElement {
    /// A fitting at a section boundary.
    Junction { kind: JunctionKind },
    /// A straight run. Invalid/missing input coerces the length to `0.0`,
    /// which the remote service rejects or flags.
    Section { length_mm: f64 },
}

impl StructureElement {
    pub fn junction(kind: JunctionKind) -> Self {
        StructureElement::Junction { kind }
    }

    pub fn section(length_mm: f64) -> Self {
        StructureElement::Section { length_mm }
    }

    pub fn is_junction(&self) -> bool {
        matches!(self, StructureElement::Junction { .. })
    }

    /// Section length, `None` for junctions.
    pub fn length_mm(&self) -> Option<f64> {
        match self {
            StructureElement::Section { length_mm } => Some(*length_mm),
            StructureElement::Junction { .. } => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire format
// ─────────────────────────────────────────────────────────────────────────────

/// Service wire shape: `{ "type": "...", "longueur"?: f64 }`.
#[derive(Serialize, Deserialize)]
struct WireElement {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    longueur: Option<f64>,
}

impl Serialize for StructureElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let wire = match self {
            StructureElement::Junction { kind } => WireElement {
                kind: kind.as_wire().to_string(),
                longueur: None,
            },
            StructureElement::Section { length_mm } => WireElement {
                kind: "section".to_string(),
                longueur: Some(*length_mm),
            },
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StructureElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let wire = WireElement::deserialize(deserializer)?;
        if wire.kind == "section" {
            return Ok(StructureElement::Section {
                length_mm: wire.longueur.unwrap_or(0.0),
            });
        }
        match JunctionKind::from_wire(&wire.kind) {
            Some(kind) => Ok(StructureElement::Junction { kind }),
            None => Err(D::Error::custom(format!(
                "unknown structure element type '{}'",
                wire.kind
            ))),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Builder
// ─────────────────────────────────────────────────────────────────────────────

/// Build the default alternating structure for `section_count` sections.
///
/// Returns `2 * section_count + 1` elements: junctions (defaulting to
/// [`JunctionKind::Post`]) at even indices, zero-length sections at odd
/// indices. A count of zero yields an empty structure, which is a valid
/// (if incomplete) display state, not an error.
pub fn build_structure(section_count: usize) -> Vec<StructureElement> {
    if section_count == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(2 * section_count + 1);
    out.push(StructureElement::junction(JunctionKind::Post));
    for _ in 0..section_count {
        out.push(StructureElement::section(0.0));
        out.push(StructureElement::junction(JunctionKind::Post));
    }
    out
}

/// Check the alternation invariant: odd length, junctions at even indices,
/// sections at odd indices. The empty structure is well-formed.
pub fn structure_is_well_formed(structure: &[StructureElement]) -> bool {
    if structure.is_empty() {
        return true;
    }
    if structure.len() % 2 == 0 {
        return false;
    }
    structure
        .iter()
        .enumerate()
        .all(|(i, el)| el.is_junction() == (i % 2 == 0))
}
