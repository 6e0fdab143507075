//! # railplan-core - Core Domain Types
//!
//! Foundation crate for Railplan. Provides the railing order data model,
//! the raw-field project serializer, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Structure (`structure`)
//! - [`JunctionKind`] - Fitting at a section boundary (none, post, link)
//! - [`StructureElement`] - One slot of a segment: a junction or a section
//! - [`build_structure()`] - Build the alternating junction/section sequence
//!
//! ### Segments (`segment`)
//! - [`Segment`] - One contiguous run of railing ("morceau")
//! - [`replicate()`] - Deep-copy a template segment N times (identical mode)
//!
//! ### Project (`project`, `fields`)
//! - [`Project`] - The canonical order document posted to the service
//! - [`serialize_project()`] - Flat raw-field mapping -> [`Project`]
//! - [`FieldMap`] - The flat mapping shared with the save/load store
//!
//! ### Proposal (`proposal`)
//! - [`Proposal`] - The computed result document returned by the service,
//!   cached verbatim for drawing exports
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use railplan_core::prelude::*;
//! ```

pub mod error;
pub mod fields;
pub mod filename;
pub mod logging;
pub mod project;
pub mod proposal;
pub mod segment;
pub mod structure;

/// Prelude for common imports used throughout all Railplan crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use fields::FieldMap;
pub use filename::sanitize_filename;
pub use project::{serialize_project, Baseplate, Project};
pub use proposal::{BarLayout, BaseplateDetails, NomenclatureItem, Proposal, SectionPlan, SegmentPlan};
pub use segment::{replicate, Segment};
pub use structure::{build_structure, structure_is_well_formed, JunctionKind, StructureElement};
