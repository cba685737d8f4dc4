//! # Boxforge CAM Tools
//!
//! Consumers of the panel outlines produced by `boxforge-core`:
//!
//! - **Sheet layout**: row packing of panel outlines onto a flat sheet
//! - **SVG export**: one labeled path per panel, for preview or cutting
//! - **G-code export**: multi-pass laser profile cutting program
//!
//! Kerf/burn compensation is deliberately not applied anywhere here; the
//! emitted geometry is the nominal outline.

pub mod error;
pub mod gcode;
pub mod layout;
pub mod svg;

pub use error::{ExportError, ExportResult};
pub use gcode::LaserParameters;
pub use layout::{arrange, sheet_bounds, PlacedPanel, SheetParameters};
