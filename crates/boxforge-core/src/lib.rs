//! # Boxforge Core
//!
//! Parametric geometry for finger-jointed (box-joint) boxes. Given outer
//! dimensions, material thickness, a lid flag, and a finger-scale factor,
//! computes a closed 2D cut outline for each panel whose mating edges carry
//! complementary tabs and slots.
//!
//! The layout computations are pure, synchronous, and deterministic: safe
//! to rerun on every live-preview refresh, with no shared state between
//! runs. All 3D work is pushed through the [`assembly::ModelingBackend`]
//! seam.

pub mod assembly;
pub mod error;
pub mod finger;
pub mod geometry;
pub mod outline;
pub mod panel;
pub mod report;
pub mod spec;

pub use assembly::{
    BackendCall, BoxAssembler, CombineOp, ExtrudeDirection, ModelingBackend, Panel, PanelPlane,
    PanelSet, Placement, RecordingBackend, SolidHandle,
};
pub use error::{BoxError, Result};
pub use finger::{FingerPattern, Interval};
pub use geometry::{Outline, Point2, Rect};
pub use outline::{build_outline, EdgeProfile};
pub use panel::{
    adjacency, edge_insets, edge_start_insets, face_rect, panel_rect, EdgeAssignment, EdgeRole,
    PanelEdge, PanelKind,
};
pub use report::{EdgeSummary, GenerationReport, PanelReport};
pub use spec::{BoxSpec, DimensionMode, OuterDimensions};
