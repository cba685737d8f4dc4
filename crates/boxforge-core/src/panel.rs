//! Panel topology: which panels exist, which pairs share an edge, and who
//! owns the tabs on each shared edge.
//!
//! The adjacency is a static table driven by the box's known rectangular
//! layout. Ownership convention, applied everywhere: side panels own the
//! tabs against base and lid; front/back own the tabs against left/right.
//! The mating panel of every jointed edge computes its finger pattern from
//! the identical edge length and thickness, so the patterns mesh.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::spec::OuterDimensions;

/// One flat face of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    Base,
    Lid,
    Front,
    Back,
    Left,
    Right,
}

impl PanelKind {
    pub fn name(&self) -> &'static str {
        match self {
            PanelKind::Base => "base",
            PanelKind::Lid => "lid",
            PanelKind::Front => "front",
            PanelKind::Back => "back",
            PanelKind::Left => "left",
            PanelKind::Right => "right",
        }
    }

    /// The panels present for a box, in generation order.
    pub fn all(has_lid: bool) -> Vec<PanelKind> {
        let mut kinds = vec![
            PanelKind::Base,
            PanelKind::Front,
            PanelKind::Back,
            PanelKind::Left,
            PanelKind::Right,
        ];
        if has_lid {
            kinds.insert(1, PanelKind::Lid);
        }
        kinds
    }

    pub fn is_side(&self) -> bool {
        matches!(
            self,
            PanelKind::Front | PanelKind::Back | PanelKind::Left | PanelKind::Right
        )
    }
}

impl std::fmt::Display for PanelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The four edges of a panel's local rectangle, in counter-clockwise
/// traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelEdge {
    Bottom = 0,
    Right = 1,
    Top = 2,
    Left = 3,
}

impl PanelEdge {
    pub const ALL: [PanelEdge; 4] = [
        PanelEdge::Bottom,
        PanelEdge::Right,
        PanelEdge::Top,
        PanelEdge::Left,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PanelEdge::Bottom => "bottom",
            PanelEdge::Right => "right",
            PanelEdge::Top => "top",
            PanelEdge::Left => "left",
        }
    }

    /// Edge length within the given panel rectangle.
    pub fn length(&self, rect: Rect) -> f64 {
        match self {
            PanelEdge::Bottom | PanelEdge::Top => rect.width,
            PanelEdge::Right | PanelEdge::Left => rect.height,
        }
    }
}

/// A panel's role on one of its edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EdgeRole {
    /// Unjointed edge, rendered as a plain straight line.
    #[default]
    Free,
    /// This panel's tabs protrude outward over the pattern intervals.
    TabOwner,
    /// This panel recesses notches inward over the same intervals.
    SlotOwner,
}

/// The classifier's verdict for one local edge: role plus the mating panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeAssignment {
    pub role: EdgeRole,
    pub mate: Option<PanelKind>,
}

impl EdgeAssignment {
    const fn free() -> Self {
        Self {
            role: EdgeRole::Free,
            mate: None,
        }
    }

    const fn tab(mate: PanelKind) -> Self {
        Self {
            role: EdgeRole::TabOwner,
            mate: Some(mate),
        }
    }

    const fn slot(mate: PanelKind) -> Self {
        Self {
            role: EdgeRole::SlotOwner,
            mate: Some(mate),
        }
    }
}

/// The box face a panel covers, in its local 2D frame. Mating panels on a
/// shared box edge always see the same face length (L, W, or H), and both
/// compute their finger pattern from it.
pub fn face_rect(kind: PanelKind, outer: &OuterDimensions) -> Rect {
    match kind {
        PanelKind::Base | PanelKind::Lid => Rect::new(outer.length, outer.width),
        PanelKind::Front | PanelKind::Back => Rect::new(outer.length, outer.height),
        PanelKind::Left | PanelKind::Right => Rect::new(outer.width, outer.height),
    }
}

/// Inset of the panel body from its face boundary, per edge in
/// [`PanelEdge::ALL`] order. A tab-owning edge pulls the body in by one
/// thickness so its tabs end exactly on the face boundary; slot-owning and
/// free edges sit on the boundary itself.
pub fn edge_insets(kind: PanelKind, thickness: f64, has_lid: bool) -> [f64; 4] {
    let mut insets = [0.0; 4];
    for (i, assignment) in adjacency(kind, has_lid).iter().enumerate() {
        if assignment.role == EdgeRole::TabOwner {
            insets[i] = thickness;
        }
    }
    insets
}

/// A panel's flat body rectangle in its local 2D frame: the face minus the
/// tab-owner insets.
pub fn panel_rect(
    kind: PanelKind,
    outer: &OuterDimensions,
    thickness: f64,
    has_lid: bool,
) -> Rect {
    let face = face_rect(kind, outer);
    let insets = edge_insets(kind, thickness, has_lid);
    Rect::new(
        face.width - insets[PanelEdge::Left as usize] - insets[PanelEdge::Right as usize],
        face.height - insets[PanelEdge::Bottom as usize] - insets[PanelEdge::Top as usize],
    )
}

/// Offset from each edge's pattern coordinate (measured along the shared
/// box edge) to its local parameter: the body inset at the corner where
/// the counter-clockwise traversal of that edge starts.
pub fn edge_start_insets(insets: [f64; 4]) -> [f64; 4] {
    [
        insets[PanelEdge::Left as usize],
        insets[PanelEdge::Bottom as usize],
        insets[PanelEdge::Right as usize],
        insets[PanelEdge::Top as usize],
    ]
}

/// Role and mate for each of a panel's four edges, indexed in
/// [`PanelEdge::ALL`] order (bottom, right, top, left).
///
/// Base and lid never touch each other; side-to-side joints sit on the
/// vertical (left/right) local edges, whose length is the box height on
/// every side panel. Mate labels follow the panel placements: local x runs
/// along box x on front/back and along box y on left/right, so a panel's
/// local right edge neighbours the panel at the far end of that axis.
pub fn adjacency(kind: PanelKind, has_lid: bool) -> [EdgeAssignment; 4] {
    use PanelKind::*;

    let lid_edge = |assignment: EdgeAssignment| {
        if has_lid {
            assignment
        } else {
            EdgeAssignment::free()
        }
    };

    match kind {
        Base => [
            EdgeAssignment::slot(Front),
            EdgeAssignment::slot(Right),
            EdgeAssignment::slot(Back),
            EdgeAssignment::slot(Left),
        ],
        Lid => [
            EdgeAssignment::slot(Front),
            EdgeAssignment::slot(Right),
            EdgeAssignment::slot(Back),
            EdgeAssignment::slot(Left),
        ],
        Front => [
            EdgeAssignment::tab(Base),
            EdgeAssignment::tab(Right),
            lid_edge(EdgeAssignment::tab(Lid)),
            EdgeAssignment::tab(Left),
        ],
        Back => [
            EdgeAssignment::tab(Base),
            EdgeAssignment::tab(Right),
            lid_edge(EdgeAssignment::tab(Lid)),
            EdgeAssignment::tab(Left),
        ],
        Left => [
            EdgeAssignment::tab(Base),
            EdgeAssignment::slot(Back),
            lid_edge(EdgeAssignment::tab(Lid)),
            EdgeAssignment::slot(Front),
        ],
        Right => [
            EdgeAssignment::tab(Base),
            EdgeAssignment::slot(Back),
            lid_edge(EdgeAssignment::tab(Lid)),
            EdgeAssignment::slot(Front),
        ],
    }
}
