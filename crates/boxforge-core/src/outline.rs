//! Panel outline builder.
//!
//! Turns a panel's base rectangle plus a per-edge role and finger pattern
//! into the final closed cut boundary. Tabs push outward by one material
//! thickness over each pattern interval; slots recess inward by the same
//! amount over the identical intervals; free or unjointable edges stay
//! straight. The four edges are traversed counter-clockwise, so every
//! outline winds positively in the panel's local frame.

use crate::finger::FingerPattern;
use crate::geometry::{Outline, Point2, Rect};
use crate::panel::{EdgeRole, PanelEdge};

/// Role and (possibly absent) finger pattern for one local edge. A jointed
/// role with no pattern is an unjointable edge that degraded to flat.
#[derive(Debug, Clone, Default)]
pub struct EdgeProfile {
    pub role: EdgeRole,
    pub pattern: Option<FingerPattern>,
    /// Distance from the pattern's coordinate origin on the shared box
    /// edge to this edge's start corner. Nonzero when the panel body is
    /// inset from the face boundary at that corner.
    pub start_inset: f64,
}

/// Map a point in edge-local coordinates (param along the edge, depth with
/// positive pointing outward) into the panel's 2D frame.
fn edge_to_panel(edge: PanelEdge, rect: Rect, param: f64, depth: f64) -> Point2 {
    match edge {
        PanelEdge::Bottom => Point2::new(param, -depth),
        PanelEdge::Right => Point2::new(rect.width + depth, param),
        PanelEdge::Top => Point2::new(rect.width - param, rect.height + depth),
        PanelEdge::Left => Point2::new(-depth, rect.height - param),
    }
}

/// Build the closed cut outline for a panel.
///
/// `edges` is indexed in [`PanelEdge::ALL`] order (bottom, right, top,
/// left). The result is implicitly closed and free of duplicate
/// consecutive points.
pub fn build_outline(rect: Rect, edges: &[EdgeProfile; 4]) -> Outline {
    let mut outline = Outline::new();

    for (edge, profile) in PanelEdge::ALL.iter().zip(edges) {
        let length = edge.length(rect);
        outline.push_unique(edge_to_panel(*edge, rect, 0.0, 0.0));

        if let Some(pattern) = &profile.pattern {
            let depth = match profile.role {
                EdgeRole::TabOwner => pattern.thickness,
                EdgeRole::SlotOwner => -pattern.thickness,
                EdgeRole::Free => 0.0,
            };
            if depth != 0.0 {
                for interval in pattern.intervals() {
                    let start = interval.start - profile.start_inset;
                    let end = interval.end - profile.start_inset;
                    outline.push_unique(edge_to_panel(*edge, rect, start, 0.0));
                    outline.push_unique(edge_to_panel(*edge, rect, start, depth));
                    outline.push_unique(edge_to_panel(*edge, rect, end, depth));
                    outline.push_unique(edge_to_panel(*edge, rect, end, 0.0));
                }
            }
        }

        outline.push_unique(edge_to_panel(*edge, rect, length, 0.0));
    }

    outline.seal();
    outline
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat() -> EdgeProfile {
        EdgeProfile::default()
    }

    fn jointed(role: EdgeRole, length: f64) -> EdgeProfile {
        EdgeProfile {
            role,
            pattern: FingerPattern::compute(length, 3.0, 2),
            start_inset: 0.0,
        }
    }

    #[test]
    fn test_plain_rectangle() {
        let rect = Rect::new(40.0, 20.0);
        let outline = build_outline(rect, &[flat(), flat(), flat(), flat()]);
        assert_eq!(outline.len(), 4);
        assert!((outline.signed_area() - 800.0).abs() < 1e-9);
        assert!(outline.is_simple());
    }

    #[test]
    fn test_tab_edge_protrudes_by_thickness() {
        let rect = Rect::new(60.0, 40.0);
        let outline = build_outline(
            rect,
            &[jointed(EdgeRole::TabOwner, 60.0), flat(), flat(), flat()],
        );
        let (_, min_y, _, max_y) = outline.bounds().unwrap();
        assert!((min_y + 3.0).abs() < 1e-9);
        assert!((max_y - 40.0).abs() < 1e-9);
        assert!(outline.is_simple());
        // Tabs add area.
        assert!(outline.signed_area() > 60.0 * 40.0);
    }

    #[test]
    fn test_slot_edge_notches_inward() {
        let rect = Rect::new(60.0, 40.0);
        let outline = build_outline(
            rect,
            &[jointed(EdgeRole::SlotOwner, 60.0), flat(), flat(), flat()],
        );
        let (_, min_y, _, _) = outline.bounds().unwrap();
        // Notches cut in, never out.
        assert!(min_y.abs() < 1e-9);
        assert!(outline.is_simple());
        assert!(outline.signed_area() < 60.0 * 40.0);
    }

    #[test]
    fn test_tab_and_slot_remove_and_add_equal_area() {
        let rect = Rect::new(60.0, 40.0);
        let tabbed = build_outline(
            rect,
            &[jointed(EdgeRole::TabOwner, 60.0), flat(), flat(), flat()],
        );
        let slotted = build_outline(
            rect,
            &[jointed(EdgeRole::SlotOwner, 60.0), flat(), flat(), flat()],
        );
        let base_area = 60.0 * 40.0;
        let added = tabbed.signed_area() - base_area;
        let removed = base_area - slotted.signed_area();
        assert!((added - removed).abs() < 1e-9);
    }

    #[test]
    fn test_all_edges_jointed_stays_simple_and_ccw() {
        let rect = Rect::new(60.0, 40.0);
        let outline = build_outline(
            rect,
            &[
                jointed(EdgeRole::TabOwner, 60.0),
                jointed(EdgeRole::SlotOwner, 40.0),
                jointed(EdgeRole::TabOwner, 60.0),
                jointed(EdgeRole::SlotOwner, 40.0),
            ],
        );
        assert!(outline.is_simple());
        assert!(outline.signed_area() > 0.0);
    }

    #[test]
    fn test_degraded_edge_renders_straight() {
        let rect = Rect::new(60.0, 40.0);
        let degraded = EdgeProfile {
            role: EdgeRole::TabOwner,
            pattern: None,
            start_inset: 3.0,
        };
        let outline = build_outline(rect, &[degraded, flat(), flat(), flat()]);
        assert_eq!(outline.len(), 4);
    }

    #[test]
    fn test_start_inset_shifts_intervals_into_the_local_frame() {
        // A body inset by one thickness at the edge's start corner renders
        // the same tabs one thickness earlier in local coordinates.
        let rect = Rect::new(60.0, 40.0);
        let pattern = FingerPattern::compute(66.0, 3.0, 2).unwrap();
        let inset = EdgeProfile {
            role: EdgeRole::TabOwner,
            pattern: Some(pattern.clone()),
            start_inset: 3.0,
        };
        let outline = build_outline(rect, &[inset, flat(), flat(), flat()]);

        let first_tab = pattern.intervals()[0];
        let tab_xs: Vec<f64> = outline
            .points()
            .iter()
            .filter(|p| p.y < 0.0)
            .map(|p| p.x)
            .collect();
        assert!((tab_xs[0] - (first_tab.start - 3.0)).abs() < 1e-9);
        assert!((tab_xs[1] - (first_tab.end - 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_no_duplicate_consecutive_points() {
        let rect = Rect::new(60.0, 40.0);
        let outline = build_outline(
            rect,
            &[
                jointed(EdgeRole::TabOwner, 60.0),
                flat(),
                jointed(EdgeRole::SlotOwner, 60.0),
                flat(),
            ],
        );
        let pts = outline.points();
        for pair in pts.windows(2) {
            let same = (pair[0].x - pair[1].x).abs() < 1e-12
                && (pair[0].y - pair[1].y).abs() < 1e-12;
            assert!(!same);
        }
        let first = pts[0];
        let last = *pts.last().unwrap();
        assert!(!((first.x - last.x).abs() < 1e-12 && (first.y - last.y).abs() < 1e-12));
    }
}
