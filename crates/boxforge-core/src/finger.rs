//! Finger-layout engine.
//!
//! Maps an edge length, material thickness, and finger-scale factor to an
//! ordered sequence of tab intervals along the edge. The finger count is
//! always odd and at least three, so both ends of a jointed edge land on
//! solid material and the corner stays closed. The pattern is centered on
//! the edge.
//!
//! This is pure arithmetic: no panels, no 3D, no CAD knowledge.

use serde::{Deserialize, Serialize};

/// Tolerance added before flooring a length ratio, so a forced
/// `edge / (edge / 3)` that lands at 2.999999… still counts as 3.
const COUNT_EPSILON: f64 = 1e-9;

/// One tab's extent `[start, end)` along the edge parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

/// The finger pattern for one edge: derived finger length and count plus the
/// ordered tab intervals. Two panels sharing an edge must compute their
/// patterns from the identical `(edge_length, thickness, scale)` so the tab
/// and slot boundaries coincide exactly; only the owner role differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FingerPattern {
    pub edge_length: f64,
    pub thickness: f64,
    /// Effective finger length after count adjustment.
    pub finger_length: f64,
    /// Number of finger slots along the edge. Always odd, at least 3.
    pub finger_count: u32,
    /// Margin before slot index 0. Equal margin remains after the last slot.
    pub leading_gap: f64,
    intervals: Vec<Interval>,
}

fn slot_count(edge_length: f64, finger_length: f64) -> u32 {
    ((edge_length / finger_length) + COUNT_EPSILON).floor() as u32
}

impl FingerPattern {
    /// Compute the finger pattern for an edge.
    ///
    /// Returns `None` when the edge cannot be jointed: shorter than three
    /// material thicknesses, or no finger length down to `1 × thickness`
    /// fits. Callers must render such an edge as a plain straight line.
    pub fn compute(edge_length: f64, thickness: f64, scale: u32) -> Option<Self> {
        if 3.0 * thickness > edge_length || scale == 0 {
            return None;
        }

        let mut scale = scale;
        let mut finger_length = scale as f64 * thickness;
        let mut finger_count = slot_count(edge_length, finger_length);

        // Target finger length too coarse for the edge: walk the scale down
        // until at least one finger fits, giving up at zero.
        while finger_count == 0 {
            scale -= 1;
            if scale == 0 {
                return None;
            }
            finger_length = scale as f64 * thickness;
            finger_count = slot_count(edge_length, finger_length);
        }

        // Guarantee at least three fingers even when the scale target was
        // too coarse.
        if finger_count < 3 {
            finger_length = edge_length / 3.0;
            finger_count = slot_count(edge_length, finger_length);
        }

        // Guarantee an odd count by widening the fingers until one drops
        // out. An odd count makes both edge endpoints the same type, so the
        // corners are always solid material. The tolerance floor can read
        // the recomputed count as unchanged when the edge sits a hair
        // under an exact multiple of the widened length, so repeat until
        // the count lands odd.
        while finger_count % 2 == 0 {
            finger_length += finger_length / finger_count as f64;
            finger_count = slot_count(edge_length, finger_length);
        }

        let leading_gap = (edge_length - finger_count as f64 * finger_length) / 2.0;

        // Tabs occupy every other slot starting at index 1. Index 0 and the
        // last index (odd count) stay solid.
        let mut intervals = Vec::new();
        for i in 0..finger_count {
            if i % 2 == 1 {
                let start = leading_gap + i as f64 * finger_length;
                intervals.push(Interval::new(start, start + finger_length));
            }
        }

        Some(Self {
            edge_length,
            thickness,
            finger_length,
            finger_count,
            leading_gap,
            intervals,
        })
    }

    /// The ordered, non-overlapping tab intervals along the edge.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Human-readable summary for UI feedback.
    pub fn summary(&self) -> String {
        format!(
            "{} fingers x {:.3} over {:.3}",
            self.finger_count, self.finger_length, self.edge_length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short_edge_degrades_to_none() {
        // 3 x 1.0 = 3.0 > 2.5
        assert!(FingerPattern::compute(2.5, 1.0, 5).is_none());
    }

    #[test]
    fn test_minimum_size_box() {
        // Target 5.0 fits only twice in 10.0; forcing three fingers gives
        // 10/3 each.
        let pattern = FingerPattern::compute(10.0, 1.0, 5).unwrap();
        assert_eq!(pattern.finger_count, 3);
        assert!((pattern.finger_length - 10.0 / 3.0).abs() < 1e-9);
        assert_eq!(pattern.intervals().len(), 1);
    }

    #[test]
    fn test_large_edge_respects_scale() {
        // flen 5 -> 20 fingers (even) -> widen to 5.25 -> 19.
        let pattern = FingerPattern::compute(100.0, 1.0, 5).unwrap();
        assert_eq!(pattern.finger_count, 19);
        assert!((pattern.finger_length - 5.25).abs() < 1e-9);
    }

    #[test]
    fn test_scale_decrements_until_a_finger_fits() {
        // flen 9 > 7, then 8, until 7 fits once; fewer than 3 forces 7/3.
        let pattern = FingerPattern::compute(7.0, 1.0, 9).unwrap();
        assert_eq!(pattern.finger_count, 3);
        assert!((pattern.finger_length - 7.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_count_is_always_odd_and_at_least_three() {
        for edge in [6.0, 9.5, 17.0, 33.3, 50.0, 120.0, 347.25] {
            for thickness in [1.0, 2.0, 3.0] {
                for scale in 1..=10 {
                    if let Some(p) = FingerPattern::compute(edge, thickness, scale) {
                        assert!(p.finger_count >= 3, "edge {edge} t {thickness} s {scale}");
                        assert_eq!(
                            p.finger_count % 2,
                            1,
                            "edge {edge} t {thickness} s {scale}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_pattern_is_centered() {
        for edge in [10.0, 47.0, 100.0, 250.0] {
            let p = FingerPattern::compute(edge, 3.0, 4).unwrap();
            let trailing_gap =
                p.edge_length - (p.leading_gap + p.finger_count as f64 * p.finger_length);
            assert!((p.leading_gap - trailing_gap).abs() < 1e-9, "edge {edge}");

            // Tab intervals are symmetric about the edge midpoint.
            let mid = edge / 2.0;
            let intervals = p.intervals();
            for (a, b) in intervals.iter().zip(intervals.iter().rev()) {
                assert!(((a.start - mid) + (b.end - mid)).abs() < 1e-9, "edge {edge}");
            }
        }
    }

    #[test]
    fn test_widening_near_an_exact_multiple_still_lands_odd() {
        // Just below 4 x the once-widened length of 6.25: the tolerance
        // floor reads the recomputed count as 4 again, so a single
        // widening step would return an even count.
        let p = FingerPattern::compute(25.0 - 5.5e-9, 1.0, 5).unwrap();
        assert_eq!(p.finger_count % 2, 1);
        assert!(p.finger_count >= 3);
    }

    #[test]
    fn test_intervals_are_ordered_and_disjoint() {
        let p = FingerPattern::compute(200.0, 3.0, 5).unwrap();
        let intervals = p.intervals();
        assert!(!intervals.is_empty());
        for pair in intervals.windows(2) {
            assert!(pair[0].end < pair[1].start + 1e-9);
        }
        for iv in intervals {
            assert!((iv.span() - p.finger_length).abs() < 1e-9);
        }
    }

    #[test]
    fn test_first_and_last_slots_are_solid() {
        let p = FingerPattern::compute(90.0, 3.0, 3).unwrap();
        let first_tab = p.intervals().first().unwrap();
        let last_tab = p.intervals().last().unwrap();
        // One full finger of solid material before the first tab and after
        // the last, beyond the leading gap.
        assert!((first_tab.start - (p.leading_gap + p.finger_length)).abs() < 1e-9);
        assert!(
            (p.edge_length - p.leading_gap - p.finger_length - last_tab.end).abs() < 1e-9
        );
    }

    #[test]
    fn test_summary_reports_count_and_length() {
        let p = FingerPattern::compute(100.0, 1.0, 5).unwrap();
        assert_eq!(p.summary(), "19 fingers x 5.250 over 100.000");
    }
}
