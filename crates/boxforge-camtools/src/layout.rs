//! Flat sheet layout for panel outlines.
//!
//! Places each panel's cut outline on a single flat sheet, two panels per
//! row, with a configurable gap. Tab protrusions extend past a panel's base
//! rectangle, so placement works from outline bounds, and the finished
//! sheet is normalized so its minimum corner sits at the configured offset
//! (never negative).

use serde::{Deserialize, Serialize};
use tracing::debug;

use boxforge_core::{Outline, PanelSet};

/// Sheet layout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetParameters {
    /// Gap between neighbouring panels.
    pub spacing: f64,
    /// Sheet-frame x of the layout's minimum corner.
    pub offset_x: f64,
    /// Sheet-frame y of the layout's minimum corner.
    pub offset_y: f64,
}

impl Default for SheetParameters {
    fn default() -> Self {
        Self {
            spacing: 5.0,
            offset_x: 10.0,
            offset_y: 10.0,
        }
    }
}

/// One panel outline positioned on the sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPanel {
    pub name: &'static str,
    pub outline: Outline,
}

#[derive(Clone, Copy, Debug)]
struct LayoutCursor {
    x: f64,
    y: f64,
    spacing: f64,
}

impl LayoutCursor {
    fn new(spacing: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            spacing,
        }
    }

    fn place(&mut self, width: f64) -> (f64, f64) {
        let position = (self.x, self.y);
        self.x += width + self.spacing;
        position
    }

    fn next_row(&mut self, height: f64) {
        self.y += height + self.spacing;
        self.x = 0.0;
    }
}

/// Arrange a panel set on a flat sheet.
pub fn arrange(set: &PanelSet, params: &SheetParameters) -> Vec<PlacedPanel> {
    let mut placed = Vec::new();
    let mut cursor = LayoutCursor::new(params.spacing);
    let mut row_height: f64 = 0.0;

    for (i, panel) in set.panels.iter().enumerate() {
        let Some((min_x, min_y, max_x, max_y)) = panel.outline.bounds() else {
            continue;
        };
        let width = max_x - min_x;
        let height = max_y - min_y;

        let (x, y) = cursor.place(width);
        let mut outline = panel.outline.clone();
        outline.translate(x - min_x, y - min_y);
        placed.push(PlacedPanel {
            name: panel.kind.name(),
            outline,
        });

        row_height = row_height.max(height);
        if i % 2 == 1 {
            cursor.next_row(row_height);
            row_height = 0.0;
        }
    }

    // Normalize so the configured offset is the minimum XY of the sheet.
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    for panel in &placed {
        if let Some((x0, y0, _, _)) = panel.outline.bounds() {
            min_x = min_x.min(x0);
            min_y = min_y.min(y0);
        }
    }
    if min_x.is_finite() && min_y.is_finite() {
        for panel in &mut placed {
            panel
                .outline
                .translate(params.offset_x - min_x, params.offset_y - min_y);
        }
    }

    debug!(panels = placed.len(), "arranged sheet layout");
    placed
}

/// Overall sheet bounds of a placed layout as (min_x, min_y, max_x, max_y).
pub fn sheet_bounds(placed: &[PlacedPanel]) -> Option<(f64, f64, f64, f64)> {
    let mut bounds: Option<(f64, f64, f64, f64)> = None;
    for panel in placed {
        if let Some((x0, y0, x1, y1)) = panel.outline.bounds() {
            bounds = Some(match bounds {
                None => (x0, y0, x1, y1),
                Some((bx0, by0, bx1, by1)) => {
                    (bx0.min(x0), by0.min(y0), bx1.max(x1), by1.max(y1))
                }
            });
        }
    }
    bounds
}
