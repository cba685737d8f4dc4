//! SVG export for placed panel outlines.
//!
//! Emits one labeled `<path>` per panel, closed with `Z` since outlines are
//! implicitly closed. Units are millimetres.

use std::fs;
use std::path::Path;

use crate::error::{ExportError, ExportResult};
use crate::layout::{sheet_bounds, PlacedPanel, SheetParameters};

const STROKE_WIDTH: f64 = 0.2;

/// Render the placed panels as a standalone SVG document. `params` must be
/// the parameters the layout was arranged with; the document mirrors its
/// offsets as margins on the far sides.
pub fn render(placed: &[PlacedPanel], params: &SheetParameters) -> ExportResult<String> {
    let (_, _, max_x, max_y) = sheet_bounds(placed).ok_or(ExportError::NoPanels)?;

    let doc_w = max_x + params.offset_x;
    let doc_h = max_y + params.offset_y;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{doc_w:.3}mm\" height=\"{doc_h:.3}mm\" viewBox=\"0 0 {doc_w:.3} {doc_h:.3}\">\n"
    ));

    for panel in placed {
        if panel.outline.len() < 3 {
            return Err(ExportError::InvalidOutline(panel.name.to_string()));
        }
        let mut d = String::new();
        for (i, p) in panel.outline.points().iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            d.push_str(&format!("{cmd} {:.3} {:.3} ", p.x, p.y));
        }
        d.push('Z');
        svg.push_str(&format!(
            "  <path id=\"{}\" d=\"{}\" fill=\"none\" stroke=\"black\" stroke-width=\"{STROKE_WIDTH}\"/>\n",
            panel.name, d
        ));
    }

    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Render and write the SVG document to a file.
pub fn write<P: AsRef<Path>>(
    path: P,
    placed: &[PlacedPanel],
    params: &SheetParameters,
) -> ExportResult<()> {
    let svg = render(placed, params)?;
    fs::write(path, svg)?;
    Ok(())
}
