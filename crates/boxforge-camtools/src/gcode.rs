//! Laser-profile G-code export for placed panel outlines.
//!
//! Emits a commented header, a standard initialization block (millimetres,
//! absolute positioning, XY plane), then one closed profile per panel with
//! M3/M5 laser gating and optional multi-pass Z step-down.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, ExportResult};
use crate::layout::PlacedPanel;

/// Laser cutting parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaserParameters {
    pub passes: u32,
    /// Spindle/laser power for M3 S<power>.
    pub power: u32,
    /// Cutting feed rate in mm/min.
    pub feed_rate: f64,
    /// Z lowered by this much per extra pass.
    pub z_step_down: f64,
}

impl Default for LaserParameters {
    fn default() -> Self {
        Self {
            passes: 3,
            power: 1000,
            feed_rate: 500.0,
            z_step_down: 0.5,
        }
    }
}

/// Generate the laser cutting program for a placed sheet layout.
pub fn generate(placed: &[PlacedPanel], params: &LaserParameters) -> ExportResult<String> {
    if placed.is_empty() {
        return Err(ExportError::NoPanels);
    }

    let mut gcode = String::new();

    gcode.push_str("; Boxforge finger-jointed box\n");
    gcode.push_str(&format!("; Panels: {}\n", placed.len()));
    gcode.push_str(&format!("; Laser passes: {}\n", params.passes));
    gcode.push_str(&format!("; Laser power: S{}\n", params.power));
    gcode.push_str(&format!("; Feed rate: {:.0} mm/min\n", params.feed_rate));
    gcode.push_str(";\n");

    gcode.push_str("G21 ; Set units to millimeters\n");
    gcode.push_str("G90 ; Absolute positioning\n");
    gcode.push_str("G17 ; XY plane selection\n");
    gcode.push_str(&format!(
        "G0 Z{:.2} F{:.0} ; Move to safe height\n\n",
        5.0, params.feed_rate
    ));

    for panel in placed {
        let points = panel.outline.points();
        let Some(first) = points.first() else {
            return Err(ExportError::InvalidOutline(panel.name.to_string()));
        };

        gcode.push_str(&format!("; Panel: {}\n", panel.name));
        gcode.push_str(&format!(
            "G0 X{:.2} Y{:.2} ; Rapid to start\n",
            first.x, first.y
        ));

        for pass in 1..=params.passes {
            let z_depth = -((pass - 1) as f64) * params.z_step_down;
            gcode.push_str(&format!(
                "; Pass {}/{} at Z{:.2}\n",
                pass, params.passes, z_depth
            ));
            if pass > 1 {
                gcode.push_str(&format!("G0 Z{z_depth:.2} ; Move to pass depth\n"));
            }
            gcode.push_str(&format!("M3 S{} ; Laser on\n", params.power));

            for (idx, point) in points.iter().skip(1).enumerate() {
                if idx == 0 {
                    gcode.push_str(&format!(
                        "G1 X{:.2} Y{:.2} F{:.0}\n",
                        point.x, point.y, params.feed_rate
                    ));
                } else {
                    gcode.push_str(&format!("G1 X{:.2} Y{:.2}\n", point.x, point.y));
                }
            }
            // Outlines are implicitly closed; cut back to the start point.
            gcode.push_str(&format!("G1 X{:.2} Y{:.2}\n", first.x, first.y));

            gcode.push_str("M5 ; Laser off\n");
        }

        gcode.push('\n');
    }

    gcode.push_str("M5 ; Ensure laser off\n");
    gcode.push_str("G0 Z10.0 ; Move to safe height\n");
    gcode.push_str("G0 X0 Y0 ; Return to origin\n");
    gcode.push_str("M2 ; Program end\n");

    Ok(gcode)
}

/// Generate and write the program to a file.
pub fn write<P: AsRef<Path>>(
    path: P,
    placed: &[PlacedPanel],
    params: &LaserParameters,
) -> ExportResult<()> {
    let gcode = generate(placed, params)?;
    fs::write(path, gcode)?;
    Ok(())
}
