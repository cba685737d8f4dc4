//! Human-readable generation reporting.
//!
//! Derived directly from the computed finger patterns; nothing here is a
//! separate computation. Hosts can show the per-edge summaries as UI
//! feedback and the warnings for silently degraded edges.

use std::fmt;

use serde::Serialize;

/// Summary of one panel edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeSummary {
    /// Local edge name (bottom/right/top/left).
    pub edge: &'static str,
    /// "tabs", "slots", or "flat".
    pub role: &'static str,
    /// Finger count/length text, empty for flat edges.
    pub detail: String,
}

/// Summary of one generated panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelReport {
    pub name: &'static str,
    pub width: f64,
    pub height: f64,
    pub edges: Vec<EdgeSummary>,
}

/// Full report for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerationReport {
    pub panels: Vec<PanelReport>,
    /// One entry per edge that was too short for a finger pattern and
    /// degraded to a flat edge.
    pub warnings: Vec<String>,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for panel in &self.panels {
            writeln!(f, "{} ({:.3} x {:.3})", panel.name, panel.width, panel.height)?;
            for edge in &panel.edges {
                if edge.detail.is_empty() {
                    writeln!(f, "  {}: {}", edge.edge, edge.role)?;
                } else {
                    writeln!(f, "  {}: {} ({})", edge.edge, edge.detail, edge.role)?;
                }
            }
        }
        if !self.warnings.is_empty() {
            writeln!(f, "warnings:")?;
            for warning in &self.warnings {
                writeln!(f, "  {warning}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_panels_and_warnings() {
        let report = GenerationReport {
            panels: vec![PanelReport {
                name: "front",
                width: 100.0,
                height: 50.0,
                edges: vec![
                    EdgeSummary {
                        edge: "bottom",
                        role: "tabs",
                        detail: "19 fingers x 5.250 over 100.000".to_string(),
                    },
                    EdgeSummary {
                        edge: "top",
                        role: "flat",
                        detail: String::new(),
                    },
                ],
            }],
            warnings: vec!["front/top: edge too short for finger joints".to_string()],
        };
        let text = report.to_string();
        assert!(text.contains("front (100.000 x 50.000)"));
        assert!(text.contains("bottom: 19 fingers x 5.250 over 100.000 (tabs)"));
        assert!(text.contains("top: flat"));
        assert!(text.contains("front/top: edge too short"));
    }
}
