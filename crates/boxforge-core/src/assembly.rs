//! Box assembly orchestration.
//!
//! Builds the full panel set for a validated [`BoxSpec`] and drives an
//! external modeling backend to realize each outline as a solid. The
//! backend interface is deliberately thin: extrude an outline to a placed
//! solid, and boolean-cut one solid with a set of tools. Everything else
//! (sketching, feature history, persistence) stays on the backend's side
//! of the seam.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{BoxError, Result};
use crate::finger::FingerPattern;
use crate::geometry::{Outline, Rect};
use crate::outline::{build_outline, EdgeProfile};
use crate::panel::{
    adjacency, edge_insets, edge_start_insets, face_rect, panel_rect, EdgeRole, PanelEdge,
    PanelKind,
};
use crate::report::{EdgeSummary, GenerationReport, PanelReport};
use crate::spec::{BoxSpec, OuterDimensions};

/// The plane a panel's local 2D frame maps onto in the box frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelPlane {
    /// Local x → box x, local y → box y (base, lid).
    Xy,
    /// Local x → box x, local y → box z (front, back).
    Xz,
    /// Local x → box y, local y → box z (left, right).
    Yz,
}

/// Which way the panel is extruded off its plane, along the plane normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtrudeDirection {
    Positive,
    Negative,
}

/// A panel's position and orientation in the box's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub plane: PanelPlane,
    /// Where the panel's local origin sits in the box frame.
    pub origin: [f64; 3],
    pub direction: ExtrudeDirection,
}

/// Opaque handle to a solid created by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SolidHandle(pub u64);

/// Boolean combine operation. Only cutting is required of backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombineOp {
    Cut,
}

/// The two capabilities the orchestrator needs from a modeling backend.
///
/// Calls are synchronous and ordered: an extrusion must complete before
/// its handle is used as a combine target or tool. Failures are final for
/// the generation attempt; identical inputs against a deterministic
/// backend will not succeed on retry, so none is attempted.
pub trait ModelingBackend {
    fn extrude(
        &mut self,
        outline: &Outline,
        thickness: f64,
        placement: &Placement,
    ) -> std::result::Result<SolidHandle, String>;

    fn combine(
        &mut self,
        target: SolidHandle,
        tools: &[SolidHandle],
        op: CombineOp,
    ) -> std::result::Result<(), String>;
}

/// One generated panel: flat body rectangle (inset from the box face on
/// tab-owning edges), per-edge joint profiles, the final cut outline, and
/// its placement in the box frame.
#[derive(Debug, Clone)]
pub struct Panel {
    pub kind: PanelKind,
    pub rect: Rect,
    pub edges: [EdgeProfile; 4],
    pub outline: Outline,
    pub placement: Placement,
}

/// All panels for one generation run.
#[derive(Debug, Clone)]
pub struct PanelSet {
    pub panels: Vec<Panel>,
    pub outer: OuterDimensions,
    pub thickness: f64,
}

impl PanelSet {
    pub fn get(&self, kind: PanelKind) -> Option<&Panel> {
        self.panels.iter().find(|p| p.kind == kind)
    }
}

/// Box-frame position of a panel's local origin. Side panel bodies start
/// one thickness in from the inset face boundaries, so their origins sit
/// above the base and, for front/back, past the left panel's face.
fn placement_for(kind: PanelKind, outer: &OuterDimensions, thickness: f64) -> Placement {
    match kind {
        PanelKind::Base => Placement {
            plane: PanelPlane::Xy,
            origin: [0.0, 0.0, 0.0],
            direction: ExtrudeDirection::Positive,
        },
        PanelKind::Lid => Placement {
            plane: PanelPlane::Xy,
            origin: [0.0, 0.0, outer.height],
            direction: ExtrudeDirection::Negative,
        },
        PanelKind::Front => Placement {
            plane: PanelPlane::Xz,
            origin: [thickness, 0.0, thickness],
            direction: ExtrudeDirection::Positive,
        },
        PanelKind::Back => Placement {
            plane: PanelPlane::Xz,
            origin: [thickness, outer.width, thickness],
            direction: ExtrudeDirection::Negative,
        },
        PanelKind::Left => Placement {
            plane: PanelPlane::Yz,
            origin: [0.0, 0.0, thickness],
            direction: ExtrudeDirection::Positive,
        },
        PanelKind::Right => Placement {
            plane: PanelPlane::Yz,
            origin: [outer.length, 0.0, thickness],
            direction: ExtrudeDirection::Negative,
        },
    }
}

/// Orchestrates one box generation run. Holds a validated spec; all
/// derived geometry is recomputed on every call, never cached.
pub struct BoxAssembler {
    spec: BoxSpec,
}

impl BoxAssembler {
    pub fn new(spec: BoxSpec) -> Result<Self> {
        spec.validate()?;
        Ok(Self { spec })
    }

    pub fn spec(&self) -> &BoxSpec {
        &self.spec
    }

    /// Build the five or six panel outlines plus the generation report.
    /// Pure: no backend interaction.
    pub fn build_panels(&self) -> Result<(PanelSet, GenerationReport)> {
        let outer = self.spec.outer_dimensions();
        let thickness = self.spec.thickness;
        let scale = self.spec.finger_scale;

        let mut panels = Vec::new();
        let mut report = GenerationReport::default();

        for kind in PanelKind::all(self.spec.has_lid) {
            let face = face_rect(kind, &outer);
            let rect = panel_rect(kind, &outer, thickness, self.spec.has_lid);
            let start_insets =
                edge_start_insets(edge_insets(kind, thickness, self.spec.has_lid));
            let assignments = adjacency(kind, self.spec.has_lid);

            let mut edges: [EdgeProfile; 4] = Default::default();
            let mut edge_summaries = Vec::new();

            for (i, edge) in PanelEdge::ALL.iter().enumerate() {
                let assignment = assignments[i];
                if assignment.role != EdgeRole::Free && assignment.mate.is_none() {
                    return Err(BoxError::Topology {
                        panel: kind.name().to_string(),
                        detail: format!("{} edge is jointed but has no mate", edge.name()),
                    });
                }

                // Both mates pattern the full shared box edge, not their
                // inset bodies, so the tab and slot boundaries coincide.
                let length = edge.length(face);
                let pattern = if assignment.role == EdgeRole::Free {
                    None
                } else {
                    let pattern = FingerPattern::compute(length, thickness, scale);
                    if pattern.is_none() {
                        let message = format!(
                            "{}/{}: edge too short for finger joints ({length:.3} with thickness {thickness:.3})",
                            kind.name(),
                            edge.name()
                        );
                        warn!("{message}");
                        report.warnings.push(message);
                    }
                    pattern
                };

                let (role_text, detail) = match (&assignment.role, &pattern) {
                    (EdgeRole::TabOwner, Some(p)) => ("tabs", p.summary()),
                    (EdgeRole::SlotOwner, Some(p)) => ("slots", p.summary()),
                    _ => ("flat", String::new()),
                };
                edge_summaries.push(EdgeSummary {
                    edge: edge.name(),
                    role: role_text,
                    detail,
                });

                edges[i] = EdgeProfile {
                    role: assignment.role,
                    pattern,
                    start_inset: start_insets[i],
                };
            }

            let outline = build_outline(rect, &edges);
            if !outline.is_simple() {
                return Err(BoxError::Topology {
                    panel: kind.name().to_string(),
                    detail: "generated outline self-intersects".to_string(),
                });
            }

            debug!(
                panel = kind.name(),
                points = outline.len(),
                "built panel outline"
            );

            report.panels.push(PanelReport {
                name: kind.name(),
                width: rect.width,
                height: rect.height,
                edges: edge_summaries,
            });

            panels.push(Panel {
                kind,
                rect,
                edges,
                outline,
                placement: placement_for(kind, &outer, thickness),
            });
        }

        Ok((
            PanelSet {
                panels,
                outer,
                thickness,
            },
            report,
        ))
    }

    /// Build the panels and realize them as solids through the backend.
    ///
    /// Each panel is extruded to stock thickness at its placement, then
    /// any residual corner material is resolved by boolean cuts in a fixed
    /// two-pass order: side-vs-side first (establishing final side
    /// geometry), then sides against base/lid and base/lid against the
    /// four sides.
    pub fn generate(
        &self,
        backend: &mut dyn ModelingBackend,
    ) -> Result<(PanelSet, GenerationReport)> {
        let (set, report) = self.build_panels()?;

        let mut handles: Vec<(PanelKind, SolidHandle)> = Vec::new();
        for panel in &set.panels {
            let handle = backend
                .extrude(&panel.outline, set.thickness, &panel.placement)
                .map_err(|detail| BoxError::Backend {
                    panel: panel.kind.name().to_string(),
                    detail,
                })?;
            handles.push((panel.kind, handle));
        }

        let handle = |kind: PanelKind| handles.iter().find(|(k, _)| *k == kind).map(|(_, h)| *h);
        let cut = |backend: &mut dyn ModelingBackend,
                   target: PanelKind,
                   tools: &[PanelKind]|
         -> Result<()> {
            let Some(target_handle) = handle(target) else {
                return Ok(());
            };
            let tool_handles: Vec<SolidHandle> = tools.iter().filter_map(|&k| handle(k)).collect();
            if tool_handles.is_empty() {
                return Ok(());
            }
            backend
                .combine(target_handle, &tool_handles, CombineOp::Cut)
                .map_err(|detail| BoxError::Backend {
                    panel: target.name().to_string(),
                    detail,
                })
        };

        use PanelKind::*;

        // Pass 1: side-vs-side. Left/right lose the overlap to the
        // tab-owning front/back.
        for target in [Left, Right] {
            cut(backend, target, &[Front, Back])?;
        }

        // Pass 2: sides shed the base/lid overlap, then base and lid are
        // cut by the now-final side geometry.
        for target in [Front, Back, Left, Right] {
            cut(backend, target, &[Base, Lid])?;
        }
        for target in [Base, Lid] {
            cut(backend, target, &[Front, Back, Left, Right])?;
        }

        Ok((set, report))
    }
}

/// Backend stand-in that records every call and hands out sequential
/// handles. Used by tests and the CLI; a real CAD kernel is out of scope.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    next_handle: u64,
    pub calls: Vec<BackendCall>,
}

/// One recorded backend invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    Extrude {
        handle: SolidHandle,
        points: usize,
        thickness: f64,
        placement: Placement,
    },
    Combine {
        target: SolidHandle,
        tools: Vec<SolidHandle>,
        op: CombineOp,
    },
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ModelingBackend for RecordingBackend {
    fn extrude(
        &mut self,
        outline: &Outline,
        thickness: f64,
        placement: &Placement,
    ) -> std::result::Result<SolidHandle, String> {
        if outline.len() < 3 {
            return Err(format!("degenerate outline with {} points", outline.len()));
        }
        let handle = SolidHandle(self.next_handle);
        self.next_handle += 1;
        self.calls.push(BackendCall::Extrude {
            handle,
            points: outline.len(),
            thickness,
            placement: *placement,
        });
        Ok(handle)
    }

    fn combine(
        &mut self,
        target: SolidHandle,
        tools: &[SolidHandle],
        op: CombineOp,
    ) -> std::result::Result<(), String> {
        self.calls.push(BackendCall::Combine {
            target,
            tools: tools.to_vec(),
            op,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::DimensionMode;

    fn spec() -> BoxSpec {
        BoxSpec {
            length: 120.0,
            width: 80.0,
            height: 50.0,
            thickness: 3.0,
            has_lid: true,
            finger_scale: 5,
            dimension_mode: DimensionMode::Outer,
        }
    }

    #[test]
    fn test_six_panels_with_lid_five_without() {
        let (set, _) = BoxAssembler::new(spec()).unwrap().build_panels().unwrap();
        assert_eq!(set.panels.len(), 6);

        let open = BoxSpec {
            has_lid: false,
            ..spec()
        };
        let (set, _) = BoxAssembler::new(open).unwrap().build_panels().unwrap();
        assert_eq!(set.panels.len(), 5);
        assert!(set.get(PanelKind::Lid).is_none());
    }

    #[test]
    fn test_invalid_spec_is_rejected_before_geometry() {
        let bad = BoxSpec {
            thickness: 0.0,
            ..spec()
        };
        assert!(matches!(
            BoxAssembler::new(bad),
            Err(BoxError::InvalidSpec { .. })
        ));
    }

    #[test]
    fn test_mating_edges_share_identical_patterns() {
        let (set, _) = BoxAssembler::new(spec()).unwrap().build_panels().unwrap();

        // front bottom (tabs) vs base bottom (slots): same pattern data.
        let front = set.get(PanelKind::Front).unwrap();
        let base = set.get(PanelKind::Base).unwrap();
        let front_bottom = front.edges[PanelEdge::Bottom as usize]
            .pattern
            .as_ref()
            .unwrap();
        let base_bottom = base.edges[PanelEdge::Bottom as usize]
            .pattern
            .as_ref()
            .unwrap();
        assert_eq!(front_bottom, base_bottom);
        assert_eq!(
            front.edges[PanelEdge::Bottom as usize].role,
            EdgeRole::TabOwner
        );
        assert_eq!(
            base.edges[PanelEdge::Bottom as usize].role,
            EdgeRole::SlotOwner
        );
    }

    #[test]
    fn test_every_outline_is_simple_and_ccw() {
        let (set, _) = BoxAssembler::new(spec()).unwrap().build_panels().unwrap();
        for panel in &set.panels {
            assert!(panel.outline.is_simple(), "panel {}", panel.kind);
            assert!(panel.outline.signed_area() > 0.0, "panel {}", panel.kind);
        }
    }

    #[test]
    fn test_short_edges_degrade_with_warnings() {
        // 10mm tall box with 3mm stock: vertical edges are 10 > 9, fine;
        // shrink height so side joints become unjointable.
        let squat = BoxSpec {
            height: 8.0,
            ..spec()
        };
        let (set, report) = BoxAssembler::new(squat).unwrap().build_panels().unwrap();
        assert!(!report.warnings.is_empty());
        // Degraded edges still produce panels with straight edges.
        let front = set.get(PanelKind::Front).unwrap();
        assert!(front.edges[PanelEdge::Right as usize].pattern.is_none());
        assert!(front.outline.is_simple());
    }

    #[test]
    fn test_generation_is_deterministic() {
        let assembler = BoxAssembler::new(spec()).unwrap();
        let (a, ra) = assembler.build_panels().unwrap();
        let (b, rb) = assembler.build_panels().unwrap();
        assert_eq!(ra, rb);
        for (pa, pb) in a.panels.iter().zip(&b.panels) {
            assert_eq!(pa.outline, pb.outline);
        }
    }

    #[test]
    fn test_backend_failure_carries_panel_context() {
        struct FailingBackend;
        impl ModelingBackend for FailingBackend {
            fn extrude(
                &mut self,
                _outline: &Outline,
                _thickness: f64,
                _placement: &Placement,
            ) -> std::result::Result<SolidHandle, String> {
                Err("kernel rejected profile".to_string())
            }
            fn combine(
                &mut self,
                _target: SolidHandle,
                _tools: &[SolidHandle],
                _op: CombineOp,
            ) -> std::result::Result<(), String> {
                Ok(())
            }
        }

        let err = BoxAssembler::new(spec())
            .unwrap()
            .generate(&mut FailingBackend)
            .unwrap_err();
        assert!(matches!(err, BoxError::Backend { ref panel, .. } if panel == "base"));
    }
}
