//! Box specification and validation.

use serde::{Deserialize, Serialize};

use crate::error::{BoxError, Result};

/// Whether the user-supplied dimensions describe the box's external
/// envelope or its internal cavity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionMode {
    Outer,
    Inner,
}

impl Default for DimensionMode {
    fn default() -> Self {
        Self::Outer
    }
}

/// Outer envelope dimensions after any inner-to-outer conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OuterDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// Parameters for one box generation run. Immutable once constructed;
/// every derived value (finger patterns, outlines) is recomputed from it
/// on each run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// Material (stock) thickness. Also the tab depth.
    pub thickness: f64,
    /// Generate a lid panel jointed to the sides it touches.
    pub has_lid: bool,
    /// Target finger length as a multiple of thickness. A target, not a
    /// guarantee; the layout engine adjusts to fit.
    pub finger_scale: u32,
    #[serde(default)]
    pub dimension_mode: DimensionMode,
}

impl Default for BoxSpec {
    fn default() -> Self {
        Self {
            length: 100.0,
            width: 100.0,
            height: 100.0,
            thickness: 3.0,
            has_lid: true,
            finger_scale: 5,
            dimension_mode: DimensionMode::Outer,
        }
    }
}

impl BoxSpec {
    /// Outer envelope dimensions. Inner dimensions grow by one material
    /// thickness per enclosing panel: two on length and width, one on
    /// height for the base, and one more for the lid when present.
    pub fn outer_dimensions(&self) -> OuterDimensions {
        match self.dimension_mode {
            DimensionMode::Outer => OuterDimensions {
                length: self.length,
                width: self.width,
                height: self.height,
            },
            DimensionMode::Inner => {
                let mut height = self.height + self.thickness;
                if self.has_lid {
                    height += self.thickness;
                }
                OuterDimensions {
                    length: self.length + 2.0 * self.thickness,
                    width: self.width + 2.0 * self.thickness,
                    height,
                }
            }
        }
    }

    /// Reject specs that can never produce a box, before any geometry is
    /// attempted. A panel dimension must exceed twice the material
    /// thickness or no finger pattern fits anywhere.
    pub fn validate(&self) -> Result<()> {
        if !(self.thickness > 0.0) {
            return Err(BoxError::InvalidSpec {
                name: "thickness",
                value: self.thickness,
                reason: "must be positive".to_string(),
            });
        }
        if self.finger_scale < 1 {
            return Err(BoxError::InvalidSpec {
                name: "finger_scale",
                value: self.finger_scale as f64,
                reason: "must be at least 1".to_string(),
            });
        }

        let outer = self.outer_dimensions();
        let min = 2.0 * self.thickness;
        for (name, value) in [
            ("length", outer.length),
            ("width", outer.width),
            ("height", outer.height),
        ] {
            if !(value > min) {
                return Err(BoxError::InvalidSpec {
                    name,
                    value,
                    reason: format!("must exceed twice the thickness ({min})"),
                });
            }
        }
        Ok(())
    }
}
