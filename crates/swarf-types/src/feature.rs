use serde::{Deserialize, Serialize};

use crate::axis::AxisDef;

/// Smallest allowed turning-profile point count.
pub const TURN_PROFILE_MIN: usize = 2;
/// Largest allowed turning-profile point count.
pub const TURN_PROFILE_MAX: usize = 64;

/// One station of a turning profile: axial offset along the turning axis and
/// target radius. Consecutive points define one machining segment at the
/// first point's radius (piecewise-constant radius-vs-position).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    pub z: f64,
    pub radius: f64,
}

/// A turning pass: either a single target diameter over a length, or a
/// multi-segment radius profile along the axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TurnPass {
    Single { target_diameter: f64, length: f64 },
    Profile { points: Vec<ProfilePoint> },
}

/// A declarative machining feature to apply against a stock shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Feature {
    /// Cylindrical hole: the axis is the drill axis.
    Drill { radius: f64, depth: f64, axis: AxisDef },
    /// Rectangular pocket centered on the axis origin, sides aligned to the
    /// axis secondary direction and its cross product.
    PocketRect {
        width: f64,
        height: f64,
        depth: f64,
        axis: AxisDef,
    },
    /// Outer-diameter turning: removes everything outside the target radius.
    TurnOd { pass: TurnPass, axis: AxisDef },
    /// Inner-diameter turning (boring): removes everything inside the target
    /// radius.
    TurnId { pass: TurnPass, axis: AxisDef },
}

impl Feature {
    /// Feature tag name, for logs and error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Feature::Drill { .. } => "DRILL",
            Feature::PocketRect { .. } => "POCKET_RECT",
            Feature::TurnOd { .. } => "TURN_OD",
            Feature::TurnId { .. } => "TURN_ID",
        }
    }
}
