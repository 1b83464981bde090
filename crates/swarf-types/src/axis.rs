use serde::{Deserialize, Serialize};

/// Declarative placement: an origin plus primary and secondary directions.
///
/// Direction vectors are consumed as given; the kernel layer normalizes them
/// and rejects zero-length or parallel pairs when the axis is resolved into
/// a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDef {
    pub origin: [f64; 3],
    /// Primary direction: cylinder axis, box depth.
    pub dir: [f64; 3],
    /// Secondary direction: box width, pocket rectangle side.
    pub xdir: [f64; 3],
}

impl AxisDef {
    /// Axis at the world origin, +Z primary, +X secondary.
    pub fn world() -> Self {
        Self {
            origin: [0.0; 3],
            dir: [0.0, 0.0, 1.0],
            xdir: [1.0, 0.0, 0.0],
        }
    }
}
