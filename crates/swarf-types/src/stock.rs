use serde::{Deserialize, Serialize};

use crate::axis::AxisDef;

/// Primitive kind of the raw stock solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockKind {
    Box,
    Cylinder,
}

/// Raw stock description, created once per machining session.
///
/// Box: `p1`/`p2`/`p3` are width/height/depth along the axis frame.
/// Cylinder: `p1` is the radius, `p2` the height, `p3` unused.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockSpec {
    pub kind: StockKind,
    pub p1: f64,
    pub p2: f64,
    pub p3: f64,
    /// Placement frame of the stock.
    pub axis: AxisDef,
}
