use serde::{Deserialize, Serialize};

/// Public identifier of a registry-owned shape.
///
/// Positive, minted monotonically within a session and never reused. Zero is
/// the reserved "no shape" sentinel and never resolves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ShapeId(pub i32);

impl ShapeId {
    /// Sentinel meaning "no shape".
    pub const NULL: ShapeId = ShapeId(0);

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}
