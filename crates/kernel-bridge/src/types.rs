use serde::{Deserialize, Serialize};

/// Opaque handle to a solid stored inside the geometry kernel.
/// Valid only for the kernel instance that minted it. NEVER persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KernelSolidHandle(pub u64);

impl KernelSolidHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Errors from kernel operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KernelError {
    #[error("boolean operation failed: {reason}")]
    BooleanFailed { reason: String },

    #[error("tessellation failed: {reason}")]
    TessellationFailed { reason: String },

    #[error("STEP transfer failed: {reason}")]
    StepFailed { reason: String },

    #[error("degenerate frame: {reason}")]
    DegenerateFrame { reason: String },

    #[error("solid not found: handle {id}")]
    SolidNotFound { id: u64 },

    #[error("bounding box is void")]
    EmptyBoundingBox,

    #[error("kernel error: {message}")]
    Other { message: String },
}

/// Axis-aligned bounding box: min and max per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Aabb {
    /// Span along each axis.
    pub fn spans(&self) -> [f64; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }

    /// Largest of the three axis spans.
    pub fn max_span(&self) -> f64 {
        let [sx, sy, sz] = self.spans();
        sx.max(sy).max(sz)
    }

    /// True when any axis has max below min.
    pub fn is_void(&self) -> bool {
        (0..3).any(|i| self.max[i] < self.min[i])
    }
}

/// Tessellated triangle mesh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderMesh {
    /// Flat array of vertex positions [x0, y0, z0, x1, y1, z1, ...].
    pub vertices: Vec<f32>,
    /// Flat array of vertex normals, same layout as `vertices`.
    pub normals: Vec<f32>,
    /// Triangle indices into the vertex array.
    pub indices: Vec<u32>,
}

impl RenderMesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
