//! Kernel-native placement frames resolved from declarative axis triples.

use truck_modeling::{InnerSpace, Matrix4, Point3, Vector3};

use swarf_types::AxisDef;

use crate::types::KernelError;

const DIR_EPS: f64 = 1e-12;

/// An orthonormal right-handed placement frame.
///
/// The z axis is the primary direction (cylinder axis, box depth), x is the
/// secondary direction re-orthogonalized against z, and y completes the
/// triad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub origin: Point3,
    pub x: Vector3,
    pub y: Vector3,
    pub z: Vector3,
}

impl Frame {
    /// Resolve a declarative axis into a frame.
    ///
    /// Directions need not be unit length. A zero-length primary direction,
    /// or a secondary direction that is zero or parallel to the primary, is
    /// rejected here; the layers above do not pre-validate.
    pub fn from_axis(
        origin: [f64; 3],
        dir: [f64; 3],
        xdir: [f64; 3],
    ) -> Result<Self, KernelError> {
        let z = Vector3::new(dir[0], dir[1], dir[2]);
        if z.magnitude2() < DIR_EPS {
            return Err(KernelError::DegenerateFrame {
                reason: "primary direction has zero length".to_string(),
            });
        }
        let z = z.normalize();

        let x_raw = Vector3::new(xdir[0], xdir[1], xdir[2]);
        let x = x_raw - z * x_raw.dot(z);
        if x.magnitude2() < DIR_EPS {
            return Err(KernelError::DegenerateFrame {
                reason: "secondary direction is zero or parallel to the primary".to_string(),
            });
        }
        let x = x.normalize();
        let y = z.cross(x);

        Ok(Self {
            origin: Point3::new(origin[0], origin[1], origin[2]),
            x,
            y,
            z,
        })
    }

    /// Resolve an [`AxisDef`] into a frame.
    pub fn resolve(axis: &AxisDef) -> Result<Self, KernelError> {
        Self::from_axis(axis.origin, axis.dir, axis.xdir)
    }

    /// World frame: origin at zero, axes along the global directions.
    pub fn world() -> Self {
        Self {
            origin: Point3::new(0.0, 0.0, 0.0),
            x: Vector3::new(1.0, 0.0, 0.0),
            y: Vector3::new(0.0, 1.0, 0.0),
            z: Vector3::new(0.0, 0.0, 1.0),
        }
    }

    /// Frame shifted along its own z axis.
    pub fn offset_along_z(&self, offset: f64) -> Self {
        Self {
            origin: self.origin + self.z * offset,
            ..*self
        }
    }

    /// Frame shifted within its own x/y plane.
    pub fn translated_in_plane(&self, dx: f64, dy: f64) -> Self {
        Self {
            origin: self.origin + self.x * dx + self.y * dy,
            ..*self
        }
    }

    /// Homogeneous matrix mapping frame-local coordinates into the world.
    pub fn matrix(&self) -> Matrix4 {
        Matrix4::from_cols(
            self.x.extend(0.0),
            self.y.extend(0.0),
            self.z.extend(0.0),
            self.origin.to_homogeneous(),
        )
    }
}
