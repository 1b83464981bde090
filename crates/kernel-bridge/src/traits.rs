use crate::frame::Frame;
use crate::types::{Aabb, KernelError, KernelSolidHandle, RenderMesh};

/// Geometry-kernel boundary trait.
///
/// Captures exactly the capabilities the machining pipeline consumes:
/// primitive construction at a frame, the three boolean operators, a
/// bounding-box query, tessellation and STEP transfer. Implemented by
/// [`crate::TruckKernel`] (real) and [`crate::MockKernel`] (deterministic
/// test double).
pub trait Kernel {
    /// Box with one corner at the frame origin, extending `w`/`h`/`d` along
    /// the frame axes.
    fn make_box(
        &mut self,
        frame: &Frame,
        w: f64,
        h: f64,
        d: f64,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Cylinder with its base centered at the frame origin, extending
    /// `height` along the frame z axis.
    fn make_cylinder(
        &mut self,
        frame: &Frame,
        radius: f64,
        height: f64,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Boolean difference a − b.
    fn boolean_cut(
        &mut self,
        a: &KernelSolidHandle,
        b: &KernelSolidHandle,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Boolean intersection a ∩ b.
    fn boolean_common(
        &mut self,
        a: &KernelSolidHandle,
        b: &KernelSolidHandle,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Boolean union a ∪ b.
    fn boolean_fuse(
        &mut self,
        a: &KernelSolidHandle,
        b: &KernelSolidHandle,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Axis-aligned bounding box of a solid. A void box is an error the
    /// caller must handle.
    fn bounding_box(&self, solid: &KernelSolidHandle) -> Result<Aabb, KernelError>;

    /// Tessellate a solid to a triangle mesh. The angular deflection and
    /// parallel flag are hints; a backend may honor only the linear
    /// deflection.
    fn tessellate(
        &mut self,
        solid: &KernelSolidHandle,
        linear_deflection: f64,
        angular_deflection: f64,
        parallel: bool,
    ) -> Result<RenderMesh, KernelError>;

    /// Serialize a solid to STEP text (the transfer stage of exact export).
    fn export_step(&self, solid: &KernelSolidHandle) -> Result<String, KernelError>;

    /// Drop a stored solid. Returns false if the handle is unknown.
    fn release(&mut self, solid: &KernelSolidHandle) -> bool;
}
