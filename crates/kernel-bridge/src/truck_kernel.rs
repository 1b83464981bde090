//! TruckKernel — real geometry kernel wrapping truck's API.

use std::collections::HashMap;

use truck_modeling::topology::Solid;

use crate::bbox;
use crate::frame::Frame;
use crate::primitives;
use crate::step;
use crate::tessellation;
use crate::traits::Kernel;
use crate::types::*;

/// Tolerance handed to truck-shapeops boolean operators.
const BOOLEAN_TOLERANCE: f64 = 0.05;

/// Real geometry kernel backed by the truck B-rep crates.
pub struct TruckKernel {
    next_handle: u64,
    solids: HashMap<u64, Solid>,
}

impl TruckKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            solids: HashMap::new(),
        }
    }

    fn store_solid(&mut self, solid: Solid) -> KernelSolidHandle {
        let handle = KernelSolidHandle(self.next_handle);
        self.next_handle += 1;
        self.solids.insert(handle.id(), solid);
        handle
    }

    fn get_solid(&self, handle: &KernelSolidHandle) -> Result<&Solid, KernelError> {
        self.solids
            .get(&handle.id())
            .ok_or(KernelError::SolidNotFound { id: handle.id() })
    }

    /// Number of solids currently stored.
    pub fn live_solids(&self) -> usize {
        self.solids.len()
    }
}

impl Default for TruckKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel for TruckKernel {
    fn make_box(
        &mut self,
        frame: &Frame,
        w: f64,
        h: f64,
        d: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        let solid = primitives::make_box(frame, w, h, d);
        Ok(self.store_solid(solid))
    }

    fn make_cylinder(
        &mut self,
        frame: &Frame,
        radius: f64,
        height: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        let solid = primitives::make_cylinder(frame, radius, height)?;
        Ok(self.store_solid(solid))
    }

    fn boolean_cut(
        &mut self,
        a: &KernelSolidHandle,
        b: &KernelSolidHandle,
    ) -> Result<KernelSolidHandle, KernelError> {
        let solid_a = self.get_solid(a)?.clone();
        let mut solid_b = self.get_solid(b)?.clone();

        // Subtraction = A ∩ ¬B. not() mutates in place.
        solid_b.not();
        let result = truck_shapeops::and(&solid_a, &solid_b, BOOLEAN_TOLERANCE).ok_or_else(
            || KernelError::BooleanFailed {
                reason: "truck and() returned None for subtraction".to_string(),
            },
        )?;
        Ok(self.store_solid(result))
    }

    fn boolean_common(
        &mut self,
        a: &KernelSolidHandle,
        b: &KernelSolidHandle,
    ) -> Result<KernelSolidHandle, KernelError> {
        let solid_a = self.get_solid(a)?.clone();
        let solid_b = self.get_solid(b)?.clone();

        let result = truck_shapeops::and(&solid_a, &solid_b, BOOLEAN_TOLERANCE).ok_or_else(
            || KernelError::BooleanFailed {
                reason: "truck and() returned None".to_string(),
            },
        )?;
        Ok(self.store_solid(result))
    }

    fn boolean_fuse(
        &mut self,
        a: &KernelSolidHandle,
        b: &KernelSolidHandle,
    ) -> Result<KernelSolidHandle, KernelError> {
        let solid_a = self.get_solid(a)?.clone();
        let solid_b = self.get_solid(b)?.clone();

        let result = truck_shapeops::or(&solid_a, &solid_b, BOOLEAN_TOLERANCE).ok_or_else(
            || KernelError::BooleanFailed {
                reason: "truck or() returned None".to_string(),
            },
        )?;
        Ok(self.store_solid(result))
    }

    fn bounding_box(&self, solid: &KernelSolidHandle) -> Result<Aabb, KernelError> {
        bbox::solid_bounding_box(self.get_solid(solid)?)
    }

    fn tessellate(
        &mut self,
        solid: &KernelSolidHandle,
        linear_deflection: f64,
        _angular_deflection: f64,
        _parallel: bool,
    ) -> Result<RenderMesh, KernelError> {
        // truck's mesher takes a single tolerance; the angular deflection and
        // parallel hint have no counterpart there.
        let truck_solid = self.get_solid(solid)?;
        tessellation::tessellate_solid(truck_solid, linear_deflection)
    }

    fn export_step(&self, solid: &KernelSolidHandle) -> Result<String, KernelError> {
        step::solid_to_step(self.get_solid(solid)?)
    }

    fn release(&mut self, solid: &KernelSolidHandle) -> bool {
        self.solids.remove(&solid.id()).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_monotonic_and_released_once() {
        let mut kernel = TruckKernel::new();
        let a = kernel.make_box(&Frame::world(), 1.0, 1.0, 1.0).unwrap();
        let b = kernel.make_box(&Frame::world(), 2.0, 2.0, 2.0).unwrap();

        assert!(b.id() > a.id());
        assert_eq!(kernel.live_solids(), 2);

        assert!(kernel.release(&a));
        assert!(!kernel.release(&a));
        assert_eq!(kernel.live_solids(), 1);
    }

    #[test]
    fn bounding_box_of_placed_box() {
        let mut kernel = TruckKernel::new();
        let frame =
            Frame::from_axis([1.0, 2.0, 3.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]).unwrap();
        let handle = kernel.make_box(&frame, 4.0, 5.0, 6.0).unwrap();

        let aabb = kernel.bounding_box(&handle).unwrap();
        let eps = 1e-9;
        assert!((aabb.min[0] - 1.0).abs() < eps);
        assert!((aabb.max[0] - 5.0).abs() < eps);
        assert!((aabb.min[1] - 2.0).abs() < eps);
        assert!((aabb.max[1] - 7.0).abs() < eps);
        assert!((aabb.min[2] - 3.0).abs() < eps);
        assert!((aabb.max[2] - 9.0).abs() < eps);
    }

    #[test]
    fn unknown_handle_is_an_error() {
        let kernel = TruckKernel::new();
        let bogus = KernelSolidHandle(42);
        assert!(matches!(
            kernel.bounding_box(&bogus),
            Err(KernelError::SolidNotFound { id: 42 })
        ));
    }
}
