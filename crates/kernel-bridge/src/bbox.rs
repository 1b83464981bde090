//! Bounding-box queries via edge-curve sampling.
//!
//! Box and cylinder edges touch every extremal plane of the solids this
//! engine produces, so sampling edge curves gives a usable box without a
//! full tessellation pass. Curved faces can bulge slightly past their
//! boundary edges; the callers that consume this box oversize it anyway.

use truck_modeling::{BoundedCurve, ParameterDivision1D};

use crate::types::{Aabb, KernelError};

type TruckSolid = truck_modeling::Solid;

const SAMPLE_TOLERANCE: f64 = 1e-3;

/// Axis-aligned bounding box of a solid. A solid with no sampled points is
/// a void box and an error.
pub fn solid_bounding_box(solid: &TruckSolid) -> Result<Aabb, KernelError> {
    let mut min = [f64::MAX; 3];
    let mut max = [f64::MIN; 3];
    let mut any = false;

    for shell in solid.boundaries().iter() {
        for edge in shell.edge_iter() {
            let curve = edge.oriented_curve();
            let range = curve.range_tuple();
            let (_params, points) = curve.parameter_division(range, SAMPLE_TOLERANCE);
            for pt in &points {
                for i in 0..3 {
                    min[i] = min[i].min(pt[i]);
                    max[i] = max[i].max(pt[i]);
                }
                any = true;
            }
        }
    }

    if !any {
        return Err(KernelError::EmptyBoundingBox);
    }
    Ok(Aabb { min, max })
}
