//! Primitive solid builders on top of truck's sweep API.
//!
//! truck has no built-in box/cylinder — both are built by successive sweeps
//! in frame-local coordinates and mapped into the frame afterwards.

use std::f64::consts::PI;

use truck_modeling::builder;
use truck_modeling::topology::Solid;
use truck_modeling::{EuclideanSpace, Point3, Rad, Vector3};

use crate::frame::Frame;
use crate::types::KernelError;

/// Box with one corner at the frame origin, extending `w`/`h`/`d` along the
/// frame's x/y/z axes.
pub fn make_box(frame: &Frame, w: f64, h: f64, d: f64) -> Solid {
    let v = builder::vertex(Point3::new(0.0, 0.0, 0.0));
    let edge = builder::tsweep(&v, Vector3::new(w, 0.0, 0.0));
    let face = builder::tsweep(&edge, Vector3::new(0.0, h, 0.0));
    let solid = builder::tsweep(&face, Vector3::new(0.0, 0.0, d));
    builder::transformed(&solid, frame.matrix())
}

/// Cylinder with its base disc centered at the frame origin, extending
/// `height` along the frame's z axis.
pub fn make_cylinder(frame: &Frame, radius: f64, height: f64) -> Result<Solid, KernelError> {
    let v = builder::vertex(Point3::new(radius, 0.0, 0.0));
    let wire = builder::rsweep(&v, Point3::origin(), Vector3::unit_z(), Rad(2.0 * PI));
    let face = builder::try_attach_plane(&[wire]).map_err(|e| KernelError::Other {
        message: format!("failed to attach circular face: {e}"),
    })?;
    let solid = builder::tsweep(&face, Vector3::new(0.0, 0.0, height));
    Ok(builder::transformed(&solid, frame.matrix()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_topology_counts() {
        let solid = make_box(&Frame::world(), 1.0, 2.0, 3.0);

        let boundaries = solid.boundaries();
        assert_eq!(boundaries.len(), 1, "box should have 1 shell");

        let shell = &boundaries[0];
        let faces: Vec<_> = shell.face_iter().collect();

        let mut edge_ids = std::collections::HashSet::new();
        for edge in shell.edge_iter() {
            edge_ids.insert(edge.id());
        }
        let mut vert_ids = std::collections::HashSet::new();
        for v in shell.vertex_iter() {
            vert_ids.insert(v.id());
        }

        assert_eq!(faces.len(), 6);
        assert_eq!(edge_ids.len(), 12);
        assert_eq!(vert_ids.len(), 8);

        // Euler's formula: V - E + F = 2.
        let v = vert_ids.len() as i64;
        let e = edge_ids.len() as i64;
        let f = faces.len() as i64;
        assert_eq!(v - e + f, 2);
    }

    #[test]
    fn box_respects_frame_placement() {
        let frame = Frame::from_axis([5.0, 5.0, 5.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]).unwrap();
        let solid = make_box(&frame, 2.0, 2.0, 2.0);

        let shell = &solid.boundaries()[0];
        let mut min = [f64::MAX; 3];
        let mut max = [f64::MIN; 3];
        for v in shell.vertex_iter() {
            let p = v.point();
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }

        let eps = 1e-10;
        for i in 0..3 {
            assert!((min[i] - 5.0).abs() < eps);
            assert!((max[i] - 7.0).abs() < eps);
        }
    }

    #[test]
    fn cylinder_has_at_least_three_faces() {
        let solid = make_cylinder(&Frame::world(), 1.0, 2.0).unwrap();

        let boundaries = solid.boundaries();
        assert_eq!(boundaries.len(), 1, "cylinder should have 1 shell");

        let faces: Vec<_> = boundaries[0].face_iter().collect();
        // truck may split the side surface; at minimum top + bottom + side.
        assert!(faces.len() >= 3);
    }
}
