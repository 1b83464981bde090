//! Tessellation wrapper around truck-meshalgo.

use truck_meshalgo::prelude::*;
use truck_meshalgo::tessellation::{MeshableShape, MeshedShape};

use crate::types::{KernelError, RenderMesh};

type TruckSolid = truck_modeling::Solid;

/// Tessellate a solid into a flat triangle mesh at the given tolerance.
///
/// An empty triangulation is reported as a failure rather than an empty
/// mesh, so downstream writers never produce hollow files silently.
pub fn tessellate_solid(solid: &TruckSolid, tolerance: f64) -> Result<RenderMesh, KernelError> {
    if tolerance <= 0.0 {
        return Err(KernelError::TessellationFailed {
            reason: format!("deflection must be positive, got {tolerance}"),
        });
    }

    let meshed = solid.triangulation(tolerance);
    let mesh = meshed.to_polygon();

    let positions = mesh.positions();
    let normals = mesh.normals();
    let tri_faces = mesh.tri_faces();

    let mut vertices = Vec::with_capacity(positions.len() * 3);
    let mut norms = Vec::with_capacity(positions.len() * 3);
    let mut indices = Vec::with_capacity(tri_faces.len() * 3);

    for pos in positions {
        vertices.push(pos[0] as f32);
        vertices.push(pos[1] as f32);
        vertices.push(pos[2] as f32);
    }

    if normals.is_empty() {
        for _ in 0..positions.len() {
            norms.extend_from_slice(&[0.0, 0.0, 1.0]);
        }
    } else {
        for norm in normals {
            norms.push(norm[0] as f32);
            norms.push(norm[1] as f32);
            norms.push(norm[2] as f32);
        }
    }

    for tri in tri_faces {
        for v in tri.iter() {
            indices.push(v.pos as u32);
        }
    }

    if indices.is_empty() {
        return Err(KernelError::TessellationFailed {
            reason: "triangulation produced no triangles".to_string(),
        });
    }

    Ok(RenderMesh {
        vertices,
        normals: norms,
        indices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Frame;
    use crate::primitives;

    #[test]
    fn box_tessellates_to_nonempty_mesh() {
        let solid = primitives::make_box(&Frame::world(), 1.0, 1.0, 1.0);
        let mesh = tessellate_solid(&solid, 0.1).unwrap();

        assert!(mesh.triangle_count() >= 12, "box needs at least 12 triangles");
        assert_eq!(mesh.vertices.len(), mesh.normals.len());
        let vertex_count = (mesh.vertices.len() / 3) as u32;
        assert!(mesh.indices.iter().all(|&i| i < vertex_count));
    }

    #[test]
    fn non_positive_deflection_is_rejected() {
        let solid = primitives::make_box(&Frame::world(), 1.0, 1.0, 1.0);
        let err = tessellate_solid(&solid, 0.0).unwrap_err();
        assert!(matches!(err, KernelError::TessellationFailed { .. }));
    }
}
