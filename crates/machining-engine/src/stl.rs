//! STL encoding of a tessellated mesh — binary and ASCII formats.

use kernel_bridge::RenderMesh;

use crate::error::EngineError;

/// Unit face normal from the triangle's edge cross product. Degenerate
/// triangles get +Z so the file stays well-formed.
fn triangle_normal(mesh: &RenderMesh, tri: &[u32]) -> (f32, f32, f32) {
    let i0 = tri[0] as usize * 3;
    let i1 = tri[1] as usize * 3;
    let i2 = tri[2] as usize * 3;

    let (ax, ay, az) = (
        mesh.vertices[i1] - mesh.vertices[i0],
        mesh.vertices[i1 + 1] - mesh.vertices[i0 + 1],
        mesh.vertices[i1 + 2] - mesh.vertices[i0 + 2],
    );
    let (bx, by, bz) = (
        mesh.vertices[i2] - mesh.vertices[i0],
        mesh.vertices[i2 + 1] - mesh.vertices[i0 + 1],
        mesh.vertices[i2 + 2] - mesh.vertices[i0 + 2],
    );
    let nx = ay * bz - az * by;
    let ny = az * bx - ax * bz;
    let nz = ax * by - ay * bx;
    let len = (nx * nx + ny * ny + nz * nz).sqrt();
    if len > 1e-12 {
        (nx / len, ny / len, nz / len)
    } else {
        (0.0, 0.0, 1.0)
    }
}

fn check_mesh(mesh: &RenderMesh) -> Result<(), EngineError> {
    if mesh.indices.len() / 3 == 0 {
        return Err(EngineError::export("mesh has no triangles"));
    }
    let vertex_count = mesh.vertices.len() / 3;
    for &idx in &mesh.indices {
        if idx as usize >= vertex_count {
            return Err(EngineError::export(format!(
                "index {} out of range (vertex count = {})",
                idx, vertex_count
            )));
        }
    }
    Ok(())
}

/// Encode a mesh as a binary STL file.
///
/// Binary STL format:
/// - 80-byte header (arbitrary text)
/// - u32 triangle count (little-endian)
/// - For each triangle: 3×f32 normal + 3×(3×f32 vertex) + u16 attribute = 50 bytes
pub fn encode_binary_stl(mesh: &RenderMesh, name: &str) -> Result<Vec<u8>, EngineError> {
    check_mesh(mesh)?;
    let tri_count = mesh.indices.len() / 3;

    let file_size = 80 + 4 + tri_count * 50;
    let mut buf = Vec::with_capacity(file_size);

    let header = format!("binary STL: {}", name);
    let header_bytes = header.as_bytes();
    buf.extend_from_slice(&header_bytes[..header_bytes.len().min(80)]);
    buf.resize(80, 0u8);

    buf.extend_from_slice(&(tri_count as u32).to_le_bytes());

    for tri in mesh.indices.chunks(3) {
        let (nx, ny, nz) = triangle_normal(mesh, tri);
        buf.extend_from_slice(&nx.to_le_bytes());
        buf.extend_from_slice(&ny.to_le_bytes());
        buf.extend_from_slice(&nz.to_le_bytes());

        for &idx in tri {
            let vi = idx as usize * 3;
            buf.extend_from_slice(&mesh.vertices[vi].to_le_bytes());
            buf.extend_from_slice(&mesh.vertices[vi + 1].to_le_bytes());
            buf.extend_from_slice(&mesh.vertices[vi + 2].to_le_bytes());
        }

        // Attribute byte count (unused)
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    Ok(buf)
}

/// Encode a mesh as an ASCII STL string.
pub fn encode_ascii_stl(mesh: &RenderMesh, name: &str) -> Result<String, EngineError> {
    check_mesh(mesh)?;
    let tri_count = mesh.indices.len() / 3;

    let mut out = String::with_capacity(tri_count * 300);
    out.push_str(&format!("solid {}\n", name));

    for tri in mesh.indices.chunks(3) {
        let (nx, ny, nz) = triangle_normal(mesh, tri);
        out.push_str(&format!("  facet normal {} {} {}\n", nx, ny, nz));
        out.push_str("    outer loop\n");
        for &idx in tri {
            let vi = idx as usize * 3;
            out.push_str(&format!(
                "      vertex {} {} {}\n",
                mesh.vertices[vi],
                mesh.vertices[vi + 1],
                mesh.vertices[vi + 2]
            ));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    out.push_str(&format!("endsolid {}\n", name));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_triangle() -> RenderMesh {
        RenderMesh {
            vertices: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            normals: vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn binary_stl_has_exact_size() {
        let bytes = encode_binary_stl(&one_triangle(), "tri").unwrap();
        assert_eq!(bytes.len(), 80 + 4 + 50);
        assert_eq!(u32::from_le_bytes(bytes[80..84].try_into().unwrap()), 1);
    }

    #[test]
    fn ascii_stl_brackets_the_solid_name() {
        let text = encode_ascii_stl(&one_triangle(), "tri").unwrap();
        assert!(text.starts_with("solid tri\n"));
        assert!(text.ends_with("endsolid tri\n"));
        assert_eq!(text.matches("facet normal").count(), 1);
        assert!(text.contains("facet normal 0 0 1"));
    }

    #[test]
    fn empty_mesh_is_an_export_error() {
        let mesh = RenderMesh {
            vertices: vec![],
            normals: vec![],
            indices: vec![],
        };
        let err = encode_binary_stl(&mesh, "empty").unwrap_err();
        assert!(matches!(err, EngineError::ExportFailed { .. }));
    }

    #[test]
    fn out_of_range_index_is_an_export_error() {
        let mut mesh = one_triangle();
        mesh.indices = vec![0, 1, 9];
        assert!(encode_ascii_stl(&mesh, "bad").is_err());
    }
}
