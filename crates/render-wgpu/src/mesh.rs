//! CPU-side unit mesh generation. One mesh per [`MeshKind`]; node transforms
//! provide size and placement.

use bytemuck::{Pod, Zeroable};
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

/// Unit cube, half extent 0.5, per-face normals.
pub fn cube() -> MeshData {
    let p = 0.5_f32;
    #[rustfmt::skip]
    let vertices = vec![
        // +Z face
        Vertex { position: [-p, -p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [ p, -p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [ p,  p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [-p,  p,  p], normal: [0.0, 0.0, 1.0] },
        // -Z face
        Vertex { position: [ p, -p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [-p, -p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [-p,  p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [ p,  p, -p], normal: [0.0, 0.0, -1.0] },
        // +X face
        Vertex { position: [ p, -p,  p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p, -p, -p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p,  p, -p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p,  p,  p], normal: [1.0, 0.0, 0.0] },
        // -X face
        Vertex { position: [-p, -p, -p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p, -p,  p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p,  p,  p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p,  p, -p], normal: [-1.0, 0.0, 0.0] },
        // +Y face
        Vertex { position: [-p,  p,  p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [ p,  p,  p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [ p,  p, -p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [-p,  p, -p], normal: [0.0, 1.0, 0.0] },
        // -Y face
        Vertex { position: [-p, -p, -p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [ p, -p, -p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [ p, -p,  p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [-p, -p,  p], normal: [0.0, -1.0, 0.0] },
    ];
    #[rustfmt::skip]
    let indices: Vec<u16> = vec![
        0,1,2, 2,3,0,       // +Z
        4,5,6, 6,7,4,       // -Z
        8,9,10, 10,11,8,    // +X
        12,13,14, 14,15,12, // -X
        16,17,18, 18,19,16, // +Y
        20,21,22, 22,23,20, // -Y
    ];
    MeshData { vertices, indices }
}

/// Unit square in the XY plane facing +Z. The pipeline draws planes without
/// backface culling, so it reads as double-sided.
pub fn plane() -> MeshData {
    let h = 0.5_f32;
    let n = [0.0, 0.0, 1.0];
    let vertices = vec![
        Vertex { position: [-h, -h, 0.0], normal: n },
        Vertex { position: [h, -h, 0.0], normal: n },
        Vertex { position: [h, h, 0.0], normal: n },
        Vertex { position: [-h, h, 0.0], normal: n },
    ];
    let indices = vec![0, 1, 2, 2, 3, 0];
    MeshData { vertices, indices }
}

/// Cone with base radius 1 and height 1, centered on the origin (apex at
/// y = 0.5, base ring at y = -0.5). Flat side normals; closed base.
pub fn cone(segments: u32) -> MeshData {
    let segments = segments.max(3);
    let mut vertices = Vec::new();
    let mut indices: Vec<u16> = Vec::new();

    for i in 0..segments {
        let a0 = i as f32 / segments as f32 * TAU;
        let a1 = (i + 1) as f32 / segments as f32 * TAU;
        let b0 = [a0.sin(), -0.5, a0.cos()];
        let b1 = [a1.sin(), -0.5, a1.cos()];
        let apex = [0.0, 0.5, 0.0];

        // Face normal of the side triangle.
        let e0 = [b1[0] - b0[0], b1[1] - b0[1], b1[2] - b0[2]];
        let e1 = [apex[0] - b0[0], apex[1] - b0[1], apex[2] - b0[2]];
        let n = cross_normalized(e0, e1);

        let base = vertices.len() as u16;
        vertices.push(Vertex { position: b0, normal: n });
        vertices.push(Vertex { position: b1, normal: n });
        vertices.push(Vertex { position: apex, normal: n });
        indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    // Base cap fan, facing down.
    let down = [0.0, -1.0, 0.0];
    let center = vertices.len() as u16;
    vertices.push(Vertex { position: [0.0, -0.5, 0.0], normal: down });
    for i in 0..segments {
        let a0 = i as f32 / segments as f32 * TAU;
        let a1 = (i + 1) as f32 / segments as f32 * TAU;
        let base = vertices.len() as u16;
        vertices.push(Vertex { position: [a1.sin(), -0.5, a1.cos()], normal: down });
        vertices.push(Vertex { position: [a0.sin(), -0.5, a0.cos()], normal: down });
        indices.extend_from_slice(&[center, base, base + 1]);
    }

    MeshData { vertices, indices }
}

/// UV sphere of radius 1 with smooth normals.
pub fn sphere(rings: u32, sectors: u32) -> MeshData {
    let rings = rings.max(3);
    let sectors = sectors.max(3);
    let mut vertices = Vec::new();
    let mut indices: Vec<u16> = Vec::new();

    for r in 0..=rings {
        let phi = r as f32 / rings as f32 * std::f32::consts::PI;
        for s in 0..=sectors {
            let theta = s as f32 / sectors as f32 * TAU;
            let x = phi.sin() * theta.cos();
            let y = phi.cos();
            let z = phi.sin() * theta.sin();
            vertices.push(Vertex {
                position: [x, y, z],
                normal: [x, y, z],
            });
        }
    }

    let stride = sectors + 1;
    for r in 0..rings {
        for s in 0..sectors {
            let i0 = (r * stride + s) as u16;
            let i1 = i0 + 1;
            let i2 = i0 + stride as u16;
            let i3 = i2 + 1;
            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }

    MeshData { vertices, indices }
}

fn cross_normalized(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    let c = [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ];
    let len = (c[0] * c[0] + c[1] * c[1] + c[2] * c[2]).sqrt();
    if len > 0.0 {
        [c[0] / len, c[1] / len, c[2] / len]
    } else {
        [0.0, 1.0, 0.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_24_vertices_36_indices() {
        let m = cube();
        assert_eq!(m.vertices.len(), 24);
        assert_eq!(m.indices.len(), 36);
    }

    #[test]
    fn cone_side_normals_point_outward() {
        let m = cone(4);
        // 4 side triangles + center + 8 cap verts
        assert_eq!(m.indices.len() % 3, 0);
        for v in &m.vertices {
            let n = v.normal;
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-5);
        }
        // Side normals must not point straight down.
        let side = &m.vertices[0].normal;
        assert!(side[1] > -0.99);
    }

    #[test]
    fn sphere_vertices_sit_on_unit_radius() {
        let m = sphere(16, 16);
        for v in &m.vertices {
            let p = v.position;
            let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!((r - 1.0).abs() < 1e-5);
        }
        assert!(m.vertices.len() <= u16::MAX as usize);
    }

    #[test]
    fn index_buffers_stay_in_range() {
        for m in [cube(), plane(), cone(4), sphere(16, 16)] {
            let max = m.vertices.len() as u16;
            assert!(m.indices.iter().all(|&i| i < max));
        }
    }
}
