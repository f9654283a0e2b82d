//! Built-in meshes for tests, benches and the demo binary.

use glam::Vec3;

use super::{Face, Mesh, MeshHandle, Vertex};

/// Axis-aligned cube of edge 1 centered at the origin: 8 shared corner
/// vertices, 12 outward-wound triangles.
///
/// Corner `i` sits at `(±0.5, ±0.5, ±0.5)` with bit 0 selecting +x, bit 1
/// +y and bit 2 +z. The +z face is triangles 0 and 1.
#[must_use]
pub fn unit_cube() -> Mesh {
    let vertices = (0..8u32)
        .map(|i| {
            let p = Vec3::new(
                if i & 1 == 0 { -0.5 } else { 0.5 },
                if i & 2 == 0 { -0.5 } else { 0.5 },
                if i & 4 == 0 { -0.5 } else { 0.5 },
            );
            Vertex::new(p, p.normalize())
        })
        .collect();
    let faces = vec![
        // +z
        Face::new(4, 5, 7),
        Face::new(4, 7, 6),
        // -z
        Face::new(0, 2, 3),
        Face::new(0, 3, 1),
        // +x
        Face::new(1, 3, 7),
        Face::new(1, 7, 5),
        // -x
        Face::new(0, 4, 6),
        Face::new(0, 6, 2),
        // +y
        Face::new(2, 6, 7),
        Face::new(2, 7, 3),
        // -y
        Face::new(0, 1, 5),
        Face::new(0, 5, 4),
    ];
    Mesh::from_validated(vertices, faces, MeshHandle(0))
}

/// Square of edge `size` on the z = 0 plane facing +z, two triangles.
#[must_use]
pub fn quad(size: f32) -> Mesh {
    grid(1, size)
}

/// Square of edge `size` on the z = 0 plane split into `divisions²` cells,
/// two triangles per cell. Vertices are row-major from the -x/-y corner.
#[must_use]
pub fn grid(divisions: u32, size: f32) -> Mesh {
    let n = divisions.max(1);
    let step = size / n as f32;
    let half = size * 0.5;
    let row = n + 1;

    let vertices = (0..row * row)
        .map(|i| {
            let (x, y) = (i % row, i / row);
            Vertex::new(
                Vec3::new(x as f32 * step - half, y as f32 * step - half, 0.0),
                Vec3::Z,
            )
        })
        .collect();

    let faces = (0..n)
        .flat_map(|y| (0..n).map(move |x| (x, y)))
        .flat_map(|(x, y)| {
            let a = y * row + x;
            let b = a + 1;
            let c = a + row + 1;
            let d = a + row;
            [Face::new(a, b, c), Face::new(a, c, d)]
        })
        .collect();

    Mesh::from_validated(vertices, faces, MeshHandle(0))
}
