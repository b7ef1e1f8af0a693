use super::{Mesh, Vertex};
use crate::math::{Vector2, Vector4};

const CUBOID_INDICES: [u32; 36] = [
    3, 1, 0, 3, 2, 1, // top
    7, 2, 3, 7, 6, 2, // back
    4, 6, 7, 4, 5, 6, // bottom
    4, 0, 1, 5, 4, 1, // front
    6, 1, 2, 6, 5, 1, // right
    4, 3, 0, 4, 7, 3, // left
];

// opposite winding to the cuboid, so the faces are seen from inside
const SKYBOX_INDICES: [u32; 36] = [
    0, 1, 3, 1, 2, 3, //
    3, 2, 7, 2, 6, 7, //
    7, 6, 4, 6, 5, 4, //
    1, 0, 4, 1, 4, 5, //
    2, 1, 6, 1, 5, 6, //
    0, 3, 4, 3, 7, 4, //
];

/// Top face corners first, then bottom, each going (-x,+z) (+x,+z) (+x,-z) (-x,-z).
fn corners(half: Vector4, centre: Vector4) -> Vec<Vertex> {
    const SIGNS: [(f32, f32, f32); 8] = [
        (-1.0, 1.0, 1.0),
        (1.0, 1.0, 1.0),
        (1.0, 1.0, -1.0),
        (-1.0, 1.0, -1.0),
        (-1.0, -1.0, 1.0),
        (1.0, -1.0, 1.0),
        (1.0, -1.0, -1.0),
        (-1.0, -1.0, -1.0),
    ];
    const UVS: [Vector2; 4] = [
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(0.0, 1.0),
    ];
    SIGNS
        .iter()
        .enumerate()
        .map(|(i, (sx, sy, sz))| {
            let offset = Vector4::direction(sx * half.x, sy * half.y, sz * half.z);
            Vertex::new(centre + offset, UVS[i % 4])
        })
        .collect()
}

pub fn cube(size: f32, position: Vector4) -> Mesh {
    cuboid(size, size, size, position)
}

/// An axis aligned box centred on `position`, the corners keep its `w`.
pub fn cuboid(width: f32, height: f32, depth: f32, position: Vector4) -> Mesh {
    let half = Vector4::direction(width / 2.0, height / 2.0, depth / 2.0);
    Mesh::new(corners(half, position), CUBOID_INDICES.to_vec())
}

/// A cube around the origin to be seen from the inside.
pub fn skybox(size: f32) -> Mesh {
    let half = size * 0.5;
    Mesh::new(
        corners(
            Vector4::direction(half, half, half),
            Vector4::point(0.0, 0.0, 0.0),
        ),
        SKYBOX_INDICES.to_vec(),
    )
}
