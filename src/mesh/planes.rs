use super::{Mesh, Vertex};
use crate::math::{Vector2, Vector4};

/// A single quad of `size` x `size` on the xz plane, centred on the origin.
pub fn plane(size: f32) -> Mesh {
    let half = size * 0.5;
    let vertices = vec![
        Vertex::new(Vector4::point(-half, 0.0, -half), Vector2::new(0.0, 0.0)),
        Vertex::new(Vector4::point(half, 0.0, -half), Vector2::new(1.0, 0.0)),
        Vertex::new(Vector4::point(half, 0.0, half), Vector2::new(1.0, 1.0)),
        Vertex::new(Vector4::point(-half, 0.0, half), Vector2::new(0.0, 1.0)),
    ];
    Mesh::new(vertices, vec![0, 1, 3, 1, 2, 3])
}

/// A `size` x `size` grid on the xz plane with `verts_width` vertices along x
/// and `verts_length` along z, both at least 2.
///
/// Vertices are stored row by row (z outer, x inner) and uv runs from 0 to 1
/// across the grid.
pub fn grid_plane(size: f32, verts_width: usize, verts_length: usize) -> Mesh {
    let width = verts_width.max(2);
    let length = verts_length.max(2);
    let half = size / 2.0;

    let mut vertices = Vec::with_capacity(width * length);
    for z in 0..length {
        for x in 0..width {
            let x_pos = size * (x as f32 / (width - 1) as f32);
            let z_pos = size * (z as f32 / (length - 1) as f32);
            let uv = if size == 0.0 {
                Vector2::ZERO
            } else {
                Vector2::new(x_pos / size, z_pos / size)
            };
            vertices.push(Vertex::new(
                Vector4::point(x_pos - half, 0.0, z_pos - half),
                uv,
            ));
        }
    }

    let mut indices = Vec::with_capacity((width - 1) * (length - 1) * 6);
    for z in 0..length - 1 {
        for x in 0..width - 1 {
            let i = (z * width + x) as u32;
            let w = width as u32;
            indices.extend_from_slice(&[i, i + 1, i + w, i + 1, i + w + 1, i + w]);
        }
    }

    Mesh::new(vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plane() {
        let mesh = plane(4.0);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 3, 1, 2, 3]);
        assert_eq!(mesh.vertices[0].position, Vector4::new(-2.0, 0.0, -2.0, 1.0));
        assert_eq!(mesh.vertices[2].position, Vector4::new(2.0, 0.0, 2.0, 1.0));
        assert_eq!(mesh.vertices[3].uv, Vector2::new(0.0, 1.0));
    }

    #[test]
    fn test_grid_plane_clamps_to_two() {
        let mesh = grid_plane(2.0, 0, 1);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 1, 3, 2]);
        assert_eq!(mesh.vertices[3].position, Vector4::new(1.0, 0.0, 1.0, 1.0));
        assert_eq!(mesh.vertices[3].uv, Vector2::new(1.0, 1.0));
    }

    #[test]
    fn test_grid_plane_rectangular() {
        let mesh = grid_plane(6.0, 4, 3);
        assert_eq!(mesh.vertices.len(), 12);
        assert_eq!(mesh.triangle_count(), (4 - 1) * (3 - 1) * 2);
        assert_eq!(mesh.validate(), 0);

        // second row starts at z = 0 with a stride of the width
        let row_start = mesh.vertices[4];
        assert_eq!(row_start.position, Vector4::new(-3.0, 0.0, 0.0, 1.0));
        assert_eq!(row_start.uv, Vector2::new(0.0, 0.5));

        // last cell
        assert_eq!(&mesh.indices[30..], &[6, 7, 10, 7, 11, 10]);
    }

    #[test]
    fn test_grid_plane_spans_size() {
        let mesh = grid_plane(10.0, 5, 5);
        let first = mesh.vertices.first().unwrap().position;
        let last = mesh.vertices.last().unwrap().position;
        assert_eq!(first, Vector4::new(-5.0, 0.0, -5.0, 1.0));
        assert_eq!(last, Vector4::new(5.0, 0.0, 5.0, 1.0));
    }
}
