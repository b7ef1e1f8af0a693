//! Procedural meshes
//!
//! The generators build CPU side vertex and index arrays in the exact layout a
//! vertex buffer expects: [`Vertex`] is 24 bytes, position (4 floats) at
//! offset 0 and uv (2 floats) at offset 16. Uploading is left to the caller,
//! [`Mesh::vertex_bytes`] and [`Mesh::index_bytes`] give the raw buffers.

mod boxes;
mod planes;

pub use boxes::{cube, cuboid, skybox};
pub use planes::{grid_plane, plane};

use crate::filesystem::FileSystem;
use crate::math::{Vector2, Vector4};
use crate::obj_writer::ObjWriter;
use bytemuck::{Pod, Zeroable};
use log::warn;
use serde::{Deserialize, Serialize};
use std::io;
use std::mem::{offset_of, size_of};
use std::path::Path;
use tracing::instrument;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vector4,
    pub uv: Vector2,
}

impl Vertex {
    pub const STRIDE: usize = size_of::<Vertex>();
    pub const POSITION_OFFSET: usize = offset_of!(Vertex, position);
    pub const UV_OFFSET: usize = offset_of!(Vertex, uv);

    pub const fn new(position: Vector4, uv: Vector2) -> Self {
        Self { position, uv }
    }
}

/// An indexed triangle list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Logs every out of range index and a dangling triangle, returns the number of problems found.
    pub fn validate(&self) -> usize {
        let mut problems = 0;
        if self.indices.len() % 3 != 0 {
            warn!(
                "Index count {} is not a multiple of 3, trailing indices are ignored",
                self.indices.len()
            );
            problems += 1;
        }
        for (position, index) in self.indices.iter().enumerate() {
            if *index as usize >= self.vertices.len() {
                warn!(
                    "Index {} at position {} is out of range for {} vertices",
                    index,
                    position,
                    self.vertices.len()
                );
                problems += 1;
            }
        }
        problems
    }

    /// Writes the mesh as a Wavefront obj object named `name`.
    ///
    /// Every vertex gets its own texture coordinate, so faces reference
    /// the same index twice (`f 1/1 2/2 3/3`).
    pub fn write_obj<W: io::Write>(&self, name: &str, writer: W) -> io::Result<()> {
        let mut obj = ObjWriter::new(writer);
        obj.comment(&format!(
            "{} vertices, {} triangles",
            self.vertices.len(),
            self.triangle_count()
        ))?;
        obj.object_name(name)?;
        for vertex in &self.vertices {
            let p = vertex.position;
            obj.vertex(p.x, p.y, p.z, Some(p.w))?;
        }
        for vertex in &self.vertices {
            obj.texture_coordinate(vertex.uv.x, vertex.uv.y)?;
        }
        for triangle in self.indices.chunks_exact(3) {
            let corners: Vec<(usize, Option<usize>)> = triangle
                .iter()
                .map(|i| {
                    let obj_index = *i as usize + 1;
                    (obj_index, Some(obj_index))
                })
                .collect();
            obj.face(&corners)?;
        }
        obj.flush()
    }

    #[instrument(skip(self, path, fs), fields(path = %path.display()))]
    pub fn write_obj_file(&self, name: &str, path: &Path, fs: &dyn FileSystem) -> io::Result<()> {
        let writer = fs.create_file(path)?;
        self.write_obj(name, writer)
    }
}
