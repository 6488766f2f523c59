//! Static geometry used by the examples.
//!
//! Generators are pure functions returning [`ShapeData`], which can be
//! inspected on the CPU and uploaded with [`ShapeData::upload`].

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
use glow::HasContext;

use crate::{
    abs::{Mesh, Vertex},
    error::Result,
};

pub mod cube;
pub mod cylinder;
pub mod rectangle;
pub mod sphere;

/// Attribute location of the vertex position in every shape.
pub const POSITION_LOCATION: u32 = 0;
/// Attribute location of the normal or texture coordinate.
pub const SECONDARY_LOCATION: u32 = 1;

/// A 2D position with a texture coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct PositionTexCoord {
    pub position: Vec2,
    pub tex_coord: Vec2,
}

impl Vertex for PositionTexCoord {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = size_of::<PositionTexCoord>() as i32;

            gl.enable_vertex_attrib_array(POSITION_LOCATION);
            gl.vertex_attrib_pointer_f32(POSITION_LOCATION, 2, glow::FLOAT, false, stride, 0);

            gl.enable_vertex_attrib_array(SECONDARY_LOCATION);
            gl.vertex_attrib_pointer_f32(
                SECONDARY_LOCATION,
                2,
                glow::FLOAT,
                false,
                stride,
                size_of::<Vec2>() as i32,
            );
        }
    }
}

/// A 3D position with a normal.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct PositionNormal {
    pub position: Vec3,
    pub normal: Vec3,
}

impl Vertex for PositionNormal {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = size_of::<PositionNormal>() as i32;

            gl.enable_vertex_attrib_array(POSITION_LOCATION);
            gl.vertex_attrib_pointer_f32(POSITION_LOCATION, 3, glow::FLOAT, false, stride, 0);

            gl.enable_vertex_attrib_array(SECONDARY_LOCATION);
            gl.vertex_attrib_pointer_f32(
                SECONDARY_LOCATION,
                3,
                glow::FLOAT,
                false,
                stride,
                size_of::<Vec3>() as i32,
            );
        }
    }
}

/// CPU side geometry waiting to be uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeData<V> {
    pub vertices: Vec<V>,
    pub indices: Option<Vec<u32>>,
    /// Primitive mode, e.g. `glow::TRIANGLES`.
    pub mode: u32,
}

impl<V: Vertex> ShapeData<V> {
    pub fn upload(&self, gl: &Arc<glow::Context>) -> Result<Mesh> {
        Mesh::new(gl, &self.vertices, self.indices.as_deref(), self.mode)
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use glam::Vec3;

    /// Every indexed triangle as three positions.
    pub fn triangles(positions: &[Vec3], indices: &[u32]) -> Vec<[Vec3; 3]> {
        indices
            .chunks_exact(3)
            .map(|t| {
                [
                    positions[t[0] as usize],
                    positions[t[1] as usize],
                    positions[t[2] as usize],
                ]
            })
            .collect()
    }
}
