//! Mesh management module.
//!
//! This module defines the [`Mesh`] struct for managing mesh data on the GPU side.
//! Vertices should implement the [`Vertex`] trait.

use std::sync::Arc;

use glow::HasContext;

use crate::error::{Error, Result};

/// Trait that defines the necessary methods for a vertex.
pub trait Vertex: bytemuck::Pod {
    /// Sets up the vertex attribute pointers for the vertex.
    fn vertex_attribs(gl: &glow::Context);
}

/// Represents a mesh stored on the GPU side.
///
/// Meshes uploaded without indices are drawn with `glDrawArrays` and can be
/// drawn in parts with [`Mesh::draw_range`].
pub struct Mesh {
    gl: Arc<glow::Context>,
    draw_mode: u32,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: Option<glow::Buffer>,
    vertex_count: usize,
    index_count: usize,
}

impl Mesh {
    /// Creates a new mesh from the given vertex and, optionally, index data.
    pub fn new<V: Vertex>(
        gl: &Arc<glow::Context>,
        vertices: &[V],
        indices: Option<&[u32]>,
        draw_mode: u32,
    ) -> Result<Self> {
        unsafe {
            // Nothing is bound until every object exists.
            let vao = gl.create_vertex_array().map_err(Error::Gl)?;
            let vbo = gl.create_buffer().map_err(|e| {
                gl.delete_vertex_array(vao);
                Error::Gl(e)
            })?;
            let ebo = match indices {
                Some(_) => Some(gl.create_buffer().map_err(|e| {
                    gl.delete_buffer(vbo);
                    gl.delete_vertex_array(vao);
                    Error::Gl(e)
                })?),
                None => None,
            };

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );

            if let (Some(ebo), Some(indices)) = (ebo, indices) {
                gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
                gl.buffer_data_u8_slice(
                    glow::ELEMENT_ARRAY_BUFFER,
                    bytemuck::cast_slice(indices),
                    glow::STATIC_DRAW,
                );
            }

            V::vertex_attribs(gl);

            // The element buffer binding is VAO state, so it stays bound
            // until the VAO is unbound.
            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);

            Ok(Self {
                gl: Arc::clone(gl),
                draw_mode,
                vao,
                vbo,
                ebo,
                vertex_count: vertices.len(),
                index_count: indices.map_or(0, <[u32]>::len),
            })
        }
    }

    /// Draws the mesh.
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            if self.ebo.is_some() {
                self.gl.draw_elements(
                    self.draw_mode,
                    self.index_count as i32,
                    glow::UNSIGNED_INT,
                    0,
                );
            } else {
                self.gl
                    .draw_arrays(self.draw_mode, 0, self.vertex_count as i32);
            }
            self.gl.bind_vertex_array(None);
        }
    }

    /// Draws `count` vertices starting at `first` with the given primitive mode,
    /// ignoring the index buffer.
    pub fn draw_range(&self, mode: u32, first: usize, count: usize) {
        debug_assert!(first + count <= self.vertex_count);
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            self.gl.draw_arrays(mode, first as i32, count as i32);
            self.gl.bind_vertex_array(None);
        }
    }

    /// Returns the amount of vertices uploaded.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.vbo);
            if let Some(ebo) = self.ebo {
                self.gl.delete_buffer(ebo);
            }
            self.gl.delete_vertex_array(self.vao);
        }
    }
}
