//! Thin wrappers over the OpenGL objects the examples use:
//! application setup, shaders, meshes, textures and framebuffers.

pub mod app;
pub mod cubemap;
pub mod framebuffer;
pub mod mesh;
pub mod shader;
pub mod state;
pub mod texture;

pub use app::*;
pub use cubemap::*;
pub use framebuffer::*;
pub use mesh::*;
pub use shader::*;
pub use state::*;
pub use texture::*;
