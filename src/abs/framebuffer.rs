//! Module to work with OpenGL framebuffers.
//!
//! Only depth-only framebuffers are needed here, for rendering shadow maps
//! into a [`Texture`] created with [`Texture::new_depth`].

use std::sync::Arc;

use glow::HasContext;

use crate::{
    abs::Texture,
    error::{Error, Result},
};

/// Represents an OpenGL framebuffer.
pub struct Framebuffer {
    gl: Arc<glow::Context>,
    fbo: glow::Framebuffer,
    width: i32,
    height: i32,
}

impl Framebuffer {
    /// Creates a framebuffer that renders depth into `depth_tex` and has no
    /// color attachment.
    pub fn with_depth_texture(gl: &Arc<glow::Context>, depth_tex: &Texture) -> Result<Self> {
        unsafe {
            let fbo = gl.create_framebuffer().map_err(Error::Gl)?;
            gl.bind_framebuffer(glow::FRAMEBUFFER, Some(fbo));

            gl.framebuffer_texture_2d(
                glow::FRAMEBUFFER,
                glow::DEPTH_ATTACHMENT,
                glow::TEXTURE_2D,
                Some(depth_tex.id),
                0,
            );
            gl.draw_buffer(glow::NONE);
            gl.read_buffer(glow::NONE);

            let status = gl.check_framebuffer_status(glow::FRAMEBUFFER);
            gl.bind_framebuffer(glow::FRAMEBUFFER, None);
            if status != glow::FRAMEBUFFER_COMPLETE {
                gl.delete_framebuffer(fbo);
                return Err(Error::FramebufferIncomplete(status));
            }
            log::debug!(
                "framebuffer ready with {}x{} depth attachment",
                depth_tex.width(),
                depth_tex.height()
            );

            Ok(Self {
                gl: Arc::clone(gl),
                fbo,
                width: depth_tex.width() as i32,
                height: depth_tex.height() as i32,
            })
        }
    }

    /// Binds the framebuffer for rendering and sets the viewport to its size.
    pub fn bind(&self) {
        unsafe {
            self.gl.bind_framebuffer(glow::FRAMEBUFFER, Some(self.fbo));
            self.gl.viewport(0, 0, self.width, self.height);
        }
    }

    /// Unbinds the framebuffer, reverting to the default framebuffer with the
    /// given viewport size.
    pub fn unbind(gl: &glow::Context, width: u32, height: u32) {
        unsafe {
            gl.bind_framebuffer(glow::FRAMEBUFFER, None);
            gl.viewport(0, 0, width as i32, height as i32);
        }
    }
}

impl Drop for Framebuffer {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_framebuffer(self.fbo);
        }
    }
}
