//! Structs and functions for handling textures.
//!
//! The module provides the [`Texture`] struct which is a CPU representation of a GPU texture.

use std::{path::Path, sync::Arc};

use glow::HasContext;
use image::{DynamicImage, GenericImageView};

use crate::error::{Error, Result};

/// Represents a 2D texture stored on the GPU side.
pub struct Texture {
    pub(super) gl: Arc<glow::Context>,
    pub(super) id: glow::Texture,
    pub(super) width: u32,
    pub(super) height: u32,
}

/// Decodes an image file, attaching the path to any decoder error.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let image = image::open(path).map_err(|source| Error::Image {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

impl Texture {
    /// Uploads the given image as an sRGB texture with alpha, using `filter`
    /// for both minification and magnification.
    pub fn new(gl: &Arc<glow::Context>, image: &DynamicImage, filter: u32) -> Result<Self> {
        let (width, height) = image.dimensions();
        let data = image.to_rgba8().into_raw();
        unsafe {
            let texture = gl.create_texture().map_err(Error::Gl)?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::SRGB8_ALPHA8 as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(data.as_slice())),
            );
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, filter as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, filter as i32);
            gl.bind_texture(glow::TEXTURE_2D, None);

            Ok(Self {
                gl: Arc::clone(gl),
                id: texture,
                width,
                height,
            })
        }
    }

    /// Loads an image file and uploads it with linear filtering.
    pub fn from_file(gl: &Arc<glow::Context>, path: &Path) -> Result<Self> {
        let image = load_image(path)?;
        Self::new(gl, &image, glow::LINEAR)
    }

    /// Creates a square 16-bit depth texture set up for hardware depth
    /// comparison (`sampler2DShadow`).
    ///
    /// Lookups outside the texture return the far plane so nothing out there
    /// is considered shadowed.
    pub fn new_depth(gl: &Arc<glow::Context>, resolution: u32) -> Result<Self> {
        unsafe {
            let texture = gl.create_texture().map_err(Error::Gl)?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::DEPTH_COMPONENT16 as i32,
                resolution as i32,
                resolution as i32,
                0,
                glow::DEPTH_COMPONENT,
                glow::FLOAT,
                glow::PixelUnpackData::Slice(None),
            );
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, glow::NEAREST as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_S,
                glow::CLAMP_TO_BORDER as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_T,
                glow::CLAMP_TO_BORDER as i32,
            );
            gl.tex_parameter_f32_slice(
                glow::TEXTURE_2D,
                glow::TEXTURE_BORDER_COLOR,
                &[1.0, 1.0, 1.0, 1.0],
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_COMPARE_FUNC,
                glow::LEQUAL as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_COMPARE_MODE,
                glow::COMPARE_REF_TO_TEXTURE as i32,
            );
            gl.bind_texture(glow::TEXTURE_2D, None);

            Ok(Self {
                gl: Arc::clone(gl),
                id: texture,
                width: resolution,
                height: resolution,
            })
        }
    }

    /// Returns the width of the texture.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the texture.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Binds the texture to the specified texture unit.
    pub fn bind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.id));
        }
    }

    /// Unbinds any 2D texture from the specified texture unit.
    pub fn unbind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, None);
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExampleConfig;

    #[test]
    fn bundled_logo_decodes() {
        let image = load_image(&ExampleConfig::default().asset("logo.png")).unwrap();
        assert!(image.width() > 0 && image.height() > 0);
        assert!(image.color().has_alpha());
    }

    #[test]
    fn missing_image_names_the_path() {
        let err = load_image(Path::new("/nonexistent/logo.png")).unwrap_err();
        assert!(matches!(err, Error::Image { .. }));
        assert!(err.to_string().contains("/nonexistent/logo.png"));
    }
}
