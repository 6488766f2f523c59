//! Cube map textures.
//!
//! Skybox images are stored as a horizontal cross, four faces wide and three
//! tall:
//!
//! ```text
//!        +Y
//!   -X   +Z   +X   -Z
//!        -Y
//! ```
//!
//! [`split_cross`] cuts such an image into the six faces in the order OpenGL
//! numbers them (`TEXTURE_CUBE_MAP_POSITIVE_X + i`).

use std::sync::Arc;

use glow::HasContext;
use image::DynamicImage;

use crate::error::{Error, Result};

/// Grid cell (column, row) of each face in the cross, in GL face order.
pub const CROSS_CELLS: [(u32, u32); 6] = [
    (2, 1), // +X
    (0, 1), // -X
    (1, 0), // +Y
    (1, 2), // -Y
    (1, 1), // +Z
    (3, 1), // -Z
];

/// Six square RGBA8 faces, each `size * size * 4` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeFaces {
    pub size: u32,
    pub faces: [Vec<u8>; 6],
}

/// Splits a cross-layout RGBA8 image into cube faces.
pub fn split_cross(rgba: &[u8], width: u32, height: u32) -> Result<CubeFaces> {
    if width % 4 != 0 {
        return Err(Error::SkyboxLayout(format!(
            "width {width} is not divisible by 4"
        )));
    }
    if width / 4 != height / 3 || height % 3 != 0 {
        return Err(Error::SkyboxLayout(format!(
            "{width}x{height} is not a 4:3 cross of square faces"
        )));
    }
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| Error::SkyboxLayout(format!("{width}x{height} is too large")))?;
    if rgba.len() != expected {
        return Err(Error::SkyboxLayout(format!(
            "expected {expected} bytes of RGBA data, got {}",
            rgba.len()
        )));
    }

    // Every offset below is smaller than `expected`, so usize math can't overflow.
    let (width, size) = (width as usize, width as usize / 4);
    let row_bytes = size * 4;
    let faces = CROSS_CELLS.map(|(col, row)| {
        let (col, row) = (col as usize, row as usize);
        let mut face = Vec::with_capacity(row_bytes * size);
        for y in row * size..(row + 1) * size {
            let start = (y * width + col * size) * 4;
            face.extend_from_slice(&rgba[start..start + row_bytes]);
        }
        face
    });

    Ok(CubeFaces {
        size: size as u32,
        faces,
    })
}

impl CubeFaces {
    pub fn from_image(image: &DynamicImage) -> Result<Self> {
        let rgba = image.to_rgba8();
        split_cross(rgba.as_raw(), rgba.width(), rgba.height())
    }
}

/// Represents a cube map texture stored on the GPU side.
pub struct CubeMap {
    gl: Arc<glow::Context>,
    id: glow::Texture,
}

impl CubeMap {
    /// Uploads the faces as sRGB with linear filtering.
    pub fn new(gl: &Arc<glow::Context>, faces: &CubeFaces) -> Result<Self> {
        unsafe {
            let texture = gl.create_texture().map_err(Error::Gl)?;
            gl.bind_texture(glow::TEXTURE_CUBE_MAP, Some(texture));
            for (i, face) in faces.faces.iter().enumerate() {
                gl.tex_image_2d(
                    glow::TEXTURE_CUBE_MAP_POSITIVE_X + i as u32,
                    0,
                    glow::SRGB8_ALPHA8 as i32,
                    faces.size as i32,
                    faces.size as i32,
                    0,
                    glow::RGBA,
                    glow::UNSIGNED_BYTE,
                    glow::PixelUnpackData::Slice(Some(face.as_slice())),
                );
            }
            for (param, value) in [
                (glow::TEXTURE_MIN_FILTER, glow::LINEAR),
                (glow::TEXTURE_MAG_FILTER, glow::LINEAR),
                (glow::TEXTURE_WRAP_S, glow::CLAMP_TO_EDGE),
                (glow::TEXTURE_WRAP_T, glow::CLAMP_TO_EDGE),
                (glow::TEXTURE_WRAP_R, glow::CLAMP_TO_EDGE),
            ] {
                gl.tex_parameter_i32(glow::TEXTURE_CUBE_MAP, param, value as i32);
            }
            gl.bind_texture(glow::TEXTURE_CUBE_MAP, None);

            log::debug!("uploaded cube map with {0}x{0} faces", faces.size);

            Ok(Self {
                gl: Arc::clone(gl),
                id: texture,
            })
        }
    }

    /// Binds the cube map to the specified texture unit.
    pub fn bind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_CUBE_MAP, Some(self.id));
        }
    }

    pub fn unbind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_CUBE_MAP, None);
        }
    }
}

impl Drop for CubeMap {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 4:3 cross where every pixel's red channel holds the index of the
    /// grid cell it lies in, and green/blue hold the position inside it.
    fn labelled_cross(size: u32) -> Vec<u8> {
        let (width, height) = (size * 4, size * 3);
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let cell = (y / size) * 4 + x / size;
                data.extend_from_slice(&[cell as u8, (x % size) as u8, (y % size) as u8, 255]);
            }
        }
        data
    }

    #[test]
    fn faces_come_from_the_right_cells() {
        let size = 3;
        let faces = split_cross(&labelled_cross(size), size * 4, size * 3).unwrap();
        assert_eq!(faces.size, size);

        for (face, &(col, row)) in faces.faces.iter().zip(CROSS_CELLS.iter()) {
            assert_eq!(face.len(), (size * size * 4) as usize);
            let expected_cell = (row * 4 + col) as u8;
            for (i, pixel) in face.chunks_exact(4).enumerate() {
                let (x, y) = (i as u32 % size, i as u32 / size);
                assert_eq!(pixel, [expected_cell, x as u8, y as u8, 255]);
            }
        }
    }

    #[test]
    fn positive_x_is_right_of_centre() {
        let faces = split_cross(&labelled_cross(2), 8, 6).unwrap();
        // +X is column 2 of the middle row, -Z is the rightmost cell.
        assert_eq!(faces.faces[0][0], 6);
        assert_eq!(faces.faces[5][0], 7);
        assert_eq!(faces.faces[2][0], 1);
        assert_eq!(faces.faces[3][0], 9);
    }

    #[test]
    fn rejects_width_not_divisible_by_four() {
        let err = split_cross(&[0; 10 * 6 * 4], 10, 6).unwrap_err();
        assert!(matches!(err, Error::SkyboxLayout(_)));
    }

    #[test]
    fn rejects_non_square_faces() {
        let err = split_cross(&[0; 8 * 8 * 4], 8, 8).unwrap_err();
        assert!(err.to_string().contains("8x8"));
    }

    #[test]
    fn huge_dimensions_are_an_error_not_a_panic() {
        let err = split_cross(&[], 65536, 49152).unwrap_err();
        assert!(matches!(err, Error::SkyboxLayout(_)));
    }

    #[test]
    fn rejects_short_buffers() {
        assert!(split_cross(&[0; 16], 8, 6).is_err());
    }

    #[test]
    fn from_image_matches_split_cross() {
        let size = 4;
        let raw = labelled_cross(size);
        let image = image::RgbaImage::from_raw(size * 4, size * 3, raw.clone()).unwrap();
        let from_image = CubeFaces::from_image(&DynamicImage::ImageRgba8(image)).unwrap();
        assert_eq!(from_image, split_cross(&raw, size * 4, size * 3).unwrap());
    }
}
