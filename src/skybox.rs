//! A cube-mapped sky drawn behind everything else.

use std::{path::Path, sync::Arc};

use glam::{Mat3, Mat4};
use glow::HasContext;

use crate::{
    abs::{CapabilityGuard, CubeFaces, CubeMap, Mesh, ShaderProgram, load_image},
    error::Result,
    shapes::cube::cube,
};

pub struct Skybox {
    gl: Arc<glow::Context>,
    cube: Mesh,
    program: ShaderProgram,
    texture: CubeMap,
}

impl Skybox {
    /// Loads a cross-layout sky image from `path`.
    pub fn new(gl: &Arc<glow::Context>, path: &Path) -> Result<Self> {
        let faces = CubeFaces::from_image(&load_image(path)?)?;
        let texture = CubeMap::new(gl, &faces)?;
        let program = crate::shader_program!(gl, "skybox")?;
        let cube = cube().upload(gl)?;

        program.use_program();
        program.set_uniform("uTex", 0i32);
        program.unuse();

        Ok(Self {
            gl: Arc::clone(gl),
            cube,
            program,
            texture,
        })
    }

    /// Draws the sky without touching the depth buffer. Only the rotation of
    /// `view` is used, so the sky stays infinitely far away.
    pub fn render(&self, view: &Mat4, projection: &Mat4) {
        self.program.use_program();
        self.program.set_uniform("uCameraMatrix", Mat3::from_mat4(*view));
        self.program.set_uniform("uProjectionMatrix", projection);

        let _depth_test = CapabilityGuard::disable(&self.gl, glow::DEPTH_TEST);
        let _seamless = CapabilityGuard::enable(&self.gl, glow::TEXTURE_CUBE_MAP_SEAMLESS);

        self.texture.bind(0);
        unsafe {
            self.gl.depth_mask(false);
        }

        self.cube.draw();

        unsafe {
            self.gl.depth_mask(true);
        }
        self.texture.unbind(0);
        self.program.unuse();
    }
}

#[cfg(test)]
mod tests {
    use crate::{abs::CubeFaces, abs::load_image, config::ExampleConfig};

    #[test]
    fn bundled_sky_is_a_valid_cross() {
        let image = load_image(&ExampleConfig::default().asset("skybox.png")).unwrap();
        let faces = CubeFaces::from_image(&image).unwrap();
        assert_eq!(faces.size, image.width() / 4);
        for face in &faces.faces {
            assert_eq!(face.len(), (faces.size * faces.size * 4) as usize);
            assert!(face.chunks_exact(4).all(|p| p[3] == 255));
        }
    }
}
