//! Shadow mapping with a single directional light.
//!
//! Every frame the scene is first rendered from the light into a depth
//! texture, then from the camera, looking the depth texture up to decide what
//! is in shadow.

use gl_tutorials::{
    Example, ExampleContext, Frame, Result,
    abs::{Framebuffer, Mesh, ShaderProgram, Texture},
    camera, shader_program,
    shapes::{
        cube::cube,
        sphere::{DEFAULT_RINGS, DEFAULT_SEGMENTS, sphere},
    },
};
use glam::{Mat4, Vec3};
use glow::HasContext;

const DEPTH_TEXTURE_RESOLUTION: u32 = 4096;
/// Half extent of the box the shadow map covers.
const SHADOW_VOLUME_RADIUS: f32 = 10.0;

struct Object<'a> {
    mesh: &'a Mesh,
    model: Mat4,
    color: Vec3,
}

struct ShadowExample {
    cube: Mesh,
    sphere: Mesh,
    program: ShaderProgram,
    shadow_program: ShaderProgram,
    depth_tex: Texture,
    fbo: Framebuffer,
    /// Projection times view of the light.
    shadow_transform: Mat4,
}

impl ShadowExample {
    fn scene(&self) -> [Object<'_>; 3] {
        [
            Object {
                mesh: &self.sphere,
                model: camera::translate(Vec3::new(1.0, 0.0, 0.0)),
                color: Vec3::new(1.0, 0.5, 1.0),
            },
            Object {
                mesh: &self.cube,
                model: camera::translate(Vec3::new(-1.0, 0.0, 0.0)),
                color: Vec3::new(0.1, 0.8, 0.4),
            },
            Object {
                mesh: &self.cube,
                model: camera::translate_scale(
                    Vec3::new(0.0, -0.505, 0.0),
                    Vec3::new(10.0, 0.1, 10.0),
                ),
                color: Vec3::new(0.5, 0.5, 0.5),
            },
        ]
    }

    fn shadow_render(&self, frame: &Frame) {
        self.fbo.bind();
        unsafe {
            frame.gl.clear(glow::DEPTH_BUFFER_BIT);
        }

        self.shadow_program.use_program();
        for object in self.scene() {
            self.shadow_program
                .set_uniform("mvp", self.shadow_transform * object.model);
            object.mesh.draw();
        }
        self.shadow_program.unuse();

        Framebuffer::unbind(frame.gl, frame.width, frame.height);
    }

    fn final_render(&self, frame: &Frame) {
        let view = camera::orbit_view(frame.time, 2.5, 1.0, 1.0);
        let projection = camera::perspective(frame.width, frame.height);

        self.program.use_program();
        self.depth_tex.bind(0);

        for object in self.scene() {
            self.program.set_uniform("model_mat", object.model);
            self.program
                .set_uniform("mvp", projection * view * object.model);
            self.program.set_uniform("color", object.color);
            object.mesh.draw();
        }

        self.depth_tex.unbind(0);
        self.program.unuse();
    }
}

impl Example for ShadowExample {
    fn new(ctx: &ExampleContext) -> Result<Self> {
        let cube = cube().upload(&ctx.gl)?;
        let sphere = sphere(DEFAULT_RINGS, DEFAULT_SEGMENTS).upload(&ctx.gl)?;

        let depth_tex = Texture::new_depth(&ctx.gl, DEPTH_TEXTURE_RESOLUTION)?;
        let fbo = Framebuffer::with_depth_texture(&ctx.gl, &depth_tex)?;

        let program = shader_program!(ctx.gl, "shadow_render")?;
        let shadow_program = shader_program!(ctx.gl, "shadow_depth")?;

        let light_dir = Vec3::new(0.3, 1.0, 0.2).normalize();
        let shadow_transform = camera::light_space_transform(light_dir, SHADOW_VOLUME_RADIUS);

        program.use_program();
        program.set_uniform("lightPos", light_dir);
        program.set_uniform("shadowTransform", shadow_transform);
        program.set_uniform("shadowMap", 0i32);
        program.unuse();

        unsafe {
            ctx.gl.enable(glow::DEPTH_TEST);
            ctx.gl.clear_color(0.1, 0.2, 0.3, 1.0);
        }

        Ok(Self {
            cube,
            sphere,
            program,
            shadow_program,
            depth_tex,
            fbo,
            shadow_transform,
        })
    }

    fn render(&mut self, frame: &Frame) {
        self.shadow_render(frame);
        self.final_render(frame);
    }
}

fn main() {
    gl_tutorials::launch::<ShadowExample>();
}
