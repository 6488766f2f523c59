//! A sphere floating in front of a cube-mapped sky.

use gl_tutorials::{
    Example, ExampleContext, Frame, Result,
    abs::{CapabilityGuard, Mesh, ShaderProgram},
    camera, shader_program,
    shapes::sphere::{DEFAULT_RINGS, DEFAULT_SEGMENTS, sphere},
    skybox::Skybox,
};

struct SkyboxExample {
    skybox: Skybox,
    sphere: Mesh,
    program: ShaderProgram,
}

impl Example for SkyboxExample {
    fn new(ctx: &ExampleContext) -> Result<Self> {
        let skybox = Skybox::new(&ctx.gl, &ctx.config.asset("skybox.png"))?;
        let sphere = sphere(DEFAULT_RINGS, DEFAULT_SEGMENTS).upload(&ctx.gl)?;
        let program = shader_program!(ctx.gl, "sphere")?;

        Ok(Self {
            skybox,
            sphere,
            program,
        })
    }

    fn render(&mut self, frame: &Frame) {
        let view = camera::orbit_view(frame.time, 2.5, 0.5, 0.0);
        let projection = camera::perspective(frame.width, frame.height);

        self.skybox.render(&view, &projection);

        self.program.use_program();
        self.program.set_uniform("mvp", projection * view);
        let _depth_test = CapabilityGuard::enable(frame.gl, glow::DEPTH_TEST);
        self.sphere.draw();
        self.program.unuse();
    }
}

fn main() {
    gl_tutorials::launch::<SkyboxExample>();
}
