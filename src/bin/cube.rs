//! A diffusely lit cube with the camera circling around it.

use gl_tutorials::{
    Example, ExampleContext, Frame, Result,
    abs::{Mesh, ShaderProgram},
    camera, shader_program,
    shapes::cube::cube,
};
use glow::HasContext;

struct CubeExample {
    cube: Mesh,
    program: ShaderProgram,
}

impl Example for CubeExample {
    fn new(ctx: &ExampleContext) -> Result<Self> {
        let cube = cube().upload(&ctx.gl)?;
        let program = shader_program!(ctx.gl, "cube")?;
        program.use_program();

        unsafe {
            ctx.gl.enable(glow::DEPTH_TEST);
            ctx.gl.clear_color(0.1, 0.2, 0.3, 1.0);
        }

        Ok(Self { cube, program })
    }

    fn render(&mut self, frame: &Frame) {
        let view = camera::orbit_view(frame.time, 1.5, 1.0, 1.0);
        let projection = camera::perspective(frame.width, frame.height);

        self.program.use_program();
        self.program.set_uniform("mvp", projection * view);
        self.cube.draw();
    }
}

fn main() {
    gl_tutorials::launch::<CubeExample>();
}
