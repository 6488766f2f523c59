//! A solid colored square in the middle of the window.

use gl_tutorials::{
    Example, ExampleContext, Frame, Result,
    abs::{Mesh, ShaderProgram},
    shader_program,
    shapes::rectangle::rectangle,
};
use glow::HasContext;

struct SquareExample {
    rectangle: Mesh,
    program: ShaderProgram,
}

impl Example for SquareExample {
    fn new(ctx: &ExampleContext) -> Result<Self> {
        let rectangle = rectangle().upload(&ctx.gl)?;
        let program = shader_program!(ctx.gl, "square")?;
        program.use_program();

        unsafe {
            ctx.gl.clear_color(0.0, 0.0, 0.0, 1.0);
        }

        Ok(Self { rectangle, program })
    }

    fn render(&mut self, _frame: &Frame) {
        self.program.use_program();
        self.rectangle.draw();
    }
}

fn main() {
    gl_tutorials::launch::<SquareExample>();
}
