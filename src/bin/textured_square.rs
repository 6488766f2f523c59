//! A textured, alpha blended square.

use gl_tutorials::{
    Example, ExampleContext, Frame, Result,
    abs::{Mesh, ShaderProgram, Texture},
    shader_program,
    shapes::rectangle::rectangle,
};
use glow::HasContext;

struct TexturedSquareExample {
    rectangle: Mesh,
    program: ShaderProgram,
    texture: Texture,
}

impl Example for TexturedSquareExample {
    fn new(ctx: &ExampleContext) -> Result<Self> {
        let rectangle = rectangle().upload(&ctx.gl)?;

        let program = shader_program!(ctx.gl, "textured_square")?;
        program.use_program();
        program.set_uniform("tex", 0i32);

        let path = ctx.config.asset("logo.png");
        let texture = Texture::from_file(&ctx.gl, &path)?;
        log::info!(
            "loaded {} ({}x{})",
            path.display(),
            texture.width(),
            texture.height()
        );

        unsafe {
            ctx.gl.enable(glow::BLEND);
            ctx.gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
            ctx.gl.clear_color(1.0, 1.0, 1.0, 1.0);
        }

        Ok(Self {
            rectangle,
            program,
            texture,
        })
    }

    fn render(&mut self, _frame: &Frame) {
        self.program.use_program();
        self.texture.bind(0);
        self.rectangle.draw();
    }
}

fn main() {
    gl_tutorials::launch::<TexturedSquareExample>();
}
