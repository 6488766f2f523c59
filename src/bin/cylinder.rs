//! A cylinder built by hand next to a cube.

use gl_tutorials::{
    Example, ExampleContext, Frame, Result,
    abs::{Mesh, ShaderProgram},
    camera, shader_program,
    shapes::{
        cube::cube,
        cylinder::{self, cylinder},
    },
};
use glam::Vec3;
use glow::HasContext;

struct CylinderExample {
    cube: Mesh,
    cylinder: Mesh,
    program: ShaderProgram,
}

impl Example for CylinderExample {
    fn new(ctx: &ExampleContext) -> Result<Self> {
        let cube = cube().upload(&ctx.gl)?;
        let cylinder = cylinder().upload(&ctx.gl)?;
        log::debug!("cylinder has {} vertices", cylinder.vertex_count());

        let program = shader_program!(ctx.gl, "cylinder")?;

        unsafe {
            ctx.gl.enable(glow::DEPTH_TEST);
            ctx.gl.clear_color(0.1, 0.2, 0.3, 1.0);
        }

        Ok(Self {
            cube,
            cylinder,
            program,
        })
    }

    fn render(&mut self, frame: &Frame) {
        let view = camera::orbit_view(frame.time, 2.5, 2.0, 1.0);
        let projection = camera::perspective(frame.width, frame.height);

        self.program.use_program();

        let model = camera::translate(Vec3::new(1.0, 0.0, 0.0));
        self.program.set_uniform("mvp", projection * view * model);
        self.program.set_uniform("color", Vec3::new(1.0, 0.0, 0.0));
        for (mode, range) in [
            (glow::TRIANGLE_STRIP, cylinder::side_range()),
            (glow::TRIANGLE_FAN, cylinder::bottom_cap_range()),
            (glow::TRIANGLE_FAN, cylinder::top_cap_range()),
        ] {
            self.cylinder.draw_range(mode, range.start, range.len());
        }

        let model = camera::translate(Vec3::new(-1.0, 0.0, 0.0));
        self.program.set_uniform("mvp", projection * view * model);
        self.program.set_uniform("color", Vec3::new(1.0, 1.0, 0.0));
        self.cube.draw();

        self.program.unuse();
    }
}

fn main() {
    gl_tutorials::launch::<CylinderExample>();
}
