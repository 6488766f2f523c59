//! The shared setup-then-render-loop harness every example runs in.

use std::{sync::Arc, time::Instant};

use glow::HasContext;
use sdl2::{event::Event, keyboard::Keycode};

use crate::{
    abs::App,
    config::ExampleConfig,
    error::Result,
    logging,
};

/// Compiles and links `src/shaders/<name>.vert` and `src/shaders/<name>.frag`.
///
/// The sources are embedded at build time; compile errors name the file.
#[macro_export]
macro_rules! shader_program {
    ($gl:expr, $name:literal) => {
        $crate::abs::ShaderProgram::from_sources(
            &$gl,
            (
                concat!($name, ".vert"),
                include_str!(concat!(
                    env!("CARGO_MANIFEST_DIR"),
                    "/src/shaders/",
                    $name,
                    ".vert"
                )),
            ),
            (
                concat!($name, ".frag"),
                include_str!(concat!(
                    env!("CARGO_MANIFEST_DIR"),
                    "/src/shaders/",
                    $name,
                    ".frag"
                )),
            ),
        )
    };
}

/// What an example gets to set itself up with.
pub struct ExampleContext<'a> {
    pub gl: Arc<glow::Context>,
    pub width: u32,
    pub height: u32,
    pub config: &'a ExampleConfig,
}

/// Per-frame state handed to [`Example::render`].
pub struct Frame<'a> {
    pub gl: &'a glow::Context,
    /// Seconds since the main loop started.
    pub time: f32,
    pub width: u32,
    pub height: u32,
}

/// A single tutorial program.
///
/// The harness clears color and depth before every [`Example::render`] call
/// and swaps buffers after it.
pub trait Example: Sized {
    /// Compiles shaders, uploads geometry and sets any fixed GL state.
    fn new(ctx: &ExampleContext) -> Result<Self>;

    fn render(&mut self, frame: &Frame);
}

/// Opens the window, builds the example and runs it until the window closes.
pub fn run<E: Example>(config: &ExampleConfig) -> Result<()> {
    let mut app = App::new(&config.window)?;
    let (width, height) = app.window.drawable_size();

    let ctx = ExampleContext {
        gl: Arc::clone(&app.gl),
        width,
        height,
        config,
    };
    let mut example = E::new(&ctx)?;
    log::info!("{} ready, entering main loop", std::any::type_name::<E>());

    let start = Instant::now();
    'running: loop {
        unsafe {
            app.gl
                .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        example.render(&Frame {
            gl: &app.gl,
            time: start.elapsed().as_secs_f32(),
            width,
            height,
        });

        app.window.gl_swap_window();

        for event in app.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                _ => {}
            }
        }
    }

    // GL objects have to go before the context does.
    drop(example);
    log::info!("window closed after {:.1}s", start.elapsed().as_secs_f32());
    Ok(())
}

/// Entry point for the example binaries. Any setup failure is logged and
/// ends the process with exit status 1.
pub fn launch<E: Example>() {
    let config = match ExampleConfig::load() {
        Ok(config) => config,
        Err(e) => {
            logging::init("info");
            log::error!("FATAL: {e}");
            std::process::exit(1);
        }
    };
    logging::init(&config.log_level);

    if let Err(e) = run::<E>(&config) {
        log::error!("FATAL: {e}");
        std::process::exit(1);
    }
}
