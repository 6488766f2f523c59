//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context necessary for creating a windowed application.

use std::sync::Arc;

use glow::HasContext;

use crate::{
    config::WindowConfig,
    error::{Error, Result},
};

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Creates a fixed size window with an OpenGL 3.3 core context made current.
    pub fn new(config: &WindowConfig) -> Result<Self> {
        let sdl = sdl2::init().map_err(Error::Sdl)?;
        let video_subsystem = sdl.video().map_err(Error::Sdl)?;
        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(3, 3);
        gl_attr.set_depth_size(24);
        gl_attr.set_double_buffer(true);

        let window = video_subsystem
            .window(&config.title, config.width, config.height)
            .opengl()
            .position_centered()
            .build()
            .map_err(|e| Error::Window(e.to_string()))?;
        let gl_context = window.gl_create_context().map_err(Error::Window)?;
        window.gl_make_current(&gl_context).map_err(Error::Window)?;

        let interval = if config.vsync {
            sdl2::video::SwapInterval::VSync
        } else {
            sdl2::video::SwapInterval::Immediate
        };
        if let Err(e) = video_subsystem.gl_set_swap_interval(interval) {
            log::warn!("couldn't set swap interval: {e}");
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        unsafe {
            log::info!(
                "OpenGL {} on {}",
                gl.get_parameter_string(glow::VERSION),
                gl.get_parameter_string(glow::RENDERER)
            );
        }

        let event_pump = sdl.event_pump().map_err(Error::Sdl)?;

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl: Arc::new(gl),
            event_pump,
        })
    }
}
