//! Small OpenGL tutorial programs and the pieces they share.
//!
//! Each binary under `src/bin` implements [`Example`] and hands itself to
//! [`launch`], which opens a window and drives the render loop.

pub mod abs;
pub mod camera;
pub mod config;
pub mod error;
pub mod example;
pub mod logging;
pub mod shapes;
pub mod skybox;

pub use error::{Error, Result};
pub use example::{Example, ExampleContext, Frame, launch, run};
