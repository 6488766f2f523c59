//! Error type shared by every example.
//!
//! Nothing in here is recoverable. The harness logs the error and exits, so the
//! variants exist mostly to produce a useful diagnostic.

use std::path::PathBuf;

/// Everything that can go wrong while setting up an example.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("SDL error: {0}")]
    Sdl(String),
    #[error("couldn't create a window: {0}")]
    Window(String),
    #[error("OpenGL error: {0}")]
    Gl(String),
    #[error("failed to compile shader `{name}`:\n{log}")]
    ShaderCompile { name: String, log: String },
    #[error("failed to link shader program:\n{0}")]
    ProgramLink(String),
    #[error("image decoder error for {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("invalid skybox image layout: {0}")]
    SkyboxLayout(String),
    #[error("framebuffer incomplete (status 0x{0:04X})")]
    FramebufferIncomplete(u32),
    #[error("couldn't read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_errors_name_the_shader() {
        let err = Error::ShaderCompile {
            name: "cube.vert".to_string(),
            log: "0:3(1): error: syntax error".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("`cube.vert`"));
        assert!(msg.contains("syntax error"));
    }

    #[test]
    fn framebuffer_status_is_hex() {
        let err = Error::FramebufferIncomplete(glow::FRAMEBUFFER_INCOMPLETE_ATTACHMENT);
        assert_eq!(err.to_string(), "framebuffer incomplete (status 0x8CD6)");
    }
}
