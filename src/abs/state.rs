//! Scoped GL state changes.

use glow::HasContext;

/// Enables or disables a capability until dropped, then puts back whatever
/// state it found.
pub struct CapabilityGuard<'a> {
    gl: &'a glow::Context,
    capability: u32,
    was_enabled: bool,
}

impl<'a> CapabilityGuard<'a> {
    pub fn enable(gl: &'a glow::Context, capability: u32) -> Self {
        Self::set(gl, capability, true)
    }

    pub fn disable(gl: &'a glow::Context, capability: u32) -> Self {
        Self::set(gl, capability, false)
    }

    fn set(gl: &'a glow::Context, capability: u32, enabled: bool) -> Self {
        unsafe {
            let was_enabled = gl.is_enabled(capability);
            if enabled {
                gl.enable(capability);
            } else {
                gl.disable(capability);
            }
            Self {
                gl,
                capability,
                was_enabled,
            }
        }
    }
}

impl Drop for CapabilityGuard<'_> {
    fn drop(&mut self) {
        unsafe {
            if self.was_enabled {
                self.gl.enable(self.capability);
            } else {
                self.gl.disable(self.capability);
            }
        }
    }
}
