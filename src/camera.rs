//! View, projection and model matrices shared by the 3D examples.

use std::f32::consts::FRAC_PI_3;

use glam::{Mat4, Vec3};

pub const FOV_Y: f32 = FRAC_PI_3;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

/// Eye position of a camera circling the Y axis.
pub fn orbit_eye(t: f32, radius: f32, angular_speed: f32, height: f32) -> Vec3 {
    let angle = angular_speed * t;
    radius * Vec3::new(angle.sin(), height, angle.cos())
}

/// Look-at matrix for a camera circling the Y axis and facing the origin.
pub fn orbit_view(t: f32, radius: f32, angular_speed: f32, height: f32) -> Mat4 {
    Mat4::look_at_rh(
        orbit_eye(t, radius, angular_speed, height),
        Vec3::ZERO,
        Vec3::Y,
    )
}

/// Perspective projection for a screen of the given size.
pub fn perspective(width: u32, height: u32) -> Mat4 {
    Mat4::perspective_rh_gl(FOV_Y, width as f32 / height as f32, Z_NEAR, Z_FAR)
}

/// Projection times view for a directional light shining towards the origin
/// from `light_dir`, covering a box of half extent `radius` around it.
pub fn light_space_transform(light_dir: Vec3, radius: f32) -> Mat4 {
    let proj = Mat4::orthographic_rh_gl(-radius, radius, -radius, radius, 0.0, 2.0 * radius);
    let view = Mat4::look_at_rh(radius * light_dir.normalize(), Vec3::ZERO, Vec3::Y);
    proj * view
}

pub fn translate(offset: Vec3) -> Mat4 {
    Mat4::from_translation(offset)
}

/// Scales first, then translates.
pub fn translate_scale(offset: Vec3, scale: Vec3) -> Mat4 {
    Mat4::from_translation(offset) * Mat4::from_scale(scale)
}
