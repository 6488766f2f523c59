//! A full screen rectangle.

use glam::Vec2;

use super::{PositionTexCoord, ShapeData};

/// Covers the whole of clip space, `[-1, 1]` on both axes, with texture
/// coordinates running from 0 to 1 across it.
pub fn rectangle() -> ShapeData<PositionTexCoord> {
    let corners = [
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(-1.0, 1.0),
    ];
    let vertices = corners
        .iter()
        .map(|&position| PositionTexCoord {
            position,
            tex_coord: (position + Vec2::ONE) * 0.5,
        })
        .collect();

    ShapeData {
        vertices,
        indices: Some(vec![0, 1, 2, 0, 2, 3]),
        mode: glow::TRIANGLES,
    }
}
