//! A capped cylinder standing on the Y axis.
//!
//! The vertex buffer is not indexed. It holds the side as one triangle strip
//! followed by the bottom and the top cap as triangle fans, and each part is
//! drawn separately with [`Mesh::draw_range`](crate::abs::Mesh::draw_range).

use std::{f32::consts::TAU, ops::Range};

use glam::Vec3;

use super::{PositionNormal, ShapeData};

pub const HALF_HEIGHT: f32 = 0.5;
pub const RADIUS: f32 = 0.5;
pub const RINGS: usize = 32;
pub const SIDE_VERTICES: usize = (RINGS + 1) * 2;
pub const VERTICES_PER_CAP: usize = RINGS + 2;
pub const TOTAL_VERTICES: usize = SIDE_VERTICES + 2 * VERTICES_PER_CAP;

fn rim(angle: f32, y: f32) -> Vec3 {
    Vec3::new(RADIUS * angle.sin(), y, RADIUS * angle.cos())
}

fn ring_angle(i: usize) -> f32 {
    i as f32 * TAU / RINGS as f32
}

pub fn cylinder() -> ShapeData<PositionNormal> {
    let mut vertices = Vec::with_capacity(TOTAL_VERTICES);

    for i in 0..=RINGS {
        let angle = ring_angle(i);
        for y in [HALF_HEIGHT, -HALF_HEIGHT] {
            let position = rim(angle, y);
            vertices.push(PositionNormal {
                position,
                normal: position.with_y(0.0).normalize(),
            });
        }
    }

    for y in [-HALF_HEIGHT, HALF_HEIGHT] {
        let normal = Vec3::new(0.0, y.signum(), 0.0);
        vertices.push(PositionNormal {
            position: Vec3::new(0.0, y, 0.0),
            normal,
        });
        for i in 0..=RINGS {
            vertices.push(PositionNormal {
                position: rim(ring_angle(i), y),
                normal,
            });
        }
    }

    ShapeData {
        vertices,
        indices: None,
        mode: glow::TRIANGLE_STRIP,
    }
}

/// Vertex range of the side, drawn as `TRIANGLE_STRIP`.
pub fn side_range() -> Range<usize> {
    0..SIDE_VERTICES
}

/// Vertex range of the bottom cap, drawn as `TRIANGLE_FAN`.
pub fn bottom_cap_range() -> Range<usize> {
    SIDE_VERTICES..SIDE_VERTICES + VERTICES_PER_CAP
}

/// Vertex range of the top cap, drawn as `TRIANGLE_FAN`.
pub fn top_cap_range() -> Range<usize> {
    SIDE_VERTICES + VERTICES_PER_CAP..TOTAL_VERTICES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_counts() {
        assert_eq!(SIDE_VERTICES, 66);
        assert_eq!(VERTICES_PER_CAP, 34);
        assert_eq!(cylinder().vertices.len(), TOTAL_VERTICES);
    }

    #[test]
    fn ranges_tile_the_buffer() {
        assert_eq!(side_range().start, 0);
        assert_eq!(side_range().end, bottom_cap_range().start);
        assert_eq!(bottom_cap_range().end, top_cap_range().start);
        assert_eq!(top_cap_range().end, TOTAL_VERTICES);
        assert_eq!(bottom_cap_range().len(), VERTICES_PER_CAP);
        assert_eq!(top_cap_range().len(), VERTICES_PER_CAP);
    }

    #[test]
    fn side_alternates_top_and_bottom() {
        let shape = cylinder();
        for (i, v) in shape.vertices[side_range()].iter().enumerate() {
            let expected = if i % 2 == 0 { HALF_HEIGHT } else { -HALF_HEIGHT };
            assert_eq!(v.position.y, expected);
            assert!((v.position.with_y(0.0).length() - RADIUS).abs() < 1e-6);
        }
    }

    #[test]
    fn side_normals_are_horizontal_and_outward() {
        let shape = cylinder();
        for v in &shape.vertices[side_range()] {
            assert_eq!(v.normal.y, 0.0);
            assert!((v.normal.length() - 1.0).abs() < 1e-6);
            assert!(v.normal.dot(v.position.with_y(0.0)) > 0.0);
        }
    }

    #[test]
    fn strip_closes_the_loop() {
        let shape = cylinder();
        let side = &shape.vertices[side_range()];
        assert!((side[0].position - side[SIDE_VERTICES - 2].position).length() < 1e-6);
        assert!((side[1].position - side[SIDE_VERTICES - 1].position).length() < 1e-6);
    }

    #[test]
    fn caps_start_at_their_centre() {
        let shape = cylinder();
        for (range, y) in [(bottom_cap_range(), -HALF_HEIGHT), (top_cap_range(), HALF_HEIGHT)] {
            let cap = &shape.vertices[range];
            assert_eq!(cap[0].position, Vec3::new(0.0, y, 0.0));
            for v in cap {
                assert_eq!(v.position.y, y);
                assert_eq!(v.normal, Vec3::new(0.0, y.signum(), 0.0));
            }
            for v in &cap[1..] {
                assert!((v.position.with_y(0.0).length() - RADIUS).abs() < 1e-6);
            }
        }
    }
}
