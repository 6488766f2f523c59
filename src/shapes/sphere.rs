//! A UV sphere centred on the origin.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::{PositionNormal, ShapeData};

pub const RADIUS: f32 = 0.5;
pub const DEFAULT_RINGS: u32 = 32;
pub const DEFAULT_SEGMENTS: u32 = 64;

/// Sphere of diameter 1 split into `rings` latitude bands and `segments`
/// longitude slices. The seam and the poles repeat vertices so the index
/// layout stays a plain grid. Both counts must be non-zero.
pub fn sphere(rings: u32, segments: u32) -> ShapeData<PositionNormal> {
    debug_assert!(
        rings > 0 && segments > 0,
        "sphere needs at least one ring and one segment, got {rings}x{segments}"
    );
    let mut vertices = Vec::with_capacity(((rings + 1) * (segments + 1)) as usize);
    for ring in 0..=rings {
        let theta = PI * ring as f32 / rings as f32;
        for segment in 0..=segments {
            let phi = TAU * segment as f32 / segments as f32;
            let dir = Vec3::new(theta.sin() * phi.sin(), theta.cos(), theta.sin() * phi.cos());
            vertices.push(PositionNormal {
                position: RADIUS * dir,
                normal: dir,
            });
        }
    }

    let row = segments + 1;
    let mut indices = Vec::with_capacity((rings * segments * 6) as usize);
    for ring in 0..rings {
        for segment in 0..segments {
            let a = ring * row + segment;
            let b = a + row;
            indices.extend([a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    ShapeData {
        vertices,
        indices: Some(indices),
        mode: glow::TRIANGLES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::test_util::triangles;

    #[test]
    fn vertices_lie_on_the_surface() {
        for v in sphere(8, 16).vertices {
            assert!((v.position.length() - RADIUS).abs() < 1e-5);
            assert!((v.normal.length() - 1.0).abs() < 1e-5);
            assert!(v.normal.dot(v.position) > 0.0);
        }
    }

    #[test]
    fn index_layout() {
        let shape = sphere(8, 16);
        let indices = shape.indices.unwrap();
        assert_eq!(shape.vertices.len(), 9 * 17);
        assert_eq!(indices.len(), 8 * 16 * 6);
        assert!(indices.iter().all(|&i| (i as usize) < shape.vertices.len()));
    }

    #[test]
    fn poles_are_on_the_y_axis() {
        let shape = sphere(4, 4);
        assert!((shape.vertices[0].position - Vec3::new(0.0, RADIUS, 0.0)).length() < 1e-6);
        let last = shape.vertices.last().unwrap();
        assert!((last.position - Vec3::new(0.0, -RADIUS, 0.0)).length() < 1e-6);
    }

    #[test]
    fn non_degenerate_triangles_face_outward() {
        let shape = sphere(12, 24);
        let positions: Vec<Vec3> = shape.vertices.iter().map(|v| v.position).collect();
        let indices = shape.indices.unwrap();
        let mut checked = 0;
        for [a, b, c] in triangles(&positions, &indices) {
            let n = (b - a).cross(c - a);
            if n.length() < 1e-7 {
                continue;
            }
            let centre = (a + b + c) / 3.0;
            assert!(n.dot(centre) > 0.0);
            checked += 1;
        }
        assert!(checked > 12 * 24);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "at least one ring")]
    fn zero_rings_are_rejected() {
        sphere(0, 8);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "at least one ring")]
    fn zero_segments_are_rejected() {
        sphere(8, 0);
    }
}
