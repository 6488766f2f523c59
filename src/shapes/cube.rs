//! A unit cube centred on the origin.

use glam::Vec3;

use super::{PositionNormal, ShapeData};

/// Outward normal and two in-plane axes per face, with `u × v = normal` so
/// the faces wind counter-clockwise seen from outside.
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::NEG_Z, Vec3::Y),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::X, Vec3::NEG_Z),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
];

/// Side length 1, four vertices per face so every face gets a flat normal.
pub fn cube() -> ShapeData<PositionNormal> {
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, u, v) in FACES {
        let base = vertices.len() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            vertices.push(PositionNormal {
                position: 0.5 * (normal + su * u + sv * v),
                normal,
            });
        }
        indices.extend([base, base + 1, base + 2, base, base + 2, base + 3]);
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
    fn counts() {
        let shape = cube();
        assert_eq!(shape.vertices.len(), 24);
        assert_eq!(shape.indices.as_ref().map(Vec::len), Some(36));
    }

    #[test]
    fn fits_in_the_unit_box() {
        for v in cube().vertices {
            assert_eq!(v.position.abs(), Vec3::splat(0.5));
        }
    }

    #[test]
    fn normals_point_outward() {
        for v in cube().vertices {
            assert!((v.normal.length() - 1.0).abs() < 1e-6);
            assert!(v.normal.dot(v.position) > 0.0);
        }
    }

    #[test]
    fn winds_counter_clockwise_from_outside() {
        let shape = cube();
        let positions: Vec<Vec3> = shape.vertices.iter().map(|v| v.position).collect();
        let indices = shape.indices.unwrap();
        for (tri, idx) in triangles(&positions, &indices)
            .into_iter()
            .zip(indices.chunks_exact(3))
        {
            let [a, b, c] = tri;
            let face_normal = (b - a).cross(c - a);
            let normal = shape.vertices[idx[0] as usize].normal;
            assert!(face_normal.dot(normal) > 0.0, "{tri:?}");
        }
    }
}
