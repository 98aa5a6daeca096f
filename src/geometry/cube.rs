//! Unit cube vertex table.
//!
//! 24 vertices describing the 6 faces of an axis-aligned unit cube
//! centered at the origin, 4 vertices per face, as independent quads
//! rather than an indexed mesh.

use glam::Vec3;

/// Number of vertices in the cube table (4 per face, 6 faces).
pub const CUBE_VERTEX_COUNT: usize = 24;

/// Vertex table for a unit cube's 6 faces as independent quads.
///
/// The first three quads share the corner `(-0.5, -0.5, -0.5)` and are
/// each normal to one axis (X, Y, Z in that order); the last three are
/// the opposite faces, each source quad translated one unit along its
/// own axis.
#[derive(Debug, Clone)]
pub struct CubeTable {
    vertices: [Vec3; CUBE_VERTEX_COUNT],
}

impl CubeTable {
    /// Build the 24-vertex table.
    #[must_use]
    pub fn generate() -> Self {
        let mut vertices = [Vec3::ZERO; CUBE_VERTEX_COUNT];

        // X-aligned face
        vertices[0] = Vec3::new(-0.5, -0.5, -0.5);
        vertices[1] = Vec3::new(-0.5, -0.5, 0.5);
        vertices[2] = Vec3::new(-0.5, 0.5, 0.5);
        vertices[3] = Vec3::new(-0.5, 0.5, -0.5);

        // Y-aligned face
        vertices[4] = Vec3::new(-0.5, -0.5, -0.5);
        vertices[5] = Vec3::new(-0.5, -0.5, 0.5);
        vertices[6] = Vec3::new(0.5, -0.5, 0.5);
        vertices[7] = Vec3::new(0.5, -0.5, -0.5);

        // Z-aligned face
        vertices[8] = Vec3::new(-0.5, -0.5, -0.5);
        vertices[9] = Vec3::new(-0.5, 0.5, -0.5);
        vertices[10] = Vec3::new(0.5, 0.5, -0.5);
        vertices[11] = Vec3::new(0.5, -0.5, -0.5);

        // Opposite faces: each source quad shifted one unit along its axis.
        const AXES: [Vec3; 3] = [Vec3::X, Vec3::Y, Vec3::Z];
        for i in 12..CUBE_VERTEX_COUNT {
            let mirror = i - 12;
            vertices[i] = vertices[mirror] + AXES[mirror / 4];
        }

        Self { vertices }
    }

    /// The 24-vertex quad sequence.
    #[must_use]
    pub fn vertices(&self) -> &[Vec3; CUBE_VERTEX_COUNT] {
        &self.vertices
    }
}

impl Default for CubeTable {
    fn default() -> Self {
        Self::generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_faces_share_a_corner() {
        let cube = CubeTable::generate();
        let v = cube.vertices();
        let corner = Vec3::new(-0.5, -0.5, -0.5);
        assert_eq!(v[0], corner);
        assert_eq!(v[4], corner);
        assert_eq!(v[8], corner);
    }

    #[test]
    fn mirror_faces_are_unit_translations() {
        let cube = CubeTable::generate();
        let v = cube.vertices();
        let axes = [Vec3::X, Vec3::Y, Vec3::Z];
        for i in 12..CUBE_VERTEX_COUNT {
            let mirror = i - 12;
            assert_eq!(v[i], v[mirror] + axes[mirror / 4], "vertex {i}");
        }
    }

    #[test]
    fn faces_are_planar_unit_quads() {
        let cube = CubeTable::generate();
        let v = cube.vertices();
        // Axis each face is normal to, and that axis' constant coordinate.
        let expected = [
            (0, -0.5),
            (1, -0.5),
            (2, -0.5),
            (0, 0.5),
            (1, 0.5),
            (2, 0.5),
        ];
        for (face, (axis, plane)) in expected.iter().enumerate() {
            let quad = &v[face * 4..face * 4 + 4];
            for p in quad {
                assert_eq!(p[*axis], *plane, "face {face} not planar");
            }
            for k in 0..4 {
                let edge = quad[(k + 1) % 4] - quad[k];
                assert!(
                    (edge.length() - 1.0).abs() < 1e-6,
                    "face {face} edge {k} not unit length"
                );
            }
        }
    }
}
