//! Skybox cube geometry.
//!
//! Eight corner vertices and twelve triangles; the viewer sits inside the
//! cube and samples a cubemap by direction, so no normals or UVs are needed.

use glam::Vec3;

/// Triangle indices for the six cube faces, two triangles each.
const CUBE_INDICES: [u32; 36] = [
    0, 1, 2, 0, 3, 2, // front
    4, 5, 6, 4, 7, 6, // back
    3, 2, 6, 3, 7, 6, // top
    0, 1, 5, 0, 4, 5, // bottom
    2, 1, 5, 2, 6, 5, // right
    4, 0, 3, 4, 7, 3, // left
];

/// Cube geometry for skybox rendering.
pub struct CubeMesh {
    /// The eight cube corners.
    pub positions: Vec<Vec3>,
    /// Triangle index list, 36 entries.
    pub indices: Vec<u32>,
}

/// Build a cube centered on the origin with the given half-extent.
///
/// Corners 0–3 are the z = +`half_extent` face (counter-clockwise from the
/// minimum corner), corners 4–7 the z = −`half_extent` face in the same
/// order.
pub fn cube_mesh(half_extent: f32) -> CubeMesh {
    let h = half_extent;
    let positions = vec![
        Vec3::new(-h, -h, h),
        Vec3::new(h, -h, h),
        Vec3::new(h, h, h),
        Vec3::new(-h, h, h),
        Vec3::new(-h, -h, -h),
        Vec3::new(h, -h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(-h, h, -h),
    ];
    CubeMesh {
        positions,
        indices: CUBE_INDICES.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_eight_corners_and_twelve_triangles() {
        let cube = cube_mesh(100.0);
        assert_eq!(cube.positions.len(), 8);
        assert_eq!(cube.indices.len(), 36);
        assert!(cube.indices.iter().all(|&i| i < 8));
    }

    #[test]
    fn every_corner_is_referenced() {
        let cube = cube_mesh(1.0);
        for corner in 0..8u32 {
            assert!(cube.indices.contains(&corner), "corner {corner} unused");
        }
    }

    #[test]
    fn corners_sit_on_the_half_extent() {
        let cube = cube_mesh(2.5);
        for p in &cube.positions {
            assert_eq!(p.x.abs(), 2.5);
            assert_eq!(p.y.abs(), 2.5);
            assert_eq!(p.z.abs(), 2.5);
        }
    }
}
