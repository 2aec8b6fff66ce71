//! Area-weighted vertex normals.
//!
//! Face normals are taken as the raw cross product of two edge vectors and
//! summed into every incident vertex without normalizing first, so larger
//! faces contribute more. One normalization pass at the end turns the
//! accumulators into unit normals.

use glam::Vec3;

use crate::error::HeightfieldError;
use crate::grid::Heightfield;

/// Accumulators shorter than this are treated as degenerate and replaced by
/// the +Z fallback instead of being normalized into NaNs.
const DEGENERATE_SQ_LEN: f32 = 1e-12;

impl Heightfield {
    /// Derive unit vertex normals from the current heights, one-shot.
    ///
    /// For each triangle `(v0, v1, v2)` the raw normal
    /// `cross(v1−v0, v2−v0)` is added to all three vertices' accumulators;
    /// every accumulator is then normalized. A vertex whose accumulator is
    /// (numerically) zero gets `+Z`, though no grid vertex can reach that
    /// state since each is referenced by at least one non-degenerate face.
    ///
    /// After this pass the heightfield is frozen: calling this again, or
    /// [`displace`](Self::displace), fails with
    /// [`HeightfieldError::NormalsFinalized`].
    pub fn compute_normals(&mut self) -> Result<(), HeightfieldError> {
        if self.is_finalized() {
            return Err(HeightfieldError::NormalsFinalized);
        }

        let mut accum = vec![Vec3::ZERO; self.vertex_count()];
        let positions = self.positions();
        for tri in self.indices().chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
            accum[a] += face;
            accum[b] += face;
            accum[c] += face;
        }

        for n in &mut accum {
            *n = if n.length_squared() < DEGENERATE_SQ_LEN {
                Vec3::Z
            } else {
                n.normalize()
            };
        }

        *self.normals_slot() = Some(accum);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fault_rng;
    use crate::grid::GridParams;

    const TOLERANCE: f32 = 1e-5;

    fn grid(div: u32) -> Heightfield {
        Heightfield::new(GridParams {
            divisions: div,
            min_x: -0.5,
            max_x: 0.5,
            min_y: -0.5,
            max_y: 0.5,
        })
        .unwrap()
    }

    #[test]
    fn flat_grid_normals_point_up() {
        let mut hf = grid(4);
        hf.compute_normals().unwrap();
        for n in hf.normals().unwrap() {
            assert!((*n - Vec3::Z).length() < TOLERANCE);
        }
    }

    #[test]
    fn displaced_normals_are_unit_length() {
        let mut hf = grid(20);
        hf.displace(230, 0.0037, &mut fault_rng(5)).unwrap();
        hf.compute_normals().unwrap();
        for n in hf.normals().unwrap() {
            assert!((n.length() - 1.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn normals_absent_before_finalization() {
        let mut hf = grid(4);
        assert!(hf.normals().is_none());
        hf.displace(10, 0.01, &mut fault_rng(6)).unwrap();
        assert!(hf.normals().is_none());
        hf.compute_normals().unwrap();
        assert_eq!(hf.normals().unwrap().len(), hf.vertex_count());
    }

    #[test]
    fn compute_normals_is_one_shot() {
        let mut hf = grid(4);
        hf.compute_normals().unwrap();
        let err = hf.compute_normals().unwrap_err();
        assert!(matches!(err, HeightfieldError::NormalsFinalized));
    }

    #[test]
    fn rough_terrain_tilts_normals_away_from_up() {
        let mut hf = grid(20);
        hf.displace(230, 0.02, &mut fault_rng(8)).unwrap();
        hf.compute_normals().unwrap();
        assert!(hf.normals().unwrap().iter().any(|n| n.z < 0.999));
    }
}
