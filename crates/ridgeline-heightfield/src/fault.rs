//! Random fault-plane displacement.
//!
//! Each iteration picks a fault line through a random point in the grid
//! rectangle, oriented by a random unit direction, then raises every vertex
//! on one side of the line by `delta` and lowers every vertex on the other.
//! Repeated a few hundred times this produces fractal-like ridges.

use std::f32::consts::TAU;

use rand::Rng;

use crate::error::HeightfieldError;
use crate::grid::Heightfield;

impl Heightfield {
    /// Run `iterations` rounds of fault displacement, mutating heights in place.
    ///
    /// Per iteration the RNG is consumed in a fixed order: fault point x in
    /// `[min_x, max_x)`, fault point y in `[min_y, max_y)`, then one angle in
    /// `[0, 2π)` giving the unit direction `(cos θ, sin θ)`. A vertex goes up
    /// if `dot(dir, vertex.xy − point) > 0` and down otherwise; a vertex
    /// exactly on the fault line goes down.
    ///
    /// Iterations are strictly sequential: each reads the heights the
    /// previous one wrote, so with a seeded RNG (see
    /// [`fault_rng`](crate::fault_rng)) the result is bit-identical across
    /// runs. With `iterations == 0` heights are untouched.
    ///
    /// Fails with [`HeightfieldError::NormalsFinalized`] once
    /// [`compute_normals`](Self::compute_normals) has run.
    pub fn displace<R: Rng>(
        &mut self,
        iterations: u32,
        delta: f32,
        rng: &mut R,
    ) -> Result<(), HeightfieldError> {
        if self.is_finalized() {
            return Err(HeightfieldError::NormalsFinalized);
        }

        let p = *self.params();
        for _ in 0..iterations {
            let px = rng.random_range(p.min_x..p.max_x);
            let py = rng.random_range(p.min_y..p.max_y);
            let theta = rng.random_range(0.0..TAU);
            let (ny, nx) = theta.sin_cos();

            for v in self.positions_mut() {
                let side = nx * (v.x - px) + ny * (v.y - py);
                if side > 0.0 {
                    v.z += delta;
                } else {
                    v.z -= delta;
                }
            }
        }

        tracing::debug!(iterations, delta, "fault displacement applied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fault_rng;
    use crate::grid::GridParams;

    fn grid() -> Heightfield {
        Heightfield::new(GridParams {
            divisions: 16,
            min_x: -0.5,
            max_x: 0.5,
            min_y: -0.5,
            max_y: 0.5,
        })
        .unwrap()
    }

    #[test]
    fn zero_iterations_leaves_heights_at_zero() {
        let mut hf = grid();
        hf.displace(0, 0.01, &mut fault_rng(7)).unwrap();
        assert!(hf.positions().iter().all(|v| v.z == 0.0));
    }

    #[test]
    fn same_seed_is_bit_identical() {
        let mut a = grid();
        let mut b = grid();
        a.displace(230, 0.0037, &mut fault_rng(42)).unwrap();
        b.displace(230, 0.0037, &mut fault_rng(42)).unwrap();
        for (va, vb) in a.positions().iter().zip(b.positions()) {
            assert_eq!(va.z.to_bits(), vb.z.to_bits());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = grid();
        let mut b = grid();
        a.displace(50, 0.01, &mut fault_rng(1)).unwrap();
        b.displace(50, 0.01, &mut fault_rng(2)).unwrap();
        assert!(
            a.positions()
                .iter()
                .zip(b.positions())
                .any(|(va, vb)| va.z != vb.z)
        );
    }

    #[test]
    fn every_iteration_moves_every_vertex_by_delta() {
        // After n iterations each height is delta times an integer with the
        // same parity as n (each pass adds +delta or -delta to every vertex).
        let mut hf = grid();
        let (n, delta) = (25u32, 0.5f32);
        hf.displace(n, delta, &mut fault_rng(9)).unwrap();
        for v in hf.positions() {
            let steps = v.z / delta;
            assert_eq!(steps, steps.round());
            assert_eq!((steps as i64).rem_euclid(2), (n as i64).rem_euclid(2));
            assert!(steps.abs() as u32 <= n);
        }
    }

    #[test]
    fn displacement_moves_the_height_range() {
        let mut hf = grid();
        hf.displace(100, 0.01, &mut fault_rng(3)).unwrap();
        let (min_z, max_z) = hf.height_range();
        assert!(min_z < 0.0);
        assert!(max_z > 0.0);
    }

    #[test]
    fn displace_after_finalize_is_rejected() {
        let mut hf = grid();
        hf.displace(10, 0.01, &mut fault_rng(4)).unwrap();
        hf.compute_normals().unwrap();
        let err = hf.displace(1, 0.01, &mut fault_rng(4)).unwrap_err();
        assert!(matches!(err, HeightfieldError::NormalsFinalized));
    }

    #[test]
    fn xy_coordinates_never_change() {
        let mut hf = grid();
        let before: Vec<_> = hf.positions().iter().map(|v| (v.x, v.y)).collect();
        hf.displace(60, 0.02, &mut fault_rng(11)).unwrap();
        let after: Vec<_> = hf.positions().iter().map(|v| (v.x, v.y)).collect();
        assert_eq!(before, after);
    }
}
