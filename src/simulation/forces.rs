//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait used by the integrator and the direct
//! O(N^2) softened Newtonian gravity kernel

use crate::errors::SimError;
use crate::simulation::states::NVec3;

/// Squared (softened) separations at or below this contribute nothing.
///
/// Catches exactly coincident particles when softening is zero, and any
/// separation whose 1/d^3 would overflow an f64.
pub const MIN_SOFTENED_D2: f64 = 1.0e-200;

/// Trait for acceleration sources.
/// Implementations add their contribution into `out[i]` for each particle.
/// Callers pass `positions`, `masses` and `out` of the same length;
/// implementations may panic otherwise
pub trait Acceleration {
    fn acceleration(&self, positions: &[NVec3], masses: &[f64], out: &mut [NVec3]);

    /// Zero `out` and then fill it with this source's accelerations
    fn accumulate_accels(&self, positions: &[NVec3], masses: &[f64], out: &mut [NVec3]) {
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        self.acceleration(positions, masses, out);
    }
}

/// 3D Newtonian gravity with softening (direct n^2 sum)
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub softening: f64, // softening length epsilon
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, positions: &[NVec3], masses: &[f64], out: &mut [NVec3]) {
        let n = positions.len();
        assert!(
            masses.len() == n && out.len() == n,
            "gravity: {} positions, {} masses, {} outputs",
            n,
            masses.len(),
            out.len()
        );
        if n < 2 { // nothing to pair up, no self force
            return;
        }

        let eps2 = self.softening * self.softening;

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let xi = positions[i];
            let mi = masses[i];

            for j in (i + 1)..n {
                let xj = positions[j];
                let mj = masses[j];

                // r points from i to j: i is pulled along +r, j along -r
                let r = xj - xi;

                // d2 = |r|^2 + eps^2
                let d2 = r.dot(&r) + eps2;
                if d2 <= MIN_SOFTENED_D2 {
                    continue;
                }

                // G / d^3
                let inv_r = d2.sqrt().recip();
                let coef = self.G * inv_r * inv_r * inv_r;

                // a_i +=  G * m_j * r / d^3
                // a_j += -G * m_i * r / d^3
                out[i] += (coef * mj) * r;
                out[j] -= (coef * mi) * r;
            }
        }
    }
}

/// Accelerations of every particle due to all others.
///
/// Returns a fresh vector and leaves the inputs untouched. N = 0 gives an
/// empty vector and N = 1 a single zero vector. Fails if `masses` and
/// `positions` differ in length.
#[allow(non_snake_case)]
pub fn compute_accelerations(
    positions: &[NVec3],
    masses: &[f64],
    G: f64,
    softening: f64,
) -> Result<Vec<NVec3>, SimError> {
    if masses.len() != positions.len() {
        return Err(SimError::MassCountMismatch {
            positions: positions.len(),
            masses: masses.len(),
        });
    }

    let mut out = vec![NVec3::zeros(); positions.len()];
    NewtonianGravity { G, softening }.accumulate_accels(positions, masses, &mut out);
    Ok(out)
}
