//! Kinetic and potential energy of the system, used to watch conservation.

use crate::errors::SimError;
use crate::simulation::forces::MIN_SOFTENED_D2;
use crate::simulation::states::NVec3;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Energy {
    pub kinetic: f64,
    pub potential: f64,
}

impl Energy {
    pub fn total(&self) -> f64 {
        self.kinetic + self.potential
    }
}

/// KE = 1/2 sum m_i |v_i|^2, PE = -G sum_{i<j} m_i m_j / |r_i - r_j|.
///
/// The potential is unsoftened and counts each unordered pair once.
/// Coincident pairs are skipped rather than sending PE to -inf, so the
/// result is an approximation for such configurations.
/// Fails if the three slices differ in length.
#[allow(non_snake_case)]
pub fn compute_energy(positions: &[NVec3], velocities: &[NVec3], masses: &[f64], G: f64) -> Result<Energy, SimError> {
    SimError::same_lengths(positions.len(), velocities.len(), masses.len())?;
    Ok(system_energy(positions, velocities, masses, G))
}

/// Energy of slices already known to have equal lengths
#[allow(non_snake_case)]
pub(crate) fn system_energy(positions: &[NVec3], velocities: &[NVec3], masses: &[f64], G: f64) -> Energy {
    let kinetic = 0.5 * velocities
        .iter()
        .zip(masses.iter())
        .map(|(v, &m)| m * v.norm_squared())
        .sum::<f64>();

    let n = positions.len();
    let mut pair_sum = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let r2 = (positions[j] - positions[i]).norm_squared();
            if r2 <= MIN_SOFTENED_D2 {
                continue;
            }
            pair_sum -= masses[i] * masses[j] / r2.sqrt();
        }
    }

    Energy {
        kinetic,
        potential: G * pair_sum,
    }
}
