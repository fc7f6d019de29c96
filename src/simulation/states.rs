//! Core state types for the N-body simulation.
//!
//! `ParticleSet` stores the bodies as three parallel sequences
//! (positions, velocities, masses) indexed by particle. The lengths are
//! checked once at construction and can not drift apart afterwards since
//! only the integrator gets mutable access.

use nalgebra::Vector3;

use crate::errors::SimError;

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSet {
    pub(crate) positions: Vec<NVec3>, // x_i
    pub(crate) velocities: Vec<NVec3>, // v_i
    masses: Vec<f64>, // m_i, fixed for the run
}

impl ParticleSet {
    /// Build a particle set from initial conditions.
    ///
    /// Fails if the three sequences have different lengths or if any mass
    /// is not a positive finite number. An empty set is allowed.
    pub fn new(positions: Vec<NVec3>, velocities: Vec<NVec3>, masses: Vec<f64>) -> Result<Self, SimError> {
        SimError::same_lengths(positions.len(), velocities.len(), masses.len())?;

        if let Some((index, &mass)) = masses
            .iter()
            .enumerate()
            .find(|(_, m)| !(m.is_finite() && **m > 0.0))
        {
            return Err(SimError::NonPositiveMass { index, mass });
        }

        Ok(Self {
            positions,
            velocities,
            masses,
        })
    }

    /// Number of particles
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    pub fn positions(&self) -> &[NVec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[NVec3] {
        &self.velocities
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// Sum of all masses
    pub fn total_mass(&self) -> f64 {
        self.masses.iter().sum()
    }

    /// Total linear momentum sum(m_i * v_i)
    pub fn momentum(&self) -> NVec3 {
        self.velocities
            .iter()
            .zip(self.masses.iter())
            .fold(NVec3::zeros(), |p, (v, &m)| p + m * v)
    }

    /// Mass-weighted mean position
    pub fn center_of_mass(&self) -> NVec3 {
        if self.is_empty() {
            return NVec3::zeros();
        }
        let weighted = self
            .positions
            .iter()
            .zip(self.masses.iter())
            .fold(NVec3::zeros(), |c, (x, &m)| c + m * x);
        weighted / self.total_mass()
    }
}
