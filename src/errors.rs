//! Error types for nbsim.
//!
//! Every variant is a configuration problem detected before the
//! integrator touches any state. Numeric degeneracy inside the loop is
//! never reported here.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Positions, velocities and masses disagree on N
    #[error("particle arrays differ in length: {positions} positions, {velocities} velocities, {masses} masses")]
    LengthMismatch {
        positions: usize,
        velocities: usize,
        masses: usize,
    },

    /// Kernel input with a different number of masses than positions
    #[error("force kernel got {positions} positions but {masses} masses")]
    MassCountMismatch { positions: usize, masses: usize },

    /// Mass is zero, negative or not finite
    #[error("particle {index} has invalid mass {mass} (must be positive and finite)")]
    NonPositiveMass { index: usize, mass: f64 },

    #[error("time step must be positive, got {0}")]
    NonPositiveTimeStep(f64),

    #[error("end time must be positive, got {0}")]
    NonPositiveDuration(f64),

    #[error("softening length must be non-negative, got {0}")]
    NegativeSoftening(f64),

    #[error("parameter `{name}` must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },

    /// A body vector from a scenario file that is not 3 components long
    #[error("body {index}: `{field}` has {len} components, expected 3")]
    BadVector {
        index: usize,
        field: &'static str,
        len: usize,
    },

    #[error("scenario must define exactly one of `bodies` or `random`")]
    BodySource,

    #[error("random cloud needs at least one particle")]
    EmptyRandomCloud,
}

impl SimError {
    /// Check positions, velocities and masses describe the same N
    pub(crate) fn same_lengths(positions: usize, velocities: usize, masses: usize) -> Result<(), SimError> {
        if positions == velocities && positions == masses {
            Ok(())
        } else {
            Err(SimError::LengthMismatch {
                positions,
                velocities,
                masses,
            })
        }
    }

    /// Check a named scalar is finite
    pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64, SimError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(SimError::NonFiniteParameter { name, value })
        }
    }
}
