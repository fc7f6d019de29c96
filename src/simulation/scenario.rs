//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! holding the validated parameters and the initial particle set.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::configuration::config::{BodyConfig, ParametersConfig, RandomConfig, ScenarioConfig};
use crate::errors::SimError;
use crate::simulation::integrator::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, ParticleSet};

/// A runnable scenario: parameters plus bodies at t = 0
#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub particles: ParticleSet,
    pub report_every: usize,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let parameters = parameters_from(&cfg.parameters);
        parameters.validate()?;

        let particles = match (&cfg.bodies, &cfg.random) {
            (Some(bodies), None) => bodies_from(bodies)?,
            (None, Some(random)) => random_cloud(random)?,
            _ => return Err(SimError::BodySource),
        };

        debug!(
            "built scenario: {} bodies, total mass {}",
            particles.len(),
            particles.total_mass()
        );

        Ok(Self {
            parameters,
            particles,
            report_every: cfg.report_every.max(1),
        })
    }

    /// Hand the bodies to a gravity simulation
    pub fn into_simulation(self) -> Result<Simulation, SimError> {
        Simulation::new(self.particles, self.parameters)
    }
}

fn parameters_from(cfg: &ParametersConfig) -> Parameters {
    Parameters {
        G: cfg.G,
        softening: cfg.softening,
        dt: cfg.dt,
        t_end: cfg.t_end,
        steps: cfg.n_steps,
    }
}

fn vec3(index: usize, field: &'static str, c: &[f64]) -> Result<NVec3, SimError> {
    match c {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(SimError::BadVector {
            index,
            field,
            len: c.len(),
        }),
    }
}

fn bodies_from(bodies: &[BodyConfig]) -> Result<ParticleSet, SimError> {
    let mut positions = Vec::with_capacity(bodies.len());
    let mut velocities = Vec::with_capacity(bodies.len());
    let mut masses = Vec::with_capacity(bodies.len());

    for (i, bc) in bodies.iter().enumerate() {
        positions.push(vec3(i, "x", &bc.x)?);
        velocities.push(vec3(i, "v", &bc.v)?);
        masses.push(bc.m);
    }

    ParticleSet::new(positions, velocities, masses)
}

/// Gaussian cloud of `n` equal masses, net momentum removed
pub fn random_cloud(cfg: &RandomConfig) -> Result<ParticleSet, SimError> {
    if cfg.n == 0 {
        return Err(SimError::EmptyRandomCloud);
    }

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut normal3 = || {
        NVec3::new(
            rng.sample(StandardNormal),
            rng.sample(StandardNormal),
            rng.sample(StandardNormal),
        )
    };

    let positions: Vec<NVec3> = (0..cfg.n).map(|_| normal3()).collect();
    let mut velocities: Vec<NVec3> = (0..cfg.n).map(|_| normal3()).collect();
    let masses = vec![cfg.total_mass / cfg.n as f64; cfg.n];

    // Centre-of-mass frame: v_i -= sum(m v) / sum(m)
    let total_mass: f64 = masses.iter().sum();
    let momentum = velocities
        .iter()
        .zip(masses.iter())
        .fold(NVec3::zeros(), |p, (v, &m)| p + m * v);
    let v_com = momentum / total_mass;
    for v in velocities.iter_mut() {
        *v -= v_com;
    }

    ParticleSet::new(positions, velocities, masses)
}
