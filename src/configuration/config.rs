//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and step settings
//! - [`BodyConfig`]       – initial state for each body, or
//! - [`RandomConfig`]     – a seeded Gaussian cloud of equal-mass bodies
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A two-body circular orbit:
//!
//! ```yaml
//! parameters:
//!   G: 1.0                  # gravitational constant
//!   softening: 0.0          # softening length epsilon
//!   dt: 0.001               # fixed step size
//!   t_end: 4.44288          # total simulation time
//!   n_steps: 4443           # optional, overrides ceil(t_end / dt)
//!
//! report_every: 500         # optional, log every N steps
//!
//! bodies:
//!   - x: [ -0.5, 0.0, 0.0 ]
//!     v: [  0.0, -0.70710678, 0.0 ]
//!     m: 1.0
//!   - x: [  0.5, 0.0, 0.0 ]
//!     v: [  0.0, 0.70710678, 0.0 ]
//!     m: 1.0
//! ```
//!
//! Instead of `bodies` a scenario may give
//!
//! ```yaml
//! random:
//!   n: 100
//!   total_mass: 20.0
//!   seed: 21
//! ```
//!
//! [`crate::simulation::scenario::Scenario::build_scenario`] maps this onto
//! the runtime types.

use serde::Deserialize;

/// Physical and numerical parameters
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParametersConfig {
    pub G: f64, // gravitational constant
    #[serde(default)]
    pub softening: f64, // softening length, 0 if omitted
    pub dt: f64, // time step size
    pub t_end: f64, // time end
    #[serde(default)]
    pub n_steps: Option<usize>, // explicit step count
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position
    pub v: Vec<f64>, // initial velocity
    pub m: f64, // mass
}

/// Seeded random cloud: N equal masses with standard-normal positions and
/// velocities, shifted to the centre-of-mass frame
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RandomConfig {
    pub n: usize,
    pub total_mass: f64,
    pub seed: u64,
}

fn default_report_every() -> usize {
    100
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    #[serde(default = "default_report_every")]
    pub report_every: usize, // progress log cadence in steps
    #[serde(default)]
    pub bodies: Option<Vec<BodyConfig>>,
    #[serde(default)]
    pub random: Option<RandomConfig>,
}
