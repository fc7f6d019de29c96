pub mod errors;
pub mod simulation;
pub mod configuration;
pub mod diagnostics;
pub mod benchmark;

pub use errors::SimError;

pub use simulation::states::{ParticleSet, NVec3};
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, NewtonianGravity, compute_accelerations, MIN_SOFTENED_D2};
pub use simulation::energy::{Energy, compute_energy};
pub use simulation::integrator::{Simulation, StepSnapshot, StepObserver, run};
pub use simulation::scenario::{Scenario, random_cloud};

pub use configuration::config::{ParametersConfig, BodyConfig, RandomConfig, ScenarioConfig};

pub use diagnostics::energy_log::{EnergyLog, EnergyRecord};

pub use benchmark::benchmark::{bench_gravity, bench_leapfrog};
