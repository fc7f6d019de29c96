//! Fixed-step time integration for the N-body system
//!
//! `Simulation` owns the particle state and advances it with a
//! kick-drift-kick leapfrog driven by an [`Acceleration`] source.
//! Every completed step produces a [`StepSnapshot`] that is handed to a
//! caller supplied [`StepObserver`].

use log::{debug, trace};

use crate::errors::SimError;
use crate::simulation::energy::{system_energy, Energy};
use crate::simulation::forces::{Acceleration, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, ParticleSet};

/// Read-only view of the system after a completed step.
/// Only valid until the next step starts.
#[derive(Debug, Clone, Copy)]
pub struct StepSnapshot<'a> {
    pub step: usize, // 1-based index of the completed step, 0 before any step
    pub t: f64, // simulation time
    pub positions: &'a [NVec3],
    pub velocities: &'a [NVec3],
    pub energy: Energy,
}

/// Consumer of step snapshots (energy log, trajectory recorder, display...)
pub trait StepObserver {
    fn on_step(&mut self, snapshot: &StepSnapshot<'_>);
}

impl<F> StepObserver for F
where
    F: FnMut(&StepSnapshot<'_>),
{
    fn on_step(&mut self, snapshot: &StepSnapshot<'_>) {
        self(snapshot)
    }
}

/// Discards every snapshot
impl StepObserver for () {
    fn on_step(&mut self, _snapshot: &StepSnapshot<'_>) {}
}

/// A particle set being stepped through time
#[derive(Debug, Clone)]
pub struct Simulation<A: Acceleration = NewtonianGravity> {
    particles: ParticleSet,
    params: Parameters,
    accel: A,
    accels: Vec<NVec3>, // a(x) at the current positions
    t: f64,
    step: usize,
}

impl Simulation<NewtonianGravity> {
    /// Set up a gravity run. Parameters are validated before anything else;
    /// the particle state is left exactly as given.
    pub fn new(particles: ParticleSet, params: Parameters) -> Result<Self, SimError> {
        let gravity = NewtonianGravity {
            G: params.G,
            softening: params.softening,
        };
        Self::with_acceleration(particles, params, gravity)
    }
}

impl<A: Acceleration> Simulation<A> {
    pub fn with_acceleration(particles: ParticleSet, params: Parameters, accel: A) -> Result<Self, SimError> {
        params.validate()?;

        // a_0 from x_0, reused by the first half kick
        let mut accels = vec![NVec3::zeros(); particles.len()];
        accel.accumulate_accels(particles.positions(), particles.masses(), &mut accels);

        debug!(
            "simulation ready: {} particles, dt = {}, {} steps to t_end = {}",
            particles.len(),
            params.dt,
            params.n_steps(),
            params.t_end
        );

        Ok(Self {
            particles,
            params,
            accel,
            accels,
            t: 0.0,
            step: 0,
        })
    }

    /// Advance the system by one kick-drift-kick step.
    ///
    /// One force evaluation per step: the accelerations computed at the end
    /// of a step are reused for the opening half kick of the next one. The
    /// two half kicks that meet between steps add up to the full-step kick
    /// of the textbook leapfrog while keeping velocities synchronized with
    /// positions at each snapshot.
    pub fn step(&mut self) -> StepSnapshot<'_> {
        let dt = self.params.dt;
        let half_dt = 0.5 * dt;

        // Kick: v_n+1/2 = v_n + (dt/2) * a_n
        for (v, a) in self.particles.velocities.iter_mut().zip(self.accels.iter()) {
            *v += half_dt * *a;
        }

        // Drift: x_n+1 = x_n + dt * v_n+1/2, for every body before any force is read
        for (x, v) in self.particles.positions.iter_mut().zip(self.particles.velocities.iter()) {
            *x += dt * *v;
        }

        // a_n+1 from x_n+1
        self.accel
            .accumulate_accels(&self.particles.positions, self.particles.masses(), &mut self.accels);

        // Kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1
        for (v, a) in self.particles.velocities.iter_mut().zip(self.accels.iter()) {
            *v += half_dt * *a;
        }

        self.t += dt;
        self.step += 1;

        let snapshot = self.snapshot();
        trace!(
            "step {} t = {:.6} KE = {:.9e} PE = {:.9e}",
            snapshot.step,
            snapshot.t,
            snapshot.energy.kinetic,
            snapshot.energy.potential
        );
        snapshot
    }

    /// Run `n_steps` steps, handing every snapshot to `observer`.
    /// `n_steps == 0` does nothing at all.
    pub fn run<O>(&mut self, n_steps: usize, observer: &mut O)
    where
        O: StepObserver + ?Sized,
    {
        for _ in 0..n_steps {
            let snapshot = self.step();
            observer.on_step(&snapshot);
        }
    }

    /// Run the remaining steps up to `params.n_steps()`
    pub fn run_to_end<O>(&mut self, observer: &mut O)
    where
        O: StepObserver + ?Sized,
    {
        let remaining = self.params.n_steps().saturating_sub(self.step);
        self.run(remaining, observer);
    }

    /// Current state as a snapshot, energies freshly computed
    pub fn snapshot(&self) -> StepSnapshot<'_> {
        let p = &self.particles;
        StepSnapshot {
            step: self.step,
            t: self.t,
            positions: p.positions(),
            velocities: p.velocities(),
            energy: system_energy(p.positions(), p.velocities(), p.masses(), self.params.G),
        }
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn into_particles(self) -> ParticleSet {
        self.particles
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn steps_done(&self) -> usize {
        self.step
    }
}

/// Validate the inputs, integrate `n_steps` leapfrog steps under softened
/// gravity and return the final particle state.
///
/// Nothing is run if any input is invalid.
#[allow(non_snake_case, clippy::too_many_arguments)]
pub fn run<O>(
    positions: Vec<NVec3>,
    velocities: Vec<NVec3>,
    masses: Vec<f64>,
    G: f64,
    softening: f64,
    dt: f64,
    n_steps: usize,
    observer: &mut O,
) -> Result<ParticleSet, SimError>
where
    O: StepObserver + ?Sized,
{
    let particles = ParticleSet::new(positions, velocities, masses)?;
    let params = Parameters {
        G,
        softening,
        dt,
        // informational only, the explicit step count drives the run
        t_end: dt * n_steps as f64,
        steps: Some(n_steps),
    };

    let mut sim = Simulation::new(particles, params)?;
    sim.run(n_steps, observer);
    Ok(sim.into_particles())
}
