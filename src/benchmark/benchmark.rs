use std::time::Instant;

use log::info;

use crate::errors::SimError;
use crate::simulation::forces::{Acceleration, NewtonianGravity};
use crate::simulation::integrator::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, ParticleSet};

/// Helper to build a deterministic particle set of size `n`
fn make_particles(n: usize) -> Result<ParticleSet, SimError> {
    let mut positions = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        positions.push(NVec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        ));
    }

    ParticleSet::new(positions, vec![NVec3::zeros(); n], vec![1.0; n])
}

fn make_params() -> Parameters {
    Parameters::new(0.1, 1.0e-2, 1.0e-3, 100.0)
}

/// Time a single direct force evaluation for growing N
pub fn bench_gravity() -> Result<(), SimError> {
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let particles = make_particles(n)?;
        let params = make_params();
        let gravity = NewtonianGravity {
            G: params.G,
            softening: params.softening,
        };
        let mut out = vec![NVec3::zeros(); n];

        // Warm up
        gravity.accumulate_accels(particles.positions(), particles.masses(), &mut out);

        let t0 = Instant::now();
        gravity.accumulate_accels(particles.positions(), particles.masses(), &mut out);
        let dt_direct = t0.elapsed().as_secs_f64();

        info!("N = {n:5}, direct = {:8.6} s", dt_direct);
    }
    Ok(())
}

/// Time full leapfrog steps (force evaluation + energy diagnostic) for growing N
pub fn bench_leapfrog() -> Result<(), SimError> {
    let ns = [200, 400, 800, 1600, 3200];
    let steps = 3;

    for n in ns {
        let mut sim = Simulation::new(make_particles(n)?, make_params())?;

        // Warm-up
        sim.step();

        let t0 = Instant::now();
        sim.run(steps, &mut ());
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        info!("N = {n:5}, leapfrog step = {:8.6} s", per_step);
    }
    Ok(())
}
