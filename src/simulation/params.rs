//! Numerical and physical parameters for a run
//!
//! `Parameters` holds the fixed settings of one simulation:
//! - gravitational constant and softening length,
//! - step size and end time (or an explicit step count)

use crate::errors::SimError;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub softening: f64, // softening length epsilon (not squared)
    pub dt: f64, // step size
    pub t_end: f64, // time end
    pub steps: Option<usize>, // explicit step count, overrides t_end
}

impl Parameters {
    #[allow(non_snake_case)]
    pub fn new(G: f64, softening: f64, dt: f64, t_end: f64) -> Self {
        Self {
            G,
            softening,
            dt,
            t_end,
            steps: None,
        }
    }

    /// Reject anything the integrator can not run with.
    /// Called before any particle state is touched. `t_end` is only
    /// checked when it sets the step count.
    pub fn validate(&self) -> Result<(), SimError> {
        SimError::finite("G", self.G)?;
        SimError::finite("softening", self.softening)?;
        SimError::finite("dt", self.dt)?;

        if self.dt <= 0.0 {
            return Err(SimError::NonPositiveTimeStep(self.dt));
        }
        if self.steps.is_none() {
            SimError::finite("t_end", self.t_end)?;
            if self.t_end <= 0.0 {
                return Err(SimError::NonPositiveDuration(self.t_end));
            }
        }
        if self.softening < 0.0 {
            return Err(SimError::NegativeSoftening(self.softening));
        }
        Ok(())
    }

    /// Number of fixed steps in the run: ceil(t_end / dt) unless overridden
    pub fn n_steps(&self) -> usize {
        match self.steps {
            Some(n) => n,
            None => (self.t_end / self.dt).ceil() as usize,
        }
    }
}
