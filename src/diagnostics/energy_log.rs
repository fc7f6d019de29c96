//! Per-step energy record used to check conservation after a run.

use std::io::{self, Write};

use crate::simulation::integrator::{StepObserver, StepSnapshot};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyRecord {
    pub step: usize,
    pub t: f64,
    pub kinetic: f64,
    pub potential: f64,
}

impl EnergyRecord {
    pub fn total(&self) -> f64 {
        self.kinetic + self.potential
    }
}

impl From<&StepSnapshot<'_>> for EnergyRecord {
    fn from(s: &StepSnapshot<'_>) -> Self {
        Self {
            step: s.step,
            t: s.t,
            kinetic: s.energy.kinetic,
            potential: s.energy.potential,
        }
    }
}

/// Observer that keeps one [`EnergyRecord`] per step
#[derive(Debug, Clone, Default)]
pub struct EnergyLog {
    records: Vec<EnergyRecord>,
}

impl EnergyLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the log with the state before the first step,
    /// so drift is measured against the initial energy
    pub fn with_initial(snapshot: &StepSnapshot<'_>) -> Self {
        Self {
            records: vec![snapshot.into()],
        }
    }

    pub fn records(&self) -> &[EnergyRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&EnergyRecord> {
        self.records.last()
    }

    /// Largest |E(t) - E_0| / |E_0| over the log.
    /// Absolute deviation if E_0 is zero, 0 for an empty log.
    pub fn max_relative_drift(&self) -> f64 {
        let Some(first) = self.records.first() else {
            return 0.0;
        };
        let e0 = first.total();
        let scale = if e0 == 0.0 { 1.0 } else { e0.abs() };

        self.records
            .iter()
            .map(|r| (r.total() - e0).abs() / scale)
            .fold(0.0, f64::max)
    }

    /// `step,t,kinetic,potential,total` with a header line
    pub fn write_csv<W: Write>(&self, mut w: W) -> io::Result<()> {
        writeln!(w, "step,t,kinetic,potential,total")?;
        for r in &self.records {
            writeln!(
                w,
                "{},{:.9},{:.12e},{:.12e},{:.12e}",
                r.step,
                r.t,
                r.kinetic,
                r.potential,
                r.total()
            )?;
        }
        w.flush()
    }
}

impl StepObserver for EnergyLog {
    fn on_step(&mut self, snapshot: &StepSnapshot<'_>) {
        self.records.push(snapshot.into());
    }
}
