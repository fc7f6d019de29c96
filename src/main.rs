use nbsim::{bench_gravity, bench_leapfrog};
use nbsim::{EnergyLog, Scenario, ScenarioConfig, StepObserver, StepSnapshot};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML; looked up under scenarios/ if not found as given
    #[arg(short, default_value = "two_body.yaml")]
    file_name: String,

    /// Write per-step energies as CSV
    #[arg(long)]
    energy_csv: Option<PathBuf>,

    /// Run the kernel and stepping benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.exists() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = scenario_path(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

/// Records energies and logs progress every `every` steps
struct Progress {
    log: EnergyLog,
    every: usize,
}

impl StepObserver for Progress {
    fn on_step(&mut self, s: &StepSnapshot<'_>) {
        self.log.on_step(s);
        if s.step % self.every == 0 {
            info!(
                "step {:6}  t = {:9.4}  KE = {:+.6e}  PE = {:+.6e}  E = {:+.6e}",
                s.step,
                s.t,
                s.energy.kinetic,
                s.energy.potential,
                s.energy.total()
            );
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_gravity()?;
        bench_leapfrog()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;
    let every = scenario.report_every;
    let mut sim = scenario.into_simulation().context("invalid scenario")?;

    let initial = sim.snapshot();
    info!(
        "{} bodies, {} steps of dt = {}; initial KE = {:+.6e}, PE = {:+.6e}",
        initial.positions.len(),
        sim.parameters().n_steps(),
        sim.parameters().dt,
        initial.energy.kinetic,
        initial.energy.potential
    );

    let mut progress = Progress {
        log: EnergyLog::with_initial(&initial),
        every,
    };
    sim.run_to_end(&mut progress);

    let final_energy = sim.snapshot().energy;
    info!(
        "done at t = {:.4}: E = {:+.6e}, max relative energy drift = {:.3e}",
        sim.time(),
        final_energy.total(),
        progress.log.max_relative_drift()
    );

    if let Some(path) = args.energy_csv {
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        progress
            .log
            .write_csv(BufWriter::new(file))
            .with_context(|| format!("writing {}", path.display()))?;
        info!("energies written to {}", path.display());
    }

    Ok(())
}
