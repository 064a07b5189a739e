use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use orrery::{
    build_system, export_run, generate_solar_system, EnergyMonitor, ScenarioConfig, System,
    TrajectoryRecorder, Vec3,
};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Path to a JSON scenario file
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Generate a random system with this many planets instead
    #[arg(short, long)]
    random: Option<u32>,

    /// Number of simulation ticks to run
    #[arg(short, long, default_value_t = 100)]
    ticks: usize,

    /// Cubic display bound for generated systems
    #[arg(long, default_value_t = 400.0)]
    size: f64,

    /// Skip the interaction pass; bodies drift at constant velocity
    #[arg(long)]
    no_gravity: bool,

    /// Write per-tick trajectories to this CSV file
    #[arg(short, long)]
    output: Option<String>,

    /// Free-form note stored with the run record
    #[arg(long, default_value = "")]
    notes: String,
}

fn load_scenario(path: &PathBuf) -> Result<ScenarioConfig> {
    let file = File::open(path).with_context(|| format!("opening scenario {}", path.display()))?;
    let reader = BufReader::new(file);
    let cfg = serde_json::from_reader(reader)?;
    Ok(cfg)
}

/// Sun plus four planets, the stock demo configuration.
fn demo_system(size: f64) -> Result<System> {
    let mut system = System::new(size, false);
    system.spawn_sun(10_000.0, Vec3::zeros(), Vec3::zeros())?;
    system.spawn_planet(10.0, Vec3::new(150.0, 50.0, 0.0), Vec3::new(0.0, 5.0, 5.0))?;
    system.spawn_planet(10.0, Vec3::new(100.0, -50.0, 150.0), Vec3::new(5.0, 0.0, 0.0))?;
    system.spawn_planet(10.0, Vec3::new(0.0, -350.0, 0.0), Vec3::new(0.0, 0.0, -7.0))?;
    system.spawn_planet(10.0, Vec3::new(0.0, 120.0, 0.0), Vec3::new(-9.0, 0.0, 0.0))?;
    Ok(system)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut system = if let Some(path) = &args.scenario {
        let cfg = load_scenario(path)?;
        build_system(&cfg)?
    } else if let Some(n_planets) = args.random {
        generate_solar_system(args.size, n_planets)
            .context("could not place all planets with enough separation")?
    } else {
        demo_system(args.size)?
    };

    info!(
        "running {} bodies for {} ticks (gravity: {})",
        system.bodies.len(),
        args.ticks,
        !args.no_gravity
    );

    let mut recorder = TrajectoryRecorder::new();
    let mut monitor = EnergyMonitor::new(&system.bodies);

    let pb = ProgressBar::new(args.ticks as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    for tick in 0..args.ticks {
        if args.no_gravity {
            system.update_all(&mut recorder);
        } else {
            system.tick(&mut recorder)?;
        }
        monitor.record(&system.bodies, tick, args.ticks);
        pb.inc(1);
    }
    pb.finish_with_message("Simulation complete");

    info!(
        "initial energy {:.4e}, drift std dev {:.4e}",
        monitor.initial_energy(),
        monitor.drift_std_dev()
    );

    if let Some(output) = &args.output {
        recorder
            .save_to_csv(output)
            .map_err(|e| anyhow::anyhow!("saving trajectories: {e}"))?;
        info!("trajectories written to {output}");
    }

    export_run("runs.csv", &system, args.ticks, &monitor, &args.notes)
        .map_err(|e| anyhow::anyhow!("appending run record: {e}"))?;

    Ok(())
}
