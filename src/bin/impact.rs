use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::warn;
use impact_calculator::assess_scenario_with;
use impact_calculator::catalog;
use impact_calculator::config::{KernelSettings, load_kernel_settings, load_materials};
use impact_calculator::core::units::{m_to_km, ms_to_kms};
use impact_calculator::export::{report, trajectory};
use impact_calculator::input::ScenarioInput;
use impact_calculator::seismic::{EarthquakeCatalog, StaticCatalog};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Asteroid atmospheric entry and airburst calculator"
)]
struct Cli {
    /// Hyperbolic excess velocity in km/s (values below 3 are used as the entry speed)
    #[arg(long)]
    vinf: f64,

    /// Projectile diameter in metres
    #[arg(long)]
    diameter: f64,

    /// Material name from the catalog (case-insensitive, defaults to stony)
    #[arg(long)]
    material: Option<String>,

    /// Entry angle from horizontal in degrees (defaults to 45)
    #[arg(long)]
    angle: Option<f64>,

    /// Material catalog (YAML list, TOML record, or directory of TOML records)
    #[arg(long)]
    materials: Option<PathBuf>,

    /// Kernel settings TOML overriding integrator and blast defaults
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Write the sampled trajectory as CSV (`-` for stdout)
    #[arg(long)]
    trajectory_csv: Option<PathBuf>,

    /// Write the full assessment as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Record every Nth integration step
    #[arg(long)]
    record_every: Option<usize>,

    /// Earthquake CSV catalog (place,time,magnitude,url) for seismic comparisons
    #[arg(long)]
    quakes: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let configs = match &cli.materials {
        Some(path) => load_materials(path)
            .with_context(|| format!("loading materials from {}", path.display()))?,
        None => catalog::builtin(),
    };
    let material = catalog::select(&configs, cli.material.as_deref())?;

    let input = ScenarioInput::new(cli.vinf, cli.diameter, material.name.clone(), cli.angle);
    input.validate()?;

    let settings = match &cli.settings {
        Some(path) => load_kernel_settings(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => KernelSettings::default(),
    };
    let mut options = settings.integrator;
    if let Some(every) = cli.record_every {
        options.record_every = every;
    }
    if cli.trajectory_csv.is_some() || cli.json.is_some() {
        options.record_trajectory = true;
    }

    let assessment = assess_scenario_with(
        input.v_infinity_km_s,
        input.diameter_m,
        &material,
        input.angle_deg,
        &options,
        &settings.overpressure,
    );
    let impact = assessment.impact();

    println!("=== Impact Assessment ===");
    println!(
        "Projectile: {:.1} m {} ({:.3e} kg), entry {:.2} km/s at {:.1} deg",
        assessment.body.diameter_m,
        assessment.body.material,
        assessment.body.mass_kg,
        ms_to_kms(assessment.entry.velocity_m_s),
        assessment.entry.angle_deg
    );
    if let Some(breakup) = &impact.breakup {
        println!(
            "Breakup: {:.1} km at {:.2} km/s ({:.3} Mt)",
            m_to_km(breakup.altitude_m),
            ms_to_kms(breakup.velocity_m_s),
            breakup.energy_mt
        );
    }
    println!("Outcome: {}", assessment.outcome);
    println!(
        "Final state: mass fraction {:.3}, {:.3} Mt, {:.1} s of flight",
        impact.mass_fraction, impact.impact_energy_mt, impact.flight_time_s
    );
    if let Some(blast) = &assessment.blast {
        println!(
            "Blast: {:.3} Mt, severity {}; windows {:.1} km, structural {:.1} km, severe {:.1} km, extreme {:.1} km",
            blast.energy_mt,
            blast.severity,
            blast.window_breakage_km,
            blast.structural_damage_km,
            blast.severe_destruction_km,
            blast.extreme_destruction_km
        );
    }
    if let Some(magnitude) = assessment.seismic_magnitude {
        println!("Seismic: magnitude {:.1}", magnitude);
        if let Some(path) = &cli.quakes {
            match StaticCatalog::from_path(path) {
                Ok(quakes) => {
                    for quake in quakes.find_similar(magnitude, 0.5, 5) {
                        println!("  M{:.1} {} ({})", quake.magnitude, quake.place, quake.time);
                    }
                }
                Err(err) => {
                    warn!("skipping earthquake comparison ({}): {}", path.display(), err)
                }
            }
        }
    }

    if let Some(path) = &cli.trajectory_csv {
        let mut writer = trajectory::writer_for_path(path)?;
        trajectory::write_all(writer.as_mut(), &assessment.trajectory.trajectory)?;
    }
    if let Some(path) = &cli.json {
        report::write_json(path, &assessment)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}
