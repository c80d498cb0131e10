//! Atmospheric entry integrator using an exponential atmosphere.
//!
//! The projectile is advanced with a fixed-step forward-Euler scheme along a straight flight path.
//! Each step it loses speed to drag and gains it from gravity, sheds mass by ablation while fast,
//! and may break up once dynamic pressure exceeds the material strength. A broken-up body is
//! tracked as a spreading fragment cloud until it either disperses (the airburst) or reaches the
//! ground.

mod options;
mod regime;

use impact_core::constants::G0;
use impact_core::energy::kinetic_energy_mt;
use impact_model::{BodyProperties, EntryConditions, air_density, dynamic_pressure};
use log::{debug, trace};
use serde::Serialize;

pub use options::{EntryThresholds, IntegratorOptions};
pub use regime::FlightRegime;

/// Snapshot of the projectile at one recorded step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectoryState {
    pub time_s: f64,
    pub altitude_m: f64,
    pub velocity_m_s: f64,
    pub mass_kg: f64,
    pub mass_fraction: f64,
    /// Flight-path angle below horizontal (rad).
    pub angle_rad: f64,
    pub dynamic_pressure_pa: f64,
    pub air_density_kg_m3: f64,
    pub fragmented: bool,
    pub regime: &'static str,
}

/// How the integration ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Termination {
    GroundImpact,
    /// The intact body ablated away before reaching the ground.
    CompleteAblation,
    /// The fragment cloud dispersed (or was ablated away) in the atmosphere.
    Airburst,
    FlightTimeExceeded,
}

/// Conditions at the moment the body broke apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Breakup {
    pub altitude_m: f64,
    pub time_s: f64,
    pub velocity_m_s: f64,
    /// Kinetic energy carried into the fragment cloud (Mt TNT).
    pub energy_mt: f64,
}

/// Final integrator output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactSummary {
    pub altitude_m: f64,
    pub velocity_m_s: f64,
    pub mass_kg: f64,
    pub mass_fraction: f64,
    pub airburst: bool,
    pub airburst_altitude_m: Option<f64>,
    pub airburst_energy_mt: Option<f64>,
    pub ground_impact: bool,
    /// Kinetic energy of the final state (Mt TNT).
    pub impact_energy_mt: f64,
    pub termination: Termination,
    pub breakup: Option<Breakup>,
    pub flight_time_s: f64,
    pub steps: usize,
}

impl ImpactSummary {
    pub fn completely_ablated(&self) -> bool {
        self.termination == Termination::CompleteAblation
    }
}

/// Sampled history plus the final summary.
#[derive(Debug, Clone, Serialize)]
pub struct TrajectoryResult {
    pub trajectory: Vec<TrajectoryState>,
    pub impact: ImpactSummary,
}

#[derive(Debug, Clone, Copy)]
struct Kinematics {
    time_s: f64,
    altitude_m: f64,
    velocity_m_s: f64,
    mass_kg: f64,
}

/// Integrate the entry of `body` from the reference altitude until a terminal condition.
///
/// Preconditions (not checked): positive body mass and area, non-negative entry speed, entry angle
/// in `(0, 90]` degrees, positive `dt`. Every other input ends in one of the [`Termination`]
/// states; the flight-time cutoff guarantees the loop is bounded.
pub fn integrate_trajectory(
    entry: &EntryConditions,
    body: &BodyProperties,
    options: &IntegratorOptions,
) -> TrajectoryResult {
    let limits = &options.thresholds;
    let dt = options.dt_s;
    let cd = options.drag_coefficient;
    let angle_rad = entry.angle_deg.to_radians();
    let sin_gamma = angle_rad.sin();
    let initial_mass = body.mass_kg;
    let base_area = body.area_m2;
    let ablation_rate = options.lambda * base_area / (2.0 * options.heat_of_ablation_j_kg);
    let breakup_eligible = entry.velocity_m_s > limits.fragmentation_min_speed_m_s;

    let mut state = Kinematics {
        time_s: 0.0,
        altitude_m: limits.entry_altitude_m,
        velocity_m_s: entry.velocity_m_s,
        mass_kg: initial_mass,
    };
    let mut regime = FlightRegime::Intact;
    let mut breakup: Option<Breakup> = None;
    let mut steps = 0_usize;

    let record_every = options.record_every.max(1);
    let mut trajectory = Vec::new();
    if options.record_trajectory {
        trajectory.push(sample(&state, regime, false, initial_mass, angle_rad));
    }

    let termination = loop {
        if state.altitude_m <= 0.0 {
            break Termination::GroundImpact;
        }
        if state.mass_kg <= 0.0 {
            break match regime {
                FlightRegime::Fragmented { .. } => Termination::Airburst,
                _ => Termination::CompleteAblation,
            };
        }
        if state.time_s >= limits.max_flight_time_s {
            break Termination::FlightTimeExceeded;
        }

        let rho = air_density(state.altitude_m);
        let q = dynamic_pressure(rho, state.velocity_m_s);

        if matches!(regime, FlightRegime::Intact)
            && q >= body.strength_pa
            && state.velocity_m_s > limits.fragmentation_min_speed_m_s
            && breakup_eligible
        {
            let onset = Breakup {
                altitude_m: state.altitude_m,
                time_s: state.time_s,
                velocity_m_s: state.velocity_m_s,
                energy_mt: kinetic_energy_mt(state.mass_kg, state.velocity_m_s),
            };
            debug!(
                "breakup at {:.0} m, q = {:.3e} Pa, {:.3} Mt",
                onset.altitude_m, q, onset.energy_mt
            );
            breakup = Some(onset);
            regime = FlightRegime::fragment(body.radius_m, options.fragmentation_multiplier);
        }

        if let FlightRegime::TerminalVelocity { speed_m_s } = regime {
            state.altitude_m -= speed_m_s * sin_gamma * dt;
            state.time_s += dt;
            steps += 1;
            if options.record_trajectory && steps % record_every == 0 {
                let fragmented = breakup.is_some();
                trajectory.push(sample(&state, regime, fragmented, initial_mass, angle_rad));
            }
            continue;
        }

        let drag_area = match &mut regime {
            FlightRegime::Fragmented {
                cloud_radius_m,
                spread_rate_m_s,
            } => {
                let spread_accel = cd * rho * state.velocity_m_s * state.velocity_m_s
                    / (4.0 * body.density_kg_m3 * *cloud_radius_m);
                *spread_rate_m_s += spread_accel * dt;
                *cloud_radius_m += *spread_rate_m_s * dt;
                if *cloud_radius_m >= options.pancake_factor * body.radius_m {
                    break Termination::Airburst;
                }
                std::f64::consts::PI * *cloud_radius_m * *cloud_radius_m
            }
            FlightRegime::Intact | FlightRegime::TerminalVelocity { .. } => base_area,
        };

        let v = state.velocity_m_s;
        let drag_accel = -(cd * drag_area / (2.0 * state.mass_kg)) * rho * v * v;
        let gravity_accel = -G0 * sin_gamma;
        let ablating = v > limits.ablation_onset_m_s;
        let mass_rate = if ablating {
            -ablation_rate * rho * v * v * v
        } else {
            0.0
        };

        let mut next_velocity = v + (drag_accel + gravity_accel) * dt;
        let floor = if ablating {
            limits.ablating_velocity_floor_m_s
        } else {
            limits.velocity_floor_m_s
        };
        if next_velocity < floor && rho > 0.0 && state.mass_kg > 0.0 {
            let terminal = (2.0 * state.mass_kg * G0 / (rho * cd * drag_area))
                .sqrt()
                .min(limits.terminal_velocity_cap_m_s);
            debug!(
                "terminal velocity {:.1} m/s at {:.0} m",
                terminal, state.altitude_m
            );
            next_velocity = terminal;
            regime = FlightRegime::TerminalVelocity {
                speed_m_s: terminal,
            };
        }

        state.velocity_m_s = next_velocity.max(0.0);
        state.altitude_m -= state.velocity_m_s * sin_gamma * dt;
        state.mass_kg = (state.mass_kg + mass_rate * dt).max(0.0);
        state.time_s += dt;
        steps += 1;

        if options.record_trajectory && steps % record_every == 0 {
            trace!("t = {:.2} s, h = {:.0} m", state.time_s, state.altitude_m);
            let fragmented = breakup.is_some();
            trajectory.push(sample(&state, regime, fragmented, initial_mass, angle_rad));
        }
    };

    if options.record_trajectory
        && trajectory
            .last()
            .map_or(true, |last| last.time_s < state.time_s)
    {
        let fragmented = breakup.is_some();
        trajectory.push(sample(&state, regime, fragmented, initial_mass, angle_rad));
    }

    debug!(
        "{:?} after {} steps ({:.2} s) at {:.0} m",
        termination, steps, state.time_s, state.altitude_m
    );

    let airburst = termination == Termination::Airburst;
    let impact = ImpactSummary {
        altitude_m: state.altitude_m,
        velocity_m_s: state.velocity_m_s,
        mass_kg: state.mass_kg,
        mass_fraction: mass_fraction(state.mass_kg, initial_mass),
        airburst,
        airburst_altitude_m: airburst.then_some(state.altitude_m),
        airburst_energy_mt: if airburst {
            breakup.map(|b| b.energy_mt)
        } else {
            None
        },
        ground_impact: termination == Termination::GroundImpact,
        impact_energy_mt: kinetic_energy_mt(state.mass_kg, state.velocity_m_s),
        termination,
        breakup,
        flight_time_s: state.time_s,
        steps,
    };

    TrajectoryResult { trajectory, impact }
}

fn sample(
    state: &Kinematics,
    regime: FlightRegime,
    fragmented: bool,
    initial_mass_kg: f64,
    angle_rad: f64,
) -> TrajectoryState {
    let rho = air_density(state.altitude_m);
    TrajectoryState {
        time_s: state.time_s,
        altitude_m: state.altitude_m,
        velocity_m_s: state.velocity_m_s,
        mass_kg: state.mass_kg,
        mass_fraction: mass_fraction(state.mass_kg, initial_mass_kg),
        angle_rad,
        dynamic_pressure_pa: dynamic_pressure(rho, state.velocity_m_s),
        air_density_kg_m3: rho,
        fragmented,
        regime: regime.label(),
    }
}

fn mass_fraction(mass_kg: f64, initial_mass_kg: f64) -> f64 {
    if initial_mass_kg > 0.0 {
        (mass_kg / initial_mass_kg).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
