use serde::{Deserialize, Serialize};

/// Calibration thresholds steering regime transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryThresholds {
    /// Altitude at which integration starts (m).
    pub entry_altitude_m: f64,
    /// Ablation is skipped entirely at or below this speed (m/s).
    pub ablation_onset_m_s: f64,
    /// Both the current and the entry speed must exceed this for breakup (m/s).
    pub fragmentation_min_speed_m_s: f64,
    pub ablating_velocity_floor_m_s: f64,
    pub velocity_floor_m_s: f64,
    pub terminal_velocity_cap_m_s: f64,
    pub max_flight_time_s: f64,
}

impl Default for EntryThresholds {
    fn default() -> Self {
        Self {
            entry_altitude_m: 100_000.0,
            ablation_onset_m_s: 3_000.0,
            fragmentation_min_speed_m_s: 1_000.0,
            ablating_velocity_floor_m_s: 500.0,
            velocity_floor_m_s: 300.0,
            terminal_velocity_cap_m_s: 200.0,
            max_flight_time_s: 1_800.0,
        }
    }
}

/// Integrator settings. Every field has a default; construct with struct-update syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegratorOptions {
    pub dt_s: f64,
    /// Heat-transfer coefficient λ.
    pub lambda: f64,
    /// Heat of ablation Q (J/kg).
    pub heat_of_ablation_j_kg: f64,
    pub drag_coefficient: f64,
    /// Cross-section multiplier applied at breakup.
    pub fragmentation_multiplier: f64,
    /// Fragment-cloud radius, relative to the original radius, at which the cloud is dispersed.
    pub pancake_factor: f64,
    pub record_trajectory: bool,
    /// Record every Nth step when `record_trajectory` is set.
    pub record_every: usize,
    pub thresholds: EntryThresholds,
}

impl Default for IntegratorOptions {
    fn default() -> Self {
        Self {
            dt_s: 0.05,
            lambda: 0.7,
            heat_of_ablation_j_kg: 8.0e6,
            drag_coefficient: 1.0,
            fragmentation_multiplier: 3.0,
            pancake_factor: 4.0,
            record_trajectory: false,
            record_every: 10,
            thresholds: EntryThresholds::default(),
        }
    }
}

impl IntegratorOptions {
    /// Defaults with trajectory recording enabled at the given step interval.
    pub fn recording(every: usize) -> Self {
        Self {
            record_trajectory: true,
            record_every: every,
            ..Self::default()
        }
    }
}
