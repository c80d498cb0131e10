//! Blast effects of an airburst and classification of entry outcomes.

mod outcome;

use impact_core::units::{m_to_km, megatons_to_kilotons};
use log::debug;
use serde::{Deserialize, Serialize};

pub use outcome::{Outcome, classify_outcome};

/// Burst altitude above which meteor airbursts dissipate faster than nuclear test data suggest (km).
const ATTENUATION_REFERENCE_KM: f64 = 25.0;
const ATTENUATION_SCALE_KM: f64 = 8.0;
const ATTENUATION_EXPONENT: f64 = 0.6;
const MAX_WINDOW_RADIUS_KM: f64 = 300.0;

/// Overpressure damage thresholds (Pa).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverpressureThresholds {
    pub window_breakage_pa: f64,
    pub structural_damage_pa: f64,
    pub severe_destruction_pa: f64,
    pub extreme_destruction_pa: f64,
}

impl Default for OverpressureThresholds {
    fn default() -> Self {
        Self {
            window_breakage_pa: 1_000.0,
            structural_damage_pa: 20_000.0,
            severe_destruction_pa: 35_000.0,
            extreme_destruction_pa: 100_000.0,
        }
    }
}

/// Ordinal damage classification, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Minor,
    Moderate,
    Significant,
    Major,
    Catastrophic,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Severity::None => "none",
            Severity::Minor => "minor",
            Severity::Moderate => "moderate",
            Severity::Significant => "significant",
            Severity::Major => "major",
            Severity::Catastrophic => "catastrophic",
        };
        f.write_str(label)
    }
}

/// Ground-level damage radii of an airburst.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlastEffects {
    pub energy_mt: f64,
    pub altitude_m: f64,
    pub window_breakage_km: f64,
    pub structural_damage_km: f64,
    pub severe_destruction_km: f64,
    pub extreme_destruction_km: f64,
    pub severity: Severity,
}

impl BlastEffects {
    fn none(energy_mt: f64, altitude_m: f64) -> Self {
        Self {
            energy_mt,
            altitude_m,
            window_breakage_km: 0.0,
            structural_damage_km: 0.0,
            severe_destruction_km: 0.0,
            extreme_destruction_km: 0.0,
            severity: Severity::None,
        }
    }
}

/// Estimate blast radii with the default overpressure thresholds.
pub fn estimate_blast_effects(energy_mt: f64, altitude_m: f64) -> BlastEffects {
    estimate_blast_effects_with(energy_mt, altitude_m, &OverpressureThresholds::default())
}

/// Estimate blast radii for an airburst of `energy_mt` at `altitude_m`.
///
/// The 1 kt overpressure fit of Collins et al. (2017) is inverted at the burst height scaled to
/// 1 kt, then ranges are rescaled by the cube root of the yield. Bursts above 25 km are
/// attenuated further. Non-positive energy or altitude yields zero radii.
pub fn estimate_blast_effects_with(
    energy_mt: f64,
    altitude_m: f64,
    thresholds: &OverpressureThresholds,
) -> BlastEffects {
    if energy_mt <= 0.0 || altitude_m <= 0.0 {
        return BlastEffects::none(energy_mt, altitude_m);
    }

    let yield_scale = megatons_to_kilotons(energy_mt).cbrt();
    let scaled_altitude_m = altitude_m / yield_scale;
    let attenuation = high_altitude_attenuation(m_to_km(altitude_m));
    let radius_km = |overpressure_pa: f64| {
        m_to_km(reference_range_m(overpressure_pa, scaled_altitude_m) * yield_scale) * attenuation
    };

    let window = radius_km(thresholds.window_breakage_pa).min(MAX_WINDOW_RADIUS_KM);
    let structural = radius_km(thresholds.structural_damage_pa);
    let severe = radius_km(thresholds.severe_destruction_pa);
    let extreme = radius_km(thresholds.extreme_destruction_pa);
    let severity = classify_severity(window, structural, severe);

    debug!(
        "{:.3} Mt at {:.0} m: window {:.1} km, severe {:.1} km ({})",
        energy_mt, altitude_m, window, severe, severity
    );

    BlastEffects {
        energy_mt,
        altitude_m,
        window_breakage_km: window,
        structural_damage_km: structural,
        severe_destruction_km: severe,
        extreme_destruction_km: extreme,
        severity,
    }
}

/// Peak overpressure (Pa) at ground range `range_m` from a 1 kt burst at `burst_altitude_m`.
pub fn reference_overpressure_pa(range_m: f64, burst_altitude_m: f64) -> f64 {
    3.14e11 / ((2.5e5 + range_m.powf(2.5)) * altitude_factor(burst_altitude_m))
}

/// Ground range (m) at which a 1 kt burst produces `overpressure_pa`; zero if never reached.
fn reference_range_m(overpressure_pa: f64, burst_altitude_m: f64) -> f64 {
    let excess = 3.14e11 / (overpressure_pa * altitude_factor(burst_altitude_m)) - 2.5e5;
    if excess > 0.0 { excess.powf(0.4) } else { 0.0 }
}

fn altitude_factor(burst_altitude_m: f64) -> f64 {
    let f = 1.0 + burst_altitude_m / 6_789.0;
    f * f
}

fn high_altitude_attenuation(altitude_km: f64) -> f64 {
    if altitude_km <= ATTENUATION_REFERENCE_KM {
        return 1.0;
    }
    let excess = (altitude_km - ATTENUATION_REFERENCE_KM) / ATTENUATION_SCALE_KM;
    (-excess.powf(ATTENUATION_EXPONENT)).exp()
}

fn classify_severity(window_km: f64, structural_km: f64, severe_km: f64) -> Severity {
    if severe_km > 10.0 {
        Severity::Catastrophic
    } else if severe_km > 3.0 {
        Severity::Major
    } else if structural_km > 10.0 {
        Severity::Significant
    } else if window_km > 20.0 {
        Severity::Moderate
    } else {
        Severity::Minor
    }
}
