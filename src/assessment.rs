//! End-to-end evaluation of a single entry scenario.

use impact_blast::{
    BlastEffects, Outcome, OverpressureThresholds, classify_outcome, estimate_blast_effects_with,
};
use impact_core::units::megatons_to_joules;
use impact_model::{
    BodyProperties, EntryConditions, MaterialPreset, body_properties, entry_conditions,
};
use impact_seismic::{DEFAULT_SEISMIC_COUPLING, energy_to_magnitude};
use impact_trajectory::{ImpactSummary, IntegratorOptions, TrajectoryResult, integrate_trajectory};
use log::debug;
use serde::Serialize;

use crate::input::ScenarioInput;

/// Everything derived for one projectile.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioAssessment {
    pub input: ScenarioInput,
    pub entry: EntryConditions,
    pub body: BodyProperties,
    pub trajectory: TrajectoryResult,
    /// Present only for airbursts.
    pub blast: Option<BlastEffects>,
    pub outcome: Outcome,
    /// Richter-equivalent magnitude of a ground impact.
    pub seismic_magnitude: Option<f64>,
}

impl ScenarioAssessment {
    pub fn impact(&self) -> &ImpactSummary {
        &self.trajectory.impact
    }
}

/// Assess a scenario with the default overpressure thresholds.
pub fn assess_scenario(
    v_infinity_km_s: f64,
    diameter_m: f64,
    material: &MaterialPreset,
    entry_angle_deg: Option<f64>,
    options: &IntegratorOptions,
) -> ScenarioAssessment {
    assess_scenario_with(
        v_infinity_km_s,
        diameter_m,
        material,
        entry_angle_deg,
        options,
        &OverpressureThresholds::default(),
    )
}

/// Run the entry model, then derive blast effects for airbursts and a seismic magnitude for
/// ground impacts.
pub fn assess_scenario_with(
    v_infinity_km_s: f64,
    diameter_m: f64,
    material: &MaterialPreset,
    entry_angle_deg: Option<f64>,
    options: &IntegratorOptions,
    overpressure: &OverpressureThresholds,
) -> ScenarioAssessment {
    let entry = entry_conditions(v_infinity_km_s, entry_angle_deg);
    let body = body_properties(diameter_m, material);
    debug!(
        "assessing {:.1} m {} body entering at {:.0} m/s, {:.1} deg",
        body.diameter_m, body.material, entry.velocity_m_s, entry.angle_deg
    );

    let trajectory = integrate_trajectory(&entry, &body, options);
    let impact = &trajectory.impact;
    let outcome = classify_outcome(impact);

    let blast = match (impact.airburst_energy_mt, impact.airburst_altitude_m) {
        (Some(energy_mt), Some(altitude_m)) if impact.airburst => Some(
            estimate_blast_effects_with(energy_mt, altitude_m, overpressure),
        ),
        _ => None,
    };

    let seismic_magnitude = if impact.ground_impact {
        energy_to_magnitude(
            megatons_to_joules(impact.impact_energy_mt),
            DEFAULT_SEISMIC_COUPLING,
        )
    } else {
        None
    };

    ScenarioAssessment {
        input: ScenarioInput::new(
            v_infinity_km_s,
            diameter_m,
            material.name.clone(),
            entry_angle_deg,
        ),
        entry,
        body,
        trajectory,
        blast,
        outcome,
        seismic_magnitude,
    }
}
