//! Entry speed and flight-path angle at the top of the atmosphere.

use impact_core::constants::EARTH_ESCAPE_VELOCITY_KM_S;
use impact_core::units::kms_to_ms;
use serde::Serialize;

/// Hyperbolic excess speeds below this are treated as already-atmospheric speeds (km/s).
pub const HYPERBOLIC_THRESHOLD_KM_S: f64 = 3.0;
/// Entry angle used when the caller does not supply one (degrees).
pub const DEFAULT_ENTRY_ANGLE_DEG: f64 = 45.0;

/// Speed and angle at the entry reference altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntryConditions {
    /// Speed at the entry reference altitude (m/s).
    pub velocity_m_s: f64,
    /// Hyperbolic excess speed as supplied (km/s).
    pub v_infinity_km_s: f64,
    /// Flight-path angle measured from horizontal (degrees).
    pub angle_deg: f64,
}

/// Derive entry conditions from a hyperbolic excess speed.
///
/// Slow inputs (below [`HYPERBOLIC_THRESHOLD_KM_S`]) pass straight through, covering re-entering
/// hardware and test cases. Faster inputs are treated as natural bodies falling in from a
/// hyperbolic approach and pick up Earth's escape speed in quadrature.
pub fn entry_conditions(v_infinity_km_s: f64, angle_deg: Option<f64>) -> EntryConditions {
    let velocity_km_s = if v_infinity_km_s < HYPERBOLIC_THRESHOLD_KM_S {
        v_infinity_km_s
    } else {
        (v_infinity_km_s * v_infinity_km_s
            + EARTH_ESCAPE_VELOCITY_KM_S * EARTH_ESCAPE_VELOCITY_KM_S)
            .sqrt()
    };

    EntryConditions {
        velocity_m_s: kms_to_ms(velocity_km_s),
        v_infinity_km_s,
        angle_deg: angle_deg.unwrap_or(DEFAULT_ENTRY_ANGLE_DEG),
    }
}
