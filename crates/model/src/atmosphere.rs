//! Isothermal exponential atmosphere.

use impact_core::constants::{SCALE_HEIGHT_M, SEA_LEVEL_DENSITY_KG_M3};

/// Air density (kg/m³) at the given altitude.
///
/// Uses `ρ(h) = ρ₀ · exp(-h / H)`. Altitudes below the surface clamp to the sea-level value.
#[inline]
pub fn air_density(altitude_m: f64) -> f64 {
    if altitude_m < 0.0 {
        return SEA_LEVEL_DENSITY_KG_M3;
    }
    SEA_LEVEL_DENSITY_KG_M3 * f64::exp(-altitude_m / SCALE_HEIGHT_M)
}

/// Dynamic pressure (Pa) for a given air density and speed.
#[inline]
pub fn dynamic_pressure(density_kg_m3: f64, velocity_m_s: f64) -> f64 {
    0.5 * density_kg_m3 * velocity_m_s * velocity_m_s
}
