//! Physical constants, unit conversions, and shared primitives for the Impact Calculator workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Standard gravity at Earth's surface (m/s²).
    pub const G0: f64 = 9.80665;
    /// Sea-level air density of the exponential atmosphere (kg/m³).
    pub const SEA_LEVEL_DENSITY_KG_M3: f64 = 1.225;
    /// Scale height of the exponential atmosphere (m).
    pub const SCALE_HEIGHT_M: f64 = 7_200.0;
    /// Earth escape velocity at the top of the atmosphere (km/s).
    pub const EARTH_ESCAPE_VELOCITY_KM_S: f64 = 11.2;
    /// Joules per megaton of TNT.
    pub const JOULES_PER_MEGATON: f64 = 4.184e15;
    /// Joules per kiloton of TNT.
    pub const JOULES_PER_KILOTON: f64 = 4.184e12;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::{JOULES_PER_KILOTON, JOULES_PER_MEGATON};

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert metres per second to kilometres per second.
    #[inline]
    pub fn ms_to_kms(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert kilometres per second to metres per second.
    #[inline]
    pub fn kms_to_ms(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert joules to megatons of TNT.
    #[inline]
    pub fn joules_to_megatons(j: f64) -> f64 {
        j / JOULES_PER_MEGATON
    }

    /// Convert megatons of TNT to joules.
    #[inline]
    pub fn megatons_to_joules(mt: f64) -> f64 {
        mt * JOULES_PER_MEGATON
    }

    /// Convert megatons to kilotons of TNT.
    #[inline]
    pub fn megatons_to_kilotons(mt: f64) -> f64 {
        mt * JOULES_PER_MEGATON / JOULES_PER_KILOTON
    }
}

/// Energy helpers shared by the integrator and evaluators.
pub mod energy {
    /// Kinetic energy (J) of a mass moving at the given speed.
    #[inline]
    pub fn kinetic_energy_j(mass_kg: f64, velocity_m_s: f64) -> f64 {
        0.5 * mass_kg * velocity_m_s * velocity_m_s
    }

    /// Kinetic energy expressed in megatons of TNT.
    #[inline]
    pub fn kinetic_energy_mt(mass_kg: f64, velocity_m_s: f64) -> f64 {
        super::units::joules_to_megatons(kinetic_energy_j(mass_kg, velocity_m_s))
    }
}
