//! Static properties of a spherical projectile.

use std::f64::consts::PI;

use serde::Serialize;

use crate::material::MaterialPreset;

/// Derived, immutable description of the projectile at entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyProperties {
    pub diameter_m: f64,
    pub radius_m: f64,
    pub mass_kg: f64,
    /// Cross-sectional area (m²).
    pub area_m2: f64,
    pub density_kg_m3: f64,
    pub strength_pa: f64,
    pub material: String,
}

/// Build body properties for a sphere of the given diameter and material.
pub fn body_properties(diameter_m: f64, material: &MaterialPreset) -> BodyProperties {
    let radius = diameter_m / 2.0;
    let area = PI * radius * radius;
    let volume = 4.0 / 3.0 * PI * radius.powi(3);

    BodyProperties {
        diameter_m,
        radius_m: radius,
        mass_kg: material.density_kg_m3 * volume,
        area_m2: area,
        density_kg_m3: material.density_kg_m3,
        strength_pa: material.strength_pa,
        material: material.name.clone(),
    }
}
