//! Projectile material descriptors.

use serde::{Deserialize, Serialize};

/// Bulk density and fragmentation strength of a projectile material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialPreset {
    pub name: String,
    pub density_kg_m3: f64,
    /// Dynamic pressure at which the body breaks apart (Pa).
    pub strength_pa: f64,
}

impl MaterialPreset {
    pub fn new(name: impl Into<String>, density_kg_m3: f64, strength_pa: f64) -> Self {
        Self {
            name: name.into(),
            density_kg_m3,
            strength_pa,
        }
    }

    /// Ordinary chondrite.
    pub fn stony() -> Self {
        Self::new("stony", 3_000.0, 2.0e5)
    }

    /// Iron-nickel.
    pub fn iron() -> Self {
        Self::new("iron", 7_800.0, 2.0e6)
    }

    /// Porous ice/dust aggregate.
    pub fn cometary() -> Self {
        Self::new("cometary", 1_000.0, 1.0e5)
    }

    /// The three canonical presets in catalog order.
    pub fn canonical() -> [MaterialPreset; 3] {
        [Self::stony(), Self::iron(), Self::cometary()]
    }
}
