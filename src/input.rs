//! Checks applied to user-supplied scenario parameters before they reach the kernel.

use serde::Serialize;
use thiserror::Error;

/// Errors raised for scenario inputs outside the kernel's preconditions.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("diameter must be positive, got {0} m")]
    NonPositiveDiameter(f64),
    #[error("hyperbolic excess velocity must be non-negative, got {0} km/s")]
    NegativeVelocity(f64),
    #[error("entry angle must lie in (0, 90] degrees, got {0}")]
    AngleOutOfRange(f64),
}

/// Projectile parameters as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioInput {
    pub v_infinity_km_s: f64,
    pub diameter_m: f64,
    pub material: String,
    pub angle_deg: Option<f64>,
}

impl ScenarioInput {
    pub fn new(
        v_infinity_km_s: f64,
        diameter_m: f64,
        material: impl Into<String>,
        angle_deg: Option<f64>,
    ) -> Self {
        Self {
            v_infinity_km_s,
            diameter_m,
            material: material.into(),
            angle_deg,
        }
    }

    /// Reject inputs the integrator assumes away. NaN fails every check.
    pub fn validate(&self) -> Result<(), InputError> {
        if !(self.diameter_m > 0.0 && self.diameter_m.is_finite()) {
            return Err(InputError::NonPositiveDiameter(self.diameter_m));
        }
        if !(self.v_infinity_km_s >= 0.0 && self.v_infinity_km_s.is_finite()) {
            return Err(InputError::NegativeVelocity(self.v_infinity_km_s));
        }
        if let Some(angle) = self.angle_deg {
            if !(angle > 0.0 && angle <= 90.0) {
                return Err(InputError::AngleOutOfRange(angle));
            }
        }
        Ok(())
    }
}
