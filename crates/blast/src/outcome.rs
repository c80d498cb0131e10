use std::fmt;

use impact_core::units::{m_to_km, ms_to_kms};
use impact_trajectory::{ImpactSummary, Termination};
use serde::Serialize;

/// Headline result of an entry, in display priority order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    CompleteAblation,
    Airburst {
        altitude_m: f64,
    },
    GroundImpact {
        velocity_m_s: f64,
        mass_fraction: f64,
    },
    Decelerated,
}

/// Classify an impact summary: complete ablation, then airburst, then ground impact, otherwise
/// the body was slowed to a harmless speed aloft.
pub fn classify_outcome(impact: &ImpactSummary) -> Outcome {
    if impact.termination == Termination::CompleteAblation {
        return Outcome::CompleteAblation;
    }
    if impact.airburst {
        return Outcome::Airburst {
            altitude_m: impact.airburst_altitude_m.unwrap_or(impact.altitude_m),
        };
    }
    if impact.ground_impact {
        return Outcome::GroundImpact {
            velocity_m_s: impact.velocity_m_s,
            mass_fraction: impact.mass_fraction,
        };
    }
    Outcome::Decelerated
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::CompleteAblation => write!(f, "Complete ablation in the atmosphere"),
            Outcome::Airburst { altitude_m } => {
                write!(f, "Airburst at {:.1} km altitude", m_to_km(*altitude_m))
            }
            Outcome::GroundImpact {
                velocity_m_s,
                mass_fraction,
            } => write!(
                f,
                "Ground impact at {:.2} km/s with {:.1}% of initial mass",
                ms_to_kms(*velocity_m_s),
                mass_fraction * 100.0
            ),
            Outcome::Decelerated => write!(f, "Decelerated to low velocity in the atmosphere"),
        }
    }
}
