//! Atmospheric and body models feeding the entry integrator.
//!
//! Everything in this crate is a pure function of its inputs. Callers are expected to respect
//! the documented preconditions (positive diameter and density, non-negative speed, entry angle
//! in `(0, 90]` degrees); nothing here checks them.

pub mod atmosphere;
pub mod body;
pub mod entry;
pub mod material;

pub use atmosphere::{air_density, dynamic_pressure};
pub use body::{BodyProperties, body_properties};
pub use entry::{DEFAULT_ENTRY_ANGLE_DEG, EntryConditions, HYPERBOLIC_THRESHOLD_KM_S, entry_conditions};
pub use material::MaterialPreset;
