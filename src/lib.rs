//! Asteroid and comet atmospheric entry kernel.
//!
//! The physics lives in the workspace crates re-exported below; this crate ties them together
//! into a single scenario assessment and hosts the material catalog and input checks used by the
//! `impact` binary.

pub mod assessment;
pub mod catalog;
pub mod input;

pub use impact_blast as blast;
pub use impact_config as config;
pub use impact_core as core;
pub use impact_export as export;
pub use impact_model as model;
pub use impact_seismic as seismic;
pub use impact_trajectory as trajectory;

pub use assessment::{ScenarioAssessment, assess_scenario, assess_scenario_with};
