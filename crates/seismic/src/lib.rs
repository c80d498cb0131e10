//! Seismic magnitude estimates for impact energies and comparison with recorded earthquakes.
//!
//! Live earthquake services sit behind [`EarthquakeCatalog`]; this crate ships an in-memory
//! implementation fed from CSV exports (`place,time,magnitude,url`).

use std::io::Read;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fraction of impact energy radiated as seismic waves (Schultz & Gault, 1975).
pub const DEFAULT_SEISMIC_COUPLING: f64 = 1.0e-4;

/// Richter-scale magnitude equivalent to `energy_j` coupled into the ground.
///
/// Uses `M = 0.67 · log10(k · E) − 5.87` (Collins et al., 2005). Returns `None` when either the
/// energy or the coupling factor is not positive.
pub fn energy_to_magnitude(energy_j: f64, coupling: f64) -> Option<f64> {
    if energy_j <= 0.0 || coupling <= 0.0 || !energy_j.is_finite() {
        return None;
    }
    Some(0.67 * (coupling * energy_j).log10() - 5.87)
}

/// A recorded earthquake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Earthquake {
    pub place: String,
    pub time: String,
    pub magnitude: f64,
    #[serde(default)]
    pub url: String,
}

/// CSV row; the magnitude column may be blank.
#[derive(Debug, Deserialize)]
struct EarthquakeRow {
    place: String,
    time: String,
    magnitude: Option<f64>,
    #[serde(default)]
    url: String,
}

/// Source of real earthquakes to compare an impact against.
pub trait EarthquakeCatalog {
    /// Up to `limit` events within `tolerance` of `magnitude`, closest first.
    fn find_similar(&self, magnitude: f64, tolerance: f64, limit: usize) -> Vec<Earthquake>;
}

#[derive(Debug, Error)]
pub enum SeismicError {
    #[error("failed to read earthquake catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse earthquake catalog: {0}")]
    Csv(#[from] csv::Error),
}

/// Fixed list of earthquakes held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    events: Vec<Earthquake>,
}

impl StaticCatalog {
    pub fn new(events: Vec<Earthquake>) -> Self {
        Self { events }
    }

    /// Parse a headered CSV catalog. Rows with a blank or non-finite magnitude are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SeismicError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut events = Vec::new();
        for row in rdr.deserialize() {
            let row: EarthquakeRow = row?;
            let magnitude = match row.magnitude {
                Some(m) if m.is_finite() => m,
                _ => {
                    warn!("skipping earthquake '{}' without a magnitude", row.place);
                    continue;
                }
            };
            events.push(Earthquake {
                place: row.place,
                time: row.time,
                magnitude,
                url: row.url,
            });
        }
        Ok(Self { events })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SeismicError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EarthquakeCatalog for StaticCatalog {
    fn find_similar(&self, magnitude: f64, tolerance: f64, limit: usize) -> Vec<Earthquake> {
        let mut matches: Vec<&Earthquake> = self
            .events
            .iter()
            .filter(|e| (e.magnitude - magnitude).abs() <= tolerance)
            .collect();
        matches.sort_by(|a, b| {
            let da = (a.magnitude - magnitude).abs();
            let db = (b.magnitude - magnitude).abs();
            da.total_cmp(&db)
        });
        matches.into_iter().take(limit).cloned().collect()
    }
}
