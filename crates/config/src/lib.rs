//! Configuration models and loaders for the Impact Calculator.

use std::fs::File;
use std::path::{Path, PathBuf};

use impact_blast::OverpressureThresholds;
use impact_trajectory::IntegratorOptions;
use serde::Deserialize;
use thiserror::Error;

/// Projectile material parsed from catalog files.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MaterialConfig {
    pub name: String,
    pub density_kg_m3: f64,
    pub strength_pa: f64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Kernel tuning parsed from a TOML settings file. Omitted keys keep their defaults.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct KernelSettings {
    pub integrator: IntegratorOptions,
    pub overpressure: OverpressureThresholds,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load material configurations from a YAML list, a TOML record, or a directory of TOML records.
pub fn load_materials<P: AsRef<Path>>(path: P) -> Result<Vec<MaterialConfig>, ConfigError> {
    load_records(path)
}

/// Load kernel settings from a TOML file.
pub fn load_kernel_settings<P: AsRef<Path>>(path: P) -> Result<KernelSettings, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
