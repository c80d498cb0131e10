//! Material catalog selection.

use impact_config::MaterialConfig;
use impact_model::MaterialPreset;
use thiserror::Error;

/// Errors surfaced when selecting or converting materials.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("material '{0}' not found in catalog")]
    NotFound(String),
    #[error("material catalog is empty")]
    EmptyCatalog,
    #[error("material '{0}' needs positive density and strength")]
    InvalidMaterial(String),
}

/// The canonical stony, iron, and cometary presets as catalog entries.
pub fn builtin() -> Vec<MaterialConfig> {
    MaterialPreset::canonical()
        .into_iter()
        .map(|preset| MaterialConfig {
            name: preset.name,
            density_kg_m3: preset.density_kg_m3,
            strength_pa: preset.strength_pa,
            description: None,
        })
        .collect()
}

/// Convert a `MaterialConfig` into a runtime `MaterialPreset`.
pub fn from_config(config: &MaterialConfig) -> Result<MaterialPreset, CatalogError> {
    let positive = |v: f64| v > 0.0 && v.is_finite();
    if !positive(config.density_kg_m3) || !positive(config.strength_pa) {
        return Err(CatalogError::InvalidMaterial(config.name.clone()));
    }
    Ok(MaterialPreset::new(
        config.name.clone(),
        config.density_kg_m3,
        config.strength_pa,
    ))
}

/// Select a material by optional name (case-insensitive), defaulting to the first stony entry.
pub fn select(
    configs: &[MaterialConfig],
    requested: Option<&str>,
) -> Result<MaterialPreset, CatalogError> {
    if configs.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }

    let chosen = if let Some(name) = requested {
        let upper = name.to_uppercase();
        configs
            .iter()
            .find(|cfg| cfg.name.to_uppercase() == upper)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))?
    } else {
        configs
            .iter()
            .find(|cfg| cfg.name.eq_ignore_ascii_case("stony"))
            .unwrap_or(&configs[0])
    };

    from_config(chosen)
}
