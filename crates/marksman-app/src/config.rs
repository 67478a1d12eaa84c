//! Loading `SimConfig` from disk and applying command-line overrides.

use std::fs;
use std::path::Path;

use marksman_core::config::SimConfig;
use marksman_core::enums::RangePreset;

use crate::error::ConfigError;

/// Read a JSON config file. Missing fields take their defaults.
pub fn load_config(path: &Path) -> Result<SimConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a preset name as given on the command line.
pub fn parse_preset(name: &str) -> Result<RangePreset, ConfigError> {
    match name.trim().to_lowercase().as_str() {
        "distance" => Ok(RangePreset::Distance),
        "arcade" => Ok(RangePreset::Arcade),
        _ => Err(ConfigError::UnknownPreset(name.to_string())),
    }
}

/// Flags take precedence over the file.
pub fn apply_overrides(config: &mut SimConfig, seed: Option<u64>, preset: Option<RangePreset>) {
    if let Some(seed) = seed {
        config.seed = seed;
    }
    if let Some(preset) = preset {
        config.preset = preset;
    }
}
