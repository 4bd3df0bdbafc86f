//! Config loading: defaults, then JSON file, then command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use voxelplay_types::models::BotConfig;
use voxelplay_types::ConfigError;

use crate::cli::Overrides;

const CONFIG_DIR: &str = "voxelplay-bot";
const CONFIG_FILE: &str = "config.json";

/// `<config_dir>/voxelplay-bot/config.json`, used when no path is given.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config(
    explicit: Option<&Path>,
    fallback: Option<PathBuf>,
    overrides: &Overrides,
) -> Result<BotConfig, ConfigError> {
    let mut config = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::NotFound { path: path.display().to_string() });
            }
            load_config_file(path)?
        },
        None => match fallback.filter(|path| path.exists()) {
            Some(path) => load_config_file(&path)?,
            None => BotConfig::default(),
        },
    };

    apply_overrides(&mut config, overrides);
    config.validate()?;
    Ok(config)
}

fn load_config_file(path: &Path) -> Result<BotConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let config = serde_json::from_str(&content)
        .map_err(|e| ConfigError::ParseError { message: format!("{}: {}", path.display(), e) })?;
    tracing::info!("[Config] Loaded {}", path.display());
    Ok(config)
}

fn apply_overrides(config: &mut BotConfig, overrides: &Overrides) {
    if let Some(data_file) = &overrides.data_file {
        config.data_file = data_file.clone();
    }
    if let Some(base_url) = &overrides.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(interval_secs) = overrides.interval_secs {
        config.interval_secs = interval_secs;
    }
}
