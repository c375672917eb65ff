//! Files under ~/.flappy/: the optional config and the log.

use crate::core::config::GameConfig;
use crate::core::constants::CONFIG_FILENAME;
use crate::core::error::FlappyError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Get the ~/.flappy/ directory path, creating it if needed.
pub fn flappy_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".flappy");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.flappy/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(flappy_dir()?.join(filename))
}

/// Resolve the config to play with.
///
/// An explicit path must exist and be valid. Without one, ~/.flappy/config.json
/// is used if present; otherwise the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<GameConfig, FlappyError> {
    if let Some(path) = explicit {
        let config = GameConfig::load(path)?;
        info!(path = %path.display(), "loaded config");
        return Ok(config);
    }

    let path = data_path(CONFIG_FILENAME)?;
    if !path.exists() {
        return Ok(GameConfig::default());
    }
    let config = GameConfig::load(&path)?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Pretty-printed JSON for `flappy config`.
pub fn config_to_json(config: &GameConfig) -> Result<String, FlappyError> {
    serde_json::to_string_pretty(config)
        .map_err(|e| FlappyError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
