//! Configuration – reads/writes `~/.framekit/config.toml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Persisted user configuration stored in `~/.framekit/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Rotation angle for the demo chain, in degrees.
    #[serde(default = "default_theta_deg")]
    pub theta_deg: f64,

    /// Decimal places used when printing vectors.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_theta_deg() -> f64 {
    90.0
}
fn default_precision() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theta_deg: default_theta_deg(),
            precision: default_precision(),
        }
    }
}

/// Return the path to `~/.framekit/config.toml`.
pub fn config_path() -> PathBuf {
    config_path_for_home(
        &std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string()),
    )
}

/// Build the config path relative to the given home directory.
/// Extracted for testability without mutating environment variables.
pub(crate) fn config_path_for_home(home: &str) -> PathBuf {
    PathBuf::from(home).join(".framekit").join("config.toml")
}

/// Load the config from disk and apply environment overrides.  Returns
/// `None` if the file does not exist.
pub fn load() -> Result<Option<Config>, String> {
    let mut loaded = load_from(&config_path())?;
    if let Some(cfg) = loaded.as_mut() {
        apply_env_overrides(cfg);
    }
    Ok(loaded)
}

/// Load the config from a specific path, without environment overrides.
pub(crate) fn load_from(path: &PathBuf) -> Result<Option<Config>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
    let cfg: Config = toml::from_str(&raw).map_err(|e| format!("Failed to parse config: {}", e))?;
    Ok(Some(cfg))
}

/// Apply `FRAMEKIT_*` environment variable overrides to `cfg`.
///
/// Supported variables:
///
/// | Variable | Config field |
/// |---|---|
/// | `FRAMEKIT_THETA_DEG` | `theta_deg` |
/// | `FRAMEKIT_PRECISION` | `precision` |
pub fn apply_env_overrides(cfg: &mut Config) {
    if let Ok(v) = std::env::var("FRAMEKIT_THETA_DEG")
        && let Ok(theta) = v.parse::<f64>()
    {
        cfg.theta_deg = theta;
    }
    if let Ok(v) = std::env::var("FRAMEKIT_PRECISION")
        && let Ok(precision) = v.parse::<usize>()
    {
        cfg.precision = precision;
    }
}

/// Save the config to disk, creating `~/.framekit/` if necessary.
pub fn save(cfg: &Config) -> Result<(), String> {
    save_to(cfg, &config_path())
}

/// Save the config to a specific path.
pub(crate) fn save_to(cfg: &Config, path: &PathBuf) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }
    let raw =
        toml::to_string_pretty(cfg).map_err(|e| format!("Failed to serialize config: {}", e))?;
    fs::write(path, raw).map_err(|e| format!("Failed to write config at {}: {}", path.display(), e))
}
