//! Configuration module
//!
//! Handles loading and saving of the llm config.toml file.
//! Every setting is optional; a missing default file means defaults.

mod types;

pub use types::{ClaudeSettings, Config, OllamaSettings, OpenAiSettings};

use crate::error::{LlmError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config location, e.g. `~/.config/llm/config.toml` on Linux
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "llm").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        LlmError::Config(format!(
            "Cannot read config from '{}': {}. Run 'llm --init-config' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Load an explicitly given file, else the default file if present, else defaults
pub fn resolve(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load(path);
    }

    match default_path() {
        Some(path) if path.exists() => {
            tracing::debug!(path = %path.display(), "loading config");
            load(&path)
        }
        _ => Ok(Config::default()),
    }
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| LlmError::Config(format!("Failed to serialize config: {}", e)))?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}
