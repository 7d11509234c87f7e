//! Configuration loading and root folder resolution

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the database file inside the root folder
pub const DATABASE_FILE: &str = "catalog.db";

/// Logging section of the TOML config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// TOML configuration file model (`~/.config/catalog/catalog-api.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Root folder holding the database
    pub root_folder: Option<PathBuf>,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Root folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. CATALOG_ROOT_FOLDER environment variable
/// 3. CATALOG_ROOT environment variable
/// 4. TOML config file
/// 5. OS-dependent compiled default (fallback)
///
/// Missing config files never terminate startup; resolution always
/// produces a usable path.
pub fn resolve_root_folder(cli_arg: Option<&str>, module_name: &str) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2 and 3: Environment variables
    if let Ok(path) = std::env::var("CATALOG_ROOT_FOLDER") {
        return PathBuf::from(path);
    }
    if let Ok(path) = std::env::var("CATALOG_ROOT") {
        return PathBuf::from(path);
    }

    // Priority 4: TOML config file
    if let Ok(config) = load_config_file(module_name) {
        if let Some(root_folder) = config.root_folder {
            return root_folder;
        }
    }

    // Priority 5: OS-dependent compiled default
    default_root_folder()
}

/// Log level filter from the module's config file, defaulting to "info".
/// The RUST_LOG environment variable takes precedence over this value.
pub fn log_level(module_name: &str) -> String {
    load_config_file(module_name)
        .map(|config| config.logging.level)
        .unwrap_or_else(|_| LoggingConfig::default().level)
}

/// Load and parse the module's TOML config file
pub fn load_config_file(module_name: &str) -> Result<TomlConfig> {
    let path = config_file_path(module_name)?;
    let toml_content = std::fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
    toml::from_str(&toml_content)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Get configuration file path for the platform
fn config_file_path(module_name: &str) -> Result<PathBuf> {
    let file_name = format!("{}.toml", module_name);

    if cfg!(target_os = "linux") {
        // Try ~/.config/catalog/<module>.toml first, then /etc/catalog/<module>.toml
        if let Some(path) = dirs::config_dir().map(|d| d.join("catalog").join(&file_name)) {
            if path.exists() {
                return Ok(path);
            }
        }
        let system_config = PathBuf::from("/etc/catalog").join(&file_name);
        if system_config.exists() {
            return Ok(system_config);
        }
        Err(Error::Config("No config file found".to_string()))
    } else {
        let path = dirs::config_dir()
            .map(|d| d.join("catalog").join(&file_name))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;
        if path.exists() {
            Ok(path)
        } else {
            Err(Error::Config(format!("Config file not found: {:?}", path)))
        }
    }
}

/// Get OS-dependent default root folder path
pub fn default_root_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("catalog"))
        .unwrap_or_else(|| PathBuf::from("./catalog_data"))
}

/// Path of the database file inside the root folder
pub fn database_path(root_folder: &Path) -> PathBuf {
    root_folder.join(DATABASE_FILE)
}

/// Create the root folder directory if missing (idempotent)
pub fn ensure_root_folder(root_folder: &Path) -> Result<()> {
    std::fs::create_dir_all(root_folder)?;
    Ok(())
}
