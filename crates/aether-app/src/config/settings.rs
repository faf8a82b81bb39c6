//! Settings loader for `~/.aetheros/config.toml`

use super::types::Settings;
use aether_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const AETHER_DIR: &str = ".aetheros";

const DEFAULT_CONFIG: &str = r#"# Aether shell preview configuration

[behavior]
confirm_quit = false    # Ask before quitting

[ui]
show_key_hints = true
terminal_scrollback = 200
mouse = true            # Click navigation entries to switch sections

[translator]
safety_level = "restricted"   # "restricted" or "unrestricted"

# Extra phrase -> command rules for the command preview, tried in file order
# [translator.commands]
# "show uptime" = ["uptime", "-p"]

[sandbox]
base_workdir = "/tmp/aetheros-sandbox"
allowed_binaries = ["ls", "cat", "echo", "uname", "df"]
allow_network = false
memory_limit_mb = 512
cpu_shares = 512
"#;

/// Default config path: `~/.aetheros/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(AETHER_DIR).join(CONFIG_FILENAME))
}

/// Load settings from a config file, falling back to defaults
///
/// A missing file is normal and only logged at debug level. A malformed file
/// is logged as a warning and an unreadable one as an error; both are
/// replaced by defaults.
pub fn load_settings(config_path: &Path) -> Settings {
    match read_settings(config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(Error::ConfigNotFound { path }) => {
            debug!("No config file at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) if e.is_recoverable() => {
            warn!("Ignoring {:?}: {}", config_path, e);
            Settings::default()
        }
        Err(e) => {
            error!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Read and parse a config file
///
/// Fails with [`Error::ConfigNotFound`] when nothing exists at `config_path`.
pub fn read_settings(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        return Err(Error::config_not_found(config_path));
    }

    let content = std::fs::read_to_string(config_path)?;
    parse_settings(&content)
}

/// Parse settings from TOML text
pub fn parse_settings(content: &str) -> Result<Settings> {
    toml::from_str(content).map_err(|e| Error::config_invalid(e.to_string()))
}

/// Write the commented default config file if none exists
///
/// Returns `true` when a file was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG).context("Failed to write default config")?;
    info!("Created default config at {:?}", config_path);
    Ok(true)
}
