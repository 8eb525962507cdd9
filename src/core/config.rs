//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.transito/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::booking::{DEFAULT_BLOCKED, SeatId};
use crate::core::state::Screen;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TransitoConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub booking: BookingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Which view opens at startup: "home", "driver", or "admin".
    pub start_view: Option<String>,
    pub operator_name: Option<String>,
    pub driver_name: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BookingConfig {
    /// Seat ids pre-marked as reserved. Stand-in for the external
    /// reservation source a real system would consult.
    pub blocked_seats: Option<Vec<u8>>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_OPERATOR_NAME: &str = "LBTBS";
pub const DEFAULT_DRIVER_NAME: &str = "John Smith";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_view: Screen,
    pub operator_name: String,
    pub driver_name: String,
    pub blocked_seats: Vec<SeatId>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.transito/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".transito").join("config.toml"))
}

/// Load config from `~/.transito/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TransitoConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TransitoConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TransitoConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TransitoConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: TransitoConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Transito Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_view = "home"              # "home", "driver", or "admin"
# operator_name = "LBTBS"
# driver_name = "John Smith"

# [booking]
# blocked_seats = [3, 7, 11, 15, 18]   # pre-reserved seats, ids 1-20
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env
/// vars → CLI.
///
/// `cli_view` comes from the `--view` flag (None = not specified).
pub fn resolve(config: &TransitoConfig, cli_view: Option<Screen>) -> ResolvedConfig {
    // Start view: CLI → env → config → default
    let start_view = cli_view
        .or_else(|| {
            std::env::var("TRANSITO_VIEW")
                .ok()
                .and_then(|s| Screen::parse(&s))
        })
        .or_else(|| {
            config
                .general
                .start_view
                .as_deref()
                .and_then(Screen::parse)
        })
        .unwrap_or_default();

    let operator_name = config
        .general
        .operator_name
        .clone()
        .unwrap_or_else(|| DEFAULT_OPERATOR_NAME.to_string());

    let driver_name = config
        .general
        .driver_name
        .clone()
        .unwrap_or_else(|| DEFAULT_DRIVER_NAME.to_string());

    // Blocked seats: ids outside 1..=20 are dropped with a warning
    let blocked_seats = match &config.booking.blocked_seats {
        Some(ids) => ids
            .iter()
            .filter_map(|&id| {
                let seat = SeatId::new(id);
                if seat.is_none() {
                    warn!("Ignoring out-of-range blocked seat id {id}");
                }
                seat
            })
            .collect(),
        None => DEFAULT_BLOCKED.iter().filter_map(|&id| SeatId::new(id)).collect(),
    };

    ResolvedConfig {
        start_view,
        operator_name,
        driver_name,
        blocked_seats,
    }
}
