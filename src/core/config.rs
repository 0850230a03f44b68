//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.prepdeck/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::state::DashboardOptions;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PrepConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Deck JSON file. Relative paths are resolved against `~/.prepdeck/`.
    pub deck_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DashboardConfig {
    pub show_upcoming_reviews: Option<bool>,
    pub show_recent_progress: Option<bool>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// `None` means the builtin sample deck.
    pub deck_file: Option<PathBuf>,
    pub dashboard: DashboardOptions,
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

/// Returns `~/.prepdeck/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".prepdeck"))
}

/// Returns the path to `~/.prepdeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.prepdeck/config.toml`.
pub fn load_config() -> Result<PrepConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(PrepConfig::default())
        }
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PrepConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<PrepConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(PrepConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PrepConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# prepdeck configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# deck_file = "deck.json"            # Relative to ~/.prepdeck/, or absolute.
#                                    # Or set PREPDECK_DECK_FILE / pass --deck.

# [dashboard]
# show_upcoming_reviews = true
# show_recent_progress = true
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

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_deck` is the `--deck` flag (None = not specified).
pub fn resolve(config: &PrepConfig, cli_deck: Option<&Path>) -> ResolvedConfig {
    let env_deck = std::env::var_os("PREPDECK_DECK_FILE").map(PathBuf::from);
    resolve_with(config, cli_deck, env_deck)
}

/// `resolve` with the `PREPDECK_DECK_FILE` value passed in instead of read
/// from the process environment.
pub fn resolve_with(
    config: &PrepConfig,
    cli_deck: Option<&Path>,
    env_deck: Option<PathBuf>,
) -> ResolvedConfig {
    // Deck: CLI → env → config (relative to ~/.prepdeck/) → builtin
    let deck_file = cli_deck
        .map(Path::to_path_buf)
        .or(env_deck)
        .or_else(|| {
            config
                .general
                .deck_file
                .as_deref()
                .map(|file| relative_to_config_dir(Path::new(file)))
        });

    let defaults = DashboardOptions::default();
    let dashboard = DashboardOptions {
        show_upcoming_reviews: config
            .dashboard
            .show_upcoming_reviews
            .unwrap_or(defaults.show_upcoming_reviews),
        show_recent_progress: config
            .dashboard
            .show_recent_progress
            .unwrap_or(defaults.show_recent_progress),
    };

    ResolvedConfig {
        deck_file,
        dashboard,
    }
}

fn relative_to_config_dir(file: &Path) -> PathBuf {
    if file.is_absolute() {
        return file.to_path_buf();
    }
    match config_dir() {
        Some(dir) => dir.join(file),
        None => file.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = PrepConfig::default();
        assert!(config.general.deck_file.is_none());
        assert!(config.dashboard.show_recent_progress.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = PrepConfig::default();
        let resolved = resolve_with(&config, None, None);
        assert_eq!(resolved.dashboard, DashboardOptions::default());
        assert!(resolved.deck_file.is_none());
    }

    #[test]
    fn test_resolve_cli_deck_wins() {
        let config = PrepConfig {
            general: GeneralConfig {
                deck_file: Some("from-config.json".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve_with(
            &config,
            Some(Path::new("cli.json")),
            Some(PathBuf::from("env.json")),
        );
        assert_eq!(resolved.deck_file, Some(PathBuf::from("cli.json")));
    }

    #[test]
    fn test_resolve_env_deck_beats_config_file() {
        let config = PrepConfig {
            general: GeneralConfig {
                deck_file: Some("/decks/from-config.json".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve_with(&config, None, Some(PathBuf::from("env.json")));
        assert_eq!(resolved.deck_file, Some(PathBuf::from("env.json")));

        // Without the env value the config file applies
        let resolved = resolve_with(&config, None, None);
        assert_eq!(
            resolved.deck_file,
            Some(PathBuf::from("/decks/from-config.json"))
        );
    }

    #[test]
    fn test_absolute_config_deck_is_kept() {
        let dir = tempfile::TempDir::new().unwrap();
        let absolute = dir.path().join("deck.json");
        assert_eq!(relative_to_config_dir(&absolute), absolute);
    }

    #[test]
    fn test_relative_config_deck_lands_in_config_dir() {
        let resolved = relative_to_config_dir(Path::new("deck.json"));
        if let Some(dir) = config_dir() {
            assert_eq!(resolved, dir.join("deck.json"));
        }
    }

    #[test]
    fn test_dashboard_values_override_defaults() {
        let config = PrepConfig {
            dashboard: DashboardConfig {
                show_upcoming_reviews: Some(false),
                show_recent_progress: None,
            },
            ..Default::default()
        };
        let resolved = resolve_with(&config, None, None);
        assert!(!resolved.dashboard.show_upcoming_reviews);
        assert!(resolved.dashboard.show_recent_progress);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
deck_file = "decks/backend.json"

[dashboard]
show_upcoming_reviews = false
show_recent_progress = true
"#;
        let config: PrepConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.general.deck_file.as_deref(),
            Some("decks/backend.json")
        );
        assert_eq!(config.dashboard.show_upcoming_reviews, Some(false));
        assert_eq!(config.dashboard.show_recent_progress, Some(true));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[dashboard]
show_recent_progress = false
"#;
        let config: PrepConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.dashboard.show_recent_progress, Some(false));
        assert!(config.dashboard.show_upcoming_reviews.is_none());
        assert!(config.general.deck_file.is_none());
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert!(config.general.deck_file.is_none());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# deck_file"));
        // Everything is commented out, so it loads back as defaults
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.dashboard.show_upcoming_reviews.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[dashboard\nshow_recent_progress = ").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
