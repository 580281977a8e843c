//! Configuration and settings management for PanelCut
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, stored by default in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Board geometry (stock size, kerf, placement grid)
//! - Request limits (dimension, quantity and supply bounds)
//! - Display preferences (measurement system for human-readable output)

pub use panelcut_core::units::MeasurementSystem;
use panelcut_core::units::parse_length;
use panelcut_optimizer::{
    BoardParameters, ValidationLimits, DEFAULT_BOARD_LENGTH_MM, DEFAULT_BOARD_WIDTH_MM,
    DEFAULT_GRID_STEP_MM, DEFAULT_KERF_MM,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Overrides `board.width_mm`
pub const ENV_BOARD_WIDTH: &str = "PANELCUT_BOARD_WIDTH_MM";
/// Overrides `board.length_mm`
pub const ENV_BOARD_LENGTH: &str = "PANELCUT_BOARD_LENGTH_MM";
/// Overrides `board.kerf_mm`
pub const ENV_KERF: &str = "PANELCUT_KERF_MM";

const CONFIG_DIR_NAME: &str = "panelcut";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Stock board geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Board width in mm
    pub width_mm: f64,
    /// Board length in mm
    pub length_mm: f64,
    /// Saw kerf in mm
    pub kerf_mm: f64,
    /// Placement search step in mm
    pub grid_step_mm: f64,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            width_mm: DEFAULT_BOARD_WIDTH_MM,
            length_mm: DEFAULT_BOARD_LENGTH_MM,
            kerf_mm: DEFAULT_KERF_MM,
            grid_step_mm: DEFAULT_GRID_STEP_MM,
        }
    }
}

/// Human-readable output preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub measurement_system: MeasurementSystem,
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub board: BoardSettings,
    pub limits: ValidationLimits,
    pub display: DisplaySettings,
}

enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn require(key: &str, value: f64, ok: bool) -> ConfigResult<()> {
    if ok && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location, e.g. `~/.config/panelcut/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config or home directory found".to_string())
            })?;
        Ok(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML, chosen by extension)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_for(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` when it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_for(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Serialize the configuration as TOML
    pub fn to_toml_string(&self) -> SettingsResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let board = &self.board;
        let limits = &self.limits;

        require("board.width_mm", board.width_mm, board.width_mm > 0.0)?;
        require("board.length_mm", board.length_mm, board.length_mm > 0.0)?;
        require("board.grid_step_mm", board.grid_step_mm, board.grid_step_mm > 0.0)?;
        require(
            "board.kerf_mm",
            board.kerf_mm,
            board.kerf_mm >= 0.0 && board.kerf_mm <= limits.max_kerf,
        )?;

        require(
            "limits.max_panel_dimension",
            limits.max_panel_dimension,
            limits.max_panel_dimension > 0.0,
        )?;
        require("limits.max_kerf", limits.max_kerf, limits.max_kerf >= 0.0)?;
        require(
            "limits.max_quantity",
            f64::from(limits.max_quantity),
            limits.max_quantity > 0,
        )?;
        require(
            "limits.max_client_boards",
            f64::from(limits.max_client_boards),
            limits.max_client_boards > 0,
        )?;
        require(
            "limits.max_client_edging_meters",
            limits.max_client_edging_meters,
            limits.max_client_edging_meters >= 0.0,
        )?;

        Ok(())
    }

    /// Apply `PANELCUT_*` environment overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> ConfigResult<()> {
        self.apply_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides using `lookup` to resolve variable names; values are
    /// millimeters.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let targets: [(&str, &mut f64); 3] = [
            (ENV_BOARD_WIDTH, &mut self.board.width_mm),
            (ENV_BOARD_LENGTH, &mut self.board.length_mm),
            (ENV_KERF, &mut self.board.kerf_mm),
        ];

        for (name, slot) in targets {
            if let Some(raw) = lookup(name) {
                *slot = parse_length(&raw, MeasurementSystem::Metric).map_err(|_| {
                    ConfigError::InvalidEnvironment {
                        name: name.to_string(),
                        value: raw.clone(),
                    }
                })?;
                debug!("{} overrides board setting with {}", name, raw);
            }
        }

        self.validate()
    }

    /// Board geometry for the optimizer
    pub fn board_parameters(&self) -> BoardParameters {
        BoardParameters::new(self.board.width_mm, self.board.length_mm, self.board.kerf_mm)
            .with_grid_step(self.board.grid_step_mm)
    }

    /// Request limits for the optimizer's validator
    pub fn validation_limits(&self) -> ValidationLimits {
        self.limits.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.board.width_mm, 1220.0);
        assert_eq!(config.board.length_mm, 2440.0);
        assert_eq!(config.board.kerf_mm, 3.0);
        assert_eq!(config.limits.max_quantity, 500);
        assert_eq!(config.display.measurement_system, MeasurementSystem::Metric);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.board.width_mm = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange { ref key, .. }) if key == "board.width_mm"
        ));

        let mut config = Config::default();
        config.board.kerf_mm = 12.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.board.grid_step_mm = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.limits.max_quantity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.board.kerf_mm = 4.0;
        config.display.measurement_system = MeasurementSystem::Imperial;
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_json_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.limits.max_quantity = 50;
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.limits.max_quantity, 50);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[board]\nkerf_mm = 2.5\n").unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.board.kerf_mm, 2.5);
        assert_eq!(loaded.board.width_mm, 1220.0);
        assert_eq!(loaded.limits, ValidationLimits::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "board: {}").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Config(ConfigError::UnsupportedFormat(ref ext)) if ext == "yaml"
        ));
        assert!(Config::default().save_to_file(&path).is_err());
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[board]\nwidth_mm = -5.0\n").unwrap();

        assert!(matches!(
            Config::load_from_file(&path),
            Err(SettingsError::Config(_))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides_from(lookup(&[
                (ENV_BOARD_WIDTH, "1830"),
                (ENV_KERF, " 1.5 "),
            ]))
            .unwrap();

        assert_eq!(config.board.width_mm, 1830.0);
        assert_eq!(config.board.length_mm, 2440.0);
        assert_eq!(config.board.kerf_mm, 1.5);
    }

    #[test]
    fn test_env_override_errors() {
        let mut config = Config::default();
        let err = config
            .apply_overrides_from(lookup(&[(ENV_KERF, "thin")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnvironment {
                name: ENV_KERF.to_string(),
                value: "thin".to_string(),
            }
        );

        let mut config = Config::default();
        assert!(config
            .apply_overrides_from(lookup(&[(ENV_BOARD_LENGTH, "-10")]))
            .is_err());
    }

    #[test]
    fn test_board_parameters() {
        let mut config = Config::default();
        config.board.grid_step_mm = 5.0;
        let params = config.board_parameters();

        assert_eq!(params.width, 1220.0);
        assert_eq!(params.length, 2440.0);
        assert_eq!(params.kerf, 3.0);
        assert_eq!(params.grid_step, 5.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_toml_string_has_sections() {
        let toml = Config::default().to_toml_string().unwrap();
        assert!(toml.contains("[board]"));
        assert!(toml.contains("[limits]"));
        assert!(toml.contains("[display]"));
        assert!(toml.contains("measurement_system = \"metric\""));
    }

    #[test]
    fn test_default_path_ends_with_file_name() {
        if let Ok(path) = Config::default_path() {
            assert!(path.ends_with("panelcut/config.toml"));
        }
    }
}
