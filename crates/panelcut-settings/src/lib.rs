//! PanelCut Settings Crate
//!
//! Handles application configuration: board geometry, request limits and
//! display preferences, loaded from JSON or TOML with environment overrides.

pub mod config;
pub mod error;

pub use config::{
    BoardSettings, Config, DisplaySettings, ENV_BOARD_LENGTH, ENV_BOARD_WIDTH, ENV_KERF,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
