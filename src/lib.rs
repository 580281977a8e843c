//! # PanelCut
//!
//! A panel cutting layout optimizer for sheet-goods workshops:
//! - Packs rectangular panels onto uniform stock boards with kerf clearance
//! - Derives full-span guillotine cut lines for each board
//! - Reports waste, efficiency and edge-banding totals
//!
//! ## Architecture
//!
//! PanelCut is organized as a workspace with multiple crates:
//!
//! 1. **panelcut-core** - Request data model, units, errors
//! 2. **panelcut-optimizer** - Expansion, packing, cut extraction, summaries, edging
//! 3. **panelcut-settings** - Configuration files and environment overrides
//! 4. **panelcut** - Command-line binary that integrates all crates

pub mod report;

use anyhow::Context;
use std::path::Path;

pub use panelcut_core::units;
pub use panelcut_core::{
    CuttingOptions, CuttingRequest, EdgingSpec, Error, GrainAlignment, PanelSpec, Result,
    SupplyMode,
};

pub use panelcut_optimizer::{
    BoardLayout, BoardParameters, CutOrientation, CutSegment, CuttingResult, EdgingSummary,
    OptimizationSummary, OptimizerError, PanelOptimizer, ParameterError, PlacedPanel,
    ValidationLimits,
};

pub use panelcut_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so stdout can carry JSON results
/// - RUST_LOG environment variable support (INFO by default)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Resolve the effective configuration.
///
/// An explicit `path` must exist; otherwise the default location is used
/// when present. Environment overrides are applied last.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => {
            let default_path = Config::default_path()?;
            Config::load_or_default(&default_path)
                .with_context(|| format!("Failed to load config {}", default_path.display()))?
        }
    };

    config
        .apply_env_overrides()
        .context("Invalid environment override")?;

    Ok(config)
}
