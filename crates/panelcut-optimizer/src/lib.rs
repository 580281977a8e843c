//! # PanelCut Optimizer
//!
//! Computes cutting layouts for rectangular panels on fixed-size stock boards.
//!
//! ## Pipeline
//!
//! - **Expander**: turns panel specs with quantities into individual pieces
//! - **Packing**: greedy largest-area-first raster placement with kerf clearance
//! - **Cuts**: full-span vertical and horizontal cut lines per board
//! - **Summary**: board, panel, cut and waste totals
//! - **Edging**: edge-banding meters per spec and overall
//! - **Validation**: range checks on incoming requests
//!
//! [`PanelOptimizer`] runs the whole pipeline.

pub mod cuts;
pub mod edging;
pub mod error;
pub mod expander;
pub mod optimizer;
pub mod packing;
pub mod summary;
pub mod types;
pub mod validation;

pub use cuts::{extract_cuts, finalize_boards};
pub use edging::{calculate_edging, EdgingDetail, EdgingSummary};
pub use error::{OptimizerError, OptimizerResult, ParameterError, ParameterResult};
pub use expander::expand_panels;
pub use optimizer::{CuttingResult, PanelOptimizer};
pub use packing::PackingEngine;
pub use summary::summarize;
pub use types::{
    BoardLayout, BoardParameters, Candidate, CutOrientation, CutSegment, OptimizationSummary,
    PlacedPanel, DEFAULT_BOARD_LENGTH_MM, DEFAULT_BOARD_WIDTH_MM, DEFAULT_GRID_STEP_MM,
    DEFAULT_KERF_MM,
};
pub use validation::{RequestValidator, ValidationLimits};
