//! Type definitions for board layouts
//!
//! Coordinates are in millimeters with the origin at the board's top-left
//! corner; x grows across the board width and y along the board length.

use crate::error::{OptimizerError, OptimizerResult};
use serde::{Deserialize, Serialize};

/// Standard 4x8 sheet width in mm
pub const DEFAULT_BOARD_WIDTH_MM: f64 = 1220.0;
/// Standard 4x8 sheet length in mm
pub const DEFAULT_BOARD_LENGTH_MM: f64 = 2440.0;
/// Default saw kerf in mm
pub const DEFAULT_KERF_MM: f64 = 3.0;
/// Default raster step for the placement search in mm
pub const DEFAULT_GRID_STEP_MM: f64 = 10.0;

/// Stock board geometry shared by every board in a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardParameters {
    /// Board width in mm
    pub width: f64,
    /// Board length in mm
    pub length: f64,
    /// Minimum clearance between two placements in mm
    pub kerf: f64,
    /// Raster step of the placement search in mm
    pub grid_step: f64,
}

impl Default for BoardParameters {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH_MM,
            length: DEFAULT_BOARD_LENGTH_MM,
            kerf: DEFAULT_KERF_MM,
            grid_step: DEFAULT_GRID_STEP_MM,
        }
    }
}

impl BoardParameters {
    pub fn new(width: f64, length: f64, kerf: f64) -> Self {
        Self {
            width,
            length,
            kerf,
            grid_step: DEFAULT_GRID_STEP_MM,
        }
    }

    pub fn with_kerf(mut self, kerf: f64) -> Self {
        self.kerf = kerf;
        self
    }

    pub fn with_grid_step(mut self, grid_step: f64) -> Self {
        self.grid_step = grid_step;
        self
    }

    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Reject configurations the packing engine cannot work with
    pub fn validate(&self) -> OptimizerResult<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(OptimizerError::InvalidBoard(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(OptimizerError::InvalidBoard(format!(
                "length must be positive, got {}",
                self.length
            )));
        }
        if !(self.kerf.is_finite() && self.kerf >= 0.0) {
            return Err(OptimizerError::InvalidBoard(format!(
                "kerf must be non-negative, got {}",
                self.kerf
            )));
        }
        if !(self.grid_step.is_finite() && self.grid_step > 0.0) {
            return Err(OptimizerError::InvalidBoard(format!(
                "grid step must be positive, got {}",
                self.grid_step
            )));
        }
        Ok(())
    }
}

/// One physical piece to be cut
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Index of the originating panel spec
    pub panel_index: usize,
    pub width: f64,
    pub length: f64,
    pub area: f64,
    pub label: String,
}

/// A piece placed on a board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPanel {
    pub panel_index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub length: f64,
    pub label: String,
}

impl PlacedPanel {
    /// Right edge x coordinate
    pub fn x_max(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn y_max(&self) -> f64 {
        self.y + self.length
    }

    pub fn area(&self) -> f64 {
        self.width * self.length
    }
}

/// Direction of a straight cut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CutOrientation {
    /// Cut parallel to the board length, at a fixed x
    #[serde(rename = "V")]
    Vertical,
    /// Cut parallel to the board width, at a fixed y
    #[serde(rename = "H")]
    Horizontal,
}

/// A full-span straight cut across a board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutSegment {
    /// Sequential id, starting at 1 per board
    pub id: u32,
    pub orientation: CutOrientation,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub length: f64,
}

/// A single stock board and everything placed on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// 1-based board number in creation order
    pub board_number: usize,
    pub board_width: f64,
    pub board_length: f64,
    pub used_area_mm2: f64,
    pub waste_area_mm2: f64,
    pub efficiency_percent: f64,
    pub panel_count: usize,
    pub panels: Vec<PlacedPanel>,
    #[serde(default)]
    pub cuts: Vec<CutSegment>,
}

impl BoardLayout {
    /// Create an empty board
    pub fn new(board_number: usize, board_width: f64, board_length: f64) -> Self {
        Self {
            board_number,
            board_width,
            board_length,
            used_area_mm2: 0.0,
            waste_area_mm2: board_width * board_length,
            efficiency_percent: 0.0,
            panel_count: 0,
            panels: Vec::new(),
            cuts: Vec::new(),
        }
    }

    pub fn board_area(&self) -> f64 {
        self.board_width * self.board_length
    }

    /// Place a candidate at (x, y) and refresh the running statistics
    pub fn place(&mut self, candidate: &Candidate, x: f64, y: f64) {
        self.panels.push(PlacedPanel {
            panel_index: candidate.panel_index,
            x,
            y,
            width: candidate.width,
            length: candidate.length,
            label: candidate.label.clone(),
        });
        self.panel_count += 1;
        self.used_area_mm2 += candidate.area;

        let board_area = self.board_area();
        self.waste_area_mm2 = board_area - self.used_area_mm2;
        self.efficiency_percent = if board_area > 0.0 {
            self.used_area_mm2 / board_area * 100.0
        } else {
            0.0
        };
    }

    /// Total length of all cuts on this board
    pub fn cut_length(&self) -> f64 {
        self.cuts.iter().map(|c| c.length).sum()
    }
}

/// Global statistics over all boards of a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizationSummary {
    pub total_boards: usize,
    pub total_panels: usize,
    pub unique_panel_types: usize,
    pub total_edging_meters: f64,
    pub total_cuts: usize,
    pub total_cut_length: f64,
    pub total_waste_mm2: f64,
    pub total_waste_percent: f64,
    pub board_width: f64,
    pub board_length: f64,
}
