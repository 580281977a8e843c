//! Request validation
//!
//! Range checks applied to a cutting request before it reaches the packing
//! engine. Panels that cannot fit the board in either orientation are
//! rejected here; the engine itself never refuses a candidate.

use crate::error::{ParameterError, ParameterResult};
use crate::types::BoardParameters;
use panelcut_core::{CuttingRequest, PanelSpec, SupplyMode};
use serde::{Deserialize, Serialize};

/// Numeric bounds enforced on incoming requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    /// Largest accepted panel width or length in mm
    pub max_panel_dimension: f64,
    /// Largest accepted quantity per panel spec
    pub max_quantity: u32,
    /// Largest accepted kerf in mm
    pub max_kerf: f64,
    /// Largest number of boards a client may bring
    pub max_client_boards: u32,
    /// Largest edging length a client may bring, in meters
    pub max_client_edging_meters: f64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_panel_dimension: 5000.0,
            max_quantity: 500,
            max_kerf: 10.0,
            max_client_boards: 100,
            max_client_edging_meters: 10_000.0,
        }
    }
}

/// Checks requests against [`ValidationLimits`] and the board size
#[derive(Debug, Clone, Default)]
pub struct RequestValidator {
    limits: ValidationLimits,
}

fn check_range(name: &str, value: f64, min: f64, max: f64) -> ParameterResult<()> {
    if !value.is_finite() {
        return Err(ParameterError::InvalidValue {
            name: name.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }
    if value < min || value > max {
        return Err(ParameterError::OutOfRange {
            name: name.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn check_positive(name: &str, value: f64, max: f64) -> ParameterResult<()> {
    check_range(name, value, 0.0, max)?;
    if value <= 0.0 {
        return Err(ParameterError::InvalidValue {
            name: name.to_string(),
            reason: "must be greater than 0".to_string(),
        });
    }
    Ok(())
}

impl RequestValidator {
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    /// Validate a whole request against the given board
    pub fn validate(
        &self,
        request: &CuttingRequest,
        board: &BoardParameters,
    ) -> ParameterResult<()> {
        if let Some(kerf) = request.kerf() {
            check_range("options.kerf", kerf, 0.0, self.limits.max_kerf)?;
        }

        self.validate_supply(&request.supply)?;

        for (index, panel) in request.panels.iter().enumerate() {
            self.validate_panel(index, panel, board)?;
        }

        Ok(())
    }

    fn validate_supply(&self, supply: &SupplyMode) -> ParameterResult<()> {
        if let SupplyMode::Client {
            board_qty,
            edging_meters,
        } = supply
        {
            check_range(
                "supply.client_board_qty",
                f64::from(*board_qty),
                1.0,
                f64::from(self.limits.max_client_boards),
            )?;
            if let Some(meters) = edging_meters {
                check_range(
                    "supply.client_edging_meters",
                    *meters,
                    0.0,
                    self.limits.max_client_edging_meters,
                )?;
            }
        }
        Ok(())
    }

    /// Validate a single panel spec; `index` is 0-based
    pub fn validate_panel(
        &self,
        index: usize,
        panel: &PanelSpec,
        board: &BoardParameters,
    ) -> ParameterResult<()> {
        let panel_number = index + 1;
        let max = self.limits.max_panel_dimension;

        check_positive(&format!("panels[{}].width", index), panel.width, max)?;
        check_positive(&format!("panels[{}].length", index), panel.length, max)?;
        check_range(
            &format!("panels[{}].quantity", index),
            f64::from(panel.quantity),
            1.0,
            f64::from(self.limits.max_quantity),
        )?;

        if panel.width > board.width && panel.length > board.width {
            return Err(ParameterError::PanelTooWide {
                panel_number,
                width: panel.width,
                length: panel.length,
                board_width: board.width,
            });
        }
        if panel.width > board.length && panel.length > board.length {
            return Err(ParameterError::PanelTooLong {
                panel_number,
                width: panel.width,
                length: panel.length,
                board_length: board.length,
            });
        }

        Ok(())
    }
}
