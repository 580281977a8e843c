//! Edge-banding totals
//!
//! Computes how many meters of edging tape a cut list needs, per panel spec
//! and overall.

use panelcut_core::units::{mm_to_meters, round_to};
use panelcut_core::{PanelSpec, SupplyMode};
use serde::{Deserialize, Serialize};

/// Edging needed for one panel spec
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgingDetail {
    pub panel_label: String,
    pub quantity: u32,
    /// Meters per single panel, 3 decimals
    pub edge_per_panel_m: f64,
    /// Meters for all copies, 2 decimals
    pub total_edge_m: f64,
    /// Banded sides, e.g. "LRT"
    pub edges_applied: String,
}

/// Edging for a whole request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgingSummary {
    /// Total meters, 2 decimals
    pub total_meters: f64,
    pub details: Vec<EdgingDetail>,
}

impl EdgingSummary {
    /// Meters to bill for: the client's own figure when they supply edging,
    /// otherwise the computed total.
    pub fn effective_meters(&self, supply: &SupplyMode) -> f64 {
        match supply {
            SupplyMode::Client {
                edging_meters: Some(meters),
                ..
            } => *meters,
            _ => self.total_meters,
        }
    }
}

/// Compute edging for every spec that has at least one banded edge
pub fn calculate_edging(panels: &[PanelSpec]) -> EdgingSummary {
    let mut total_edge_mm = 0.0;
    let mut details = Vec::new();

    for (index, panel) in panels.iter().enumerate() {
        let per_panel_mm = panel.edge_length();
        let total_mm = panel.total_edge_length();
        total_edge_mm += total_mm;

        if per_panel_mm > 0.0 {
            details.push(EdgingDetail {
                panel_label: panel.display_label(index),
                quantity: panel.quantity,
                edge_per_panel_m: round_to(mm_to_meters(per_panel_mm), 3),
                total_edge_m: round_to(mm_to_meters(total_mm), 2),
                edges_applied: panel.edging.sides_code(),
            });
        }
    }

    EdgingSummary {
        total_meters: round_to(mm_to_meters(total_edge_mm), 2),
        details,
    }
}
