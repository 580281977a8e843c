//! Summary aggregation over finalized boards.

use crate::types::{BoardLayout, BoardParameters, OptimizationSummary};
use panelcut_core::PanelSpec;

/// Reduce finalized boards and the input panel list into global totals.
///
/// `total_edging_meters` is left at zero; edging is computed separately and
/// merged with [`OptimizationSummary::merge_edging`].
pub fn summarize(
    boards: &[BoardLayout],
    panels: &[PanelSpec],
    params: &BoardParameters,
) -> OptimizationSummary {
    let total_board_area: f64 = boards.iter().map(BoardLayout::board_area).sum();
    let total_waste: f64 = boards.iter().map(|b| b.waste_area_mm2).sum();

    OptimizationSummary {
        total_boards: boards.len(),
        total_panels: boards.iter().map(|b| b.panel_count).sum(),
        unique_panel_types: panels.len(),
        total_edging_meters: 0.0,
        total_cuts: boards.iter().map(|b| b.cuts.len()).sum(),
        total_cut_length: boards.iter().map(BoardLayout::cut_length).sum(),
        total_waste_mm2: total_waste,
        total_waste_percent: if total_board_area > 0.0 {
            total_waste / total_board_area * 100.0
        } else {
            0.0
        },
        board_width: params.width,
        board_length: params.length,
    }
}

impl OptimizationSummary {
    /// Merge externally computed edging meters into the summary
    pub fn merge_edging(&mut self, total_edging_meters: f64) {
        self.total_edging_meters = total_edging_meters;
    }

    /// Overall material utilisation in percent
    pub fn efficiency_percent(&self) -> f64 {
        if self.total_boards == 0 {
            0.0
        } else {
            100.0 - self.total_waste_percent
        }
    }
}
