//! Plain-text run summary for the terminal.

use panelcut_core::units::{format_length, get_unit_label, mm2_to_m2, MeasurementSystem};
use panelcut_optimizer::CuttingResult;
use std::fmt::Write;

/// Render a short human-readable summary of a cutting result
pub fn render_summary(result: &CuttingResult, system: MeasurementSystem) -> String {
    let summary = &result.summary;
    let unit = get_unit_label(system);
    let mut out = String::new();

    let _ = writeln!(out, "Report {}", result.report_id);
    if let Some(project) = &result.project_name {
        let _ = writeln!(out, "Project: {}", project);
    }
    let _ = writeln!(
        out,
        "Board: {} x {} {}",
        format_length(summary.board_width, system),
        format_length(summary.board_length, system),
        unit
    );
    let _ = writeln!(
        out,
        "Boards: {}  Panels: {}  Types: {}",
        summary.total_boards, summary.total_panels, summary.unique_panel_types
    );
    let _ = writeln!(
        out,
        "Cuts: {}  Cut length: {} {}",
        summary.total_cuts,
        format_length(summary.total_cut_length, system),
        unit
    );
    let _ = writeln!(
        out,
        "Waste: {:.3} m2 ({:.2}%)  Efficiency: {:.2}%",
        mm2_to_m2(summary.total_waste_mm2),
        summary.total_waste_percent,
        summary.efficiency_percent()
    );
    let _ = writeln!(
        out,
        "Edging: {:.2} m (billable {:.2} m, {} supply)",
        summary.total_edging_meters,
        result.billable_edging_meters(),
        result.supply
    );

    for board in &result.layouts {
        let _ = writeln!(
            out,
            "  Board {}: {} panels, {} cuts, {:.2}% used",
            board.board_number,
            board.panel_count,
            board.cuts.len(),
            board.efficiency_percent
        );
    }

    out
}
