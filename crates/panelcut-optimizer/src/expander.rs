//! Panel expander
//!
//! Unrolls panel quantities into one candidate per physical piece.

use crate::types::Candidate;
use panelcut_core::PanelSpec;

/// Expand panel specs into candidates, in panel order.
///
/// Copies of the same spec are emitted consecutively and keep the index of
/// the spec they came from. No validation is performed here.
pub fn expand_panels(panels: &[PanelSpec]) -> Vec<Candidate> {
    let capacity = panels.iter().map(|p| p.quantity as usize).sum();
    let mut expanded = Vec::with_capacity(capacity);

    for (panel_index, panel) in panels.iter().enumerate() {
        let label = panel.display_label(panel_index);
        let area = panel.area();
        for _ in 0..panel.quantity {
            expanded.push(Candidate {
                panel_index,
                width: panel.width,
                length: panel.length,
                area,
                label: label.clone(),
            });
        }
    }

    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_unrolls_quantity() {
        let panels = vec![
            PanelSpec::new(600.0, 400.0, 2).with_label("Door"),
            PanelSpec::new(300.0, 300.0, 3),
        ];

        let expanded = expand_panels(&panels);

        assert_eq!(expanded.len(), 5);
        assert!(expanded[..2].iter().all(|c| c.panel_index == 0));
        assert!(expanded[2..].iter().all(|c| c.panel_index == 1));
        assert_eq!(expanded[0].label, "Door");
        assert_eq!(expanded[4].label, "Panel 2");
        assert_eq!(expanded[0].area, 240_000.0);
    }

    #[test]
    fn test_expand_empty() {
        assert!(expand_panels(&[]).is_empty());
    }

    #[test]
    fn test_expand_zero_quantity_yields_nothing() {
        let panels = vec![PanelSpec::new(100.0, 100.0, 0), PanelSpec::new(50.0, 50.0, 1)];
        let expanded = expand_panels(&panels);

        assert_eq!(expanded.len(), 1);
        assert_eq!(expanded[0].panel_index, 1);
    }
}
