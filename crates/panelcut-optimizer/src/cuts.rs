//! Cut extraction
//!
//! Derives full-span guillotine cut lines from a finalized board. Every
//! interior x coordinate that is a left or right edge of some placement
//! becomes a vertical cut across the full board length; interior y edges
//! become horizontal cuts across the full board width. This approximates a
//! panel-saw cutting plan; true guillotine separability is not checked.

use crate::types::{BoardLayout, CutOrientation, CutSegment};
use std::collections::BTreeMap;

/// Coordinates closer than this are treated as the same cut line
pub const COORDINATE_QUANTUM: f64 = 1e-6;

fn quantize(value: f64) -> i64 {
    (value / COORDINATE_QUANTUM).round() as i64
}

/// Distinct edge coordinates strictly inside (0, limit), ascending.
///
/// Keys are quantized so floating drift cannot produce near-duplicate
/// lines; the first coordinate seen for a key is the one reported.
fn interior_coordinates(edges: impl Iterator<Item = f64>, limit: f64) -> Vec<f64> {
    let upper = quantize(limit);
    let mut distinct: BTreeMap<i64, f64> = BTreeMap::new();

    for edge in edges {
        let key = quantize(edge);
        if key > 0 && key < upper {
            distinct.entry(key).or_insert(edge);
        }
    }

    distinct.into_values().collect()
}

/// Compute the cut list for one board: vertical cuts by increasing x,
/// then horizontal cuts by increasing y, with ids starting at 1.
pub fn extract_cuts(board: &BoardLayout) -> Vec<CutSegment> {
    let width = board.board_width;
    let length = board.board_length;

    let xs = interior_coordinates(
        board.panels.iter().flat_map(|p| [p.x, p.x_max()]),
        width,
    );
    let ys = interior_coordinates(
        board.panels.iter().flat_map(|p| [p.y, p.y_max()]),
        length,
    );

    let vertical = xs
        .into_iter()
        .map(|x| (CutOrientation::Vertical, x, 0.0, x, length, length));
    let horizontal = ys
        .into_iter()
        .map(|y| (CutOrientation::Horizontal, 0.0, y, width, y, width));

    vertical
        .chain(horizontal)
        .zip(1u32..)
        .map(|((orientation, x1, y1, x2, y2, span), id)| CutSegment {
            id,
            orientation,
            x1,
            y1,
            x2,
            y2,
            length: span,
        })
        .collect()
}

/// Compute and store the cut list on every board
pub fn finalize_boards(boards: &mut [BoardLayout]) {
    for board in boards.iter_mut() {
        board.cuts = extract_cuts(board);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Candidate;

    fn board_with(pieces: &[(f64, f64, f64, f64)]) -> BoardLayout {
        let mut board = BoardLayout::new(1, 1220.0, 2440.0);
        for (i, &(x, y, w, l)) in pieces.iter().enumerate() {
            let candidate = Candidate {
                panel_index: i,
                width: w,
                length: l,
                area: w * l,
                label: format!("Panel {}", i + 1),
            };
            board.place(&candidate, x, y);
        }
        board
    }

    #[test]
    fn test_single_piece_gives_two_cuts() {
        let board = board_with(&[(0.0, 0.0, 600.0, 400.0)]);
        let cuts = extract_cuts(&board);

        assert_eq!(cuts.len(), 2);

        assert_eq!(cuts[0].id, 1);
        assert_eq!(cuts[0].orientation, CutOrientation::Vertical);
        assert_eq!(
            (cuts[0].x1, cuts[0].y1, cuts[0].x2, cuts[0].y2),
            (600.0, 0.0, 600.0, 2440.0)
        );
        assert_eq!(cuts[0].length, 2440.0);

        assert_eq!(cuts[1].id, 2);
        assert_eq!(cuts[1].orientation, CutOrientation::Horizontal);
        assert_eq!(
            (cuts[1].x1, cuts[1].y1, cuts[1].x2, cuts[1].y2),
            (0.0, 400.0, 1220.0, 400.0)
        );
        assert_eq!(cuts[1].length, 1220.0);
    }

    #[test]
    fn test_board_edges_are_not_cuts() {
        let board = board_with(&[(0.0, 0.0, 1220.0, 2440.0)]);
        assert!(extract_cuts(&board).is_empty());
    }

    #[test]
    fn test_shared_edges_are_deduplicated() {
        let board = board_with(&[
            (0.0, 0.0, 300.0, 300.0),
            (310.0, 0.0, 300.0, 300.0),
            (0.0, 310.0, 300.0, 300.0),
        ]);
        let cuts = extract_cuts(&board);

        let xs: Vec<f64> = cuts
            .iter()
            .filter(|c| c.orientation == CutOrientation::Vertical)
            .map(|c| c.x1)
            .collect();
        let ys: Vec<f64> = cuts
            .iter()
            .filter(|c| c.orientation == CutOrientation::Horizontal)
            .map(|c| c.y1)
            .collect();

        assert_eq!(xs, vec![300.0, 310.0, 610.0]);
        assert_eq!(ys, vec![300.0, 310.0, 610.0]);
        let ids: Vec<u32> = cuts.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_floating_drift_does_not_duplicate_cuts() {
        let board = board_with(&[
            (0.0, 0.0, 0.1 + 0.2, 100.0),
            (0.3, 110.0, 50.0, 100.0),
        ]);
        let cuts = extract_cuts(&board);

        let verticals = cuts
            .iter()
            .filter(|c| c.orientation == CutOrientation::Vertical)
            .count();
        // 0.30000000000000004 and 0.3 collapse into one line, plus x = 50.3
        assert_eq!(verticals, 2);
    }

    #[test]
    fn test_empty_board_has_no_cuts() {
        let board = BoardLayout::new(1, 1220.0, 2440.0);
        assert!(extract_cuts(&board).is_empty());
    }

    #[test]
    fn test_finalize_boards_assigns_ids_per_board() {
        let mut boards = vec![
            board_with(&[(0.0, 0.0, 600.0, 400.0)]),
            board_with(&[(0.0, 0.0, 500.0, 500.0)]),
        ];
        finalize_boards(&mut boards);

        assert_eq!(boards[0].cuts.len(), 2);
        assert_eq!(boards[1].cuts[0].id, 1);
        assert_eq!(boards[1].cut_length(), 2440.0 + 1220.0);
    }
}
