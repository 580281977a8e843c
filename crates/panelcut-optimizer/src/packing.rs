//! Packing engine
//!
//! Greedy largest-area-first placement. Each candidate goes to the first
//! open board (in creation order) where a row-major raster scan over a fixed
//! grid finds a position that stays inside the board and keeps at least one
//! kerf of clearance to every piece already placed. When no board admits
//! the candidate a new board is opened and the candidate is placed at the
//! origin.
//!
//! The scan only visits grid points, so a position that exists solely
//! between grid points is never found. Panels are never rotated.

use crate::types::{BoardLayout, BoardParameters, Candidate, PlacedPanel};
use tracing::{debug, warn};

/// Axis-aligned rectangle used for feasibility checks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub length: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, length: f64) -> Self {
        Self {
            x,
            y,
            width,
            length,
        }
    }

    /// True when the two rectangles are closer than `clearance` on both axes
    pub fn collides(&self, other: &Rect, clearance: f64) -> bool {
        let separated = self.x + self.width + clearance <= other.x
            || other.x + other.width + clearance <= self.x
            || self.y + self.length + clearance <= other.y
            || other.y + other.length + clearance <= self.y;
        !separated
    }

    /// True when the rectangle lies fully inside a `width` x `length` board
    pub fn within(&self, width: f64, length: f64) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.x + self.width <= width
            && self.y + self.length <= length
    }
}

impl From<&PlacedPanel> for Rect {
    fn from(p: &PlacedPanel) -> Self {
        Rect::new(p.x, p.y, p.width, p.length)
    }
}

/// Greedy raster packer for a single board size
#[derive(Debug, Clone)]
pub struct PackingEngine {
    params: BoardParameters,
}

impl PackingEngine {
    pub fn new(params: BoardParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BoardParameters {
        &self.params
    }

    /// Pack all candidates, returning boards in creation order.
    ///
    /// Candidates are stable-sorted by area, largest first, so equal-area
    /// pieces keep their input order and the result is deterministic.
    pub fn pack(&self, mut candidates: Vec<Candidate>) -> Vec<BoardLayout> {
        candidates.sort_by(|a, b| b.area.total_cmp(&a.area));

        let mut boards: Vec<BoardLayout> = Vec::new();

        for candidate in &candidates {
            let slot = boards.iter_mut().find_map(|board| {
                self.find_position(board, candidate)
                    .map(|(x, y)| (board, x, y))
            });

            match slot {
                Some((board, x, y)) => board.place(candidate, x, y),
                None => {
                    let board = self.open_board(boards.len() + 1, candidate);
                    boards.push(board);
                }
            }
        }

        boards
    }

    /// First feasible grid position for `candidate` on `board`, scanning
    /// rows (y) in the outer loop and columns (x) in the inner loop.
    pub fn find_position(
        &self,
        board: &BoardLayout,
        candidate: &Candidate,
    ) -> Option<(f64, f64)> {
        let step = self.params.grid_step;
        let max_x = self.params.width - candidate.width;
        let max_y = self.params.length - candidate.length;
        if max_x < 0.0 || max_y < 0.0 {
            return None;
        }

        let rows = (max_y.floor() / step).floor() as u64;
        let cols = (max_x.floor() / step).floor() as u64;

        for row in 0..=rows {
            let y = row as f64 * step;
            for col in 0..=cols {
                let x = col as f64 * step;
                if self.can_place(board, x, y, candidate.width, candidate.length) {
                    return Some((x, y));
                }
            }
        }

        None
    }

    /// Feasibility test for a `width` x `length` piece at (x, y)
    pub fn can_place(
        &self,
        board: &BoardLayout,
        x: f64,
        y: f64,
        width: f64,
        length: f64,
    ) -> bool {
        let rect = Rect::new(x, y, width, length);
        if !rect.within(self.params.width, self.params.length) {
            return false;
        }

        board
            .panels
            .iter()
            .all(|placed| !rect.collides(&Rect::from(placed), self.params.kerf))
    }

    fn open_board(&self, board_number: usize, candidate: &Candidate) -> BoardLayout {
        let mut board = BoardLayout::new(board_number, self.params.width, self.params.length);

        if !Rect::new(0.0, 0.0, candidate.width, candidate.length)
            .within(self.params.width, self.params.length)
        {
            warn!(
                "Panel {} ({}x{}mm) does not fit a {}x{}mm board; placing it at the origin of board {}",
                candidate.label,
                candidate.width,
                candidate.length,
                self.params.width,
                self.params.length,
                board_number
            );
        } else {
            debug!("Opening board {} for {}", board_number, candidate.label);
        }

        board.place(candidate, 0.0, 0.0);
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(panel_index: usize, width: f64, length: f64) -> Candidate {
        Candidate {
            panel_index,
            width,
            length,
            area: width * length,
            label: format!("Panel {}", panel_index + 1),
        }
    }

    fn engine() -> PackingEngine {
        PackingEngine::new(BoardParameters::default())
    }

    #[test]
    fn test_rect_collision_respects_clearance() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);

        // exactly one kerf apart is allowed
        assert!(!a.collides(&Rect::new(103.0, 0.0, 50.0, 50.0), 3.0));
        assert!(a.collides(&Rect::new(102.0, 0.0, 50.0, 50.0), 3.0));
        assert!(!a.collides(&Rect::new(0.0, 103.0, 50.0, 50.0), 3.0));
        assert!(a.collides(&Rect::new(50.0, 50.0, 10.0, 10.0), 0.0));
        // touching with zero kerf is fine
        assert!(!a.collides(&Rect::new(100.0, 0.0, 50.0, 50.0), 0.0));
    }

    #[test]
    fn test_rect_within() {
        assert!(Rect::new(0.0, 0.0, 1220.0, 2440.0).within(1220.0, 2440.0));
        assert!(!Rect::new(10.0, 0.0, 1220.0, 2440.0).within(1220.0, 2440.0));
        assert!(!Rect::new(-1.0, 0.0, 10.0, 10.0).within(1220.0, 2440.0));
    }

    #[test]
    fn test_first_candidate_opens_board_at_origin() {
        let boards = engine().pack(vec![candidate(0, 600.0, 400.0)]);

        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].board_number, 1);
        assert_eq!(boards[0].panels[0].x, 0.0);
        assert_eq!(boards[0].panels[0].y, 0.0);
    }

    #[test]
    fn test_second_candidate_snaps_to_grid_after_kerf() {
        let boards = engine().pack(vec![
            candidate(0, 300.0, 300.0),
            candidate(1, 300.0, 300.0),
        ]);

        assert_eq!(boards.len(), 1);
        let second = &boards[0].panels[1];
        // 300 + 3 kerf rounds up to the next 10mm grid point
        assert_eq!((second.x, second.y), (310.0, 0.0));
    }

    #[test]
    fn test_largest_area_placed_first() {
        let boards = engine().pack(vec![
            candidate(0, 100.0, 100.0),
            candidate(1, 800.0, 800.0),
            candidate(2, 100.0, 100.0),
        ]);

        let order: Vec<usize> = boards[0].panels.iter().map(|p| p.panel_index).collect();
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn test_full_board_pieces_each_get_a_board() {
        let boards = engine().pack(vec![
            candidate(0, 1220.0, 2440.0),
            candidate(1, 1220.0, 2440.0),
        ]);

        assert_eq!(boards.len(), 2);
        assert_eq!(boards[1].board_number, 2);
        assert!(boards.iter().all(|b| b.panel_count == 1));
        assert!(boards.iter().all(|b| b.waste_area_mm2.abs() < 1e-6));
    }

    #[test]
    fn test_earlier_board_is_preferred() {
        // a big piece fills most of board 1, the second big piece opens board 2,
        // and the small piece still fits on board 1
        let boards = engine().pack(vec![
            candidate(0, 1220.0, 2000.0),
            candidate(1, 1220.0, 2000.0),
            candidate(2, 400.0, 400.0),
        ]);

        assert_eq!(boards.len(), 2);
        assert_eq!(boards[0].panel_count, 2);
        let small = &boards[0].panels[1];
        assert_eq!(small.panel_index, 2);
        assert_eq!((small.x, small.y), (0.0, 2010.0));
    }

    #[test]
    fn test_oversized_candidate_uses_origin_fallback() {
        let boards = engine().pack(vec![
            candidate(0, 1500.0, 3000.0),
            candidate(1, 100.0, 100.0),
        ]);

        assert_eq!(boards.len(), 2);
        assert_eq!(boards[0].panels[0].x, 0.0);
        assert!(boards[0].efficiency_percent > 100.0);
        assert!(boards[0].waste_area_mm2 < 0.0);
        let identity = boards[0].used_area_mm2 + boards[0].waste_area_mm2;
        assert!((identity - 2_976_800.0).abs() < 1e-6);
        // the oversized piece blocks its whole board, so the small one opens another
        assert_eq!(boards[1].panels[0].panel_index, 1);
    }

    #[test]
    fn test_no_position_when_candidate_exceeds_board_in_one_dimension() {
        let engine = engine();
        let board = BoardLayout::new(1, 1220.0, 2440.0);
        assert!(engine
            .find_position(&board, &candidate(0, 1300.0, 100.0))
            .is_none());
    }

    #[test]
    fn test_can_place_rejects_out_of_bounds() {
        let engine = engine();
        let board = BoardLayout::new(1, 1220.0, 2440.0);
        assert!(engine.can_place(&board, 620.0, 0.0, 600.0, 400.0));
        assert!(!engine.can_place(&board, 630.0, 0.0, 600.0, 400.0));
    }
}
