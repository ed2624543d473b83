//! Board module - manages the committed game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds the
//! palette color index of the piece that locked there. Storage is a flat
//! row-major vector for cache locality; dimensions are fixed at creation.
//! Coordinates: (x, y) with x running left to right and y top to bottom.
//!
//! The board knows nothing about pieces or timing. It exposes the single
//! collision predicate every movement, rotation and spawn check goes through
//! (`can_place`), plus locking and full-row clearing.

use arrayvec::ArrayVec;

use blockfall_types::{Cell, ColorIndex};

/// A 4-cell piece can complete at most this many rows in one lock.
pub const MAX_ROWS_PER_CLEAR: usize = 4;

/// The committed playfield grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero; a degenerate grid is a
    /// precondition violation, not a runtime condition.
    pub fn new(width: u8, height: u8) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y). Returns None if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a piece cell may occupy (x, y).
    ///
    /// Open means: x within the walls, y above the floor, and the committed
    /// cell (if any) empty. Cells above the visible top row (y < 0) are open
    /// so pieces can fall into view.
    pub fn is_open(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= self.width as i8 || y >= self.height as i8 {
            return false;
        }
        if y < 0 {
            return true;
        }
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// The collision predicate: true iff every cell is open.
    pub fn can_place(&self, cells: &[(i8, i8)]) -> bool {
        cells.iter().all(|&(x, y)| self.is_open(x, y))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        let start = y * self.width as usize;
        let end = start + self.width as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return their indices, sorted top to bottom.
    ///
    /// All full rows are removed simultaneously with a two-pointer compaction
    /// scan; remaining rows shift down by the number of full rows below them
    /// and that many empty rows appear at the top. Zero-allocation.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_ROWS_PER_CLEAR> {
        let mut cleared_rows = ArrayVec::new();
        let width = self.width as usize;
        let mut write_y = self.height as usize;

        // Scan from bottom to top, compacting non-full rows downward.
        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Empty rows take the vacated space at the top.
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        // Bottom-to-top scan order; report top to bottom.
        cleared_rows.reverse();
        cleared_rows
    }

    /// Lock a piece's absolute cells onto the board at the given color.
    ///
    /// Cells above the visible top row cannot be committed; locking any such
    /// cell is a top-out. Returns false in that case (the in-bounds cells are
    /// still written, matching what a player would see on the final frame).
    pub fn lock_cells(&mut self, cells: &[(i8, i8)], color: ColorIndex) -> bool {
        let mut topped_out = false;
        for &(x, y) in cells {
            if y < 0 {
                topped_out = true;
            } else {
                self.set(x, y, Some(color));
            }
        }
        !topped_out
    }

    /// Get a reference to the internal cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate the committed rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width as usize)
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_types::{BOARD_HEIGHT, BOARD_WIDTH};

    fn standard() -> Board {
        Board::new(BOARD_WIDTH, BOARD_HEIGHT)
    }

    #[test]
    fn test_index_calculation() {
        let board = standard();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn test_zero_width_panics() {
        let _ = Board::new(0, 20);
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn test_zero_height_panics() {
        let _ = Board::new(10, 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut board = standard();
        assert!(board.set(5, 10, Some(3)));
        assert_eq!(board.get(5, 10), Some(Some(3)));
        assert_eq!(board.cells()[10 * 10 + 5], Some(3));

        assert!(board.set(5, 10, None));
        assert_eq!(board.get(5, 10), Some(None));
    }

    #[test]
    fn test_is_open_above_top() {
        let board = standard();
        // Above the visible grid is open; outside the walls is not.
        assert!(board.is_open(0, -1));
        assert!(board.is_open(9, -4));
        assert!(!board.is_open(-1, -1));
        assert!(!board.is_open(10, -1));
        // The floor is closed.
        assert!(!board.is_open(0, 20));
    }

    #[test]
    fn test_can_place() {
        let mut board = standard();
        let square = [(4, 18), (5, 18), (4, 19), (5, 19)];
        assert!(board.can_place(&square));

        board.set(5, 19, Some(1));
        assert!(!board.can_place(&square));
    }

    #[test]
    fn test_clear_full_rows_order_and_shift() {
        let mut board = standard();

        // Fill rows 5, 10 and 15; markers one row above each.
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, 5, Some(1));
            board.set(x, 10, Some(2));
            board.set(x, 15, Some(3));
        }
        board.set(0, 4, Some(4));
        board.set(0, 9, Some(5));
        board.set(0, 14, Some(6));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[5, 10, 15]);

        // Each marker drops by the number of full rows below it.
        assert_eq!(board.get(0, 7), Some(Some(4)));
        assert_eq!(board.get(0, 11), Some(Some(5)));
        assert_eq!(board.get(0, 15), Some(Some(6)));

        // The top three rows are now empty.
        for y in 0..3 {
            for x in 0..BOARD_WIDTH as i8 {
                assert_eq!(board.get(x, y), Some(None));
            }
        }
    }

    #[test]
    fn test_clear_no_full_rows() {
        let mut board = standard();
        board.set(0, 19, Some(1));
        let cleared = board.clear_full_rows();
        assert!(cleared.is_empty());
        assert_eq!(board.get(0, 19), Some(Some(1)));
    }

    #[test]
    fn test_lock_cells() {
        let mut board = standard();
        let cells = [(3, 5), (4, 5), (3, 6), (4, 6)];
        assert!(board.lock_cells(&cells, 2));
        for &(x, y) in &cells {
            assert_eq!(board.get(x, y), Some(Some(2)));
        }
    }

    #[test]
    fn test_lock_cells_above_top_is_top_out() {
        let mut board = standard();
        let cells = [(4, -1), (4, 0), (4, 1), (4, 2)];
        assert!(!board.lock_cells(&cells, 1));
        // Visible cells are still written.
        assert_eq!(board.get(4, 0), Some(Some(1)));
        assert_eq!(board.get(4, 2), Some(Some(1)));
    }

    #[test]
    fn test_narrow_board() {
        // Width is configurable; a 4-wide well still clears rows.
        let mut board = Board::new(4, 8);
        for x in 0..4 {
            board.set(x, 7, Some(1));
        }
        board.set(0, 6, Some(2));
        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[7]);
        assert_eq!(board.get(0, 7), Some(Some(2)));
    }

    #[test]
    fn test_board_clear() {
        let mut board = standard();
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, 5, Some(1));
        }
        board.clear();
        assert!(board.cells().iter().all(|c| c.is_none()));
    }
}
