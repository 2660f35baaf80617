// Occupancy grid for one generation attempt.
//
// A dense `ROWS` x `COLS` boolean matrix addressed with the same 1-based
// (column, row) coordinates as `GridBlock`. Out-of-bounds reads return
// `false` (nothing is there); rectangles that leave the grid are never free,
// so a placement can never extend past the edge.
//
// Each attempt allocates its own grid; it is mutated only by placement and
// gap-filling and dropped when the attempt finishes.

use crate::types::{COLS, GridBlock, ROWS};

const COLS_USIZE: usize = COLS as usize;
const ROWS_USIZE: usize = ROWS as usize;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OccupancyGrid {
    cells: [[bool; COLS_USIZE]; ROWS_USIZE],
}

impl OccupancyGrid {
    /// An empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// A grid with every cell covered by `blocks` marked.
    pub fn from_blocks(blocks: &[GridBlock]) -> Self {
        let mut grid = Self::new();
        for b in blocks {
            grid.mark_rect(b.x, b.y, b.w, b.h);
        }
        grid
    }

    pub fn in_bounds(col: i32, row: i32) -> bool {
        (1..=COLS).contains(&col) && (1..=ROWS).contains(&row)
    }

    /// Whether a cell is taken. `false` outside the grid.
    pub fn is_occupied(&self, col: i32, row: i32) -> bool {
        Self::in_bounds(col, row) && self.cells[(row - 1) as usize][(col - 1) as usize]
    }

    /// Mark a single cell. No-op outside the grid.
    pub fn mark(&mut self, col: i32, row: i32) {
        if Self::in_bounds(col, row) {
            self.cells[(row - 1) as usize][(col - 1) as usize] = true;
        }
    }

    /// Whether every cell of the rectangle is inside the grid and free.
    pub fn is_free_rect(&self, x: i32, y: i32, w: i32, h: i32) -> bool {
        if w < 1 || h < 1 || !Self::in_bounds(x, y) || !Self::in_bounds(x + w - 1, y + h - 1) {
            return false;
        }
        (y..y + h).all(|row| (x..x + w).all(|col| !self.is_occupied(col, row)))
    }

    pub fn mark_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        for row in y..y + h {
            for col in x..x + w {
                self.mark(col, row);
            }
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c).count()
    }
}
