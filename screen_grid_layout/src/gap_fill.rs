// Gap-filler.
//
// After every block is placed, grows blocks into adjacent empty strips that
// are exactly one cell wide, so the grid reads as full without swallowing
// open space that could have held another block. Runs up to
// `gap_fill_passes` passes over all blocks (stopping early once a pass
// changes nothing); within a pass each block tries right, left, down, up in
// that order. The trashed-pages stack never grows.
//
// A direction is taken only if:
// - the grown dimension stays within the block's catalog max, and a
//   non-button block is at least 3 wide before growing taller;
// - the adjacent row/column strip along the block's edge is entirely free;
// - the strip beyond that one is occupied somewhere along the edge, or
//   lies outside the grid.
//
// Blocks are edited in place inside the attempt's arena; nothing is visible
// outside the attempt until the layout is returned.

use crate::catalog::{BlockSpec, spec_for};
use crate::grid::OccupancyGrid;
use crate::types::{BlockId, COLS, GridBlock, ROWS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// Order in which each block tries to grow.
    pub const GROWTH_ORDER: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    fn is_horizontal(self) -> bool {
        matches!(self, Direction::Right | Direction::Left)
    }
}

/// Grow blocks into single-cell gaps. `grid` must reflect `blocks` and is
/// kept in sync. Returns the number of successful growth steps.
pub fn fill_single_cell_gaps(
    blocks: &mut [GridBlock],
    grid: &mut OccupancyGrid,
    passes: u32,
) -> usize {
    let mut grown = 0;
    for _ in 0..passes {
        let mut changed = false;
        for block in blocks.iter_mut() {
            if block.id == BlockId::Stack {
                continue;
            }
            let spec = spec_for(block.id);
            for dir in Direction::GROWTH_ORDER {
                if expand_block(block, spec, dir, grid) {
                    grown += 1;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    grown
}

/// Whether the catalog allows `block` to grow one cell in `dir`.
fn can_grow(block: &GridBlock, spec: &BlockSpec, dir: Direction) -> bool {
    if dir.is_horizontal() {
        return block.w < spec.max_w;
    }
    block.h < spec.max_h && spec.allows_multi_row(block.w)
}

/// Cells along the strip `offset` cells beyond the block's edge in `dir`.
/// `offset = 1` is the adjacent strip.
fn strip(block: &GridBlock, dir: Direction, offset: i32) -> Vec<(i32, i32)> {
    match dir {
        Direction::Right => (block.y..=block.bottom())
            .map(|row| (block.right() + offset, row))
            .collect(),
        Direction::Left => (block.y..=block.bottom())
            .map(|row| (block.x - offset, row))
            .collect(),
        Direction::Down => (block.x..=block.right())
            .map(|col| (col, block.bottom() + offset))
            .collect(),
        Direction::Up => (block.x..=block.right())
            .map(|col| (col, block.y - offset))
            .collect(),
    }
}

/// Whether the adjacent strip is a gap exactly one cell wide.
fn is_single_cell_gap(grid: &OccupancyGrid, block: &GridBlock, dir: Direction) -> bool {
    let gap = strip(block, dir, 1);
    let gap_in_grid = gap.iter().all(|&(c, r)| OccupancyGrid::in_bounds(c, r));
    if !gap_in_grid || gap.iter().any(|&(c, r)| grid.is_occupied(c, r)) {
        return false;
    }
    let beyond = strip(block, dir, 2);
    let beyond_outside = match dir {
        Direction::Right => block.right() + 2 > COLS,
        Direction::Left => block.x - 2 < 1,
        Direction::Down => block.bottom() + 2 > ROWS,
        Direction::Up => block.y - 2 < 1,
    };
    beyond_outside || beyond.iter().any(|&(c, r)| grid.is_occupied(c, r))
}

/// Try to grow `block` one cell in `dir`, marking the new cells.
fn expand_block(
    block: &mut GridBlock,
    spec: &BlockSpec,
    dir: Direction,
    grid: &mut OccupancyGrid,
) -> bool {
    if !can_grow(block, spec, dir) || !is_single_cell_gap(grid, block, dir) {
        return false;
    }
    for (c, r) in strip(block, dir, 1) {
        grid.mark(c, r);
    }
    match dir {
        Direction::Right => block.w += 1,
        Direction::Left => {
            block.x -= 1;
            block.w += 1;
        }
        Direction::Down => block.h += 1,
        Direction::Up => {
            block.y -= 1;
            block.h += 1;
        }
    }
    true
}
