// Placement engine.
//
// Assigns a free grid rectangle to one block at a time, in catalog order.
// Two strategies (see `PlacementStrategy`):
//
// **Randomized.** Up to `placement_attempts` trials. Each trial draws a
// size uniformly from the biased pool, then x and y uniformly over the valid
// range. The input block is additionally pulled toward the right half / the
// middle third for x, and away from the first and last rows for y. The
// first trial whose cells are all free wins. If every trial collides, a
// deterministic scan of the full pool (largest area first, rows then
// columns) takes the first free spot.
//
// **Deterministic (lookahead).** The same largest-first scan, but a
// candidate is only accepted if the blocks still to be placed can all fit
// at their smallest sizes afterwards (checked with a smallest-first greedy
// scan on a copy of the grid). The empty grid always admits the greedy
// packing, so this strategy completes every layout.
//
// Draw order within a randomized trial is part of the seed contract: size,
// x, [input: pick, maybe x again], y, [input with >= 2 free rows: pick,
// maybe y again].
//
// See also: `generator.rs` which drives these per attempt, `gap_fill.rs`
// which runs after all blocks are placed.

use crate::catalog::BlockSpec;
use crate::config::InputBiasParams;
use crate::grid::OccupancyGrid;
use crate::prng::ScreenRng;
use crate::size_pool::{SizeOption, SizePools};
use crate::types::{BlockId, COLS, ROWS};

/// First column of the right half of the grid.
const RIGHT_HALF_START: i32 = (COLS + 1) / 2;
/// First column of the middle third of the grid.
const MIDDLE_THIRD_START: i32 = (COLS + 2) / 3;

/// A rectangle chosen for a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Randomized placement with scan fallback. Marks the chosen cells on
/// success; returns `None` (grid untouched) if nothing fits.
pub fn place_randomized(
    spec: &BlockSpec,
    pools: &SizePools,
    grid: &mut OccupancyGrid,
    rng: &mut ScreenRng,
    attempts: u32,
    bias: &InputBiasParams,
) -> Option<Placement> {
    let pool = pools.get(spec.id);
    if !pool.biased.is_empty() {
        for _ in 0..attempts {
            let size = pool.biased[rng.index(pool.biased.len())];
            let candidate = draw_position(spec.id, size, rng, bias);
            if grid.is_free_rect(candidate.x, candidate.y, candidate.w, candidate.h) {
                grid.mark_rect(candidate.x, candidate.y, candidate.w, candidate.h);
                return Some(candidate);
            }
        }
    }
    place_first_fit(&pool.sizes, grid)
}

/// Draw a position for `size`, applying the input block's bias.
fn draw_position(
    id: BlockId,
    size: SizeOption,
    rng: &mut ScreenRng,
    bias: &InputBiasParams,
) -> Placement {
    let max_x = COLS - size.w + 1;
    let max_y = ROWS - size.h + 1;

    let mut x = rng.range_inclusive(1, max_x);
    if id == BlockId::Input {
        let pick = rng.next_f64();
        // Lower bounds are clamped so wide inputs stay inside the grid.
        if pick < bias.right_half_chance {
            x = rng.range_inclusive(RIGHT_HALF_START.min(max_x), max_x);
        } else if pick < bias.right_half_chance + bias.middle_third_chance {
            x = rng.range_inclusive(MIDDLE_THIRD_START.min(max_x), max_x);
        }
    }

    let mut y = rng.range_inclusive(1, max_y);
    if id == BlockId::Input && max_y >= 2 && rng.chance(bias.inner_row_chance) {
        let min_inner = 2.min(max_y);
        let max_inner = min_inner.max(max_y - 1);
        y = rng.range_inclusive(min_inner, max_inner);
    }

    Placement {
        x,
        y,
        w: size.w,
        h: size.h,
    }
}

/// Scan `sizes` in order; for each, scan rows top to bottom and columns left
/// to right, taking the first free rectangle. Marks it on success.
pub fn place_first_fit(sizes: &[SizeOption], grid: &mut OccupancyGrid) -> Option<Placement> {
    let found = first_fit(sizes, grid, |_| true)?;
    grid.mark_rect(found.x, found.y, found.w, found.h);
    Some(found)
}

/// Largest-first scan that only accepts a rectangle if every block in
/// `remaining` can still be placed afterwards. Marks it on success.
pub fn place_with_lookahead(
    id: BlockId,
    remaining: &[BlockId],
    pools: &SizePools,
    grid: &mut OccupancyGrid,
) -> Option<Placement> {
    let found = first_fit(&pools.get(id).sizes, grid, |candidate| {
        let mut trial = grid.clone();
        trial.mark_rect(candidate.x, candidate.y, candidate.w, candidate.h);
        remaining_fit(remaining, pools, &mut trial)
    })?;
    grid.mark_rect(found.x, found.y, found.w, found.h);
    Some(found)
}

/// Whether every block in `remaining` fits when placed smallest-first.
/// Consumes the space on `grid`.
fn remaining_fit(remaining: &[BlockId], pools: &SizePools, grid: &mut OccupancyGrid) -> bool {
    remaining
        .iter()
        .all(|&id| place_first_fit(pools.smallest_first(id), grid).is_some())
}

fn first_fit(
    sizes: &[SizeOption],
    grid: &OccupancyGrid,
    mut accept: impl FnMut(&Placement) -> bool,
) -> Option<Placement> {
    for size in sizes {
        for y in 1..=ROWS - size.h + 1 {
            for x in 1..=COLS - size.w + 1 {
                if !grid.is_free_rect(x, y, size.w, size.h) {
                    continue;
                }
                let candidate = Placement {
                    x,
                    y,
                    w: size.w,
                    h: size.h,
                };
                if accept(&candidate) {
                    return Some(candidate);
                }
            }
        }
    }
    None
}
