// screen_grid_layout — seeded layout generator for a 12x6 screen grid.
//
// Given a 32-bit seed, produces a `ScreenLayout`: seven rectangular blocks
// (headline, input panel, users-left panel, timer, next button, trash
// button, trashed-pages stack) tiled on a 12-column by 6-row grid without
// overlap, each within its catalog size limits. Also builds long sequences
// of layouts mixing generated and hand-authored screens.
//
// Module overview:
// - `types.rs`:      Grid constants, BlockId/BlockKind, GridBlock, ScreenLayout, validation.
// - `catalog.rs`:    Static per-block size limits (BlockSpec).
// - `size_pool.rs`:  Legal sizes per block, largest first, plus biased subsets.
// - `grid.rs`:       OccupancyGrid, the per-attempt cell occupancy bitmap.
// - `placement.rs`:  Randomized and lookahead placement of one block.
// - `gap_fill.rs`:   Grows blocks into one-cell gaps after placement.
// - `content.rs`:    Headline/input text pools and random counts.
// - `generator.rs`:  Attempt builder and the retry-tier ladder.
// - `bias.rs`:       Resample-and-filter variants steering the input panel.
// - `predefined.rs`: The eight hand-authored layouts.
// - `sequence.rs`:   SequenceBuilder and the all-different adjacency check.
// - `ascii.rs`:      Plain-text preview of a layout.
// - `survey.rs`:     Parallel seed survey of degraded-layout rates.
// - `config.rs`:     LayoutConfig, every tunable number, loadable from JSON.
// - `prng`:          Re-exported from `screen_grid_prng` (Mulberry32-style ScreenRng).
//
// Generation never fails. When every retry tier is exhausted the result is a
// layout with fewer than `REQUIRED_BLOCK_COUNT` blocks (in practice none),
// and consumers look blocks up with `ScreenLayout::block()`.
//
// **Critical constraint: determinism.** A layout is a pure function of
// `(seed, config)`. All randomness comes from `ScreenRng`, every seed
// derivation uses wrapping `u32` arithmetic, and no state is shared between
// calls. Use `BTreeMap` rather than `HashMap` where iteration order matters.

pub mod ascii;
pub mod bias;
pub mod catalog;
pub mod config;
pub mod content;
pub mod gap_fill;
pub mod generator;
pub mod grid;
pub mod placement;
pub mod predefined;
pub use screen_grid_prng as prng;
pub mod sequence;
pub mod size_pool;
pub mod survey;
pub mod types;

pub use bias::{InputBias, is_input_away_from_edges};
pub use config::LayoutConfig;
pub use generator::{GenerationOutcome, generate_layout_traced};
pub use predefined::predefined_layouts;
pub use sequence::{SequenceBuilder, build_sequence, is_all_different};
pub use types::{
    BlockContent, BlockId, BlockKind, COLS, GridBlock, REQUIRED_BLOCK_COUNT, ROWS, ScreenLayout,
};

/// Generate the layout for `seed` with the default configuration.
pub fn generate_layout(seed: u32) -> ScreenLayout {
    generator::generate_layout_with_config(seed, &LayoutConfig::default())
}

/// Generate a layout whose input panel leans toward `bias`, falling back to
/// `generate_layout(seed)` when no candidate qualifies.
pub fn generate_layout_with_bias(seed: u32, bias: InputBias) -> ScreenLayout {
    bias::generate_layout_with_bias_config(seed, bias, &LayoutConfig::default())
}

/// Generate a layout whose input panel stays clear of the grid edges,
/// falling back to `generate_layout(seed)` when no candidate qualifies.
pub fn generate_layout_with_input_away_from_edges(seed: u32) -> ScreenLayout {
    bias::generate_layout_with_input_away_from_edges_config(seed, &LayoutConfig::default())
}
