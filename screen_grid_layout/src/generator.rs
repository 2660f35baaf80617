// Layout generator (top-level orchestration).
//
// `generate_layout_traced()` walks the configured retry ladder: for each
// `RetryTier`, up to `attempts` full attempts with seeds
// `seed + n * seed_stride` (wrapping). An attempt seeds its own `ScreenRng`,
// draws block content, places all seven blocks in catalog order with the
// tier's strategy, and runs the gap-filler. Any block that cannot be placed
// abandons the attempt. The first complete attempt wins.
//
// If every tier is exhausted the result is a layout with no blocks. That is
// a valid, degraded value (callers look blocks up per kind), not an error.
//
// Each attempt works inside a `LayoutBuilder`: an arena of blocks plus the
// occupancy grid, both exclusively owned. The gap-filler edits blocks in
// place there; `finish()` hands back the immutable `ScreenLayout`.
//
// See also: `placement.rs`, `gap_fill.rs`, `content.rs`, `config.rs`,
// `bias.rs` which resamples this generator.

use crate::catalog::spec_for;
use crate::config::{LayoutConfig, PlacementStrategy};
use crate::content::BlockContents;
use crate::gap_fill::fill_single_cell_gaps;
use crate::grid::OccupancyGrid;
use crate::placement::{Placement, place_randomized, place_with_lookahead};
use crate::prng::ScreenRng;
use crate::size_pool::SizePools;
use crate::types::{BlockId, GridBlock, REQUIRED_BLOCK_COUNT, ScreenLayout};
use tracing::{debug, trace, warn};

/// A generated layout plus where in the retry ladder it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub layout: ScreenLayout,
    /// Index into `LayoutConfig::retry_tiers` of the winning tier, `None`
    /// when every tier failed.
    pub tier: Option<usize>,
    /// Attempt index within the winning tier.
    pub attempt: Option<u32>,
}

impl GenerationOutcome {
    pub fn is_degraded(&self) -> bool {
        self.tier.is_none()
    }
}

/// Identifier given to generated layouts.
pub fn layout_id(seed: u32) -> String {
    format!("generated-{seed}")
}

/// Generate a layout, reporting which tier and attempt produced it.
pub fn generate_layout_traced(seed: u32, config: &LayoutConfig) -> GenerationOutcome {
    let pools = SizePools::for_catalog();
    for (tier_index, tier) in config.retry_tiers.iter().enumerate() {
        debug!(seed, tier = tier_index, strategy = ?tier.strategy, "entering retry tier");
        for attempt in 0..tier.attempts {
            let attempt_seed = seed.wrapping_add(attempt.wrapping_mul(tier.seed_stride));
            if let Some(blocks) = try_generate(attempt_seed, tier.strategy, config, &pools) {
                return GenerationOutcome {
                    layout: ScreenLayout {
                        id: layout_id(seed),
                        blocks,
                    },
                    tier: Some(tier_index),
                    attempt: Some(attempt),
                };
            }
            trace!(seed, attempt_seed, tier = tier_index, attempt, "attempt failed");
        }
    }
    warn!(seed, "every retry tier failed; returning an empty layout");
    GenerationOutcome {
        layout: ScreenLayout {
            id: layout_id(seed),
            blocks: Vec::new(),
        },
        tier: None,
        attempt: None,
    }
}

/// Generate a layout with an explicit config.
pub fn generate_layout_with_config(seed: u32, config: &LayoutConfig) -> ScreenLayout {
    generate_layout_traced(seed, config).layout
}

/// One full placement + gap-fill attempt. `None` if any block fails to fit.
pub fn try_generate(
    attempt_seed: u32,
    strategy: PlacementStrategy,
    config: &LayoutConfig,
    pools: &SizePools,
) -> Option<Vec<GridBlock>> {
    let mut rng = ScreenRng::new(attempt_seed);
    let contents = BlockContents::draw(&mut rng);
    let mut builder = LayoutBuilder::new(contents);

    for (index, &id) in BlockId::ALL.iter().enumerate() {
        let placement = match strategy {
            PlacementStrategy::Randomized => place_randomized(
                spec_for(id),
                pools,
                &mut builder.grid,
                &mut rng,
                config.placement_attempts,
                &config.input_bias,
            ),
            PlacementStrategy::Deterministic => {
                place_with_lookahead(id, &BlockId::ALL[index + 1..], pools, &mut builder.grid)
            }
        };
        match placement {
            Some(p) => builder.push(id, p),
            None => {
                trace!(attempt_seed, block = %id, "block did not fit");
                return None;
            }
        }
    }

    builder.fill_gaps(config.gap_fill_passes);
    Some(builder.finish())
}

/// Mutable arena for a single attempt.
struct LayoutBuilder {
    blocks: Vec<GridBlock>,
    grid: OccupancyGrid,
    contents: BlockContents,
}

impl LayoutBuilder {
    fn new(contents: BlockContents) -> Self {
        Self {
            blocks: Vec::with_capacity(REQUIRED_BLOCK_COUNT),
            grid: OccupancyGrid::new(),
            contents,
        }
    }

    /// Record a placed block. The grid cells are already marked by the
    /// placement engine.
    fn push(&mut self, id: BlockId, p: Placement) {
        self.blocks.push(GridBlock {
            id,
            kind: spec_for(id).kind,
            x: p.x,
            y: p.y,
            w: p.w,
            h: p.h,
            z: None,
            content: self.contents.for_block(id),
        });
    }

    fn fill_gaps(&mut self, passes: u32) {
        fill_single_cell_gaps(&mut self.blocks, &mut self.grid, passes);
    }

    fn finish(self) -> Vec<GridBlock> {
        self.blocks
    }
}
