// Static block catalog.
//
// One `BlockSpec` per `BlockId`: semantic kind, width/height ranges, and the
// minimum area. The catalog is immutable and shared by the size pool
// builder, the placement engine, the gap-filler and layout validation.
//
// See also: `size_pool.rs` which enumerates the legal sizes per spec,
// `types.rs` for `BlockId`/`BlockKind`.

use crate::types::{BlockId, BlockKind};

/// Size limits for one block type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockSpec {
    pub id: BlockId,
    pub kind: BlockKind,
    pub min_w: i32,
    pub min_h: i32,
    pub max_w: i32,
    pub max_h: i32,
    pub min_area: i32,
}

impl BlockSpec {
    /// Whether `w` x `h` lies within the width and height ranges.
    /// Does not check `min_area`.
    pub fn allows_size(&self, w: i32, h: i32) -> bool {
        (self.min_w..=self.max_w).contains(&w) && (self.min_h..=self.max_h).contains(&h)
    }

    /// Whether a block of width `w` may be taller than one row. Non-button
    /// blocks must be at least 3 columns wide to span several rows.
    pub fn allows_multi_row(&self, w: i32) -> bool {
        w >= 3 || self.kind.is_button()
    }
}

/// The catalog, in placement order.
pub const BLOCK_SPECS: [BlockSpec; 7] = [
    BlockSpec {
        id: BlockId::Headline,
        kind: BlockKind::Headline,
        min_w: 5,
        min_h: 2,
        max_w: 9,
        max_h: 4,
        min_area: 12,
    },
    BlockSpec {
        id: BlockId::Input,
        kind: BlockKind::InputPanel,
        min_w: 3,
        min_h: 2,
        max_w: 10,
        max_h: 6,
        min_area: 6,
    },
    BlockSpec {
        id: BlockId::Users,
        kind: BlockKind::UsersLeftPanel,
        min_w: 3,
        min_h: 2,
        max_w: 6,
        max_h: 3,
        min_area: 6,
    },
    BlockSpec {
        id: BlockId::Timer,
        kind: BlockKind::TimerPanel,
        min_w: 3,
        min_h: 2,
        max_w: 5,
        max_h: 3,
        min_area: 6,
    },
    BlockSpec {
        id: BlockId::Next,
        kind: BlockKind::ButtonNext,
        min_w: 3,
        min_h: 1,
        max_w: 6,
        max_h: 1,
        min_area: 3,
    },
    BlockSpec {
        id: BlockId::Trash,
        kind: BlockKind::ButtonTrash,
        min_w: 2,
        min_h: 1,
        max_w: 4,
        max_h: 1,
        min_area: 2,
    },
    BlockSpec {
        id: BlockId::Stack,
        kind: BlockKind::TrashedPagesStack,
        min_w: 2,
        min_h: 1,
        max_w: 3,
        max_h: 2,
        min_area: 2,
    },
];

/// Catalog entry for a block identifier.
pub fn spec_for(id: BlockId) -> &'static BlockSpec {
    // BLOCK_SPECS is indexed in BlockId::ALL order.
    &BLOCK_SPECS[id as usize]
}
