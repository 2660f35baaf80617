// Core types shared across the layout generator.
//
// Defines the grid dimensions, the seven block identifiers and their semantic
// kinds, the positioned `GridBlock`, and the `ScreenLayout` handed to
// rendering. All types derive `Serialize` and `Deserialize`; the JSON shape
// matches what the rendering and persistence layers consume
// (`{"id": "input", "kind": "input_panel", "x": 3, ...}`).
//
// Coordinates are 1-based: `x` is the column of the block's left edge,
// `y` the row of its top edge. A block covers columns `x..=x+w-1` and rows
// `y..=y+h-1`.
//
// See also: `catalog.rs` for per-block size limits, `generator.rs` which
// produces `ScreenLayout` values, `ascii.rs` for a text preview.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Grid dimensions
// ---------------------------------------------------------------------------

/// Number of columns in the logical grid.
pub const COLS: i32 = 12;

/// Number of rows in the logical grid.
pub const ROWS: i32 = 6;

/// Number of blocks in a complete layout (one per `BlockId`).
pub const REQUIRED_BLOCK_COUNT: usize = BlockId::ALL.len();

// ---------------------------------------------------------------------------
// Block identity
// ---------------------------------------------------------------------------

/// The seven fixed block identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockId {
    Headline,
    Input,
    Users,
    Timer,
    Next,
    Trash,
    Stack,
}

impl BlockId {
    /// All identifiers in placement order. Headline and input come first
    /// because they are the hardest to fit.
    pub const ALL: [BlockId; 7] = [
        BlockId::Headline,
        BlockId::Input,
        BlockId::Users,
        BlockId::Timer,
        BlockId::Next,
        BlockId::Trash,
        BlockId::Stack,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlockId::Headline => "headline",
            BlockId::Input => "input",
            BlockId::Users => "users",
            BlockId::Timer => "timer",
            BlockId::Next => "next",
            BlockId::Trash => "trash",
            BlockId::Stack => "stack",
        }
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic tag telling the renderer what to draw inside a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Headline,
    InputPanel,
    UsersLeftPanel,
    TimerPanel,
    ButtonNext,
    ButtonTrash,
    TrashedPagesStack,
}

impl BlockKind {
    /// Buttons are single-row blocks that may be narrower than 3 columns.
    pub fn is_button(self) -> bool {
        matches!(self, BlockKind::ButtonNext | BlockKind::ButtonTrash)
    }
}

/// Payload shown inside a block: a line of text or a count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockContent {
    Text(String),
    Count(u32),
}

impl BlockContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            BlockContent::Text(s) => Some(s),
            BlockContent::Count(_) => None,
        }
    }
}

impl fmt::Display for BlockContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockContent::Text(s) => f.write_str(s),
            BlockContent::Count(n) => write!(f, "{n}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Positioned blocks
// ---------------------------------------------------------------------------

/// One positioned rectangular block on the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBlock {
    pub id: BlockId,
    pub kind: BlockKind,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    /// Stacking order. Generated layouts leave this unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<BlockContent>,
}

impl GridBlock {
    /// Rightmost occupied column (inclusive).
    pub fn right(&self) -> i32 {
        self.x + self.w - 1
    }

    /// Bottom occupied row (inclusive).
    pub fn bottom(&self) -> i32 {
        self.y + self.h - 1
    }

    pub fn area(&self) -> i32 {
        self.w * self.h
    }

    /// Whether the block lies entirely inside the `COLS` x `ROWS` grid.
    pub fn fits_grid(&self) -> bool {
        self.w >= 1
            && self.h >= 1
            && self.x >= 1
            && self.y >= 1
            && self.right() <= COLS
            && self.bottom() <= ROWS
    }

    /// Whether the two blocks share at least one cell.
    pub fn overlaps(&self, other: &GridBlock) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }

    /// Whether `x`, `y`, `w` and `h` all match.
    pub fn same_geometry(&self, other: &GridBlock) -> bool {
        self.x == other.x && self.y == other.y && self.w == other.w && self.h == other.h
    }

    /// Whether the cell at (`col`, `row`) lies inside this block.
    pub fn contains(&self, col: i32, row: i32) -> bool {
        (self.x..=self.right()).contains(&col) && (self.y..=self.bottom()).contains(&row)
    }
}

// ---------------------------------------------------------------------------
// Layouts
// ---------------------------------------------------------------------------

/// A complete (7 blocks) or degraded (fewer) set of placed blocks for one
/// screen. Block order carries no meaning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenLayout {
    pub id: String,
    pub blocks: Vec<GridBlock>,
}

impl ScreenLayout {
    /// Look up a block by identifier. Degraded layouts may lack any kind,
    /// so consumers must go through this rather than indexing.
    pub fn block(&self, id: BlockId) -> Option<&GridBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// True if every catalog block is present.
    pub fn is_complete(&self) -> bool {
        self.blocks.len() == REQUIRED_BLOCK_COUNT
            && BlockId::ALL.iter().all(|&id| self.block(id).is_some())
    }

    /// Bottom-most occupied row, or 0 for an empty layout.
    pub fn max_row(&self) -> i32 {
        self.blocks.iter().map(GridBlock::bottom).max().unwrap_or(0)
    }

    /// Check every layout invariant and list the violations found.
    ///
    /// An empty result means the layout is valid. Size limits come from the
    /// block catalog.
    pub fn validate(&self) -> Vec<LayoutViolation> {
        let mut violations = Vec::new();
        for (i, block) in self.blocks.iter().enumerate() {
            if !block.fits_grid() {
                violations.push(LayoutViolation::OutOfGrid(block.id));
            }
            let spec = crate::catalog::spec_for(block.id);
            if !spec.allows_size(block.w, block.h) {
                violations.push(LayoutViolation::SizeOutOfRange {
                    id: block.id,
                    w: block.w,
                    h: block.h,
                });
            }
            if block.area() < spec.min_area {
                violations.push(LayoutViolation::AreaTooSmall(block.id));
            }
            for other in &self.blocks[i + 1..] {
                if other.id == block.id {
                    violations.push(LayoutViolation::DuplicateId(block.id));
                } else if block.overlaps(other) {
                    violations.push(LayoutViolation::Overlap(block.id, other.id));
                }
            }
        }
        violations
    }
}

/// A broken layout invariant, reported by `ScreenLayout::validate()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutViolation {
    OutOfGrid(BlockId),
    SizeOutOfRange { id: BlockId, w: i32, h: i32 },
    AreaTooSmall(BlockId),
    DuplicateId(BlockId),
    Overlap(BlockId, BlockId),
}

impl fmt::Display for LayoutViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutViolation::OutOfGrid(id) => write!(f, "{id} extends past the grid"),
            LayoutViolation::SizeOutOfRange { id, w, h } => {
                write!(f, "{id} has size {w}x{h} outside its catalog range")
            }
            LayoutViolation::AreaTooSmall(id) => write!(f, "{id} is below its minimum area"),
            LayoutViolation::DuplicateId(id) => write!(f, "{id} appears more than once"),
            LayoutViolation::Overlap(a, b) => write!(f, "{a} overlaps {b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(id: BlockId, x: i32, y: i32, w: i32, h: i32) -> GridBlock {
        GridBlock {
            id,
            kind: crate::catalog::spec_for(id).kind,
            x,
            y,
            w,
            h,
            z: None,
            content: None,
        }
    }

    #[test]
    fn block_edges_are_inclusive() {
        let b = block(BlockId::Timer, 10, 5, 3, 2);
        assert_eq!(b.right(), 12);
        assert_eq!(b.bottom(), 6);
        assert!(b.fits_grid());
        assert!(!block(BlockId::Timer, 11, 5, 3, 2).fits_grid());
    }

    #[test]
    fn overlap_detection() {
        let a = block(BlockId::Users, 1, 1, 3, 2);
        assert!(a.overlaps(&block(BlockId::Timer, 3, 2, 3, 2)));
        // Touching edges do not overlap.
        assert!(!a.overlaps(&block(BlockId::Timer, 4, 1, 3, 2)));
        assert!(!a.overlaps(&block(BlockId::Timer, 1, 3, 3, 2)));
    }

    #[test]
    fn missing_kind_lookup_is_none() {
        let layout = ScreenLayout {
            id: "partial".into(),
            blocks: vec![block(BlockId::Headline, 1, 1, 6, 2)],
        };
        assert!(layout.block(BlockId::Headline).is_some());
        assert!(layout.block(BlockId::Input).is_none());
        assert!(!layout.is_complete());
        assert_eq!(layout.max_row(), 2);
    }

    #[test]
    fn empty_layout_max_row_is_zero() {
        let layout = ScreenLayout {
            id: "empty".into(),
            blocks: Vec::new(),
        };
        assert_eq!(layout.max_row(), 0);
        assert!(layout.validate().is_empty());
    }

    #[test]
    fn validate_reports_overlap_and_size() {
        let layout = ScreenLayout {
            id: "bad".into(),
            blocks: vec![
                block(BlockId::Headline, 1, 1, 6, 2),
                block(BlockId::Input, 5, 2, 3, 2),
                block(BlockId::Stack, 10, 1, 1, 1),
            ],
        };
        let v = layout.validate();
        assert!(v.contains(&LayoutViolation::Overlap(BlockId::Headline, BlockId::Input)));
        assert!(v.contains(&LayoutViolation::SizeOutOfRange {
            id: BlockId::Stack,
            w: 1,
            h: 1
        }));
        assert!(v.contains(&LayoutViolation::AreaTooSmall(BlockId::Stack)));
    }

    #[test]
    fn json_shape_matches_renderer_contract() {
        let mut b = block(BlockId::Stack, 11, 1, 2, 1);
        b.content = Some(BlockContent::Count(39));
        let json = serde_json::to_value(&b).unwrap();
        assert_eq!(json["id"], "stack");
        assert_eq!(json["kind"], "trashed_pages_stack");
        assert_eq!(json["content"], 39);
        assert!(json.get("z").is_none());

        let text: GridBlock = serde_json::from_str(
            r#"{"id":"input","kind":"input_panel","x":1,"y":3,"w":7,"h":3,"z":1,"content":"\"Career stuff.\""}"#,
        )
        .unwrap();
        assert_eq!(text.z, Some(1));
        assert_eq!(
            text.content.as_ref().and_then(BlockContent::as_text),
            Some("\"Career stuff.\"")
        );
    }
}
