// Text preview of a layout.
//
// Renders the 12x6 grid as six lines of twelve characters, one letter per
// block (`H` headline, `I` input, `U` users, `T` timer, `N` next, `X`
// trash, `S` stack) and `.` for empty cells. Missing block kinds simply
// leave their cells empty, so degraded layouts render too. Where blocks
// overlap (only possible in hand-edited layouts) the later block wins.

use crate::types::{BlockId, COLS, ROWS, ScreenLayout};

/// Character drawn for empty cells.
pub const EMPTY_CELL: char = '.';

/// Letter drawn for each block.
pub fn block_letter(id: BlockId) -> char {
    match id {
        BlockId::Headline => 'H',
        BlockId::Input => 'I',
        BlockId::Users => 'U',
        BlockId::Timer => 'T',
        BlockId::Next => 'N',
        BlockId::Trash => 'X',
        BlockId::Stack => 'S',
    }
}

/// Render `layout` as `ROWS` newline-terminated lines.
pub fn render(layout: &ScreenLayout) -> String {
    let mut cells = [[EMPTY_CELL; COLS as usize]; ROWS as usize];
    for block in &layout.blocks {
        let letter = block_letter(block.id);
        for row in block.y.max(1)..=block.bottom().min(ROWS) {
            for col in block.x.max(1)..=block.right().min(COLS) {
                cells[(row - 1) as usize][(col - 1) as usize] = letter;
            }
        }
    }
    let mut out = String::with_capacity(((COLS + 1) * ROWS) as usize);
    for row in &cells {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}
