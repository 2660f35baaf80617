// Hand-authored layouts.
//
// Eight fixed compositions (`layout-01` .. `layout-08`) mixed into layout
// sequences alongside generated ones. Unlike generated layouts they carry
// explicit `z` stacking values: 1 for panels, 2 for the next button and
// the stack, 3 for the trash button.
//
// `layout-08` deliberately breaks the catalog: its headline is a 3x5
// column. `ScreenLayout::validate()` reports that single size violation.

use crate::catalog::spec_for;
use crate::types::{BlockContent, BlockId, GridBlock, ScreenLayout};

const PANEL_Z: u8 = 1;
const FLOAT_Z: u8 = 2;
const TRASH_Z: u8 = 3;

/// Number of hand-authored layouts.
pub const PREDEFINED_COUNT: usize = 8;

fn z_for(id: BlockId) -> u8 {
    match id {
        BlockId::Next | BlockId::Stack => FLOAT_Z,
        BlockId::Trash => TRASH_Z,
        BlockId::Headline | BlockId::Input | BlockId::Users | BlockId::Timer => PANEL_Z,
    }
}

fn placed(id: BlockId, x: i32, y: i32, w: i32, h: i32) -> GridBlock {
    GridBlock {
        id,
        kind: spec_for(id).kind,
        x,
        y,
        w,
        h,
        z: Some(z_for(id)),
        content: None,
    }
}

fn text(id: BlockId, x: i32, y: i32, w: i32, h: i32, content: &str) -> GridBlock {
    GridBlock {
        content: Some(BlockContent::Text(content.to_string())),
        ..placed(id, x, y, w, h)
    }
}

fn users(x: i32, y: i32, w: i32, h: i32, left: i32) -> GridBlock {
    text(
        BlockId::Users,
        x,
        y,
        w,
        h,
        &crate::content::users_left_text(left),
    )
}

fn stack(x: i32, y: i32, count: u32) -> GridBlock {
    GridBlock {
        content: Some(BlockContent::Count(count)),
        ..placed(BlockId::Stack, x, y, 2, 1)
    }
}

fn layout(number: usize, blocks: Vec<GridBlock>) -> ScreenLayout {
    ScreenLayout {
        id: format!("layout-{number:02}"),
        blocks,
    }
}

/// All hand-authored layouts, in order.
pub fn predefined_layouts() -> Vec<ScreenLayout> {
    use BlockId::{Headline, Input, Next, Timer, Trash};
    vec![
        layout(
            1,
            vec![
                text(Headline, 1, 1, 7, 2, "What decisions do you delay the longest?"),
                placed(Next, 9, 1, 4, 1),
                users(8, 2, 5, 3, 15),
                text(Input, 1, 3, 7, 3, "\"Career stuff.\""),
                stack(8, 5, 61),
                placed(Trash, 8, 6, 2, 1),
                placed(Timer, 10, 5, 3, 2),
            ],
        ),
        layout(
            2,
            vec![
                users(1, 1, 6, 3, 15),
                text(Input, 7, 1, 6, 2, "\"Sleep :)\""),
                text(
                    Headline,
                    1,
                    4,
                    7,
                    2,
                    "What would you still do if no one could see the result?",
                ),
                placed(Timer, 8, 4, 5, 2),
                stack(9, 6, 43),
                placed(Trash, 11, 6, 2, 1),
                placed(Next, 1, 6, 6, 1),
            ],
        ),
        layout(
            3,
            vec![
                users(1, 1, 6, 3, 5),
                text(
                    Input,
                    7,
                    1,
                    6,
                    3,
                    "\"Watching bad reality TV and overanalyzing it.\"",
                ),
                placed(Next, 1, 4, 6, 1),
                stack(7, 4, 11),
                placed(Trash, 9, 4, 3, 1),
                text(Headline, 1, 5, 7, 2, "What do you enjoy that you rarely talk about?"),
                placed(Timer, 9, 5, 4, 2),
            ],
        ),
        layout(
            4,
            vec![
                placed(Timer, 1, 1, 4, 2),
                text(Headline, 6, 1, 7, 2, "What do you blame on lack of time?"),
                placed(Trash, 1, 3, 2, 1),
                stack(5, 3, 21),
                placed(Next, 7, 3, 4, 1),
                users(1, 4, 6, 3, 16),
                text(Input, 7, 4, 6, 3, "\"Calling my parents.\""),
            ],
        ),
        layout(
            5,
            vec![
                text(Headline, 1, 1, 7, 2, "What part of yourself do others misunderstand?"),
                placed(Next, 9, 1, 4, 1),
                users(9, 2, 4, 2, 9),
                placed(Trash, 1, 3, 2, 1),
                stack(3, 3, 43),
                placed(Timer, 1, 4, 4, 3),
                text(Input, 5, 4, 8, 3, "\"Idk man\""),
            ],
        ),
        layout(
            6,
            vec![
                placed(Trash, 1, 1, 2, 1),
                stack(3, 1, 12),
                text(Headline, 1, 2, 7, 3, "Who are you when nothing is being measured?"),
                users(8, 1, 5, 3, 15),
                text(
                    Input,
                    8,
                    4,
                    5,
                    2,
                    "\"Someone who starts things but doesn't finish.\"",
                ),
                placed(Timer, 1, 5, 5, 2),
                placed(Next, 9, 6, 3, 1),
            ],
        ),
        layout(
            7,
            vec![
                text(Headline, 1, 1, 7, 2, "When was the last time you lost track of time?"),
                users(9, 1, 4, 3, 3),
                text(
                    Input,
                    1,
                    3,
                    8,
                    3,
                    "\"Yesterday at 3am scrolling for no reason.\"",
                ),
                stack(9, 4, 21),
                placed(Trash, 1, 6, 2, 1),
                placed(Next, 3, 6, 6, 1),
                placed(Timer, 9, 5, 4, 2),
            ],
        ),
        layout(
            8,
            vec![
                placed(Next, 1, 1, 5, 1),
                users(1, 2, 5, 3, 8),
                placed(Timer, 1, 5, 3, 2),
                placed(Trash, 4, 5, 2, 1),
                stack(4, 6, 4),
                text(Input, 6, 1, 4, 6, "\"How easily they seem to belong.\""),
                text(Headline, 10, 1, 3, 5, "What do you envy in people close to you?"),
            ],
        ),
    ]
}
