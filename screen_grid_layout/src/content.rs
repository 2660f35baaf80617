// Randomized block content.
//
// Headline and input text are picked from fixed candidate pools; the users
// panel gets an "N users already left" line and the trashed-pages stack a
// count. Draws come from the attempt's own `ScreenRng`, before any
// placement draws, in the order headline, input, users, stack. Content is
// therefore a function of the attempt seed just like geometry.

use crate::prng::ScreenRng;
use crate::types::{BlockContent, BlockId};

/// Candidate headline questions.
pub const HEADLINE_TEXTS: [&str; 8] = [
    "What decisions do you delay the longest?",
    "What would you still do if no one could see the result?",
    "What do you enjoy that you rarely talk about?",
    "What do you blame on lack of time?",
    "What part of yourself do others misunderstand?",
    "When was the last time you lost track of time?",
    "What do you envy in people close to you?",
    "Who are you when nothing is being measured?",
];

/// Candidate quoted answers shown in the input panel.
pub const INPUT_TEXTS: [&str; 8] = [
    "\"Career stuff.\"",
    "\"Sleep :)\"",
    "\"Watching bad reality TV and overanalyzing it.\"",
    "\"Idk man\"",
    "\"Yesterday at 3am scrolling for no reason.\"",
    "\"Calling my parents.\"",
    "\"Someone who starts things but doesn't finish.\"",
    "\"How easily they seem to belong.\"",
];

/// Inclusive range for the number of users who "already left".
pub const USERS_LEFT_RANGE: (i32, i32) = (3, 18);

/// Inclusive range for the trashed-pages count.
pub const STACK_COUNT_RANGE: (i32, i32) = (4, 80);

/// Content for the blocks that carry a payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockContents {
    pub headline: String,
    pub input: String,
    pub users: String,
    pub stack: u32,
}

impl BlockContents {
    /// Draw all content from `rng`. Consumes exactly four draws.
    pub fn draw(rng: &mut ScreenRng) -> Self {
        let headline = HEADLINE_TEXTS[rng.index(HEADLINE_TEXTS.len())].to_string();
        let input = INPUT_TEXTS[rng.index(INPUT_TEXTS.len())].to_string();
        let users_left = rng.range_inclusive(USERS_LEFT_RANGE.0, USERS_LEFT_RANGE.1);
        let stack = rng.range_inclusive(STACK_COUNT_RANGE.0, STACK_COUNT_RANGE.1);
        Self {
            headline,
            input,
            users: users_left_text(users_left),
            stack: stack.unsigned_abs(),
        }
    }

    /// Payload for a block, or `None` for blocks without content.
    pub fn for_block(&self, id: BlockId) -> Option<BlockContent> {
        match id {
            BlockId::Headline => Some(BlockContent::Text(self.headline.clone())),
            BlockId::Input => Some(BlockContent::Text(self.input.clone())),
            BlockId::Users => Some(BlockContent::Text(self.users.clone())),
            BlockId::Stack => Some(BlockContent::Count(self.stack)),
            BlockId::Timer | BlockId::Next | BlockId::Trash => None,
        }
    }
}

pub fn users_left_text(count: i32) -> String {
    format!("{count} users already left, are you next?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_consumes_four_values() {
        let mut a = ScreenRng::new(42);
        BlockContents::draw(&mut a);
        let mut b = ScreenRng::new(42);
        for _ in 0..4 {
            b.next_u32();
        }
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn seed_42_content() {
        let contents = BlockContents::draw(&mut ScreenRng::new(42));
        assert_eq!(contents.headline, HEADLINE_TEXTS[4]);
        assert_eq!(contents.input, INPUT_TEXTS[3]);
    }

    #[test]
    fn ranges_hold_over_many_seeds() {
        for seed in 0..500 {
            let c = BlockContents::draw(&mut ScreenRng::new(seed));
            assert!(HEADLINE_TEXTS.contains(&c.headline.as_str()));
            assert!(INPUT_TEXTS.contains(&c.input.as_str()));
            assert!((4..=80).contains(&c.stack));
            let n: i32 = c.users.split(' ').next().unwrap().parse().unwrap();
            assert!((3..=18).contains(&n));
        }
    }

    #[test]
    fn only_payload_blocks_get_content() {
        let c = BlockContents::draw(&mut ScreenRng::new(1));
        assert!(c.for_block(BlockId::Timer).is_none());
        assert!(c.for_block(BlockId::Next).is_none());
        assert!(c.for_block(BlockId::Trash).is_none());
        assert_eq!(c.for_block(BlockId::Stack), Some(BlockContent::Count(c.stack)));
    }
}
