// Layout sequence builder.
//
// Builds the ordered run of screens a session walks through. A slot-picking
// `ScreenRng` seeded with the base seed decides, per slot, whether to reuse
// a hand-authored layout (`predefined_chance`, cycling `layout-01..08` by
// slot index). Other slots generate a layout whose flavor depends on the
// slot position:
//
// - every `away_every`-th slot: input away from edges;
// - slots before `any_until`: unbiased;
// - slots before `middle_until`: input biased to the middle;
// - the rest: input biased right.
//
// Generated slots try up to `attempts_per_slot` candidate seeds
// (`base + offset + slot * slot_seed_stride + attempt + 1`), rejecting
// incomplete candidates and any that is not all-different from the
// previous layout. If the budget runs out, an unbiased layout for
// `base + offset + 1` is taken unchecked.
//
// Once every slot is filled, the last layout is regenerated if it is not
// all-different from the first, so the sequence does not loop back onto
// the screen it started with. Replacements that also differ from the
// second-to-last layout are preferred.
//
// See also: `bias.rs` for the biased generators, `predefined.rs`.

use crate::bias::{
    InputBias, generate_layout_with_bias_config, generate_layout_with_input_away_from_edges_config,
};
use crate::config::{LayoutConfig, SequenceConfig};
use crate::generator::generate_layout_with_config;
use crate::predefined::predefined_layouts;
use crate::prng::ScreenRng;
use crate::types::{GridBlock, ScreenLayout};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// What fills one slot of a sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotKind {
    /// Index into `predefined_layouts()`.
    Predefined(usize),
    Generated(InputBias),
    AwayFromEdges,
}

/// True if every block present in both layouts differs in at least one of
/// x, y, w or h. Blocks missing from either side count as different.
pub fn is_all_different(prev: &ScreenLayout, next: &ScreenLayout) -> bool {
    let prev_by_id: BTreeMap<_, &GridBlock> = prev.blocks.iter().map(|b| (b.id, b)).collect();
    next.blocks.iter().all(|block| {
        prev_by_id
            .get(&block.id)
            .is_none_or(|prev_block| !prev_block.same_geometry(block))
    })
}

/// Builds a layout sequence from a base seed.
pub struct SequenceBuilder<'a> {
    base_seed: u32,
    config: &'a LayoutConfig,
    predefined: Vec<ScreenLayout>,
}

impl<'a> SequenceBuilder<'a> {
    pub fn new(base_seed: u32, config: &'a LayoutConfig) -> Self {
        Self {
            base_seed,
            config,
            predefined: predefined_layouts(),
        }
    }

    fn seq(&self) -> &SequenceConfig {
        &self.config.sequence
    }

    /// Decide how slot `index` is filled. Consumes one draw from `rng`.
    pub fn slot_kind(&self, index: usize, rng: &mut ScreenRng) -> SlotKind {
        let seq = self.seq();
        if rng.chance(seq.predefined_chance) && !self.predefined.is_empty() {
            return SlotKind::Predefined(index % self.predefined.len());
        }
        if seq.away_every > 0 && index % seq.away_every == seq.away_every - 1 {
            SlotKind::AwayFromEdges
        } else if index < seq.any_until {
            SlotKind::Generated(InputBias::Any)
        } else if index < seq.middle_until {
            SlotKind::Generated(InputBias::Middle)
        } else {
            SlotKind::Generated(InputBias::Right)
        }
    }

    /// Build the full sequence.
    pub fn build(&self) -> Vec<ScreenLayout> {
        let seq = self.seq();
        let mut rng = ScreenRng::new(self.base_seed);
        let mut layouts: Vec<ScreenLayout> = Vec::with_capacity(seq.length);

        for index in 0..seq.length {
            let layout = match self.slot_kind(index, &mut rng) {
                SlotKind::Predefined(i) => self.predefined[i].clone(),
                kind => self.generate_slot(index, kind, layouts.last()),
            };
            layouts.push(layout);
        }

        self.repair_endpoints(&mut layouts);
        layouts
    }

    fn slot_offset(&self, index: usize, kind: SlotKind) -> u32 {
        let seq = self.seq();
        let base_offset = match kind {
            SlotKind::AwayFromEdges => seq.away_seed_offset,
            SlotKind::Generated(InputBias::Any) | SlotKind::Predefined(_) => seq.any_seed_offset,
            SlotKind::Generated(InputBias::Middle) => seq.middle_seed_offset,
            SlotKind::Generated(InputBias::Right) => seq.right_seed_offset,
        };
        base_offset.wrapping_add((index as u32).wrapping_mul(seq.slot_seed_stride))
    }

    /// One candidate layout for a slot of the given kind.
    fn candidate(&self, kind: SlotKind, seed: u32) -> ScreenLayout {
        match kind {
            SlotKind::Predefined(i) => self.predefined[i].clone(),
            SlotKind::Generated(bias) => generate_layout_with_bias_config(seed, bias, self.config),
            SlotKind::AwayFromEdges => {
                generate_layout_with_input_away_from_edges_config(seed, self.config)
            }
        }
    }

    fn generate_slot(
        &self,
        index: usize,
        kind: SlotKind,
        previous: Option<&ScreenLayout>,
    ) -> ScreenLayout {
        let start = self.base_seed.wrapping_add(self.slot_offset(index, kind));
        for attempt in 0..self.seq().attempts_per_slot {
            let candidate = self.candidate(kind, start.wrapping_add(attempt).wrapping_add(1));
            if !candidate.is_complete() {
                continue;
            }
            if previous.is_some_and(|prev| !is_all_different(prev, &candidate)) {
                continue;
            }
            return candidate;
        }
        warn!(
            base_seed = self.base_seed,
            slot = index,
            "slot budget exhausted; using unchecked unbiased layout"
        );
        generate_layout_with_config(start.wrapping_add(1), self.config)
    }

    fn repair_endpoints(&self, layouts: &mut [ScreenLayout]) {
        let n = layouts.len();
        if n < 2 {
            return;
        }
        let (first, last) = (&layouts[0], &layouts[n - 1]);
        if !first.is_complete() || is_all_different(first, last) {
            return;
        }
        debug!(base_seed = self.base_seed, "last layout repeats the first; regenerating");
        match self.endpoint_replacement(first, &layouts[n - 2]) {
            Some(candidate) => layouts[n - 1] = candidate,
            None => warn!(
                base_seed = self.base_seed,
                "could not make the last layout differ from the first"
            ),
        }
    }

    /// First candidate all-different from both `first` and `penultimate`,
    /// else the first one all-different from `first` alone.
    fn endpoint_replacement(
        &self,
        first: &ScreenLayout,
        penultimate: &ScreenLayout,
    ) -> Option<ScreenLayout> {
        let start = self.base_seed.wrapping_add(self.seq().endpoint_seed_offset);
        let mut differs_from_first = None;
        for attempt in 0..self.seq().attempts_per_slot {
            let candidate = generate_layout_with_config(start.wrapping_add(attempt), self.config);
            if !candidate.is_complete() || !is_all_different(first, &candidate) {
                continue;
            }
            if is_all_different(penultimate, &candidate) {
                return Some(candidate);
            }
            differs_from_first.get_or_insert(candidate);
        }
        differs_from_first
    }
}

/// Build a sequence with the default configuration.
pub fn build_sequence(base_seed: u32) -> Vec<ScreenLayout> {
    SequenceBuilder::new(base_seed, &LayoutConfig::default()).build()
}
