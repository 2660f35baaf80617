// Data-driven generator configuration.
//
// Every tunable number used by placement, retry orchestration, the bias
// variants and the sequence builder lives in `LayoutConfig`, loadable from
// JSON. The generator code never hard-codes an attempt budget, a seed stride
// or a bias probability; it reads them from here. `LayoutConfig::default()`
// reproduces the stock behavior and is what the free functions in `lib.rs`
// use.
//
// Retry orchestration is an ordered list of `RetryTier`s tried in sequence
// (randomized, then deterministic, then randomized again by default). Each
// tier derives attempt seeds as `seed + attempt * seed_stride` with 32-bit
// wraparound.
//
// See also: `generator.rs` (reads placement + tiers), `bias.rs` (bias
// budgets), `sequence.rs` (`SequenceConfig`).
//
// **Critical constraint: determinism.** Two runs with identical configs and
// seeds must produce identical layouts.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// How a single attempt assigns rectangles to blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementStrategy {
    /// Randomized trial placement from the biased pool, falling back to a
    /// largest-first scan of the full pool.
    Randomized,
    /// No random geometry: largest-first scan of the full pool, skipping
    /// any position that would leave no room for the remaining blocks.
    Deterministic,
}

/// One stage of the retry ladder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryTier {
    pub strategy: PlacementStrategy,
    /// Number of attempts in this tier.
    pub attempts: u32,
    /// Attempt `n` uses seed `seed + n * seed_stride`.
    pub seed_stride: u32,
}

/// Probabilities steering the input block during randomized placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputBiasParams {
    /// Chance of drawing x from the right half of the valid range.
    pub right_half_chance: f64,
    /// Additional chance of drawing x from the middle third onward.
    pub middle_third_chance: f64,
    /// Chance of drawing y away from the first and last rows.
    pub inner_row_chance: f64,
}

/// Parameters for `SequenceBuilder`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Number of slots in a built sequence.
    pub length: usize,
    /// Candidate budget per slot (and for the endpoint repair).
    pub attempts_per_slot: u32,
    /// Chance a slot reuses a hand-authored layout.
    pub predefined_chance: f64,
    /// Every `away_every`-th slot (1-based) forces the input away from edges.
    pub away_every: usize,
    /// Slots before this index use the unbiased generator.
    pub any_until: usize,
    /// Slots before this index (and after `any_until`) bias the input
    /// toward the middle; later slots bias it right.
    pub middle_until: usize,
    pub any_seed_offset: u32,
    pub middle_seed_offset: u32,
    pub right_seed_offset: u32,
    pub away_seed_offset: u32,
    /// Seed offset used when regenerating the last slot.
    pub endpoint_seed_offset: u32,
    /// Per-slot seed spacing (`offset + slot * slot_seed_stride`).
    pub slot_seed_stride: u32,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            length: 70,
            attempts_per_slot: 40,
            predefined_chance: 0.2,
            away_every: 5,
            any_until: 50,
            middle_until: 60,
            any_seed_offset: 0,
            middle_seed_offset: 5000,
            right_seed_offset: 10000,
            away_seed_offset: 30000,
            endpoint_seed_offset: 20000,
            slot_seed_stride: 100,
        }
    }
}

/// Complete generator configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Randomized trial placements per block before the scan fallback.
    pub placement_attempts: u32,
    /// Maximum gap-filling passes over all blocks.
    pub gap_fill_passes: u32,
    pub input_bias: InputBiasParams,
    /// Ordered retry ladder; the first successful attempt wins.
    pub retry_tiers: Vec<RetryTier>,
    /// Candidate budget for the middle/right bias.
    pub bias_attempts: u32,
    /// Bias candidates use `seed + bias_seed_offset + n * bias_seed_stride`.
    pub bias_seed_offset: u32,
    pub bias_seed_stride: u32,
    /// Candidate budget for the away-from-edges variant.
    pub away_attempts: u32,
    pub away_seed_stride: u32,
    pub sequence: SequenceConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            placement_attempts: 400,
            gap_fill_passes: 3,
            input_bias: InputBiasParams {
                right_half_chance: 0.4,
                middle_third_chance: 0.3,
                inner_row_chance: 0.7,
            },
            retry_tiers: vec![
                RetryTier {
                    strategy: PlacementStrategy::Randomized,
                    attempts: 12,
                    seed_stride: 9973,
                },
                RetryTier {
                    strategy: PlacementStrategy::Deterministic,
                    attempts: 12,
                    seed_stride: 7919,
                },
                RetryTier {
                    strategy: PlacementStrategy::Randomized,
                    attempts: 20,
                    seed_stride: 15401,
                },
            ],
            bias_attempts: 30,
            bias_seed_offset: 1000,
            bias_seed_stride: 31,
            away_attempts: 40,
            away_seed_stride: 8191,
            sequence: SequenceConfig::default(),
        }
    }
}

impl LayoutConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load and validate a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let data = std::fs::read_to_string(path)?;
        let config = Self::from_json(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that would make generation meaningless or
    /// non-terminating. The message names the offending field.
    pub fn validate(&self) -> Result<(), String> {
        if self.placement_attempts == 0 {
            return Err("placement_attempts must be at least 1".into());
        }
        if self.retry_tiers.is_empty() {
            return Err("retry_tiers must not be empty".into());
        }
        if let Some(i) = self.retry_tiers.iter().position(|t| t.attempts == 0) {
            return Err(format!("retry_tiers[{i}].attempts must be at least 1"));
        }
        let budgets = [
            ("bias_attempts", self.bias_attempts),
            ("away_attempts", self.away_attempts),
            ("sequence.attempts_per_slot", self.sequence.attempts_per_slot),
        ];
        for (name, value) in budgets {
            if value == 0 {
                return Err(format!("{name} must be at least 1"));
            }
        }
        let probabilities = [
            ("input_bias.right_half_chance", self.input_bias.right_half_chance),
            ("input_bias.middle_third_chance", self.input_bias.middle_third_chance),
            ("input_bias.inner_row_chance", self.input_bias.inner_row_chance),
            ("sequence.predefined_chance", self.sequence.predefined_chance),
        ];
        for (name, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(format!("{name} must be within [0, 1], got {p}"));
            }
        }
        if self.input_bias.right_half_chance + self.input_bias.middle_third_chance > 1.0 {
            return Err("input_bias x chances must sum to at most 1".into());
        }
        if self.sequence.away_every == 0 {
            return Err("sequence.away_every must be at least 1".into());
        }
        if self.sequence.any_until > self.sequence.middle_until {
            return Err("sequence.any_until must not exceed sequence.middle_until".into());
        }
        Ok(())
    }
}
