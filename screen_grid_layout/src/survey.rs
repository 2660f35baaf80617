// Seed survey.
//
// Generates one layout per seed over a range, in parallel, and tallies how
// many came out complete and which retry tier produced each. Used to track
// the degraded-layout rate of a configuration. Generation is pure and
// allocates its own state per call, so seeds are farmed out to rayon
// workers with no shared mutable state; the tally happens afterwards.

use crate::config::LayoutConfig;
use crate::generator::generate_layout_traced;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Results of a seed survey.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurveyReport {
    pub first_seed: u32,
    pub total: usize,
    pub complete: usize,
    pub degraded: usize,
    /// Successes per retry tier, indexed like `LayoutConfig::retry_tiers`.
    pub tier_successes: Vec<usize>,
    /// Up to `MAX_DEGRADED_SAMPLES` seeds that degraded, ascending.
    pub degraded_seeds: Vec<u32>,
}

/// Cap on `SurveyReport::degraded_seeds`.
pub const MAX_DEGRADED_SAMPLES: usize = 32;

impl SurveyReport {
    /// Fraction of seeds that degraded, 0.0 for an empty survey.
    pub fn degraded_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.degraded as f64 / self.total as f64
        }
    }
}

/// Generate a layout for every seed in `seeds` and tally the outcomes.
pub fn survey(seeds: Range<u32>, config: &LayoutConfig) -> SurveyReport {
    let first_seed = seeds.start;
    let outcomes: Vec<(u32, Option<usize>, bool)> = seeds
        .into_par_iter()
        .map(|seed| {
            let outcome = generate_layout_traced(seed, config);
            (seed, outcome.tier, outcome.layout.is_complete())
        })
        .collect();

    let mut report = SurveyReport {
        first_seed,
        total: outcomes.len(),
        complete: 0,
        degraded: 0,
        tier_successes: vec![0; config.retry_tiers.len()],
        degraded_seeds: Vec::new(),
    };
    for (seed, tier, complete) in outcomes {
        if let Some(tier) = tier {
            report.tier_successes[tier] += 1;
        }
        if complete {
            report.complete += 1;
        } else {
            report.degraded += 1;
            if report.degraded_seeds.len() < MAX_DEGRADED_SAMPLES {
                report.degraded_seeds.push(seed);
            }
        }
    }
    report
}
