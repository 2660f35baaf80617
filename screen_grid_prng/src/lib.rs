// Deterministic, portable pseudo-random number generator.
//
// Implements Mulberry32: a single 32-bit state advanced by a fixed odd
// increment, followed by a multiply/xor-shift avalanche. Every operation is
// explicit wrapping `u32` arithmetic, so the stream is identical on every
// platform and matches reference Mulberry32 output.
//
// This crate is the single PRNG used across the screen grid project:
// `screen_grid_layout` (placement, content, sequence slot decisions) and,
// through it, `screen_grid_cli`. Each generation attempt owns its own
// `ScreenRng`, seeded from the attempt seed, so no state is shared between
// calls.
//
// **Critical constraint: determinism.** Same seed, same stream. Do not use
// signed or widening arithmetic in the core step, and do not introduce any
// other source of randomness into layout generation.

use serde::{Deserialize, Serialize};

/// Weyl increment added to the state on every draw.
const INCREMENT: u32 = 0x6D2B_79F5;

/// 2^32 as a float, the divisor for mapping a `u32` draw into `[0, 1)`.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Mulberry32 PRNG — the project's sole source of randomness.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenRng {
    state: u32,
}

impl ScreenRng {
    /// Create a new PRNG seeded from a `u32`.
    ///
    /// Two `ScreenRng` instances created with the same seed produce identical
    /// output sequences. Reseeding is just constructing a new instance.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Generate the next `u32` in the sequence.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Generate a uniform `f64` in [0, 1).
    ///
    /// Exact: every `u32` maps to a distinct multiple of 2^-32.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    /// Generate a uniform integer in `[min, max]` (inclusive on both ends).
    ///
    /// Computed as `floor(u * (max - min + 1)) + min` so that the mapping from
    /// draws to values is stable. Panics if `min > max`.
    pub fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        assert!(min <= max, "range_inclusive: min must be <= max");
        let span = f64::from(max - min + 1);
        (self.next_f64() * span).floor() as i32 + min
    }

    /// Pick a uniform index into a collection of length `len`.
    ///
    /// Panics if `len == 0`.
    pub fn index(&mut self, len: usize) -> usize {
        assert!(len > 0, "index: len must be non-zero");
        ((self.next_f64() * len as f64).floor() as usize).min(len - 1)
    }

    /// Return `true` with probability `p`.
    ///
    /// `p <= 0.0` always returns false, `p >= 1.0` always returns true.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determinism_same_seed_same_output() {
        let mut a = ScreenRng::new(42);
        let mut b = ScreenRng::new(42);
        for _ in 0..1000 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_seeds_different_output() {
        let mut a = ScreenRng::new(42);
        let mut b = ScreenRng::new(43);
        assert_ne!(a.next_u32(), b.next_u32());
    }

    /// Reference values from the original Mulberry32 formulation. If this
    /// test ever breaks, every stored layout seed changes meaning.
    #[test]
    fn known_sequence() {
        let mut rng = ScreenRng::new(42);
        let vals: Vec<u32> = (0..3).map(|_| rng.next_u32()).collect();
        assert_eq!(vals, vec![2_581_720_956, 1_925_393_290, 3_661_312_704]);

        let mut rng = ScreenRng::new(0);
        let vals: Vec<u32> = (0..3).map(|_| rng.next_u32()).collect();
        assert_eq!(vals, vec![1_144_304_738, 1_416_247, 958_946_056]);
    }

    #[test]
    fn state_wraps_without_overflow_panic() {
        let mut rng = ScreenRng::new(u32::MAX);
        for _ in 0..10_000 {
            rng.next_u32();
        }
    }

    #[test]
    fn f64_in_unit_range() {
        let mut rng = ScreenRng::new(12345);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "f64 out of range: {v}");
        }
    }

    #[test]
    fn f64_matches_u32_stream() {
        let mut a = ScreenRng::new(42);
        let mut b = ScreenRng::new(42);
        let v = a.next_f64();
        assert_eq!(v, f64::from(b.next_u32()) / TWO_POW_32);
        assert!((v - 0.6011037519201636).abs() < 1e-12);
    }

    #[test]
    fn range_inclusive_within_bounds() {
        let mut rng = ScreenRng::new(999);
        let mut saw_min = false;
        let mut saw_max = false;
        for _ in 0..10_000 {
            let v = rng.range_inclusive(3, 18);
            assert!((3..=18).contains(&v), "range_inclusive out of range: {v}");
            saw_min |= v == 3;
            saw_max |= v == 18;
        }
        assert!(saw_min && saw_max, "both endpoints should be reachable");
    }

    #[test]
    fn range_inclusive_single_value() {
        let mut rng = ScreenRng::new(7);
        for _ in 0..100 {
            assert_eq!(rng.range_inclusive(5, 5), 5);
        }
    }

    #[test]
    fn index_within_bounds() {
        let mut rng = ScreenRng::new(555);
        for _ in 0..10_000 {
            assert!(rng.index(8) < 8);
        }
    }

    #[test]
    #[should_panic(expected = "len must be non-zero")]
    fn index_of_empty_panics() {
        ScreenRng::new(1).index(0);
    }

    #[test]
    fn chance_distribution() {
        let mut rng = ScreenRng::new(42);
        let n = 10_000;
        let hits = (0..n).filter(|_| rng.chance(0.2)).count();
        let pct = hits as f64 / n as f64;
        assert!(
            (0.17..0.23).contains(&pct),
            "chance(0.2) should be ~20%, got {:.1}%",
            pct * 100.0
        );
    }

    #[test]
    fn chance_extremes() {
        let mut rng = ScreenRng::new(42);
        for _ in 0..100 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn serialization_roundtrip() {
        let mut rng = ScreenRng::new(42);
        for _ in 0..100 {
            rng.next_u32();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: ScreenRng = serde_json::from_str(&json).unwrap();
        for _ in 0..100 {
            assert_eq!(rng.next_u32(), restored.next_u32());
        }
    }
}
