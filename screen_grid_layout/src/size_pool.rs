// Size pool builder.
//
// For each block spec, enumerates every legal `(w, h)` and sorts the result
// by descending area. That full list is the fallback pool scanned by the
// deterministic placement phases. A "biased" subset is derived per block to
// skew randomized placement toward sizes that read well on screen:
//
// - headline, input: the largest 40% (rounded up, at least one size).
// - next: widths 4..=5.
// - trash: widths 2..=3.
// - stack: exactly 2x1.
// - users, timer: the full pool.
//
// A filter that leaves nothing falls back to the full pool.

use crate::catalog::{BLOCK_SPECS, BlockSpec};
use crate::types::BlockId;

/// Share of the largest sizes kept in the headline/input biased pools.
const LARGE_SHARE: f64 = 0.4;

/// One candidate footprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeOption {
    pub w: i32,
    pub h: i32,
}

impl SizeOption {
    pub fn area(self) -> i32 {
        self.w * self.h
    }
}

/// Full and biased size lists for one block.
#[derive(Clone, Debug)]
pub struct SizePool {
    /// Every legal size, largest area first.
    pub sizes: Vec<SizeOption>,
    /// Preferred subset drawn from during randomized placement. Never empty
    /// unless `sizes` is.
    pub biased: Vec<SizeOption>,
}

/// Enumerate every legal size for a spec, in width-major order.
pub fn size_options(spec: &BlockSpec) -> Vec<SizeOption> {
    let mut sizes = Vec::new();
    for w in spec.min_w..=spec.max_w {
        for h in spec.min_h..=spec.max_h {
            if w * h < spec.min_area {
                continue;
            }
            if h > 1 && !spec.allows_multi_row(w) {
                continue;
            }
            sizes.push(SizeOption { w, h });
        }
    }
    sizes
}

/// Build the full and biased pools for a spec.
pub fn build_size_pool(spec: &BlockSpec) -> SizePool {
    let mut sizes = size_options(spec);
    // Stable sort keeps width-major order among equal areas.
    sizes.sort_by(|a, b| b.area().cmp(&a.area()));

    let biased: Vec<SizeOption> = match spec.id {
        BlockId::Headline | BlockId::Input => {
            let take = ((sizes.len() as f64 * LARGE_SHARE).ceil() as usize).max(1);
            sizes.iter().copied().take(take).collect()
        }
        BlockId::Next => filtered(&sizes, |s| (4..=5).contains(&s.w)),
        BlockId::Trash => filtered(&sizes, |s| (2..=3).contains(&s.w)),
        BlockId::Stack => filtered(&sizes, |s| s.w == 2 && s.h == 1),
        BlockId::Users | BlockId::Timer => sizes.clone(),
    };
    let biased = if biased.is_empty() {
        sizes.clone()
    } else {
        biased
    };

    SizePool { sizes, biased }
}

fn filtered(sizes: &[SizeOption], keep: impl Fn(&SizeOption) -> bool) -> Vec<SizeOption> {
    sizes.iter().copied().filter(|s| keep(s)).collect()
}

/// Pools for the whole catalog, indexed in `BlockId::ALL` order.
#[derive(Clone, Debug)]
pub struct SizePools {
    pools: Vec<SizePool>,
    /// Full pools re-sorted smallest area first, for feasibility checks.
    smallest_first: Vec<Vec<SizeOption>>,
}

impl SizePools {
    pub fn for_catalog() -> Self {
        let pools: Vec<SizePool> = BLOCK_SPECS.iter().map(build_size_pool).collect();
        let smallest_first = pools
            .iter()
            .map(|pool| {
                let mut sizes = pool.sizes.clone();
                sizes.sort_by_key(|s| s.area());
                sizes
            })
            .collect();
        Self {
            pools,
            smallest_first,
        }
    }

    pub fn get(&self, id: BlockId) -> &SizePool {
        &self.pools[id as usize]
    }

    pub fn smallest_first(&self, id: BlockId) -> &[SizeOption] {
        &self.smallest_first[id as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::spec_for;

    #[test]
    fn sizes_respect_spec_and_sort_descending() {
        for spec in &BLOCK_SPECS {
            let pool = build_size_pool(spec);
            assert!(!pool.sizes.is_empty());
            assert!(!pool.biased.is_empty());
            for pair in pool.sizes.windows(2) {
                assert!(pair[0].area() >= pair[1].area());
            }
            for s in &pool.sizes {
                assert!(spec.allows_size(s.w, s.h));
                assert!(s.area() >= spec.min_area);
            }
            for s in &pool.biased {
                assert!(pool.sizes.contains(s));
            }
        }
    }

    #[test]
    fn headline_excludes_small_areas() {
        let pool = build_size_pool(spec_for(BlockId::Headline));
        // 5x2 = 10 is below the minimum area of 12.
        assert!(!pool.sizes.contains(&SizeOption { w: 5, h: 2 }));
        assert_eq!(pool.sizes.len(), 14);
        assert_eq!(pool.biased.len(), 6);
        assert_eq!(pool.biased[0], SizeOption { w: 9, h: 4 });
    }

    #[test]
    fn input_biased_is_top_forty_percent() {
        let pool = build_size_pool(spec_for(BlockId::Input));
        assert_eq!(pool.sizes.len(), 40);
        assert_eq!(pool.biased.len(), 16);
        assert_eq!(pool.biased[0], SizeOption { w: 10, h: 6 });
    }

    #[test]
    fn narrow_stack_cannot_be_two_rows() {
        let pool = build_size_pool(spec_for(BlockId::Stack));
        assert!(!pool.sizes.contains(&SizeOption { w: 2, h: 2 }));
        assert!(pool.sizes.contains(&SizeOption { w: 3, h: 2 }));
        assert_eq!(pool.biased, vec![SizeOption { w: 2, h: 1 }]);
    }

    #[test]
    fn button_biases() {
        let next = build_size_pool(spec_for(BlockId::Next));
        assert!(next.biased.iter().all(|s| s.w == 4 || s.w == 5));
        assert_eq!(next.biased.len(), 2);

        let trash = build_size_pool(spec_for(BlockId::Trash));
        assert!(trash.biased.iter().all(|s| s.w == 2 || s.w == 3));
        assert!(trash.sizes.iter().all(|s| s.h == 1));
    }

    #[test]
    fn unbiased_blocks_use_full_pool() {
        for id in [BlockId::Users, BlockId::Timer] {
            let pool = build_size_pool(spec_for(id));
            assert_eq!(pool.sizes, pool.biased);
        }
    }

    #[test]
    fn catalog_pools_are_indexed_by_id() {
        let pools = SizePools::for_catalog();
        for id in BlockId::ALL {
            assert_eq!(pools.get(id).sizes, build_size_pool(spec_for(id)).sizes);
            let small = pools.smallest_first(id);
            assert_eq!(small.len(), pools.get(id).sizes.len());
            assert!(small[0].area() >= spec_for(id).min_area);
            for pair in small.windows(2) {
                assert!(pair[0].area() <= pair[1].area());
            }
        }
    }
}
