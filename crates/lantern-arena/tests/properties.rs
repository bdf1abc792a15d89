//! Property tests: offset accounting and region disjointness.

use lantern_arena::{Arena, ArenaError};
use proptest::prelude::*;

proptest! {
    /// Offsets accumulate exactly: each successful allocation begins
    /// where the previous one ended, failures change nothing, and the
    /// running total never exceeds the capacity.
    #[test]
    fn offsets_accumulate(
        capacity in 1usize..512,
        sizes in proptest::collection::vec(0usize..96, 0..32),
    ) {
        let mut arena = Arena::new();
        arena.init(capacity).unwrap();
        let mut expected_cursor = 0usize;

        for size in sizes {
            match arena.alloc(size) {
                Ok(region) => {
                    prop_assert_eq!(region.offset(), expected_cursor);
                    prop_assert_eq!(region.len(), size);
                    expected_cursor += size;
                    prop_assert!(expected_cursor <= capacity);
                }
                Err(err) => {
                    prop_assert_eq!(err, ArenaError::OutOfCapacity {
                        requested: size,
                        remaining: capacity - expected_cursor,
                    });
                    prop_assert!(expected_cursor + size > capacity);
                }
            }
            prop_assert_eq!(arena.used(), expected_cursor);
        }
    }

    /// Successful regions are pairwise disjoint.
    #[test]
    fn regions_never_overlap(
        capacity in 1usize..512,
        sizes in proptest::collection::vec(1usize..64, 1..24),
    ) {
        let mut arena = Arena::new();
        arena.init(capacity).unwrap();
        let regions: Vec<_> = sizes
            .into_iter()
            .filter_map(|size| arena.alloc(size).ok())
            .collect();

        for (i, a) in regions.iter().enumerate() {
            for b in &regions[i + 1..] {
                prop_assert!(a.end() <= b.offset() || b.end() <= a.offset());
            }
        }
    }

    /// Aligned regions are aligned, never start before the cursor did,
    /// and skipped padding is never handed out again.
    #[test]
    fn aligned_offsets_are_aligned(
        capacity in 1usize..512,
        requests in proptest::collection::vec((0usize..64, 0u32..5), 1..24),
    ) {
        let mut arena = Arena::new();
        arena.init(capacity).unwrap();
        let mut high_water = 0usize;

        for (size, align_pow) in requests {
            let align = 1usize << align_pow;
            if let Ok(region) = arena.alloc_aligned(size, align) {
                prop_assert_eq!(region.offset() % align, 0);
                prop_assert!(region.offset() >= high_water);
                high_water = region.end();
                prop_assert_eq!(arena.used(), high_water);
            }
        }
    }

    /// Reset rewinds to zero no matter what came before.
    #[test]
    fn reset_always_rewinds(
        capacity in 1usize..256,
        sizes in proptest::collection::vec(0usize..64, 0..16),
    ) {
        let mut arena = Arena::new();
        arena.init(capacity).unwrap();
        for size in sizes {
            let _ = arena.alloc(size);
        }
        arena.reset().unwrap();
        prop_assert_eq!(arena.used(), 0);
        prop_assert_eq!(arena.alloc(capacity).unwrap().offset(), 0);
    }
}
