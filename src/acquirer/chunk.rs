/// Maximum `rnlimit` the random endpoint honours for one call.
pub const RANDOM_LIMIT_MAX: usize = 500;

/// Splits a request for `total` items into per-call sizes of at most `max`.
///
/// `floor(total / max)` chunks of `max`, plus one chunk of `total % max` when
/// that is nonzero. A total that fits in one call (including zero) yields a
/// single chunk of exactly `total`.
pub fn chunk_sizes(total: usize, max: usize) -> Vec<usize> {
    debug_assert!(max > 0, "chunk size must be positive");

    if total <= max {
        return vec![total];
    }

    let mut chunks = vec![max; total / max];
    let remainder = total % max;
    if remainder > 0 {
        chunks.push(remainder);
    }
    chunks
}


#[cfg(all(test, feature = "fuzz"))]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_chunking_law(total in 0usize..20_000) {
            let chunks = chunk_sizes(total, RANDOM_LIMIT_MAX);

            prop_assert_eq!(chunks.iter().sum::<usize>(), total);
            if total <= RANDOM_LIMIT_MAX {
                prop_assert_eq!(chunks, vec![total]);
            } else {
                let (last, rest) = chunks.split_last().unwrap();
                prop_assert!(rest.iter().all(|&c| c == RANDOM_LIMIT_MAX));
                prop_assert!(*last > 0 && *last <= RANDOM_LIMIT_MAX);
            }
        }
    }
}
