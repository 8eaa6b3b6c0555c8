//! Scalar and batched predicate must agree bit-for-bit, lane-for-lane,
//! for every coordinate and seed, including coordinates far outside the
//! 32-bit range, where the narrowing behavior is part of the contract.

use proptest::prelude::*;

use slimescan_rs::{is_slime_chunk, is_slime_chunk_x16};

proptest! {
    #[test]
    fn batch_agrees_with_scalar(
        xs in prop::array::uniform16(any::<i64>()),
        zs in prop::array::uniform16(any::<i64>()),
        seed in any::<i64>(),
    ) {
        let mut out = [false; 16];
        is_slime_chunk_x16(&xs, &zs, seed, &mut out);
        for i in 0..16 {
            prop_assert_eq!(
                out[i],
                is_slime_chunk(xs[i], zs[i], seed),
                "lane {} for ({}, {})", i, xs[i], zs[i]
            );
        }
    }

    #[test]
    fn narrowing_ignores_high_bits(
        x in any::<i64>(),
        z in any::<i64>(),
        seed in any::<i64>(),
        hi_x in any::<i32>(),
        hi_z in any::<i32>(),
    ) {
        // Adding multiples of 2^32 to a coordinate cannot change the verdict.
        let shifted_x = x.wrapping_add((hi_x as i64) << 32);
        let shifted_z = z.wrapping_add((hi_z as i64) << 32);
        prop_assert_eq!(
            is_slime_chunk(x, z, seed),
            is_slime_chunk(shifted_x, shifted_z, seed)
        );
    }

    #[test]
    fn predicate_is_deterministic(x in any::<i64>(), z in any::<i64>(), seed in any::<i64>()) {
        prop_assert_eq!(is_slime_chunk(x, z, seed), is_slime_chunk(x, z, seed));
    }
}
