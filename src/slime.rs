//! Slime-chunk predicate evaluation.
//!
//! A chunk `(x, z)` is a slime chunk when a seed derived from the chunk
//! coordinates and the world seed, pushed through one step of the legacy
//! 48-bit LCG, lands on a multiple of ten. The derivation is bit-exact:
//! chunk coordinates are narrowed to 32 bits, the coordinate terms use
//! 32-bit wrapping arithmetic, and the `z²` term alone is widened to 64 bits
//! before its multiply. Getting any single operation width wrong produces a
//! different (and plausible-looking) chunk pattern, so the widths below are
//! load-bearing, not stylistic.
//!
//! Two entry points:
//!
//! - [`is_slime_chunk`]: scalar, one chunk.
//! - [`is_slime_chunk_x16`]: sixteen chunks per call. On x86-64 with AVX2
//!   the coordinate terms are evaluated in 32-bit SIMD lanes (two 256-bit
//!   halves) and the `z²` term in widened 64-bit lanes; the 48-bit LCG mix
//!   finishes scalar per lane. Other targets fall back to sixteen scalar
//!   calls. Both paths agree lane-for-lane with the scalar function.

/// Multiplier of the 48-bit LCG.
const LCG_MULT: i64 = 0x5DEECE66D;
/// Increment of the 48-bit LCG.
const LCG_ADD: i64 = 0xB;
/// The LCG state is 48 bits wide.
const LCG_MASK: i64 = 0xFFFF_FFFF_FFFF;
/// Scrambler XORed onto the summed coordinate terms.
const SCRAMBLER: i64 = 0x3AD8025F;

const X_SQ_MULT: i32 = 0x4C1906;
const X_MULT: i32 = 0x5AC0DB;
const Z_SQ_MULT: i64 = 0x4307A7;
const Z_MULT: i32 = 0x5F24F;

/// Finish the mix from the summed coordinate terms (pre-scramble) and test
/// divisibility.
///
/// Shared by the scalar path and the SIMD tail so the two cannot drift.
#[inline(always)]
fn mix_and_test(term_sum: i64) -> bool {
    // The scrambler applies to the whole sum, world seed included; it is
    // not folded into the last term.
    let mut s = (term_sum ^ SCRAMBLER) ^ LCG_MULT;
    s &= LCG_MASK;
    s = s.wrapping_mul(LCG_MULT).wrapping_add(LCG_ADD) & LCG_MASK;

    // Bits 17..47 of the state; the field is at most 31 bits so the cast
    // never sets the sign bit and `% 10` needs no sign handling.
    let bits = (s >> 17) as i32;
    bits % 10 == 0
}

/// Scalar slime-chunk test.
///
/// Chunk coordinates are narrowed to their low 32 bits (sign preserved),
/// matching the upstream game's `int` arithmetic. The narrowing is
/// observable: coordinates that differ only above bit 31 classify
/// identically.
#[inline]
pub fn is_slime_chunk(chunk_x: i64, chunk_z: i64, world_seed: i64) -> bool {
    let x = chunk_x as i32;
    let z = chunk_z as i32;

    let t1 = x.wrapping_mul(x).wrapping_mul(X_SQ_MULT) as i64;
    let t2 = x.wrapping_mul(X_MULT) as i64;
    let t3 = (z.wrapping_mul(z) as i64).wrapping_mul(Z_SQ_MULT);
    let t4 = z.wrapping_mul(Z_MULT) as i64;

    let sum = world_seed
        .wrapping_add(t1)
        .wrapping_add(t2)
        .wrapping_add(t3)
        .wrapping_add(t4);
    mix_and_test(sum)
}

/// Batched slime-chunk test: sixteen chunks per call.
///
/// Equivalent to sixteen independent [`is_slime_chunk`] calls, lane for
/// lane. Callers padding a ragged tail may put any values in the unused
/// lanes; those outputs are well-defined but meaningless.
#[inline]
pub fn is_slime_chunk_x16(
    chunk_x: &[i64; 16],
    chunk_z: &[i64; 16],
    world_seed: i64,
    out: &mut [bool; 16],
) {
    #[cfg(target_arch = "x86_64")]
    {
        if std::arch::is_x86_feature_detected!("avx2") {
            // SAFETY: guarded by runtime feature detection.
            unsafe { slime_x16_avx2(chunk_x, chunk_z, world_seed, out) };
            return;
        }
    }

    slime_x16_scalar(chunk_x, chunk_z, world_seed, out);
}

/// Human-readable name of the batch path selected at runtime.
///
/// Informational only (startup banner); both paths are bit-identical.
pub fn batch_backend() -> &'static str {
    #[cfg(target_arch = "x86_64")]
    {
        if std::arch::is_x86_feature_detected!("avx2") {
            return "avx2 16-wide";
        }
    }
    "scalar"
}

fn slime_x16_scalar(
    chunk_x: &[i64; 16],
    chunk_z: &[i64; 16],
    world_seed: i64,
    out: &mut [bool; 16],
) {
    for i in 0..16 {
        out[i] = is_slime_chunk(chunk_x[i], chunk_z[i], world_seed);
    }
}

/// AVX2 batch evaluation.
///
/// Lane plan, per 256-bit half (eight 32-bit lanes):
///
/// 1. `t1 = (x·x)·X_SQ_MULT`, `t2 = x·X_MULT`, `t4 = z·Z_MULT`, all via
///    `mullo_epi32`, i.e. 32-bit wrapping products.
/// 2. `z·z` widens to four 64-bit lanes per 128-bit half
///    (`cvtepi32_epi64`), then `mul_epi32` against the 64-bit constant.
///    `mul_epi32` multiplies the sign-extended low 32 bits of each lane,
///    which is exactly the required `sext64(z²₃₂) · Z_SQ_MULT`; the product
///    magnitude stays under 2⁶³ so no wrap can occur in this step.
/// 3. The 48-bit LCG mix runs scalar per lane out of spilled arrays, reusing
///    [`mix_and_test`].
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn slime_x16_avx2(
    chunk_x: &[i64; 16],
    chunk_z: &[i64; 16],
    world_seed: i64,
    out: &mut [bool; 16],
) {
    use std::arch::x86_64::{
        __m256i, _mm256_castsi256_si128, _mm256_cvtepi32_epi64, _mm256_extracti128_si256,
        _mm256_loadu_si256, _mm256_mul_epi32, _mm256_mullo_epi32, _mm256_set1_epi32,
        _mm256_set1_epi64x, _mm256_storeu_si256,
    };

    let mut x32 = [0i32; 16];
    let mut z32 = [0i32; 16];
    for i in 0..16 {
        x32[i] = chunk_x[i] as i32;
        z32[i] = chunk_z[i] as i32;
    }

    let mut t1 = [0i32; 16];
    let mut t2 = [0i32; 16];
    let mut t4 = [0i32; 16];
    let mut t3 = [0i64; 16];

    let x_sq_mult = _mm256_set1_epi32(X_SQ_MULT);
    let x_mult = _mm256_set1_epi32(X_MULT);
    let z_mult = _mm256_set1_epi32(Z_MULT);
    let z_sq_mult = _mm256_set1_epi64x(Z_SQ_MULT);

    for half in 0..2 {
        let base = half * 8;
        let x = _mm256_loadu_si256(x32[base..].as_ptr() as *const __m256i);
        let z = _mm256_loadu_si256(z32[base..].as_ptr() as *const __m256i);

        let xx = _mm256_mullo_epi32(x, x);
        let zz = _mm256_mullo_epi32(z, z);

        let t1v = _mm256_mullo_epi32(xx, x_sq_mult);
        let t2v = _mm256_mullo_epi32(x, x_mult);
        let t4v = _mm256_mullo_epi32(z, z_mult);

        _mm256_storeu_si256(t1[base..].as_mut_ptr() as *mut __m256i, t1v);
        _mm256_storeu_si256(t2[base..].as_mut_ptr() as *mut __m256i, t2v);
        _mm256_storeu_si256(t4[base..].as_mut_ptr() as *mut __m256i, t4v);

        // Widen z² to 64-bit lanes, four at a time, for the 64-bit term.
        let zz_lo = _mm256_cvtepi32_epi64(_mm256_castsi256_si128(zz));
        let zz_hi = _mm256_cvtepi32_epi64(_mm256_extracti128_si256(zz, 1));
        let t3_lo = _mm256_mul_epi32(zz_lo, z_sq_mult);
        let t3_hi = _mm256_mul_epi32(zz_hi, z_sq_mult);

        _mm256_storeu_si256(t3[base..].as_mut_ptr() as *mut __m256i, t3_lo);
        _mm256_storeu_si256(t3[base + 4..].as_mut_ptr() as *mut __m256i, t3_hi);
    }

    for i in 0..16 {
        let sum = world_seed
            .wrapping_add(t1[i] as i64)
            .wrapping_add(t2[i] as i64)
            .wrapping_add(t3[i])
            .wrapping_add(t4[i] as i64);
        out[i] = mix_and_test(sum);
    }
}
