//! Binary arithmetic utilities used for Morton code computations

use crate::NumBits;

/// Count the number of bits of an integer
#[inline(always)]
pub const fn num_bits<T>() -> NumBits {
    (core::mem::size_of::<T>() * 8) as _
}

/// Generate a mask that selects a certain number of low-order bits: 0000...0011
///
/// Lengths of 64 bits or more saturate to an all-ones mask.
///
#[inline(always)]
pub const fn low_order_mask(length: NumBits) -> u64 {
    if length < num_bits::<u64>() {
        (1 << length) - 1
    } else {
        u64::MAX
    }
}

/// Spread the low-order bits of an integer apart from each other
///
/// Given an integer with bits [ ... x3 x2 x1 ], this inserts `dims - 1` zero
/// bits between every pair of consecutive bits, producing for `dims = 3`:
///
/// [ ... 0 0 x3 0 0 x2 0 0 x1 ]
///
/// Only the `num_bits` low-order bits of `value` are spread, higher bits are
/// ignored. The caller must make sure that `num_bits * dims <= 64`, which is
/// the width of the output.
///
/// With `dims = 1`, this only masks out the high-order bits of `value`.
///
#[inline]
pub const fn spread(value: u64, num_bits: NumBits, dims: usize) -> u64 {
    // Each bit moves from position i to position i * dims:
    // Iteration 0: [ ...  0  0  0  0  0  0  0  0 x1 ]
    // Iteration 1: [ ...  0  0  0  0  0 x2  0  0 x1 ]
    // Iteration 2: [ ...  0  0 x3  0  0 x2  0  0 x1 ]
    let mut spread = 0;
    let mut bit_idx = 0;
    while bit_idx < num_bits {
        spread |= ((value >> bit_idx) & 1) << (bit_idx as usize * dims);
        bit_idx += 1;
    }
    spread
}
