//! Portable fallback implementations.
//!
//! Everything in here only uses shifts, masks, multiplication and table lookups, and is a
//! `const fn`, so it is available on every target and during constant evaluation.
//! Operands narrower than 32 bits are zero-extended by the caller and handled by the 32-bit
//! functions.

/// De Bruijn sequence B(2, 5). Multiplying it with a power of two and keeping the top 5 bits
/// yields a unique index for every exponent.
const DEBRUIJN_32: u32 = 0x077C_B531;

/// De Bruijn sequence B(2, 6), the 64-bit counterpart of [`DEBRUIJN_32`].
const DEBRUIJN_64: u64 = 0x03F7_9D71_B4CB_0A89;

/// Maps the top 5 bits of `(1 << k) * DEBRUIJN_32` back to `k`.
const DEBRUIJN_INDEX_32: [u8; 32] = calculate_index_table_32();

/// Maps the top 6 bits of `(1 << k) * DEBRUIJN_64` back to `k`.
const DEBRUIJN_INDEX_64: [u8; 64] = calculate_index_table_64();

/// Parity of every nibble value.
const NIBBLE_PARITY: [u8; 16] = [0, 1, 1, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 1, 1, 0];

const fn calculate_index_table_32() -> [u8; 32] {
    let mut table = [0u8; 32];
    let mut k = 0;
    while k < 32 {
        table[((1u32 << k).wrapping_mul(DEBRUIJN_32) >> 27) as usize] = k as u8;
        k += 1;
    }
    table
}

const fn calculate_index_table_64() -> [u8; 64] {
    let mut table = [0u8; 64];
    let mut k = 0;
    while k < 64 {
        table[((1u64 << k).wrapping_mul(DEBRUIJN_64) >> 58) as usize] = k as u8;
        k += 1;
    }
    table
}

/// Index of the single set bit in `bit`. `bit` must be a power of two.
#[inline(always)]
const fn single_bit_index_32(bit: u32) -> u32 {
    DEBRUIJN_INDEX_32[(bit.wrapping_mul(DEBRUIJN_32) >> 27) as usize] as u32
}

#[inline(always)]
const fn single_bit_index_64(bit: u64) -> u32 {
    DEBRUIJN_INDEX_64[(bit.wrapping_mul(DEBRUIJN_64) >> 58) as usize] as u32
}

/// Population count by summing bits in parallel: pairs, then nibbles, then bytes, and finally
/// summing all bytes into the top byte with a multiplication.
#[inline]
pub const fn count_set_bits_32(value: u32) -> u32 {
    let mut x = value;
    x -= (x >> 1) & 0x5555_5555;
    x = (x & 0x3333_3333) + ((x >> 2) & 0x3333_3333);
    x = (x + (x >> 4)) & 0x0F0F_0F0F;
    x.wrapping_mul(0x0101_0101) >> 24
}

#[inline]
pub const fn count_set_bits_64(value: u64) -> u32 {
    count_set_bits_32(value as u32) + count_set_bits_32((value >> 32) as u32)
}

/// Parity by folding the word onto its lowest nibble and looking the nibble up.
#[inline]
pub const fn parity_bits_32(value: u32) -> u32 {
    let mut x = value;
    x ^= x >> 16;
    x ^= x >> 8;
    x ^= x >> 4;
    NIBBLE_PARITY[(x & 0xF) as usize] as u32
}

#[inline]
pub const fn parity_bits_64(value: u64) -> u32 {
    parity_bits_32((value ^ (value >> 32)) as u32)
}

/// One-based index of the lowest set bit, or `0` if `value` is `0`.
#[inline]
pub const fn first_set_bit_32(value: u32) -> u32 {
    if value == 0 {
        return 0;
    }

    // the two's complement `!x + 1` of `x` shares only the lowest set bit with `x`
    single_bit_index_32(value & (!value).wrapping_add(1)) + 1
}

#[inline]
pub const fn first_set_bit_64(value: u64) -> u32 {
    let low = value as u32;
    if low == 0 {
        let high = first_set_bit_32((value >> 32) as u32);
        if high == 0 {
            0
        } else {
            32 + high
        }
    } else {
        first_set_bit_32(low)
    }
}

/// Index of the most significant set bit. Returns `0` for `0`, which is indistinguishable
/// from the result for `1`.
#[inline]
pub const fn fast_log2_32(value: u32) -> u32 {
    // smear the msb into all lower bits, then keep only the msb
    let mut x = value;
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    single_bit_index_32(x ^ (x >> 1))
}

#[inline]
pub const fn fast_log2_64(value: u64) -> u32 {
    let mut x = value;
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    x |= x >> 32;
    single_bit_index_64(x ^ (x >> 1))
}

/// The result for `0` is unspecified. Narrower operands zero-extended to 32 bits have to
/// subtract the added zeros.
#[inline]
pub const fn leading_zero_bits_32(value: u32) -> u32 {
    31 - fast_log2_32(value)
}

#[inline]
pub const fn leading_zero_bits_64(value: u64) -> u32 {
    63 - fast_log2_64(value)
}

/// The result for `0` is unspecified.
#[inline]
pub const fn trailing_zero_bits_32(value: u32) -> u32 {
    first_set_bit_32(value).wrapping_sub(1)
}

#[inline]
pub const fn trailing_zero_bits_64(value: u64) -> u32 {
    first_set_bit_64(value).wrapping_sub(1)
}

macro_rules! gen_rotations {
    ($($left:ident, $right:ident: $t:ty;)*) => {
        $(
            /// Rotate left by `amount`, which must be in `1..BITS`.
            #[inline]
            pub const fn $left(value: $t, amount: u32) -> $t {
                (value << amount) | (value >> (<$t>::BITS - amount))
            }

            /// Rotate right by `amount`, which must be in `1..BITS`.
            #[inline]
            pub const fn $right(value: $t, amount: u32) -> $t {
                (value >> amount) | (value << (<$t>::BITS - amount))
            }
        )*
    };
}

gen_rotations! {
    rotate_left_8, rotate_right_8: u8;
    rotate_left_16, rotate_right_16: u16;
    rotate_left_32, rotate_right_32: u32;
    rotate_left_64, rotate_right_64: u64;
}

/// The fallback in the shape of a bit-scan backend, for targets without one.
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub struct GenericBitScan;

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
impl super::BitScan for GenericBitScan {
    fn scan_forward_32(value: u32) -> super::ScanResult {
        super::ScanResult {
            found: value != 0,
            index: trailing_zero_bits_32(value),
        }
    }

    fn scan_forward_64(value: u64) -> super::ScanResult {
        super::ScanResult {
            found: value != 0,
            index: trailing_zero_bits_64(value),
        }
    }

    fn scan_reverse_32(value: u32) -> super::ScanResult {
        super::ScanResult {
            found: value != 0,
            index: fast_log2_32(value),
        }
    }

    fn scan_reverse_64(value: u64) -> super::ScanResult {
        super::ScanResult {
            found: value != 0,
            index: fast_log2_64(value),
        }
    }
}
