//! Direct-return intrinsics.
//!
//! The integer methods of `core` are compiler intrinsics (`ctpop`, `ctlz`, `cttz`, `fshl`) that
//! lower to single instructions where the target has them, and to library routines elsewhere.
//! They return their result directly and are defined for every input.

/// Builtin bit manipulation operations
pub struct BuiltinBitOps;

impl BuiltinBitOps {
    #[inline(always)]
    pub fn count_set_bits_32(value: u32) -> u32 {
        value.count_ones()
    }

    #[inline(always)]
    pub fn count_set_bits_64(value: u64) -> u32 {
        value.count_ones()
    }

    #[inline(always)]
    pub fn parity_bits_32(value: u32) -> u32 {
        value.count_ones() & 1
    }

    #[inline(always)]
    pub fn parity_bits_64(value: u64) -> u32 {
        value.count_ones() & 1
    }

    /// One-based index of the lowest set bit, `0` for `0`.
    #[inline(always)]
    pub fn first_set_bit_32(value: u32) -> u32 {
        if value == 0 {
            0
        } else {
            value.trailing_zeros() + 1
        }
    }

    #[inline(always)]
    pub fn first_set_bit_64(value: u64) -> u32 {
        if value == 0 {
            0
        } else {
            value.trailing_zeros() + 1
        }
    }

    #[inline(always)]
    pub fn leading_zeros_32(value: u32) -> u32 {
        value.leading_zeros()
    }

    #[inline(always)]
    pub fn leading_zeros_64(value: u64) -> u32 {
        value.leading_zeros()
    }

    #[inline(always)]
    pub fn trailing_zeros_32(value: u32) -> u32 {
        value.trailing_zeros()
    }

    #[inline(always)]
    pub fn trailing_zeros_64(value: u64) -> u32 {
        value.trailing_zeros()
    }

    #[inline(always)]
    pub fn rotate_left_8(value: u8, amount: u32) -> u8 {
        value.rotate_left(amount)
    }

    #[inline(always)]
    pub fn rotate_right_8(value: u8, amount: u32) -> u8 {
        value.rotate_right(amount)
    }

    #[inline(always)]
    pub fn rotate_left_16(value: u16, amount: u32) -> u16 {
        value.rotate_left(amount)
    }

    #[inline(always)]
    pub fn rotate_right_16(value: u16, amount: u32) -> u16 {
        value.rotate_right(amount)
    }

    #[inline(always)]
    pub fn rotate_left_32(value: u32, amount: u32) -> u32 {
        value.rotate_left(amount)
    }

    #[inline(always)]
    pub fn rotate_left_64(value: u64, amount: u32) -> u64 {
        value.rotate_left(amount)
    }

    #[inline(always)]
    pub fn rotate_right_32(value: u32, amount: u32) -> u32 {
        value.rotate_right(amount)
    }

    #[inline(always)]
    pub fn rotate_right_64(value: u64, amount: u32) -> u64 {
        value.rotate_right(amount)
    }
}
