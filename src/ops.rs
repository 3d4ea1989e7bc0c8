//! The public bit primitives on unsigned integers.

use crate::dispatch;
use crate::width::{BitWidth, Rotation};

/// Bit primitives on fixed-width unsigned integers.
///
/// The methods use the intrinsics of the build's [backend](crate::BACKEND) where it provides
/// them, and the portable implementations everywhere else. Both produce the same results on
/// every input for which the result is specified. For use in `const` contexts, see the
/// functions in [`constant`](crate::constant), which always use the portable implementations.
///
/// `u8` and `u16` are processed as if zero-extended to 32 bits, with results reported for the
/// original width.
///
/// # Zero operands
/// [`first_set_bit`] is defined for `0` and returns `0`. [`fast_log2`], [`leading_zero_bits`]
/// and [`trailing_zero_bits`] have no specified result for `0`, just like the hardware bit scans
/// they map to. They return some value without causing undefined behavior, and panic in debug
/// builds. Callers have to handle `0` themselves.
///
/// # Example
/// ```rust
/// use bitprim::{BitPrimitives, Rotation};
///
/// assert_eq!(0b1011_u8.count_set_bits(), 3);
/// assert_eq!(0b1000_u8.first_set_bit(), 4);
/// assert_eq!(0_u64.first_set_bit(), 0);
/// assert_eq!(1_u32.fast_log2(), 0);
/// assert_eq!(0xFFFF_FFFF_u32.fast_log2(), 31);
/// assert_eq!(0b0000_0001_u8.rotate_left_bits(Rotation::constant::<1>()), 0b0000_0010);
/// ```
///
/// [`first_set_bit`]: BitPrimitives::first_set_bit
/// [`fast_log2`]: BitPrimitives::fast_log2
/// [`leading_zero_bits`]: BitPrimitives::leading_zero_bits
/// [`trailing_zero_bits`]: BitPrimitives::trailing_zero_bits
pub trait BitPrimitives: BitWidth {
    /// Number of set bits, in `0..=BITS`.
    fn count_set_bits(self) -> u32;

    /// `1` if the number of set bits is odd, `0` otherwise.
    fn parity_bits(self) -> u32;

    /// One-based index of the least significant set bit, in `1..=BITS`, or `0` if `self` is `0`.
    fn first_set_bit(self) -> u32;

    /// Index of the most significant set bit, in `0..BITS`. This is the integer base-2
    /// logarithm. The result for `0` is unspecified.
    fn fast_log2(self) -> u32;

    /// Number of zeros above the most significant set bit, in `0..BITS`.
    /// The result for `0` is unspecified.
    fn leading_zero_bits(self) -> u32;

    /// Number of zeros below the least significant set bit, in `0..BITS`.
    /// The result for `0` is unspecified.
    fn trailing_zero_bits(self) -> u32;

    /// Rotate the bits to the left by `amount`, moving the high bits to the low end.
    #[must_use]
    fn rotate_left_bits(self, amount: Rotation<Self>) -> Self;

    /// Rotate the bits to the right by `amount`, moving the low bits to the high end.
    #[must_use]
    fn rotate_right_bits(self, amount: Rotation<Self>) -> Self;
}

/// Implement [`BitPrimitives`] for a type by forwarding to the dispatch functions of its
/// promoted type `$p`. Rotations operate on `$r`, which only differs from the type itself for
/// `usize`.
macro_rules! impl_bit_primitives {
    ($($t:ty as $p:ty, rotate as $r:ty => $count:ident, $parity:ident, $ffs:ident, $log:ident, $lz:ident, $tz:ident, $rol:ident, $ror:ident;)*) => {
        $(
            #[allow(clippy::unnecessary_cast)]
            impl BitPrimitives for $t {
                #[inline(always)]
                fn count_set_bits(self) -> u32 {
                    dispatch::$count(self as $p)
                }

                #[inline(always)]
                fn parity_bits(self) -> u32 {
                    dispatch::$parity(self as $p)
                }

                #[inline(always)]
                fn first_set_bit(self) -> u32 {
                    dispatch::$ffs(self as $p)
                }

                #[inline(always)]
                fn fast_log2(self) -> u32 {
                    debug_assert!(self != 0, "fast_log2 of zero is unspecified");
                    dispatch::$log(self as $p)
                }

                #[inline(always)]
                fn leading_zero_bits(self) -> u32 {
                    debug_assert!(self != 0, "leading_zero_bits of zero is unspecified");
                    // strip the zeros added by promotion
                    dispatch::$lz(self as $p).wrapping_sub(<$p>::BITS - <$t>::BITS)
                }

                #[inline(always)]
                fn trailing_zero_bits(self) -> u32 {
                    debug_assert!(self != 0, "trailing_zero_bits of zero is unspecified");
                    dispatch::$tz(self as $p)
                }

                #[inline(always)]
                fn rotate_left_bits(self, amount: Rotation<Self>) -> Self {
                    dispatch::$rol(self as $r, amount.get()) as $t
                }

                #[inline(always)]
                fn rotate_right_bits(self, amount: Rotation<Self>) -> Self {
                    dispatch::$ror(self as $r, amount.get()) as $t
                }
            }
        )*
    };
}

impl_bit_primitives! {
    u8 as u32, rotate as u8 => count_set_bits_32, parity_bits_32, first_set_bit_32, fast_log2_32,
        leading_zero_bits_32, trailing_zero_bits_32, rotate_left_8, rotate_right_8;
    u16 as u32, rotate as u16 => count_set_bits_32, parity_bits_32, first_set_bit_32, fast_log2_32,
        leading_zero_bits_32, trailing_zero_bits_32, rotate_left_16, rotate_right_16;
    u32 as u32, rotate as u32 => count_set_bits_32, parity_bits_32, first_set_bit_32, fast_log2_32,
        leading_zero_bits_32, trailing_zero_bits_32, rotate_left_32, rotate_right_32;
    u64 as u64, rotate as u64 => count_set_bits_64, parity_bits_64, first_set_bit_64, fast_log2_64,
        leading_zero_bits_64, trailing_zero_bits_64, rotate_left_64, rotate_right_64;
}

#[cfg(target_pointer_width = "32")]
impl_bit_primitives! {
    usize as u32, rotate as u32 => count_set_bits_32, parity_bits_32, first_set_bit_32, fast_log2_32,
        leading_zero_bits_32, trailing_zero_bits_32, rotate_left_32, rotate_right_32;
}

#[cfg(target_pointer_width = "64")]
impl_bit_primitives! {
    usize as u64, rotate as u64 => count_set_bits_64, parity_bits_64, first_set_bit_64, fast_log2_64,
        leading_zero_bits_64, trailing_zero_bits_64, rotate_left_64, rotate_right_64;
}

#[cfg(test)]
mod tests;
