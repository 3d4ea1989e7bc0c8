//! Bit primitives for constant evaluation.
//!
//! Intrinsics are not guaranteed to be evaluable during compilation, so these functions always
//! use the portable implementations. They produce the same results as the methods of
//! [`BitPrimitives`](crate::BitPrimitives) and can be called anywhere, but the trait methods
//! are the faster choice at runtime.
//!
//! ```rust
//! use bitprim::constant;
//!
//! const TABLE_BITS: u32 = constant::fast_log2_u64(4096);
//! const MASK_WEIGHT: u32 = constant::count_set_bits_u16(0xF00F);
//!
//! assert_eq!(TABLE_BITS, 12);
//! assert_eq!(MASK_WEIGHT, 8);
//! ```

use crate::arch::generic;
use crate::width::Rotation;

macro_rules! gen_const_primitives {
    ($(
        $t:ty as $p:ty => $count:ident, $parity:ident, $ffs:ident, $log:ident, $lz:ident, $tz:ident, $rol:ident, $ror:ident
        using $g_count:ident, $g_parity:ident, $g_ffs:ident, $g_log:ident, $g_lz:ident, $g_tz:ident, $g_rol:ident, $g_ror:ident as $r:ty;
    )*) => {
        $(
            #[doc = concat!("Number of set bits of a `", stringify!($t), "`.")]
            #[must_use]
            #[allow(clippy::unnecessary_cast)]
            pub const fn $count(value: $t) -> u32 {
                generic::$g_count(value as $p)
            }

            #[doc = concat!("Parity of a `", stringify!($t), "`: `1` if the number of set bits is odd.")]
            #[must_use]
            #[allow(clippy::unnecessary_cast)]
            pub const fn $parity(value: $t) -> u32 {
                generic::$g_parity(value as $p)
            }

            #[doc = concat!("One-based index of the lowest set bit of a `", stringify!($t), "`, or `0` for `0`.")]
            #[must_use]
            #[allow(clippy::unnecessary_cast)]
            pub const fn $ffs(value: $t) -> u32 {
                generic::$g_ffs(value as $p)
            }

            #[doc = concat!("Index of the highest set bit of a `", stringify!($t), "`. Unspecified for `0`.")]
            #[must_use]
            #[allow(clippy::unnecessary_cast)]
            pub const fn $log(value: $t) -> u32 {
                debug_assert!(value != 0, "fast_log2 of zero is unspecified");
                generic::$g_log(value as $p)
            }

            #[doc = concat!("Leading zeros of a `", stringify!($t), "`. Unspecified for `0`.")]
            #[must_use]
            #[allow(clippy::unnecessary_cast)]
            pub const fn $lz(value: $t) -> u32 {
                debug_assert!(value != 0, "leading_zero_bits of zero is unspecified");
                generic::$g_lz(value as $p).wrapping_sub(<$p>::BITS - <$t>::BITS)
            }

            #[doc = concat!("Trailing zeros of a `", stringify!($t), "`. Unspecified for `0`.")]
            #[must_use]
            #[allow(clippy::unnecessary_cast)]
            pub const fn $tz(value: $t) -> u32 {
                debug_assert!(value != 0, "trailing_zero_bits of zero is unspecified");
                generic::$g_tz(value as $p)
            }

            #[doc = concat!("Rotate a `", stringify!($t), "` to the left.")]
            #[must_use]
            #[allow(clippy::unnecessary_cast)]
            pub const fn $rol(value: $t, amount: Rotation<$t>) -> $t {
                generic::$g_rol(value as $r, amount.get()) as $t
            }

            #[doc = concat!("Rotate a `", stringify!($t), "` to the right.")]
            #[must_use]
            #[allow(clippy::unnecessary_cast)]
            pub const fn $ror(value: $t, amount: Rotation<$t>) -> $t {
                generic::$g_ror(value as $r, amount.get()) as $t
            }
        )*
    };
}

gen_const_primitives! {
    u8 as u32 => count_set_bits_u8, parity_bits_u8, first_set_bit_u8, fast_log2_u8,
        leading_zero_bits_u8, trailing_zero_bits_u8, rotate_left_bits_u8, rotate_right_bits_u8
    using count_set_bits_32, parity_bits_32, first_set_bit_32, fast_log2_32,
        leading_zero_bits_32, trailing_zero_bits_32, rotate_left_8, rotate_right_8 as u8;

    u16 as u32 => count_set_bits_u16, parity_bits_u16, first_set_bit_u16, fast_log2_u16,
        leading_zero_bits_u16, trailing_zero_bits_u16, rotate_left_bits_u16, rotate_right_bits_u16
    using count_set_bits_32, parity_bits_32, first_set_bit_32, fast_log2_32,
        leading_zero_bits_32, trailing_zero_bits_32, rotate_left_16, rotate_right_16 as u16;

    u32 as u32 => count_set_bits_u32, parity_bits_u32, first_set_bit_u32, fast_log2_u32,
        leading_zero_bits_u32, trailing_zero_bits_u32, rotate_left_bits_u32, rotate_right_bits_u32
    using count_set_bits_32, parity_bits_32, first_set_bit_32, fast_log2_32,
        leading_zero_bits_32, trailing_zero_bits_32, rotate_left_32, rotate_right_32 as u32;

    u64 as u64 => count_set_bits_u64, parity_bits_u64, first_set_bit_u64, fast_log2_u64,
        leading_zero_bits_u64, trailing_zero_bits_u64, rotate_left_bits_u64, rotate_right_bits_u64
    using count_set_bits_64, parity_bits_64, first_set_bit_64, fast_log2_64,
        leading_zero_bits_64, trailing_zero_bits_64, rotate_left_64, rotate_right_64 as u64;
}

#[cfg(target_pointer_width = "32")]
gen_const_primitives! {
    usize as u32 => count_set_bits_usize, parity_bits_usize, first_set_bit_usize, fast_log2_usize,
        leading_zero_bits_usize, trailing_zero_bits_usize, rotate_left_bits_usize, rotate_right_bits_usize
    using count_set_bits_32, parity_bits_32, first_set_bit_32, fast_log2_32,
        leading_zero_bits_32, trailing_zero_bits_32, rotate_left_32, rotate_right_32 as u32;
}

#[cfg(target_pointer_width = "64")]
gen_const_primitives! {
    usize as u64 => count_set_bits_usize, parity_bits_usize, first_set_bit_usize, fast_log2_usize,
        leading_zero_bits_usize, trailing_zero_bits_usize, rotate_left_bits_usize, rotate_right_bits_usize
    using count_set_bits_64, parity_bits_64, first_set_bit_64, fast_log2_64,
        leading_zero_bits_64, trailing_zero_bits_64, rotate_left_64, rotate_right_64 as u64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BitPrimitives;

    const ONE_U8: Rotation<u8> = Rotation::constant::<1>();

    // evaluated during compilation
    const POPCOUNT: u32 = count_set_bits_u8(0b1011);
    const FFS: u32 = first_set_bit_u8(0b1000);
    const LOG_ONE: u32 = fast_log2_u32(1);
    const LOG_MAX: u32 = fast_log2_u32(0xFFFF_FFFF);
    const LZ: u32 = leading_zero_bits_u16(1);
    const ROL: u8 = rotate_left_bits_u8(0b0000_0001, ONE_U8);
    const ROL_WRAP: u8 = rotate_left_bits_u8(0b1000_0000, ONE_U8);

    #[test]
    fn test_const_values() {
        assert_eq!(POPCOUNT, 3);
        assert_eq!(FFS, 4);
        assert_eq!(LOG_ONE, 0);
        assert_eq!(LOG_MAX, 31);
        assert_eq!(LZ, 15);
        assert_eq!(ROL, 0b0000_0010);
        assert_eq!(ROL_WRAP, 0b0000_0001);
    }

    #[test]
    fn test_matches_runtime_exhaustive_u8() {
        for x in 0..=u8::MAX {
            assert_eq!(count_set_bits_u8(x), x.count_set_bits());
            assert_eq!(parity_bits_u8(x), x.parity_bits());
            assert_eq!(first_set_bit_u8(x), x.first_set_bit());
            if x != 0 {
                assert_eq!(fast_log2_u8(x), x.fast_log2());
                assert_eq!(leading_zero_bits_u8(x), x.leading_zero_bits());
                assert_eq!(trailing_zero_bits_u8(x), x.trailing_zero_bits());
            }
            for k in 1..8 {
                let k = Rotation::new(k).unwrap();
                assert_eq!(rotate_left_bits_u8(x, k), x.rotate_left_bits(k));
                assert_eq!(rotate_right_bits_u8(x, k), x.rotate_right_bits(k));
            }
        }
    }

    #[test]
    fn test_matches_runtime_wide() {
        let words = [1u64, 0xDEAD_BEEF, 1 << 40, u64::MAX, 0x8000_0000_0000_0001];
        for x in words {
            assert_eq!(count_set_bits_u64(x), x.count_set_bits());
            assert_eq!(first_set_bit_u64(x), x.first_set_bit());
            assert_eq!(fast_log2_u64(x), x.fast_log2());
            assert_eq!(leading_zero_bits_u64(x), x.leading_zero_bits());
            assert_eq!(trailing_zero_bits_usize(x as usize), (x as usize).trailing_zero_bits());
            assert_eq!(parity_bits_u32(x as u32), (x as u32).parity_bits());
        }
    }
}
