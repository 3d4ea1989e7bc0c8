//! Dispatch layer.
//!
//! Every public runtime operation ends up in one of the functions here. Each of them looks up
//! its [`Path`] in a constant, so the `match` on it is resolved during compilation, and then
//! calls the native form of the backend or the portable fallback. Bit-scan results are
//! translated into the conventions of the fallback: `first_set_bit` is one-based and `0` for a
//! zero operand, while `fast_log2`, `leading_zero_bits` and `trailing_zero_bits` stay unspecified
//! for zero.
//!
//! Operands of 8 and 16 bits arrive here zero-extended to 32 bits. Only rotations have
//! dedicated narrow forms.

use crate::arch::builtin::BuiltinBitOps;
use crate::arch::{
    generic, select, ArchBitScan, BitScan, EvaluationContext, IntrinsicBackend, Op, Path,
    ScanResult,
};
use crate::width::OperandWidth;

/// Generate the entry points, which bind the `*_on` implementations to the path selected for
/// runtime evaluation.
macro_rules! gen_dispatch {
    ($($name:ident($($arg:ident: $t:ty),*) -> $ret:ty => $on:ident, $op:ident, $w:ident;)*) => {
        $(
            #[inline(always)]
            pub(crate) fn $name($($arg: $t),*) -> $ret {
                const PATH: Path = select(Op::$op, OperandWidth::$w, EvaluationContext::Runtime);
                $on(PATH, $($arg),*)
            }
        )*
    };
}

gen_dispatch! {
    count_set_bits_32(value: u32) -> u32 => count_set_bits_32_on, CountSetBits, W32;
    count_set_bits_64(value: u64) -> u32 => count_set_bits_64_on, CountSetBits, W64;
    parity_bits_32(value: u32) -> u32 => parity_bits_32_on, ParityBits, W32;
    parity_bits_64(value: u64) -> u32 => parity_bits_64_on, ParityBits, W64;
    first_set_bit_32(value: u32) -> u32 => first_set_bit_32_on, FirstSetBit, W32;
    first_set_bit_64(value: u64) -> u32 => first_set_bit_64_on, FirstSetBit, W64;
    fast_log2_32(value: u32) -> u32 => fast_log2_32_on, FastLog2, W32;
    fast_log2_64(value: u64) -> u32 => fast_log2_64_on, FastLog2, W64;
    leading_zero_bits_32(value: u32) -> u32 => leading_zero_bits_32_on, LeadingZeroBits, W32;
    leading_zero_bits_64(value: u64) -> u32 => leading_zero_bits_64_on, LeadingZeroBits, W64;
    trailing_zero_bits_32(value: u32) -> u32 => trailing_zero_bits_32_on, TrailingZeroBits, W32;
    trailing_zero_bits_64(value: u64) -> u32 => trailing_zero_bits_64_on, TrailingZeroBits, W64;
    rotate_left_8(value: u8, amount: u32) -> u8 => rotate_left_8_on, RotateLeftBits, W8;
    rotate_left_16(value: u16, amount: u32) -> u16 => rotate_left_16_on, RotateLeftBits, W16;
    rotate_left_32(value: u32, amount: u32) -> u32 => rotate_left_32_on, RotateLeftBits, W32;
    rotate_left_64(value: u64, amount: u32) -> u64 => rotate_left_64_on, RotateLeftBits, W64;
    rotate_right_8(value: u8, amount: u32) -> u8 => rotate_right_8_on, RotateRightBits, W8;
    rotate_right_16(value: u16, amount: u32) -> u16 => rotate_right_16_on, RotateRightBits, W16;
    rotate_right_32(value: u32, amount: u32) -> u32 => rotate_right_32_on, RotateRightBits, W32;
    rotate_right_64(value: u64, amount: u32) -> u64 => rotate_right_64_on, RotateRightBits, W64;
}

/// One-based index from a forward scan, `0` if nothing was found.
#[inline(always)]
fn first_set_bit_from_scan(scan: ScanResult) -> u32 {
    if scan.found {
        scan.index + 1
    } else {
        0
    }
}

/// Leading zeros of a `bits`-wide operand from a reverse scan. Unspecified if nothing was found.
#[inline(always)]
fn leading_zero_bits_from_scan(scan: ScanResult, bits: u32) -> u32 {
    (bits - 1).wrapping_sub(scan.index)
}

/// The bit-scan backend implemented by [`ArchBitScan`] on this target, if any.
#[cfg(target_arch = "x86_64")]
const ARCH_BIT_SCAN: Option<IntrinsicBackend> = Some(IntrinsicBackend::BitScanX86);

/// The bit-scan backend implemented by [`ArchBitScan`] on this target, if any.
#[cfg(target_arch = "aarch64")]
const ARCH_BIT_SCAN: Option<IntrinsicBackend> = Some(IntrinsicBackend::BitScanArm);

/// The bit-scan backend implemented by [`ArchBitScan`] on this target, if any.
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
const ARCH_BIT_SCAN: Option<IntrinsicBackend> = None;

/// Whether `path` names the bit scans of this target. Bit scans of another architecture
/// cannot run here and take the fallback.
#[inline(always)]
fn is_bit_scan(path: Path) -> bool {
    match path {
        Path::Native(backend) => matches!(ARCH_BIT_SCAN, Some(arch) if arch == backend),
        Path::Fallback => false,
    }
}

#[inline(always)]
pub(crate) fn count_set_bits_32_on(path: Path, value: u32) -> u32 {
    match path {
        Path::Native(IntrinsicBackend::Builtin) => BuiltinBitOps::count_set_bits_32(value),
        _ => generic::count_set_bits_32(value),
    }
}

#[inline(always)]
pub(crate) fn count_set_bits_64_on(path: Path, value: u64) -> u32 {
    match path {
        Path::Native(IntrinsicBackend::Builtin) => BuiltinBitOps::count_set_bits_64(value),
        _ => generic::count_set_bits_64(value),
    }
}

#[inline(always)]
pub(crate) fn parity_bits_32_on(path: Path, value: u32) -> u32 {
    match path {
        Path::Native(IntrinsicBackend::Builtin) => BuiltinBitOps::parity_bits_32(value),
        _ => generic::parity_bits_32(value),
    }
}

#[inline(always)]
pub(crate) fn parity_bits_64_on(path: Path, value: u64) -> u32 {
    match path {
        Path::Native(IntrinsicBackend::Builtin) => BuiltinBitOps::parity_bits_64(value),
        _ => generic::parity_bits_64(value),
    }
}

#[inline(always)]
pub(crate) fn first_set_bit_32_on(path: Path, value: u32) -> u32 {
    match path {
        Path::Native(IntrinsicBackend::Builtin) => BuiltinBitOps::first_set_bit_32(value),
        p if is_bit_scan(p) => first_set_bit_from_scan(ArchBitScan::scan_forward_32(value)),
        _ => generic::first_set_bit_32(value),
    }
}

#[inline(always)]
pub(crate) fn first_set_bit_64_on(path: Path, value: u64) -> u32 {
    match path {
        Path::Native(IntrinsicBackend::Builtin) => BuiltinBitOps::first_set_bit_64(value),
        p if is_bit_scan(p) => first_set_bit_from_scan(ArchBitScan::scan_forward_64(value)),
        _ => generic::first_set_bit_64(value),
    }
}

#[inline(always)]
pub(crate) fn fast_log2_32_on(path: Path, value: u32) -> u32 {
    match path {
        Path::Native(IntrinsicBackend::Builtin) => {
            31u32.wrapping_sub(BuiltinBitOps::leading_zeros_32(value))
        }
        p if is_bit_scan(p) => ArchBitScan::scan_reverse_32(value).index,
        _ => generic::fast_log2_32(value),
    }
}

#[inline(always)]
pub(crate) fn fast_log2_64_on(path: Path, value: u64) -> u32 {
    match path {
        Path::Native(IntrinsicBackend::Builtin) => {
            63u32.wrapping_sub(BuiltinBitOps::leading_zeros_64(value))
        }
        p if is_bit_scan(p) => ArchBitScan::scan_reverse_64(value).index,
        _ => generic::fast_log2_64(value),
    }
}

#[inline(always)]
pub(crate) fn leading_zero_bits_32_on(path: Path, value: u32) -> u32 {
    match path {
        Path::Native(IntrinsicBackend::Builtin) => BuiltinBitOps::leading_zeros_32(value),
        p if is_bit_scan(p) => leading_zero_bits_from_scan(ArchBitScan::scan_reverse_32(value), 32),
        _ => generic::leading_zero_bits_32(value),
    }
}

#[inline(always)]
pub(crate) fn leading_zero_bits_64_on(path: Path, value: u64) -> u32 {
    match path {
        Path::Native(IntrinsicBackend::Builtin) => BuiltinBitOps::leading_zeros_64(value),
        p if is_bit_scan(p) => leading_zero_bits_from_scan(ArchBitScan::scan_reverse_64(value), 64),
        _ => generic::leading_zero_bits_64(value),
    }
}

#[inline(always)]
pub(crate) fn trailing_zero_bits_32_on(path: Path, value: u32) -> u32 {
    match path {
        Path::Native(IntrinsicBackend::Builtin) => BuiltinBitOps::trailing_zeros_32(value),
        p if is_bit_scan(p) => ArchBitScan::scan_forward_32(value).index,
        _ => generic::trailing_zero_bits_32(value),
    }
}

#[inline(always)]
pub(crate) fn trailing_zero_bits_64_on(path: Path, value: u64) -> u32 {
    match path {
        Path::Native(IntrinsicBackend::Builtin) => BuiltinBitOps::trailing_zeros_64(value),
        p if is_bit_scan(p) => ArchBitScan::scan_forward_64(value).index,
        _ => generic::trailing_zero_bits_64(value),
    }
}

macro_rules! gen_rotate_on {
    ($($name:ident => $native:ident, $fallback:ident: $t:ty;)*) => {
        $(
            #[inline(always)]
            pub(crate) fn $name(path: Path, value: $t, amount: u32) -> $t {
                debug_assert!(amount >= 1 && amount < <$t>::BITS, "rotation amount out of range");
                match path {
                    Path::Native(IntrinsicBackend::Builtin) => BuiltinBitOps::$native(value, amount),
                    _ => generic::$fallback(value, amount),
                }
            }
        )*
    };
}

gen_rotate_on! {
    rotate_left_8_on => rotate_left_8, rotate_left_8: u8;
    rotate_left_16_on => rotate_left_16, rotate_left_16: u16;
    rotate_left_32_on => rotate_left_32, rotate_left_32: u32;
    rotate_left_64_on => rotate_left_64, rotate_left_64: u64;
    rotate_right_8_on => rotate_right_8, rotate_right_8: u8;
    rotate_right_16_on => rotate_right_16, rotate_right_16: u16;
    rotate_right_32_on => rotate_right_32, rotate_right_32: u32;
    rotate_right_64_on => rotate_right_64, rotate_right_64: u64;
}
