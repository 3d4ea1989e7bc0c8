//! aarch64 bit-scan backend
//!
//! AArch64 has no dedicated bit-scan instruction. Forward scans reverse the bits with `rbit` and
//! count leading zeros, reverse scans count leading zeros directly. The found flag is computed
//! with `cmp`/`cset` from the operand, matching the interface of the x86 scans.

use std::arch::asm;

use super::{BitScan, ScanResult};

/// `rbit`/`clz` based bit scans
pub(crate) struct Arm64BitScan;

impl BitScan for Arm64BitScan {
    #[inline(always)]
    fn scan_forward_32(value: u32) -> ScanResult {
        let index: u32;
        let found: u32;

        // SAFETY: only registers and flags are touched
        unsafe {
            asm!(
                "cmp {value:w}, #0",
                "cset {found:w}, ne",
                "rbit {index:w}, {value:w}",
                "clz {index:w}, {index:w}",
                value = in(reg) value,
                index = out(reg) index,
                found = out(reg) found,
                options(pure, nomem, nostack),
            );
        }

        ScanResult {
            found: found != 0,
            index,
        }
    }

    #[inline(always)]
    fn scan_forward_64(value: u64) -> ScanResult {
        let index: u64;
        let found: u32;

        // SAFETY: only registers and flags are touched
        unsafe {
            asm!(
                "cmp {value:x}, #0",
                "cset {found:w}, ne",
                "rbit {index:x}, {value:x}",
                "clz {index:x}, {index:x}",
                value = in(reg) value,
                index = out(reg) index,
                found = out(reg) found,
                options(pure, nomem, nostack),
            );
        }

        ScanResult {
            found: found != 0,
            index: index as u32,
        }
    }

    #[inline(always)]
    fn scan_reverse_32(value: u32) -> ScanResult {
        let zeros: u32;
        let found: u32;

        // SAFETY: only registers and flags are touched
        unsafe {
            asm!(
                "cmp {value:w}, #0",
                "cset {found:w}, ne",
                "clz {zeros:w}, {value:w}",
                value = in(reg) value,
                zeros = out(reg) zeros,
                found = out(reg) found,
                options(pure, nomem, nostack),
            );
        }

        ScanResult {
            found: found != 0,
            index: 31u32.wrapping_sub(zeros),
        }
    }

    #[inline(always)]
    fn scan_reverse_64(value: u64) -> ScanResult {
        let zeros: u64;
        let found: u32;

        // SAFETY: only registers and flags are touched
        unsafe {
            asm!(
                "cmp {value:x}, #0",
                "cset {found:w}, ne",
                "clz {zeros:x}, {value:x}",
                value = in(reg) value,
                zeros = out(reg) zeros,
                found = out(reg) found,
                options(pure, nomem, nostack),
            );
        }

        ScanResult {
            found: found != 0,
            index: 63u32.wrapping_sub(zeros as u32),
        }
    }
}
