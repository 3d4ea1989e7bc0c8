//! x86_64 bit-scan backend
//!
//! `bsf` and `bsr` are available on every x86_64 CPU, independently of BMI1/LZCNT. They set the
//! zero flag if the operand is zero, in which case the destination register is undefined.
//! The flag is captured with `setnz` and returned alongside the index.

use std::arch::asm;

use super::{BitScan, ScanResult};

/// `bsf`/`bsr` based bit scans
pub(crate) struct X86BitScan;

impl BitScan for X86BitScan {
    #[inline(always)]
    fn scan_forward_32(value: u32) -> ScanResult {
        let index: u32;
        let found: u8;

        // SAFETY: only registers and flags are touched
        unsafe {
            asm!(
                "bsf {index:e}, {value:e}",
                "setnz {found}",
                value = in(reg) value,
                index = lateout(reg) index,
                found = lateout(reg_byte) found,
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
        let found: u8;

        // SAFETY: only registers and flags are touched
        unsafe {
            asm!(
                "bsf {index}, {value}",
                "setnz {found}",
                value = in(reg) value,
                index = lateout(reg) index,
                found = lateout(reg_byte) found,
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
        let index: u32;
        let found: u8;

        // SAFETY: only registers and flags are touched
        unsafe {
            asm!(
                "bsr {index:e}, {value:e}",
                "setnz {found}",
                value = in(reg) value,
                index = lateout(reg) index,
                found = lateout(reg_byte) found,
                options(pure, nomem, nostack),
            );
        }

        ScanResult {
            found: found != 0,
            index,
        }
    }

    #[inline(always)]
    fn scan_reverse_64(value: u64) -> ScanResult {
        let index: u64;
        let found: u8;

        // SAFETY: only registers and flags are touched
        unsafe {
            asm!(
                "bsr {index}, {value}",
                "setnz {found}",
                value = in(reg) value,
                index = lateout(reg) index,
                found = lateout(reg_byte) found,
                options(pure, nomem, nostack),
            );
        }

        ScanResult {
            found: found != 0,
            index: index as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_forward() {
        assert!(!X86BitScan::scan_forward_32(0).found);
        assert!(!X86BitScan::scan_forward_64(0).found);

        let scan = X86BitScan::scan_forward_32(0b1011_0000);
        assert!(scan.found);
        assert_eq!(scan.index, 4);

        let scan = X86BitScan::scan_forward_64(1 << 63);
        assert!(scan.found);
        assert_eq!(scan.index, 63);
    }

    #[test]
    fn test_scan_reverse() {
        assert!(!X86BitScan::scan_reverse_32(0).found);
        assert!(!X86BitScan::scan_reverse_64(0).found);

        let scan = X86BitScan::scan_reverse_32(0b1011_0000);
        assert!(scan.found);
        assert_eq!(scan.index, 7);

        let scan = X86BitScan::scan_reverse_64(u64::MAX);
        assert!(scan.found);
        assert_eq!(scan.index, 63);

        let scan = X86BitScan::scan_reverse_64(1);
        assert!(scan.found);
        assert_eq!(scan.index, 0);
    }
}
