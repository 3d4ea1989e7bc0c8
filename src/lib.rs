#![warn(missing_docs)]

//! This crate provides fixed-width bit primitives for unsigned integers: population count,
//! parity, index of the lowest set bit, integer log2, leading and trailing zero counts, and
//! rotations. They are meant as building blocks for succinct data structures (rank and select
//! on bit vectors), hashing and compression, where they sit on the hottest paths.
//!
//! # Primitives
//! All operations are methods of the [`BitPrimitives`] trait, which is implemented for `u8`,
//! `u16`, `u32`, `u64` and `usize`. For constant evaluation, the [`constant`] module provides
//! the same operations as `const fn`s.
//!
//! ```rust
//! use bitprim::{BitPrimitives, Rotation};
//!
//! let word = 0b0110_1000_u64;
//! assert_eq!(word.count_set_bits(), 3);
//! assert_eq!(word.first_set_bit(), 4);
//! assert_eq!(word.fast_log2(), 6);
//! assert_eq!(word.rotate_right_bits(Rotation::constant::<3>()), 0b1101);
//! ```
//!
//! # Intrinsics
//! Every operation has a portable implementation that only uses shifts, masks, multiplications
//! and small lookup tables. Where the build has access to intrinsics for an operation, they are
//! used instead. The choice is made once per build, see [`IntrinsicBackend::detect`], and
//! costs nothing per call:
//!  - [`Builtin`][IntrinsicBackend::Builtin]: the integer intrinsics of `core`, which compile
//!    to `popcnt`, `lzcnt` and `tzcnt` on x86_64 (given the target features), and to `cnt`
//!    and `clz` on aarch64. This is the default.
//!  - [`BitScanX86`][IntrinsicBackend::BitScanX86] / [`BitScanArm`][IntrinsicBackend::BitScanArm]:
//!    bit scans reporting a found flag (`bsf`/`bsr`, resp. `rbit`/`clz`). Selected with the
//!    `bitscan` feature. They have no population count or parity, which use the portable
//!    implementation instead.
//!  - [`None`][IntrinsicBackend::None]: forced by the `portable` feature, and always used when
//!    running under Miri.
//!
//! Both paths produce identical results for every input where the result is specified.
//!
//! # Zero operands
//! [`first_set_bit`](BitPrimitives::first_set_bit) returns `0` for a zero operand.
//! [`fast_log2`](BitPrimitives::fast_log2), [`leading_zero_bits`](BitPrimitives::leading_zero_bits)
//! and [`trailing_zero_bits`](BitPrimitives::trailing_zero_bits) have no specified result for
//! zero, mirroring hardware bit scans. Debug builds panic on a zero operand.
//!
//! # Safety
//! The only unsafe code is the inline assembly of the bit-scan backends, which only reads and
//! writes registers.

pub use arch::{
    is_accelerated, select, select_with, EvaluationContext, IntrinsicBackend, Op, Path, BACKEND,
};
pub use ops::BitPrimitives;
pub use width::{BitWidth, OperandWidth, Rotation};

pub mod arch;
pub mod constant;

mod dispatch;
mod ops;
mod width;
