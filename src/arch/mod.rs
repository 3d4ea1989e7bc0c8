//! Capability descriptor and backends.
//!
//! Which intrinsic backend is used is a property of the build: it is resolved by
//! [`IntrinsicBackend::detect`] from the target and the crate features, and stored in
//! [`BACKEND`]. The dispatch layer only ever branches on constants derived from it, so the
//! selection costs nothing at runtime.

use crate::width::OperandWidth;

/// Portable fallback implementations, available on every target and in const contexts
pub(crate) mod generic;

/// Direct-return backend using the integer intrinsics of `core`
pub(crate) mod builtin;

#[cfg(target_arch = "x86_64")]
pub(crate) mod x86_64;

#[cfg(target_arch = "aarch64")]
pub(crate) mod aarch64;

#[cfg(all(
    feature = "bitscan",
    not(feature = "portable"),
    not(any(target_arch = "x86_64", target_arch = "aarch64"))
))]
compile_error!("the `bitscan` feature requires an x86_64 or aarch64 target");

/// The family of intrinsics used for native execution of the primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntrinsicBackend {
    /// No intrinsics, everything uses the portable fallback.
    None,

    /// Direct-return intrinsics (`count_ones`, `leading_zeros`, `trailing_zeros`) for 32 and 64
    /// bit operands. These lower to `popcnt`/`lzcnt`/`tzcnt` or `cnt`/`clz` where the target
    /// supports them. Rotations of every width use `rotate_left`/`rotate_right` (`rol`/`ror`),
    /// so this backend has a native form of every operation.
    Builtin,

    /// x86_64 `bsf`/`bsr` instructions. They report whether a bit was found through the zero
    /// flag and write the index to a register, which stays undefined for a zero operand.
    /// No population count or parity.
    BitScanX86,

    /// aarch64 bit scans composed from `rbit` and `clz`, reporting a found flag alongside the
    /// index. No population count or parity.
    BitScanArm,
}

impl IntrinsicBackend {
    /// Resolve the backend for the current build. The `portable` feature and interpreted
    /// execution under Miri disable intrinsics entirely. The `bitscan` feature selects the
    /// bit-scan backend of the target architecture. Otherwise the builtin backend is used.
    #[must_use]
    pub const fn detect() -> Self {
        if cfg!(any(feature = "portable", miri)) {
            IntrinsicBackend::None
        } else if cfg!(all(feature = "bitscan", target_arch = "x86_64")) {
            IntrinsicBackend::BitScanX86
        } else if cfg!(all(feature = "bitscan", target_arch = "aarch64")) {
            IntrinsicBackend::BitScanArm
        } else {
            IntrinsicBackend::Builtin
        }
    }

    /// Whether the backend provides a native form of `op`.
    #[must_use]
    pub const fn supports(self, op: Op) -> bool {
        match self {
            IntrinsicBackend::None => false,
            IntrinsicBackend::Builtin => true,
            IntrinsicBackend::BitScanX86 | IntrinsicBackend::BitScanArm => matches!(
                op,
                Op::FirstSetBit | Op::FastLog2 | Op::LeadingZeroBits | Op::TrailingZeroBits
            ),
        }
    }
}

/// The backend of this build.
pub const BACKEND: IntrinsicBackend = IntrinsicBackend::detect();

/// The primitive operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Op {
    /// Population count
    CountSetBits,
    /// Parity of the population count
    ParityBits,
    /// One-based index of the lowest set bit
    FirstSetBit,
    /// Index of the highest set bit
    FastLog2,
    /// Leading zeros
    LeadingZeroBits,
    /// Trailing zeros
    TrailingZeroBits,
    /// Left rotation
    RotateLeftBits,
    /// Right rotation
    RotateRightBits,
}

impl Op {
    /// All operations, in declaration order.
    pub const ALL: [Op; 8] = [
        Op::CountSetBits,
        Op::ParityBits,
        Op::FirstSetBit,
        Op::FastLog2,
        Op::LeadingZeroBits,
        Op::TrailingZeroBits,
        Op::RotateLeftBits,
        Op::RotateRightBits,
    ];
}

/// The context a primitive is evaluated in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvaluationContext {
    /// Evaluation during compilation (`const` items, `const fn` bodies). Intrinsics are never
    /// used here.
    CompileTimeConstant,

    /// Ordinary execution.
    Runtime,
}

/// The implementation a primitive call is routed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Path {
    /// The portable implementations, which are also used in const contexts.
    Fallback,

    /// The native form of the given backend.
    Native(IntrinsicBackend),
}

/// Select the implementation for an operation on operands of the given width in the given
/// context, using the backend of this build.
#[must_use]
pub const fn select(op: Op, width: OperandWidth, context: EvaluationContext) -> Path {
    select_with(BACKEND, op, width, context)
}

/// Like [`select`], but for an arbitrary backend.
///
/// Every backend has native forms for both promoted widths, so the width does not change the
/// decision.
#[must_use]
pub const fn select_with(
    backend: IntrinsicBackend,
    op: Op,
    _width: OperandWidth,
    context: EvaluationContext,
) -> Path {
    match context {
        EvaluationContext::CompileTimeConstant => Path::Fallback,
        EvaluationContext::Runtime => {
            if backend.supports(op) {
                Path::Native(backend)
            } else {
                Path::Fallback
            }
        }
    }
}

/// Whether a native form is used for the operation on the given width in the given context.
#[must_use]
pub const fn is_accelerated(op: Op, width: OperandWidth, context: EvaluationContext) -> bool {
    matches!(select(op, width, context), Path::Native(_))
}

/// Result of a bit scan: whether a set bit was found, and its zero-based index if so.
/// The index is unspecified if nothing was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ScanResult {
    /// Whether the operand had any set bit.
    pub(crate) found: bool,

    /// Zero-based index of the found bit.
    pub(crate) index: u32,
}

/// Backends that locate set bits through a scan reporting a found flag.
pub(crate) trait BitScan {
    /// Locate the least significant set bit.
    fn scan_forward_32(value: u32) -> ScanResult;

    /// Locate the least significant set bit.
    fn scan_forward_64(value: u64) -> ScanResult;

    /// Locate the most significant set bit.
    fn scan_reverse_32(value: u32) -> ScanResult;

    /// Locate the most significant set bit.
    fn scan_reverse_64(value: u64) -> ScanResult;
}

/// The bit-scan backend of the target architecture.
#[cfg(target_arch = "x86_64")]
pub(crate) type ArchBitScan = x86_64::X86BitScan;

/// The bit-scan backend of the target architecture.
#[cfg(target_arch = "aarch64")]
pub(crate) type ArchBitScan = aarch64::Arm64BitScan;

/// The bit-scan backend of the target architecture. This target has none, so this is the
/// portable fallback wearing the bit-scan interface. It is never selected by [`BACKEND`].
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub(crate) type ArchBitScan = generic::GenericBitScan;

/// Every backend that can run on this target.
#[cfg(test)]
pub(crate) fn available_backends() -> Vec<IntrinsicBackend> {
    let mut backends = vec![IntrinsicBackend::None, IntrinsicBackend::Builtin];
    if cfg!(target_arch = "x86_64") {
        backends.push(IntrinsicBackend::BitScanX86);
    }
    if cfg!(target_arch = "aarch64") {
        backends.push(IntrinsicBackend::BitScanArm);
    }
    backends
}
