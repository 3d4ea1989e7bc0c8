//! Operand widths and the rotation amount type.

use std::fmt;
use std::marker::PhantomData;

/// Width of an operand in bits. 8- and 16-bit operands are zero-extended and handled by the
/// 32-bit algorithms, so only [`W32`] and [`W64`] have their own implementations.
///
/// [`W32`]: OperandWidth::W32
/// [`W64`]: OperandWidth::W64
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperandWidth {
    /// `u8`
    W8,
    /// `u16`
    W16,
    /// `u32`
    W32,
    /// `u64`
    W64,
}

impl OperandWidth {
    /// Number of bits in an operand of this width.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            OperandWidth::W8 => 8,
            OperandWidth::W16 => 16,
            OperandWidth::W32 => 32,
            OperandWidth::W64 => 64,
        }
    }

    /// The width whose algorithms actually process operands of this width.
    /// Narrow widths are promoted to 32 bits.
    #[must_use]
    pub const fn promoted(self) -> OperandWidth {
        match self {
            OperandWidth::W8 | OperandWidth::W16 | OperandWidth::W32 => OperandWidth::W32,
            OperandWidth::W64 => OperandWidth::W64,
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for usize {}
}

/// Unsigned integer types the primitives are defined for. This trait is sealed.
pub trait BitWidth: sealed::Sealed + Copy {
    /// The operand width of the type.
    const WIDTH: OperandWidth;

    /// Number of bits in the type.
    const BITS: u32;
}

macro_rules! impl_bit_width {
    ($($t:ty => $w:expr),*) => {
        $(
            impl BitWidth for $t {
                const WIDTH: OperandWidth = $w;
                const BITS: u32 = <$t>::BITS;
            }
        )*
    };
}

impl_bit_width!(
    u8 => OperandWidth::W8,
    u16 => OperandWidth::W16,
    u32 => OperandWidth::W32,
    u64 => OperandWidth::W64
);

#[cfg(target_pointer_width = "32")]
impl_bit_width!(usize => OperandWidth::W32);

#[cfg(target_pointer_width = "64")]
impl_bit_width!(usize => OperandWidth::W64);

/// A rotation amount for operands of type `T`. It can only hold values in `1..T::BITS`,
/// because the shift identity used for rotation is undefined for an amount of `0` or `T::BITS`.
/// Callers that need a no-op rotation have to special-case it.
///
/// # Example
/// ```rust
/// use bitprim::{BitPrimitives, Rotation};
///
/// let one = Rotation::<u8>::constant::<1>();
/// assert_eq!(0b1000_0000_u8.rotate_left_bits(one), 0b0000_0001);
///
/// assert!(Rotation::<u8>::new(0).is_none());
/// assert!(Rotation::<u8>::new(8).is_none());
/// ```
pub struct Rotation<T: BitWidth> {
    amount: u32,
    _width: PhantomData<T>,
}

impl<T: BitWidth> Rotation<T> {
    /// Create a rotation amount. Returns `None` if `amount` is `0` or not smaller than the
    /// width of `T`.
    #[must_use]
    pub const fn new(amount: u32) -> Option<Self> {
        if amount >= 1 && amount < T::BITS {
            Some(Self {
                amount,
                _width: PhantomData,
            })
        } else {
            None
        }
    }

    /// Create a rotation amount that is checked at compile time. Using an amount outside of
    /// `1..T::BITS` fails the build.
    #[must_use]
    pub const fn constant<const K: u32>() -> Self {
        const { assert!(K >= 1 && K < T::BITS, "rotation amount must be in 1..width") };
        Self {
            amount: K,
            _width: PhantomData,
        }
    }

    /// The rotation amount in bits.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.amount
    }
}

// manual impls, so `T` itself does not need to implement the traits
impl<T: BitWidth> Clone for Rotation<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: BitWidth> Copy for Rotation<T> {}

impl<T: BitWidth> PartialEq for Rotation<T> {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount
    }
}

impl<T: BitWidth> Eq for Rotation<T> {}

impl<T: BitWidth> fmt::Debug for Rotation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Rotation").field(&self.amount).finish()
    }
}
