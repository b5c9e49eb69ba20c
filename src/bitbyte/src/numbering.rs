use bitvec::order::{BitOrder, Lsb0, Msb0};

use crate::utils::sign_extend;

mod private {
    pub trait Sealed {}

    impl Sealed for super::Lsb0 {}
    impl Sealed for super::Msb0 {}
}

/// A bit numbering convention for bit-granular cursors.
///
/// This decides two things at once: which bit of a byte is visited
/// first (through the [`BitOrder`] supertrait) and at which position
/// the bits of a multi-bit field are placed.
///
/// Implemented for [`Lsb0`] and [`Msb0`] only.
pub trait BitNumbering: BitOrder + private::Sealed {
    /// Human-readable name of the convention.
    const NAME: &'static str;

    /// Gets the shift of the `index`-th visited bit inside of an
    /// `nbits` wide field.
    ///
    /// `index` must be smaller than `nbits`.
    fn field_shift(index: u32, nbits: u32) -> u32;
}

impl BitNumbering for Lsb0 {
    const NAME: &'static str = "LSB 0";

    #[inline(always)]
    fn field_shift(index: u32, _nbits: u32) -> u32 {
        index
    }
}

impl BitNumbering for Msb0 {
    const NAME: &'static str = "MSB 0";

    #[inline(always)]
    fn field_shift(index: u32, nbits: u32) -> u32 {
        nbits - 1 - index
    }
}

/// The representation of signed numbers in bit fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SignedNumberRepresentation {
    /// Two's complement, where the top bit of a field carries
    /// the negative weight.
    #[default]
    TwoComplement,
}

impl SignedNumberRepresentation {
    /// Interprets the low `nbits` bits of `raw` as a signed number.
    #[inline]
    pub(crate) fn decode(self, raw: u64, nbits: u32) -> i64 {
        match self {
            Self::TwoComplement => sign_extend(raw, nbits),
        }
    }

    /// Gets the bit pattern which represents `value`.
    ///
    /// Only the low bits of the result matter to the caller.
    #[inline]
    pub(crate) fn encode(self, value: i64) -> u64 {
        match self {
            Self::TwoComplement => value as u64,
        }
    }
}
