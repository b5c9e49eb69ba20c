//! Miscellaneous utilities for working with bits.

use crate::error::{invalid_argument, Result};

/// Sign-extends an `nbits` wide value to [`i64`].
///
/// A width of 0 yields 0; widths above 64 are treated as 64.
#[inline]
pub fn sign_extend(value: u64, nbits: u32) -> i64 {
    if nbits == 0 {
        return 0;
    }

    let shift = u64::BITS.saturating_sub(nbits);
    (value << shift) as i64 >> shift
}

/// Keeps only the low `nbits` bits of `value`.
#[inline]
pub fn truncate(value: u64, nbits: u32) -> u64 {
    if nbits >= u64::BITS {
        value
    } else {
        value & ((1 << nbits) - 1)
    }
}

/// Rejects bit widths which do not fit into an integer of `max` bits.
#[inline]
pub(crate) fn check_width(nbits: u32, max: u32) -> Result<()> {
    if nbits <= max {
        Ok(())
    } else {
        Err(invalid_argument("bit count exceeds the width of the target integer"))
    }
}
