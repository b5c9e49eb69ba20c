use std::io;

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that may occur when reading or writing bits and bytes.
///
/// All of them describe a violated precondition of the called
/// operation. The cursor that produced the error is left exactly
/// as it was before the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// An operation needed more data than the buffer has left.
    ///
    /// Quantities are in bytes for byte-granular operations and in
    /// bits for bit-granular operations.
    #[error("attempted to read out of bounds: requested {requested}, {available} available")]
    OutOfBounds { requested: usize, available: usize },

    /// A count, width or bit value passed by the caller is invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A byte-granular operation was used while the bit cursor is
    /// in the middle of a byte.
    #[error("bit cursor is not aligned to a byte boundary")]
    NotAligned,
}

impl From<Error> for io::Error {
    fn from(value: Error) -> Self {
        let kind = match value {
            Error::OutOfBounds { .. } => io::ErrorKind::UnexpectedEof,
            Error::InvalidArgument(_) => io::ErrorKind::InvalidInput,
            Error::NotAligned => io::ErrorKind::InvalidData,
        };

        io::Error::new(kind, value)
    }
}

#[cold]
#[inline(never)]
pub(crate) fn out_of_bounds(requested: usize, available: usize) -> Error {
    log::trace!("Rejecting read of {requested} units with only {available} left");
    Error::OutOfBounds {
        requested,
        available,
    }
}

#[cold]
#[inline(never)]
pub(crate) fn invalid_argument(reason: &'static str) -> Error {
    log::trace!("Rejecting invalid argument: {reason}");
    Error::InvalidArgument(reason)
}

#[cold]
#[inline(never)]
pub(crate) fn not_aligned(bit_position: u32) -> Error {
    log::trace!("Rejecting byte access at bit position {bit_position}");
    Error::NotAligned
}
