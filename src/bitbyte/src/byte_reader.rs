use std::{marker::PhantomData, mem::size_of};

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::{invalid_argument, out_of_bounds, Result};

/// A [`ByteReader`] which decodes little-endian integers.
pub type LeByteReader<'a> = ByteReader<'a, LittleEndian>;

/// A [`ByteReader`] which decodes big-endian integers.
pub type BeByteReader<'a> = ByteReader<'a, BigEndian>;

macro_rules! impl_read_fixed {
    ($($(#[$doc:meta])* $read_fn:ident() -> $ty:ty = $order_fn:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $read_fn(&mut self) -> Result<$ty> {
                self.take(size_of::<$ty>()).map(E::$order_fn)
            }
        )*
    };
}

macro_rules! impl_read_var {
    ($($(#[$doc:meta])* $read_fn:ident(count) -> $ty:ty),* $(,)?) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $read_fn(&mut self, count: usize) -> Result<$ty> {
                if count > size_of::<$ty>() {
                    return Err(invalid_argument("byte count exceeds the width of the target integer"));
                }

                // Cannot truncate: at most `size_of::<$ty>()` bytes were assembled.
                self.uint_from_bytes(count).map(|v| v as $ty)
            }
        )*
    };
}

/// A cursor which decodes bytes and integers from a byte slice.
///
/// Multi-byte integers are assembled in the byte order `E`, which is
/// fixed for the lifetime of the reader. The cursor only ever moves
/// forward.
///
/// Operations that fail leave the cursor where it was.
#[derive(Clone, Debug)]
pub struct ByteReader<'a, E> {
    // The bytes being decoded.
    data: &'a [u8],

    // Index of the next byte to read. Never exceeds `data.len()`.
    offset: usize,

    _e: PhantomData<E>,
}

impl<'a, E: ByteOrder> ByteReader<'a, E> {
    /// Creates a new [`ByteReader`] positioned at the start of `data`.
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: 0,
            _e: PhantomData,
        }
    }

    // Continues reading `data` at a byte offset another cursor has
    // already validated.
    pub(crate) const fn with_offset(data: &'a [u8], offset: usize) -> Self {
        Self {
            data,
            offset,
            _e: PhantomData,
        }
    }

    /// Gets the whole underlying buffer, including consumed bytes.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Gets the total size of the underlying buffer in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Gets the index of the next byte to be read.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Gets the number of bytes consumed so far.
    #[inline]
    pub fn bytes_read(&self) -> usize {
        self.offset
    }

    /// Gets the number of bytes which are still available.
    #[inline]
    pub fn bytes_left(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Indicates whether all bytes have been read.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.offset >= self.data.len()
    }

    #[inline]
    fn take(&mut self, count: usize) -> Result<&'a [u8]> {
        match self.offset.checked_add(count) {
            Some(end) if end <= self.data.len() => {
                let chunk = &self.data[self.offset..end];
                self.offset = end;

                Ok(chunk)
            }
            _ => Err(out_of_bounds(count, self.bytes_left())),
        }
    }

    // Assembles `count` bytes, at most 8, into an unsigned value.
    #[inline]
    fn uint_from_bytes(&mut self, count: usize) -> Result<u64> {
        if count == 0 {
            return Ok(0);
        }

        self.take(count).map(|chunk| E::read_uint(chunk, count))
    }

    /// Reads a single byte.
    #[inline]
    pub fn byte(&mut self) -> Result<u8> {
        match self.data.get(self.offset) {
            Some(&value) => {
                self.offset += 1;
                Ok(value)
            }
            None => Err(out_of_bounds(1, 0)),
        }
    }

    /// Reads `count` raw bytes.
    ///
    /// These are borrowed from the underlying buffer without
    /// copying them. Reading 0 bytes always succeeds.
    #[inline]
    pub fn bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        self.take(count)
    }

    /// Reads an integer stored in `count` bytes.
    ///
    /// The bytes are assembled in the reader's byte order and are not
    /// sign-extended, so e.g. three `0xFF` bytes yield `0xFF_FFFF`. Only
    /// a full 8 byte value can come out negative.
    ///
    /// Reading 0 bytes yields 0. More than 8 bytes do not fit into the
    /// result and are rejected with [`Error::InvalidArgument`].
    ///
    /// [`Error::InvalidArgument`]: crate::Error::InvalidArgument
    #[inline]
    pub fn int(&mut self, count: usize) -> Result<i64> {
        if count > size_of::<i64>() {
            return Err(invalid_argument("byte count exceeds the width of the target integer"));
        }

        self.uint_from_bytes(count).map(|v| v as i64)
    }

    // fn $read_fn(&mut self) -> Result<$ty>
    impl_read_fixed! {
        /// Reads a [`u16`] value from 2 bytes.
        uint16() -> u16 = read_u16,
        /// Reads a [`u32`] value from 4 bytes.
        uint32() -> u32 = read_u32,
        /// Reads a [`u64`] value from 8 bytes.
        uint64() -> u64 = read_u64,
    }

    // fn $read_fn(&mut self, count: usize) -> Result<$ty>
    impl_read_var! {
        /// Reads a [`u16`] value stored in `count` bytes.
        ///
        /// `count` may not exceed 2; reading 0 bytes yields 0.
        uint16_from_bytes(count) -> u16,
        /// Reads a [`u32`] value stored in `count` bytes.
        ///
        /// `count` may not exceed 4; reading 0 bytes yields 0.
        uint32_from_bytes(count) -> u32,
        /// Reads a [`u64`] value stored in `count` bytes.
        ///
        /// `count` may not exceed 8; reading 0 bytes yields 0.
        uint64_from_bytes(count) -> u64,
    }
}
