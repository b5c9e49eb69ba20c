use std::marker::PhantomData;

use bitvec::{
    order::{Lsb0, Msb0},
    view::BitView,
};
use byteorder::ByteOrder;

use crate::{
    error::{not_aligned, out_of_bounds, Result},
    utils::check_width,
    BitNumbering, ByteReader, SignedNumberRepresentation,
};

/// A [`BitReader`] which visits the least significant bit first.
pub type LsbBitReader<'a> = BitReader<'a, Lsb0>;

/// A [`BitReader`] which visits the most significant bit first.
pub type MsbBitReader<'a> = BitReader<'a, Msb0>;

macro_rules! impl_read_field {
    ($($(#[$doc:meta])* $read_fn:ident(nbits) -> $ty:ty),* $(,)?) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $read_fn(&mut self, nbits: u32) -> Result<$ty> {
                check_width(nbits, <$ty>::BITS)?;
                self.ensure_bits(nbits as usize)?;

                // Cannot truncate: at most `<$ty>::BITS` bits were assembled.
                Ok(self.read_field(nbits) as $ty)
            }
        )*
    };
}

/// A cursor which decodes single bits and bit fields from a byte
/// slice.
///
/// Bits are visited in the order of the numbering convention `O`,
/// which also decides how the bits of a multi-bit field are
/// combined; see [`BitNumbering`].
///
/// Whole bytes can be read directly when the cursor sits on a byte
/// boundary. [`Self::align`] skips ahead to the next one.
///
/// Operations that fail leave the cursor where it was.
#[derive(Clone, Debug)]
pub struct BitReader<'a, O> {
    // The bytes being decoded.
    data: &'a [u8],

    // Index of the byte that holds the next bit.
    offset: usize,

    // Number of bits already consumed from the byte at `offset`.
    // Always in `0..8`, with 0 meaning the cursor is aligned.
    bit: u32,

    _o: PhantomData<O>,
}

impl<'a, O: BitNumbering> BitReader<'a, O> {
    /// Creates a new [`BitReader`] positioned at the start of `data`.
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: 0,
            bit: 0,
            _o: PhantomData,
        }
    }

    /// Creates a [`BitReader`] that continues at the current offset
    /// of a [`ByteReader`].
    pub fn from_byte_reader<E: ByteOrder>(reader: ByteReader<'a, E>) -> Self {
        Self {
            data: reader.data(),
            offset: reader.offset(),
            bit: 0,
            _o: PhantomData,
        }
    }

    /// Creates a [`ByteReader`] that continues at the current byte
    /// offset of this reader.
    ///
    /// Fails when the cursor is not aligned.
    pub fn byte_reader<E: ByteOrder>(&self) -> Result<ByteReader<'a, E>> {
        self.ensure_aligned()?;
        Ok(ByteReader::with_offset(self.data, self.offset))
    }

    /// Gets the total size of the underlying buffer in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Gets the index of the byte that holds the next bit.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Gets the number of bits consumed so far.
    #[inline]
    pub fn bits_read(&self) -> usize {
        (self.offset << 3) + self.bit as usize
    }

    /// Gets the number of bits which are still available.
    #[inline]
    pub fn bits_left(&self) -> usize {
        (self.data.len() << 3) - self.bits_read()
    }

    /// Indicates whether the cursor sits on a byte boundary.
    #[inline]
    pub fn is_aligned(&self) -> bool {
        self.bit == 0
    }

    /// Indicates whether all bits have been read.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.offset >= self.data.len()
    }

    #[inline]
    fn ensure_bits(&self, count: usize) -> Result<()> {
        let left = self.bits_left();
        if count <= left {
            Ok(())
        } else {
            Err(out_of_bounds(count, left))
        }
    }

    #[inline]
    fn ensure_aligned(&self) -> Result<()> {
        if self.is_aligned() {
            Ok(())
        } else {
            Err(not_aligned(self.bit))
        }
    }

    // Consumes the next bit. Callers must check availability first.
    #[inline(always)]
    fn next_bit(&mut self) -> bool {
        let value = self.data.view_bits::<O>()[self.bits_read()];

        self.bit += 1;
        if self.bit == u8::BITS {
            self.bit = 0;
            self.offset += 1;
        }

        value
    }

    // Assembles the next `nbits` bits, at most 64, into a field value.
    // Callers must check availability first.
    #[inline]
    fn read_field(&mut self, nbits: u32) -> u64 {
        let mut value = 0;
        for index in 0..nbits {
            value |= (self.next_bit() as u64) << O::field_shift(index, nbits);
        }

        value
    }

    /// Reads a single bit, either 0 or 1.
    #[inline]
    pub fn bit(&mut self) -> Result<u8> {
        self.ensure_bits(1)?;
        Ok(self.next_bit() as u8)
    }

    /// Reads `count` single bits in the order they are visited.
    ///
    /// Nothing is consumed unless all of them are available.
    pub fn bits(&mut self, count: usize) -> Result<Vec<u8>> {
        self.ensure_bits(count)?;
        Ok((0..count).map(|_| self.next_bit() as u8).collect())
    }

    /// Reads an unsigned `nbits` wide field.
    ///
    /// Reading 0 bits yields 0 and consumes nothing.
    #[inline]
    pub fn uint(&mut self, nbits: u32) -> Result<u64> {
        self.uint64_from_bits(nbits)
    }

    /// Reads a signed `nbits` wide field in the given representation.
    ///
    /// Reading 0 bits yields 0 and consumes nothing.
    #[inline]
    pub fn int(&mut self, nbits: u32, representation: SignedNumberRepresentation) -> Result<i64> {
        self.uint(nbits).map(|raw| representation.decode(raw, nbits))
    }

    // fn $read_fn(&mut self, nbits: u32) -> Result<$ty>
    impl_read_field! {
        /// Reads an `nbits` wide field into a [`u8`].
        byte_from_bits(nbits) -> u8,
        /// Reads an `nbits` wide field into a [`u16`].
        uint16_from_bits(nbits) -> u16,
        /// Reads an `nbits` wide field into a [`u32`].
        uint32_from_bits(nbits) -> u32,
        /// Reads an `nbits` wide field into a [`u64`].
        uint64_from_bits(nbits) -> u64,
    }

    /// Reads a whole byte at a byte boundary.
    #[inline]
    pub fn byte(&mut self) -> Result<u8> {
        self.ensure_aligned()?;
        match self.data.get(self.offset) {
            Some(&value) => {
                self.offset += 1;
                Ok(value)
            }
            None => Err(out_of_bounds(1, 0)),
        }
    }

    /// Reads `count` whole bytes at a byte boundary.
    ///
    /// These are borrowed from the underlying buffer without
    /// copying them.
    pub fn bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        self.ensure_aligned()?;

        let left = self.data.len() - self.offset;
        if count <= left {
            let chunk = &self.data[self.offset..self.offset + count];
            self.offset += count;

            Ok(chunk)
        } else {
            Err(out_of_bounds(count, left))
        }
    }

    /// Skips the unread bits of the current byte, if any.
    #[inline]
    pub fn align(&mut self) {
        if self.bit != 0 {
            self.bit = 0;
            self.offset += 1;
        }
    }
}
