use bitvec::{
    order::{Lsb0, Msb0},
    vec::BitVec,
};

use crate::{
    error::{invalid_argument, not_aligned, Result},
    utils::check_width,
    BitNumbering, SignedNumberRepresentation,
};

/// A [`BitWriter`] which fills the least significant bit first.
pub type LsbBitWriter = BitWriter<Lsb0>;

/// A [`BitWriter`] which fills the most significant bit first.
pub type MsbBitWriter = BitWriter<Msb0>;

/// A buffer which enables bit-based serialization of data.
///
/// Bits are placed in the order of the numbering convention `O`,
/// mirroring what a [`BitReader`] with the same convention reads.
///
/// A byte only becomes part of the output once all 8 of its bits
/// were written or [`Self::align`] pads it with zeroes. Callers must
/// align before taking the final output, otherwise the trailing
/// partial byte is missing from it.
///
/// [`BitReader`]: crate::BitReader
#[derive(Debug)]
pub struct BitWriter<O: BitNumbering> {
    // All bits written so far. Whole bytes at the front are committed,
    // the remaining `len % 8` bits make up the byte in progress.
    inner: BitVec<u8, O>,
}

impl<O: BitNumbering> Default for BitWriter<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: BitNumbering> BitWriter<O> {
    /// Creates an empty [`BitWriter`].
    pub fn new() -> Self {
        Self {
            inner: BitVec::new(),
        }
    }

    /// Creates an empty [`BitWriter`] with room for at least `nbytes`
    /// bytes before reallocating.
    ///
    /// When the data format allows making educated guesses about
    /// size consumption, use this to optimize memory allocation.
    pub fn with_capacity(nbytes: usize) -> Self {
        Self {
            inner: BitVec::with_capacity(nbytes << 3),
        }
    }

    /// Gets the number of bits written so far, including the byte
    /// in progress.
    #[inline]
    pub fn bits_written(&self) -> usize {
        self.inner.len()
    }

    /// Indicates whether the cursor sits on a byte boundary.
    #[inline]
    pub fn is_aligned(&self) -> bool {
        self.inner.len() % u8::BITS as usize == 0
    }

    /// Gets a view of the committed bytes.
    ///
    /// The byte in progress is not part of it.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.as_raw_slice()[..self.inner.len() >> 3]
    }

    /// Consumes the [`BitWriter`] and returns the committed bytes.
    ///
    /// Bits of a byte that was not completed or padded through
    /// [`Self::align`] are discarded.
    pub fn into_inner(self) -> Vec<u8> {
        let committed = self.inner.len() >> 3;

        let mut bytes = self.inner.into_vec();
        bytes.truncate(committed);
        bytes
    }

    #[inline]
    fn ensure_aligned(&self) -> Result<()> {
        if self.is_aligned() {
            Ok(())
        } else {
            Err(not_aligned((self.inner.len() % u8::BITS as usize) as u32))
        }
    }

    /// Writes a single bit, which must be either 0 or 1.
    #[inline]
    pub fn write_bit(&mut self, bit: u8) -> Result<()> {
        match bit {
            0 | 1 => {
                self.inner.push(bit == 1);
                Ok(())
            }
            _ => Err(invalid_argument("a bit must be either 0 or 1")),
        }
    }

    /// Writes a sequence of single bits in order.
    ///
    /// Nothing is written unless every value is either 0 or 1.
    pub fn write_bits(&mut self, bits: &[u8]) -> Result<()> {
        if bits.iter().any(|&bit| bit > 1) {
            return Err(invalid_argument("a bit must be either 0 or 1"));
        }

        self.inner.extend(bits.iter().map(|&bit| bit == 1));
        Ok(())
    }

    /// Writes the low `nbits` bits of a signed `number` in the given
    /// representation.
    ///
    /// Higher bits of the representation are silently truncated, which
    /// allows packing fields narrower than [`i64`]. Widths beyond 64
    /// bits are rejected.
    #[inline]
    pub fn write_number(
        &mut self,
        number: i64,
        nbits: u32,
        representation: SignedNumberRepresentation,
    ) -> Result<()> {
        self.write_unsigned_number(representation.encode(number), nbits)
    }

    /// Writes the low `nbits` bits of an unsigned `number`.
    ///
    /// Higher bits are silently truncated. Widths beyond 64 bits are
    /// rejected.
    pub fn write_unsigned_number(&mut self, number: u64, nbits: u32) -> Result<()> {
        check_width(nbits, u64::BITS)?;

        self.inner.reserve(nbits as usize);
        for index in 0..nbits {
            let shift = O::field_shift(index, nbits);
            self.inner.push((number >> shift) & 1 != 0);
        }

        Ok(())
    }

    /// Appends a whole byte at a byte boundary.
    #[inline]
    pub fn append(&mut self, byte: u8) -> Result<()> {
        self.ensure_aligned()?;
        self.inner.extend_from_raw_slice(&[byte]);

        Ok(())
    }

    /// Appends whole bytes at a byte boundary.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.ensure_aligned()?;
        self.inner.extend_from_raw_slice(bytes);

        Ok(())
    }

    /// Pads the byte in progress with zero bits and commits it.
    ///
    /// Does nothing when the writer is already aligned.
    pub fn align(&mut self) {
        let partial = self.inner.len() % u8::BITS as usize;
        if partial != 0 {
            let pad = u8::BITS as usize - partial;
            log::trace!("Padding {pad} bits to the next byte boundary ({})", O::NAME);

            self.inner.resize(self.inner.len() + pad, false);
        }
    }
}
