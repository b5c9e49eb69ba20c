//! Provides cursors for bit and byte level access to in-memory buffers.
//!
//! Binary formats tend to mix whole multi-byte integers with fields
//! that are only a few bits wide. This crate provides the primitives
//! that codecs for such formats are built on:
//!
//! - [`ByteReader`] decodes bytes and fixed or variable width integers
//!   in a [`ByteOrder`] chosen at the type level.
//!
//! - [`BitReader`] decodes single bits and integers of arbitrary width
//!   under a [`BitNumbering`] convention, either [`Lsb0`] or [`Msb0`].
//!
//! - [`BitWriter`] is the mirror of [`BitReader`] and assembles an
//!   output buffer bit by bit.
//!
//! # Conventions
//!
//! Byte order only affects [`ByteReader`]. Bit numbering decides which
//! bit of a byte is consumed first and how the bits of a multi-bit
//! field are arranged:
//!
//! - With [`Lsb0`], the first bit is the least significant bit of the
//!   byte, and the first bit of a field is its least significant bit.
//!
//! - With [`Msb0`], the first bit is the most significant bit of the
//!   byte, and the first bit of a field is its most significant bit.
//!
//! # Errors
//!
//! Every operation validates its preconditions and reports violations
//! through [`Error`] without modifying cursor state. Nothing is ever
//! silently zero-filled or clamped.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use bitvec::order::{Lsb0, Msb0};
pub use byteorder::{BigEndian, ByteOrder, LittleEndian, BE, LE};

mod error;
pub use error::{Error, Result};

mod numbering;
pub use numbering::{BitNumbering, SignedNumberRepresentation};

mod byte_reader;
pub use byte_reader::{BeByteReader, ByteReader, LeByteReader};

mod bit_reader;
pub use bit_reader::{BitReader, LsbBitReader, MsbBitReader};

mod bit_writer;
pub use bit_writer::{BitWriter, LsbBitWriter, MsbBitWriter};

pub mod utils;
