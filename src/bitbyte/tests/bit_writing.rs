mod common;

use bitbyte::{Error, LsbBitWriter, MsbBitWriter, Result, SignedNumberRepresentation};

#[test]
fn single_bits_fill_bytes() -> Result<()> {
    let bits = [1, 1, 0, 0, 0, 0, 0, 0];

    let mut lsb = LsbBitWriter::new();
    lsb.write_bits(&bits)?;
    assert_eq!(lsb.data(), &[0b0000_0011]);

    let mut msb = MsbBitWriter::new();
    for bit in bits {
        msb.write_bit(bit)?;
    }
    assert_eq!(msb.data(), &[0b1100_0000]);

    Ok(())
}

#[test]
fn write_primitives() -> Result<()> {
    let mut lsb = LsbBitWriter::new();
    lsb.write_unsigned_number(0xFF, u8::BITS)?;
    lsb.write_unsigned_number(0xDEAD, u16::BITS)?;
    lsb.write_unsigned_number(0xFF, u8::BITS)?;
    assert_eq!(lsb.data(), &[0xFF, 0xAD, 0xDE, 0xFF]);

    let mut msb = MsbBitWriter::new();
    msb.write_unsigned_number(0xDEAD, u16::BITS)?;
    msb.write_unsigned_number(u64::MAX, 4)?;
    msb.write_unsigned_number(0, 4)?;
    assert_eq!(msb.into_inner(), [0xDE, 0xAD, 0xF0]);

    Ok(())
}

#[test]
fn truncates_wide_numbers() -> Result<()> {
    let mut lsb = LsbBitWriter::new();
    lsb.write_unsigned_number(0b10110, 3)?;
    lsb.align();
    assert_eq!(lsb.data(), &[0b0000_0110]);

    let mut msb = MsbBitWriter::new();
    msb.write_unsigned_number(0b10110, 3)?;
    msb.align();
    assert_eq!(msb.data(), &[0b1100_0000]);

    Ok(())
}

#[test]
fn signed_numbers() -> Result<()> {
    let mut lsb = LsbBitWriter::new();
    lsb.write_number(-2, 4, SignedNumberRepresentation::TwoComplement)?;
    lsb.write_number(0, 4, SignedNumberRepresentation::default())?;
    lsb.write_number(i64::MIN, 64, SignedNumberRepresentation::default())?;
    assert_eq!(
        lsb.data(),
        &[0x0E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80]
    );

    let mut msb = MsbBitWriter::new();
    msb.write_number(-1, 4, SignedNumberRepresentation::default())?;
    msb.write_number(5, 4, SignedNumberRepresentation::default())?;
    assert_eq!(msb.data(), &[0xF5]);

    Ok(())
}

#[test]
fn partial_bytes_are_not_committed() -> Result<()> {
    let mut writer = LsbBitWriter::new();

    writer.write_unsigned_number(0xAB, 8)?;
    writer.write_bits(&[1, 0, 1])?;
    assert_eq!(writer.bits_written(), 11);
    assert_eq!(writer.data(), &[0xAB]);
    assert!(!writer.is_aligned());

    writer.align();
    assert!(writer.is_aligned());
    assert_eq!(writer.data(), &[0xAB, 0b101]);

    // A second alignment has nothing left to pad.
    writer.align();
    assert_eq!(writer.bits_written(), 16);

    writer.write_bit(1)?;
    assert_eq!(writer.into_inner(), [0xAB, 0b101]);

    Ok(())
}

#[test]
fn write_bytes_and_alignment() -> Result<()> {
    let mut writer = LsbBitWriter::with_capacity(5);

    writer.write_bit(1)?;
    assert_eq!(writer.bits_written(), 1);

    writer.align();

    writer.append(3)?;
    assert_eq!(writer.bits_written(), 16);

    writer.write_bit(0)?;
    writer.write_bit(1)?;

    writer.align();

    writer.write_bytes(&[4, 5])?;

    assert_eq!(writer.data(), &[1, 3, 2, 4, 5]);

    Ok(())
}

#[test]
fn byte_access_requires_alignment() {
    common::init_logging();

    let mut writer = MsbBitWriter::default();
    assert_eq!(writer.write_bit(1), Ok(()));

    assert_eq!(writer.append(0xFF), Err(Error::NotAligned));
    assert_eq!(writer.write_bytes(&[0xFF]), Err(Error::NotAligned));
    assert_eq!(writer.bits_written(), 1);

    writer.align();
    assert_eq!(writer.append(0x7F), Ok(()));
    assert_eq!(writer.data(), &[0x80, 0x7F]);
}

#[test]
fn rejects_invalid_arguments() {
    common::init_logging();

    let mut writer = LsbBitWriter::new();

    assert!(matches!(writer.write_bit(2), Err(Error::InvalidArgument(_))));
    assert!(matches!(writer.write_bits(&[1, 0, 7]), Err(Error::InvalidArgument(_))));
    assert!(matches!(
        writer.write_unsigned_number(1, 65),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        writer.write_number(-1, 65, SignedNumberRepresentation::default()),
        Err(Error::InvalidArgument(_))
    ));

    assert_eq!(writer.bits_written(), 0);
}

#[test]
fn zero_width_writes_nothing() -> Result<()> {
    let mut writer = MsbBitWriter::new();

    writer.write_unsigned_number(u64::MAX, 0)?;
    writer.write_number(-1, 0, SignedNumberRepresentation::default())?;
    writer.write_bits(&[])?;

    assert_eq!(writer.bits_written(), 0);
    assert!(writer.into_inner().is_empty());

    Ok(())
}
