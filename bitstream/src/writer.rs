//! Bit-level writer for encoding packed binary data.

use crate::error::{BitError, BitResult};
use crate::order::{BitOrder, BIT_ORDER};

/// A bit-level writer for encoding packed binary data.
///
/// Writes are accumulated in a growable buffer. Call [`finish`](Self::finish)
/// to get the final byte buffer.
#[derive(Debug)]
pub struct BitWriter {
    /// The accumulated bytes; the last one may be partially filled.
    bytes: Vec<u8>,
    /// Total number of bits written.
    bit_len: usize,
    order: BitOrder,
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl BitWriter {
    /// Creates a new empty `BitWriter` using the format's [`BIT_ORDER`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_order(BIT_ORDER)
    }

    /// Creates a new empty `BitWriter` with an explicit bit order.
    #[must_use]
    pub const fn with_order(order: BitOrder) -> Self {
        Self {
            bytes: Vec::new(),
            bit_len: 0,
            order,
        }
    }

    /// Creates a new `BitWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
            bit_len: 0,
            order: BIT_ORDER,
        }
    }

    /// Returns the number of bits written so far.
    #[must_use]
    pub const fn bits_written(&self) -> usize {
        self.bit_len
    }

    /// Returns `true` if the next write starts on a byte boundary.
    #[must_use]
    pub const fn is_aligned(&self) -> bool {
        self.bit_len % 8 == 0
    }

    /// Writes a single bit.
    pub fn write_bit(&mut self, value: bool) {
        if self.is_aligned() {
            self.bytes.push(0);
        }
        if value {
            let shift = self.order.shift(self.bit_len);
            if let Some(last) = self.bytes.last_mut() {
                *last |= 1 << shift;
            }
        }
        self.bit_len += 1;
    }

    /// Writes up to 64 bits from an unsigned integer.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidBitCount`] if `bits > 64`.
    /// Returns [`BitError::ValueOutOfRange`] if `value` doesn't fit in `bits`.
    pub fn write_bits(&mut self, value: u64, bits: u8) -> BitResult<()> {
        if bits > 64 {
            return Err(BitError::InvalidBitCount {
                bits: usize::from(bits),
                max_bits: 64,
            });
        }
        if bits < 64 && value >= (1u64 << bits) {
            return Err(BitError::ValueOutOfRange {
                value,
                bits: usize::from(bits),
            });
        }

        match self.order {
            BitOrder::Lsb0 => {
                for i in 0..bits {
                    self.write_bit((value >> i) & 1 == 1);
                }
            }
            BitOrder::Msb0 => {
                for i in (0..bits).rev() {
                    self.write_bit((value >> i) & 1 == 1);
                }
            }
        }
        Ok(())
    }

    /// Pads with zero bits up to the next byte boundary.
    pub fn align_to_byte(&mut self) {
        self.bit_len = self.bytes.len() * 8;
    }

    /// Fills the rest of the current byte with `padding`.
    ///
    /// This is the inverse of [`BitReader::align_to_byte`](crate::BitReader::align_to_byte).
    pub fn align_with(&mut self, padding: u8) -> BitResult<()> {
        let rem = self.bit_len % 8;
        if rem == 0 {
            if padding != 0 {
                return Err(BitError::ValueOutOfRange {
                    value: u64::from(padding),
                    bits: 0,
                });
            }
            return Ok(());
        }
        self.write_bits(u64::from(padding), (8 - rem) as u8)
    }

    /// Writes a byte-aligned span.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> BitResult<()> {
        self.ensure_aligned()?;
        self.bytes.extend_from_slice(bytes);
        self.bit_len += bytes.len() * 8;
        Ok(())
    }

    /// Writes a byte-aligned `u8`.
    pub fn write_u8_aligned(&mut self, value: u8) -> BitResult<()> {
        self.write_bytes(&[value])
    }

    /// Writes a byte-aligned `u16` (little-endian).
    pub fn write_u16_aligned(&mut self, value: u16) -> BitResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a byte-aligned `u32` (little-endian).
    pub fn write_u32_aligned(&mut self, value: u32) -> BitResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Finishes writing and returns the byte buffer.
    ///
    /// An incomplete last byte keeps zeros in its unwritten bits.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }

    /// Finishes writing and appends to the provided buffer.
    pub fn finish_into(mut self, buf: &mut Vec<u8>) {
        buf.append(&mut self.bytes);
    }

    fn ensure_aligned(&self) -> BitResult<()> {
        if !self.is_aligned() {
            return Err(BitError::MisalignedAccess {
                bit_position: self.bit_len,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_writer() {
        let writer = BitWriter::new();
        assert_eq!(writer.bits_written(), 0);
        let bytes = writer.finish();
        assert!(bytes.is_empty());
    }

    #[test]
    fn write_single_bit_true() {
        let mut writer = BitWriter::new();
        writer.write_bit(true);
        assert_eq!(writer.bits_written(), 1);
        assert_eq!(writer.finish(), vec![0b0000_0001]);
    }

    #[test]
    fn write_single_bit_msb0() {
        let mut writer = BitWriter::with_order(BitOrder::Msb0);
        writer.write_bit(true);
        assert_eq!(writer.finish(), vec![0b1000_0000]);
    }

    #[test]
    fn write_bits_lsb_first() {
        let mut writer = BitWriter::new();
        writer.write_bits(0x1ff, 9).unwrap();
        writer.write_bits(0b101, 3).unwrap();
        assert_eq!(writer.finish(), vec![0xff, 0b0000_1011]);
    }

    #[test]
    fn write_bits_zero() {
        let mut writer = BitWriter::new();
        writer.write_bits(0, 0).unwrap();
        assert_eq!(writer.bits_written(), 0);
        assert!(writer.finish().is_empty());
    }

    #[test]
    fn write_bits_across_byte_boundary_msb0() {
        let mut writer = BitWriter::with_order(BitOrder::Msb0);
        writer.write_bits(0b1111, 4).unwrap();
        writer.write_bits(0b1010_1010, 8).unwrap();
        // 1111 + 10101010 = 1111_1010 1010_0000
        assert_eq!(writer.finish(), vec![0b1111_1010, 0b1010_0000]);
    }

    #[test]
    fn write_bits_invalid_count() {
        let mut writer = BitWriter::new();
        let result = writer.write_bits(0, 65);
        assert!(matches!(
            result,
            Err(BitError::InvalidBitCount {
                bits: 65,
                max_bits: 64
            })
        ));
    }

    #[test]
    fn write_bits_value_out_of_range() {
        let mut writer = BitWriter::new();
        let result = writer.write_bits(256, 8);
        assert!(matches!(
            result,
            Err(BitError::ValueOutOfRange {
                value: 256,
                bits: 8
            })
        ));
    }

    #[test]
    fn write_bits_64_bits() {
        let mut writer = BitWriter::new();
        writer.write_bits(u64::MAX, 64).unwrap();
        assert_eq!(writer.finish(), vec![0xFF; 8]);
    }

    #[test]
    fn align_pads_with_zeros() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b111, 3).unwrap();
        writer.align_to_byte();
        assert_eq!(writer.bits_written(), 8);
        writer.write_u8_aligned(0xab).unwrap();
        assert_eq!(writer.finish(), vec![0b0000_0111, 0xab]);
    }

    #[test]
    fn align_with_restores_padding() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b001, 3).unwrap();
        writer.align_with(0b10100).unwrap();
        assert_eq!(writer.finish(), vec![0b1010_0001]);
    }

    #[test]
    fn align_with_rejects_oversized_padding() {
        let mut writer = BitWriter::new();
        writer.write_bits(0, 6).unwrap();
        assert!(writer.align_with(0b100).is_err());

        let mut aligned = BitWriter::new();
        assert!(aligned.align_with(1).is_err());
        assert!(aligned.align_with(0).is_ok());
    }

    #[test]
    fn write_bytes_requires_alignment() {
        let mut writer = BitWriter::new();
        writer.write_bit(true);
        assert!(matches!(
            writer.write_bytes(b"gf"),
            Err(BitError::MisalignedAccess { bit_position: 1 })
        ));
    }

    #[test]
    fn aligned_scalars_are_little_endian() {
        let mut writer = BitWriter::new();
        writer.write_u32_aligned(0xaa55_aa55).unwrap();
        writer.write_u16_aligned(0x012a).unwrap();
        assert_eq!(writer.finish(), vec![0x55, 0xaa, 0x55, 0xaa, 0x2a, 0x01]);
    }

    #[test]
    fn finish_into_appends() {
        let mut writer = BitWriter::new();
        writer.write_bits(0xAB, 8).unwrap();

        let mut buf = vec![0x00, 0x11];
        writer.finish_into(&mut buf);
        assert_eq!(buf, vec![0x00, 0x11, 0xAB]);
    }

    #[test]
    fn writer_default() {
        let writer = BitWriter::default();
        assert_eq!(writer.bits_written(), 0);
        let _ = BitWriter::with_capacity(765);
    }
}
