//! Bit-level reader with bounded operations.

use crate::error::{BitError, BitResult};
use crate::order::{BitOrder, BIT_ORDER};

/// A bit-level reader for decoding packed binary data.
///
/// All read operations are bounds-checked and return errors on failure.
/// The reader never panics on malformed input.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    bit_pos: usize,
    order: BitOrder,
}

impl<'a> BitReader<'a> {
    /// Creates a new `BitReader` using the format's [`BIT_ORDER`].
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self::with_order(data, BIT_ORDER)
    }

    /// Creates a new `BitReader` with an explicit bit order.
    #[must_use]
    pub const fn with_order(data: &'a [u8], order: BitOrder) -> Self {
        Self {
            data,
            bit_pos: 0,
            order,
        }
    }

    /// Returns the number of bits remaining to read.
    #[must_use]
    pub const fn bits_remaining(&self) -> usize {
        self.data
            .len()
            .saturating_mul(8)
            .saturating_sub(self.bit_pos)
    }

    /// Returns `true` if there are no more bits to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits_remaining() == 0
    }

    /// Returns the current bit position.
    #[must_use]
    pub const fn bit_position(&self) -> usize {
        self.bit_pos
    }

    /// Returns the index of the byte containing the next bit.
    #[must_use]
    pub const fn byte_position(&self) -> usize {
        self.bit_pos / 8
    }

    /// Returns `true` if the cursor sits on a byte boundary.
    #[must_use]
    pub const fn is_aligned(&self) -> bool {
        self.bit_pos % 8 == 0
    }

    /// Reads a single bit as a boolean.
    pub fn read_bit(&mut self) -> BitResult<bool> {
        let byte = self.data.get(self.bit_pos / 8).copied().ok_or(
            BitError::UnexpectedEof {
                requested: 1,
                available: 0,
            },
        )?;
        let bit = (byte >> self.order.shift(self.bit_pos)) & 1;
        self.bit_pos += 1;
        Ok(bit == 1)
    }

    /// Reads up to 64 bits as an unsigned integer.
    pub fn read_bits(&mut self, bits: u8) -> BitResult<u64> {
        if bits > 64 {
            return Err(BitError::InvalidBitCount {
                bits: usize::from(bits),
                max_bits: 64,
            });
        }
        self.ensure_bits(usize::from(bits))?;

        let mut value = 0u64;
        for i in 0..bits {
            let bit = u64::from(self.read_bit()?);
            value = match self.order {
                BitOrder::Lsb0 => value | (bit << i),
                BitOrder::Msb0 => (value << 1) | bit,
            };
        }
        Ok(value)
    }

    /// Reads up to 64 bits without advancing the cursor.
    pub fn peek_bits(&self, bits: u8) -> BitResult<u64> {
        self.clone().read_bits(bits)
    }

    /// Aligns to the next byte boundary, returning the skipped padding bits.
    ///
    /// The padding is returned as a value of `8 - bit_position % 8` bits so
    /// callers can reproduce it on encode.
    pub fn align_to_byte(&mut self) -> BitResult<u8> {
        let rem = self.bit_pos % 8;
        if rem == 0 {
            return Ok(0);
        }
        let skip = 8 - rem;
        let padding = self.read_bits(skip as u8)?;
        Ok(padding as u8)
    }

    /// Reads a byte-aligned span of `len` bytes.
    pub fn read_bytes(&mut self, len: usize) -> BitResult<&'a [u8]> {
        let span = self.peek_bytes(len)?;
        self.bit_pos += len * 8;
        Ok(span)
    }

    /// Returns the next `len` byte-aligned bytes without advancing.
    pub fn peek_bytes(&self, len: usize) -> BitResult<&'a [u8]> {
        self.ensure_aligned()?;
        self.ensure_bits(len.saturating_mul(8))?;
        let start = self.bit_pos / 8;
        let data: &'a [u8] = self.data;
        data.get(start..start + len).ok_or(BitError::UnexpectedEof {
            requested: len * 8,
            available: self.bits_remaining(),
        })
    }

    /// Reads a byte-aligned `u8`.
    pub fn read_u8_aligned(&mut self) -> BitResult<u8> {
        let bytes = self.read_aligned_bytes::<1>()?;
        Ok(bytes[0])
    }

    /// Reads a byte-aligned `u16` (little-endian).
    pub fn read_u16_aligned(&mut self) -> BitResult<u16> {
        let bytes = self.read_aligned_bytes::<2>()?;
        Ok(u16::from_le_bytes(bytes))
    }

    /// Reads a byte-aligned `u32` (little-endian).
    pub fn read_u32_aligned(&mut self) -> BitResult<u32> {
        let bytes = self.read_aligned_bytes::<4>()?;
        Ok(u32::from_le_bytes(bytes))
    }

    fn ensure_aligned(&self) -> BitResult<()> {
        if !self.is_aligned() {
            return Err(BitError::MisalignedAccess {
                bit_position: self.bit_pos,
            });
        }
        Ok(())
    }

    fn ensure_bits(&self, bits: usize) -> BitResult<()> {
        let available = self.bits_remaining();
        if bits > available {
            return Err(BitError::UnexpectedEof {
                requested: bits,
                available,
            });
        }
        Ok(())
    }

    fn read_aligned_bytes<const N: usize>(&mut self) -> BitResult<[u8; N]> {
        let span = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(span);
        Ok(out)
    }
}
