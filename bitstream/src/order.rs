//! The bit and byte ordering policy shared by every section codec.

/// How bits are numbered inside a byte and how multi-bit values are packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOrder {
    /// Bit 0 is the least significant bit of a byte; values are packed low
    /// bits first.
    Lsb0,
    /// Bit 0 is the most significant bit of a byte; values are packed high
    /// bits first.
    Msb0,
}

impl BitOrder {
    /// Returns the shift that selects bit `index` (0..8) within a byte.
    #[must_use]
    pub const fn shift(self, index: usize) -> usize {
        match self {
            Self::Lsb0 => index % 8,
            Self::Msb0 => 7 - index % 8,
        }
    }
}

/// The save format's ordering: LSB-first within each byte, multi-bit values
/// low bits first, byte-aligned scalars little-endian.
///
/// [`BitReader::new`](crate::BitReader::new) and
/// [`BitWriter::new`](crate::BitWriter::new) use this policy; no codec picks
/// its own.
pub const BIT_ORDER: BitOrder = BitOrder::Lsb0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lsb0_shift_counts_from_low_bit() {
        assert_eq!(BitOrder::Lsb0.shift(0), 0);
        assert_eq!(BitOrder::Lsb0.shift(7), 7);
        assert_eq!(BitOrder::Lsb0.shift(9), 1);
    }

    #[test]
    fn msb0_shift_counts_from_high_bit() {
        assert_eq!(BitOrder::Msb0.shift(0), 7);
        assert_eq!(BitOrder::Msb0.shift(7), 0);
    }

    #[test]
    fn format_policy_is_lsb0() {
        assert_eq!(BIT_ORDER, BitOrder::Lsb0);
    }
}
