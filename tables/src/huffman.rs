//! Huffman codes for Resurrected item type codes.
//!
//! Codes are written least-significant bit first, so the first bit read is
//! bit 0 of [`HuffmanCode::bits`].

/// Longest code in the built-in table.
pub const MAX_CODE_LEN: u8 = 9;

/// One symbol and its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HuffmanCode {
    pub symbol: char,
    pub bits: u16,
    pub len: u8,
}

impl HuffmanCode {
    #[must_use]
    pub const fn new(symbol: char, bits: u16, len: u8) -> Self {
        Self { symbol, bits, len }
    }

    /// Returns `true` if this code's bits begin `other`'s.
    #[must_use]
    pub const fn is_prefix_of(&self, other: &Self) -> bool {
        if self.len > other.len || self.len >= 16 {
            return false;
        }
        let mask = (1u16 << self.len) - 1;
        other.bits & mask == self.bits & mask
    }
}

pub(crate) static HUFFMAN_CODES: [HuffmanCode; 37] = [
    HuffmanCode::new('0', 223, 8),
    HuffmanCode::new('1', 31, 7),
    HuffmanCode::new('2', 12, 6),
    HuffmanCode::new('3', 91, 7),
    HuffmanCode::new('4', 95, 8),
    HuffmanCode::new('5', 104, 8),
    HuffmanCode::new('6', 123, 7),
    HuffmanCode::new('7', 30, 5),
    HuffmanCode::new('8', 8, 6),
    HuffmanCode::new('9', 14, 5),
    HuffmanCode::new(' ', 1, 2),
    HuffmanCode::new('a', 15, 5),
    HuffmanCode::new('b', 10, 4),
    HuffmanCode::new('c', 2, 5),
    HuffmanCode::new('d', 35, 6),
    HuffmanCode::new('e', 3, 6),
    HuffmanCode::new('f', 50, 6),
    HuffmanCode::new('g', 11, 5),
    HuffmanCode::new('h', 24, 5),
    HuffmanCode::new('i', 63, 7),
    HuffmanCode::new('j', 232, 9),
    HuffmanCode::new('k', 18, 6),
    HuffmanCode::new('l', 23, 5),
    HuffmanCode::new('m', 22, 5),
    HuffmanCode::new('n', 44, 6),
    HuffmanCode::new('o', 127, 7),
    HuffmanCode::new('p', 19, 5),
    HuffmanCode::new('q', 155, 8),
    HuffmanCode::new('r', 7, 5),
    HuffmanCode::new('s', 4, 4),
    HuffmanCode::new('t', 6, 5),
    HuffmanCode::new('u', 16, 5),
    HuffmanCode::new('v', 59, 7),
    HuffmanCode::new('w', 0, 5),
    HuffmanCode::new('x', 28, 5),
    HuffmanCode::new('y', 40, 7),
    HuffmanCode::new('z', 27, 8),
];
