//! Low-level bit packing primitives for the d2s save codec.
//!
//! This crate provides [`BitWriter`] and [`BitReader`] for bit-level encoding and decoding.
//! It is designed for bounded, panic-free operation with explicit error handling.
//!
//! # Bit order
//!
//! Save files pack fields least-significant-bit first: bit 0 of the stream is
//! the low bit of byte 0, and an N-bit value contributes its low bit first.
//! Byte-aligned scalars are little-endian. This is the single [`BIT_ORDER`]
//! policy every section codec builds on.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads/writes are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about characters, items, or sections.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bitstream::{BitWriter, BitReader};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bit(true);
//! writer.write_bits(0x1ff, 9).unwrap();
//! writer.align_to_byte();
//!
//! let bytes = writer.finish();
//! assert_eq!(bytes, vec![0xff, 0x03]);
//!
//! let mut reader = BitReader::new(&bytes);
//! assert!(reader.read_bit().unwrap());
//! assert_eq!(reader.read_bits(9).unwrap(), 0x1ff);
//! ```

mod error;
mod order;
mod reader;
mod writer;

pub use error::{BitError, BitResult};
pub use order::{BitOrder, BIT_ORDER};
pub use reader::BitReader;
pub use writer::BitWriter;
