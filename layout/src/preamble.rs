//! The fixed leading words of every save: magic, version, size, checksum.

use crate::error::{LayoutError, LayoutResult, LimitKind};
use crate::limits::Limits;
use crate::offsets;
use crate::section::Section;
use crate::version::SaveVersion;

/// Magic number identifying save files.
pub const MAGIC: u32 = 0xaa55_aa55;

/// Size in bytes of everything before the attribute section.
pub const HEADER_SIZE: usize = offsets::ATTRIBUTES;

/// The first 16 bytes of a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preamble {
    pub version: SaveVersion,
    /// File size recorded at byte 8.
    pub file_size: u32,
    /// Checksum recorded at byte 12.
    pub checksum: u32,
}

/// Validates the file length and magic, then reads the preamble words.
///
/// The version is returned as-is; resolving it to a layout is the caller's
/// decision (see [`SaveVersion::resolve`]).
pub fn decode_preamble(buf: &[u8], limits: &Limits) -> LayoutResult<Preamble> {
    if buf.len() > limits.max_file_bytes {
        return Err(LayoutError::LimitsExceeded {
            kind: LimitKind::FileBytes,
            limit: limits.max_file_bytes,
            actual: buf.len(),
        });
    }
    if buf.len() < HEADER_SIZE {
        // Still report a bad magic first when there is enough to read it.
        if let Some(magic) = read_u32(buf, offsets::MAGIC) {
            if magic != MAGIC {
                return Err(invalid_magic(buf));
            }
        }
        return Err(LayoutError::FileTooSmall {
            actual: buf.len(),
            required: HEADER_SIZE,
        });
    }

    if read_u32(buf, offsets::MAGIC) != Some(MAGIC) {
        return Err(invalid_magic(buf));
    }

    Ok(Preamble {
        version: SaveVersion::new(read_u32(buf, offsets::VERSION).unwrap_or_default()),
        file_size: read_u32(buf, offsets::FILE_SIZE).unwrap_or_default(),
        checksum: read_u32(buf, offsets::CHECKSUM).unwrap_or_default(),
    })
}

/// Reads a little-endian `u32` at `offset`, if the buffer is long enough.
#[must_use]
pub fn read_u32(buf: &[u8], offset: usize) -> Option<u32> {
    let bytes = buf.get(offset..offset + 4)?;
    let mut word = [0u8; 4];
    word.copy_from_slice(bytes);
    Some(u32::from_le_bytes(word))
}

fn invalid_magic(buf: &[u8]) -> LayoutError {
    LayoutError::InvalidSignature {
        section: Section::Header,
        offset: offsets::MAGIC,
        found: buf.iter().take(4).copied().collect(),
    }
}
