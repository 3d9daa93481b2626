//! The rolling checksum stored at byte 12.
//!
//! The sum walks every byte of the file with the checksum field read as zero:
//! the accumulator is rotated left by one bit, then the byte is added.

use crate::error::{LayoutError, LayoutResult};
use crate::offsets;
use crate::preamble::{read_u32, HEADER_SIZE};

const CHECKSUM_RANGE: std::ops::Range<usize> = offsets::CHECKSUM..offsets::CHECKSUM + 4;

/// Computes the checksum of `buf`, treating the checksum field as zero.
#[must_use]
pub fn compute(buf: &[u8]) -> u32 {
    buf.iter().enumerate().fold(0u32, |sum, (idx, &byte)| {
        let byte = if CHECKSUM_RANGE.contains(&idx) { 0 } else { byte };
        sum.rotate_left(1).wrapping_add(u32::from(byte))
    })
}

/// Returns the checksum stored in `buf`, if the field is present.
#[must_use]
pub fn stored(buf: &[u8]) -> Option<u32> {
    read_u32(buf, offsets::CHECKSUM)
}

/// Checks the stored checksum against the contents.
pub fn verify(buf: &[u8]) -> LayoutResult<()> {
    let stored = stored(buf).ok_or(LayoutError::FileTooSmall {
        actual: buf.len(),
        required: HEADER_SIZE,
    })?;
    let computed = compute(buf);
    if stored != computed {
        return Err(LayoutError::ChecksumMismatch { stored, computed });
    }
    Ok(())
}

/// Writes the file size and checksum fields in place, returning the checksum.
pub fn patch(buf: &mut [u8]) -> LayoutResult<u32> {
    if buf.len() < HEADER_SIZE {
        return Err(LayoutError::FileTooSmall {
            actual: buf.len(),
            required: HEADER_SIZE,
        });
    }
    let size = u32::try_from(buf.len()).map_err(|_| LayoutError::FileSizeMismatch {
        stored: u32::MAX,
        actual: buf.len(),
    })?;
    buf[offsets::FILE_SIZE..offsets::FILE_SIZE + 4].copy_from_slice(&size.to_le_bytes());
    let checksum = compute(buf);
    buf[CHECKSUM_RANGE].copy_from_slice(&checksum.to_le_bytes());
    Ok(checksum)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 31 % 251) as u8).collect()
    }

    /// Byte-at-a-time form of the rotate-and-add sum.
    fn reference(buf: &[u8]) -> u32 {
        let mut sum = 0u32;
        for (idx, &byte) in buf.iter().enumerate() {
            let mut byte = if (12..16).contains(&idx) { 0 } else { u32::from(byte) };
            if sum & 0x8000_0000 != 0 {
                byte += 1;
            }
            sum = byte.wrapping_add(sum << 1);
        }
        sum
    }

    #[test]
    fn compute_matches_reference() {
        let buf = sample(HEADER_SIZE + 40);
        assert_eq!(compute(&buf), reference(&buf));
    }

    #[test]
    fn compute_ignores_checksum_field() {
        let mut buf = sample(HEADER_SIZE);
        let before = compute(&buf);
        buf[12..16].copy_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(compute(&buf), before);
    }

    #[test]
    fn patch_then_verify() {
        let mut buf = sample(HEADER_SIZE + 7);
        assert!(verify(&buf).is_err());
        let checksum = patch(&mut buf).unwrap();
        assert_eq!(stored(&buf), Some(checksum));
        assert_eq!(read_u32(&buf, offsets::FILE_SIZE), Some(buf.len() as u32));
        verify(&buf).unwrap();
    }

    #[test]
    fn every_single_byte_flip_changes_checksum() {
        let mut buf = sample(HEADER_SIZE + 16);
        patch(&mut buf).unwrap();
        let base = compute(&buf);
        for idx in (0..buf.len()).filter(|idx| !CHECKSUM_RANGE.contains(idx)) {
            let mut flipped = buf.clone();
            flipped[idx] ^= 0x01;
            assert_ne!(compute(&flipped), base, "flip at byte {idx} collided");
        }
    }

    #[test]
    fn patch_rejects_short_buffer() {
        let mut buf = vec![0u8; 10];
        assert!(matches!(
            patch(&mut buf),
            Err(LayoutError::FileTooSmall { .. })
        ));
    }
}
