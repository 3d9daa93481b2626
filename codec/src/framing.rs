//! Section markers shared by the section codecs.

use bitstream::{BitReader, BitWriter};
use layout::{LayoutError, Section};

use crate::error::{CodecResult, InSection};

/// Consumes `section`'s marker, failing with `InvalidSignature` on mismatch.
pub(crate) fn expect_marker(reader: &mut BitReader<'_>, section: Section) -> CodecResult<()> {
    let marker = section.marker();
    let offset = reader.byte_position();
    let found = reader.read_bytes(marker.len()).in_section(section)?;
    if found != marker {
        return Err(LayoutError::InvalidSignature {
            section,
            offset,
            found: found.to_vec(),
        }
        .into());
    }
    Ok(())
}

/// Returns `true` if the next bytes are `section`'s marker, without consuming them.
pub(crate) fn at_marker(reader: &BitReader<'_>, section: Section) -> bool {
    reader
        .peek_bytes(section.marker().len())
        .is_ok_and(|bytes| section.matches(bytes))
}

pub(crate) fn write_marker(writer: &mut BitWriter, section: Section) -> CodecResult<()> {
    writer.write_bytes(section.marker()).in_section(section)
}
