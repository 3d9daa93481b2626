//! Quest, waypoint and NPC blocks, kept verbatim.

use bitstream::{BitReader, BitWriter};
use layout::Section;

use crate::error::{CodecError, CodecResult, InSection};
use crate::framing::{expect_marker, write_marker};
use crate::header::len_i64;

/// An opaque fixed-size block between the header and the attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressBlock {
    /// Format version word; the NPC block has none.
    pub version: Option<u32>,
    /// Length word as stored.
    pub length: u16,
    pub data: Vec<u8>,
}

/// Shape of one progress block.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BlockShape {
    pub section: Section,
    pub versioned: bool,
    pub data_len: usize,
}

/// Three difficulties of 96 bytes each.
pub(crate) const QUESTS: BlockShape = BlockShape {
    section: Section::Quests,
    versioned: true,
    data_len: 3 * 96,
};

/// Three difficulties of 24 bytes each.
pub(crate) const WAYPOINTS: BlockShape = BlockShape {
    section: Section::Waypoints,
    versioned: true,
    data_len: 3 * 24,
};

pub(crate) const NPCS: BlockShape = BlockShape {
    section: Section::Npcs,
    versioned: false,
    data_len: 48,
};

pub(crate) fn decode_block(
    reader: &mut BitReader<'_>,
    shape: BlockShape,
) -> CodecResult<ProgressBlock> {
    expect_marker(reader, shape.section)?;
    let version = if shape.versioned {
        Some(reader.read_u32_aligned().in_section(shape.section)?)
    } else {
        None
    };
    let length = reader.read_u16_aligned().in_section(shape.section)?;
    let data = reader
        .read_bytes(shape.data_len)
        .in_section(shape.section)?
        .to_vec();
    Ok(ProgressBlock {
        version,
        length,
        data,
    })
}

pub(crate) fn encode_block(
    block: &ProgressBlock,
    shape: BlockShape,
    writer: &mut BitWriter,
) -> CodecResult<()> {
    if block.data.len() != shape.data_len {
        return Err(CodecError::out_of_range(
            format!("{}.data", shape.section),
            len_i64(block.data.len()),
            len_i64(shape.data_len),
        ));
    }
    if block.version.is_some() != shape.versioned {
        return Err(CodecError::out_of_range(
            format!("{}.version", shape.section),
            i64::from(block.version.is_some()),
            i64::from(shape.versioned),
        ));
    }
    write_marker(writer, shape.section)?;
    if let Some(version) = block.version {
        writer.write_u32_aligned(version).in_section(shape.section)?;
    }
    writer.write_u16_aligned(block.length).in_section(shape.section)?;
    writer.write_bytes(&block.data).in_section(shape.section)
}
