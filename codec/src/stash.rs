//! Shared stash files: an `"SSS"` header, then pages of item lists.
//!
//! ```text
//! "SSS\0" version("01"|"02") [gold u32, "02" only] page_count u32
//! per page: "ST" kind u8 reserved[3] name\0 "JM" count items...
//! ```
//!
//! Items inside the pages use the item format of the save version the stash
//! belongs to.

use bitstream::{BitReader, BitWriter};
use layout::{LayoutError, LimitKind, Limits, SaveVersion, Section};
use tables::TableSet;

use crate::document::ensure_consumed;
use crate::error::{CodecError, CodecResult, InSection};
use crate::framing::{expect_marker, write_marker};
use crate::header::len_i64;
use crate::item::Item;
use crate::items::{ItemDecoder, ItemEncoder};

/// Stash format version, stored as two ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StashVersion {
    /// `"01"`: no shared gold.
    V1,
    /// `"02"`: shared gold follows the version.
    V2,
}

impl StashVersion {
    #[must_use]
    pub const fn tag(self) -> [u8; 2] {
        match self {
            Self::V1 => *b"01",
            Self::V2 => *b"02",
        }
    }

    const fn from_tag(tag: [u8; 2]) -> Option<Self> {
        match &tag {
            b"01" => Some(Self::V1),
            b"02" => Some(Self::V2),
            _ => None,
        }
    }

    const fn has_gold(self) -> bool {
        matches!(self, Self::V2)
    }
}

/// A decoded shared stash.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SharedStash {
    pub version: StashVersion,
    /// Present exactly when the version stores it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub shared_gold: Option<u32>,
    pub pages: Vec<StashPage>,
}

/// One stash page and the items on it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StashPage {
    /// Page type flags as stored.
    pub kind: u8,
    /// The three bytes after the page type; zero in files the game writes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reserved: [u8; 3],
    pub name: String,
    pub items: Vec<Item>,
}

impl SharedStash {
    /// Number of items on every page, socketed items included.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.pages
            .iter()
            .flat_map(|page| &page.items)
            .map(Item::total_count)
            .sum()
    }
}

pub(crate) fn decode_stash(
    bytes: &[u8],
    version: SaveVersion,
    limits: &Limits,
) -> CodecResult<SharedStash> {
    if bytes.len() > limits.max_file_bytes {
        return Err(LayoutError::LimitsExceeded {
            kind: LimitKind::FileBytes,
            limit: limits.max_file_bytes,
            actual: bytes.len(),
        }
        .into());
    }
    let decoder = ItemDecoder {
        tables: TableSet::builtin(version),
        profile: version.resolve(false)?,
        limits,
    };
    let mut reader = BitReader::new(bytes);

    expect_marker(&mut reader, Section::Stash)?;
    let mut tag = [0u8; 2];
    tag.copy_from_slice(reader.read_bytes(2).in_section(Section::Stash)?);
    let stash_version = StashVersion::from_tag(tag).ok_or(LayoutError::UnsupportedVersion {
        found: u32::from(u16::from_le_bytes(tag)),
    })?;
    let shared_gold = if stash_version.has_gold() {
        Some(reader.read_u32_aligned().in_section(Section::Stash)?)
    } else {
        None
    };
    let page_count = reader.read_u32_aligned().in_section(Section::Stash)?;
    let page_count = usize::try_from(page_count).unwrap_or(usize::MAX);
    if page_count > limits.max_stash_pages {
        return Err(LayoutError::LimitsExceeded {
            kind: LimitKind::StashPages,
            limit: limits.max_stash_pages,
            actual: page_count,
        }
        .into());
    }
    tracing::debug!(version = ?stash_version, pages = page_count, "shared stash");

    let mut pages = Vec::with_capacity(page_count);
    for _ in 0..page_count {
        pages.push(decode_page(&mut reader, &decoder)?);
    }
    ensure_consumed(&reader, bytes.len())?;

    Ok(SharedStash {
        version: stash_version,
        shared_gold,
        pages,
    })
}

fn decode_page(reader: &mut BitReader<'_>, decoder: &ItemDecoder<'_>) -> CodecResult<StashPage> {
    expect_marker(reader, Section::StashPage)?;
    let kind = reader.read_u8_aligned().in_section(Section::StashPage)?;
    let mut reserved = [0u8; 3];
    reserved.copy_from_slice(reader.read_bytes(3).in_section(Section::StashPage)?);

    let offset = reader.byte_position();
    let mut raw = Vec::new();
    loop {
        match reader.read_u8_aligned().in_section(Section::StashPage)? {
            0 => break,
            byte => raw.push(byte),
        }
    }
    let name = String::from_utf8(raw).map_err(|_| CodecError::InvalidValue {
        section: Section::StashPage,
        field: "stash.page.name",
        offset,
    })?;

    let items = decoder.decode_list(reader, Section::StashPage)?;
    tracing::debug!(%name, items = items.len(), "stash page");
    Ok(StashPage {
        kind,
        reserved,
        name,
        items,
    })
}

pub(crate) fn encode_stash(stash: &SharedStash, version: SaveVersion) -> CodecResult<Vec<u8>> {
    let encoder = ItemEncoder {
        tables: TableSet::builtin(version),
        profile: version.resolve(false)?,
    };
    let mut writer = BitWriter::new();

    write_marker(&mut writer, Section::Stash)?;
    writer
        .write_bytes(&stash.version.tag())
        .in_section(Section::Stash)?;
    if stash.version.has_gold() != stash.shared_gold.is_some() {
        return Err(CodecError::out_of_range(
            "stash.shared_gold",
            i64::from(stash.shared_gold.is_some()),
            i64::from(stash.version.has_gold()),
        ));
    }
    if let Some(gold) = stash.shared_gold {
        writer.write_u32_aligned(gold).in_section(Section::Stash)?;
    }
    let count = u32::try_from(stash.pages.len()).map_err(|_| {
        CodecError::out_of_range("stash.pages", len_i64(stash.pages.len()), i64::from(u32::MAX))
    })?;
    writer.write_u32_aligned(count).in_section(Section::Stash)?;

    for page in &stash.pages {
        write_marker(&mut writer, Section::StashPage)?;
        writer
            .write_u8_aligned(page.kind)
            .in_section(Section::StashPage)?;
        writer
            .write_bytes(&page.reserved)
            .in_section(Section::StashPage)?;
        if page.name.as_bytes().contains(&0) {
            return Err(CodecError::out_of_range(
                "stash.page.name",
                len_i64(page.name.len()),
                0,
            ));
        }
        writer
            .write_bytes(page.name.as_bytes())
            .in_section(Section::StashPage)?;
        writer.write_u8_aligned(0).in_section(Section::StashPage)?;
        encoder.encode_list(&page.items, Section::StashPage, &mut writer)?;
    }
    Ok(writer.finish())
}
