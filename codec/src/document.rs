//! The character document and section orchestration.

use bitstream::{BitReader, BitWriter};
use layout::{offsets, FormatProfile, Limits, Preamble, SaveVersion, Section};
use tables::TableSet;

use crate::attributes::{decode_attributes, encode_attributes, AttributeList};
use crate::error::{CodecError, CodecResult, InSection};
use crate::header::{decode_header, encode_header, Header};
use crate::item::Item;
use crate::items::{Corpse, ItemDecoder, ItemEncoder};
use crate::progress::{decode_block, encode_block, ProgressBlock, NPCS, QUESTS, WAYPOINTS};
use crate::skills::{decode_skills, encode_skills, SkillTree};

/// A decoded character save.
///
/// Owns everything it holds; edit a clone and encode it to write a new save.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub header: Header,
    pub quests: ProgressBlock,
    pub waypoints: ProgressBlock,
    pub npcs: ProgressBlock,
    pub attributes: AttributeList,
    pub skills: SkillTree,
    /// The player's inventory, stash, belt and equipment.
    pub items: Vec<Item>,
    pub corpses: Vec<Corpse>,
    /// Present for expansion characters with a hired mercenary.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mercenary_items: Option<Vec<Item>>,
    /// Expansion characters only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub golem_item: Option<Item>,
}

impl Character {
    /// Decodes one item exported from a save of `version`.
    ///
    /// The bytes hold the item and its socketed children, as they appear in
    /// an item list.
    pub fn decode_item(bytes: &[u8], version: SaveVersion) -> CodecResult<Item> {
        let profile = version.resolve(false)?;
        let limits = Limits::default();
        let decoder = ItemDecoder {
            tables: TableSet::builtin(version),
            profile,
            limits: &limits,
        };
        let mut reader = BitReader::new(bytes);
        let item = decoder.decode_top_level(&mut reader, Section::Items, 0)?;
        ensure_consumed(&reader, bytes.len())?;
        Ok(item)
    }

    /// Encodes one item and its socketed children for a save of `version`.
    pub fn encode_item(item: &Item, version: SaveVersion) -> CodecResult<Vec<u8>> {
        let profile = version.resolve(false)?;
        let encoder = ItemEncoder {
            tables: TableSet::builtin(version),
            profile,
        };
        let mut writer = BitWriter::new();
        encoder.encode_item(item, Section::Items, true, &mut writer)?;
        Ok(writer.finish())
    }

    /// Number of items in every inventory, socketed items included.
    #[must_use]
    pub fn item_count(&self) -> usize {
        let count = |items: &[Item]| items.iter().map(Item::total_count).sum::<usize>();
        count(&self.items)
            + self
                .corpses
                .iter()
                .map(|corpse| count(&corpse.items))
                .sum::<usize>()
            + self.mercenary_items.as_deref().map_or(0, count)
            + self.golem_item.as_ref().map_or(0, Item::total_count)
    }
}

pub(crate) fn ensure_consumed(reader: &BitReader<'_>, len: usize) -> CodecResult<()> {
    if reader.is_empty() {
        return Ok(());
    }
    let offset = reader.byte_position();
    Err(CodecError::TrailingBytes {
        offset,
        remaining: len - offset,
    })
}

/// Decodes every section after the preamble.
pub(crate) fn decode_character(
    bytes: &[u8],
    preamble: &Preamble,
    profile: FormatProfile,
    tables: &TableSet,
    limits: &Limits,
) -> CodecResult<Character> {
    let mut reader = BitReader::new(bytes);
    reader
        .read_bytes(offsets::ACTIVE_ARMS)
        .in_section(Section::Header)?;
    let header = decode_header(&mut reader, preamble, profile)?;
    tracing::debug!(name = %header.name, class = %header.class, level = header.level, "header");

    let quests = decode_block(&mut reader, QUESTS)?;
    let waypoints = decode_block(&mut reader, WAYPOINTS)?;
    let npcs = decode_block(&mut reader, NPCS)?;
    let attributes = decode_attributes(&mut reader, tables)?;
    let skills = decode_skills(&mut reader, header.class, header.level, tables)?;
    tracing::debug!(offset = reader.byte_position(), "items");

    let decoder = ItemDecoder {
        tables,
        profile,
        limits,
    };
    let items = decoder.decode_list(&mut reader, Section::Items)?;
    let corpses = decoder.decode_corpses(&mut reader)?;
    let (mercenary_items, golem_item) = if header.status.expansion {
        let hired = header.mercenary.is_hired();
        let mercenary_items = decoder.decode_mercenary(&mut reader, hired)?;
        (mercenary_items, decoder.decode_golem(&mut reader)?)
    } else {
        (None, None)
    };
    ensure_consumed(&reader, bytes.len())?;

    Ok(Character {
        header,
        quests,
        waypoints,
        npcs,
        attributes,
        skills,
        items,
        corpses,
        mercenary_items,
        golem_item,
    })
}

/// Encodes every section. Size and checksum are left zero for the caller to patch.
pub(crate) fn encode_character(character: &Character, tables: &TableSet) -> CodecResult<Vec<u8>> {
    let header = &character.header;
    let profile = header.version.nearest_profile();
    let mut writer = BitWriter::with_capacity(offsets::ATTRIBUTES * 2);

    encode_header(header, profile, &mut writer)?;
    encode_block(&character.quests, QUESTS, &mut writer)?;
    encode_block(&character.waypoints, WAYPOINTS, &mut writer)?;
    encode_block(&character.npcs, NPCS, &mut writer)?;
    encode_attributes(&character.attributes, tables, &mut writer)?;
    encode_skills(&character.skills, header.class, tables, &mut writer)?;

    let encoder = ItemEncoder { tables, profile };
    encoder.encode_list(&character.items, Section::Items, &mut writer)?;
    encoder.encode_corpses(&character.corpses, &mut writer)?;
    if header.status.expansion {
        encoder.encode_mercenary(
            character.mercenary_items.as_deref(),
            header.mercenary.is_hired(),
            &mut writer,
        )?;
        encoder.encode_golem(character.golem_item.as_ref(), &mut writer)?;
    } else {
        if character.mercenary_items.is_some() {
            return Err(CodecError::out_of_range("mercenary_items", 1, 0));
        }
        if character.golem_item.is_some() {
            return Err(CodecError::out_of_range("golem_item", 1, 0));
        }
    }
    Ok(writer.finish())
}
