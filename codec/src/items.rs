//! Item lists and the items in them.
//!
//! Every inventory in a save shares one list shape: the `"JM"` marker, a u16
//! count of top-level items, then the items. Socketed children follow their
//! parent directly and are not part of the count.
//!
//! Item bodies are bit-packed and byte-aligned at the end. Which optional
//! sections an extended item carries depends on its flags, its quality, and
//! its type's entry in the item type table.

use bitstream::{BitReader, BitWriter};
use layout::{FormatProfile, LayoutError, LimitKind, Limits, Section};
use tables::{ItemTypeDef, TableSet, MAX_CODE_LEN};

use crate::error::{CodecError, CodecResult, InSection, ItemFault};
use crate::framing::{expect_marker, write_marker};
use crate::header::len_i64;
use crate::item::{
    flag, Durability, Ear, ExtendedItem, Item, ItemFlags, ItemKind, Property, Quality, RareName,
    Runeword, SimpleItem,
};
use crate::properties::{decode_properties, encode_properties};

const CODE_LEN: usize = 4;
const NAME_CHAR_BITS: u8 = 7;
const MAX_ITEM_NAME: usize = 15;
const MAX_FILLED_SOCKETS: usize = 7;
const DEFENSE_BIAS: i16 = 10;
const SET_LISTS: u8 = 5;

/// Sections an item type adds to the extended body.
#[derive(Debug, Clone, Copy)]
struct TypeSections {
    defense: bool,
    durability: bool,
    quantity: bool,
    tome: bool,
}

impl TypeSections {
    fn of(def: &ItemTypeDef) -> Self {
        Self {
            defense: def.is_armor(),
            durability: def.has_durability(),
            quantity: def.stackable,
            tome: def.tome,
        }
    }
}

fn type_sections(tables: &TableSet, code: &str) -> TypeSections {
    if let Some(def) = tables.item_type(code) {
        TypeSections::of(def)
    } else {
        tracing::debug!(code, "unknown item type code, treating as misc");
        TypeSections::of(&ItemTypeDef::unknown())
    }
}

/// One 7-bit character name, NUL terminated.
fn read_name(reader: &mut BitReader<'_>) -> Result<String, ItemFault> {
    let mut name = String::new();
    for idx in 0..=MAX_ITEM_NAME {
        let ch = reader.read_bits(NAME_CHAR_BITS)?;
        if ch == 0 {
            return Ok(name);
        }
        if idx == MAX_ITEM_NAME {
            break;
        }
        // 7-bit read always fits.
        #[allow(clippy::cast_possible_truncation)]
        name.push(char::from(ch as u8));
    }
    Err(ItemFault::UnterminatedName)
}

/// Reads `bits` into a narrower integer; the width is always small enough.
macro_rules! read {
    ($reader:expr, $bits:expr, $ty:ty) => {{
        #[allow(clippy::cast_possible_truncation)]
        let value = $reader.read_bits($bits)? as $ty;
        value
    }};
}

/// Decodes items of one save version.
pub(crate) struct ItemDecoder<'a> {
    pub tables: &'a TableSet,
    pub profile: FormatProfile,
    pub limits: &'a Limits,
}

impl ItemDecoder<'_> {
    /// Decodes a `"JM"` item list, attributing failures to `section`.
    pub(crate) fn decode_list(
        &self,
        reader: &mut BitReader<'_>,
        section: Section,
    ) -> CodecResult<Vec<Item>> {
        expect_marker(reader, Section::Items)?;
        let count = usize::from(reader.read_u16_aligned().in_section(section)?);
        self.check_count(count)?;
        tracing::debug!(%section, count, offset = reader.byte_position(), "item list");

        let mut items = Vec::with_capacity(count);
        for index in 0..count {
            items.push(self.decode_top_level(reader, section, index)?);
        }
        Ok(items)
    }

    /// Decodes one top-level item with its children.
    pub(crate) fn decode_top_level(
        &self,
        reader: &mut BitReader<'_>,
        section: Section,
        index: usize,
    ) -> CodecResult<Item> {
        let offset = reader.byte_position();
        self.decode_item(reader, true)
            .map_err(|reason| CodecError::MalformedItem {
                section,
                index,
                offset,
                reason,
            })
    }

    fn check_count(&self, count: usize) -> CodecResult<()> {
        if count > self.limits.max_items_per_list {
            return Err(LayoutError::LimitsExceeded {
                kind: LimitKind::ItemsPerList,
                limit: self.limits.max_items_per_list,
                actual: count,
            }
            .into());
        }
        Ok(())
    }

    fn decode_item(&self, reader: &mut BitReader<'_>, top_level: bool) -> Result<Item, ItemFault> {
        if self.profile.per_item_marker() {
            let marker = reader.read_bytes(Section::Items.marker().len())?;
            if !Section::Items.matches(marker) {
                return Err(ItemFault::BadMarker {
                    found: marker.to_vec(),
                });
            }
        }

        let word = read!(reader, 32, u32);
        let flags = ItemFlags::from_word(word);
        let version = read!(reader, self.profile.item_version_bits(), u16);
        let location = read!(reader, 3, u8);
        let equipped = read!(reader, 4, u8);
        let x = read!(reader, 4, u8);
        let y = read!(reader, 4, u8);
        let alt_container = read!(reader, 3, u8);

        let (kind, filled, nul_padded_code) = if word & flag::EAR != 0 {
            let ear = Ear {
                class: read!(reader, 3, u8),
                level: read!(reader, 7, u8),
                name: read_name(reader)?,
            };
            (ItemKind::Ear(ear), 0, false)
        } else {
            let (code, nul_padded) = self.read_code(reader)?;
            if word & flag::SIMPLE != 0 {
                let filled_sockets = read!(reader, 1, u8);
                let simple = SimpleItem {
                    code,
                    filled_sockets,
                };
                (ItemKind::Simple(simple), 0, nul_padded)
            } else {
                let filled = read!(reader, 3, u8);
                let extended = self.decode_extended(reader, code, flags)?;
                (ItemKind::Extended(Box::new(extended)), filled, nul_padded)
            }
        };
        let padding = reader.align_to_byte()?;

        if filled > 0 && !top_level {
            return Err(ItemFault::NestedSockets { filled });
        }
        let mut socketed_items = Vec::with_capacity(usize::from(filled));
        for child in 0..usize::from(filled) {
            let item = self
                .decode_item(reader, false)
                .map_err(|fault| ItemFault::SocketChild {
                    child,
                    fault: Box::new(fault),
                })?;
            socketed_items.push(item);
        }

        Ok(Item {
            flags,
            version,
            location,
            equipped,
            x,
            y,
            alt_container,
            kind,
            socketed_items,
            padding,
            nul_padded_code,
        })
    }

    /// Reads the four-symbol type code and reports whether it was NUL padded.
    ///
    /// Trailing spaces are stripped; failing that, trailing NULs are.
    fn read_code(&self, reader: &mut BitReader<'_>) -> Result<(String, bool), ItemFault> {
        let mut code = String::with_capacity(CODE_LEN);
        for _ in 0..CODE_LEN {
            let symbol = if self.profile.huffman_type_codes() {
                self.read_huffman_symbol(reader)?
            } else {
                char::from(read!(reader, 8, u8))
            };
            code.push(symbol);
        }
        let spaces = code.trim_end_matches(' ').len();
        if spaces < code.len() {
            code.truncate(spaces);
            return Ok((code, false));
        }
        let nuls = code.trim_end_matches('\0').len();
        let nul_padded = nuls < code.len();
        code.truncate(nuls);
        Ok((code, nul_padded))
    }

    fn read_huffman_symbol(&self, reader: &mut BitReader<'_>) -> Result<char, ItemFault> {
        let mut bits = 0u16;
        for len in 1..=MAX_CODE_LEN {
            bits |= u16::from(reader.read_bit()?) << (len - 1);
            if let Some(symbol) = self.tables.huffman_symbol(bits, len) {
                return Ok(symbol);
            }
        }
        Err(ItemFault::BadTypeCode { bits })
    }

    fn decode_extended(
        &self,
        reader: &mut BitReader<'_>,
        code: String,
        flags: ItemFlags,
    ) -> Result<ExtendedItem, ItemFault> {
        let sections = type_sections(self.tables, &code);
        let id = read!(reader, 32, u32);
        let level = read!(reader, 7, u8);
        let quality_id = read!(reader, 4, u8);
        let picture = if reader.read_bit()? {
            Some(read!(reader, 3, u8))
        } else {
            None
        };
        let class_data = if reader.read_bit()? {
            Some(read!(reader, 11, u16))
        } else {
            None
        };
        let mut quality = Self::decode_quality(reader, quality_id)?;
        let mut runeword = if flags.runeword {
            Some(Runeword {
                id: read!(reader, 12, u16),
                extra: read!(reader, 4, u8),
                properties: Vec::new(),
            })
        } else {
            None
        };
        let personalized_name = if flags.personalized {
            Some(read_name(reader)?)
        } else {
            None
        };
        let tome_data = if sections.tome {
            Some(read!(reader, 5, u8))
        } else {
            None
        };
        let timestamp = reader.read_bit()?;
        let defense = if sections.defense {
            Some(read!(reader, 11, i16) - DEFENSE_BIAS)
        } else {
            None
        };
        let durability = if sections.durability {
            let max = read!(reader, 8, u8);
            let current = if max > 0 {
                Some((read!(reader, 8, u8), reader.read_bit()?))
            } else {
                None
            };
            Some(Durability { max, current })
        } else {
            None
        };
        let quantity = if sections.quantity {
            Some(read!(reader, 9, u16))
        } else {
            None
        };
        let total_sockets = if flags.socketed {
            Some(read!(reader, 4, u8))
        } else {
            None
        };
        let set_mask = if quality_id == Quality::SET {
            read!(reader, SET_LISTS, u8)
        } else {
            0
        };

        let limit = self.limits.max_properties_per_list;
        let properties = decode_properties(reader, self.tables, limit)?;
        if let Quality::Set {
            bonus_mask,
            bonus_lists,
            ..
        } = &mut quality
        {
            *bonus_mask = set_mask;
            for _ in 0..set_mask.count_ones() {
                bonus_lists.push(decode_properties(reader, self.tables, limit)?);
            }
        }
        if let Some(runeword) = &mut runeword {
            runeword.properties = decode_properties(reader, self.tables, limit)?;
        }

        Ok(ExtendedItem {
            code,
            id,
            level,
            quality,
            picture,
            class_data,
            runeword,
            personalized_name,
            tome_data,
            timestamp,
            defense,
            durability,
            quantity,
            total_sockets,
            properties,
        })
    }

    fn decode_quality(reader: &mut BitReader<'_>, id: u8) -> Result<Quality, ItemFault> {
        let quality = match id {
            Quality::LOW => Quality::Low {
                kind: read!(reader, 3, u8),
            },
            Quality::NORMAL => Quality::Normal,
            Quality::SUPERIOR => Quality::Superior {
                kind: read!(reader, 3, u8),
            },
            Quality::MAGIC => Quality::Magic {
                prefix: read!(reader, 11, u16),
                suffix: read!(reader, 11, u16),
            },
            Quality::SET => Quality::Set {
                id: read!(reader, 12, u16),
                bonus_mask: 0,
                bonus_lists: Vec::new(),
            },
            Quality::RARE => Quality::Rare(Self::decode_rare_name(reader)?),
            Quality::UNIQUE => Quality::Unique {
                id: read!(reader, 12, u16),
            },
            Quality::CRAFTED => Quality::Crafted(Self::decode_rare_name(reader)?),
            raw => Quality::Other { raw },
        };
        Ok(quality)
    }

    fn decode_rare_name(reader: &mut BitReader<'_>) -> Result<RareName, ItemFault> {
        let mut name = RareName {
            first: read!(reader, 8, u8),
            second: read!(reader, 8, u8),
            affixes: [None; 6],
        };
        for affix in &mut name.affixes {
            if reader.read_bit()? {
                *affix = Some(read!(reader, 11, u16));
            }
        }
        Ok(name)
    }

    /// Decodes the corpse section: a count, then per corpse 12 bytes and a list.
    pub(crate) fn decode_corpses(&self, reader: &mut BitReader<'_>) -> CodecResult<Vec<Corpse>> {
        expect_marker(reader, Section::Corpse)?;
        let count = usize::from(reader.read_u16_aligned().in_section(Section::Corpse)?);
        self.check_count(count)?;
        let mut corpses = Vec::with_capacity(count);
        for _ in 0..count {
            let mut data = [0u8; CORPSE_DATA_LEN];
            data.copy_from_slice(
                reader
                    .read_bytes(CORPSE_DATA_LEN)
                    .in_section(Section::Corpse)?,
            );
            let items = self.decode_list(reader, Section::Corpse)?;
            corpses.push(Corpse { data, items });
        }
        Ok(corpses)
    }

    /// Decodes the mercenary section; the list is present only for a hired mercenary.
    pub(crate) fn decode_mercenary(
        &self,
        reader: &mut BitReader<'_>,
        hired: bool,
    ) -> CodecResult<Option<Vec<Item>>> {
        expect_marker(reader, Section::Mercenary)?;
        if !hired {
            return Ok(None);
        }
        self.decode_list(reader, Section::Mercenary).map(Some)
    }

    /// Decodes the golem section: a presence byte of 0 or 1 and at most one item.
    pub(crate) fn decode_golem(&self, reader: &mut BitReader<'_>) -> CodecResult<Option<Item>> {
        expect_marker(reader, Section::Golem)?;
        let offset = reader.byte_position();
        match reader.read_u8_aligned().in_section(Section::Golem)? {
            0 => Ok(None),
            1 => self.decode_top_level(reader, Section::Golem, 0).map(Some),
            _ => Err(CodecError::InvalidValue {
                section: Section::Golem,
                field: "golem.present",
                offset,
            }),
        }
    }
}

/// Length of the opaque record before each corpse's item list.
pub const CORPSE_DATA_LEN: usize = 12;

/// A corpse left behind on death, with the items still on it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Corpse {
    /// Opaque record; holds the corpse position.
    pub data: [u8; CORPSE_DATA_LEN],
    pub items: Vec<Item>,
}

/// Encodes items of one save version.
pub(crate) struct ItemEncoder<'a> {
    pub tables: &'a TableSet,
    pub profile: FormatProfile,
}

impl ItemEncoder<'_> {
    pub(crate) fn encode_list(
        &self,
        items: &[Item],
        section: Section,
        writer: &mut BitWriter,
    ) -> CodecResult<()> {
        write_marker(writer, Section::Items)?;
        let count = u16::try_from(items.len()).map_err(|_| {
            CodecError::out_of_range(
                format!("{section}.items"),
                len_i64(items.len()),
                i64::from(u16::MAX),
            )
        })?;
        writer.write_u16_aligned(count).in_section(section)?;
        for item in items {
            self.encode_item(item, section, true, writer)?;
        }
        Ok(())
    }

    pub(crate) fn encode_item(
        &self,
        item: &Item,
        section: Section,
        top_level: bool,
        writer: &mut BitWriter,
    ) -> CodecResult<()> {
        let out = &mut Fields { writer, section };
        if self.profile.per_item_marker() {
            write_marker(out.writer, Section::Items)?;
        }

        out.put("flags", u64::from(item.flags.to_word(item.is_ear(), item.is_simple())), 32)?;
        out.put("version", u64::from(item.version), self.profile.item_version_bits())?;
        out.put("location", u64::from(item.location), 3)?;
        out.put("equipped", u64::from(item.equipped), 4)?;
        out.put("x", u64::from(item.x), 4)?;
        out.put("y", u64::from(item.y), 4)?;
        out.put("alt_container", u64::from(item.alt_container), 3)?;

        let children = item.socketed_items.len();
        match &item.kind {
            ItemKind::Ear(ear) => {
                out.put("ear.class", u64::from(ear.class), 3)?;
                out.put("ear.level", u64::from(ear.level), 7)?;
                out.name("ear.name", &ear.name)?;
                out.expect_len("socketed_items", children, 0)?;
            }
            ItemKind::Simple(simple) => {
                self.write_code(out, &simple.code, item.nul_padded_code)?;
                out.put("filled_sockets", u64::from(simple.filled_sockets), 1)?;
                out.expect_len("socketed_items", children, 0)?;
            }
            ItemKind::Extended(extended) => {
                self.write_code(out, &extended.code, item.nul_padded_code)?;
                let max = if top_level { MAX_FILLED_SOCKETS } else { 0 };
                if children > max {
                    return Err(CodecError::out_of_range(
                        "item.socketed_items",
                        len_i64(children),
                        len_i64(max),
                    ));
                }
                out.put("filled_sockets", children as u64, 3)?;
                self.encode_extended(out, item.flags, extended)?;
            }
        }
        out.writer.align_with(item.padding).map_err(|_| {
            CodecError::out_of_range("item.padding", i64::from(item.padding), 0)
        })?;

        for child in &item.socketed_items {
            self.encode_item(child, section, false, out.writer)?;
        }
        Ok(())
    }

    fn write_code(&self, out: &mut Fields<'_>, code: &str, nul_padded: bool) -> CodecResult<()> {
        let count = code.chars().count();
        if count > CODE_LEN {
            return Err(CodecError::out_of_range(
                "item.code",
                len_i64(count),
                len_i64(CODE_LEN),
            ));
        }
        let fill = if nul_padded { '\0' } else { ' ' };
        let padded = code.chars().chain(std::iter::repeat(fill)).take(CODE_LEN);
        for symbol in padded {
            if self.profile.huffman_type_codes() {
                let entry = self.tables.huffman_code(symbol).ok_or_else(|| {
                    CodecError::out_of_range("item.code", i64::from(u32::from(symbol)), 0)
                })?;
                out.put("code", u64::from(entry.bits), entry.len)?;
            } else {
                out.put("code", u64::from(u32::from(symbol)), 8)?;
            }
        }
        Ok(())
    }

    fn encode_extended(
        &self,
        out: &mut Fields<'_>,
        flags: ItemFlags,
        item: &ExtendedItem,
    ) -> CodecResult<()> {
        let sections = type_sections(self.tables, &item.code);
        out.put("id", u64::from(item.id), 32)?;
        out.put("level", u64::from(item.level), 7)?;
        out.put("quality", u64::from(item.quality.id()), 4)?;
        out.optional("picture", item.picture.map(u64::from), 3)?;
        out.optional("class_data", item.class_data.map(u64::from), 11)?;
        Self::encode_quality(out, &item.quality)?;

        expect_present("item.runeword", flags.runeword, item.runeword.is_some())?;
        if let Some(runeword) = &item.runeword {
            out.put("runeword.id", u64::from(runeword.id), 12)?;
            out.put("runeword.extra", u64::from(runeword.extra), 4)?;
        }
        expect_present(
            "item.personalized_name",
            flags.personalized,
            item.personalized_name.is_some(),
        )?;
        if let Some(name) = &item.personalized_name {
            out.name("personalized_name", name)?;
        }
        expect_present("item.tome_data", sections.tome, item.tome_data.is_some())?;
        if let Some(tome) = item.tome_data {
            out.put("tome_data", u64::from(tome), 5)?;
        }
        out.bit(item.timestamp);

        expect_present("item.defense", sections.defense, item.defense.is_some())?;
        if let Some(defense) = item.defense {
            let stored = i64::from(defense) + i64::from(DEFENSE_BIAS);
            let stored = u64::try_from(stored).map_err(|_| {
                CodecError::out_of_range("item.defense", i64::from(defense), 2047 - 10)
            })?;
            out.put("defense", stored, 11)?;
        }
        expect_present("item.durability", sections.durability, item.durability.is_some())?;
        if let Some(durability) = item.durability {
            out.put("durability.max", u64::from(durability.max), 8)?;
            expect_present(
                "item.durability.current",
                durability.max > 0,
                durability.current.is_some(),
            )?;
            if let Some((current, extra)) = durability.current {
                out.put("durability.current", u64::from(current), 8)?;
                out.bit(extra);
            }
        }
        expect_present("item.quantity", sections.quantity, item.quantity.is_some())?;
        if let Some(quantity) = item.quantity {
            out.put("quantity", u64::from(quantity), 9)?;
        }
        expect_present("item.total_sockets", flags.socketed, item.total_sockets.is_some())?;
        if let Some(sockets) = item.total_sockets {
            out.put("total_sockets", u64::from(sockets), 4)?;
        }

        if let Quality::Set {
            bonus_mask,
            bonus_lists,
            ..
        } = &item.quality
        {
            out.put("set.bonus_mask", u64::from(*bonus_mask), SET_LISTS)?;
            out.expect_len(
                "set.bonus_lists",
                bonus_lists.len(),
                bonus_mask.count_ones() as usize,
            )?;
        }

        self.properties(out, &item.properties)?;
        if let Quality::Set { bonus_lists, .. } = &item.quality {
            for list in bonus_lists {
                self.properties(out, list)?;
            }
        }
        if let Some(runeword) = &item.runeword {
            self.properties(out, &runeword.properties)?;
        }
        Ok(())
    }

    fn encode_quality(out: &mut Fields<'_>, quality: &Quality) -> CodecResult<()> {
        match quality {
            Quality::Low { kind } | Quality::Superior { kind } => {
                out.put("quality.kind", u64::from(*kind), 3)
            }
            Quality::Magic { prefix, suffix } => {
                out.put("quality.prefix", u64::from(*prefix), 11)?;
                out.put("quality.suffix", u64::from(*suffix), 11)
            }
            Quality::Set { id, .. } | Quality::Unique { id } => {
                out.put("quality.id", u64::from(*id), 12)
            }
            Quality::Rare(name) | Quality::Crafted(name) => {
                out.put("quality.first", u64::from(name.first), 8)?;
                out.put("quality.second", u64::from(name.second), 8)?;
                for affix in name.affixes {
                    out.optional("quality.affix", affix.map(u64::from), 11)?;
                }
                Ok(())
            }
            Quality::Normal => Ok(()),
            Quality::Other { raw } => {
                if (Quality::LOW..=Quality::CRAFTED).contains(raw) {
                    return Err(CodecError::out_of_range("item.quality", i64::from(*raw), 0));
                }
                Ok(())
            }
        }
    }

    fn properties(&self, out: &mut Fields<'_>, list: &[Property]) -> CodecResult<()> {
        encode_properties(list, self.tables, out.section, out.writer)
    }

    pub(crate) fn encode_corpses(&self, corpses: &[Corpse], writer: &mut BitWriter) -> CodecResult<()> {
        write_marker(writer, Section::Corpse)?;
        let count = u16::try_from(corpses.len()).map_err(|_| {
            CodecError::out_of_range("corpse.count", len_i64(corpses.len()), i64::from(u16::MAX))
        })?;
        writer.write_u16_aligned(count).in_section(Section::Corpse)?;
        for corpse in corpses {
            writer.write_bytes(&corpse.data).in_section(Section::Corpse)?;
            self.encode_list(&corpse.items, Section::Corpse, writer)?;
        }
        Ok(())
    }

    pub(crate) fn encode_mercenary(
        &self,
        items: Option<&[Item]>,
        hired: bool,
        writer: &mut BitWriter,
    ) -> CodecResult<()> {
        expect_present("mercenary_items", hired, items.is_some())?;
        write_marker(writer, Section::Mercenary)?;
        match items {
            Some(items) => self.encode_list(items, Section::Mercenary, writer),
            None => Ok(()),
        }
    }

    pub(crate) fn encode_golem(&self, item: Option<&Item>, writer: &mut BitWriter) -> CodecResult<()> {
        write_marker(writer, Section::Golem)?;
        writer
            .write_u8_aligned(u8::from(item.is_some()))
            .in_section(Section::Golem)?;
        match item {
            Some(item) => self.encode_item(item, Section::Golem, true, writer),
            None => Ok(()),
        }
    }
}

/// Fails when an optional field's presence disagrees with what the item requires.
fn expect_present(field: &str, required: bool, present: bool) -> CodecResult<()> {
    if required == present {
        return Ok(());
    }
    Err(CodecError::out_of_range(
        field,
        i64::from(present),
        i64::from(required),
    ))
}

/// Bit-level field writes that report the item field on failure.
struct Fields<'w> {
    writer: &'w mut BitWriter,
    section: Section,
}

impl Fields<'_> {
    fn put(&mut self, field: &str, value: u64, bits: u8) -> CodecResult<()> {
        let max = if bits >= 64 { u64::MAX } else { (1u64 << bits) - 1 };
        if value > max {
            return Err(CodecError::out_of_range(
                format!("item.{field}"),
                i64::try_from(value).unwrap_or(i64::MAX),
                i64::try_from(max).unwrap_or(i64::MAX),
            ));
        }
        self.writer.write_bits(value, bits).in_section(self.section)
    }

    fn bit(&mut self, value: bool) {
        self.writer.write_bit(value);
    }

    /// A presence bit, then the value when present.
    fn optional(&mut self, field: &str, value: Option<u64>, bits: u8) -> CodecResult<()> {
        self.bit(value.is_some());
        match value {
            Some(value) => self.put(field, value, bits),
            None => Ok(()),
        }
    }

    fn name(&mut self, field: &str, name: &str) -> CodecResult<()> {
        let len = name.chars().count();
        if len > MAX_ITEM_NAME {
            return Err(CodecError::out_of_range(
                format!("item.{field}"),
                len_i64(len),
                len_i64(MAX_ITEM_NAME),
            ));
        }
        for ch in name.chars() {
            if ch == '\0' {
                return Err(CodecError::out_of_range(format!("item.{field}"), 0, 0));
            }
            self.put(field, u64::from(u32::from(ch)), NAME_CHAR_BITS)?;
        }
        self.put(field, 0, NAME_CHAR_BITS)
    }

    fn expect_len(&self, field: &str, len: usize, expected: usize) -> CodecResult<()> {
        if len == expected {
            return Ok(());
        }
        Err(CodecError::out_of_range(
            format!("item.{field}"),
            len_i64(len),
            len_i64(expected),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use layout::SaveVersion;

    /// A classic minor healing potion in the belt.
    const HP1: [u8; 14] = [74, 77, 16, 32, 34, 0, 0, 8, 0, 128, 6, 23, 3, 2];

    /// A Resurrected super healing potion.
    const HP5: [u8; 10] = [16, 0, 160, 0, 5, 228, 4, 79, 180, 0];

    fn decoder(version: SaveVersion) -> ItemDecoder<'static> {
        static LIMITS: Limits = Limits::for_testing();
        ItemDecoder {
            tables: TableSet::builtin(version),
            profile: version.nearest_profile(),
            limits: &LIMITS,
        }
    }

    fn encoder(version: SaveVersion) -> ItemEncoder<'static> {
        ItemEncoder {
            tables: TableSet::builtin(version),
            profile: version.nearest_profile(),
        }
    }

    fn decode_one(version: SaveVersion, bytes: &[u8]) -> Item {
        let mut reader = BitReader::new(bytes);
        let item = decoder(version)
            .decode_top_level(&mut reader, Section::Items, 0)
            .unwrap();
        assert!(reader.is_empty(), "item left {} bits", reader.bits_remaining());
        item
    }

    fn encode_one(version: SaveVersion, item: &Item) -> Vec<u8> {
        let mut writer = BitWriter::new();
        encoder(version)
            .encode_item(item, Section::Items, true, &mut writer)
            .unwrap();
        writer.finish()
    }

    fn simple(code: &str) -> Item {
        Item {
            flags: ItemFlags {
                identified: true,
                ..ItemFlags::default()
            },
            version: 101,
            location: 0,
            equipped: 0,
            x: 0,
            y: 0,
            alt_container: 1,
            kind: ItemKind::Simple(SimpleItem {
                code: code.to_string(),
                filled_sockets: 0,
            }),
            socketed_items: Vec::new(),
            padding: 0,
            nul_padded_code: false,
        }
    }

    fn extended(code: &str) -> ExtendedItem {
        ExtendedItem {
            code: code.to_string(),
            id: 0xdead_beef,
            level: 30,
            quality: Quality::Normal,
            picture: None,
            class_data: None,
            runeword: None,
            personalized_name: None,
            tome_data: None,
            timestamp: false,
            defense: None,
            durability: None,
            quantity: None,
            total_sockets: None,
            properties: Vec::new(),
        }
    }

    fn with_kind(kind: ItemKind) -> Item {
        Item {
            kind,
            ..simple("")
        }
    }

    #[test]
    fn classic_potion_golden() {
        let item = decode_one(SaveVersion::CLASSIC, &HP1);
        assert_eq!(item.code(), Some("hp1"));
        assert!(item.is_simple());
        assert!(item.flags.identified);
        assert_eq!(item.version, 0);
        assert_eq!(item.location, 2);
        assert!(item.flags.bit23_clear);
        assert_eq!(encode_one(SaveVersion::CLASSIC, &item), HP1);
    }

    #[test]
    fn new_items_set_bit23() {
        let mut item = simple("hp1");
        item.flags.new = true;
        item.flags.starter = true;
        item.version = 0;
        item.location = 2;
        item.alt_container = 0;
        let mut expected = HP1;
        expected[4] |= 0x80;
        assert_eq!(encode_one(SaveVersion::CLASSIC, &item), expected);
    }

    #[test]
    fn resurrected_potion_golden() {
        let item = decode_one(SaveVersion::RESURRECTED, &HP5);
        assert_eq!(item.code(), Some("hp5"));
        assert!(item.is_simple());
        assert_eq!(encode_one(SaveVersion::RESURRECTED, &item), HP5);
    }

    #[test]
    fn missing_item_marker() {
        let mut bytes = HP1;
        bytes[0] = b'X';
        let mut reader = BitReader::new(&bytes);
        let err = decoder(SaveVersion::CLASSIC)
            .decode_top_level(&mut reader, Section::Items, 4)
            .unwrap_err();
        assert!(matches!(
            err,
            CodecError::MalformedItem {
                index: 4,
                reason: ItemFault::BadMarker { .. },
                ..
            }
        ));
    }

    #[test]
    fn armor_roundtrip_classic_and_resurrected() {
        let mut cap = extended("cap");
        cap.quality = Quality::Magic {
            prefix: 23,
            suffix: 400,
        };
        cap.defense = Some(3);
        cap.durability = Some(Durability {
            max: 12,
            current: Some((10, false)),
        });
        cap.properties = vec![Property::new(0, [5]), Property::new(39, [-10])];
        let item = with_kind(ItemKind::Extended(Box::new(cap)));

        for version in [SaveVersion::CLASSIC, SaveVersion::RESURRECTED] {
            let bytes = encode_one(version, &item);
            assert_eq!(decode_one(version, &bytes), item);
        }
    }

    #[test]
    fn rare_set_runeword_and_name() {
        let mut ring = extended("rin");
        ring.quality = Quality::Rare(RareName {
            first: 12,
            second: 140,
            affixes: [Some(1), None, Some(700), None, None, Some(2047)],
        });
        ring.picture = Some(4);
        ring.class_data = Some(0x7ff);
        ring.personalized_name = Some("Tal".to_string());
        let mut item = with_kind(ItemKind::Extended(Box::new(ring)));
        item.flags.personalized = true;
        let bytes = encode_one(SaveVersion::CLASSIC, &item);
        assert_eq!(decode_one(SaveVersion::CLASSIC, &bytes), item);

        let mut boots = extended("lbt");
        boots.quality = Quality::Set {
            id: 9,
            bonus_mask: 0b10100,
            bonus_lists: vec![vec![Property::new(7, [20])], vec![]],
        };
        boots.defense = Some(20);
        boots.durability = Some(Durability {
            max: 0,
            current: None,
        });
        let item = with_kind(ItemKind::Extended(Box::new(boots)));
        let bytes = encode_one(SaveVersion::RESURRECTED_V2, &item);
        assert_eq!(decode_one(SaveVersion::RESURRECTED_V2, &bytes), item);
    }

    #[test]
    fn socketed_runeword_with_children() {
        let mut sword = extended("lsd");
        sword.runeword = Some(Runeword {
            id: 27,
            extra: 5,
            properties: vec![Property::new(19, [50])],
        });
        sword.durability = Some(Durability {
            max: 44,
            current: Some((44, true)),
        });
        sword.total_sockets = Some(2);
        let mut item = with_kind(ItemKind::Extended(Box::new(sword)));
        item.flags.socketed = true;
        item.flags.runeword = true;
        item.socketed_items = vec![simple("r09"), simple("r12")];

        let bytes = encode_one(SaveVersion::CLASSIC, &item);
        let decoded = decode_one(SaveVersion::CLASSIC, &bytes);
        assert_eq!(decoded.socketed_items.len(), 2);
        assert_eq!(decoded.socketed_items[1].code(), Some("r12"));
        assert_eq!(decoded, item);
    }

    #[test]
    fn ear_roundtrip() {
        let item = with_kind(ItemKind::Ear(Ear {
            class: 6,
            level: 99,
            name: "FifteenLetters_".to_string(),
        }));
        let bytes = encode_one(SaveVersion::CLASSIC, &item);
        assert_eq!(decode_one(SaveVersion::CLASSIC, &bytes), item);
    }

    #[test]
    fn ear_with_simple_bit_clear_reencodes_unchanged() {
        let item = with_kind(ItemKind::Ear(Ear {
            class: 1,
            level: 12,
            name: "Fallen".to_string(),
        }));
        let mut bytes = encode_one(SaveVersion::CLASSIC, &item);
        // Bit 21 of the flag word, after the two marker bytes.
        assert_eq!(bytes[4] & 0x20, 0x20);
        bytes[4] &= !0x20;

        let decoded = decode_one(SaveVersion::CLASSIC, &bytes);
        assert!(decoded.flags.ear_simple_clear);
        assert!(decoded.is_ear());
        assert_eq!(encode_one(SaveVersion::CLASSIC, &decoded), bytes);
    }

    #[test]
    fn nul_padded_code_reencodes_unchanged() {
        let spaced = encode_one(SaveVersion::CLASSIC, &simple("hp1"));
        let mut item = simple("hp1");
        item.nul_padded_code = true;
        let bytes = encode_one(SaveVersion::CLASSIC, &item);
        assert_ne!(bytes, spaced);

        let decoded = decode_one(SaveVersion::CLASSIC, &bytes);
        assert_eq!(decoded.code(), Some("hp1"));
        assert!(decoded.nul_padded_code);
        assert_eq!(encode_one(SaveVersion::CLASSIC, &decoded), bytes);

        let decoded = decode_one(SaveVersion::CLASSIC, &spaced);
        assert!(!decoded.nul_padded_code);
        assert_eq!(encode_one(SaveVersion::CLASSIC, &decoded), spaced);
    }

    #[test]
    fn golem_presence_byte_above_one_rejected() {
        let mut bytes = b"kf\x02".to_vec();
        bytes.extend_from_slice(&HP1);
        let mut reader = BitReader::new(&bytes);
        let err = decoder(SaveVersion::CLASSIC)
            .decode_golem(&mut reader)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(
            err,
            CodecError::InvalidValue {
                section: Section::Golem,
                field: "golem.present",
                offset: 2,
            }
        );
    }

    #[test]
    fn ear_name_too_long() {
        let item = with_kind(ItemKind::Ear(Ear {
            class: 0,
            level: 1,
            name: "SixteenLetters__".to_string(),
        }));
        let mut writer = BitWriter::new();
        let err = encoder(SaveVersion::CLASSIC)
            .encode_item(&item, Section::Items, true, &mut writer)
            .unwrap_err();
        assert_eq!(err, CodecError::out_of_range("item.ear.name", 16, 15));
    }

    #[test]
    fn tome_and_stack() {
        let mut tome = extended("tbk");
        tome.tome_data = Some(1);
        tome.quantity = Some(20);
        let item = with_kind(ItemKind::Extended(Box::new(tome)));
        let bytes = encode_one(SaveVersion::CLASSIC, &item);
        assert_eq!(decode_one(SaveVersion::CLASSIC, &bytes), item);
    }

    #[test]
    fn armor_without_defense_rejected() {
        let cap = extended("cap");
        let item = with_kind(ItemKind::Extended(Box::new(cap)));
        let mut writer = BitWriter::new();
        let err = encoder(SaveVersion::CLASSIC)
            .encode_item(&item, Section::Items, true, &mut writer)
            .unwrap_err();
        assert_eq!(err, CodecError::out_of_range("item.defense", 0, 1));
    }

    #[test]
    fn runeword_flag_without_data_rejected() {
        let mut item = with_kind(ItemKind::Extended(Box::new(extended("rin"))));
        item.flags.runeword = true;
        let mut writer = BitWriter::new();
        let err = encoder(SaveVersion::CLASSIC)
            .encode_item(&item, Section::Items, true, &mut writer)
            .unwrap_err();
        assert_eq!(err, CodecError::out_of_range("item.runeword", 0, 1));
    }

    #[test]
    fn unknown_code_is_misc() {
        let item = with_kind(ItemKind::Extended(Box::new(extended("zz9"))));
        let bytes = encode_one(SaveVersion::CLASSIC, &item);
        assert_eq!(decode_one(SaveVersion::CLASSIC, &bytes), item);
    }

    #[test]
    fn nested_sockets_rejected() {
        let mut jewel = with_kind(ItemKind::Extended(Box::new(extended("jew"))));
        jewel.socketed_items = vec![simple("gcv")];
        let mut shield = extended("buc");
        shield.defense = Some(4);
        shield.durability = Some(Durability {
            max: 0,
            current: None,
        });
        shield.total_sockets = Some(1);
        let mut item = with_kind(ItemKind::Extended(Box::new(shield)));
        item.flags.socketed = true;
        item.socketed_items = vec![jewel];

        let mut writer = BitWriter::new();
        let err = encoder(SaveVersion::CLASSIC)
            .encode_item(&item, Section::Items, true, &mut writer)
            .unwrap_err();
        assert_eq!(err, CodecError::out_of_range("item.socketed_items", 1, 0));
    }

    #[test]
    fn list_truncation_is_end_of_data() {
        let mut writer = BitWriter::new();
        let items = vec![simple("hp1"), simple("mp2"), simple("key")];
        encoder(SaveVersion::CLASSIC)
            .encode_list(&items, Section::Items, &mut writer)
            .unwrap();
        let bytes = writer.finish();
        for cut in 0..bytes.len() {
            let mut reader = BitReader::new(&bytes[..cut]);
            let err = decoder(SaveVersion::CLASSIC)
                .decode_list(&mut reader, Section::Items)
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnexpectedEndOfData, "cut at {cut}");
        }
        let mut reader = BitReader::new(&bytes);
        let decoded = decoder(SaveVersion::CLASSIC)
            .decode_list(&mut reader, Section::Items)
            .unwrap();
        assert_eq!(decoded, items);
    }

    #[test]
    fn list_count_limit() {
        let bytes = [b'J', b'M', 0xff, 0xff];
        let mut reader = BitReader::new(&bytes);
        let err = decoder(SaveVersion::CLASSIC)
            .decode_list(&mut reader, Section::Items)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LimitExceeded);
    }

    #[test]
    fn corpse_mercenary_and_golem_sections() {
        let enc = encoder(SaveVersion::CLASSIC);
        let mut writer = BitWriter::new();
        let corpses = vec![Corpse {
            data: [7; CORPSE_DATA_LEN],
            items: vec![simple("hp1")],
        }];
        enc.encode_corpses(&corpses, &mut writer).unwrap();
        enc.encode_mercenary(Some(&[simple("mp1")]), true, &mut writer)
            .unwrap();
        enc.encode_golem(Some(&simple("jew")), &mut writer).unwrap();
        let bytes = writer.finish();

        let dec = decoder(SaveVersion::CLASSIC);
        let mut reader = BitReader::new(&bytes);
        assert_eq!(dec.decode_corpses(&mut reader).unwrap(), corpses);
        let merc = dec.decode_mercenary(&mut reader, true).unwrap().unwrap();
        assert_eq!(merc[0].code(), Some("mp1"));
        let golem = dec.decode_golem(&mut reader).unwrap().unwrap();
        assert_eq!(golem.code(), Some("jew"));
        assert!(reader.is_empty());
    }

    #[test]
    fn unhired_mercenary_has_no_list() {
        let mut writer = BitWriter::new();
        encoder(SaveVersion::CLASSIC)
            .encode_mercenary(None, false, &mut writer)
            .unwrap();
        assert_eq!(writer.finish(), b"jf");

        let mut writer = BitWriter::new();
        let err = encoder(SaveVersion::CLASSIC)
            .encode_mercenary(Some(&[]), false, &mut writer)
            .unwrap_err();
        assert_eq!(err, CodecError::out_of_range("mercenary_items", 1, 0));
    }
}
