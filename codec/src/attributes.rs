//! The "gf" character stat list.
//!
//! A 9-bit id precedes each value; the value width comes from the stat table.
//! The list ends with id `0x1ff` and is padded to a byte boundary.

use bitstream::{BitReader, BitWriter};
use layout::Section;
use tables::{AttributeId, TableSet};

use crate::error::{CodecError, CodecResult, InSection};
use crate::framing::{expect_marker, write_marker};

const ID_BITS: u8 = 9;
const LIST_END: u64 = 0x1ff;
const FRACTION_BITS: u32 = 8;

/// One character stat, value stored exactly as on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    pub id: AttributeId,
    pub value: u32,
}

/// Character stats in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeList {
    pub entries: Vec<Attribute>,
    /// Bits after the terminator up to the byte boundary.
    #[cfg_attr(feature = "serde", serde(default))]
    pub padding: u8,
}

impl AttributeList {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw stored value of `id`.
    #[must_use]
    pub fn get(&self, id: AttributeId) -> Option<u32> {
        self.entries
            .iter()
            .find(|attr| attr.id == id)
            .map(|attr| attr.value)
    }

    /// Value of `id` with fixed-point fractions dropped.
    #[must_use]
    pub fn whole_value(&self, id: AttributeId, tables: &TableSet) -> Option<u32> {
        let value = self.get(id)?;
        match tables.attribute(id) {
            Some(def) if def.fixed_point => Some(value >> FRACTION_BITS),
            _ => Some(value),
        }
    }

    /// Sets `id` to a raw value, appending it if absent.
    pub fn set(&mut self, id: AttributeId, value: u32) {
        match self.entries.iter_mut().find(|attr| attr.id == id) {
            Some(attr) => attr.value = value,
            None => self.entries.push(Attribute { id, value }),
        }
    }
}

pub(crate) fn decode_attributes(
    reader: &mut BitReader<'_>,
    tables: &TableSet,
) -> CodecResult<AttributeList> {
    expect_marker(reader, Section::Attributes)?;
    let mut entries: Vec<Attribute> = Vec::new();
    loop {
        let bit_offset = reader.bit_position();
        let raw = reader.read_bits(ID_BITS).in_section(Section::Attributes)?;
        if raw == LIST_END {
            break;
        }
        // 9-bit read always fits.
        #[allow(clippy::cast_possible_truncation)]
        let id = AttributeId::new(raw as u16);
        let def = tables
            .attribute(id)
            .ok_or(CodecError::UnknownAttributeId {
                id: id.raw(),
                bit_offset,
            })?;
        if entries.iter().any(|attr| attr.id == id) {
            return Err(CodecError::DuplicateAttribute { id: id.raw() });
        }
        let value = reader
            .read_bits(def.bits)
            .in_section(Section::Attributes)?;
        // Table widths are capped at 32 bits.
        #[allow(clippy::cast_possible_truncation)]
        entries.push(Attribute {
            id,
            value: value as u32,
        });
    }
    let padding = reader.align_to_byte().in_section(Section::Attributes)?;
    Ok(AttributeList { entries, padding })
}

pub(crate) fn encode_attributes(
    list: &AttributeList,
    tables: &TableSet,
    writer: &mut BitWriter,
) -> CodecResult<()> {
    write_marker(writer, Section::Attributes)?;
    for (idx, attr) in list.entries.iter().enumerate() {
        let def = tables
            .attribute(attr.id)
            .ok_or(CodecError::UnknownAttributeId {
                id: attr.id.raw(),
                bit_offset: 0,
            })?;
        if list.entries[..idx].iter().any(|prev| prev.id == attr.id) {
            return Err(CodecError::DuplicateAttribute { id: attr.id.raw() });
        }
        if u64::from(attr.value) > def.max_value() {
            return Err(CodecError::out_of_range(
                format!("attributes.{}", def.name),
                i64::from(attr.value),
                i64::try_from(def.max_value()).unwrap_or(i64::MAX),
            ));
        }
        writer
            .write_bits(u64::from(attr.id.raw()), ID_BITS)
            .in_section(Section::Attributes)?;
        writer
            .write_bits(u64::from(attr.value), def.bits)
            .in_section(Section::Attributes)?;
    }
    writer
        .write_bits(LIST_END, ID_BITS)
        .in_section(Section::Attributes)?;
    writer
        .align_with(list.padding)
        .in_section(Section::Attributes)
}
