//! Item property lists: 9-bit stat ids, table-driven values, `0x1ff` end.

use bitstream::{BitReader, BitWriter};
use layout::Section;
use tables::{ItemStatDef, StatEncoding, TableSet, PROPERTY_LIST_END, STAT_ID_BITS};

use crate::error::{CodecError, CodecResult, InSection, ItemFault};
use crate::header::len_i64;
use crate::item::Property;

const SKILL_TAB_BITS: u32 = 3;
const SKILL_CLASS_BITS: u32 = 13;
const SKILL_LEVEL_BITS: u32 = 6;
const SKILL_ID_BITS: u32 = 10;
const CHARGE_BITS: u32 = 8;

/// Widths of the parts a stat's parameter and value split into.
fn parts(def: &ItemStatDef) -> (&'static [u32], &'static [u32]) {
    let param: &'static [u32] = match (def.param_bits, def.encoding) {
        (0, _) => &[],
        (_, StatEncoding::Plain) => &[u32::MAX],
        (_, StatEncoding::SkillTab) => &[SKILL_TAB_BITS, SKILL_CLASS_BITS],
        (_, StatEncoding::ChanceToCast | StatEncoding::Charges) => {
            &[SKILL_LEVEL_BITS, SKILL_ID_BITS]
        }
    };
    let value: &'static [u32] = match def.encoding {
        StatEncoding::Charges => &[CHARGE_BITS, CHARGE_BITS],
        _ => &[u32::MAX],
    };
    (param, value)
}

// Table widths are capped at 32 bits, so stored values always fit.
#[allow(clippy::cast_possible_wrap)]
const fn signed(raw: u64) -> i64 {
    raw as i64
}

const fn mask(bits: u32) -> u64 {
    (1u64 << bits) - 1
}

/// Reads a property list up to and including its terminator.
pub(crate) fn decode_properties(
    reader: &mut BitReader<'_>,
    tables: &TableSet,
    limit: usize,
) -> Result<Vec<Property>, ItemFault> {
    let mut list = Vec::new();
    loop {
        // 9-bit read always fits.
        #[allow(clippy::cast_possible_truncation)]
        let id = reader.read_bits(STAT_ID_BITS)? as u16;
        if id == PROPERTY_LIST_END {
            return Ok(list);
        }
        if list.len() >= limit {
            return Err(ItemFault::TooManyProperties { limit });
        }
        let head = tables.item_stat(id).ok_or(ItemFault::UnknownStat { id })?;
        let mut values = Vec::new();
        for member in 0..u16::from(head.group_size) {
            let member_id = id + member;
            let def = tables
                .item_stat(member_id)
                .ok_or(ItemFault::UnknownStat { id: member_id })?;
            decode_stat(reader, def, &mut values)?;
        }
        list.push(Property { id, values });
    }
}

fn decode_stat(
    reader: &mut BitReader<'_>,
    def: &ItemStatDef,
    values: &mut Vec<i64>,
) -> Result<(), ItemFault> {
    if def.param_bits > 0 {
        let mut param = reader.read_bits(def.param_bits)?;
        match def.encoding {
            StatEncoding::Plain => {}
            StatEncoding::SkillTab => {
                values.push(signed(param & mask(SKILL_TAB_BITS)));
                param = (param >> SKILL_TAB_BITS) & mask(SKILL_CLASS_BITS);
            }
            StatEncoding::ChanceToCast | StatEncoding::Charges => {
                values.push(signed(param & mask(SKILL_LEVEL_BITS)));
                param = (param >> SKILL_LEVEL_BITS) & mask(SKILL_ID_BITS);
            }
        }
        values.push(signed(param));
    }
    let value = signed(reader.read_bits(def.save_bits)?) - i64::from(def.save_add);
    if def.encoding == StatEncoding::Charges {
        values.push(value & signed(mask(CHARGE_BITS)));
        values.push((value >> CHARGE_BITS) & signed(mask(CHARGE_BITS)));
    } else {
        values.push(value);
    }
    Ok(())
}

/// Writes a property list and its terminator.
pub(crate) fn encode_properties(
    list: &[Property],
    tables: &TableSet,
    section: Section,
    writer: &mut BitWriter,
) -> CodecResult<()> {
    for property in list {
        let head = tables
            .item_stat(property.id)
            .filter(|_| property.id != PROPERTY_LIST_END)
            .ok_or_else(|| {
                CodecError::out_of_range(
                    "item.properties.id",
                    i64::from(property.id),
                    i64::from(PROPERTY_LIST_END - 1),
                )
            })?;
        let field = format!("item.properties.{}", head.name);

        let mut defs = Vec::with_capacity(usize::from(head.group_size));
        for member in 0..u16::from(head.group_size) {
            let member_id = property.id + member;
            let def = tables.item_stat(member_id).ok_or_else(|| {
                CodecError::out_of_range(
                    "item.properties.id",
                    i64::from(member_id),
                    i64::from(PROPERTY_LIST_END - 1),
                )
            })?;
            defs.push(def);
        }
        let expected: usize = defs
            .iter()
            .map(|def| {
                let (param, value) = parts(def);
                param.len() + value.len()
            })
            .sum();
        if property.values.len() != expected {
            return Err(CodecError::out_of_range(
                format!("{field}.values"),
                len_i64(property.values.len()),
                len_i64(expected),
            ));
        }

        writer
            .write_bits(u64::from(property.id), STAT_ID_BITS)
            .in_section(section)?;
        let mut values = property.values.iter().copied();
        for def in defs {
            encode_stat(def, &mut values, &field, section, writer)?;
        }
    }
    writer
        .write_bits(u64::from(PROPERTY_LIST_END), STAT_ID_BITS)
        .in_section(section)
}

fn encode_stat(
    def: &ItemStatDef,
    values: &mut impl Iterator<Item = i64>,
    field: &str,
    section: Section,
    writer: &mut BitWriter,
) -> CodecResult<()> {
    let (param_parts, value_parts) = parts(def);
    if !param_parts.is_empty() {
        let param = pack(param_parts, values, def.param_bits, 0, field)?;
        writer.write_bits(param, def.param_bits).in_section(section)?;
    }
    let raw = pack(value_parts, values, def.save_bits, def.save_add, field)?;
    writer.write_bits(raw, def.save_bits).in_section(section)
}

/// Joins parts lowest first, adds the bias, and checks the result fits `bits`.
///
/// A part width of `u32::MAX` means the part fills the whole field.
fn pack(
    widths: &[u32],
    values: &mut impl Iterator<Item = i64>,
    bits: u8,
    bias: i32,
    field: &str,
) -> CodecResult<u64> {
    let field_max = signed(mask(u32::from(bits)));
    let mut packed = 0i64;
    let mut shift = 0u32;
    for &width in widths {
        let value = values.next().unwrap_or_default();
        if width == u32::MAX {
            packed = value;
            continue;
        }
        let part_max = signed(mask(width));
        if !(0..=part_max).contains(&value) {
            return Err(CodecError::out_of_range(field, value, part_max));
        }
        packed |= value << shift;
        shift += width;
    }
    let raw = packed + i64::from(bias);
    if !(0..=field_max).contains(&raw) {
        return Err(CodecError::out_of_range(field, packed, field_max - i64::from(bias)));
    }
    u64::try_from(raw).map_err(|_| CodecError::out_of_range(field, packed, field_max))
}
