//! The fixed 335-byte character header.

use bitstream::{BitReader, BitWriter};
use layout::{offsets, FormatProfile, Preamble, SaveVersion, Section};
use tables::CharacterClass;

use crate::error::{CodecError, CodecResult, InSection};

const STATUS_HARDCORE: u8 = 1 << 2;
const STATUS_DEAD: u8 = 1 << 3;
const STATUS_RESURRECTED: u8 = 1 << 4;
const STATUS_EXPANSION: u8 = 1 << 5;
const STATUS_LADDER: u8 = 1 << 6;
const STATUS_KNOWN: u8 =
    STATUS_HARDCORE | STATUS_DEAD | STATUS_RESURRECTED | STATUS_EXPANSION | STATUS_LADDER;

/// Longest name that fits the slot with its terminator.
pub const MAX_NAME_LEN: usize = offsets::NAME_LEN - 1;

/// Character status byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Status {
    pub hardcore: bool,
    pub dead: bool,
    pub resurrected: bool,
    pub expansion: bool,
    pub ladder: bool,
    /// Bits with no known meaning, kept as stored.
    #[cfg_attr(feature = "serde", serde(default))]
    pub other_bits: u8,
}

impl Status {
    #[must_use]
    pub const fn from_byte(byte: u8) -> Self {
        Self {
            hardcore: byte & STATUS_HARDCORE != 0,
            dead: byte & STATUS_DEAD != 0,
            resurrected: byte & STATUS_RESURRECTED != 0,
            expansion: byte & STATUS_EXPANSION != 0,
            ladder: byte & STATUS_LADDER != 0,
            other_bits: byte & !STATUS_KNOWN,
        }
    }

    #[must_use]
    pub const fn to_byte(self) -> u8 {
        let mut byte = self.other_bits & !STATUS_KNOWN;
        if self.hardcore {
            byte |= STATUS_HARDCORE;
        }
        if self.dead {
            byte |= STATUS_DEAD;
        }
        if self.resurrected {
            byte |= STATUS_RESURRECTED;
        }
        if self.expansion {
            byte |= STATUS_EXPANSION;
        }
        if self.ladder {
            byte |= STATUS_LADDER;
        }
        byte
    }
}

/// The hired mercenary, all zero when none was ever hired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mercenary {
    pub dead: u16,
    pub id: u32,
    pub name_id: u16,
    pub kind: u16,
    pub experience: u32,
}

impl Mercenary {
    /// A mercenary is hired when its id is non-zero; only then is its item list stored.
    #[must_use]
    pub const fn is_hired(&self) -> bool {
        self.id != 0
    }
}

/// Everything before the quest block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    pub version: SaveVersion,
    /// File size as stored; recomputed on encode.
    pub file_size: u32,
    /// Checksum as stored; recomputed on encode.
    pub checksum: u32,
    pub active_arms: u32,
    pub name: String,
    /// The old name slot at byte 20, for versions that store the name elsewhere.
    #[cfg_attr(feature = "serde", serde(default))]
    pub legacy_name_slot: Option<[u8; offsets::NAME_LEN]>,
    pub status: Status,
    pub progression: u8,
    pub unknown_26: [u8; 2],
    pub class: CharacterClass,
    pub unknown_29: [u8; 2],
    pub level: u8,
    pub created: u32,
    pub last_played: u32,
    pub unknown_34: [u8; 4],
    /// Skill ids bound to the 16 hot keys.
    pub hotkeys: [u32; 16],
    /// Left, right, swap-left and swap-right skill ids.
    pub mouse_skills: [u32; 4],
    /// Menu appearance graphics and colors.
    pub appearance: [u8; 32],
    /// Progress marker for normal, nightmare and hell.
    pub difficulty: [u8; 3],
    pub map_id: u32,
    pub unknown_af: [u8; 2],
    pub mercenary: Mercenary,
    /// The 144 bytes closing the header.
    pub reserved: Vec<u8>,
}

/// Byte-aligned field reads over the header.
struct Fields<'r, 'a> {
    reader: &'r mut BitReader<'a>,
}

impl<'a> Fields<'_, 'a> {
    fn bytes(&mut self, len: usize) -> CodecResult<&'a [u8]> {
        self.reader.read_bytes(len).in_section(Section::Header)
    }

    fn array<const N: usize>(&mut self) -> CodecResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.bytes(N)?);
        Ok(out)
    }

    fn u8(&mut self) -> CodecResult<u8> {
        self.reader.read_u8_aligned().in_section(Section::Header)
    }

    fn u16(&mut self) -> CodecResult<u16> {
        self.reader.read_u16_aligned().in_section(Section::Header)
    }

    fn u32(&mut self) -> CodecResult<u32> {
        self.reader.read_u32_aligned().in_section(Section::Header)
    }
}

/// Decodes the header fields after the 16-byte preamble.
///
/// `reader` must be positioned at [`offsets::ACTIVE_ARMS`].
pub(crate) fn decode_header(
    reader: &mut BitReader<'_>,
    preamble: &Preamble,
    profile: FormatProfile,
) -> CodecResult<Header> {
    let mut fields = Fields { reader };
    let active_arms = fields.u32()?;
    let name_slot: [u8; offsets::NAME_LEN] = fields.array()?;
    let status = Status::from_byte(fields.u8()?);
    let progression = fields.u8()?;
    let unknown_26 = fields.array()?;
    let class_id = fields.u8()?;
    let class =
        CharacterClass::from_id(class_id).map_err(|_| CodecError::UnknownClass { id: class_id })?;
    let unknown_29 = fields.array()?;
    let level = fields.u8()?;
    let created = fields.u32()?;
    let last_played = fields.u32()?;
    let unknown_34 = fields.array()?;
    let mut hotkeys = [0u32; 16];
    for slot in &mut hotkeys {
        *slot = fields.u32()?;
    }
    let mut mouse_skills = [0u32; 4];
    for slot in &mut mouse_skills {
        *slot = fields.u32()?;
    }
    let appearance = fields.array()?;
    let difficulty = fields.array()?;
    let map_id = fields.u32()?;
    let unknown_af = fields.array()?;
    let mercenary = Mercenary {
        dead: fields.u16()?,
        id: fields.u32()?,
        name_id: fields.u16()?,
        kind: fields.u16()?,
        experience: fields.u32()?,
    };
    let reserved = fields.bytes(offsets::RESERVED_TAIL_LEN)?.to_vec();

    let (name, legacy_name_slot) = match profile {
        FormatProfile::ResurrectedRelocatedName => {
            let start = offsets::RELOCATED_NAME - offsets::RESERVED_TAIL;
            let slot = reserved
                .get(start..start + offsets::NAME_LEN)
                .unwrap_or_default();
            (decode_name(slot, offsets::RELOCATED_NAME)?, Some(name_slot))
        }
        FormatProfile::Classic | FormatProfile::Resurrected => {
            (decode_name(&name_slot, offsets::NAME)?, None)
        }
    };

    Ok(Header {
        version: preamble.version,
        file_size: preamble.file_size,
        checksum: preamble.checksum,
        active_arms,
        name,
        legacy_name_slot,
        status,
        progression,
        unknown_26,
        class,
        unknown_29,
        level,
        created,
        last_played,
        unknown_34,
        hotkeys,
        mouse_skills,
        appearance,
        difficulty,
        map_id,
        unknown_af,
        mercenary,
        reserved,
    })
}

/// Encodes the whole header, preamble included.
///
/// The size and checksum words are written as zero and patched once the
/// file is complete.
pub(crate) fn encode_header(
    header: &Header,
    profile: FormatProfile,
    writer: &mut BitWriter,
) -> CodecResult<()> {
    let name = name_slot(&header.name)?;
    if header.reserved.len() != offsets::RESERVED_TAIL_LEN {
        return Err(CodecError::out_of_range(
            "header.reserved",
            len_i64(header.reserved.len()),
            len_i64(offsets::RESERVED_TAIL_LEN),
        ));
    }

    let mut out = Vec::with_capacity(offsets::QUESTS);
    out.extend_from_slice(&layout::MAGIC.to_le_bytes());
    out.extend_from_slice(&header.version.raw().to_le_bytes());
    out.extend_from_slice(&[0u8; 8]);
    out.extend_from_slice(&header.active_arms.to_le_bytes());
    match profile {
        FormatProfile::ResurrectedRelocatedName => {
            out.extend_from_slice(&header.legacy_name_slot.unwrap_or_default());
        }
        FormatProfile::Classic | FormatProfile::Resurrected => out.extend_from_slice(&name),
    }
    out.push(header.status.to_byte());
    out.push(header.progression);
    out.extend_from_slice(&header.unknown_26);
    out.push(header.class.id());
    out.extend_from_slice(&header.unknown_29);
    out.push(header.level);
    out.extend_from_slice(&header.created.to_le_bytes());
    out.extend_from_slice(&header.last_played.to_le_bytes());
    out.extend_from_slice(&header.unknown_34);
    for skill in header.hotkeys.iter().chain(&header.mouse_skills) {
        out.extend_from_slice(&skill.to_le_bytes());
    }
    out.extend_from_slice(&header.appearance);
    out.extend_from_slice(&header.difficulty);
    out.extend_from_slice(&header.map_id.to_le_bytes());
    out.extend_from_slice(&header.unknown_af);
    let merc = &header.mercenary;
    out.extend_from_slice(&merc.dead.to_le_bytes());
    out.extend_from_slice(&merc.id.to_le_bytes());
    out.extend_from_slice(&merc.name_id.to_le_bytes());
    out.extend_from_slice(&merc.kind.to_le_bytes());
    out.extend_from_slice(&merc.experience.to_le_bytes());
    out.extend_from_slice(&header.reserved);
    if profile == FormatProfile::ResurrectedRelocatedName {
        let start = offsets::RELOCATED_NAME;
        out[start..start + offsets::NAME_LEN].copy_from_slice(&name);
    }
    debug_assert_eq!(out.len(), offsets::QUESTS);

    writer.write_bytes(&out).in_section(Section::Header)
}

/// Reads a name slot: UTF-8 text, a terminator, then zero fill.
///
/// Anything else would not survive [`name_slot`], so it is rejected.
fn decode_name(slot: &[u8], offset: usize) -> CodecResult<String> {
    let invalid = || CodecError::InvalidValue {
        section: Section::Header,
        field: "header.name",
        offset,
    };
    let end = slot.iter().position(|&b| b == 0).ok_or_else(invalid)?;
    if slot[end..].iter().any(|&b| b != 0) {
        return Err(invalid());
    }
    std::str::from_utf8(&slot[..end])
        .map(str::to_string)
        .map_err(|_| invalid())
}

fn name_slot(name: &str) -> CodecResult<[u8; offsets::NAME_LEN]> {
    let bytes = name.as_bytes();
    if bytes.len() > MAX_NAME_LEN || bytes.contains(&0) {
        return Err(CodecError::out_of_range(
            "header.name",
            len_i64(bytes.len()),
            len_i64(MAX_NAME_LEN),
        ));
    }
    let mut slot = [0u8; offsets::NAME_LEN];
    slot[..bytes.len()].copy_from_slice(bytes);
    Ok(slot)
}

pub(crate) fn len_i64(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout::{decode_preamble, Limits};

    fn sample_header(version: SaveVersion) -> Header {
        Header {
            version,
            file_size: 0,
            checksum: 0,
            active_arms: 0,
            name: "Conan".to_string(),
            legacy_name_slot: (version == SaveVersion::RESURRECTED_V2).then_some([0; 16]),
            status: Status {
                expansion: true,
                ..Status::default()
            },
            progression: 0,
            unknown_26: [0; 2],
            class: CharacterClass::Barbarian,
            unknown_29: [0x10, 0x1e],
            level: 1,
            created: 0,
            last_played: 0x5f00_0000,
            unknown_34: [0xff; 4],
            hotkeys: [0xffff; 16],
            mouse_skills: [0; 4],
            appearance: [0xff; 32],
            difficulty: [0x80, 0, 0],
            map_id: 0x1234_5678,
            unknown_af: [0; 2],
            mercenary: Mercenary::default(),
            reserved: vec![0; offsets::RESERVED_TAIL_LEN],
        }
    }

    fn roundtrip(header: &Header) -> Header {
        let profile = header.version.nearest_profile();
        let mut writer = BitWriter::new();
        encode_header(header, profile, &mut writer).unwrap();
        let mut bytes = writer.finish();
        assert_eq!(bytes.len(), offsets::QUESTS);
        bytes.resize(layout::HEADER_SIZE, 0);

        let preamble = decode_preamble(&bytes, &Limits::default()).unwrap();
        let mut reader = BitReader::new(&bytes);
        reader.read_bytes(offsets::ACTIVE_ARMS).unwrap();
        decode_header(&mut reader, &preamble, profile).unwrap()
    }

    #[test]
    fn status_bits() {
        let status = Status::from_byte(0b0110_0101);
        assert!(status.hardcore);
        assert!(!status.dead);
        assert!(status.expansion);
        assert!(status.ladder);
        assert_eq!(status.other_bits, 0b0000_0001);
        assert_eq!(status.to_byte(), 0b0110_0101);
    }

    #[test]
    fn resurrected_is_bit_four() {
        assert!(Status::from_byte(0x10).resurrected);
        assert_eq!(
            Status {
                resurrected: true,
                ..Status::default()
            }
            .to_byte(),
            0x10
        );
    }

    #[test]
    fn classic_header_roundtrip() {
        let header = sample_header(SaveVersion::CLASSIC);
        assert_eq!(roundtrip(&header), header);
    }

    #[test]
    fn relocated_name_roundtrip() {
        let mut header = sample_header(SaveVersion::RESURRECTED_V2);
        header.legacy_name_slot = Some(*b"old slot\0\0\0\0\0\0\0\0");
        let decoded = roundtrip(&header);
        assert_eq!(decoded.name, "Conan");
        assert_eq!(decoded.legacy_name_slot, header.legacy_name_slot);
        let start = offsets::RELOCATED_NAME - offsets::RESERVED_TAIL;
        assert_eq!(&decoded.reserved[start..start + 5], b"Conan");
    }

    #[test]
    fn name_written_at_fixed_offset() {
        let header = sample_header(SaveVersion::CLASSIC);
        let mut writer = BitWriter::new();
        encode_header(&header, FormatProfile::Classic, &mut writer).unwrap();
        let bytes = writer.finish();
        assert_eq!(&bytes[offsets::NAME..offsets::NAME + 6], b"Conan\0");
        assert_eq!(bytes[offsets::CLASS], 4);
        assert_eq!(bytes[offsets::STATUS], 0x20);
        assert_eq!(&bytes[offsets::MAP_ID..offsets::MAP_ID + 4], &[0x78, 0x56, 0x34, 0x12]);
    }

    #[test]
    fn long_name_rejected() {
        let mut header = sample_header(SaveVersion::CLASSIC);
        header.name = "ThisNameIsTooLong".to_string();
        let mut writer = BitWriter::new();
        let err = encode_header(&header, FormatProfile::Classic, &mut writer).unwrap_err();
        assert_eq!(err, CodecError::out_of_range("header.name", 17, 15));
    }

    fn decode_with_name_slot(slot: [u8; offsets::NAME_LEN]) -> CodecResult<Header> {
        let header = sample_header(SaveVersion::CLASSIC);
        let mut writer = BitWriter::new();
        encode_header(&header, FormatProfile::Classic, &mut writer).unwrap();
        let mut bytes = writer.finish();
        bytes.resize(layout::HEADER_SIZE, 0);
        bytes[offsets::NAME..offsets::NAME + offsets::NAME_LEN].copy_from_slice(&slot);

        let preamble = decode_preamble(&bytes, &Limits::default()).unwrap();
        let mut reader = BitReader::new(&bytes);
        reader.read_bytes(offsets::ACTIVE_ARMS).unwrap();
        decode_header(&mut reader, &preamble, FormatProfile::Classic)
    }

    #[test]
    fn name_slot_must_survive_reencode() {
        let invalid = CodecError::InvalidValue {
            section: Section::Header,
            field: "header.name",
            offset: offsets::NAME,
        };
        assert_eq!(
            decode_with_name_slot(*b"C\xe9nan\0\0\0\0\0\0\0\0\0\0\0").unwrap_err(),
            invalid
        );
        assert_eq!(
            decode_with_name_slot(*b"Conan\0junk\0\0\0\0\0\0").unwrap_err(),
            invalid
        );
        assert_eq!(
            decode_with_name_slot(*b"SixteenLetters__").unwrap_err(),
            invalid
        );
        let header = decode_with_name_slot(*b"Conan\0\0\0\0\0\0\0\0\0\0\0").unwrap();
        assert_eq!(header.name, "Conan");
    }

    #[test]
    fn short_reserved_rejected() {
        let mut header = sample_header(SaveVersion::CLASSIC);
        header.reserved.pop();
        let mut writer = BitWriter::new();
        let err = encode_header(&header, FormatProfile::Classic, &mut writer).unwrap_err();
        assert!(matches!(err, CodecError::ValueOutOfRange { ref field, .. } if field == "header.reserved"));
    }

    #[test]
    fn unknown_class_rejected() {
        let header = sample_header(SaveVersion::CLASSIC);
        let mut writer = BitWriter::new();
        encode_header(&header, FormatProfile::Classic, &mut writer).unwrap();
        let mut bytes = writer.finish();
        bytes.resize(layout::HEADER_SIZE, 0);
        bytes[offsets::CLASS] = 7;

        let preamble = decode_preamble(&bytes, &Limits::default()).unwrap();
        let mut reader = BitReader::new(&bytes);
        reader.read_bytes(offsets::ACTIVE_ARMS).unwrap();
        let err = decode_header(&mut reader, &preamble, FormatProfile::Classic).unwrap_err();
        assert_eq!(err, CodecError::UnknownClass { id: 7 });
    }

    #[test]
    fn mercenary_hired() {
        let mut merc = Mercenary::default();
        assert!(!merc.is_hired());
        merc.id = 0xdead;
        assert!(merc.is_hired());
    }
}
