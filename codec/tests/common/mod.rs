//! Synthetic save files shared by the integration tests.
#![allow(dead_code)]

use codec::SaveVersion;
use layout::{checksum, offsets};
use tables::CharacterClass;

/// Attributes of a fresh level 1 barbarian.
pub const ATTRIBUTES: [u8; 38] = [
    103, 102, 0, 60, 8, 160, 128, 0, 10, 6, 100, 96, 0, 224, 6, 28, 0, 184, 1, 8, 0, 20, 64, 2,
    0, 5, 160, 0, 128, 11, 44, 0, 224, 2, 12, 2, 255, 1,
];

/// Starting inventory of a barbarian: four potions, two scrolls, an axe and a buckler.
pub const STARTER_ITEMS: [u8; 136] = [
    74, 77, 8, 0, 74, 77, 16, 32, 162, 0, 101, 8, 0, 128, 6, 23, 3, 2, 74, 77, 16, 32, 162, 0,
    101, 8, 2, 128, 6, 23, 3, 2, 74, 77, 16, 32, 162, 0, 101, 8, 4, 128, 6, 23, 3, 2, 74, 77, 16,
    32, 162, 0, 101, 8, 6, 128, 6, 23, 3, 2, 74, 77, 16, 32, 162, 0, 101, 0, 114, 66, 55, 55, 6,
    2, 74, 77, 16, 32, 162, 0, 101, 0, 82, 146, 54, 55, 6, 2, 74, 77, 16, 32, 130, 0, 101, 132, 8,
    128, 22, 134, 7, 2, 73, 10, 205, 163, 128, 128, 131, 195, 127, 74, 77, 16, 32, 130, 0, 101,
    164, 10, 32, 86, 55, 6, 2, 13, 71, 163, 205, 128, 224, 1, 12, 12, 254, 3,
];

/// A classic minor healing potion in the belt.
pub const HP1: [u8; 14] = [74, 77, 16, 32, 34, 0, 0, 8, 0, 128, 6, 23, 3, 2];

/// A Resurrected super healing potion.
pub const HP5: [u8; 10] = [16, 0, 160, 0, 5, 228, 4, 79, 180, 0];

pub const EXPANSION: u8 = 1 << 5;

pub struct SaveSpec<'a> {
    pub version: SaveVersion,
    pub name: &'a str,
    pub status: u8,
    pub level: u8,
    pub mercenary_id: u32,
    pub attributes: &'a [u8],
    pub skills: Option<[u8; 30]>,
    pub items: &'a [u8],
    pub tail: &'a [u8],
}

impl Default for SaveSpec<'_> {
    fn default() -> Self {
        Self {
            version: SaveVersion::CLASSIC,
            name: "Conan",
            status: 0,
            level: 1,
            mercenary_id: 0,
            attributes: &ATTRIBUTES,
            skills: None,
            items: b"JM\x00\x00",
            tail: b"JM\x00\x00",
        }
    }
}

fn put_u32(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

pub fn build_save(spec: &SaveSpec<'_>) -> Vec<u8> {
    let mut header = vec![0u8; offsets::QUESTS];
    put_u32(&mut header, offsets::MAGIC, layout::MAGIC);
    put_u32(&mut header, offsets::VERSION, spec.version.raw());
    let name_at = if spec.version == SaveVersion::RESURRECTED_V2 {
        offsets::RELOCATED_NAME
    } else {
        offsets::NAME
    };
    header[name_at..name_at + spec.name.len()].copy_from_slice(spec.name.as_bytes());
    header[offsets::STATUS] = spec.status;
    header[offsets::CLASS] = CharacterClass::Barbarian.id();
    header[offsets::LEVEL] = spec.level;
    put_u32(&mut header, offsets::MERCENARY + 2, spec.mercenary_id);

    let mut bytes = header;
    bytes.extend_from_slice(b"Woo!");
    bytes.extend_from_slice(&6u32.to_le_bytes());
    bytes.extend_from_slice(&298u16.to_le_bytes());
    bytes.extend_from_slice(&[0u8; 288]);
    bytes.extend_from_slice(b"WS");
    bytes.extend_from_slice(&1u32.to_le_bytes());
    bytes.extend_from_slice(&80u16.to_le_bytes());
    bytes.extend_from_slice(&[0u8; 72]);
    bytes.extend_from_slice(&[0x01, 0x77]);
    bytes.extend_from_slice(&52u16.to_le_bytes());
    bytes.extend_from_slice(&[0u8; 48]);
    assert_eq!(bytes.len(), offsets::ATTRIBUTES);

    bytes.extend_from_slice(spec.attributes);
    if let Some(skills) = spec.skills {
        bytes.extend_from_slice(b"if");
        bytes.extend_from_slice(&skills);
    }
    bytes.extend_from_slice(spec.items);
    bytes.extend_from_slice(spec.tail);
    checksum::patch(&mut bytes).unwrap();
    bytes
}

pub fn starter_save() -> Vec<u8> {
    build_save(&SaveSpec {
        items: &STARTER_ITEMS,
        ..SaveSpec::default()
    })
}

pub fn list_of(items: &[&[u8]]) -> Vec<u8> {
    let mut list = b"JM".to_vec();
    list.extend_from_slice(&u16::try_from(items.len()).unwrap().to_le_bytes());
    for item in items {
        list.extend_from_slice(item);
    }
    list
}
