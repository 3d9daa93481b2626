use std::ops::Range;

use codec::{encode, parse, Character, ItemKind};
use layout::{checksum, offsets};
use proptest::prelude::*;
use proptest::sample::Index;
use tables::AttributeId;

mod common;

use common::{
    build_save, list_of, starter_save, SaveSpec, ATTRIBUTES, EXPANSION, HP1, STARTER_ITEMS,
};

fn starter() -> Character {
    parse(&starter_save()).unwrap()
}

/// An expansion save with the starter inventory, a mercenary and a golem.
fn expansion_save() -> Vec<u8> {
    let mut tail = b"JM\x00\x00jf".to_vec();
    tail.extend_from_slice(&list_of(&[&HP1]));
    tail.extend_from_slice(b"kf\x01");
    tail.extend_from_slice(&HP1);
    build_save(&SaveSpec {
        status: EXPANSION,
        mercenary_id: 0x0bad_cafe,
        items: &STARTER_ITEMS,
        tail: &tail,
        ..SaveSpec::default()
    })
}

/// Header fields after the size and checksum, the player items, and the tail lists.
fn mutable_regions(len: usize) -> [Range<usize>; 3] {
    let items = offsets::ATTRIBUTES + ATTRIBUTES.len();
    let tail = items + STARTER_ITEMS.len();
    [offsets::ACTIVE_ARMS..offsets::QUESTS, items..tail, tail..len]
}

proptest! {
    #[test]
    fn header_edits_roundtrip(
        name in "[A-Za-z][A-Za-z_-]{1,14}",
        level in 1u8..=99,
        created in any::<u32>(),
        hotkey in any::<u32>(),
    ) {
        let mut character = starter();
        character.header.name = name;
        character.header.created = created;
        character.header.hotkeys[3] = hotkey;
        character.header.level = level;
        if level > 1 {
            character.skills.levels = vec![1; 30];
        }

        let bytes = encode(&character).unwrap();
        let reparsed = parse(&bytes).unwrap();
        character.header.file_size = reparsed.header.file_size;
        character.header.checksum = reparsed.header.checksum;
        prop_assert_eq!(reparsed, character);
    }

    #[test]
    fn attribute_values_roundtrip(
        strength in 0u32..1024,
        hit_points in 0u32..(1 << 21),
        experience in any::<u32>(),
        gold in 0u32..(1 << 25),
    ) {
        let mut character = starter();
        character.attributes.set(AttributeId::STRENGTH, strength);
        character.attributes.set(AttributeId::HIT_POINTS, hit_points);
        character.attributes.set(AttributeId::EXPERIENCE, experience);
        character.attributes.set(AttributeId::GOLD, gold);

        let reparsed = parse(&encode(&character).unwrap()).unwrap();
        prop_assert_eq!(reparsed.attributes, character.attributes);
    }

    #[test]
    fn item_positions_roundtrip(
        x in 0u8..16,
        y in 0u8..16,
        location in 0u8..8,
        id in any::<u32>(),
        current in 0u8..=28,
    ) {
        let mut character = starter();
        let axe = &mut character.items[6];
        axe.x = x;
        axe.y = y;
        axe.location = location;
        let ItemKind::Extended(extended) = &mut axe.kind else {
            panic!("axe is extended");
        };
        extended.id = id;
        if let Some(durability) = extended.durability.as_mut() {
            durability.current = Some((current, false));
        }

        let reparsed = parse(&encode(&character).unwrap()).unwrap();
        prop_assert_eq!(&reparsed.items, &character.items);
    }

    #[test]
    fn mutated_saves_reencode_byte_for_byte(
        edits in proptest::collection::vec((0usize..3, any::<Index>(), 1u8..=255), 1..6),
    ) {
        let mut bytes = expansion_save();
        let regions = mutable_regions(bytes.len());
        for (region, at, mask) in edits {
            let range = &regions[region];
            bytes[range.start + at.index(range.len())] ^= mask;
        }
        checksum::patch(&mut bytes).unwrap();

        if let Ok(character) = parse(&bytes) {
            prop_assert_eq!(encode(&character).unwrap(), bytes);
        }
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..1200)) {
        let _ = parse(&bytes);
    }
}
