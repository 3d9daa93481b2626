//! The "if" skill section: one level byte per class skill.

use bitstream::{BitReader, BitWriter};
use layout::Section;
use tables::{CharacterClass, TableSet, SKILLS_PER_CLASS};

use crate::error::{CodecError, CodecResult, InSection};
use crate::framing::{at_marker, expect_marker, write_marker};
use crate::header::len_i64;

/// Skill levels in class order.
///
/// Entry `n` is the level of the class's `n`th skill. Empty only when the
/// save carries no skill section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SkillTree {
    pub levels: Vec<u8>,
}

impl SkillTree {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Pairs each level with its global skill id.
    pub fn iter_with_ids<'a>(
        &'a self,
        class: CharacterClass,
        tables: &'a TableSet,
    ) -> CodecResult<impl Iterator<Item = (u16, u8)> + 'a> {
        let def = class_def(class, tables)?;
        Ok(def.skill_range().zip(self.levels.iter().copied()))
    }
}

fn class_def(class: CharacterClass, tables: &TableSet) -> CodecResult<&tables::ClassDef> {
    tables
        .class_by_id(class.id())
        .map_err(|_| CodecError::UnknownClass { id: class.id() })
}

/// Decodes the skill section.
///
/// A level 1 character may lack the section entirely; nothing is consumed then.
pub(crate) fn decode_skills(
    reader: &mut BitReader<'_>,
    class: CharacterClass,
    level: u8,
    tables: &TableSet,
) -> CodecResult<SkillTree> {
    class_def(class, tables)?;
    if level <= 1 && !at_marker(reader, Section::Skills) {
        return Ok(SkillTree::default());
    }
    expect_marker(reader, Section::Skills)?;
    let levels = reader
        .read_bytes(SKILLS_PER_CLASS)
        .in_section(Section::Skills)?
        .to_vec();
    Ok(SkillTree { levels })
}

pub(crate) fn encode_skills(
    tree: &SkillTree,
    class: CharacterClass,
    tables: &TableSet,
    writer: &mut BitWriter,
) -> CodecResult<()> {
    class_def(class, tables)?;
    if tree.is_empty() {
        return Ok(());
    }
    if tree.levels.len() != SKILLS_PER_CLASS {
        return Err(CodecError::out_of_range(
            "skills",
            len_i64(tree.levels.len()),
            len_i64(SKILLS_PER_CLASS),
        ));
    }
    write_marker(writer, Section::Skills)?;
    writer
        .write_bytes(&tree.levels)
        .in_section(Section::Skills)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use layout::SaveVersion;

    fn tables() -> &'static TableSet {
        TableSet::builtin(SaveVersion::CLASSIC)
    }

    fn section(levels: &[u8]) -> Vec<u8> {
        let mut bytes = b"if".to_vec();
        bytes.extend_from_slice(levels);
        bytes
    }

    #[test]
    fn decodes_thirty_levels() {
        let mut levels = [0u8; 30];
        levels[3] = 1;
        levels[29] = 20;
        let bytes = section(&levels);
        let mut reader = BitReader::new(&bytes);
        let tree = decode_skills(&mut reader, CharacterClass::Sorceress, 30, tables()).unwrap();
        assert!(reader.is_empty());
        assert_eq!(tree.levels, levels);

        let ids: Vec<_> = tree
            .iter_with_ids(CharacterClass::Sorceress, tables())
            .unwrap()
            .filter(|&(_, level)| level > 0)
            .collect();
        assert_eq!(ids, vec![(39, 1), (65, 20)]);
    }

    #[test]
    fn level_one_without_section_is_empty() {
        let bytes = *b"JM\x00\x00";
        let mut reader = BitReader::new(&bytes);
        let tree = decode_skills(&mut reader, CharacterClass::Amazon, 1, tables()).unwrap();
        assert!(tree.is_empty());
        assert_eq!(reader.bit_position(), 0);
    }

    #[test]
    fn higher_level_requires_section() {
        let bytes = *b"JM\x00\x00";
        let mut reader = BitReader::new(&bytes);
        let err = decode_skills(&mut reader, CharacterClass::Amazon, 2, tables()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSignature);
    }

    #[test]
    fn truncated_section() {
        let bytes = section(&[0; 12]);
        let mut reader = BitReader::new(&bytes);
        let err = decode_skills(&mut reader, CharacterClass::Druid, 5, tables()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEndOfData);
    }

    #[test]
    fn encode_roundtrip() {
        let tree = SkillTree {
            levels: (0..30).collect(),
        };
        let mut writer = BitWriter::new();
        encode_skills(&tree, CharacterClass::Assassin, tables(), &mut writer).unwrap();
        let bytes = writer.finish();
        assert_eq!(bytes.len(), 32);
        let mut reader = BitReader::new(&bytes);
        let decoded = decode_skills(&mut reader, CharacterClass::Assassin, 1, tables()).unwrap();
        assert_eq!(decoded, tree);
    }

    #[test]
    fn empty_tree_writes_nothing() {
        let mut writer = BitWriter::new();
        encode_skills(
            &SkillTree::default(),
            CharacterClass::Paladin,
            tables(),
            &mut writer,
        )
        .unwrap();
        assert_eq!(writer.bits_written(), 0);
    }

    #[test]
    fn wrong_length_rejected() {
        let tree = SkillTree {
            levels: vec![0; 29],
        };
        let mut writer = BitWriter::new();
        let err =
            encode_skills(&tree, CharacterClass::Paladin, tables(), &mut writer).unwrap_err();
        assert_eq!(err, CodecError::out_of_range("skills", 29, 30));
    }

    #[test]
    fn class_missing_from_tables() {
        let mut custom = tables().clone();
        custom
            .classes
            .to_mut()
            .retain(|def| def.class != CharacterClass::Druid);
        let mut writer = BitWriter::new();
        let err = encode_skills(
            &SkillTree::default(),
            CharacterClass::Druid,
            &custom,
            &mut writer,
        )
        .unwrap_err();
        assert_eq!(err, CodecError::UnknownClass { id: 5 });
    }
}
