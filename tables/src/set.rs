//! Versioned bundles of lookup tables.

use std::borrow::Cow;
use std::collections::HashSet;

use layout::{FormatProfile, SaveVersion};

use crate::attribute::{AttributeDef, AttributeId, ATTRIBUTES};
use crate::class::{CharacterClass, ClassDef, CLASSES};
use crate::error::{TableError, TableResult};
use crate::huffman::{HuffmanCode, HUFFMAN_CODES};
use crate::item_stat::{ItemStatDef, StatId, ITEM_STATS};
use crate::item_type::{ItemTypeDef, ITEM_TYPES};

/// Every table one save version needs.
///
/// The built-in sets borrow static data; sets loaded at runtime own theirs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSet {
    pub classes: Cow<'static, [ClassDef]>,
    pub attributes: Cow<'static, [AttributeDef]>,
    pub item_stats: Cow<'static, [ItemStatDef]>,
    pub item_types: Cow<'static, [ItemTypeDef]>,
    /// Type code Huffman table; empty for versions that store ASCII codes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub huffman: Cow<'static, [HuffmanCode]>,
}

static CLASSIC: TableSet = TableSet {
    classes: Cow::Borrowed(&CLASSES),
    attributes: Cow::Borrowed(&ATTRIBUTES),
    item_stats: Cow::Borrowed(&ITEM_STATS),
    item_types: Cow::Borrowed(&ITEM_TYPES),
    huffman: Cow::Borrowed(&[]),
};

static RESURRECTED: TableSet = TableSet {
    classes: Cow::Borrowed(&CLASSES),
    attributes: Cow::Borrowed(&ATTRIBUTES),
    item_stats: Cow::Borrowed(&ITEM_STATS),
    item_types: Cow::Borrowed(&ITEM_TYPES),
    huffman: Cow::Borrowed(&HUFFMAN_CODES),
};

impl TableSet {
    /// Creates a table set after validation.
    pub fn new(
        classes: Vec<ClassDef>,
        attributes: Vec<AttributeDef>,
        item_stats: Vec<ItemStatDef>,
        item_types: Vec<ItemTypeDef>,
        huffman: Vec<HuffmanCode>,
    ) -> TableResult<Self> {
        let set = Self {
            classes: Cow::Owned(classes),
            attributes: Cow::Owned(attributes),
            item_stats: Cow::Owned(item_stats),
            item_types: Cow::Owned(item_types),
            huffman: Cow::Owned(huffman),
        };
        set.validate()?;
        Ok(set)
    }

    /// Returns the built-in tables for a save version.
    ///
    /// Unknown versions get the tables of their nearest known layout.
    #[must_use]
    pub fn builtin(version: SaveVersion) -> &'static Self {
        match version.nearest_profile() {
            FormatProfile::Classic => &CLASSIC,
            FormatProfile::Resurrected | FormatProfile::ResurrectedRelocatedName => &RESURRECTED,
        }
    }

    /// Parses and validates a table set from JSON.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> TableResult<Self> {
        let set: Self = serde_json::from_str(json).map_err(|err| TableError::Json {
            message: err.to_string(),
        })?;
        set.validate()?;
        Ok(set)
    }

    #[must_use]
    pub fn class(&self, class: CharacterClass) -> Option<&ClassDef> {
        self.classes.iter().find(|def| def.class == class)
    }

    /// Resolves a header class id to its table entry.
    pub fn class_by_id(&self, id: u8) -> TableResult<&ClassDef> {
        let class = CharacterClass::from_id(id)?;
        self.class(class).ok_or(TableError::UnknownClass { id })
    }

    #[must_use]
    pub fn attribute(&self, id: AttributeId) -> Option<&AttributeDef> {
        self.attributes.iter().find(|def| def.id == id)
    }

    #[must_use]
    pub fn item_stat(&self, id: StatId) -> Option<&ItemStatDef> {
        self.item_stats.iter().find(|def| def.id == id)
    }

    /// Looks up an item type by its unpadded code.
    #[must_use]
    pub fn item_type(&self, code: &str) -> Option<&ItemTypeDef> {
        self.item_types.iter().find(|def| def.code == code)
    }

    #[must_use]
    pub fn huffman_code(&self, symbol: char) -> Option<&HuffmanCode> {
        self.huffman.iter().find(|code| code.symbol == symbol)
    }

    /// Returns the symbol whose code is exactly `len` bits equal to `bits`.
    #[must_use]
    pub fn huffman_symbol(&self, bits: u16, len: u8) -> Option<char> {
        self.huffman
            .iter()
            .find(|code| code.len == len && code.bits == bits)
            .map(|code| code.symbol)
    }

    /// Validates table invariants.
    pub fn validate(&self) -> TableResult<()> {
        let mut classes = HashSet::new();
        for def in self.classes.iter() {
            if !classes.insert(def.class) {
                return Err(duplicate("class", def.class));
            }
        }

        let mut attributes = HashSet::new();
        for def in self.attributes.iter() {
            if !attributes.insert(def.id) {
                return Err(duplicate("attribute", def.id.raw()));
            }
            check_width("attribute", &def.name, def.bits, 32, false)?;
        }

        let mut stats = HashSet::new();
        for def in self.item_stats.iter() {
            if !stats.insert(def.id) {
                return Err(duplicate("item stat", def.id));
            }
            check_width("item stat", &def.name, def.save_bits, 32, false)?;
            check_width("item stat", &def.name, def.param_bits, 32, true)?;
            if def.group_size == 0 {
                return Err(TableError::InvalidWidth {
                    table: "item stat",
                    key: def.name.to_string(),
                    bits: 0,
                    max_bits: 32,
                });
            }
        }

        let mut types = HashSet::new();
        for def in self.item_types.iter() {
            if !types.insert(def.code.as_ref()) {
                return Err(duplicate("item type", &def.code));
            }
        }

        let mut symbols = HashSet::new();
        for code in self.huffman.iter() {
            if !symbols.insert(code.symbol) {
                return Err(duplicate("huffman", code.symbol));
            }
            check_width("huffman", &code.symbol.to_string(), code.len, 15, false)?;
        }
        for (i, a) in self.huffman.iter().enumerate() {
            for (j, b) in self.huffman.iter().enumerate() {
                if i != j && a.is_prefix_of(b) {
                    return Err(TableError::AmbiguousCode {
                        first: a.symbol,
                        second: b.symbol,
                    });
                }
            }
        }
        Ok(())
    }
}

fn duplicate(table: &'static str, key: impl std::fmt::Display) -> TableError {
    TableError::DuplicateEntry {
        table,
        key: key.to_string(),
    }
}

fn check_width(
    table: &'static str,
    key: &str,
    bits: u8,
    max_bits: u8,
    allow_zero: bool,
) -> TableResult<()> {
    if (bits == 0 && !allow_zero) || bits > max_bits {
        return Err(TableError::InvalidWidth {
            table,
            key: key.to_string(),
            bits,
            max_bits,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sets_validate() {
        TableSet::builtin(SaveVersion::CLASSIC).validate().unwrap();
        TableSet::builtin(SaveVersion::RESURRECTED).validate().unwrap();
    }

    #[test]
    fn builtin_picks_huffman_by_version() {
        assert!(TableSet::builtin(SaveVersion::CLASSIC).huffman.is_empty());
        assert!(!TableSet::builtin(SaveVersion::RESURRECTED_V2).huffman.is_empty());
        assert!(!TableSet::builtin(SaveVersion::new(0x70)).huffman.is_empty());
        assert!(TableSet::builtin(SaveVersion::new(0x59)).huffman.is_empty());
    }

    #[test]
    fn lookups() {
        let tables = TableSet::builtin(SaveVersion::CLASSIC);
        assert_eq!(tables.class_by_id(4).unwrap().first_skill, 126);
        assert!(matches!(
            tables.class_by_id(9),
            Err(TableError::UnknownClass { id: 9 })
        ));
        assert_eq!(tables.attribute(AttributeId::GOLD).unwrap().bits, 25);
        assert_eq!(tables.item_stat(31).unwrap().save_add, 10);
        assert!(tables.item_type("hax").unwrap().has_durability());
        assert!(tables.item_type("zzz").is_none());
    }

    #[test]
    fn huffman_lookups() {
        let tables = TableSet::builtin(SaveVersion::RESURRECTED);
        let h = tables.huffman_code('h').unwrap();
        assert_eq!((h.bits, h.len), (24, 5));
        assert_eq!(tables.huffman_symbol(1, 2), Some(' '));
        assert_eq!(tables.huffman_symbol(1, 3), None);
    }

    #[test]
    fn new_rejects_duplicate_item_type() {
        let err = TableSet::new(
            vec![],
            vec![],
            vec![],
            vec![ItemTypeDef::misc("hp1"), ItemTypeDef::misc("hp1")],
            vec![],
        )
        .unwrap_err();
        assert_eq!(
            err,
            TableError::DuplicateEntry {
                table: "item type",
                key: "hp1".to_string()
            }
        );
    }

    #[test]
    fn new_rejects_zero_width_attribute() {
        let err = TableSet::new(
            vec![],
            vec![AttributeDef::new(0, "strength", 0)],
            vec![],
            vec![],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, TableError::InvalidWidth { bits: 0, .. }));
    }

    #[test]
    fn new_rejects_ambiguous_huffman() {
        let err = TableSet::new(
            vec![],
            vec![],
            vec![],
            vec![],
            vec![HuffmanCode::new('a', 0b1, 1), HuffmanCode::new('b', 0b11, 2)],
        )
        .unwrap_err();
        assert!(matches!(err, TableError::AmbiguousCode { .. }));
    }

    #[test]
    fn new_rejects_duplicate_class() {
        let err = TableSet::new(
            vec![
                ClassDef::new(CharacterClass::Amazon, 6),
                ClassDef::new(CharacterClass::Amazon, 36),
            ],
            vec![],
            vec![],
            vec![],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, TableError::DuplicateEntry { table: "class", .. }));
    }
}
