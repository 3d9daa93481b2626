//! Character classes and their skill ranges.

use std::fmt;

use crate::error::{TableError, TableResult};

/// Number of skills in each class's contiguous range.
pub const SKILLS_PER_CLASS: usize = 30;

/// The seven playable classes, in header id order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterClass {
    Amazon,
    Sorceress,
    Necromancer,
    Paladin,
    Barbarian,
    Druid,
    Assassin,
}

impl CharacterClass {
    /// All classes in id order.
    pub const ALL: [Self; 7] = [
        Self::Amazon,
        Self::Sorceress,
        Self::Necromancer,
        Self::Paladin,
        Self::Barbarian,
        Self::Druid,
        Self::Assassin,
    ];

    /// Resolves a class from the id stored in the header.
    pub fn from_id(id: u8) -> TableResult<Self> {
        Self::ALL
            .get(usize::from(id))
            .copied()
            .ok_or(TableError::UnknownClass { id })
    }

    /// Returns the header id of this class.
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Amazon => "Amazon",
            Self::Sorceress => "Sorceress",
            Self::Necromancer => "Necromancer",
            Self::Paladin => "Paladin",
            Self::Barbarian => "Barbarian",
            Self::Druid => "Druid",
            Self::Assassin => "Assassin",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for CharacterClass {
    type Error = TableError;

    fn try_from(id: u8) -> TableResult<Self> {
        Self::from_id(id)
    }
}

impl From<CharacterClass> for u8 {
    fn from(class: CharacterClass) -> Self {
        class.id()
    }
}

/// A class entry: where its skills start in the global skill table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassDef {
    pub class: CharacterClass,
    /// Global id of the first of the class's skills.
    pub first_skill: u16,
}

impl ClassDef {
    #[must_use]
    pub const fn new(class: CharacterClass, first_skill: u16) -> Self {
        Self { class, first_skill }
    }

    /// Global skill ids covered by this class.
    #[must_use]
    pub fn skill_range(&self) -> std::ops::Range<u16> {
        // SKILLS_PER_CLASS is a small constant.
        #[allow(clippy::cast_possible_truncation)]
        let len = SKILLS_PER_CLASS as u16;
        self.first_skill..self.first_skill + len
    }
}

pub(crate) static CLASSES: [ClassDef; 7] = [
    ClassDef::new(CharacterClass::Amazon, 6),
    ClassDef::new(CharacterClass::Sorceress, 36),
    ClassDef::new(CharacterClass::Necromancer, 66),
    ClassDef::new(CharacterClass::Paladin, 96),
    ClassDef::new(CharacterClass::Barbarian, 126),
    ClassDef::new(CharacterClass::Druid, 221),
    ClassDef::new(CharacterClass::Assassin, 251),
];
