//! Character stat definitions: the ids and widths of the "gf" section.

use std::borrow::Cow;

/// Id of a character stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AttributeId(u16);

impl AttributeId {
    pub const STRENGTH: Self = Self(0);
    pub const ENERGY: Self = Self(1);
    pub const DEXTERITY: Self = Self(2);
    pub const VITALITY: Self = Self(3);
    pub const STAT_POINTS: Self = Self(4);
    pub const SKILL_POINTS: Self = Self(5);
    pub const HIT_POINTS: Self = Self(6);
    pub const MAX_HIT_POINTS: Self = Self(7);
    pub const MANA: Self = Self(8);
    pub const MAX_MANA: Self = Self(9);
    pub const STAMINA: Self = Self(10);
    pub const MAX_STAMINA: Self = Self(11);
    pub const LEVEL: Self = Self(12);
    pub const EXPERIENCE: Self = Self(13);
    pub const GOLD: Self = Self(14);
    pub const STASHED_GOLD: Self = Self(15);

    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl From<u16> for AttributeId {
    fn from(value: u16) -> Self {
        Self::new(value)
    }
}

impl From<AttributeId> for u16 {
    fn from(value: AttributeId) -> Self {
        value.raw()
    }
}

/// One entry of the character stat table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeDef {
    pub id: AttributeId,
    pub name: Cow<'static, str>,
    /// Width of the stored value.
    pub bits: u8,
    /// Stored value carries 8 fractional bits.
    pub fixed_point: bool,
}

impl AttributeDef {
    #[must_use]
    pub const fn new(id: u16, name: &'static str, bits: u8) -> Self {
        Self {
            id: AttributeId::new(id),
            name: Cow::Borrowed(name),
            bits,
            fixed_point: false,
        }
    }

    /// Creates a stat whose stored value carries 8 fractional bits.
    #[must_use]
    pub const fn new_fixed_point(id: u16, name: &'static str, bits: u8) -> Self {
        Self {
            id: AttributeId::new(id),
            name: Cow::Borrowed(name),
            bits,
            fixed_point: true,
        }
    }

    /// Largest value that fits the stored width.
    #[must_use]
    pub const fn max_value(&self) -> u64 {
        if self.bits >= 64 {
            u64::MAX
        } else {
            (1u64 << self.bits) - 1
        }
    }
}

pub(crate) static ATTRIBUTES: [AttributeDef; 16] = [
    AttributeDef::new(0, "strength", 10),
    AttributeDef::new(1, "energy", 10),
    AttributeDef::new(2, "dexterity", 10),
    AttributeDef::new(3, "vitality", 10),
    AttributeDef::new(4, "statpts", 10),
    AttributeDef::new(5, "newskills", 8),
    AttributeDef::new_fixed_point(6, "hitpoints", 21),
    AttributeDef::new_fixed_point(7, "maxhp", 21),
    AttributeDef::new_fixed_point(8, "mana", 21),
    AttributeDef::new_fixed_point(9, "maxmana", 21),
    AttributeDef::new_fixed_point(10, "stamina", 21),
    AttributeDef::new_fixed_point(11, "maxstamina", 21),
    AttributeDef::new(12, "level", 7),
    AttributeDef::new(13, "experience", 32),
    AttributeDef::new(14, "gold", 25),
    AttributeDef::new(15, "goldbank", 25),
];
