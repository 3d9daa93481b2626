//! The item document model.
//!
//! Fields mirror what is stored; nothing is derived from game data beyond
//! the type table that decides which sections an item carries.

/// Flag word bits that have a known meaning.
pub(crate) mod flag {
    pub const IDENTIFIED: u32 = 1 << 4;
    pub const SOCKETED: u32 = 1 << 11;
    pub const NEW: u32 = 1 << 13;
    pub const EAR: u32 = 1 << 16;
    pub const STARTER: u32 = 1 << 17;
    pub const SIMPLE: u32 = 1 << 21;
    pub const ETHEREAL: u32 = 1 << 22;
    pub const ALWAYS_SET: u32 = 1 << 23;
    pub const PERSONALIZED: u32 = 1 << 24;
    pub const RUNEWORD: u32 = 1 << 26;

    pub const KNOWN: u32 = IDENTIFIED
        | SOCKETED
        | NEW
        | EAR
        | STARTER
        | SIMPLE
        | ETHEREAL
        | ALWAYS_SET
        | PERSONALIZED
        | RUNEWORD;
}

/// Item flags other than ear and simple, which follow from [`ItemKind`].
///
/// An ear is written with the simple bit set unless `ear_simple_clear` says
/// it was stored clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemFlags {
    pub identified: bool,
    pub socketed: bool,
    pub new: bool,
    pub starter: bool,
    pub ethereal: bool,
    pub personalized: bool,
    pub runeword: bool,
    /// Flag word bits with no known meaning, kept as stored.
    #[cfg_attr(feature = "serde", serde(default))]
    pub unknown_bits: u32,
    /// Bit 23 is set on every item the game writes; this keeps a stored clear bit.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bit23_clear: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ear_simple_clear: bool,
}

impl ItemFlags {
    /// Splits a stored flag word. Ear and simple bits are left to the caller.
    #[must_use]
    pub const fn from_word(word: u32) -> Self {
        Self {
            identified: word & flag::IDENTIFIED != 0,
            socketed: word & flag::SOCKETED != 0,
            new: word & flag::NEW != 0,
            starter: word & flag::STARTER != 0,
            ethereal: word & flag::ETHEREAL != 0,
            personalized: word & flag::PERSONALIZED != 0,
            runeword: word & flag::RUNEWORD != 0,
            unknown_bits: word & !flag::KNOWN,
            bit23_clear: word & flag::ALWAYS_SET == 0,
            ear_simple_clear: word & flag::EAR != 0 && word & flag::SIMPLE == 0,
        }
    }

    /// Builds the stored flag word.
    #[must_use]
    pub const fn to_word(self, ear: bool, simple: bool) -> u32 {
        let simple = simple && !(ear && self.ear_simple_clear);
        let pairs = [
            (self.identified, flag::IDENTIFIED),
            (self.socketed, flag::SOCKETED),
            (self.new, flag::NEW),
            (ear, flag::EAR),
            (self.starter, flag::STARTER),
            (simple, flag::SIMPLE),
            (self.ethereal, flag::ETHEREAL),
            (self.personalized, flag::PERSONALIZED),
            (self.runeword, flag::RUNEWORD),
        ];
        let mut word = self.unknown_bits & !flag::KNOWN;
        if !self.bit23_clear {
            word |= flag::ALWAYS_SET;
        }
        let mut idx = 0;
        while idx < pairs.len() {
            if pairs[idx].0 {
                word |= pairs[idx].1;
            }
            idx += 1;
        }
        word
    }
}

/// One item, with its socketed children.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub flags: ItemFlags,
    /// Item format version as stored (10 bits classic, 3 bits Resurrected).
    pub version: u16,
    pub location: u8,
    pub equipped: u8,
    pub x: u8,
    pub y: u8,
    /// Alternate container or stash page.
    pub alt_container: u8,
    pub kind: ItemKind,
    /// Items in this item's sockets, in socket order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub socketed_items: Vec<Item>,
    /// Bits after the item body up to the byte boundary.
    #[cfg_attr(feature = "serde", serde(default))]
    pub padding: u8,
    /// The type code was stored padded with NUL instead of spaces.
    #[cfg_attr(feature = "serde", serde(default))]
    pub nul_padded_code: bool,
}

impl Item {
    /// Type code, or `None` for ears.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Simple(item) => Some(&item.code),
            ItemKind::Extended(item) => Some(&item.code),
            ItemKind::Ear(_) => None,
        }
    }

    #[must_use]
    pub const fn is_ear(&self) -> bool {
        matches!(self.kind, ItemKind::Ear(_))
    }

    /// Ears count as simple; they carry no extended section.
    #[must_use]
    pub const fn is_simple(&self) -> bool {
        !matches!(self.kind, ItemKind::Extended(_))
    }

    #[must_use]
    pub fn extended(&self) -> Option<&ExtendedItem> {
        match &self.kind {
            ItemKind::Extended(item) => Some(item),
            _ => None,
        }
    }

    /// Number of items in sockets as stored in the item header.
    #[must_use]
    pub fn filled_sockets(&self) -> usize {
        match &self.kind {
            ItemKind::Simple(item) => usize::from(item.filled_sockets),
            ItemKind::Extended(_) => self.socketed_items.len(),
            ItemKind::Ear(_) => 0,
        }
    }

    /// Counts this item and every socketed descendant.
    #[must_use]
    pub fn total_count(&self) -> usize {
        1 + self
            .socketed_items
            .iter()
            .map(Self::total_count)
            .sum::<usize>()
    }
}

/// The variant part of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemKind {
    Simple(SimpleItem),
    Extended(Box<ExtendedItem>),
    Ear(Ear),
}

/// A compact item: gems, potions, runes, keys.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleItem {
    pub code: String,
    /// The one-bit socket count of a simple item.
    #[cfg_attr(feature = "serde", serde(default))]
    pub filled_sockets: u8,
}

/// The ear of a defeated hardcore player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ear {
    pub class: u8,
    pub level: u8,
    pub name: String,
}

/// An item with the extended section.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtendedItem {
    pub code: String,
    pub id: u32,
    pub level: u8,
    pub quality: Quality,
    #[cfg_attr(feature = "serde", serde(default))]
    pub picture: Option<u8>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub class_data: Option<u16>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub runeword: Option<Runeword>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub personalized_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tome_data: Option<u8>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub timestamp: bool,
    /// Armor only. Stored on disk with a bias of 10.
    #[cfg_attr(feature = "serde", serde(default))]
    pub defense: Option<i16>,
    /// Armor and weapons only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub durability: Option<Durability>,
    /// Stackable types only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub quantity: Option<u16>,
    /// Socketed items only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_sockets: Option<u8>,
    /// The magic property list.
    #[cfg_attr(feature = "serde", serde(default))]
    pub properties: Vec<Property>,
}

/// Item quality and its quality-specific data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Quality {
    Low {
        kind: u8,
    },
    Normal,
    Superior {
        kind: u8,
    },
    Magic {
        prefix: u16,
        suffix: u16,
    },
    Set {
        id: u16,
        /// Which of the five set bonus lists are present.
        bonus_mask: u8,
        /// One list per mask bit, lowest bit first.
        bonus_lists: Vec<Vec<Property>>,
    },
    Rare(RareName),
    Unique {
        id: u16,
    },
    Crafted(RareName),
    /// A quality id outside 1..=8; carries no quality data.
    Other {
        raw: u8,
    },
}

impl Quality {
    pub(crate) const LOW: u8 = 1;
    pub(crate) const NORMAL: u8 = 2;
    pub(crate) const SUPERIOR: u8 = 3;
    pub(crate) const MAGIC: u8 = 4;
    pub(crate) const SET: u8 = 5;
    pub(crate) const RARE: u8 = 6;
    pub(crate) const UNIQUE: u8 = 7;
    pub(crate) const CRAFTED: u8 = 8;

    /// The stored 4-bit quality id.
    #[must_use]
    pub const fn id(&self) -> u8 {
        match self {
            Self::Low { .. } => Self::LOW,
            Self::Normal => Self::NORMAL,
            Self::Superior { .. } => Self::SUPERIOR,
            Self::Magic { .. } => Self::MAGIC,
            Self::Set { .. } => Self::SET,
            Self::Rare(_) => Self::RARE,
            Self::Unique { .. } => Self::UNIQUE,
            Self::Crafted(_) => Self::CRAFTED,
            Self::Other { raw } => *raw,
        }
    }
}

/// Name ids and affixes of a rare or crafted item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RareName {
    pub first: u8,
    pub second: u8,
    /// Alternating prefix and suffix ids; `None` when the slot is empty.
    pub affixes: [Option<u16>; 6],
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Runeword {
    pub id: u16,
    /// Four bits following the id, usually 5.
    pub extra: u8,
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Durability {
    pub max: u8,
    /// Current durability and the bit after it; present only when `max` is non-zero.
    #[cfg_attr(feature = "serde", serde(default))]
    pub current: Option<(u8, bool)>,
}

/// One entry of a property list.
///
/// `values` holds the parameter parts followed by the value parts, in the
/// order the stat's encoding splits them, for every stat in the id's group.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    pub id: u16,
    pub values: Vec<i64>,
}

impl Property {
    #[must_use]
    pub fn new(id: u16, values: impl Into<Vec<i64>>) -> Self {
        Self {
            id,
            values: values.into(),
        }
    }
}
