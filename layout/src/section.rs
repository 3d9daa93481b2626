//! Section names and their on-disk markers.

use std::fmt;

/// Fixed-order regions of a save file, and of a shared stash file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Header,
    Quests,
    Waypoints,
    Npcs,
    Attributes,
    Skills,
    Items,
    Corpse,
    Mercenary,
    Golem,
    Stash,
    StashPage,
}

impl Section {
    /// Bytes that open the section on disk.
    #[must_use]
    pub const fn marker(self) -> &'static [u8] {
        match self {
            Self::Header => &[0x55, 0xaa, 0x55, 0xaa],
            Self::Quests => b"Woo!",
            Self::Waypoints => b"WS",
            Self::Npcs => &[0x01, 0x77],
            Self::Attributes => b"gf",
            Self::Skills => b"if",
            Self::Items | Self::Corpse => b"JM",
            Self::Mercenary => b"jf",
            Self::Golem => b"kf",
            Self::Stash => b"SSS\0",
            Self::StashPage => b"ST",
        }
    }

    /// Returns `true` if `bytes` starts with this section's marker.
    #[must_use]
    pub fn matches(self, bytes: &[u8]) -> bool {
        bytes.starts_with(self.marker())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Header => "header",
            Self::Quests => "quests",
            Self::Waypoints => "waypoints",
            Self::Npcs => "npc",
            Self::Attributes => "attributes",
            Self::Skills => "skills",
            Self::Items => "items",
            Self::Corpse => "corpse",
            Self::Mercenary => "mercenary",
            Self::Golem => "golem",
            Self::Stash => "stash",
            Self::StashPage => "stash page",
        };
        write!(f, "{name}")
    }
}
