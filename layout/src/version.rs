//! Save format versions and the layout rules each one implies.

use crate::error::{LayoutError, LayoutResult};
use crate::offsets;

/// Raw save version as stored at byte 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaveVersion(u32);

impl SaveVersion {
    /// Classic saves from 1.10 through 1.14d.
    pub const CLASSIC: Self = Self(0x60);
    /// First Resurrected saves.
    pub const RESURRECTED: Self = Self(0x61);
    /// Resurrected 2.4 and later; the name moves out of the header slot.
    pub const RESURRECTED_V2: Self = Self(0x62);

    /// Creates a version from its raw value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the layout profile if this version is known.
    #[must_use]
    pub const fn profile(self) -> Option<FormatProfile> {
        match self.0 {
            0x60 => Some(FormatProfile::Classic),
            0x61 => Some(FormatProfile::Resurrected),
            0x62 => Some(FormatProfile::ResurrectedRelocatedName),
            _ => None,
        }
    }

    /// Returns the closest known profile for best-effort decoding.
    #[must_use]
    pub const fn nearest_profile(self) -> FormatProfile {
        match self.profile() {
            Some(profile) => profile,
            None if self.0 < 0x61 => FormatProfile::Classic,
            None => FormatProfile::ResurrectedRelocatedName,
        }
    }

    /// Resolves the profile, falling back to the nearest one when allowed.
    pub fn resolve(self, allow_unknown: bool) -> LayoutResult<FormatProfile> {
        match self.profile() {
            Some(profile) => Ok(profile),
            None if allow_unknown => Ok(self.nearest_profile()),
            None => Err(LayoutError::UnsupportedVersion { found: self.0 }),
        }
    }
}

impl From<u32> for SaveVersion {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<SaveVersion> for u32 {
    fn from(value: SaveVersion) -> Self {
        value.raw()
    }
}

/// Version-dependent layout rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatProfile {
    /// 1.10-1.14d: per-item "JM" markers, 10-bit item versions, ASCII type codes.
    Classic,
    /// Resurrected: no per-item markers, 3-bit item versions, Huffman type codes.
    Resurrected,
    /// Resurrected with the character name stored at byte 267.
    ResurrectedRelocatedName,
}

impl FormatProfile {
    /// Returns `true` if each item is preceded by its own "JM" marker.
    #[must_use]
    pub const fn per_item_marker(self) -> bool {
        matches!(self, Self::Classic)
    }

    /// Width of the item format version field.
    #[must_use]
    pub const fn item_version_bits(self) -> u8 {
        match self {
            Self::Classic => 10,
            Self::Resurrected | Self::ResurrectedRelocatedName => 3,
        }
    }

    /// Returns `true` if item type codes are Huffman coded.
    #[must_use]
    pub const fn huffman_type_codes(self) -> bool {
        !matches!(self, Self::Classic)
    }

    /// Byte offset of the character name.
    #[must_use]
    pub const fn name_offset(self) -> usize {
        match self {
            Self::Classic | Self::Resurrected => offsets::NAME,
            Self::ResurrectedRelocatedName => offsets::RELOCATED_NAME,
        }
    }
}
