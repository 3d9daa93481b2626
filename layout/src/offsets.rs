//! Byte offsets of the fixed-position fields.
//!
//! Everything up to [`ATTRIBUTES`] sits at a fixed position for every known
//! version; the sections after it are located by parsing.

pub const MAGIC: usize = 0x00;
pub const VERSION: usize = 0x04;
pub const FILE_SIZE: usize = 0x08;
pub const CHECKSUM: usize = 0x0c;
pub const ACTIVE_ARMS: usize = 0x10;
pub const NAME: usize = 0x14;
pub const STATUS: usize = 0x24;
pub const PROGRESSION: usize = 0x25;
pub const CLASS: usize = 0x28;
pub const LEVEL: usize = 0x2b;
pub const CREATED: usize = 0x2c;
pub const LAST_PLAYED: usize = 0x30;
pub const HOTKEYS: usize = 0x38;
pub const MOUSE_SKILLS: usize = 0x78;
pub const APPEARANCE: usize = 0x88;
pub const DIFFICULTY: usize = 0xa8;
pub const MAP_ID: usize = 0xab;
pub const MERCENARY: usize = 0xb1;
pub const RESERVED_TAIL: usize = 0xbf;
/// Name slot used by saves from Resurrected 2.4 on; inside the reserved tail.
pub const RELOCATED_NAME: usize = 267;
pub const QUESTS: usize = 0x14f;
pub const WAYPOINTS: usize = 0x279;
pub const NPCS: usize = 0x2c9;
pub const ATTRIBUTES: usize = 0x2fd;

/// Length of the character name slot, terminator included.
pub const NAME_LEN: usize = 16;
/// Length of the reserved block that closes the character header.
pub const RESERVED_TAIL_LEN: usize = 144;
