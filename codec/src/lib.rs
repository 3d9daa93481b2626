//! Decoding and encoding of d2s character saves.
//!
//! This crate turns a save file into a [`Character`] document and back. It
//! drives the section codecs in file order: header, quest, waypoint and NPC
//! blocks, attributes, skills, then the item lists for the player, corpses,
//! mercenary and golem. Shared stash files, pages of item lists, decode
//! into a [`SharedStash`] with the same item codec.
//!
//! # Example
//!
//! ```no_run
//! let bytes = std::fs::read("Conan.d2s").unwrap();
//! let mut character = codec::parse(&bytes).unwrap();
//! character.header.level = 2;
//! let saved = codec::encode(&character).unwrap();
//! assert_eq!(codec::parse(&saved).unwrap().header.level, 2);
//! ```
//!
//! # Design Principles
//!
//! - **Lossless** - Unknown bits, padding and opaque blocks are kept, so a decoded save re-encodes byte for byte.
//! - **Table-driven** - Field widths and optional item sections come from [`tables::TableSet`].
//! - **Atomic** - A parse either returns a complete document or an error with section context.
//! - **Bounded** - Counts read from the file are checked against [`layout::Limits`] first.

mod attributes;
mod document;
mod error;
mod framing;
mod header;
mod item;
mod items;
mod options;
mod progress;
mod properties;
mod skills;
mod stash;

use std::io::Read;

use layout::{checksum, decode_preamble, Preamble};
use tables::TableSet;

pub use attributes::{Attribute, AttributeList};
pub use document::Character;
pub use error::{CodecError, CodecResult, ErrorKind, ItemFault};
pub use header::{Header, Mercenary, Status, MAX_NAME_LEN};
pub use item::{
    Durability, Ear, ExtendedItem, Item, ItemFlags, ItemKind, Property, Quality, RareName,
    Runeword, SimpleItem,
};
pub use items::{Corpse, CORPSE_DATA_LEN};
pub use layout::{LayoutError, Limits, SaveVersion};
pub use options::ParseOptions;
pub use progress::ProgressBlock;
pub use skills::SkillTree;
pub use stash::{SharedStash, StashPage, StashVersion};

/// Parses a save with default options.
pub fn parse(bytes: &[u8]) -> CodecResult<Character> {
    parse_with(bytes, &ParseOptions::default())
}

/// Parses a save with the built-in tables for its version.
pub fn parse_with(bytes: &[u8], options: &ParseOptions) -> CodecResult<Character> {
    let preamble = decode_preamble(bytes, &options.limits)?;
    parse_sections(bytes, &preamble, options, TableSet::builtin(preamble.version))
}

/// Parses a save with caller-supplied tables.
pub fn parse_with_tables(
    bytes: &[u8],
    options: &ParseOptions,
    tables: &TableSet,
) -> CodecResult<Character> {
    let preamble = decode_preamble(bytes, &options.limits)?;
    parse_sections(bytes, &preamble, options, tables)
}

/// Reads a whole save from `reader` and parses it.
pub fn parse_reader(mut reader: impl Read, options: &ParseOptions) -> CodecResult<Character> {
    let cap = u64::try_from(options.limits.max_file_bytes)
        .unwrap_or(u64::MAX)
        .saturating_add(1);
    let mut bytes = Vec::new();
    reader.by_ref().take(cap).read_to_end(&mut bytes)?;
    parse_with(&bytes, options)
}

/// Encodes a document with the built-in tables for its version.
///
/// The file size and checksum are recomputed; the values in the header are ignored.
pub fn encode(character: &Character) -> CodecResult<Vec<u8>> {
    encode_with_tables(character, TableSet::builtin(character.header.version))
}

/// Encodes a document with caller-supplied tables.
pub fn encode_with_tables(character: &Character, tables: &TableSet) -> CodecResult<Vec<u8>> {
    let mut bytes = document::encode_character(character, tables)?;
    checksum::patch(&mut bytes)?;
    Ok(bytes)
}

/// Parses a shared stash whose items use the item format of `version`.
pub fn parse_stash(bytes: &[u8], version: SaveVersion) -> CodecResult<SharedStash> {
    parse_stash_with(bytes, version, &ParseOptions::default())
}

/// Parses a shared stash under the limits in `options`.
pub fn parse_stash_with(
    bytes: &[u8],
    version: SaveVersion,
    options: &ParseOptions,
) -> CodecResult<SharedStash> {
    stash::decode_stash(bytes, version, &options.limits)
}

/// Encodes a shared stash, writing items in the format of `version`.
pub fn encode_stash(stash: &SharedStash, version: SaveVersion) -> CodecResult<Vec<u8>> {
    stash::encode_stash(stash, version)
}

fn parse_sections(
    bytes: &[u8],
    preamble: &Preamble,
    options: &ParseOptions,
    tables: &TableSet,
) -> CodecResult<Character> {
    let profile = preamble
        .version
        .resolve(options.allow_unknown_version)?;
    if preamble.version.profile().is_none() {
        tracing::warn!(
            version = preamble.version.raw(),
            ?profile,
            "unknown save version, decoding with nearest layout"
        );
    }

    let character = document::decode_character(bytes, preamble, profile, tables, &options.limits)?;
    check_integrity(bytes, preamble, options.strict_checksum)?;
    Ok(character)
}

/// Compares the stored size and checksum with the buffer.
fn check_integrity(bytes: &[u8], preamble: &Preamble, strict: bool) -> CodecResult<()> {
    let mut problems = Vec::new();
    if usize::try_from(preamble.file_size).ok() != Some(bytes.len()) {
        problems.push(LayoutError::FileSizeMismatch {
            stored: preamble.file_size,
            actual: bytes.len(),
        });
    }
    let computed = checksum::compute(bytes);
    if computed != preamble.checksum {
        problems.push(LayoutError::ChecksumMismatch {
            stored: preamble.checksum,
            computed,
        });
    }

    for problem in problems {
        if strict {
            return Err(problem.into());
        }
        tracing::warn!(%problem, "ignoring integrity mismatch");
    }
    Ok(())
}
