//! Inspection and conversion tools for d2s character saves.
//!
//! This crate backs the `d2s-tools` binary:
//!
//! - Summarize a save: character, stats, checksum state, items
//! - Re-encode a save and check the result decodes to the same document
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to see what the codec decoded.

use std::fmt::Write as _;

use codec::{Character, CodecResult, Item, ParseOptions, Quality};
use layout::checksum;
use serde::Serialize;
use tables::TableSet;

/// A compact view of one decoded save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveSummary {
    pub name: String,
    pub class: String,
    pub level: u8,
    pub version: u32,
    pub expansion: bool,
    pub hardcore: bool,
    pub file_size: usize,
    pub stored_checksum: u32,
    pub computed_checksum: u32,
    pub attributes: Vec<AttributeLine>,
    pub skill_points_spent: u32,
    pub items: Vec<ItemLine>,
    pub corpse_items: usize,
    pub mercenary_items: Option<usize>,
    pub golem: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeLine {
    pub name: String,
    /// Whole value; fixed-point stats are shifted down.
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemLine {
    pub code: String,
    pub location: u8,
    pub x: u8,
    pub y: u8,
    pub quality: &'static str,
    pub sockets: usize,
}

impl SaveSummary {
    pub fn checksum_valid(&self) -> bool {
        self.stored_checksum == self.computed_checksum
    }
}

/// Builds a summary of `character`, decoded from `bytes`.
pub fn summarize(bytes: &[u8], character: &Character, tables: &TableSet) -> SaveSummary {
    let header = &character.header;
    let attributes = character
        .attributes
        .entries
        .iter()
        .map(|attribute| AttributeLine {
            name: tables
                .attribute(attribute.id)
                .map_or_else(|| attribute.id.raw().to_string(), |def| def.name.to_string()),
            value: character
                .attributes
                .whole_value(attribute.id, tables)
                .unwrap_or(attribute.value),
        })
        .collect();

    SaveSummary {
        name: header.name.clone(),
        class: header.class.name().to_string(),
        level: header.level,
        version: header.version.raw(),
        expansion: header.status.expansion,
        hardcore: header.status.hardcore,
        file_size: bytes.len(),
        stored_checksum: header.checksum,
        computed_checksum: checksum::compute(bytes),
        attributes,
        skill_points_spent: character.skills.levels.iter().map(|&l| u32::from(l)).sum(),
        items: character.items.iter().map(item_line).collect(),
        corpse_items: character.corpses.iter().map(|c| c.items.len()).sum(),
        mercenary_items: character.mercenary_items.as_ref().map(Vec::len),
        golem: character
            .golem_item
            .as_ref()
            .map(|item| item_code(item).to_string()),
    }
}

fn item_code(item: &Item) -> &str {
    item.code().unwrap_or("ear")
}

fn item_line(item: &Item) -> ItemLine {
    ItemLine {
        code: item_code(item).to_string(),
        location: item.location,
        x: item.x,
        y: item.y,
        quality: item
            .extended()
            .map_or("simple", |extended| quality_name(&extended.quality)),
        sockets: item.socketed_items.len(),
    }
}

pub const fn quality_name(quality: &Quality) -> &'static str {
    match quality {
        Quality::Low { .. } => "low",
        Quality::Normal => "normal",
        Quality::Superior { .. } => "superior",
        Quality::Magic { .. } => "magic",
        Quality::Set { .. } => "set",
        Quality::Rare(_) => "rare",
        Quality::Unique { .. } => "unique",
        Quality::Crafted(_) => "crafted",
        Quality::Other { .. } => "other",
    }
}

/// Renders a summary as plain text.
pub fn format_summary(summary: &SaveSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} (level {} {}) version 0x{:02x}",
        summary.name, summary.level, summary.class, summary.version
    );
    let mut mode = Vec::new();
    if summary.expansion {
        mode.push("expansion");
    }
    if summary.hardcore {
        mode.push("hardcore");
    }
    if !mode.is_empty() {
        let _ = writeln!(out, "mode: {}", mode.join(", "));
    }
    let state = if summary.checksum_valid() {
        "ok"
    } else {
        "STALE"
    };
    let _ = writeln!(
        out,
        "size: {} bytes checksum: 0x{:08x} ({state})",
        summary.file_size, summary.stored_checksum
    );
    out.push_str("attributes:\n");
    for line in &summary.attributes {
        let _ = writeln!(out, "  {}: {}", line.name, line.value);
    }
    let _ = writeln!(out, "skill points spent: {}", summary.skill_points_spent);
    let _ = writeln!(out, "items: {}", summary.items.len());
    for item in &summary.items {
        let _ = write!(
            out,
            "  {} [{}] at {} ({}, {})",
            item.code, item.quality, item.location, item.x, item.y
        );
        if item.sockets > 0 {
            let _ = write!(out, " +{} socketed", item.sockets);
        }
        out.push('\n');
    }
    if summary.corpse_items > 0 {
        let _ = writeln!(out, "corpse items: {}", summary.corpse_items);
    }
    if let Some(count) = summary.mercenary_items {
        let _ = writeln!(out, "mercenary items: {count}");
    }
    if let Some(golem) = &summary.golem {
        let _ = writeln!(out, "golem: {golem}");
    }
    out
}

/// Outcome of re-encoding a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResaveReport {
    pub bytes: Vec<u8>,
    /// The new file matches the input byte for byte.
    pub identical: bool,
    /// The new file decodes to the same document as the input.
    pub verified: bool,
    pub checksum: u32,
}

/// Parses `input`, encodes it again and decodes the result.
pub fn resave(input: &[u8], options: &ParseOptions, tables: &TableSet) -> CodecResult<ResaveReport> {
    let character = codec::parse_with_tables(input, options, tables)?;
    let bytes = codec::encode_with_tables(&character, tables)?;
    let mut reparsed = codec::parse_with_tables(&bytes, options, tables)?;
    reparsed.header.file_size = character.header.file_size;
    reparsed.header.checksum = character.header.checksum;
    Ok(ResaveReport {
        identical: bytes == input,
        verified: reparsed == character,
        checksum: checksum::compute(&bytes),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use codec::SaveVersion;
    use layout::offsets;

    fn blank_save(version: SaveVersion) -> Vec<u8> {
        let mut bytes = vec![0u8; offsets::QUESTS];
        bytes[..4].copy_from_slice(&layout::MAGIC.to_le_bytes());
        bytes[4..8].copy_from_slice(&version.raw().to_le_bytes());
        bytes[offsets::NAME..offsets::NAME + 4].copy_from_slice(b"Kara");
        bytes[offsets::CLASS] = 3;
        bytes[offsets::LEVEL] = 1;
        bytes.extend_from_slice(b"Woo!");
        bytes.extend_from_slice(&6u32.to_le_bytes());
        bytes.extend_from_slice(&298u16.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 288]);
        bytes.extend_from_slice(b"WS");
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.extend_from_slice(&80u16.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 72]);
        bytes.extend_from_slice(&[0x01, 0x77, 52, 0]);
        bytes.extend_from_slice(&[0u8; 48]);
        bytes.extend_from_slice(b"gf\xff\x01JM\x00\x00JM\x00\x00");
        checksum::patch(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn summary_of_blank_save() {
        let bytes = blank_save(SaveVersion::CLASSIC);
        let tables = TableSet::builtin(SaveVersion::CLASSIC);
        let character = codec::parse(&bytes).unwrap();
        let summary = summarize(&bytes, &character, tables);

        assert_eq!(summary.name, "Kara");
        assert_eq!(summary.class, "Paladin");
        assert!(summary.checksum_valid());
        assert!(summary.items.is_empty());
        assert_eq!(summary.mercenary_items, None);

        let text = format_summary(&summary);
        assert!(text.starts_with("Kara (level 1 Paladin) version 0x60"));
        assert!(text.contains("(ok)"));
        assert!(!text.contains("mode:"));
    }

    #[test]
    fn stale_checksum_is_flagged() {
        let mut bytes = blank_save(SaveVersion::RESURRECTED);
        bytes[offsets::CREATED] = 9;
        let tables = TableSet::builtin(SaveVersion::RESURRECTED);
        let options = ParseOptions::default().with_strict_checksum(false);
        let character = codec::parse_with(&bytes, &options).unwrap();
        let summary = summarize(&bytes, &character, tables);
        assert!(!summary.checksum_valid());
        assert!(format_summary(&summary).contains("STALE"));
    }

    #[test]
    fn resave_repairs_checksum() {
        let clean = blank_save(SaveVersion::CLASSIC);
        let tables = TableSet::builtin(SaveVersion::CLASSIC);
        let report = resave(&clean, &ParseOptions::default(), tables).unwrap();
        assert!(report.identical);
        assert!(report.verified);

        let mut stale = clean.clone();
        stale[offsets::CHECKSUM] ^= 0xff;
        let options = ParseOptions::lenient();
        let report = resave(&stale, &options, tables).unwrap();
        assert!(!report.identical);
        assert!(report.verified);
        assert_eq!(report.bytes, clean);
        assert_eq!(checksum::verify(&report.bytes), Ok(()));
    }

    #[test]
    fn json_document_converts_back() {
        for version in [SaveVersion::CLASSIC, SaveVersion::RESURRECTED] {
            let bytes = blank_save(version);
            let character = codec::parse(&bytes).unwrap();
            let json = serde_json::to_string_pretty(&character).unwrap();
            let back: Character = serde_json::from_str(&json).unwrap();
            assert_eq!(back, character);
            assert_eq!(codec::encode(&back).unwrap(), bytes);
        }
    }

    #[test]
    fn quality_names() {
        assert_eq!(quality_name(&Quality::Normal), "normal");
        assert_eq!(quality_name(&Quality::Unique { id: 3 }), "unique");
        assert_eq!(quality_name(&Quality::Other { raw: 0 }), "other");
    }
}
