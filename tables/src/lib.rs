//! Versioned lookup tables for d2s saves.
//!
//! Field widths in a save are not self-describing: how many bits a stat value
//! takes, whether an item carries defense or a quantity, which skills belong
//! to a class. This crate holds that knowledge as plain data:
//! - Character classes and their 30-skill ranges
//! - Character stat ids and widths
//! - Item stat (magic property) storage rules
//! - Item type codes and the optional sections they imply
//! - The Huffman table Resurrected saves use for type codes
//!
//! # Design Principles
//!
//! - **Data, not code** - Decoders and encoders read widths from here, so a new
//!   save version is a new [`TableSet`], not a new code path.
//! - **Validated on construction** - [`TableSet::new`] and
//!   [`TableSet::from_json`] reject duplicate keys and impossible widths.
//! - **Static by default** - [`TableSet::builtin`] borrows `'static` data.

mod attribute;
mod class;
mod error;
mod huffman;
mod item_stat;
mod item_type;
mod set;

pub use attribute::{AttributeDef, AttributeId};
pub use class::{CharacterClass, ClassDef, SKILLS_PER_CLASS};
pub use error::{TableError, TableResult};
pub use huffman::{HuffmanCode, MAX_CODE_LEN};
pub use item_stat::{ItemStatDef, StatEncoding, StatId, PROPERTY_LIST_END, STAT_ID_BITS};
pub use item_type::{ItemTypeDef, TypeKind};
pub use set::TableSet;
