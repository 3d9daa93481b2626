//! File framing for d2s character saves.
//!
//! This crate knows where things are in a save file: the magic and version
//! words, the fixed byte offsets of the character header, the markers that
//! open each section, and the checksum that seals the whole file. It does not
//! interpret section bodies; that is the codec's job.
//!
//! # Design Principles
//!
//! - **Versioned layout** - Every version-dependent rule hangs off [`FormatProfile`].
//! - **Bounded decoding** - File size and list counts are validated against [`Limits`].
//! - **No domain knowledge** - Classes, stats and items live in other crates.

pub mod checksum;
mod error;
mod limits;
pub mod offsets;
mod preamble;
mod section;
mod version;

pub use error::{LayoutError, LayoutResult, LimitKind};
pub use limits::Limits;
pub use preamble::{decode_preamble, read_u32, Preamble, HEADER_SIZE, MAGIC};
pub use section::Section;
pub use version::{FormatProfile, SaveVersion};
