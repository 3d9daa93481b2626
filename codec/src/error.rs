//! Error types for save decoding and encoding.

use std::fmt;

use bitstream::BitError;
use layout::{LayoutError, Section};

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while decoding or encoding a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Reading the input failed.
    Io {
        kind: std::io::ErrorKind,
        message: String,
    },

    /// Framing error: signature, version, size, checksum or limits.
    Layout(LayoutError),

    /// Bit-level failure inside a section, usually truncation.
    Bitstream { section: Section, source: BitError },

    /// Attribute id missing from the character stat table.
    UnknownAttributeId { id: u16, bit_offset: usize },

    /// Attribute id appears twice in one list.
    DuplicateAttribute { id: u16 },

    /// Class id missing from the class table.
    UnknownClass { id: u8 },

    /// An item could not be decoded.
    MalformedItem {
        section: Section,
        /// Index of the top-level item in its list.
        index: usize,
        /// Byte offset where the item starts.
        offset: usize,
        reason: ItemFault,
    },

    /// A stored value the encoder could not write back unchanged.
    InvalidValue {
        section: Section,
        field: &'static str,
        offset: usize,
    },

    /// A document value does not fit the field it is written to.
    ValueOutOfRange { field: String, value: i64, max: i64 },

    /// Bytes remain after the last section.
    TrailingBytes { offset: usize, remaining: usize },
}

/// Why a single item failed to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemFault {
    /// The item ran past the end of the data.
    Truncated(BitError),

    /// Per-item "JM" marker missing.
    BadMarker { found: Vec<u8> },

    /// Huffman bits match no type code symbol.
    BadTypeCode { bits: u16 },

    /// Property list references a stat missing from the item stat table.
    UnknownStat { id: u16 },

    /// Property list longer than the configured limit.
    TooManyProperties { limit: usize },

    /// A 7-bit name ran past 15 characters without a terminator.
    UnterminatedName,

    /// A socketed item claims sockets of its own.
    NestedSockets { filled: u8 },

    /// A socketed child failed.
    SocketChild { child: usize, fault: Box<ItemFault> },
}

/// Coarse error categories callers can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    IoFailure,
    InvalidSignature,
    UnsupportedVersion,
    ChecksumMismatch,
    UnexpectedEndOfData,
    UnknownAttributeId,
    UnknownClass,
    MalformedItem,
    InvalidValue,
    ValueOutOfRange,
    LimitExceeded,
    TrailingData,
}

impl CodecError {
    /// Returns the category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } => ErrorKind::IoFailure,
            Self::Layout(err) => match err {
                LayoutError::InvalidSignature { .. } => ErrorKind::InvalidSignature,
                LayoutError::UnsupportedVersion { .. } => ErrorKind::UnsupportedVersion,
                LayoutError::ChecksumMismatch { .. } | LayoutError::FileSizeMismatch { .. } => {
                    ErrorKind::ChecksumMismatch
                }
                LayoutError::LimitsExceeded { .. } => ErrorKind::LimitExceeded,
                _ => ErrorKind::UnexpectedEndOfData,
            },
            Self::Bitstream { source, .. } => match source {
                BitError::UnexpectedEof { .. } => ErrorKind::UnexpectedEndOfData,
                _ => ErrorKind::ValueOutOfRange,
            },
            Self::UnknownAttributeId { .. } | Self::DuplicateAttribute { .. } => {
                ErrorKind::UnknownAttributeId
            }
            Self::UnknownClass { .. } => ErrorKind::UnknownClass,
            Self::MalformedItem { reason, .. } => {
                if reason.is_truncation() {
                    ErrorKind::UnexpectedEndOfData
                } else {
                    ErrorKind::MalformedItem
                }
            }
            Self::InvalidValue { .. } => ErrorKind::InvalidValue,
            Self::ValueOutOfRange { .. } => ErrorKind::ValueOutOfRange,
            Self::TrailingBytes { .. } => ErrorKind::TrailingData,
        }
    }

    pub(crate) fn out_of_range(field: impl Into<String>, value: i64, max: i64) -> Self {
        Self::ValueOutOfRange {
            field: field.into(),
            value,
            max,
        }
    }
}

impl ItemFault {
    /// Returns `true` if the root cause is running out of data.
    #[must_use]
    pub fn is_truncation(&self) -> bool {
        match self {
            Self::Truncated(BitError::UnexpectedEof { .. }) => true,
            Self::SocketChild { fault, .. } => fault.is_truncation(),
            _ => false,
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { kind, message } => write!(f, "i/o error ({kind:?}): {message}"),
            Self::Layout(e) => write!(f, "{e}"),
            Self::Bitstream { section, source } => write!(f, "in {section} section: {source}"),
            Self::UnknownAttributeId { id, bit_offset } => {
                write!(f, "unknown attribute id {id} at bit {bit_offset}")
            }
            Self::DuplicateAttribute { id } => write!(f, "duplicate attribute id {id}"),
            Self::UnknownClass { id } => write!(f, "unknown character class id {id}"),
            Self::MalformedItem {
                section,
                index,
                offset,
                reason,
            } => {
                write!(
                    f,
                    "malformed item {index} in {section} list at byte {offset}: {reason}"
                )
            }
            Self::InvalidValue {
                section,
                field,
                offset,
            } => write!(f, "invalid {field} in {section} section at byte {offset}"),
            Self::ValueOutOfRange { field, value, max } => {
                write!(f, "value {value} out of range for {field} (max {max})")
            }
            Self::TrailingBytes { offset, remaining } => {
                write!(f, "{remaining} trailing bytes at byte {offset}")
            }
        }
    }
}

impl fmt::Display for ItemFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated(e) => write!(f, "{e}"),
            Self::BadMarker { found } => write!(f, "missing item marker, found {found:02x?}"),
            Self::BadTypeCode { bits } => write!(f, "no type code symbol for bits {bits:#b}"),
            Self::UnknownStat { id } => write!(f, "unknown item stat id {id}"),
            Self::TooManyProperties { limit } => {
                write!(f, "property list exceeds {limit} entries")
            }
            Self::UnterminatedName => write!(f, "name exceeds 15 characters"),
            Self::NestedSockets { filled } => {
                write!(f, "socketed item holds {filled} items of its own")
            }
            Self::SocketChild { child, fault } => write!(f, "socketed item {child}: {fault}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(e) => Some(e),
            Self::Bitstream { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<LayoutError> for CodecError {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<BitError> for ItemFault {
    fn from(err: BitError) -> Self {
        Self::Truncated(err)
    }
}

/// Attaches a section to bit-level errors.
pub(crate) trait InSection<T> {
    fn in_section(self, section: Section) -> CodecResult<T>;
}

impl<T> InSection<T> for Result<T, BitError> {
    fn in_section(self, section: Section) -> CodecResult<T> {
        self.map_err(|source| CodecError::Bitstream { section, source })
    }
}
