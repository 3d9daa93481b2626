//! Error types for save-file framing.

use std::fmt;

use crate::section::Section;

/// Result type for framing operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Framing errors: anything wrong with the file before section bodies are
/// interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LayoutError {
    /// File is too small to contain the fixed header.
    FileTooSmall { actual: usize, required: usize },

    /// A magic value or section marker did not match.
    InvalidSignature {
        section: Section,
        /// Byte offset of the marker.
        offset: usize,
        /// Bytes found where the marker was expected.
        found: Vec<u8>,
    },

    /// Save version has no known layout.
    UnsupportedVersion { found: u32 },

    /// Stored checksum does not match the file contents.
    ChecksumMismatch { stored: u32, computed: u32 },

    /// Stored file size does not match the buffer length.
    FileSizeMismatch { stored: u32, actual: usize },

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },
}

/// Specific decode limits that can be exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    FileBytes,
    ItemsPerList,
    PropertiesPerList,
    StashPages,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileTooSmall { actual, required } => {
                write!(f, "file too small: {actual} bytes, need at least {required}")
            }
            Self::InvalidSignature {
                section,
                offset,
                found,
            } => {
                write!(
                    f,
                    "invalid {section} signature at byte {offset}: expected {:02x?}, found {found:02x?}",
                    section.marker()
                )
            }
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported save version: 0x{found:02x}")
            }
            Self::ChecksumMismatch { stored, computed } => {
                write!(
                    f,
                    "checksum mismatch: stored 0x{stored:08x}, computed 0x{computed:08x}"
                )
            }
            Self::FileSizeMismatch { stored, actual } => {
                write!(
                    f,
                    "file size mismatch: header says {stored} bytes, file has {actual}"
                )
            }
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FileBytes => "file bytes",
            Self::ItemsPerList => "items per list",
            Self::PropertiesPerList => "properties per list",
            Self::StashPages => "stash pages",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_signature_display_names_section() {
        let err = LayoutError::InvalidSignature {
            section: Section::Header,
            offset: 0,
            found: vec![0xde, 0xad, 0xbe, 0xef],
        };
        let msg = err.to_string();
        assert!(msg.contains("header"));
        assert!(msg.contains("byte 0"));
        assert!(msg.contains("de"));
    }

    #[test]
    fn unsupported_version_display() {
        let err = LayoutError::UnsupportedVersion { found: 0x59 };
        assert!(err.to_string().contains("0x59"));
    }

    #[test]
    fn checksum_mismatch_display() {
        let err = LayoutError::ChecksumMismatch {
            stored: 0xDEAD_BEEF,
            computed: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("deadbeef"));
        assert!(msg.contains("00000001"));
    }

    #[test]
    fn limits_exceeded_display() {
        let err = LayoutError::LimitsExceeded {
            kind: LimitKind::ItemsPerList,
            limit: 4,
            actual: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("items per list"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn error_equality() {
        let a = LayoutError::FileSizeMismatch {
            stored: 10,
            actual: 9,
        };
        assert_eq!(a.clone(), a);
        assert_ne!(
            a,
            LayoutError::FileSizeMismatch {
                stored: 10,
                actual: 8
            }
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<LayoutError>();
    }
}
