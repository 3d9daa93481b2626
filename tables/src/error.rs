//! Error types for lookup table construction and queries.

use std::fmt;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors raised while building, validating or querying tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Class id has no entry in the class table.
    UnknownClass { id: u8 },

    /// Two entries share the same key.
    DuplicateEntry { table: &'static str, key: String },

    /// A bit width is zero or wider than the field it feeds.
    InvalidWidth {
        table: &'static str,
        key: String,
        bits: u8,
        max_bits: u8,
    },

    /// Two Huffman codes where one is a prefix of the other.
    AmbiguousCode { first: char, second: char },

    /// Table JSON could not be parsed.
    #[cfg(feature = "serde")]
    Json { message: String },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownClass { id } => write!(f, "unknown character class id {id}"),
            Self::DuplicateEntry { table, key } => {
                write!(f, "duplicate entry '{key}' in {table} table")
            }
            Self::InvalidWidth {
                table,
                key,
                bits,
                max_bits,
            } => {
                write!(
                    f,
                    "invalid width for '{key}' in {table} table: {bits} bits (must be 1..={max_bits})"
                )
            }
            Self::AmbiguousCode { first, second } => {
                write!(
                    f,
                    "huffman code for '{first}' is a prefix of the code for '{second}'"
                )
            }
            #[cfg(feature = "serde")]
            Self::Json { message } => write!(f, "invalid table json: {message}"),
        }
    }
}

impl std::error::Error for TableError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_class_display() {
        let err = TableError::UnknownClass { id: 9 };
        assert!(err.to_string().contains("class id 9"));
    }

    #[test]
    fn duplicate_entry_display() {
        let err = TableError::DuplicateEntry {
            table: "item type",
            key: "hp1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("hp1"));
        assert!(msg.contains("item type"));
    }

    #[test]
    fn invalid_width_display() {
        let err = TableError::InvalidWidth {
            table: "attribute",
            key: "strength".to_string(),
            bits: 0,
            max_bits: 32,
        };
        let msg = err.to_string();
        assert!(msg.contains("strength"));
        assert!(msg.contains("0 bits"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<TableError>();
    }
}
