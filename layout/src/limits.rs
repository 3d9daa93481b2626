//! Configurable limits for bounded decoding.

/// Decode limits.
///
/// Counts read from the file are checked against these before any loop runs,
/// so a corrupted count cannot drive unbounded allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    /// Maximum save size in bytes.
    pub max_file_bytes: usize,

    /// Maximum number of top-level items in one list.
    pub max_items_per_list: usize,

    /// Maximum number of entries in one item property list.
    pub max_properties_per_list: usize,

    /// Maximum number of pages in a shared stash.
    #[cfg_attr(feature = "serde", serde(default = "default_stash_pages"))]
    pub max_stash_pages: usize,
}

#[cfg(feature = "serde")]
const fn default_stash_pages() -> usize {
    DEFAULT_STASH_PAGES
}

const DEFAULT_STASH_PAGES: usize = 4096;

impl Default for Limits {
    fn default() -> Self {
        Self {
            // Real saves stay well under 16 KB; leave room for modded ones.
            max_file_bytes: 1024 * 1024,
            max_items_per_list: 1024,
            max_properties_per_list: 128,
            max_stash_pages: DEFAULT_STASH_PAGES,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_file_bytes: 16 * 1024,
            max_items_per_list: 64,
            max_properties_per_list: 32,
            max_stash_pages: 16,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_file_bytes: usize::MAX,
            max_items_per_list: usize::MAX,
            max_properties_per_list: usize::MAX,
            max_stash_pages: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_fit_real_saves() {
        let limits = Limits::default();
        assert!(limits.max_file_bytes >= 64 * 1024);
        assert!(limits.max_items_per_list >= 200);
    }

    #[test]
    fn testing_limits_smaller() {
        let test_limits = Limits::for_testing();
        let default_limits = Limits::default();

        assert!(test_limits.max_file_bytes < default_limits.max_file_bytes);
        assert!(test_limits.max_items_per_list < default_limits.max_items_per_list);
        assert!(test_limits.max_properties_per_list < default_limits.max_properties_per_list);
        assert!(test_limits.max_stash_pages < default_limits.max_stash_pages);
    }

    #[test]
    fn unlimited_limits() {
        let limits = Limits::unlimited();
        assert_eq!(limits.max_file_bytes, usize::MAX);
        assert_eq!(limits.max_items_per_list, usize::MAX);
        assert_eq!(limits.max_properties_per_list, usize::MAX);
        assert_eq!(limits.max_stash_pages, usize::MAX);
    }

    #[test]
    fn limits_const_constructible() {
        const LIMITS: Limits = Limits::for_testing();
        assert_eq!(LIMITS.max_items_per_list, 64);
    }
}
