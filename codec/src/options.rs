//! Decode configuration.

use layout::Limits;

/// Options controlling how strictly a save is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fail on checksum or file size mismatch instead of logging a warning.
    pub strict_checksum: bool,
    /// Decode unknown versions with the nearest known layout.
    pub allow_unknown_version: bool,
    pub limits: Limits,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strict_checksum: true,
            allow_unknown_version: false,
            limits: Limits::default(),
        }
    }
}

impl ParseOptions {
    /// Tolerates stale checksums and unknown versions.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            strict_checksum: false,
            allow_unknown_version: true,
            limits: Limits::default(),
        }
    }

    /// Default strictness with small limits.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            strict_checksum: true,
            allow_unknown_version: false,
            limits: Limits::for_testing(),
        }
    }

    #[must_use]
    pub const fn with_strict_checksum(mut self, strict: bool) -> Self {
        self.strict_checksum = strict;
        self
    }

    #[must_use]
    pub const fn with_allow_unknown_version(mut self, allow: bool) -> Self {
        self.allow_unknown_version = allow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_strict() {
        let options = ParseOptions::default();
        assert!(options.strict_checksum);
        assert!(!options.allow_unknown_version);
        assert_eq!(options.limits, Limits::default());
    }

    #[test]
    fn builders() {
        let options = ParseOptions::for_testing()
            .with_strict_checksum(false)
            .with_allow_unknown_version(true);
        assert!(!options.strict_checksum);
        assert!(options.allow_unknown_version);
        assert_eq!(options.limits, Limits::for_testing());
    }

    #[test]
    fn lenient_relaxes_both() {
        let options = ParseOptions::lenient();
        assert!(!options.strict_checksum);
        assert!(options.allow_unknown_version);
    }
}
