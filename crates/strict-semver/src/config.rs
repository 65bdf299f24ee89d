//! Parser configuration

/// Runtime configuration for [`VersionParser`](crate::VersionParser)
///
/// A `Config` is a plain value: it is built once and never changes afterwards.
/// The only knob is strict adherence, which controls whether numeric
/// identifiers with leading zeroes (`01`) are rejected.
///
/// ```rust
/// use strict_semver::{Config, VersionParser};
///
/// let lenient = VersionParser::with_config(Config::new().with_strict_adherence(false));
/// assert_eq!(lenient.parse("1.0.0-01").unwrap().to_string(), "1.0.0-1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    strict: bool,
}

impl Config {
    /// Create the default configuration (strict adherence enabled)
    pub const fn new() -> Self {
        Config { strict: true }
    }

    /// Return a copy with strict adherence set to `value`
    pub const fn with_strict_adherence(self, value: bool) -> Self {
        Config { strict: value }
    }

    /// Check if strict adherence is enabled
    pub const fn strict_adherence(&self) -> bool {
        self.strict
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
