//! The parsed version value and its precedence rules

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::ParseError;
use crate::identifier::is_valid_identifier;
use crate::prerelease::PrereleaseIdentifier;
use crate::version_parser::VersionParser;

/// The latest revision of Semantic Versioning implemented by this crate
pub const SUPPORTED_SEMVER: Version = Version {
    major: 2,
    minor: 0,
    patch: 0,
    pre_release: Vec::new(),
    build_metadata: Vec::new(),
};

/// A Semantic Versioning 2.0.0 version
///
/// Equality, ordering and hashing follow semver precedence, so build metadata
/// is ignored by all three: `1.0.0+a == 1.0.0+b`. Use
/// [`Version::build_metadata`] when the metadata itself matters.
///
/// ```rust
/// use strict_semver::Version;
///
/// let v = Version::parse("1.2.3-alpha.1+build.5").unwrap();
/// assert_eq!(v.major(), 1);
/// assert!(v < Version::parse("1.2.3").unwrap());
/// assert_eq!(v.to_string(), "1.2.3-alpha.1+build.5");
/// ```
#[derive(Debug, Clone)]
pub struct Version {
    pub(crate) major: u64,
    pub(crate) minor: u64,
    pub(crate) patch: u64,
    pub(crate) pre_release: Vec<PrereleaseIdentifier>,
    pub(crate) build_metadata: Vec<String>,
}

impl Version {
    /// Create a release version without pre-release or build metadata
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build_metadata: Vec::new(),
        }
    }

    /// Return a new version carrying the given pre-release identifiers
    ///
    /// Each identifier must render to text that parses back to the same
    /// identifier, so `Textual("1")`, `Textual("")` and `Textual("a.b")` are
    /// rejected.
    pub fn with_pre_release<I>(self, identifiers: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = PrereleaseIdentifier>,
    {
        let mut pre_release = Vec::new();
        for identifier in identifiers {
            let text = identifier.to_string();
            if PrereleaseIdentifier::from_bytes(text.as_bytes(), true)? != identifier {
                return Err(ParseError::InvalidPrereleaseIdentifier(text));
            }
            pre_release.push(identifier);
        }

        Ok(Version {
            pre_release,
            ..self
        })
    }

    /// Return a new version carrying the given build metadata
    ///
    /// Each identifier must be non-empty and only contain `[0-9A-Za-z-]`.
    pub fn with_build_metadata<I, S>(self, identifiers: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut build_metadata = Vec::new();
        for identifier in identifiers {
            let identifier = identifier.into();
            if identifier.is_empty() {
                return Err(ParseError::EmptyBuildMetadata);
            }
            if !is_valid_identifier(identifier.as_bytes()) {
                return Err(ParseError::InvalidBuildMetadataIdentifier(identifier));
            }
            build_metadata.push(identifier);
        }

        Ok(Version {
            build_metadata,
            ..self
        })
    }

    /// Parse a version with the default (strict) configuration
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        VersionParser::new().parse(text)
    }

    /// Parse a version that is known to be valid
    ///
    /// # Panics
    ///
    /// Panics if `text` is not a valid version. Prefer [`Version::parse`]
    /// for input that has not been validated.
    pub fn must_parse(text: &str) -> Self {
        match Self::parse(text) {
            Ok(version) => version,
            Err(err) => panic!("strict_semver: Version::must_parse({:?}): {}", text, err),
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre_release(&self) -> &[PrereleaseIdentifier] {
        &self.pre_release
    }

    pub fn build_metadata(&self) -> &[String] {
        &self.build_metadata
    }

    /// Check if this version has pre-release identifiers
    pub fn is_prerelease(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Compare two versions by semver precedence
    ///
    /// Build metadata never takes part in the comparison.
    pub fn compare(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| compare_pre_release(&self.pre_release, &other.pre_release))
    }

    pub fn equal(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Equal
    }

    pub fn less_than(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Less
    }

    pub fn less_than_or_equal(&self, other: &Version) -> bool {
        self.compare(other) != Ordering::Greater
    }

    pub fn greater_than(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Greater
    }

    pub fn greater_than_or_equal(&self, other: &Version) -> bool {
        self.compare(other) != Ordering::Less
    }
}

fn compare_pre_release(a: &[PrereleaseIdentifier], b: &[PrereleaseIdentifier]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        // A release has higher precedence than any of its pre-releases
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            for (left, right) in a.iter().zip(b.iter()) {
                match left.cmp(right) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            }
            a.len().cmp(&b.len())
        }
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        for (i, identifier) in self.pre_release.iter().enumerate() {
            f.write_str(if i == 0 { "-" } else { "." })?;
            write!(f, "{}", identifier)?;
        }

        for (i, identifier) in self.build_metadata.iter().enumerate() {
            f.write_str(if i == 0 { "+" } else { "." })?;
            f.write_str(identifier)?;
        }

        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
