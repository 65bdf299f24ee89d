//! Semver facade providing high-level version operations

use crate::error::RangeParseError;
use crate::range::VersionRange;
use crate::version::Version;
use crate::version_parser::VersionParser;

/// Sort versions in ascending precedence order
///
/// The sort is stable, so versions differing only in build metadata keep
/// their relative order.
pub fn sort_versions(versions: &mut [Version]) {
    versions.sort();
}

/// Sort versions in descending precedence order
pub fn reverse_versions(versions: &mut [Version]) {
    versions.sort_by(|a, b| b.cmp(a));
}

/// Main facade for semantic versioning operations on plain strings
///
/// Invalid versions never satisfy anything and are dropped from sorted
/// output; use [`VersionParser`] directly to see parse errors.
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a range expression
    pub fn satisfies(version: &str, range: &str) -> bool {
        let parser = VersionParser::new();

        let version = match parser.parse(version) {
            Ok(v) => v,
            Err(err) => {
                log::debug!("Rejecting invalid version {:?}: {}", version, err);
                return false;
            }
        };

        let range = match parser.parse_range(range) {
            Ok(r) => r,
            Err(err) => {
                log::debug!("Rejecting invalid range {:?}: {}", range, err);
                return false;
            }
        };

        range.contains(&version)
    }

    /// Return all versions that satisfy the given range expression
    pub fn satisfied_by(versions: &[&str], range: &str) -> Vec<String> {
        let parser = VersionParser::new();
        let range = match parser.parse_range(range) {
            Ok(r) => r,
            Err(err) => {
                log::debug!("Rejecting invalid range {:?}: {}", range, err);
                return Vec::new();
            }
        };

        versions
            .iter()
            .filter_map(|v| match parser.parse(v) {
                Ok(parsed) if range.contains(&parsed) => Some(v.to_string()),
                Ok(_) => None,
                Err(err) => {
                    log::debug!("Skipping invalid version {:?}: {}", v, err);
                    None
                }
            })
            .collect()
    }

    /// Parse a range expression and return a reusable representation
    pub fn parse_range(range: &str) -> Result<VersionRange, RangeParseError> {
        VersionParser::new().parse_range(range)
    }

    /// Check a version against a pre-parsed range
    pub fn satisfies_parsed(version: &str, range: &VersionRange) -> bool {
        match Version::parse(version) {
            Ok(v) => range.contains(&v),
            Err(err) => {
                log::debug!("Rejecting invalid version {:?}: {}", version, err);
                false
            }
        }
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let parser = VersionParser::new();

        // Parsed versions with their input index
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| match parser.parse(v) {
                Ok(version) => Some((version, i)),
                Err(err) => {
                    log::debug!("Skipping invalid version {:?} while sorting: {}", v, err);
                    None
                }
            })
            .collect();

        parsed.sort_by(|(a, _), (b, _)| if ascending { a.cmp(b) } else { b.cmp(a) });

        // Return the input strings in sorted order
        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
