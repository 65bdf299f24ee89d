//! Disjunction of conjunctive requirement groups

use std::fmt;
use std::str::FromStr;

use super::Requirement;
use crate::error::RangeParseError;
use crate::version::Version;
use crate::version_parser::VersionParser;

/// A range expression: OR-combined groups of AND-combined requirements
///
/// ```rust
/// use strict_semver::{Version, VersionRange};
///
/// let range = VersionRange::parse(">=1.2.3 <2.0.0 || >=3.0.0").unwrap();
/// assert!(range.contains(&Version::parse("3.1.0").unwrap()));
/// assert!(!range.contains(&Version::parse("2.5.0").unwrap()));
/// ```
///
/// A range without groups matches nothing. A group without requirements
/// also matches nothing; parsing never produces one, but [`VersionRange::new`]
/// accepts it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VersionRange {
    groups: Vec<Vec<Requirement>>,
}

impl VersionRange {
    pub fn new(groups: Vec<Vec<Requirement>>) -> Self {
        VersionRange { groups }
    }

    /// Parse a range with the default (strict) configuration
    pub fn parse(range: &str) -> Result<Self, RangeParseError> {
        VersionParser::new().parse_range(range)
    }

    /// Parse a range that is known to be valid
    ///
    /// # Panics
    ///
    /// Panics if `range` cannot be parsed.
    pub fn must_parse(range: &str) -> Self {
        match Self::parse(range) {
            Ok(parsed) => parsed,
            Err(err) => panic!("strict_semver: VersionRange::must_parse({:?}): {}", range, err),
        }
    }

    /// The OR-groups, each a list of requirements that must all hold
    pub fn groups(&self) -> &[Vec<Requirement>] {
        &self.groups
    }

    /// Check if `version` satisfies at least one group
    pub fn contains(&self, version: &Version) -> bool {
        self.groups
            .iter()
            .any(|group| !group.is_empty() && group.iter().all(|requirement| requirement.matches(version)))
    }

    /// Combine with another range so that both must hold
    ///
    /// AND is distributed over OR: every group of `self` is joined with every
    /// group of `other`.
    pub fn and(&self, other: &VersionRange) -> VersionRange {
        let mut groups = Vec::with_capacity(self.groups.len() * other.groups.len());
        for left in &self.groups {
            for right in &other.groups {
                let mut combined = Vec::with_capacity(left.len() + right.len());
                combined.extend(left.iter().cloned());
                combined.extend(right.iter().cloned());
                groups.push(combined);
            }
        }
        VersionRange { groups }
    }

    /// Combine with another range so that either may hold
    pub fn or(&self, other: &VersionRange) -> VersionRange {
        let mut groups = Vec::with_capacity(self.groups.len() + other.groups.len());
        groups.extend(self.groups.iter().cloned());
        groups.extend(other.groups.iter().cloned());
        VersionRange { groups }
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str(" || ")?;
            }
            for (j, requirement) in group.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", requirement)?;
            }
        }
        Ok(())
    }
}

impl FromStr for VersionRange {
    type Err = RangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::Operator;

    fn v(s: &str) -> Version {
        Version::must_parse(s)
    }

    #[test]
    fn test_contains() {
        assert!(VersionRange::must_parse(">=1.0.0 <2.0.0").contains(&v("1.5.0")));
        assert!(!VersionRange::must_parse(">=1.0.0 <2.0.0").contains(&v("2.0.0")));
        // Pre-releases are ordinary versions here, below their release
        assert!(VersionRange::must_parse(">=1.0.0 <2.0.0").contains(&v("2.0.0-rc.1")));
        assert!(VersionRange::must_parse(">=1.2.3 <2.0.0 || >=3.0.0").contains(&v("3.1.0")));
        assert!(!VersionRange::must_parse(">=1.2.3 <2.0.0 || >=3.0.0").contains(&v("2.1.0")));
        assert!(!VersionRange::must_parse("!=1.0.0").contains(&v("1.0.0")));
        assert!(VersionRange::must_parse("!=1.0.0").contains(&v("1.0.1")));
        assert!(VersionRange::must_parse("1.0.0").contains(&v("1.0.0+build.7")));
        assert!(VersionRange::must_parse("<=1.0.0").contains(&v("1.0.0-alpha")));
    }

    #[test]
    fn test_empty_range_matches_nothing() {
        assert!(!VersionRange::must_parse("").contains(&v("1.0.0")));
        assert!(!VersionRange::default().contains(&v("0.0.0")));
    }

    #[test]
    fn test_empty_group_matches_nothing() {
        let range = VersionRange::new(vec![vec![]]);
        assert!(!range.contains(&v("1.0.0")));

        let range = VersionRange::new(vec![
            vec![],
            vec![Requirement::new(Operator::Equal, v("1.0.0"))],
        ]);
        assert!(range.contains(&v("1.0.0")));
    }

    #[test]
    fn test_or() {
        let r1 = VersionRange::must_parse(">1.0.0 <2.0.0");
        let r2 = VersionRange::must_parse(">=3.0.0 !=4.2.1");
        let combined = r1.or(&r2);

        assert_eq!(combined.groups().len(), 2);
        assert!(combined.contains(&v("1.5.0")));
        assert!(combined.contains(&v("3.1.0")));
        assert!(!combined.contains(&v("4.2.1")));
        assert!(!combined.contains(&v("2.5.0")));
    }

    #[test]
    fn test_and_distributes_over_or() {
        let r1 = VersionRange::must_parse(">1.0.0 <3.0.0 || >=5.0.0");
        let r2 = VersionRange::must_parse("!=2.0.3-beta.2 || <1.0.0");
        let combined = r1.and(&r2);

        assert_eq!(combined.groups().len(), 4);
        assert_eq!(combined.groups()[0].len(), 3);
        assert!(combined.contains(&v("2.1.0")));
        assert!(!combined.contains(&v("2.0.3-beta.2")));
        assert!(combined.contains(&v("5.0.0")));
        assert!(!combined.contains(&v("4.0.0")));
    }

    #[test]
    fn test_and_with_empty_range() {
        let combined = VersionRange::must_parse(">=1.0.0").and(&VersionRange::default());
        assert!(combined.groups().is_empty());
        assert!(!combined.contains(&v("1.0.0")));
    }

    #[test]
    fn test_display_round_trips() {
        let range = VersionRange::must_parse("  >=1.2.3   <2.0.0 ||1.5.0-rc.1+b   ||  !=3.0.0 ");
        assert_eq!(range.to_string(), ">=1.2.3 <2.0.0 || =1.5.0-rc.1+b || !=3.0.0");
        assert_eq!(VersionRange::must_parse(&range.to_string()), range);
    }

    #[test]
    fn test_from_str() {
        let range: VersionRange = ">=1.0.0".parse().unwrap();
        assert!(range.contains(&v("1.0.0")));
        assert!("bogus".parse::<VersionRange>().is_err());
    }

    #[test]
    #[should_panic(expected = "VersionRange::must_parse")]
    fn test_must_parse_panics() {
        VersionRange::must_parse(">=1.0");
    }
}
