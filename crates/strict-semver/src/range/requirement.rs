//! A single operator + version term

use std::fmt;

use super::Operator;
use crate::comparator::Comparator;
use crate::version::Version;

/// A single range term such as `>=1.2.3`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Requirement {
    operator: Operator,
    version: Version,
}

impl Requirement {
    pub fn new(operator: Operator, version: Version) -> Self {
        Requirement { operator, version }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Check if `version` satisfies this requirement
    pub fn matches(&self, version: &Version) -> bool {
        Comparator::compare(version, self.operator, &self.version)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(op: Operator, v: &str) -> Requirement {
        Requirement::new(op, Version::must_parse(v))
    }

    #[test]
    fn test_matches() {
        let v = Version::must_parse("1.1.0");

        assert!(req(Operator::GreaterThan, "1.0.0").matches(&v));
        assert!(!req(Operator::GreaterThan, "1.1.0").matches(&v));
        assert!(req(Operator::GreaterThanOrEqual, "1.1.0").matches(&v));
        assert!(req(Operator::LessThan, "1.1.1").matches(&v));
        assert!(!req(Operator::LessThan, "1.1.0").matches(&v));
        assert!(req(Operator::LessThanOrEqual, "1.1.0").matches(&v));
        assert!(req(Operator::Equal, "1.1.0+build").matches(&v));
        assert!(!req(Operator::Equal, "1.1.0-rc.1").matches(&v));
        assert!(req(Operator::NotEqual, "1.1.0-rc.1").matches(&v));
        assert!(!req(Operator::NotEqual, "1.1.0").matches(&v));
    }

    #[test]
    fn test_prerelease_sits_below_release() {
        let pre = Version::must_parse("2.0.0-beta");
        assert!(req(Operator::LessThan, "2.0.0").matches(&pre));
        assert!(req(Operator::GreaterThan, "1.9.9").matches(&pre));
    }

    #[test]
    fn test_display() {
        assert_eq!(req(Operator::GreaterThanOrEqual, "1.2.3").to_string(), ">=1.2.3");
        assert_eq!(req(Operator::Equal, "1.2.3-rc.1+b").to_string(), "=1.2.3-rc.1+b");
    }
}
