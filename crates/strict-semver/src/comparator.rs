//! Version comparison utilities

use crate::range::Operator;
use crate::version::Version;

/// Comparator for versions, driven by an [`Operator`]
///
/// Every predicate is derived from [`Version::compare`], so build metadata
/// is ignored throughout.
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::Equal, version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::NotEqual, version2)
    }

    /// Compare version1 to version2 using the given operator
    pub fn compare(version1: &Version, operator: Operator, version2: &Version) -> bool {
        match operator {
            Operator::Equal => version1.equal(version2),
            Operator::NotEqual => !version1.equal(version2),
            Operator::GreaterThan => version1.greater_than(version2),
            Operator::GreaterThanOrEqual => version1.greater_than_or_equal(version2),
            Operator::LessThan => version1.less_than(version2),
            Operator::LessThanOrEqual => version1.less_than_or_equal(version2),
        }
    }
}
