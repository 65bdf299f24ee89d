/// Integration tests for range expressions
///
/// These tests exercise parsing and evaluation together, including ranges
/// combined with `and` / `or` and serialized through serde_json.

use strict_semver::{ParseError, RangeParseError, Version, VersionRange};

fn v(s: &str) -> Version {
    Version::must_parse(s)
}

#[test]
fn test_contains() {
    let cases = [
        (">=1.0.0 <2.0.0", "1.5.0", true),
        (">=1.2.3 <2.0.0 || >=3.0.0", "3.1.0", true),
        (">=1.2.3 <2.0.0 || >=3.0.0", "1.2.3", true),
        (">=1.2.3 <2.0.0 || >=3.0.0", "2.5.0", false),
        ("!=1.0.0", "1.0.0", false),
        ("!=1.0.0", "1.0.0+build", false),
        ("=1.0.0-rc.1", "1.0.0-rc.1", true),
        ("1.0.0-rc.1", "1.0.0-rc.2", false),
        ("<1.0.0", "1.0.0-alpha", true),
        (">1.0.0-alpha <1.0.0-beta", "1.0.0-alpha.beta", true),
        ("<=0.0.0 || >=10.0.0", "9.9.9", false),
    ];

    for (range, version, expected) in cases {
        let parsed = VersionRange::parse(range).unwrap();
        assert_eq!(parsed.contains(&v(version)), expected, "{} contains {}", range, version);
    }
}

#[test]
fn test_combinators() {
    let lower = VersionRange::must_parse(">=1.0.0 || >=5.0.0-0");
    let upper = VersionRange::must_parse("<2.0.0");

    let both = lower.and(&upper);
    assert_eq!(both.groups().len(), 2);
    assert!(both.contains(&v("1.4.0")));
    assert!(!both.contains(&v("2.0.0")));

    let either = upper.or(&VersionRange::must_parse(">=3.0.0"));
    assert!(either.contains(&v("0.1.0")));
    assert!(either.contains(&v("3.0.0")));
    assert!(!either.contains(&v("2.5.0")));
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        VersionRange::parse(">=1.0.0 ~2.0.0"),
        Err(RangeParseError::InvalidRangeToken("~2.0.0".to_string()))
    );
    assert_eq!(
        VersionRange::parse("<1.0.0-01"),
        Err(RangeParseError::InvalidVersionInRange {
            version: "1.0.0-01".to_string(),
            source: ParseError::LeadingZeroInNumericIdentifier("01".to_string()),
        })
    );
}

#[test]
fn test_version_json() {
    let version = v("1.2.3-beta+build");
    let json = serde_json::to_string(&version).unwrap();
    assert_eq!(json, "\"1.2.3-beta+build\"");

    let decoded: Version = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.to_string(), "1.2.3-beta+build");

    assert!(serde_json::from_str::<Version>("\"1.2\"").is_err());
    assert!(serde_json::from_str::<Version>("123").is_err());
}

#[test]
fn test_range_json() {
    let range = VersionRange::must_parse(">=1.0.0 <2.0.0 || 3.0.0");
    let json = serde_json::to_string(&range).unwrap();
    assert_eq!(json, "\">=1.0.0 <2.0.0 || =3.0.0\"");

    let decoded: VersionRange = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, range);
    assert!(serde_json::from_str::<VersionRange>("\">=1\"").is_err());
}
