//! Strict Semantic Versioning 2.0.0 library
//!
//! This crate parses versions byte by byte with every grammar rule of
//! [semver 2.0.0](https://semver.org/spec/v2.0.0.html) enforced, orders them
//! by semver precedence, and evaluates simple range expressions built from
//! `=`, `>`, `>=`, `<`, `<=` and `!=` terms combined with AND (whitespace)
//! and OR (`||`).
//!
//! ```rust
//! use strict_semver::{Version, VersionRange};
//!
//! let range = VersionRange::parse(">=1.0.0 <2.0.0").unwrap();
//! assert!(range.contains(&Version::parse("1.5.0").unwrap()));
//! assert!(Version::parse("1.0.0-alpha").unwrap() < Version::parse("1.0.0").unwrap());
//! ```

mod comparator;
mod config;
mod convert;
mod error;
mod identifier;
mod prerelease;
pub mod range;
mod semver;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use config::Config;
pub use convert::SourceValue;
pub use error::{ParseError, RangeParseError, ScanError};
pub use identifier::{has_leading_zero, is_alphanumeric, is_digit, is_identifier_byte};
pub use prerelease::PrereleaseIdentifier;
pub use range::{Operator, Requirement, VersionRange};
pub use semver::{reverse_versions, sort_versions, Semver};
pub use version::{Version, SUPPORTED_SEMVER};
pub use version_parser::VersionParser;
