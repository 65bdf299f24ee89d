//! Error types for version parsing, range parsing and value conversion

use thiserror::Error;

/// Error type for version parsing
///
/// Parsing stops at the first problem, so each error describes exactly one
/// defect of the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("version string is empty")]
    EmptyInput,
    #[error("missing major, minor, or patch elements")]
    MissingVersionElements,
    #[error("invalid numeric identifier \"{0}\"")]
    InvalidNumericIdentifier(String),
    #[error("leading zeros are not allowed in numeric identifiers: \"{0}\"")]
    LeadingZeroInNumericIdentifier(String),
    #[error("invalid character in identifier at position {position}")]
    InvalidCharacterInIdentifier { position: usize },
    #[error("invalid pre-release identifier \"{0}\"")]
    InvalidPrereleaseIdentifier(String),
    #[error("empty pre-release identifier")]
    EmptyPrereleaseIdentifier,
    #[error("build metadata is empty")]
    EmptyBuildMetadata,
    #[error("invalid build metadata identifier \"{0}\"")]
    InvalidBuildMetadataIdentifier(String),
    #[error("unexpected character in version string at position {position}")]
    UnexpectedCharacter { position: usize },
    #[error("unexpected end of input while parsing version string")]
    UnexpectedEndOfInput,
}

/// Error type for range expression parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeParseError {
    #[error("invalid range token: {0}")]
    InvalidRangeToken(String),
    #[error("invalid version in range: {version}")]
    InvalidVersionInRange {
        version: String,
        #[source]
        source: ParseError,
    },
}

/// Error type for converting external values into a version
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("unsupported type {0} for Version")]
    UnsupportedSourceType(&'static str),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
