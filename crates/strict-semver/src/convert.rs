//! Conversions between versions and external representations
//!
//! All encodings are the canonical text form: the binary encoding is its
//! ASCII bytes and the serde encoding is a plain string. Ranges serialize as
//! their rendered expression.
//!
//! Decoding is strict by default. `from_binary_with` and `scan_with` take a
//! [`VersionParser`] for callers that accept lenient input; serde always
//! decodes strictly.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::error::{ParseError, ScanError};
use crate::range::VersionRange;
use crate::version::Version;
use crate::version_parser::VersionParser;

/// A value read from an untyped source such as a database column
#[derive(Debug, Clone, PartialEq)]
pub enum SourceValue {
    Text(String),
    Bytes(Vec<u8>),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl SourceValue {
    /// Name of the representation, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            SourceValue::Text(_) => "text",
            SourceValue::Bytes(_) => "bytes",
            SourceValue::Integer(_) => "integer",
            SourceValue::Float(_) => "float",
            SourceValue::Bool(_) => "bool",
            SourceValue::Null => "null",
        }
    }
}

impl Version {
    /// Canonical text encoding
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Binary encoding: the ASCII bytes of the text form
    pub fn to_binary(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    /// Decode the binary encoding produced by [`Version::to_binary`]
    pub fn from_binary(data: &[u8]) -> Result<Self, ParseError> {
        Self::from_binary_with(data, &VersionParser::new())
    }

    /// Decode the binary encoding using `parser`'s configuration
    pub fn from_binary_with(data: &[u8], parser: &VersionParser) -> Result<Self, ParseError> {
        parser.parse_bytes(data)
    }

    /// Convert an untyped source value into a version
    ///
    /// Only text and byte values are accepted; anything else fails with
    /// [`ScanError::UnsupportedSourceType`].
    pub fn scan(value: &SourceValue) -> Result<Self, ScanError> {
        Self::scan_with(value, &VersionParser::new())
    }

    /// Same as [`Version::scan`], parsing with `parser`'s configuration
    pub fn scan_with(value: &SourceValue, parser: &VersionParser) -> Result<Self, ScanError> {
        match value {
            SourceValue::Text(text) => Ok(parser.parse(text)?),
            SourceValue::Bytes(bytes) => Ok(parser.parse_bytes(bytes)?),
            other => Err(ScanError::UnsupportedSourceType(other.type_name())),
        }
    }

    /// The value to store in an untyped sink
    pub fn value(&self) -> SourceValue {
        SourceValue::Text(self.to_string())
    }
}

impl TryFrom<&str> for Version {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Version::parse(value)
    }
}

impl TryFrom<&[u8]> for Version {
    type Error = ParseError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Version::from_binary(value)
    }
}

impl From<&Version> for Vec<u8> {
    fn from(version: &Version) -> Self {
        version.to_binary()
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct VersionVisitor;

        impl Visitor<'_> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a semantic version string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Version::parse(value).map_err(de::Error::custom)
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Version::from_binary(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}

impl Serialize for VersionRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VersionRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct VersionRangeVisitor;

        impl Visitor<'_> for VersionRangeVisitor {
            type Value = VersionRange;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a version range string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                VersionRange::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(VersionRangeVisitor)
    }
}
