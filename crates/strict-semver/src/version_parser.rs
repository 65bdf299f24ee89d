//! Version and range parsing

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::Config;
use crate::error::{ParseError, RangeParseError};
use crate::identifier::{ascii_to_string, has_leading_zero, is_digit, is_identifier_byte, is_valid_identifier, parse_u64};
use crate::prerelease::PrereleaseIdentifier;
use crate::range::{Operator, Requirement, VersionRange};
use crate::version::Version;

lazy_static! {
    // A single range term: optional operator glued to a version
    static ref RANGE_TOKEN_RE: Regex = Regex::new(r"^(>=|<=|>|<|=|!=)?([0-9A-Za-z.\-+]+)$").unwrap();
}

/// Parser for versions and range expressions
///
/// The parser is a cheap `Copy` value holding its [`Config`]; build one per
/// configuration and share it freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionParser {
    config: Config,
}

impl VersionParser {
    /// Create a parser with the default, strict configuration
    pub const fn new() -> Self {
        VersionParser { config: Config::new() }
    }

    pub const fn with_config(config: Config) -> Self {
        VersionParser { config }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Check if a string is a valid version under this parser's configuration
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }

    /// Parse a version string
    pub fn parse(&self, version: &str) -> Result<Version, ParseError> {
        self.parse_bytes(version.as_bytes())
    }

    /// Parse a version from raw bytes
    ///
    /// Bytes outside ASCII are rejected wherever they appear, so the input
    /// does not need to be valid UTF-8.
    pub fn parse_bytes(&self, input: &[u8]) -> Result<Version, ParseError> {
        if input.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let mut scanner = Scanner {
            input,
            pos: 0,
            strict: self.config.strict_adherence(),
        };
        scanner.version().inspect_err(|err| {
            log::trace!("Rejected version {:?}: {}", String::from_utf8_lossy(input), err);
        })
    }

    /// Parse a range expression such as `>=1.2.3 <2.0.0 || >=3.0.0`
    ///
    /// Terms inside an OR-group are separated by whitespace and must all hold;
    /// OR-groups are separated by `||`. A term without an operator means `=`.
    /// Empty OR-groups are skipped.
    pub fn parse_range(&self, range: &str) -> Result<VersionRange, RangeParseError> {
        let mut groups = Vec::new();

        for part in range.split("||") {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let mut requirements = Vec::new();
            for token in part.split_whitespace() {
                requirements.push(self.parse_requirement(token)?);
            }
            groups.push(requirements);
        }

        log::trace!("Parsed range {:?} into {} OR-groups", range, groups.len());
        Ok(VersionRange::new(groups))
    }

    fn parse_requirement(&self, token: &str) -> Result<Requirement, RangeParseError> {
        let captures = RANGE_TOKEN_RE.captures(token).ok_or_else(|| {
            log::debug!("Invalid range token {:?}", token);
            RangeParseError::InvalidRangeToken(token.to_string())
        })?;

        let operator = match captures.get(1) {
            Some(op) => op
                .as_str()
                .parse::<Operator>()
                .map_err(|_| RangeParseError::InvalidRangeToken(token.to_string()))?,
            None => Operator::Equal,
        };

        let version_str = captures.get(2).map_or("", |m| m.as_str());
        let version = self.parse(version_str).map_err(|source| {
            log::debug!("Invalid version {:?} in range token {:?}: {}", version_str, token, source);
            RangeParseError::InvalidVersionInRange {
                version: version_str.to_string(),
                source,
            }
        })?;

        log::trace!("Range term {} {}", operator, version);
        Ok(Requirement::new(operator, version))
    }
}

/// Single left-to-right pass over the version bytes
struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
    strict: bool,
}

impl Scanner<'_> {
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn version(&mut self) -> Result<Version, ParseError> {
        let major = self.numeric()?;
        self.dot()?;
        let minor = self.numeric()?;
        self.dot()?;
        let patch = self.numeric()?;

        let mut version = Version::new(major, minor, patch);

        match self.peek() {
            None => return Ok(version),
            Some(b'-') => {
                self.pos += 1;
                version.pre_release = self.pre_release()?;
            }
            Some(b'+') => {}
            Some(_) => return Err(ParseError::UnexpectedCharacter { position: self.pos }),
        }

        if self.peek() == Some(b'+') {
            self.pos += 1;
            version.build_metadata = self.build_metadata()?;
        }

        if self.pos < self.input.len() {
            return Err(ParseError::UnexpectedCharacter { position: self.pos });
        }

        Ok(version)
    }

    fn numeric(&mut self) -> Result<u64, ParseError> {
        let start = self.pos;
        while self.peek().is_some_and(is_digit) {
            self.pos += 1;
        }
        let digits = &self.input[start..self.pos];

        if digits.is_empty() {
            return match self.peek() {
                None => Err(ParseError::UnexpectedEndOfInput),
                Some(_) => Err(ParseError::InvalidNumericIdentifier(self.fragment(start))),
            };
        }

        if self.strict && has_leading_zero(digits) {
            return Err(ParseError::LeadingZeroInNumericIdentifier(ascii_to_string(digits)));
        }

        parse_u64(digits).ok_or_else(|| ParseError::InvalidNumericIdentifier(ascii_to_string(digits)))
    }

    fn dot(&mut self) -> Result<(), ParseError> {
        match self.peek() {
            Some(b'.') => {
                self.pos += 1;
                Ok(())
            }
            None | Some(b'-') | Some(b'+') => Err(ParseError::MissingVersionElements),
            Some(_) => Err(ParseError::UnexpectedCharacter { position: self.pos }),
        }
    }

    fn pre_release(&mut self) -> Result<Vec<PrereleaseIdentifier>, ParseError> {
        if self.peek().is_none() {
            return Err(ParseError::UnexpectedEndOfInput);
        }

        let start = self.pos;
        while let Some(b) = self.peek() {
            if b == b'+' {
                break;
            }
            if b != b'.' && !is_identifier_byte(b) {
                return Err(ParseError::InvalidCharacterInIdentifier { position: self.pos });
            }
            self.pos += 1;
        }

        self.input[start..self.pos]
            .split(|&b| b == b'.')
            .map(|part| PrereleaseIdentifier::from_bytes(part, self.strict))
            .collect()
    }

    fn build_metadata(&mut self) -> Result<Vec<String>, ParseError> {
        let rest = &self.input[self.pos..];
        if rest.is_empty() {
            return Err(ParseError::UnexpectedEndOfInput);
        }

        let mut identifiers = Vec::new();
        for part in rest.split(|&b| b == b'.') {
            if part.is_empty() {
                return Err(ParseError::EmptyBuildMetadata);
            }
            if !is_valid_identifier(part) {
                return Err(ParseError::InvalidBuildMetadataIdentifier(
                    String::from_utf8_lossy(part).into_owned(),
                ));
            }
            identifiers.push(ascii_to_string(part));
        }

        self.pos = self.input.len();
        Ok(identifiers)
    }

    /// The component starting at `start`, up to the next separator
    fn fragment(&self, start: usize) -> String {
        let rest = &self.input[start..];
        let end = rest
            .iter()
            .position(|&b| matches!(b, b'.' | b'-' | b'+'))
            .unwrap_or(rest.len());
        String::from_utf8_lossy(&rest[..end]).into_owned()
    }
}
