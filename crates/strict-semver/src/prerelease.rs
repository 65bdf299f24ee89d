//! Pre-release identifiers

use std::cmp::Ordering;
use std::fmt;

use crate::error::ParseError;
use crate::identifier::{ascii_to_string, has_leading_zero, is_numeric, is_valid_identifier, parse_u64};

/// A single dot-separated pre-release identifier
///
/// Numeric identifiers always have lower precedence than textual ones. The
/// variant is fixed when the identifier is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PrereleaseIdentifier {
    /// All-digit identifier, e.g. the `1` in `1.0.0-alpha.1`
    Numeric(u64),
    /// Identifier containing at least one non-digit, e.g. `alpha` or `x-7`
    Textual(String),
}

impl PrereleaseIdentifier {
    /// Parse a single identifier
    ///
    /// When `strict` is set, numeric identifiers with a leading zero are
    /// rejected. Otherwise the numeric value is kept and the zero is dropped.
    pub fn parse(text: &str, strict: bool) -> Result<Self, ParseError> {
        Self::from_bytes(text.as_bytes(), strict)
    }

    pub(crate) fn from_bytes(bytes: &[u8], strict: bool) -> Result<Self, ParseError> {
        if bytes.is_empty() {
            return Err(ParseError::EmptyPrereleaseIdentifier);
        }

        if !is_valid_identifier(bytes) {
            return Err(ParseError::InvalidPrereleaseIdentifier(
                String::from_utf8_lossy(bytes).into_owned(),
            ));
        }

        if is_numeric(bytes) {
            if strict && has_leading_zero(bytes) {
                return Err(ParseError::LeadingZeroInNumericIdentifier(ascii_to_string(bytes)));
            }
            return parse_u64(bytes)
                .map(PrereleaseIdentifier::Numeric)
                .ok_or_else(|| ParseError::InvalidPrereleaseIdentifier(ascii_to_string(bytes)));
        }

        Ok(PrereleaseIdentifier::Textual(ascii_to_string(bytes)))
    }

    /// Check if this identifier is numeric
    pub fn is_numeric(&self) -> bool {
        matches!(self, PrereleaseIdentifier::Numeric(_))
    }
}

impl Ord for PrereleaseIdentifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (PrereleaseIdentifier::Numeric(a), PrereleaseIdentifier::Numeric(b)) => a.cmp(b),
            (PrereleaseIdentifier::Numeric(_), PrereleaseIdentifier::Textual(_)) => Ordering::Less,
            (PrereleaseIdentifier::Textual(_), PrereleaseIdentifier::Numeric(_)) => Ordering::Greater,
            // ASCII only, so byte order is the same as str order
            (PrereleaseIdentifier::Textual(a), PrereleaseIdentifier::Textual(b)) => a.as_bytes().cmp(b.as_bytes()),
        }
    }
}

impl PartialOrd for PrereleaseIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PrereleaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrereleaseIdentifier::Numeric(n) => write!(f, "{}", n),
            PrereleaseIdentifier::Textual(s) => f.write_str(s),
        }
    }
}
