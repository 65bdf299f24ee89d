//! Byte classification for semver identifiers
//!
//! Identifiers are restricted to `[0-9A-Za-z-]`. Everything here works on raw
//! bytes so that non-ASCII input is rejected before any string is built.

/// Check if a byte is an ASCII digit
#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Check if a byte is an ASCII letter or digit
#[inline]
pub fn is_alphanumeric(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

/// Check if a byte may appear inside a pre-release or build identifier
#[inline]
pub fn is_identifier_byte(b: u8) -> bool {
    is_alphanumeric(b) || b == b'-'
}

/// Check if every byte of a non-empty slice is a digit
pub fn is_numeric(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.iter().all(|&b| is_digit(b))
}

/// Check if a non-empty slice only contains identifier bytes
pub fn is_valid_identifier(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.iter().all(|&b| is_identifier_byte(b))
}

/// Check if a numeric run starts with a superfluous zero ("01", "007")
#[inline]
pub fn has_leading_zero(digits: &[u8]) -> bool {
    digits.len() > 1 && digits[0] == b'0'
}

/// Convert a run of ASCII digits to a u64, `None` on overflow or non-digit input
pub fn parse_u64(digits: &[u8]) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }

    let mut value: u64 = 0;
    for &b in digits {
        if !is_digit(b) {
            return None;
        }
        value = value.checked_mul(10)?.checked_add(u64::from(b - b'0'))?;
    }
    Some(value)
}

/// Build an owned string from bytes already validated as ASCII
pub(crate) fn ascii_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_bytes() {
        assert!(is_identifier_byte(b'a'));
        assert!(is_identifier_byte(b'Z'));
        assert!(is_identifier_byte(b'7'));
        assert!(is_identifier_byte(b'-'));
        assert!(!is_identifier_byte(b'.'));
        assert!(!is_identifier_byte(b'+'));
        assert!(!is_identifier_byte(b'_'));
        assert!(!is_identifier_byte(0xC3));
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric(b"0"));
        assert!(is_numeric(b"1234"));
        assert!(!is_numeric(b""));
        assert!(!is_numeric(b"12a"));
        assert!(!is_numeric(b"-1"));
    }

    #[test]
    fn test_is_valid_identifier() {
        assert!(is_valid_identifier(b"alpha-1"));
        assert!(is_valid_identifier(b"--"));
        assert!(!is_valid_identifier(b""));
        assert!(!is_valid_identifier(b"al pha"));
        assert!(!is_valid_identifier("bêta".as_bytes()));
    }

    #[test]
    fn test_has_leading_zero() {
        assert!(has_leading_zero(b"01"));
        assert!(has_leading_zero(b"00"));
        assert!(!has_leading_zero(b"0"));
        assert!(!has_leading_zero(b"10"));
    }

    #[test]
    fn test_parse_u64() {
        assert_eq!(parse_u64(b"0"), Some(0));
        assert_eq!(parse_u64(b"007"), Some(7));
        assert_eq!(parse_u64(b"18446744073709551615"), Some(u64::MAX));
        assert_eq!(parse_u64(b"18446744073709551616"), None);
        assert_eq!(parse_u64(b""), None);
        assert_eq!(parse_u64(b"1x"), None);
    }
}
