//! Numeric field validation
//!
//! Counters in the input must be plain runs of ASCII digits: no sign, no
//! separators, no whitespace. An empty column is not a valid counter.

/// Check that a token is a non-empty run of ASCII digits
#[inline]
pub fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a validated counter, rejecting anything that does not fit in `u64`
pub fn parse_counter(token: &str) -> Option<u64> {
    if !is_numeric(token) {
        return None;
    }

    let mut result: u64 = 0;
    for byte in token.bytes() {
        result = result.checked_mul(10)?;
        result = result.checked_add(u64::from(byte - b'0'))?;
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("0"));
        assert!(is_numeric("0042"));
        assert!(is_numeric("123456789"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("-5"));
        assert!(!is_numeric("+5"));
        assert!(!is_numeric("12a"));
        assert!(!is_numeric("1 000"));
        assert!(!is_numeric("3.5"));
        assert!(!is_numeric("\"12\""));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic digits are numeric in Unicode but not counters here
        assert!(!is_numeric("١٢٣"));
    }

    #[test]
    fn test_parse_counter() {
        assert_eq!(parse_counter("0"), Some(0));
        assert_eq!(parse_counter("0042"), Some(42));
        assert_eq!(parse_counter("18446744073709551615"), Some(u64::MAX));
        assert_eq!(parse_counter("18446744073709551616"), None);
        assert_eq!(parse_counter(""), None);
        assert_eq!(parse_counter("7x"), None);
    }
}
