//! Pure parsing functions for numeric tokens
//!
//! No I/O dependencies; every failure maps to [`GridError::MalformedNumber`]
//! so callers can attach positional context.

use crate::error::{GridError, Result};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Parse an unsigned decimal integer token
///
/// Parses manually to avoid a std dependency; overflow is a malformed
/// number rather than a panic.
pub fn parse_usize(token: &str) -> Result<usize> {
    if token.is_empty() {
        return Err(GridError::MalformedNumber);
    }

    let mut result: usize = 0;
    for byte in token.bytes() {
        if !byte.is_ascii_digit() {
            return Err(GridError::MalformedNumber);
        }
        let digit = (byte - b'0') as usize;
        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit))
            .ok_or(GridError::MalformedNumber)?;
    }

    Ok(result)
}

/// Parse a floating-point token
pub fn parse_f64(token: &str) -> Result<f64> {
    token.parse().map_err(|_| GridError::MalformedNumber)
}

/// Parse a data-section line of whitespace-separated floats
///
/// Empty (or whitespace-only) lines yield an empty vector. Values are
/// returned in token order.
#[cfg(feature = "alloc")]
pub fn parse_value_line(line: &str) -> Result<Vec<f64>> {
    line.split_whitespace().map(parse_f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_usize() {
        assert_eq!(parse_usize("0"), Ok(0));
        assert_eq!(parse_usize("128"), Ok(128));

        assert_eq!(parse_usize(""), Err(GridError::MalformedNumber));
        assert_eq!(parse_usize("12a"), Err(GridError::MalformedNumber));
        assert_eq!(parse_usize("-3"), Err(GridError::MalformedNumber));
        assert_eq!(
            parse_usize("99999999999999999999999999"),
            Err(GridError::MalformedNumber)
        );
    }

    #[test]
    fn test_parse_f64() {
        assert_eq!(parse_f64("1.5"), Ok(1.5));
        assert_eq!(parse_f64("-2"), Ok(-2.0));
        assert_eq!(parse_f64("1e-3"), Ok(0.001));
        assert_eq!(parse_f64("2.5E2"), Ok(250.0));

        assert_eq!(parse_f64(""), Err(GridError::MalformedNumber));
        assert_eq!(parse_f64("1.2.3"), Err(GridError::MalformedNumber));
        assert_eq!(parse_f64("abc"), Err(GridError::MalformedNumber));
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn test_parse_value_line() {
        use alloc::vec;

        assert_eq!(parse_value_line("1 2.5 3"), Ok(vec![1.0, 2.5, 3.0]));
        assert_eq!(parse_value_line("  4\t5  "), Ok(vec![4.0, 5.0]));
        assert_eq!(parse_value_line(""), Ok(vec![]));
        assert_eq!(parse_value_line("   "), Ok(vec![]));
        assert_eq!(
            parse_value_line("1 x 3"),
            Err(GridError::MalformedNumber)
        );
    }
}
