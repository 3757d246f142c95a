//! Typed value extraction.
//!
//! Thin consumers of the path resolver: each getter resolves a dotted key to
//! its key token, requires exactly one attached value, and decodes the token
//! that immediately follows. The `get_index_*` variants skip resolution and
//! decode an already-known value token index (array elements, for example).
//!
//! Decoding is deliberately permissive, matching the C string conversions it
//! replaces:
//!
//! - [`get_value_str`] returns the raw byte range for *any* token kind,
//!   numbers and booleans included - it performs no type validation.
//! - [`get_value_i64`] / [`get_value_f64`] parse a leading numeral prefix and
//!   quietly yield `0` / `0.0` when there is none; they never report a decode
//!   error.
//! - [`get_value_bool`] matches `true`/`false` bounded by the token length
//!   (`strncmp` style) and is the only getter that rejects malformed content.

use crate::error::{Error, Result};
use crate::path::key_index;
use crate::token::Token;

/// Resolve `path` and return the raw bytes of its value as a borrowed slice
/// of `text`.
///
/// No type validation: a number or boolean value comes back as its literal
/// text. The slice borrows from the caller's buffer; nothing is copied.
pub fn get_value_str<'a>(
    tokens: &[Token],
    start: usize,
    path: &str,
    text: &'a str,
) -> Result<&'a str> {
    get_index_str(tokens, value_index(tokens, start, path, text)?, text)
}

/// Resolve `path` and decode its value as an integer.
///
/// Lenient leading-numeral parse: optional sign, then digits, stopping at the
/// first non-digit. No digits yields `0`; this getter never reports a decode
/// error.
pub fn get_value_i64(tokens: &[Token], start: usize, path: &str, text: &str) -> Result<i64> {
    get_index_i64(tokens, value_index(tokens, start, path, text)?, text)
}

/// Resolve `path` and decode its value as a double.
///
/// Lenient longest-valid-prefix parse, fraction and exponent aware; `0.0`
/// when no prefix parses.
pub fn get_value_f64(tokens: &[Token], start: usize, path: &str, text: &str) -> Result<f64> {
    get_index_f64(tokens, value_index(tokens, start, path, text)?, text)
}

/// Resolve `path` and decode its value as a boolean.
///
/// Anything other than a `true`/`false` literal is [`Error::Invalid`].
pub fn get_value_bool(tokens: &[Token], start: usize, path: &str, text: &str) -> Result<bool> {
    get_index_bool(tokens, value_index(tokens, start, path, text)?, text)
}

/// Shared resolution step: key token index plus the one-value requirement.
fn value_index(tokens: &[Token], start: usize, path: &str, text: &str) -> Result<usize> {
    let key = key_index(tokens, start, path, text)?;
    if tokens[key].size != 1 {
        return Err(Error::KeyInvalid);
    }
    Ok(key + 1)
}

/// Raw byte range of the token at `index`, borrowed from `text`.
pub fn get_index_str<'a>(tokens: &[Token], index: usize, text: &'a str) -> Result<&'a str> {
    let token = tokens.get(index).ok_or(Error::IndexInvalid)?;
    text.get(token.start..token.end).ok_or(Error::IndexInvalid)
}

/// Decode the token at `index` as an integer (lenient, see [`get_value_i64`]).
pub fn get_index_i64(tokens: &[Token], index: usize, text: &str) -> Result<i64> {
    Ok(parse_i64_prefix(get_index_str(tokens, index, text)?))
}

/// Decode the token at `index` as a double (lenient, see [`get_value_f64`]).
pub fn get_index_f64(tokens: &[Token], index: usize, text: &str) -> Result<f64> {
    Ok(parse_f64_prefix(get_index_str(tokens, index, text)?))
}

/// Decode the token at `index` as a boolean.
///
/// The comparison is bounded by the token's byte length, so a literal
/// truncated by a malformed stream still matches its prefix.
pub fn get_index_bool(tokens: &[Token], index: usize, text: &str) -> Result<bool> {
    let raw = get_index_str(tokens, index, text)?.as_bytes();
    if b"true".starts_with(raw) {
        Ok(true)
    } else if b"false".starts_with(raw) {
        Ok(false)
    } else {
        Err(Error::Invalid)
    }
}

/// `atoi`-style parse: sign, digits, stop at the first non-digit, `0` when
/// no digits are present. Overflow wraps rather than erroring.
fn parse_i64_prefix(s: &str) -> i64 {
    let bytes = s.as_bytes();
    let (negative, mut i) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let mut value: i64 = 0;
    while let Some(digit) = bytes.get(i).filter(|b| b.is_ascii_digit()) {
        value = value
            .wrapping_mul(10)
            .wrapping_add(i64::from(digit - b'0'));
        i += 1;
    }
    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

/// `atof`-style parse: the longest prefix that is a valid float literal,
/// `0.0` when even the first byte fails.
fn parse_f64_prefix(s: &str) -> f64 {
    // Bound the scan to number-ish bytes so "true" never reaches the parser.
    let numberish = s
        .bytes()
        .take_while(|b| matches!(b, b'0'..=b'9' | b'+' | b'-' | b'.' | b'e' | b'E'))
        .count();

    for cut in (1..=numberish).rev() {
        if let Ok(value) = s[..cut].parse::<f64>() {
            return value;
        }
    }
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    const DOC: &str = concat!(
        r#"{"first":11,"test":"value","sub":{"index":23,"title":"blah"},"#,
        r#""array":[1,2,3],"bool":true,"float":1.23,"end":[3,2,1]}"#
    );

    #[test]
    fn string_values_by_path() {
        let tokens = tokenize(DOC).unwrap();
        assert_eq!(get_value_str(&tokens, 0, "test", DOC).unwrap(), "value");
        assert_eq!(get_value_str(&tokens, 0, "sub.title", DOC).unwrap(), "blah");
    }

    #[test]
    fn string_getter_skips_type_validation() {
        let tokens = tokenize(DOC).unwrap();
        // Numbers and booleans come back as their literal text.
        assert_eq!(get_value_str(&tokens, 0, "first", DOC).unwrap(), "11");
        assert_eq!(get_value_str(&tokens, 0, "bool", DOC).unwrap(), "true");
    }

    #[test]
    fn integer_values_by_path() {
        let tokens = tokenize(DOC).unwrap();
        assert_eq!(get_value_i64(&tokens, 0, "first", DOC).unwrap(), 11);
        assert_eq!(get_value_i64(&tokens, 0, "sub.index", DOC).unwrap(), 23);
    }

    #[test]
    fn double_and_bool_values_by_path() {
        let tokens = tokenize(DOC).unwrap();
        assert_eq!(get_value_f64(&tokens, 0, "float", DOC).unwrap(), 1.23);
        assert!(get_value_bool(&tokens, 0, "bool", DOC).unwrap());
    }

    #[test]
    fn missing_key_propagates_key_invalid() {
        let tokens = tokenize(DOC).unwrap();
        assert_eq!(
            get_value_str(&tokens, 0, "nokey", DOC),
            Err(Error::KeyInvalid)
        );
        assert_eq!(
            get_value_i64(&tokens, 0, "nokey.dot", DOC),
            Err(Error::KeyInvalid)
        );
    }

    #[test]
    fn index_variants_decode_array_elements() {
        let tokens = tokenize(DOC).unwrap();
        // "array":[1,2,3] - elements at 13, 14, 15.
        assert_eq!(get_index_i64(&tokens, 13, DOC).unwrap(), 1);
        assert_eq!(get_index_str(&tokens, 15, DOC).unwrap(), "3");
        assert_eq!(get_index_i64(&tokens, 999, DOC), Err(Error::IndexInvalid));
    }

    #[test]
    fn non_literal_bool_is_invalid() {
        let tokens = tokenize(DOC).unwrap();
        assert_eq!(get_value_bool(&tokens, 0, "first", DOC), Err(Error::Invalid));
        assert_eq!(get_value_bool(&tokens, 0, "test", DOC), Err(Error::Invalid));
    }

    #[test]
    fn lenient_integer_parse() {
        assert_eq!(parse_i64_prefix("11"), 11);
        assert_eq!(parse_i64_prefix("-42"), -42);
        assert_eq!(parse_i64_prefix("12abc"), 12);
        assert_eq!(parse_i64_prefix("1.9"), 1);
        assert_eq!(parse_i64_prefix("abc"), 0);
        assert_eq!(parse_i64_prefix(""), 0);
        assert_eq!(parse_i64_prefix("-"), 0);
    }

    #[test]
    fn lenient_double_parse() {
        assert_eq!(parse_f64_prefix("1.23"), 1.23);
        assert_eq!(parse_f64_prefix("-0.5"), -0.5);
        assert_eq!(parse_f64_prefix("2e3"), 2000.0);
        assert_eq!(parse_f64_prefix("1.2.3"), 1.2);
        assert_eq!(parse_f64_prefix("1e"), 1.0);
        assert_eq!(parse_f64_prefix("true"), 0.0);
        assert_eq!(parse_f64_prefix(""), 0.0);
    }
}
