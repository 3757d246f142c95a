//! Convenience handle bundling one text buffer with its token stream.

#[cfg(not(test))]
use alloc::vec::Vec;

use crate::error::Result;
use crate::token::{tokenize, Token};
use crate::{path, value, walk};

/// A tokenized JSON document ready for navigation.
///
/// Borrows the caller's text for its whole lifetime; every `str` the reader
/// hands out is a slice of that same buffer. The token stream is built once
/// in [`JsonReader::new`] and never mutated, so repeated lookups with the
/// same arguments always agree.
///
/// ```
/// use tokenpath::JsonReader;
///
/// let json = r#"{"sub":{"title":"blah"},"n":7}"#;
/// let reader = JsonReader::new(json).unwrap();
/// assert_eq!(reader.str_value("sub.title").unwrap(), "blah");
/// assert_eq!(reader.i64_value("n").unwrap(), 7);
/// ```
#[derive(Clone, Debug)]
pub struct JsonReader<'a> {
    text: &'a str,
    tokens: Vec<Token>,
}

impl<'a> JsonReader<'a> {
    /// Tokenize `text` and wrap the result for navigation.
    pub fn new(text: &'a str) -> Result<Self> {
        Ok(Self {
            tokens: tokenize(text)?,
            text,
        })
    }

    /// The source text this reader borrows.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The token stream, for callers that walk indices themselves.
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    // ------------------------------------------------------------------
    // Typed getters, rooted at the document root
    // ------------------------------------------------------------------

    /// Raw value bytes for a dotted path (no type validation).
    pub fn str_value(&self, path: &str) -> Result<&'a str> {
        self.str_value_from(0, path)
    }

    /// Integer value for a dotted path (lenient parse).
    pub fn i64_value(&self, path: &str) -> Result<i64> {
        self.i64_value_from(0, path)
    }

    /// Double value for a dotted path (lenient parse).
    pub fn f64_value(&self, path: &str) -> Result<f64> {
        self.f64_value_from(0, path)
    }

    /// Boolean value for a dotted path.
    pub fn bool_value(&self, path: &str) -> Result<bool> {
        self.bool_value_from(0, path)
    }

    // ------------------------------------------------------------------
    // Typed getters, rooted at an arbitrary object token
    // ------------------------------------------------------------------

    /// [`Self::str_value`] starting at the object token `start`.
    pub fn str_value_from(&self, start: usize, path: &str) -> Result<&'a str> {
        value::get_value_str(&self.tokens, start, path, self.text)
    }

    /// [`Self::i64_value`] starting at the object token `start`.
    pub fn i64_value_from(&self, start: usize, path: &str) -> Result<i64> {
        value::get_value_i64(&self.tokens, start, path, self.text)
    }

    /// [`Self::f64_value`] starting at the object token `start`.
    pub fn f64_value_from(&self, start: usize, path: &str) -> Result<f64> {
        value::get_value_f64(&self.tokens, start, path, self.text)
    }

    /// [`Self::bool_value`] starting at the object token `start`.
    pub fn bool_value_from(&self, start: usize, path: &str) -> Result<bool> {
        value::get_value_bool(&self.tokens, start, path, self.text)
    }

    // ------------------------------------------------------------------
    // Index-based decoding
    // ------------------------------------------------------------------

    /// Raw bytes of the token at `index`.
    pub fn str_at(&self, index: usize) -> Result<&'a str> {
        value::get_index_str(&self.tokens, index, self.text)
    }

    /// Integer decode of the token at `index`.
    pub fn i64_at(&self, index: usize) -> Result<i64> {
        value::get_index_i64(&self.tokens, index, self.text)
    }

    /// Double decode of the token at `index`.
    pub fn f64_at(&self, index: usize) -> Result<f64> {
        value::get_index_f64(&self.tokens, index, self.text)
    }

    /// Boolean decode of the token at `index`.
    pub fn bool_at(&self, index: usize) -> Result<bool> {
        value::get_index_bool(&self.tokens, index, self.text)
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Key token index for a dotted path, starting at the object `start`.
    pub fn key_index(&self, start: usize, path: &str) -> Result<usize> {
        path::key_index(&self.tokens, start, path, self.text)
    }

    /// Key token indices directly inside the object at `start`.
    pub fn object_indices(&self, start: usize) -> Result<Vec<usize>> {
        walk::root_object_indices(&self.tokens, start)
    }

    /// Element token indices directly inside the array at `start`.
    pub fn array_indices(&self, start: usize) -> Result<Vec<usize>> {
        walk::root_array_indices(&self.tokens, start)
    }

    /// Last token index of the subtree rooted at `start`.
    pub fn last_index_of(&self, start: usize) -> Result<usize> {
        walk::last_index_of(&self.tokens, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn reader_delegates_to_the_free_functions() {
        let json = r#"{"a":{"b":true},"n":[10,20]}"#;
        let reader = JsonReader::new(json).unwrap();

        assert!(reader.bool_value("a.b").unwrap());
        let elements = reader.array_indices(reader.key_index(0, "n").unwrap() + 1).unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(reader.i64_at(elements[1]).unwrap(), 20);
    }

    #[test]
    fn malformed_text_fails_at_construction() {
        assert_eq!(JsonReader::new(r#"{"a":"#).unwrap_err(), Error::Invalid);
    }

    #[test]
    fn repeated_lookups_are_identical() {
        let json = r#"{"k":"v"}"#;
        let reader = JsonReader::new(json).unwrap();
        assert_eq!(reader.str_value("k"), reader.str_value("k"));
        assert_eq!(reader.tokens().to_vec(), reader.tokens().to_vec());
    }
}
