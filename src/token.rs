//! Tokenizer collaborator - JSON text to a flat depth-first token stream.
//!
//! This is the one layer that reads JSON syntax. Everything above it only
//! walks the produced [`Token`] slice by index, so the stream format is the
//! real contract here:
//!
//! - Tokens appear in document (depth-first, pre-order) position; a composite
//!   token's subtree occupies a contiguous index range immediately after it.
//! - `size` is the direct child count. An object counts its keys (not
//!   key/value pairs), an array counts its elements, and an object key is a
//!   `String` token with `size == 1` whose value token immediately follows.
//! - Byte ranges index the original text; string ranges exclude the quotes.
//!
//! Tokenizing does not validate full JSON grammar. Unbalanced brackets,
//! unterminated strings, and bytes that cannot start a value are rejected
//! with [`Error::Invalid`]; beyond that the input is trusted.

#[cfg(not(test))]
use alloc::vec::Vec;

use crate::error::{Error, Result};

/// Semantic kind of one token in the stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenKind {
    /// Placeholder kind; never produced by a successful tokenize pass.
    #[default]
    Undefined,
    /// `{ ... }` - owns `size` keys.
    Object,
    /// `[ ... ]` - owns `size` elements.
    Array,
    /// Quoted string; a key when `size == 1`, a value when `size == 0`.
    String,
    /// Unquoted literal run: number, `true`, `false`, or `null`.
    Primitive,
}

impl TokenKind {
    /// Composite tokens are the only ones that may own descendants.
    #[inline]
    pub fn is_composite(&self) -> bool {
        matches!(self, TokenKind::Object | TokenKind::Array)
    }
}

/// One syntactic unit of a JSON document.
///
/// `start..end` is a byte range into the source text. `size` is the direct
/// child count as described in the [module docs](self).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub size: usize,
}

impl Token {
    /// Length of the token's byte range.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the byte range is empty (e.g. the `""` key).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

// End offset of a still-open composite while the pass is running. Any token
// left carrying it at the end of input means an unclosed bracket.
const OPEN: usize = usize::MAX;

/// Tokenize `text` and return the number of tokens it contains.
///
/// The counting mode of the tokenizer interface; empty text counts zero.
pub fn token_count(text: &str) -> Result<usize> {
    tokenize(text).map(|tokens| tokens.len())
}

/// Tokenize `text` into a flat depth-first token stream.
///
/// Empty text produces an empty stream. Returns [`Error::Invalid`] for
/// unbalanced brackets, unterminated strings, bad escapes, or a byte that
/// cannot start a value.
pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    let bytes = text.as_bytes();
    let mut tokens: Vec<Token> = Vec::new();
    // Parent token index per token, used to reattach the cursor when a
    // container or key scope closes.
    let mut parents: Vec<Option<usize>> = Vec::new();
    // Token that newly produced tokens attach to as children.
    let mut owner: Option<usize> = None;

    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'{' | b'[' => {
                let kind = if bytes[i] == b'{' {
                    TokenKind::Object
                } else {
                    TokenKind::Array
                };
                if let Some(o) = owner {
                    tokens[o].size += 1;
                }
                tokens.push(Token {
                    kind,
                    start: i,
                    end: OPEN,
                    size: 0,
                });
                parents.push(owner);
                owner = Some(tokens.len() - 1);
                i += 1;
            }
            b'}' | b']' => {
                let kind = if bytes[i] == b'}' {
                    TokenKind::Object
                } else {
                    TokenKind::Array
                };
                let open = innermost_open(&tokens).ok_or(Error::Invalid)?;
                if tokens[open].kind != kind {
                    return Err(Error::Invalid);
                }
                tokens[open].end = i + 1;
                owner = parents[open];
                i += 1;
            }
            b'"' => {
                let end = string_end(bytes, i)?;
                if let Some(o) = owner {
                    tokens[o].size += 1;
                }
                tokens.push(Token {
                    kind: TokenKind::String,
                    start: i + 1,
                    end,
                    size: 0,
                });
                parents.push(owner);
                i = end + 1;
            }
            b':' => {
                // The token just produced is an object key; its value attaches
                // to it, giving the key size 1.
                owner = Some(tokens.len().checked_sub(1).ok_or(Error::Invalid)?);
                i += 1;
            }
            b',' => {
                // Leaving a key scope: reattach to the enclosing container.
                if let Some(o) = owner {
                    if !tokens[o].kind.is_composite() {
                        owner = parents[o];
                    }
                }
                i += 1;
            }
            b' ' | b'\t' | b'\n' | b'\r' => i += 1,
            b'-' | b'0'..=b'9' | b't' | b'f' | b'n' => {
                let end = primitive_end(bytes, i);
                if let Some(o) = owner {
                    tokens[o].size += 1;
                }
                tokens.push(Token {
                    kind: TokenKind::Primitive,
                    start: i,
                    end,
                    size: 0,
                });
                parents.push(owner);
                i = end;
            }
            _ => return Err(Error::Invalid),
        }
    }

    if tokens.iter().any(|t| t.end == OPEN) {
        return Err(Error::Invalid);
    }
    Ok(tokens)
}

/// Index of the innermost composite token still waiting for its close bracket.
fn innermost_open(tokens: &[Token]) -> Option<usize> {
    tokens.iter().rposition(|t| t.end == OPEN)
}

/// Byte offset of the closing quote for the string opening at `quote`.
fn string_end(bytes: &[u8], quote: usize) -> Result<usize> {
    let mut i = quote + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => return Ok(i),
            b'\\' => {
                let next = *bytes.get(i + 1).ok_or(Error::Invalid)?;
                match next {
                    b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => i += 2,
                    b'u' => {
                        let hex = bytes.get(i + 2..i + 6).ok_or(Error::Invalid)?;
                        if !hex.iter().all(u8::is_ascii_hexdigit) {
                            return Err(Error::Invalid);
                        }
                        i += 6;
                    }
                    _ => return Err(Error::Invalid),
                }
            }
            _ => i += 1,
        }
    }
    Err(Error::Invalid)
}

/// One-past-the-end offset of the primitive literal starting at `start`.
fn primitive_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b' ' | b'\t' | b'\n' | b'\r' | b',' | b']' | b'}' | b':' => break,
            _ => i += 1,
        }
    }
    i
}
