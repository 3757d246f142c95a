//! Dotted key-path resolution against the token stream.
//!
//! A path like `"sub.title"` is split on `.` and resolved one object level
//! per segment: each segment is matched byte-exact against the keys of the
//! current object (via [`root_object_indices`]), and the cursor then descends
//! into the matched key's value token. The result is always the index of the
//! final *key* token, never its value.
//!
//! Two-segment paths are the supported depth. The split length for a segment
//! resumed at a nonzero offset is measured from the start of the whole path,
//! so any segment after the first swallows the remainder, dots included; a
//! third segment therefore never splits off and such lookups miss unless a
//! key literally contains the dotted remainder.

use crate::error::{Error, Result};
use crate::token::{Token, TokenKind};
use crate::walk::root_object_indices;

/// Index of the first key token in the object at `start` whose decoded
/// content equals `segment`.
///
/// Matching is byte-exact on the raw key range; no unescaping is performed.
/// Duplicate keys resolve to the first match in declaration order, which is
/// observable behavior but not a guarantee. A missing key is
/// [`Error::KeyInvalid`]; a `start` that is not an object is
/// [`Error::IndexInvalid`].
pub fn root_key_index(tokens: &[Token], start: usize, segment: &str, text: &str) -> Result<usize> {
    let indices = root_object_indices(tokens, start)?;
    indices
        .into_iter()
        .find(|&i| key_matches(&tokens[i], segment, text))
        .ok_or(Error::KeyInvalid)
}

/// Index of the key token identified by the dotted `path`, starting at the
/// object token `start` (`0` for the document root).
///
/// Every segment except the last must name a key whose value is the next
/// object to descend into. Any failure along the way, including an empty
/// path, is [`Error::KeyInvalid`].
pub fn key_index(tokens: &[Token], start: usize, path: &str, text: &str) -> Result<usize> {
    if path.is_empty() {
        return Err(Error::KeyInvalid);
    }

    let mut cursor = start;
    let mut offset = 0;
    loop {
        let segment = segment_at(path, offset).ok_or(Error::KeyInvalid)?;
        offset += segment.len() + 1;
        cursor = root_key_index(tokens, cursor, segment, text).map_err(|_| Error::KeyInvalid)?;
        if offset >= path.len() {
            return Ok(cursor);
        }
        // Not the final segment: descend to the value token, which must be
        // the next segment's object root.
        cursor += 1;
    }
}

/// Extract the path segment beginning at `offset`.
///
/// With no delimiter ahead the rest of the path is the segment. Otherwise the
/// split length is `dot + 2 * offset` capped to the remainder - correct at
/// offset zero, overshooting for later segments (see module docs).
fn segment_at(path: &str, offset: usize) -> Option<&str> {
    let rest = path.get(offset..)?;
    match rest.find('.') {
        Some(dot) => {
            let len = (dot + 2 * offset).min(rest.len());
            rest.get(..len)
        }
        None => Some(rest),
    }
}

/// Byte-exact comparison of a key token's range against `segment`.
fn key_matches(token: &Token, segment: &str, text: &str) -> bool {
    token.kind == TokenKind::String
        && token.len() == segment.len()
        && text.as_bytes().get(token.start..token.end) == Some(segment.as_bytes())
}
