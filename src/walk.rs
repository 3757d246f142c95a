//! Subtree boundary resolution and child enumeration.
//!
//! The token stream encodes the document tree implicitly: tokens sit in
//! depth-first pre-order and a composite's subtree is the contiguous index
//! range right after it. [`last_index_of`] turns that encoding into the one
//! primitive everything else needs - the index of the last token in a
//! subtree - so nested values can be skipped without inspecting them.
//! [`root_object_indices`] and [`root_array_indices`] use it to enumerate the
//! immediate children of a composite.
//!
//! A `size` field that promises more children than the stream holds is a
//! broken tokenizer contract; every cursor advance is bounds checked and
//! reported as [`Error::IndexInvalid`] rather than trusted.

#[cfg(not(test))]
use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::token::{Token, TokenKind};

/// Index of the last token belonging to the subtree rooted at `i`.
///
/// `i` must designate an `Object` or `Array` token; anything else is
/// [`Error::IndexInvalid`]. An empty composite is its own last token.
pub fn last_index_of(tokens: &[Token], i: usize) -> Result<usize> {
    match tokens.get(i).ok_or(Error::IndexInvalid)?.kind {
        TokenKind::Object => last_object_index(tokens, i),
        TokenKind::Array => last_array_index(tokens, i),
        _ => Err(Error::IndexInvalid),
    }
}

/// Object walk: keys and values alternate, and only values recurse.
fn last_object_index(tokens: &[Token], start: usize) -> Result<usize> {
    let mut remaining = tokens[start].size;
    let mut cursor = start;
    while remaining > 0 {
        // Key token: always a String with size 1, never a subtree root.
        cursor += 1;
        tokens.get(cursor).ok_or(Error::IndexInvalid)?;
        remaining -= 1;

        // Value token: skip its whole subtree when composite.
        cursor += 1;
        let value = tokens.get(cursor).ok_or(Error::IndexInvalid)?;
        if value.kind.is_composite() {
            cursor = last_index_of(tokens, cursor)?;
        }
    }
    Ok(cursor)
}

/// Array walk: every child is an element, composites are skipped whole.
fn last_array_index(tokens: &[Token], start: usize) -> Result<usize> {
    let mut remaining = tokens[start].size;
    let mut cursor = start;
    while remaining > 0 {
        cursor += 1;
        let element = tokens.get(cursor).ok_or(Error::IndexInvalid)?;
        remaining -= 1;
        if element.size > 0 {
            // Only composites may own descendants.
            if !element.kind.is_composite() {
                return Err(Error::Invalid);
            }
            cursor = last_index_of(tokens, cursor)?;
        }
    }
    Ok(cursor)
}

/// Indices of the key tokens directly contained in the object at `i`, in
/// declaration order.
///
/// The result length always equals `tokens[i].size`. Values are skipped via
/// [`last_index_of`]; the returned `Vec` is freshly owned by the caller.
pub fn root_object_indices(tokens: &[Token], i: usize) -> Result<Vec<usize>> {
    let root = tokens.get(i).ok_or(Error::IndexInvalid)?;
    if root.kind != TokenKind::Object {
        return Err(Error::IndexInvalid);
    }

    let mut indices = Vec::with_capacity(root.size);
    let mut remaining = root.size;
    let mut cursor = i;
    while remaining > 0 {
        cursor += 1;
        tokens.get(cursor).ok_or(Error::IndexInvalid)?;
        indices.push(cursor);
        remaining -= 1;

        cursor += 1;
        let value = tokens.get(cursor).ok_or(Error::IndexInvalid)?;
        if value.kind.is_composite() {
            cursor = last_index_of(tokens, cursor)?;
        }
    }

    debug_assert_eq!(indices.len(), root.size);
    Ok(indices)
}

/// Indices of the element tokens directly contained in the array at `i`, in
/// document order.
///
/// The result length always equals `tokens[i].size`.
pub fn root_array_indices(tokens: &[Token], i: usize) -> Result<Vec<usize>> {
    let root = tokens.get(i).ok_or(Error::IndexInvalid)?;
    if root.kind != TokenKind::Array {
        return Err(Error::IndexInvalid);
    }

    let mut indices = Vec::with_capacity(root.size);
    let mut remaining = root.size;
    let mut cursor = i;
    while remaining > 0 {
        cursor += 1;
        let element = tokens.get(cursor).ok_or(Error::IndexInvalid)?;
        indices.push(cursor);
        remaining -= 1;
        if element.kind.is_composite() && element.size > 0 {
            cursor = last_index_of(tokens, cursor)?;
        }
    }

    debug_assert_eq!(indices.len(), root.size);
    Ok(indices)
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
    fn root_subtree_ends_at_final_token() {
        let tokens = tokenize(DOC).unwrap();
        assert_eq!(last_index_of(&tokens, 0).unwrap(), tokens.len() - 1);
    }

    #[test]
    fn nested_object_boundary() {
        let tokens = tokenize(DOC).unwrap();
        // "sub" object spans tokens 6..=10 (index, 23, title, blah).
        assert_eq!(last_index_of(&tokens, 6).unwrap(), 10);
        // "array" spans tokens 12..=15.
        assert_eq!(last_index_of(&tokens, 12).unwrap(), 15);
    }

    #[test]
    fn empty_composites_are_their_own_boundary() {
        let tokens = tokenize(r#"{"o":{},"a":[]}"#).unwrap();
        assert_eq!(last_index_of(&tokens, 2).unwrap(), 2);
        assert_eq!(last_index_of(&tokens, 4).unwrap(), 4);
    }

    #[test]
    fn non_composite_start_is_index_invalid() {
        let tokens = tokenize(DOC).unwrap();
        assert_eq!(last_index_of(&tokens, 1), Err(Error::IndexInvalid));
        assert_eq!(last_index_of(&tokens, 2), Err(Error::IndexInvalid));
        assert_eq!(last_index_of(&tokens, 999), Err(Error::IndexInvalid));
    }

    #[test]
    fn truncated_stream_is_rejected_not_trusted() {
        let mut tokens = tokenize(DOC).unwrap();
        tokens.truncate(4);
        assert_eq!(last_index_of(&tokens, 0), Err(Error::IndexInvalid));
    }

    #[test]
    fn oversized_leaf_in_array_is_invalid() {
        let mut tokens = tokenize("[1,2]").unwrap();
        tokens[1].size = 1;
        assert_eq!(last_index_of(&tokens, 0), Err(Error::Invalid));
    }

    #[test]
    fn object_children_in_declaration_order() {
        let tokens = tokenize(DOC).unwrap();
        let keys = root_object_indices(&tokens, 0).unwrap();
        assert_eq!(keys, vec![1, 3, 5, 11, 16, 18, 20]);
        assert_eq!(keys.len(), tokens[0].size);
    }

    #[test]
    fn nested_object_children() {
        let tokens = tokenize(DOC).unwrap();
        let keys = root_object_indices(&tokens, 6).unwrap();
        assert_eq!(keys, vec![7, 9]);
    }

    #[test]
    fn array_children() {
        let tokens = tokenize(DOC).unwrap();
        let elements = root_array_indices(&tokens, 12).unwrap();
        assert_eq!(elements, vec![13, 14, 15]);
        assert_eq!(elements.len(), tokens[12].size);
    }

    #[test]
    fn array_of_composites_skips_whole_subtrees() {
        let tokens = tokenize(r#"[{"a":1},[2,3],4]"#).unwrap();
        let elements = root_array_indices(&tokens, 0).unwrap();
        assert_eq!(elements, vec![1, 4, 7]);
    }

    #[test]
    fn enumerator_rejects_wrong_root_kind() {
        let tokens = tokenize(DOC).unwrap();
        assert_eq!(root_object_indices(&tokens, 12), Err(Error::IndexInvalid));
        assert_eq!(root_array_indices(&tokens, 0), Err(Error::IndexInvalid));
        assert_eq!(root_object_indices(&tokens, 999), Err(Error::IndexInvalid));
    }

    #[test]
    fn empty_composites_enumerate_to_nothing() {
        let tokens = tokenize(r#"{"o":{},"a":[]}"#).unwrap();
        assert!(root_object_indices(&tokens, 2).unwrap().is_empty());
        assert!(root_array_indices(&tokens, 4).unwrap().is_empty());
    }
}
