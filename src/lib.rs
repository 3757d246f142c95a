//! # Tokenpath
//!
//! Read-only navigation over an already-tokenized JSON document.
//!
//! A JSON text is tokenized once into a flat, depth-first token stream. This
//! crate then resolves dotted key paths (`"sub.title"`) or raw token indices
//! against that stream without ever materializing a tree: subtrees are skipped
//! by index arithmetic, and extracted strings are borrowed slices of the
//! original text.
//!
//! ## Quick Start
//!
//! ```
//! use tokenpath::JsonReader;
//!
//! let json = r#"{"name":"Alice","stats":{"age":30}}"#;
//! let reader = JsonReader::new(json).unwrap();
//!
//! assert_eq!(reader.str_value("name").unwrap(), "Alice");
//! assert_eq!(reader.i64_value("stats.age").unwrap(), 30);
//! ```
//!
//! ## Layers
//!
//! - [`token`]: the tokenizer collaborator ([`tokenize`], [`Token`]). The
//!   navigation layers never re-tokenize; they only walk the token slice.
//! - [`walk`]: subtree boundary resolution ([`last_index_of`]) and child
//!   enumeration ([`root_object_indices`], [`root_array_indices`]).
//! - [`path`]: dotted key-path resolution ([`key_index`], [`root_key_index`]).
//! - [`value`]: typed extraction of string/integer/double/boolean values.
//! - [`reader`]: [`JsonReader`], a convenience handle bundling one text buffer
//!   with its token stream.
//!
//! ## Features
//!
//! - `std` (default) - std error trait integration; disable for no_std + alloc
//! - `cli` - builds the `tokenpath` command-line tool

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

mod error;
pub mod path;
pub mod reader;
pub mod token;
pub mod value;
pub mod walk;

pub use error::{Error, Result};
pub use path::{key_index, root_key_index};
pub use reader::JsonReader;
pub use token::{token_count, tokenize, Token, TokenKind};
pub use value::{
    get_index_bool, get_index_f64, get_index_i64, get_index_str, get_value_bool, get_value_f64,
    get_value_i64, get_value_str,
};
pub use walk::{last_index_of, root_array_indices, root_object_indices};
