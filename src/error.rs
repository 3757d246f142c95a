//! Error taxonomy for token navigation and value extraction.
//!
//! Every fallible operation in this crate returns [`Result`]. Missing keys and
//! wrong token kinds are ordinary, recoverable outcomes reported through
//! [`Error`]; nothing in the navigation layers panics on a miss.

use core::fmt;

/// Errors reported by the navigation and extraction layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Malformed input: unbalanced or truncated JSON text, or a token whose
    /// `size` claims descendants it cannot own.
    Invalid,
    /// Allocation failure while building a result collection.
    ///
    /// Retained for the diagnostic surface; collection allocation in Rust
    /// aborts rather than reporting, so no operation here returns it.
    Memory,
    /// A key segment, or the whole dotted path, could not be resolved.
    KeyInvalid,
    /// A start token is not the composite kind the operation requires, or a
    /// token index is out of range for the stream.
    IndexInvalid,
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Stable human-readable description, for diagnostics only.
    pub fn description(&self) -> &'static str {
        match self {
            Error::Invalid => "malformed input",
            Error::Memory => "allocation failure",
            Error::KeyInvalid => "key or key path not found",
            Error::IndexInvalid => "token index invalid for this operation",
        }
    }

    /// Small negative code for callers porting from a signed-code surface.
    ///
    /// Zero is reserved for success and never returned.
    pub fn code(&self) -> i32 {
        match self {
            Error::Invalid => -1,
            Error::Memory => -2,
            Error::KeyInvalid => -3,
            Error::IndexInvalid => -4,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
