//! Error types shared by every part of the crate.
//!
//! All failures are precondition or consistency violations detected at the
//! point of lookup. They are deterministic, so none of them are retryable.

use thiserror::Error;

use crate::lzw::Code;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The seed dictionary has no code for a symbol the encoder had to look up.
    #[error("seed dictionary does not cover the symbol at input position {position}")]
    InvalidSeed { position: usize },

    /// `decode` was called with no codes at all.
    #[error("cannot decode an empty code sequence")]
    EmptyCodeSequence,

    /// A code is neither in the decode dictionary nor the entry the encoder
    /// could have created one step earlier.
    #[error("unresolvable code {code} at position {position} (next code is {next_code})")]
    UnresolvableCode {
        position: usize,
        code: Code,
        next_code: Code,
    },

    #[error("image uses more than {limit} distinct colors")]
    TooManyColors { limit: usize },

    #[error("pixel buffer length {len} is not a multiple of 4 (RGBA)")]
    MalformedPixels { len: usize },
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, Error>;
