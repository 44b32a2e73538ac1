//! Lempel–Ziv–Welch coding over an adaptive dictionary.
//!
//! The pipeline has three stages:
//! - [`build_seed_dictionary`] assigns each distinct symbol a code in order of
//!   first appearance.
//! - [`encode`] greedily extends a working prefix, learning every
//!   prefix-plus-next-symbol it fails to match and emitting the code of the
//!   longest known prefix.
//! - [`decode`] rebuilds the same dictionary from the code stream alone, one
//!   step behind the encoder.
//!
//! Codes are plain integers with no fixed width. Packing them into bytes is left
//! to the caller.
//!
//! # Examples
//!
//! ```rust
//! use lzw_core::lzw::{build_seed_dictionary, decode, encode};
//!
//! let input: Vec<char> = "ABABABA".chars().collect();
//! let seed = build_seed_dictionary(&input);
//! let (codes, _) = encode(&input, &seed).unwrap();
//! assert_eq!(codes, vec![0, 1, 2, 4]);
//!
//! let (decoded, _) = decode(&codes, &seed).unwrap();
//! assert_eq!(decoded, input);
//! ```

use std::hash::Hash;

use crate::error::Result;

pub mod alphabet;
pub mod batch;
pub mod decoder;
pub mod dictionary;
pub mod encoder;

pub use alphabet::{build_seed_dictionary, SeedDictionary};
pub use batch::{decode_all, encode_all};
pub use decoder::decode;
pub use dictionary::{DecodeDictionary, EncodeDictionary};
pub use encoder::encode;

/// Identifier of a dictionary entry. Codes are dense and start at 0.
pub type Code = usize;

/// An atomic unit of an input sequence.
///
/// Anything that can be compared and hashed works: `char`, `u8`, palette
/// indices, tokens.
pub trait Symbol: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Symbol for T {}

/// Encodes `text` char by char with a seed built from the text itself.
///
/// Returns the codes together with the seed, which the decoder needs.
///
/// # Example
///
/// ```
/// use lzw_core::lzw::{compress_str, decompress_str};
///
/// let (codes, seed) = compress_str("HELLO WORLD").unwrap();
/// assert_eq!(decompress_str(&codes, &seed).unwrap(), "HELLO WORLD");
/// ```
pub fn compress_str(text: &str) -> Result<(Vec<Code>, SeedDictionary<char>)> {
    let symbols: Vec<char> = text.chars().collect();
    let seed = build_seed_dictionary(&symbols);
    let (codes, _) = encode(&symbols, &seed)?;
    Ok((codes, seed))
}

/// Decodes a code stream produced by [`compress_str`] back into a `String`.
pub fn decompress_str(codes: &[Code], seed: &SeedDictionary<char>) -> Result<String> {
    let (symbols, _) = decode(codes, seed)?;
    Ok(symbols.into_iter().collect())
}
