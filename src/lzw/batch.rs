//! Runs independent encode or decode calls in parallel.
//!
//! The seed is only read, so it is shared across workers. Every call still
//! grows its own dictionary; nothing mutable crosses a thread boundary.

use rayon::prelude::*;

use super::{decode, encode, Code, SeedDictionary, Symbol};
use crate::error::Result;

/// Encodes every input against the same seed.
///
/// Results keep the order of `inputs`. If several inputs fail, the error of
/// the first one in input order is returned.
pub fn encode_all<S>(inputs: &[Vec<S>], seed: &SeedDictionary<S>) -> Result<Vec<Vec<Code>>>
where
    S: Symbol + Send + Sync,
{
    inputs
        .par_iter()
        .map(|input| encode(input.as_slice(), seed).map(|(codes, _)| codes))
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

/// Decodes every code stream against the same seed.
pub fn decode_all<S>(streams: &[Vec<Code>], seed: &SeedDictionary<S>) -> Result<Vec<Vec<S>>>
where
    S: Symbol + Send + Sync,
{
    streams
        .par_iter()
        .map(|codes| decode(codes.as_slice(), seed).map(|(symbols, _)| symbols))
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}
