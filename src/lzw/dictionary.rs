//! The dictionaries grown during a single encode or decode pass.
//!
//! Each pass owns its dictionary outright. The encoder's maps sequences to
//! codes, the decoder's maps codes back to sequences, and after the same
//! number of steps both hold the same entries.

use std::collections::HashMap;

use super::{Code, SeedDictionary, Symbol};

/// Sequence → code mapping grown by the encoder.
#[derive(Debug, Clone)]
pub struct EncodeDictionary<S: Symbol> {
    entries: HashMap<Vec<S>, Code>,
    next_code: Code,
}

impl<S: Symbol> EncodeDictionary<S> {
    /// Starts from `seed`, each symbol as a length-1 sequence under its seed code.
    pub fn from_seed(seed: &SeedDictionary<S>) -> Self {
        let mut entries = HashMap::with_capacity(seed.len());
        for (code, symbol) in seed.iter() {
            entries.insert(vec![symbol.clone()], code);
        }
        Self {
            entries,
            next_code: seed.len(),
        }
    }

    /// Stores `sequence` under the next unused code and returns that code.
    pub(crate) fn insert(&mut self, sequence: Vec<S>) -> Code {
        let code = self.next_code;
        self.entries.insert(sequence, code);
        self.next_code += 1;
        code
    }

    pub fn code(&self, sequence: &[S]) -> Option<Code> {
        self.entries.get(sequence).copied()
    }

    pub fn contains(&self, sequence: &[S]) -> bool {
        self.entries.contains_key(sequence)
    }

    /// The code the next learned sequence will receive.
    pub fn next_code(&self) -> Code {
        self.next_code
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(sequence, code)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&[S], Code)> {
        self.entries.iter().map(|(seq, &code)| (seq.as_slice(), code))
    }

    /// Returns true when `other` holds exactly the same code → sequence
    /// entries as this dictionary.
    pub fn mirrors(&self, other: &DecodeDictionary<S>) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(seq, code)| other.sequence(code) == Some(seq))
    }
}

/// Code → sequence mapping grown by the decoder.
///
/// Codes are dense, so entries live in a vector indexed by code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeDictionary<S: Symbol> {
    entries: Vec<Vec<S>>,
}

impl<S: Symbol> DecodeDictionary<S> {
    /// Inverts `seed`: one length-1 entry per seed symbol.
    pub fn from_seed(seed: &SeedDictionary<S>) -> Self {
        Self {
            entries: seed.symbols().iter().map(|s| vec![s.clone()]).collect(),
        }
    }

    /// Stores `sequence` under the next unused code and returns that code.
    pub(crate) fn insert(&mut self, sequence: Vec<S>) -> Code {
        self.entries.push(sequence);
        self.entries.len() - 1
    }

    pub fn sequence(&self, code: Code) -> Option<&[S]> {
        self.entries.get(code).map(Vec::as_slice)
    }

    pub fn next_code(&self) -> Code {
        self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(code, sequence)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (Code, &[S])> {
        self.entries
            .iter()
            .enumerate()
            .map(|(code, seq)| (code, seq.as_slice()))
    }
}
