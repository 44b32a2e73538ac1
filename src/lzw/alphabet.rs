//! Seed dictionaries: the initial symbol ↔ code bijection both sides start from.

use std::collections::HashMap;

use super::{Code, Symbol};

/// A bijection between the distinct symbols of a sequence and the codes
/// `0..len`, assigned in order of first appearance.
///
/// Both directions are indexed: symbol → code through a hash map, and
/// code → symbol through a dense vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDictionary<S: Symbol> {
    codes: HashMap<S, Code>,
    symbols: Vec<S>,
}

impl<S: Symbol> Default for SeedDictionary<S> {
    fn default() -> Self {
        Self {
            codes: HashMap::new(),
            symbols: Vec::new(),
        }
    }
}

impl<S: Symbol> SeedDictionary<S> {
    /// Creates an empty seed dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the seed dictionary for `input` in a single left-to-right scan.
    pub fn build(input: &[S]) -> Self {
        input.iter().cloned().collect()
    }

    /// Registers `symbol` and returns its code. A symbol already present keeps
    /// the code it was first given.
    pub fn insert(&mut self, symbol: S) -> Code {
        if let Some(&code) = self.codes.get(&symbol) {
            return code;
        }
        let code = self.symbols.len();
        self.codes.insert(symbol.clone(), code);
        self.symbols.push(symbol);
        code
    }

    /// Returns the code assigned to `symbol`.
    pub fn code(&self, symbol: &S) -> Option<Code> {
        self.codes.get(symbol).copied()
    }

    /// Returns the symbol assigned to `code`.
    pub fn symbol(&self, code: Code) -> Option<&S> {
        self.symbols.get(code)
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.codes.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in code order.
    pub fn symbols(&self) -> &[S] {
        &self.symbols
    }

    /// Iterates over `(code, symbol)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (Code, &S)> {
        self.symbols.iter().enumerate()
    }
}

impl<S: Symbol> FromIterator<S> for SeedDictionary<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut seed = Self::new();
        for symbol in iter {
            seed.insert(symbol);
        }
        seed
    }
}

/// Assigns each distinct symbol in `input` the next unused code, in order of
/// first appearance.
///
/// # Example
///
/// ```
/// use lzw_core::lzw::build_seed_dictionary;
///
/// let input: Vec<char> = "ABABABA".chars().collect();
/// let seed = build_seed_dictionary(&input);
/// assert_eq!(seed.code(&'A'), Some(0));
/// assert_eq!(seed.code(&'B'), Some(1));
/// assert_eq!(seed.len(), 2);
/// ```
pub fn build_seed_dictionary<S: Symbol>(input: &[S]) -> SeedDictionary<S> {
    SeedDictionary::build(input)
}
