use log::{debug, trace};

use super::{Code, EncodeDictionary, SeedDictionary, Symbol};
use crate::error::{Error, Result};

/// Greedy longest-match state over one input sequence.
///
/// `prefix` is the working match `W`; `prefix_code` is its code, which is
/// `None` only before the first symbol has been read.
struct Encoder<'a, S: Symbol> {
    seed: &'a SeedDictionary<S>,
    dictionary: EncodeDictionary<S>,
    prefix: Vec<S>,
    prefix_code: Option<Code>,
    codes: Vec<Code>,
}

impl<'a, S: Symbol> Encoder<'a, S> {
    fn new(seed: &'a SeedDictionary<S>) -> Self {
        Self {
            seed,
            dictionary: EncodeDictionary::from_seed(seed),
            prefix: Vec::new(),
            prefix_code: None,
            codes: Vec::new(),
        }
    }

    fn push(&mut self, position: usize, symbol: &S) -> Result<()> {
        let symbol_code = self
            .seed
            .code(symbol)
            .ok_or(Error::InvalidSeed { position })?;

        self.prefix.push(symbol.clone());
        if let Some(code) = self.dictionary.code(&self.prefix) {
            self.prefix_code = Some(code);
            return Ok(());
        }

        // A single seeded symbol always matches, so the prefix before this
        // symbol was non-empty and has a code.
        if let Some(code) = self.prefix_code.replace(symbol_code) {
            self.codes.push(code);
        }
        let learned = std::mem::replace(&mut self.prefix, vec![symbol.clone()]);
        let new_code = self.dictionary.insert(learned);
        trace!("lzw encode: position {position}, learned code {new_code}");
        Ok(())
    }

    fn finish(mut self) -> (Vec<Code>, EncodeDictionary<S>) {
        if let Some(code) = self.prefix_code.take() {
            self.codes.push(code);
        }
        (self.codes, self.dictionary)
    }
}

/// Encodes `input` into LZW codes, starting from `seed`.
///
/// # Returns
///
/// The emitted codes and the dictionary as it stood when encoding finished.
/// An empty input yields no codes.
///
/// # Errors
///
/// [`Error::InvalidSeed`] if `input` contains a symbol the seed has no code
/// for.
///
/// # Example
///
/// ```
/// use lzw_core::lzw::{build_seed_dictionary, encode};
///
/// let input: Vec<char> = "aaaaaa".chars().collect();
/// let seed = build_seed_dictionary(&input);
/// let (codes, dict) = encode(&input, &seed).unwrap();
/// assert_eq!(codes, vec![0, 1, 2]);
/// assert_eq!(dict.code(&['a', 'a', 'a']), Some(2));
/// ```
pub fn encode<S: Symbol>(
    input: &[S],
    seed: &SeedDictionary<S>,
) -> Result<(Vec<Code>, EncodeDictionary<S>)> {
    let mut encoder = Encoder::new(seed);
    for (position, symbol) in input.iter().enumerate() {
        encoder.push(position, symbol)?;
    }
    let (codes, dictionary) = encoder.finish();
    debug!(
        "lzw encode: {} symbols -> {} codes, dictionary size {}",
        input.len(),
        codes.len(),
        dictionary.len()
    );
    Ok((codes, dictionary))
}
