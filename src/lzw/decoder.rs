use log::{debug, trace};

use super::{Code, DecodeDictionary, SeedDictionary, Symbol};
use crate::error::{Error, Result};

enum State<S> {
    /// No code read yet.
    Initial,
    /// `previous` is the sequence decoded for the last code (`I`).
    Steady { previous: Vec<S> },
}

/// Mirrors the encoder's dictionary one step behind, from codes alone.
struct Decoder<S: Symbol> {
    dictionary: DecodeDictionary<S>,
    state: State<S>,
    output: Vec<S>,
    self_references: usize,
}

impl<S: Symbol> Decoder<S> {
    fn new(seed: &SeedDictionary<S>) -> Self {
        Self {
            dictionary: DecodeDictionary::from_seed(seed),
            state: State::Initial,
            output: Vec::new(),
            self_references: 0,
        }
    }

    fn push(&mut self, position: usize, code: Code) -> Result<()> {
        let next_code = self.dictionary.next_code();
        let unresolvable = Error::UnresolvableCode {
            position,
            code,
            next_code,
        };

        let current = match std::mem::replace(&mut self.state, State::Initial) {
            State::Initial => self
                .dictionary
                .sequence(code)
                .ok_or(unresolvable)?
                .to_vec(),
            State::Steady { previous } => {
                let current = match self.dictionary.sequence(code) {
                    Some(known) => known.to_vec(),
                    // The encoder learned this entry on its last step and used it
                    // right away: it must be `previous` plus its own first symbol.
                    None if code == next_code => {
                        self.self_references += 1;
                        let mut current = previous.clone();
                        current.push(previous[0].clone());
                        current
                    }
                    None => return Err(unresolvable),
                };
                let mut learned = previous;
                learned.push(current[0].clone());
                let new_code = self.dictionary.insert(learned);
                trace!("lzw decode: position {position}, learned code {new_code}");
                current
            }
        };

        self.output.extend_from_slice(&current);
        self.state = State::Steady { previous: current };
        Ok(())
    }

    fn finish(self) -> (Vec<S>, DecodeDictionary<S>) {
        (self.output, self.dictionary)
    }
}

/// Reconstructs the sequence `codes` was encoded from, using the same `seed`
/// the encoder started with.
///
/// # Returns
///
/// The decoded symbols and the dictionary rebuilt along the way. The
/// dictionary holds one entry per seed symbol plus one per code after the
/// first.
///
/// # Errors
///
/// - [`Error::EmptyCodeSequence`] if `codes` is empty.
/// - [`Error::UnresolvableCode`] if a code is unknown and is not the one
///   entry the encoder could have just created. This means the stream is
///   corrupt or was produced with a different seed.
///
/// # Example
///
/// ```
/// use lzw_core::lzw::{build_seed_dictionary, decode};
///
/// let seed = build_seed_dictionary(&['a']);
/// let (decoded, dict) = decode(&[0, 1, 2], &seed).unwrap();
/// assert_eq!(decoded, vec!['a'; 6]);
/// assert_eq!(dict.len(), 3);
/// ```
pub fn decode<S: Symbol>(
    codes: &[Code],
    seed: &SeedDictionary<S>,
) -> Result<(Vec<S>, DecodeDictionary<S>)> {
    if codes.is_empty() {
        return Err(Error::EmptyCodeSequence);
    }
    let mut decoder = Decoder::new(seed);
    for (position, &code) in codes.iter().enumerate() {
        decoder.push(position, code)?;
    }
    debug!(
        "lzw decode: {} codes -> {} symbols, dictionary size {}, {} self-references",
        codes.len(),
        decoder.output.len(),
        decoder.dictionary.len(),
        decoder.self_references
    );
    Ok(decoder.finish())
}
