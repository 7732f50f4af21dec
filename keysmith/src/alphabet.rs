//! The alphabet table: an ordered set of unique symbols used as digits.
//!
//! The position of a symbol in the alphabet is its digit weight, so the
//! symbol at position 0 is the "zero digit". It pads fixed size keys and
//! anchors the leading-symbol stripping done while decoding.
//!
//! Looking a symbol up by position is a slice index. The reverse lookup is a
//! map built once at construction, and building that map is also where
//! duplicate symbols are detected.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ConstructionError;

/// The symbols of the default alphabet, in canonical order.
pub const DEFAULT_SYMBOLS: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// An ordered sequence of unique symbols together with its reverse index.
///
/// # Invariants
/// - Never empty
/// - No symbol appears twice
/// - `index_of` is exactly the inverse of `symbols`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    index_of: HashMap<char, usize>,
}

impl Alphabet {
    /// Builds an alphabet from the characters of a string.
    ///
    /// ## Errors
    /// - `EmptyAlphabet` if the string has no characters
    /// - `DuplicateSymbol` carrying the first repeated character
    pub fn new(symbols: &str) -> Result<Self, ConstructionError> {
        Self::from_symbols(symbols.chars())
    }

    /// Builds an alphabet from a sequence of symbols.
    ///
    /// The reverse index is filled while iterating, so the reported duplicate
    /// is the first symbol that has been seen before.
    pub fn from_symbols<I>(symbols: I) -> Result<Self, ConstructionError>
    where
        I: IntoIterator<Item = char>,
    {
        let symbols: Vec<char> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return Err(ConstructionError::EmptyAlphabet);
        }

        let mut index_of = HashMap::with_capacity(symbols.len());
        for (position, &symbol) in symbols.iter().enumerate() {
            if index_of.insert(symbol, position).is_some() {
                return Err(ConstructionError::DuplicateSymbol(symbol));
            }
        }

        Ok(Self { symbols, index_of })
    }

    /// Returns a random permutation of the [`DEFAULT_SYMBOLS`].
    ///
    /// The random source is supplied by the caller, so two alphabets built
    /// from independent generators are uncorrelated while the same seed
    /// always yields the same alphabet.
    pub fn shuffled<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::default().shuffle(rng)
    }

    /// Returns a copy of this alphabet with its symbols randomly permuted.
    pub fn shuffle<R>(&self, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut symbols = self.symbols.clone();
        symbols.shuffle(rng);

        let index_of = symbols
            .iter()
            .enumerate()
            .map(|(position, &symbol)| (symbol, position))
            .collect();

        Self { symbols, index_of }
    }

    /// Returns the number of symbols, which is the radix of the numeral
    /// system.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns the number of symbols as a u64 for digit arithmetic.
    pub fn radix(&self) -> u64 {
        self.symbols.len() as u64
    }

    /// Returns the zero digit (the symbol at position 0).
    pub fn zero(&self) -> char {
        // SAFETY: `symbols` is never empty due to struct invariants
        self.symbols[0]
    }

    /// Returns the symbol at the given position, if any.
    pub fn symbol(&self, position: usize) -> Option<char> {
        self.symbols.get(position).copied()
    }

    /// Returns the position of the given symbol, if it is in the alphabet.
    pub fn position(&self, symbol: char) -> Option<usize> {
        self.index_of.get(&symbol).copied()
    }

    /// Returns whether the symbol is part of the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.index_of.contains_key(&symbol)
    }

    /// Returns the symbols in digit order.
    pub fn as_slice(&self) -> &[char] {
        &self.symbols
    }
}

/// The default alphabet is [`DEFAULT_SYMBOLS`] in canonical order.
impl Default for Alphabet {
    fn default() -> Self {
        let symbols: Vec<char> = DEFAULT_SYMBOLS.chars().collect();
        let index_of = symbols
            .iter()
            .enumerate()
            .map(|(position, &symbol)| (symbol, position))
            .collect();

        Self { symbols, index_of }
    }
}

impl FromStr for Alphabet {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Writes the symbols back out as a string.
impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use test_case::test_case;

    #[test_case("abc"; "ascii")]
    #[test_case("a"; "single symbol")]
    #[test_case("αβγδ"; "multi byte symbols")]
    #[test_case(DEFAULT_SYMBOLS; "default symbols")]
    fn new_alphabet_indexes_every_symbol(symbols: &str) {
        let alphabet = Alphabet::new(symbols).unwrap();

        assert_eq!(alphabet.len(), symbols.chars().count());
        assert_eq!(alphabet.index_of.len(), alphabet.len());
        for (position, symbol) in symbols.chars().enumerate() {
            assert_eq!(alphabet.position(symbol), Some(position));
            assert_eq!(alphabet.symbol(position), Some(symbol));
        }
        assert_eq!(alphabet.to_string(), symbols);
    }

    #[test]
    fn empty_alphabet_is_rejected() {
        assert_matches!(Alphabet::new(""), Err(ConstructionError::EmptyAlphabet));
    }

    #[test_case("abcabc", 'a'; "repeated block")]
    #[test_case("abcb", 'b'; "repeated in the middle")]
    #[test_case("xyzzy", 'z'; "first duplicate wins")]
    fn duplicate_symbol_is_rejected(symbols: &str, duplicate: char) {
        assert_matches!(
            Alphabet::new(symbols),
            Err(ConstructionError::DuplicateSymbol(c)) if c == duplicate
        );
    }

    #[test]
    fn zero_digit_is_first_symbol() {
        let alphabet: Alphabet = "xyz".parse().unwrap();
        assert_eq!(alphabet.zero(), 'x');
        assert_eq!(alphabet.radix(), 3);
        assert_eq!(alphabet.symbol(3), None);
        assert_eq!(alphabet.position('a'), None);
        assert!(!alphabet.contains('a'));
    }

    #[test]
    fn default_alphabet_matches_default_symbols() {
        assert_eq!(Alphabet::default(), Alphabet::new(DEFAULT_SYMBOLS).unwrap());
    }

    #[test]
    fn shuffled_alphabet_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let alphabet = Alphabet::shuffled(&mut rng);

        let mut sorted = alphabet.as_slice().to_vec();
        sorted.sort_unstable();
        let mut expected: Vec<char> = DEFAULT_SYMBOLS.chars().collect();
        expected.sort_unstable();

        assert_eq!(sorted, expected);
        for (position, &symbol) in alphabet.as_slice().iter().enumerate() {
            assert_eq!(alphabet.position(symbol), Some(position));
        }
    }

    #[test]
    fn shuffle_is_reproducible_for_a_seed() {
        let first = Alphabet::shuffled(&mut StdRng::seed_from_u64(7));
        let second = Alphabet::shuffled(&mut StdRng::seed_from_u64(7));
        let other = Alphabet::shuffled(&mut StdRng::seed_from_u64(8));

        assert_eq!(first, second);
        assert_ne!(first, other);
    }
}
