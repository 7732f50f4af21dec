//! The key codec: a bijective mixed-radix numeral system over an alphabet.
//!
//! A [`Codec`] maps every id in `[0, total)` to exactly one key and back.
//! Keys are the id written in base `alphabet.len()`, most significant digit
//! first, using the alphabet's symbols as digits. Fixed size codecs left-pad
//! keys with the zero digit.
//!
//! For the `"abc"` alphabet and a key size of 3 the ids map as:
//!
//! ```text
//!  0. aaa    1. aab    2. aac    3. aba    4. abb    5. abc
//!  6. aca    7. acb    8. acc    9. baa   10. bab   11. bac
//! 12. bba   13. bbb   14. bbc   15. bca   16. bcb   17. bcc
//! 18. caa   19. cab   20. cac   21. cba   22. cbb   23. cbc
//! 24. cca   25. ccb   26. ccc
//! ```
//!
//! The codec holds no mutable state after construction, so a single instance
//! can be shared freely between threads.

mod decoder;
mod encoder;

use rand::Rng;

use crate::alphabet::Alphabet;
use crate::error::ConstructionError;
use crate::range;
use crate::size::KeySize;

/// Converts ids into keys and keys into ids.
///
/// It can only be created through its constructors, which validate the
/// alphabet and the size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codec {
    alphabet: Alphabet,
    size: KeySize,
    total: u64,
}

impl Codec {
    /// Creates a codec over the characters of `alphabet`.
    ///
    /// ## Example
    /// ```
    /// use keysmith::{Codec, KeySize};
    ///
    /// let codec = Codec::new("abc", KeySize::Dynamic)?;
    /// assert_eq!(codec.encode(10)?, "bab");
    /// assert_eq!(codec.decode("bab")?, 10);
    /// # Ok::<(), keysmith::Error>(())
    /// ```
    ///
    /// ## Errors
    /// - `EmptyAlphabet` if `alphabet` is empty
    /// - `DuplicateSymbol` if a character repeats
    pub fn new(alphabet: &str, size: KeySize) -> Result<Self, ConstructionError> {
        Ok(Self::from_alphabet(Alphabet::new(alphabet)?, size))
    }

    /// Creates a codec whose key size is the sum of `parts`. An empty slice
    /// or a zero sum gives a dynamic size.
    ///
    /// ## Errors
    /// Everything [`Codec::new`] returns, plus `InvalidSize` for a negative
    /// sum and `SizeOverflow` for a sum that does not fit.
    pub fn with_size_parts(alphabet: &str, parts: &[i64]) -> Result<Self, ConstructionError> {
        let alphabet = Alphabet::new(alphabet)?;
        let size = KeySize::from_parts(parts)?;
        Ok(Self::from_alphabet(alphabet, size))
    }

    /// Creates a codec over a random permutation of the default symbols.
    ///
    /// The caller owns the random source; seeding it makes the alphabet
    /// reproducible.
    pub fn with_default_alphabet<R>(rng: &mut R, size: KeySize) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::from_alphabet(Alphabet::shuffled(rng), size)
    }

    /// Creates a codec from an already validated alphabet.
    pub fn from_alphabet(alphabet: Alphabet, size: KeySize) -> Self {
        let total = range::total(alphabet.len(), size);

        tracing::debug!(
            alphabet_len = alphabet.len(),
            %size,
            total,
            "created key codec"
        );

        Self { alphabet, size, total }
    }

    /// Returns the alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the key size. [`KeySize::get`] is 0 for dynamic keys.
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Returns the number of ids the codec can encode; valid ids are
    /// `0 <= id < total`.
    ///
    /// For the `"abc"` alphabet and a key size of 3 this is 27: `aaa`,
    /// `aab`, ..., `ccc`.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the highest id the codec can encode.
    pub fn last_id(&self) -> u64 {
        // `total` is at least 1 since the alphabet is never empty.
        self.total - 1
    }

    /// Returns the length of the longest key the codec produces.
    pub fn max_key_len(&self) -> usize {
        match self.size {
            KeySize::Fixed(size) => size.get(),
            KeySize::Dynamic if self.alphabet.radix() < 2 => 1,
            KeySize::Dynamic => range::digit_count(self.last_id(), self.alphabet.radix()),
        }
    }
}
