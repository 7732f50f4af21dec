//! Key to id conversion.
//!
//! Decoding validates the key, drops leading zero digits and sums the
//! weighted digit positions. The zero-digit stripping always keeps at least
//! one symbol: a key made only of zero digits is 0, not an empty number. This
//! is what keeps dynamically sized codecs bijective.

use crate::arithmetic::CheckedArithmetic;
use crate::error::DecodeError;
use crate::size::KeySize;

use super::Codec;

impl Codec {
    /// Converts a key back into its id.
    ///
    /// Fixed size codecs only accept keys of exactly `size` symbols. Dynamic
    /// codecs accept any non-empty key; extra leading zero digits do not
    /// change the id (`"aab"` and `"b"` are both 1 over `"abc"`).
    ///
    /// ## Errors
    /// - `LengthMismatch` if the codec has a fixed size the key doesn't match
    /// - `EmptyKey` if the key has no symbols
    /// - `UnknownSymbol` carrying the leftmost symbol not in the alphabet
    /// - `ArithmeticOverflow` if the key's value does not fit in a u64
    /// - `IdOutOfRange` if the key's value is not below `self.total()`
    pub fn decode(&self, key: &str) -> Result<u64, DecodeError> {
        let positions = self.digit_positions(key).inspect_err(|error| {
            tracing::trace!(%error, "rejected key");
        })?;

        let id = self.accumulate(strip_leading_zeros(&positions))?;

        if id >= self.total {
            tracing::trace!(id, total = self.total, "rejected key outside of the key range");
            return Err(DecodeError::IdOutOfRange { id, total: self.total });
        }

        Ok(id)
    }

    /// Validates the key's length and maps each symbol to its digit value,
    /// scanning left to right.
    fn digit_positions(&self, key: &str) -> Result<Vec<u64>, DecodeError> {
        let actual = key.chars().count();
        match self.size {
            KeySize::Fixed(size) if size.get() != actual => {
                return Err(DecodeError::LengthMismatch { expected: size.get(), actual });
            }
            KeySize::Dynamic if actual == 0 => return Err(DecodeError::EmptyKey),
            _ => {}
        }

        key.chars()
            .map(|symbol| {
                self.alphabet
                    .position(symbol)
                    .map(|position| position as u64)
                    .ok_or(DecodeError::UnknownSymbol(symbol))
            })
            .collect()
    }

    /// Sums `digit * radix^i` over the digits, where `i` counts from the
    /// least significant (rightmost) digit.
    fn accumulate(&self, digits: &[u64]) -> Result<u64, DecodeError> {
        let radix = self.alphabet.radix();
        let mut id: u64 = 0;
        let mut weight: u64 = 1;

        for (i, &digit) in digits.iter().rev().enumerate() {
            if i > 0 {
                weight = weight.checked_op("weight", || weight.checked_mul(radix))?;
            }
            let term = digit.checked_op("multiply", || digit.checked_mul(weight))?;
            id = id.checked_op("add", || id.checked_add(term))?;
        }

        Ok(id)
    }
}

/// Removes the leading zero digits, keeping the last digit even when it is a
/// zero digit too. `digits` must not be empty.
fn strip_leading_zeros(digits: &[u64]) -> &[u64] {
    let last = digits.len().saturating_sub(1);
    let seek = digits[..last].iter().take_while(|&&digit| digit == 0).count();
    &digits[seek..]
}
