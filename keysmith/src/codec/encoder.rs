//! Id to key conversion.

use crate::error::EncodeError;
use crate::size::KeySize;

use super::Codec;

impl Codec {
    /// Converts an id into its key.
    ///
    /// The id is written in base `alphabet.len()`, most significant digit
    /// first. Zero is the zero digit on its own. Fixed size keys are
    /// left-padded with the zero digit; dynamic keys are as short as the id
    /// allows.
    ///
    /// ## Errors
    /// - `IdOutOfRange` if `id >= self.total()`
    pub fn encode(&self, id: u64) -> Result<String, EncodeError> {
        if id >= self.total {
            tracing::trace!(id, total = self.total, "rejected id outside of the key range");
            return Err(EncodeError::IdOutOfRange { id, total: self.total });
        }

        let symbols = self.alphabet.as_slice();
        let radix = self.alphabet.radix();

        // Digits are produced least significant first and reversed at the
        // end. A radix of 1 only ever sees id 0 because of the range check.
        let mut digits = Vec::with_capacity(self.max_key_len());
        let mut value = id;
        loop {
            digits.push(symbols[(value % radix) as usize]);
            value /= radix;
            if value == 0 {
                break;
            }
        }

        if let KeySize::Fixed(size) = self.size {
            let padding = size.get().saturating_sub(digits.len());
            digits.extend(std::iter::repeat(self.alphabet.zero()).take(padding));
        }

        Ok(digits.into_iter().rev().collect())
    }
}
