//! Key size: either a fixed number of symbols or dynamic.

use std::fmt;
use std::num::NonZeroUsize;

use crate::error::ConstructionError;

/// The length of the keys produced by a codec.
///
/// A size of zero is the sentinel for [`KeySize::Dynamic`], where keys are as
/// long as the id requires (at least one symbol).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeySize {
    /// Key length grows with the id. The whole u64 range is addressable.
    #[default]
    Dynamic,
    /// Every key has exactly this many symbols.
    Fixed(NonZeroUsize),
}

impl KeySize {
    /// Returns the fixed size for a non-zero length and the dynamic size for
    /// zero.
    pub fn new(size: usize) -> Self {
        NonZeroUsize::new(size).map_or(Self::Dynamic, Self::Fixed)
    }

    /// Builds a key size from the sum of its parts.
    ///
    /// Allows a size to be assembled from several components, for example a
    /// prefix length plus a body length. The sum must be zero or positive.
    ///
    /// ## Errors
    /// - `InvalidSize` if the sum is negative
    /// - `SizeOverflow` if the sum does not fit in an i64 or a usize
    pub fn from_parts(parts: &[i64]) -> Result<Self, ConstructionError> {
        let sum = parts
            .iter()
            .try_fold(0i64, |acc, &part| acc.checked_add(part))
            .ok_or(ConstructionError::SizeOverflow)?;

        if sum < 0 {
            return Err(ConstructionError::InvalidSize(sum));
        }

        let size = usize::try_from(sum).map_err(|_| ConstructionError::SizeOverflow)?;
        Ok(Self::new(size))
    }

    /// Returns the number of symbols per key, or 0 for a dynamic size.
    pub fn get(&self) -> usize {
        match self {
            Self::Dynamic => 0,
            Self::Fixed(size) => size.get(),
        }
    }

    /// Returns whether keys have a variable length.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic)
    }
}

impl From<usize> for KeySize {
    fn from(size: usize) -> Self {
        Self::new(size)
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dynamic => write!(f, "dynamic"),
            Self::Fixed(size) => write!(f, "{size}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use test_case::test_case;

    #[test_case(0, KeySize::Dynamic; "zero is dynamic")]
    #[test_case(3, KeySize::Fixed(NonZeroUsize::new(3).unwrap()); "three is fixed")]
    fn new_size(size: usize, expected: KeySize) {
        assert_eq!(KeySize::new(size), expected);
        assert_eq!(KeySize::from(size).get(), size);
    }

    #[test_case(&[], 0; "no parts")]
    #[test_case(&[0], 0; "zero")]
    #[test_case(&[1, 2, 3], 6; "sum of parts")]
    #[test_case(&[5, -2], 3; "negative part with positive sum")]
    #[test_case(&[2, -2], 0; "parts cancel out")]
    fn size_from_parts(parts: &[i64], expected: usize) {
        assert_eq!(KeySize::from_parts(parts).unwrap().get(), expected);
    }

    #[test_case(&[-1], -1; "negative")]
    #[test_case(&[1, 2, -10], -7; "negative sum")]
    fn negative_size_is_rejected(parts: &[i64], sum: i64) {
        assert_matches!(
            KeySize::from_parts(parts),
            Err(ConstructionError::InvalidSize(s)) if s == sum
        );
    }

    #[test]
    fn overflowing_parts_are_rejected() {
        assert_matches!(
            KeySize::from_parts(&[i64::MAX, 1]),
            Err(ConstructionError::SizeOverflow)
        );
    }

    #[test]
    fn display() {
        assert_eq!(KeySize::Dynamic.to_string(), "dynamic");
        assert_eq!(KeySize::new(8).to_string(), "8");
        assert!(KeySize::default().is_dynamic());
    }
}
