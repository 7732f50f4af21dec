//! Range calculation: how many ids a codec can address.
//!
//! All math here is exact integer math. A fixed size codec over `L` symbols
//! with keys of `S` symbols has `L^S` distinct keys; when that count does not
//! fit in a u64 it saturates to `u64::MAX`.

use crate::size::KeySize;

/// Returns the exclusive upper bound on the ids a codec can encode.
///
/// - Dynamic size: `u64::MAX`, since the key grows with the id.
/// - Fixed size: `alphabet_len ^ size`, saturated at `u64::MAX`.
///
/// A single-symbol alphabet can only ever write the zero digit, so its range
/// is `[0, 1)` whatever the size.
pub fn total(alphabet_len: usize, size: KeySize) -> u64 {
    let radix = alphabet_len as u64;
    if radix <= 1 {
        return radix;
    }

    match size {
        KeySize::Dynamic => u64::MAX,
        KeySize::Fixed(size) => saturating_pow(radix, size.get()),
    }
}

/// Raises `base` to `exponent`, saturating at `u64::MAX` instead of
/// wrapping.
pub fn saturating_pow(base: u64, exponent: usize) -> u64 {
    match u32::try_from(exponent) {
        Ok(exponent) => base.saturating_pow(exponent),
        // Exponents beyond u32::MAX only stay in range for 0 and 1.
        Err(_) if base <= 1 => base,
        Err(_) => u64::MAX,
    }
}

/// Returns the number of base `radix` digits needed to write `value`.
///
/// Zero takes one digit. `radix` must be at least 2.
pub fn digit_count(value: u64, radix: u64) -> usize {
    debug_assert!(radix >= 2, "positional notation needs a radix of at least 2");

    let mut value = value / radix;
    let mut digits = 1;
    while value > 0 {
        value /= radix;
        digits += 1;
    }
    digits
}
