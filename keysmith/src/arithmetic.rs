//! Checked arithmetic for rebuilding ids from keys.
//!
//! A key longer than the canonical form of `u64::MAX` describes a number
//! that does not fit in a u64. These helpers turn such overflows into
//! decode errors instead of panics or silently wrapped ids.

use crate::error::DecodeError;

/// Converts a failed checked operation into a [`DecodeError`].
pub trait CheckedArithmetic {
    /// Performs a checked arithmetic operation that might overflow.
    ///
    /// # Parameters
    /// * `op_name` - Name of the operation for error context
    /// * `op` - The checked operation to perform, returning `Option<Self>`
    ///
    /// # Returns
    /// * `Ok(value)` - The operation succeeded
    /// * `Err(DecodeError::ArithmeticOverflow)` - The operation overflowed
    fn checked_op<F>(self, op_name: &str, op: F) -> Result<Self, DecodeError>
    where
        F: FnOnce() -> Option<Self>,
        Self: Sized;
}

impl CheckedArithmetic for u64 {
    fn checked_op<F>(self, op_name: &str, op: F) -> Result<Self, DecodeError>
    where
        F: FnOnce() -> Option<Self>,
    {
        op().ok_or_else(|| {
            DecodeError::ArithmeticOverflow(format!("{op_name} overflow: value={self}"))
        })
    }
}
