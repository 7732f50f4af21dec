#![deny(missing_docs)]

//! # keysmith
//!
//! Deterministic, bidirectional conversion between u64 ids and short keys
//! written in a caller-supplied alphabet. Typical uses are obfuscating
//! sequential database ids, short URL slugs, and human-readable ticket or
//! coupon codes.
//!
//! ## Usage Example
//!
//! ```
//! use keysmith::{Codec, KeySize};
//!
//! let codec = Codec::new("abcde", KeySize::new(3))?;
//!
//! let key = codec.encode(122)?;
//! assert_eq!(key, "eec");
//! assert_eq!(codec.decode(&key)?, 122);
//!
//! // 5 symbols and 3 places give 125 keys: "aaa" through "eee".
//! assert_eq!(codec.total(), 125);
//! # Ok::<(), keysmith::Error>(())
//! ```
//!
//! ## Architecture
//!
//! * **Alphabet**: the unique symbols used as digits and their reverse index
//! * **KeySize**: a fixed key length, or dynamic keys that grow with the id
//! * **Range**: how many ids a codec can address, saturating at `u64::MAX`
//! * **Codec**: the immutable encoder/decoder built from the two above

pub mod alphabet;
mod arithmetic;
mod codec;
pub mod error;
pub mod range;
mod size;


pub use alphabet::Alphabet;
pub use codec::Codec;
pub use error::ConstructionError;
pub use error::DecodeError;
pub use error::EncodeError;
pub use error::Error;
pub use size::KeySize;

/// Returns the version of the library, prefixed with `v`.
pub fn version() -> String {
    format!("v{}", env!("CARGO_PKG_VERSION"))
}
