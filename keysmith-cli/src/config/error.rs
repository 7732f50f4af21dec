use keysmith::ConstructionError;

/// Configuration error variants.
#[derive(Debug, thiserror::Error)]
pub enum KeysmithConfigError {
    /// The configured alphabet cannot be used to build a codec
    #[error("[codec.alphabet] The alphabet provided is invalid: {0}")]
    InvalidAlphabet(#[source] ConstructionError),

    /// The configured key size cannot be used to build a codec
    #[error("[codec.size] The key size provided is invalid: {0}")]
    InvalidSize(#[source] ConstructionError),
}
