//! Configuration management for the keysmith CLI
use std::path::Path;

use config::Config;
use config::ConfigError;
use config::Environment;
use config::File;
use config::FileFormat;
use keysmith::Alphabet;
use keysmith::Codec;
use keysmith::ConstructionError;
use keysmith::KeySize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

pub use crate::config::error::KeysmithConfigError;

mod error;

/// The configuration values used when nothing else is provided.
const DEFAULT_CONFIG: &str = include_str!("default.toml");

/// Trait for validating configuration values.
trait Validatable {
    /// Validate the configuration values.
    fn validate(&self, cfg: &Settings) -> Result<(), ConfigError>;
}

/// Top-level configuration for the keysmith CLI
#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    /// Codec configuration
    pub codec: CodecConfig,
}

/// Configuration of the key codec.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    /// The symbols used as digits. When unset, the default alphanumeric
    /// alphabet is used.
    #[serde(default)]
    pub alphabet: Option<String>,
    /// The fixed key length, or 0 for dynamic keys. Signed so that negative
    /// values are reported as invalid sizes rather than parse errors.
    #[serde(default)]
    pub size: i64,
    /// Seed for shuffling the alphabet.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validatable for CodecConfig {
    fn validate(&self, _: &Settings) -> Result<(), ConfigError> {
        if let Some(alphabet) = &self.alphabet {
            Alphabet::new(alphabet).map_err(|err| {
                ConfigError::Message(KeysmithConfigError::InvalidAlphabet(err).to_string())
            })?;
        }

        KeySize::from_parts(&[self.size]).map_err(|err| {
            ConfigError::Message(KeysmithConfigError::InvalidSize(err).to_string())
        })?;

        Ok(())
    }
}

impl CodecConfig {
    /// Builds the codec described by this configuration.
    ///
    /// The alphabet is shuffled with a generator seeded from `seed` when one
    /// is set. Without an alphabet or a seed, the default alphabet is
    /// shuffled with a freshly seeded generator, like a codec created
    /// without an alphabet.
    pub fn build_codec(&self) -> Result<Codec, ConstructionError> {
        let size = KeySize::from_parts(&[self.size])?;
        let alphabet = match &self.alphabet {
            Some(alphabet) => Alphabet::new(alphabet)?,
            None => Alphabet::default(),
        };

        let alphabet = match self.seed {
            Some(seed) => alphabet.shuffle(&mut StdRng::seed_from_u64(seed)),
            None if self.alphabet.is_some() => alphabet,
            None => {
                tracing::warn!(
                    "no alphabet or seed configured; keys will not be reproducible between runs"
                );
                Alphabet::shuffled(&mut StdRng::from_entropy())
            }
        };

        Ok(Codec::from_alphabet(alphabet, size))
    }
}

impl Settings {
    /// Initializing the global config first with default values and then with
    /// provided/overwritten environment variables. The explicit separator with
    /// double underscores is needed to correctly parse the nested config
    /// structure.
    ///
    /// The environment variables are prefixed with `KEYSMITH_` and the nested
    /// fields are separated with double underscores (`__`). For example:
    ///
    /// ```text
    /// KEYSMITH_CODEC__ALPHABET
    /// ^^^^^^^^ ^^^^^  ^^^^^^^^
    ///    │    ^  │  ^^   └ The `alphabet` field of the `codec` object
    ///    │    │  │  └ separator("__")
    ///    │    │  └ The `codec` field of the root object (`Settings`)
    ///    │    └ prefix_separator("_")
    ///    └ with_prefix("KEYSMITH")
    /// ```
    pub fn new(config_path: Option<impl AsRef<Path>>) -> Result<Self, ConfigError> {
        Self::build(config_path, Self::environment())
    }

    /// The environment source for the settings.
    fn environment() -> Environment {
        Environment::with_prefix("KEYSMITH")
            .separator("__")
            .prefix_separator("_")
    }

    fn build(
        config_path: Option<impl AsRef<Path>>,
        env: Environment,
    ) -> Result<Self, ConfigError> {
        let mut cfg_builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(path) = config_path {
            cfg_builder = cfg_builder.add_source(File::from(path.as_ref()));
        }
        cfg_builder = cfg_builder.add_source(env);

        let cfg = cfg_builder.build()?;

        let settings: Settings = cfg.try_deserialize()?;

        settings.validate()?;

        Ok(settings)
    }

    /// Perform validation on the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        self.codec.validate(self)?;

        Ok(())
    }
}
