//! Command line arguments and command execution.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use keysmith::Codec;

/// Format of the log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogOutputFormat {
    /// One JSON object per event
    Json,
    /// Human readable, multi-line events
    Pretty,
}

/// Command line arguments for keysmith.
#[derive(Debug, Parser)]
#[clap(name = "keysmith", version)]
pub struct KeysmithArgs {
    /// Optional path to the configuration file. If not provided, the defaults
    /// and any `KEYSMITH_` environment variables are used.
    #[clap(short = 'c', long, required = false)]
    pub config: Option<PathBuf>,

    /// Format of the logs written to stderr.
    #[clap(short = 'o', long = "output-format", default_value = "pretty")]
    pub output_format: Option<LogOutputFormat>,

    /// The command to run.
    #[clap(subcommand)]
    pub command: Command,
}

/// The commands keysmith can run.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Convert ids into keys, one key per line.
    Encode {
        /// The ids to convert.
        #[clap(required = true)]
        ids: Vec<u64>,
    },
    /// Convert keys back into ids, one id per line.
    Decode {
        /// The keys to convert.
        #[clap(required = true)]
        keys: Vec<String>,
    },
    /// Describe the configured codec.
    Info,
}

impl Command {
    /// Runs the command against the codec, writing results to `out`.
    ///
    /// Stops at the first id or key the codec rejects.
    pub fn run<W: Write>(&self, codec: &Codec, mut out: W) -> anyhow::Result<()> {
        match self {
            Command::Encode { ids } => {
                for &id in ids {
                    let key = codec
                        .encode(id)
                        .with_context(|| format!("could not encode id {id}"))?;
                    writeln!(out, "{key}")?;
                }
            }
            Command::Decode { keys } => {
                for key in keys {
                    let id = codec
                        .decode(key)
                        .with_context(|| format!("could not decode key {key:?}"))?;
                    writeln!(out, "{id}")?;
                }
            }
            Command::Info => {
                writeln!(out, "alphabet:       {}", codec.alphabet())?;
                writeln!(out, "size:           {}", codec.size())?;
                writeln!(out, "total:          {}", codec.total())?;
                writeln!(out, "last id:        {}", codec.last_id())?;
                writeln!(out, "max key length: {}", codec.max_key_len())?;
                writeln!(out, "version:        {}", keysmith::version())?;
            }
        }

        Ok(())
    }
}
