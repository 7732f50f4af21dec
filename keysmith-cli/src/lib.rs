//! # keysmith CLI
//!
//! Command line front end for the keysmith codec: configuration loading,
//! logging setup and the encode/decode/info commands.

pub mod cli;
pub mod config;
pub mod logging;
