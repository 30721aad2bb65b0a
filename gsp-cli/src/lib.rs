//! GSP CLI library
//!
//! This library provides the command-line interface for the GSP sequential
//! pattern miner: transaction loading, configuration files, progress
//! reporting and result rendering.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
