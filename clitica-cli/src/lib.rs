//! Clitica CLI library
//!
//! This library provides the command-line interface for the clitic
//! placement detector.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod rules_source;

pub use error::{CliError, CliResult};
