//! compsplit CLI library
//!
//! This library provides the command-line interface for the compound
//! splitter and its corpus utilities.

pub mod commands;
pub mod config;
pub mod corpus;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
