//! Command-line interface module

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
