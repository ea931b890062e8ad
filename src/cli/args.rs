//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "phrasebook")]
#[command(about = "English-to-Chinese UI phrase lookup")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use a custom translation table file
    #[arg(short, long, global = true)]
    pub table: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Translate phrases (honors the LANGUAGE environment variable)
    #[command(visible_alias = "t")]
    Tr {
        /// Phrases to translate, one result per line
        #[arg(required = true)]
        phrases: Vec<String>,
    },

    /// List table entries
    #[command(visible_alias = "ls")]
    List,

    /// Check the table for authoring issues
    Check,
}
