//! phrasebook - English-to-Chinese UI phrase lookup

use anyhow::Result;
use clap::Parser;

use phrasebook::cli::{commands, Cli, Commands};
use phrasebook::i18n::{self, TranslationTable};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let table = match &cli.table {
        Some(path) => i18n::init_table(TranslationTable::load(path)?),
        None => i18n::table(),
    };

    match &cli.command {
        Commands::Tr { phrases } => commands::translate::execute(table, phrases),
        Commands::List => commands::list::execute(table),
        Commands::Check => commands::check::execute(table),
    }
}
