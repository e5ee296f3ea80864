//! Morph CLI Application
//!
//! Command-line front-end for the morph utility library: date and timestamp
//! reformatting plus offset-table inspection.

mod args;
mod cli;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use morph_core::{FormatterOptions, TimezoneTable};

fn main() -> Result<()> {
    env_logger::init();

    let Args { timezones, command } = Args::parse();

    let table = timezones
        .map(|path| {
            TimezoneTable::from_path(&path)
                .with_context(|| format!("Failed to load timezone table from {}", path.display()))
        })
        .transpose()?;

    let cli = Cli::new(table);

    info!("Morph started");

    match command {
        Commands::Date { input, format, from, to } => {
            let options = FormatterOptions { format, from, to };
            println!("{}", cli.format_date(&input, &options));
        }
        Commands::Timestamp { input, format, from, to } => {
            let options = FormatterOptions { format, from, to };
            println!("{}", cli.format_timestamp(&input, &options));
        }
        Commands::Timezones => {
            print!("{}", cli.list_timezones());
        }
    }

    Ok(())
}
