use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Main command-line interface for the morph utility library
///
/// Morph exposes the library's date/time formatting facades on the command
/// line: reformatting date strings through token formats, shifting
/// timestamps between named timezone offsets, and inspecting the offset
/// table itself. Failures of the formatting facades are total: the sentinel
/// strings `Invalid Date` and `Invalid Timezone` are printed verbatim.
#[derive(Parser)]
#[command(version, about, name = "morph")]
pub struct Args {
    /// Path to an alternate timezone offset table (JSON mapping label ->
    /// { offset, place }). Defaults to the table packaged with the library
    #[arg(long, global = true)]
    pub timezones: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the morph CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Reformat a date string using token formats
    #[command(alias = "d")]
    Date {
        /// The date string to format
        input: String,

        /// Output token format when --to is not given
        #[arg(long)]
        format: Option<String>,

        /// Token format describing the input
        #[arg(long)]
        from: Option<String>,

        /// Token format for the output
        #[arg(long)]
        to: Option<String>,
    },
    /// Reformat a timestamp, shifting between timezone labels
    #[command(alias = "t")]
    Timestamp {
        /// The timestamp to format
        input: String,

        /// Output token format
        #[arg(long)]
        format: Option<String>,

        /// Timezone label the input clock reading occurred in
        #[arg(long)]
        from: Option<String>,

        /// Timezone label to shift the output into
        #[arg(long)]
        to: Option<String>,
    },
    /// List the timezone labels the offset table resolves
    #[command(alias = "tz")]
    Timezones,
}
