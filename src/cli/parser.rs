use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for tttt
/// (Tiny Task Time Tracker)
#[derive(Parser)]
#[command(
    name = "tttt",
    version = env!("CARGO_PKG_VERSION"),
    about = "Tiny Task Time Tracker: log in/out timestamps per task and sum durations by description",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize a time field and report whether it is valid
    Check {
        /// Raw field text, e.g. "0930" or "9:3a0"
        text: String,
    },

    /// Validate rows and print the per-description summary
    Sum {
        /// Row spec "IN,OUT,LABEL"; repeat for multiple rows.
        /// Without any --row, rows are read from stdin, one per line.
        #[arg(long = "row", value_name = "IN,OUT,LABEL")]
        rows: Vec<String>,

        /// Export the summary instead of printing the table
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Output file for --format
        #[arg(long, value_name = "FILE", requires = "format")]
        file: Option<String>,

        /// Overwrite the output file if it exists
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Drive a session interactively over stdin
    Interactive,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "init", help = "Write a fresh default configuration file")]
        init: bool,

        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for invalid fields")]
        check: bool,
    },
}
