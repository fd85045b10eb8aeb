use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::RangeArgs;

#[derive(Parser)]
#[command(name = "stride-cmd")]
#[command(about = "Command-line utility for iterating bounded integer ranges")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every value produced by a range, one per line
    #[command(allow_negative_numbers = true)]
    List {
        #[command(flatten)]
        range: RangeArgs,

        /// Print a JSON object instead of plain lines
        #[arg(long)]
        json: bool,
    },

    /// Print the number of values produced by a range and their sum
    #[command(allow_negative_numbers = true)]
    Sum {
        #[command(flatten)]
        range: RangeArgs,

        /// Print a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { range, json } => commands::list::run(range, json),
        Commands::Sum { range, json } => commands::sum::run(range, json),
    }
}
