use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;
mod logging;

/// jsonseal: write JSON pretty-printed to a file and print the file's SHA-256.
#[derive(Parser, Debug)]
#[command(name = "jsonseal", version, about)]
pub struct Cli {
    /// Destination path for the JSON file
    file_name: PathBuf,

    /// Raw JSON text to normalize and write
    #[arg(allow_hyphen_values = true)]
    content: String,

    /// Anything after the content is accepted and ignored
    #[arg(hide = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    extra: Vec<String>,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    commands::seal::run(&cli)
}
