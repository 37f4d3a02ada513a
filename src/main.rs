mod cli;
mod config;
mod convert;
mod coords_cmd;
mod counts_file;
mod locate_cmd;
mod logging;
mod most_likely_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Coords(args) => coords_cmd::run(args),
        Command::MostLikely(args) => most_likely_cmd::run(args),
        Command::Locate(args) => locate_cmd::run(args),
    }
}
