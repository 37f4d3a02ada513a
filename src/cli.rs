use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Most-likely state selection and grid coordinate decoding.
#[derive(Parser)]
#[command(
    name = "gridstate",
    version,
    about = "Pick the most likely state from counts and place it on a grid"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Decode a binary state into (row, col) grid coordinates.
    Coords(CoordsArgs),
    /// Print the state with the highest count.
    MostLikely(MostLikelyArgs),
    /// Pick the most likely state and decode its grid coordinates.
    Locate(LocateArgs),
}

/// Arguments for the `coords` subcommand.
#[derive(clap::Args)]
pub struct CoordsArgs {
    /// Binary state string, e.g. `101`.
    pub state: String,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `most-likely` subcommand.
#[derive(clap::Args)]
pub struct MostLikelyArgs {
    /// Path to TOML counts file (`state = count` per line).
    #[arg(long)]
    pub counts: PathBuf,

    /// Print the full ranking instead of only the top state.
    #[arg(long)]
    pub ranked: bool,
}

/// Arguments for the `locate` subcommand.
#[derive(clap::Args)]
pub struct LocateArgs {
    /// Path to TOML counts file (`state = count` per line).
    #[arg(long)]
    pub counts: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
