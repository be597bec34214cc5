use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lol",
    about = "Merge and inspect partial League of Legends match records",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with default settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge two or more partial records of the same match
    Merge(MergeArgs),
    /// Report whether two records merge cleanly
    Check(CheckArgs),
    /// Print an overview of a match record
    Show(ShowArgs),
}

#[derive(Args)]
pub struct MergeArgs {
    #[arg(required = true, num_args = 2..)]
    pub files: Vec<PathBuf>,
    /// Write the merged record here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    pub base: PathBuf,
    pub incoming: PathBuf,
}

#[derive(Args)]
pub struct ShowArgs {
    pub file: PathBuf,
    /// Name table used to resolve champion ids
    #[arg(long)]
    pub names: Option<PathBuf>,
}
