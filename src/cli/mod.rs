use crate::store::DEFAULT_STATE_FILE;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

pub use commands::{parse_args, report_parse_error, run, usage, Dispatcher, Outcome};

#[derive(Debug, Parser)]
#[command(name = "ctx")]
#[command(about = "ctx - A git-style command line tool")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path of the context state file
    #[arg(short, long, global = true, default_value = DEFAULT_STATE_FILE)]
    pub state: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create new context
    Init(InitArgs),

    /// Add files
    Add(AddArgs),

    /// List tracked files
    #[command(visible_alias = "ls")]
    Status(StatusArgs),
}

#[derive(Debug, Args)]
pub struct InitArgs {}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Files to add
    pub files: Vec<String>,
}

#[derive(Debug, Args)]
pub struct StatusArgs {}
