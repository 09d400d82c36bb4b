use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// Rusty Tree - A directory tree rendering utility
#[derive(Parser, Debug)]
#[command(name = "rusty-tree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to render
    #[arg(default_value = ".", value_name = "PATH")]
    pub path: PathBuf,

    /// List plain files in addition to directories
    #[arg(short = 'f', long)]
    pub files: bool,

    /// Sort children by: name, none
    #[arg(long, value_name = "BY")]
    pub sort: Option<String>,

    /// Base names to exclude (can be specified multiple times)
    #[arg(short, long, value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Ignore the built-in exclude list
    #[arg(long)]
    pub no_default_excludes: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Print the man page and exit
    #[arg(long)]
    pub man: bool,
}
