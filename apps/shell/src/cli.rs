//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tessera")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Merge and resolve layered option documents (JSON or TOML)")]
pub struct Cli {
    /// Settings file (`tessera.toml` in the working directory is used when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level written to stderr (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Merge every following document into the first one
    Merge {
        /// Documents in merge order; later documents win
        #[arg(required = true, num_args = 2.., value_name = "FILES")]
        files: Vec<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Resolve provided options against a defaults document
    Optionize {
        /// Defaults document
        #[arg(long, value_name = "FILE")]
        defaults: PathBuf,

        /// Caller-supplied options, merged last
        #[arg(long, value_name = "FILE")]
        provided: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, clap::Args)]
pub struct OutputArgs {
    /// Key suffix marking nested, recursively merged objects
    #[arg(long, value_name = "SUFFIX")]
    pub suffix: Option<String>,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,
}

impl Commands {
    pub const fn output(&self) -> &OutputArgs {
        match self {
            Self::Merge { output, .. } | Self::Optionize { output, .. } => output,
        }
    }
}
