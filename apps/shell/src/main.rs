pub mod cli;
pub mod commands;
pub mod document;
pub mod settings;

use crate::cli::{Cli, Commands};
use anyhow::Result;
use clap::Parser;
use tessera::logger::{Logger, parse_level};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = settings::load(&cli)?;

    let _logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .console(true)
        .level(parse_level(&settings.log_level)?)
        .init()?;

    match &cli.command {
        Commands::Merge { files, .. } => commands::merge(files, &settings)?,
        Commands::Optionize { defaults, provided, .. } => {
            commands::optionize(defaults, provided.as_deref(), &settings)?;
        },
    }

    Ok(())
}
