//! Shell settings: built-in defaults, then the settings file and `TESSERA__*`
//! environment variables, then command line flags.

use crate::cli::Cli;
use anyhow::{Context, Result, ensure};
use tessera::config::load_config;
use tessera::merge::{OPTIONS_SUFFIX, merge_all};
use tessera::options::{OptionsModel, options_model};
use tracing::debug;

#[options_model(crate = tessera::kernel, rename_all = "snake_case")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOptions {
    /// Reserved suffix of nested option keys.
    #[option(default = OPTIONS_SUFFIX.to_owned())]
    pub suffix: String,
    /// Pretty-print JSON output.
    #[option(default = true)]
    pub pretty: bool,
    #[option(default = "warn".to_owned())]
    pub log_level: String,
}

impl ShellOptionsPatch {
    /// The layer contributed by command line flags.
    pub fn from_cli(cli: &Cli) -> Self {
        let output = cli.command.output();
        Self {
            suffix: output.suffix.clone(),
            pretty: output.compact.then_some(false),
            log_level: cli.log_level.clone(),
        }
    }
}

/// Resolves the shell settings for this invocation.
///
/// # Errors
/// Fails if an explicit settings file is missing or malformed, or if the resolved
/// suffix is empty.
pub fn load(cli: &Cli) -> Result<ShellOptions> {
    let file: ShellOptionsPatch = load_config(cli.config.as_deref()).context("Failed to load shell settings")?;
    let flags = ShellOptionsPatch::from_cli(cli);

    let mut layered = ShellOptions::defaults();
    merge_all(&mut layered, [&file, &flags]);
    debug!(?layered, "Resolved shell settings");

    resolve(layered)
}

fn resolve(layered: ShellOptionsPatch) -> Result<ShellOptions> {
    let options = ShellOptions::from_patch(layered)?;
    ensure!(!options.suffix.is_empty(), "The options suffix must not be empty");
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from(["tessera", "--log-level", "debug", "merge", "a.json", "b.json", "--compact"]);
        let flags = ShellOptionsPatch::from_cli(&cli);

        let options = ShellOptions::optionize(&flags).expect("every field has a default");
        assert_eq!(options, ShellOptions { suffix: "Options".into(), pretty: false, log_level: "debug".into() });
    }

    #[test]
    fn absent_flags_keep_file_values() {
        let cli = Cli::parse_from(["tessera", "optionize", "--defaults", "d.json"]);
        let file = ShellOptionsPatch { suffix: Some("Config".into()), pretty: Some(false), log_level: None };

        let mut layered = ShellOptions::defaults();
        merge_all(&mut layered, [&file, &ShellOptionsPatch::from_cli(&cli)]);
        let options = ShellOptions::from_patch(layered).unwrap();

        assert_eq!(options.suffix, "Config");
        assert!(!options.pretty);
        assert_eq!(options.log_level, "warn");
    }

    #[test]
    fn empty_suffix_is_rejected() {
        let cli = Cli::parse_from(["tessera", "merge", "a.json", "b.json", "--suffix", ""]);
        let mut layered = ShellOptions::defaults();
        merge_all(&mut layered, [&ShellOptionsPatch::from_cli(&cli)]);

        let err = resolve(layered).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }
}
