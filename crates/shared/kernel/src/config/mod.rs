use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix of environment variables overriding configuration values.
pub const ENV_PREFIX: &str = "TESSERA";
/// File (any format supported by `config`, extension optional) read when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tessera";

/// Custom error type for config loading.
#[tessera_derive::tessera_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration value layering a file under environment overrides.
///
/// 1. **Base File**: an explicit `path` must exist; without one, the optional
///    `tessera.{toml,json,yaml,...}` file in the working directory is used if present.
/// 2. **Environment Overrides**: variables prefixed with `TESSERA__` win over the file.
///    Nested structures use double underscores (`TESSERA__MERGE__SUFFIX` maps to `merge.suffix`).
///
/// Typical targets are option patches generated by `#[options_model]`, which are then
/// merged over the model defaults.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing or malformed, or if the
/// layered values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use tessera_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct ShellConfig {
///     suffix: Option<String>,
/// }
///
/// let cfg: ShellConfig = load_config(None::<&str>).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (file, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(file.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    if required {
        info!(path = %file.display(), "Loading config");
    } else {
        debug!(path = %file.display(), "Loading optional config");
    }

    let config = builder
        .build()
        .context(format!("Failed to build config from {}", file.display()))?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;

    #[derive(Debug, Default, Deserialize)]
    struct Sample {
        suffix: Option<String>,
        pretty: Option<bool>,
    }

    #[test]
    fn explicit_file_is_loaded() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("sample.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(file, "suffix = \"Config\"\npretty = false").expect("write config");

        let sample: Sample = load_config(Some(&path)).expect("config loads");
        assert_eq!(sample.suffix.as_deref(), Some("Config"));
        assert_eq!(sample.pretty, Some(false));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load_config::<Sample>(Some("/definitely/missing/tessera.toml"));
        assert!(matches!(err, Err(ConfigError::Config { context: Some(_), .. })));
    }
}
