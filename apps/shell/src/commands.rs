use crate::document;
use crate::settings::ShellOptions;
use anyhow::{Context, Result};
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};
use tessera::merge::Merger;
use tessera::options::optionize_layers_with;
use tracing::info;

/// `tessera merge`: merges every following document into the first and prints it.
pub fn merge(files: &[PathBuf], settings: &ShellOptions) -> Result<()> {
    let documents = files.iter().map(|path| document::read(path)).collect::<Result<Vec<_>>>()?;
    let Some((target, sources)) = documents.split_first() else {
        anyhow::bail!("No documents to merge");
    };

    let merger = merger(settings);
    let mut merged = target.clone();
    let sources: Vec<&Value> = sources.iter().collect();
    merger.merge(&mut merged, &sources).context("Failed to merge documents")?;
    info!(documents = files.len(), suffix = merger.reserved_suffix(), "Merged documents");

    document::write(io::stdout().lock(), &merged, settings.pretty)
}

/// `tessera optionize`: resolves provided options against a defaults document.
pub fn optionize(defaults: &Path, provided: Option<&Path>, settings: &ShellOptions) -> Result<()> {
    let defaults = document::read(defaults)?;
    let provided = provided.map(document::read).transpose()?.unwrap_or(Value::Null);

    let merger = merger(settings);
    let resolved =
        optionize_layers_with(&merger, &[&defaults, &provided]).context("Failed to resolve options")?;
    info!(suffix = merger.reserved_suffix(), "Resolved options");

    document::write(io::stdout().lock(), &resolved, settings.pretty)
}

fn merger(settings: &ShellOptions) -> Merger {
    Merger::new().suffix(settings.suffix.clone())
}
