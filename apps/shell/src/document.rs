use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Reads a JSON or TOML document, chosen by file extension (JSON otherwise).
pub fn read(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let document = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("toml") => {
            toml::from_str::<Value>(&text).with_context(|| format!("Invalid TOML in {}", path.display()))?
        },
        _ => serde_json::from_str::<Value>(&text).with_context(|| format!("Invalid JSON in {}", path.display()))?,
    };

    if !document.is_object() {
        bail!("{} must contain an object at the top level", path.display());
    }
    debug!(path = %path.display(), "Read document");

    Ok(document)
}

/// Writes `document` as JSON followed by a newline.
pub fn write(mut out: impl Write, document: &Value, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut out, document)?;
    } else {
        serde_json::to_writer(&mut out, document)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
