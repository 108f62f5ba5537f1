use std::borrow::Cow;
use tessera_derive::tessera_error;

#[tessera_error]
pub enum LoadError {
    #[error("Read failed{}: {source}", format_context(.context))]
    Read { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Empty document{}", format_context(.context))]
    Empty { context: Option<Cow<'static, str>> },

    #[error("Unsupported format: {extension}")]
    Unsupported { extension: String },
}

fn read() -> Result<String, LoadError> {
    let missing = std::fs::read_to_string("/definitely/not/here.json").context("Reading defaults")?;
    Ok(missing)
}

fn empty() -> Result<(), LoadError> {
    Err(LoadError::Empty { context: None })
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(
        err.to_string().split(':').next(),
        Some("Read failed (Reading defaults)")
    );

    let err = empty().context("Loading provided options").unwrap_err();
    assert_eq!(err.to_string(), "Empty document (Loading provided options)");

    let err = LoadError::Unsupported { extension: "xml".to_owned() };
    assert_eq!(err.to_string(), "Unsupported format: xml");
}
