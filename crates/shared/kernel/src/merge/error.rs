use std::borrow::Cow;

#[tessera_derive::tessera_error]
pub enum MergeError {
    #[error("Merge requires at least one source{}", format_context(.context))]
    NoSources { context: Option<Cow<'static, str>> },

    #[error("Reserved options suffix must not be empty{}", format_context(.context))]
    EmptySuffix { context: Option<Cow<'static, str>> },

    #[error("Merge target must not be null{}", format_context(.context))]
    NullTarget { context: Option<Cow<'static, str>> },

    /// A target, source or nested `*Options` value is neither an object nor null.
    #[error("Expected a plain object{}: {path} is {found}", format_context(.context))]
    NotPlainObject { path: Cow<'static, str>, found: &'static str, context: Option<Cow<'static, str>> },
}

impl MergeError {
    pub(crate) fn not_plain(path: impl Into<Cow<'static, str>>, value: &serde_json::Value) -> Self {
        Self::NotPlainObject { path: path.into(), found: kind(value), context: None }
    }
}

const fn kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
