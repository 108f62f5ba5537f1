use crate::merge::MergeError;
use std::borrow::Cow;

#[tessera_derive::tessera_error]
pub enum OptionsError {
    /// A required option was provided neither by the caller nor by any layer.
    #[error("Missing required option{}: {field}", format_context(.context))]
    MissingRequired { field: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid options document{}: {source}", format_context(.context))]
    Deserialize { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Options merge failed{}: {source}", format_context(.context))]
    Merge { source: MergeError, context: Option<Cow<'static, str>> },
}

impl OptionsError {
    #[must_use]
    pub const fn missing(field: &'static str) -> Self {
        Self::MissingRequired { field: Cow::Borrowed(field), context: None }
    }

    /// Qualifies a missing field with the nested options field it was found under.
    #[must_use]
    pub fn nested(self, parent: &str) -> Self {
        match self {
            Self::MissingRequired { field, context } => {
                Self::MissingRequired { field: format!("{parent}.{field}").into(), context }
            },
            other => other,
        }
    }
}
