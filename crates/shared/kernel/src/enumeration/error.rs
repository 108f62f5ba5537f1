use std::borrow::Cow;

/// Errors raised while building or querying an enumeration.
///
/// All of them are precondition violations: a correct program never sees one.
#[tessera_derive::tessera_error]
pub enum EnumerationError {
    /// The host type declared no enumerants.
    #[error("Enumeration has no values{}: {host}", format_context(.context))]
    Empty { host: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The host type already owns a registry; no further enumerant of it may be built.
    #[error("Enumeration type is sealed{}: {host}", format_context(.context))]
    Sealed { host: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid enumeration key{}: {message}", format_context(.context))]
    InvalidKey { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Duplicate enumeration key{}: {key}", format_context(.context))]
    DuplicateKey { key: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// An inherited registry does not belong to an ancestor of the host type.
    #[error("Not an ancestor{}: {message}", format_context(.context))]
    NotAnAncestor { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// An inherited registry skips an intermediate type that owns a registry itself.
    #[error("Inherited registry skips a registered ancestor{}: {message}", format_context(.context))]
    SkippedAncestor { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unknown enumeration key{}: {key}", format_context(.context))]
    UnknownKey { key: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Value is not a member of the enumeration{}: {message}", format_context(.context))]
    UnknownValue { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
