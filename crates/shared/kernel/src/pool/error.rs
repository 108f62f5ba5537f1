use std::borrow::Cow;

/// A specialized [`PoolError`] enum of the pool module.
#[tessera_derive::tessera_error]
pub enum PoolError {
    #[error("Invalid pool configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
