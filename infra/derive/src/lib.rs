#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the Tessera workspace.
//! This crate removes the boilerplate around error enums and options handling:
//!
//! * [`macro@tessera_error`] turns an enum into a `thiserror` error with context support.
//! * [`macro@Merge`] derives field-by-field merging for option patch structs.
//! * [`macro@options_model`] generates a patch type and defaults for a resolved options struct.
//!
//! The generated code refers to `::tessera_kernel` by default. Crates that only depend on
//! the `tessera` facade pass `crate = tessera::kernel` to the merge and options macros.
//!
//! See each macro’s docstring for examples; they are `ignore`d to avoid compiling in this crate.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// A high-level attribute macro for defining domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` carrying this error (or an upstream error wrapped by one of the variants).
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field,
///   enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` implementations
///   if an `Internal` variant is present.
/// * **Formatting helper**: Emits a module-private `format_context` function used by the
///   `#[error(...)]` strings. Declare at most one such enum per module.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants only.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants wrapping an upstream error (`source` field, or a field marked
///    `#[source]`/`#[from]`) must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[tessera_derive::tessera_error]
/// pub enum LoaderError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, LoaderError> {
///     std::fs::read_to_string(path).context("Reading options document")
/// }
/// ```
#[proc_macro_attribute]
pub fn tessera_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Derives `tessera_kernel::merge::Merge` for a struct with named fields.
///
/// Field policy, applied for every field of `source` onto `self`:
///
/// * Fields named `*_options` (but not `options` itself) or marked `#[merge(nested)]`
///   are merged recursively through their own `Merge` implementation.
/// * `Option<_>` fields are overwritten only when the source holds `Some`; `None` never
///   clobbers an existing value.
/// * Any other field is treated as an atomic value and replaced by a clone of the source.
/// * `#[merge(atomic)]` opts a suffixed field out of the recursive merge.
///
/// Use `#[merge(crate = path)]` on the struct to point the generated code at a re-export
/// of the kernel crate.
///
/// # Example
///
/// ```rust,ignore
/// use tessera_kernel::merge::Merge;
///
/// #[derive(Clone, Default, Merge)]
/// struct TrackPatch {
///     width: Option<f64>,
///     thumb_options: ThumbPatch,
/// }
/// ```
#[proc_macro_derive(Merge, attributes(merge))]
pub fn derive_merge(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::merge::expand_derive(input).into()
}

/// Attribute macro turning a struct of resolved options into an options model.
///
/// For `struct SliderOptions` it generates:
///
/// * `SliderOptionsPatch`: every field wrapped in `Option`, nested `*_options` fields
///   replaced by their own patch type, with `Default`, `Clone`, `Debug`, serde support
///   (`rename_all = "camelCase"` by default) and a `Merge` implementation.
/// * `impl OptionsModel for SliderOptions` with `defaults()` and `from_patch()`.
///
/// # Field attributes
///
/// * `#[option(required)]` - the value must come from the caller; it has no default.
/// * `#[option(default = expr)]` - the default value.
/// * No attribute - the default is `Default::default()`, so the field type must
///   implement `Default`.
///
/// `required` and `default` together are rejected at compile time: required keys never
/// appear in the defaults.
///
/// # Arguments
///
/// * `rename_all = "snake_case"` - Overrides the serde rename policy of the patch.
/// * `crate = tessera::kernel` - Path of the kernel crate in generated code.
///
/// # Example
///
/// ```rust,ignore
/// use tessera_kernel::options_model;
///
/// #[options_model]
/// #[derive(Debug, Clone)]
/// pub struct SliderOptions {
///     #[option(required)]
///     pub range: (f64, f64),
///     #[option(default = 150.0)]
///     pub track_width: f64,
///     pub thumb_options: ThumbOptions,
/// }
/// ```
#[proc_macro_attribute]
pub fn options_model(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::options::expand_options_model(args.into(), input).into()
}
