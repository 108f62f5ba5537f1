pub mod error;
pub mod merge;
pub mod options;

use syn::punctuated::Punctuated;
use syn::{GenericArgument, PathArguments, PathSegment, Token, Type};

/// Field name suffix marking a nested, recursively mergeable options record.
pub const OPTIONS_SUFFIX: &str = "_options";

/// True for `foo_options`, false for `options` and `foo`.
pub fn is_options_field(name: &str) -> bool {
    name.len() > OPTIONS_SUFFIX.len() && name.ends_with(OPTIONS_SUFFIX)
}

pub fn last_segment(ty: &Type) -> Option<&PathSegment> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    path.path.segments.last()
}

pub fn generic_args(segment: &PathSegment) -> Option<&Punctuated<GenericArgument, Token![,]>> {
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => Some(&args.args),
        _ => None,
    }
}

/// Returns `T` for a type spelled `Option<T>` (or `std::option::Option<T>`).
pub fn option_inner(ty: &Type) -> Option<&Type> {
    let segment = last_segment(ty).filter(|segment| segment.ident == "Option")?;
    let args = generic_args(segment)?;
    if args.len() != 1 {
        return None;
    }
    match args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
