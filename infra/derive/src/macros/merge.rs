use super::{is_options_field, option_inner};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, Path, Type};

/// How a single field is combined with the same field of a later source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPolicy {
    /// Recursive `Merge::merge_from`.
    Nested,
    /// `Some` overwrites, `None` is skipped.
    Optional,
    /// Always replaced by the source value.
    Atomic,
}

pub struct MergeField<'a> {
    pub ident: &'a Ident,
    pub policy: FieldPolicy,
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    expand(&input).unwrap_or_else(syn::Error::into_compile_error)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(&input.ident, "Merge can only be derived for structs"));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(&input.ident, "Merge requires a struct with named fields"));
    };

    let krate = crate_path(&input.attrs)?.unwrap_or_else(default_crate_path);
    let fields = named
        .named
        .iter()
        .map(|field| {
            let ident = field.ident.as_ref().ok_or_else(|| {
                syn::Error::new_spanned(field, "Merge requires named fields")
            })?;
            let policy = field_policy(ident, &field.ty, &field.attrs)?;
            Ok(MergeField { ident, policy })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let name = &input.ident;
    let body = merge_body(&krate, &fields);

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics #krate::merge::Merge for #name #ty_generics #where_clause {
            fn merge_from(&mut self, source: &Self) {
                #body
            }
        }
    })
}

/// Statements merging every field of `source` into `self`.
pub fn merge_body(krate: &Path, fields: &[MergeField<'_>]) -> TokenStream {
    let statements = fields.iter().map(|MergeField { ident, policy }| match policy {
        FieldPolicy::Nested => quote! {
            #krate::merge::Merge::merge_from(&mut self.#ident, &source.#ident);
        },
        FieldPolicy::Optional => quote! {
            if let ::std::option::Option::Some(value) = &source.#ident {
                self.#ident = ::std::option::Option::Some(::std::clone::Clone::clone(value));
            }
        },
        FieldPolicy::Atomic => quote! {
            self.#ident = ::std::clone::Clone::clone(&source.#ident);
        },
    });

    if fields.is_empty() {
        return quote! { let _ = source; };
    }
    quote! { #(#statements)* }
}

pub fn default_crate_path() -> Path {
    syn::parse_quote!(::tessera_kernel)
}

fn field_policy(ident: &Ident, ty: &Type, attrs: &[Attribute]) -> syn::Result<FieldPolicy> {
    let mut forced = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("merge")) {
        attr.parse_nested_meta(|meta| {
            let policy = if meta.path.is_ident("nested") {
                FieldPolicy::Nested
            } else if meta.path.is_ident("atomic") {
                FieldPolicy::Atomic
            } else {
                return Err(meta.error("expected `nested` or `atomic`"));
            };
            if forced.replace(policy).is_some() {
                return Err(meta.error("conflicting merge policies"));
            }
            Ok(())
        })?;
    }

    Ok(match forced {
        Some(FieldPolicy::Atomic) if option_inner(ty).is_some() => FieldPolicy::Optional,
        Some(policy) => policy,
        None if is_options_field(&ident.to_string()) => FieldPolicy::Nested,
        None if option_inner(ty).is_some() => FieldPolicy::Optional,
        None => FieldPolicy::Atomic,
    })
}

/// Reads `#[merge(crate = path)]` from the container attributes.
fn crate_path(attrs: &[Attribute]) -> syn::Result<Option<Path>> {
    let mut path = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("merge")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                path = Some(meta.value()?.parse::<Path>()?);
                Ok(())
            } else {
                Err(meta.error("expected `crate = path`"))
            }
        })?;
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(input: DeriveInput, field: &str) -> FieldPolicy {
        let Data::Struct(data) = &input.data else { unreachable!() };
        let field = data
            .fields
            .iter()
            .find(|f| f.ident.as_ref().is_some_and(|i| i == field))
            .expect("field exists");
        field_policy(field.ident.as_ref().expect("named"), &field.ty, &field.attrs)
            .expect("valid attributes")
    }

    #[test]
    fn suffix_selects_nested_policy() {
        let input: DeriveInput = syn::parse_quote! {
            struct Patch {
                width: Option<f64>,
                label: String,
                options: Option<String>,
                thumb_options: ThumbPatch,
                #[merge(atomic)]
                shared_options: Option<Handle>,
                #[merge(nested)]
                track: TrackPatch,
            }
        };
        assert_eq!(policy(input.clone(), "width"), FieldPolicy::Optional);
        assert_eq!(policy(input.clone(), "label"), FieldPolicy::Atomic);
        assert_eq!(policy(input.clone(), "options"), FieldPolicy::Optional);
        assert_eq!(policy(input.clone(), "thumb_options"), FieldPolicy::Nested);
        assert_eq!(policy(input.clone(), "shared_options"), FieldPolicy::Optional);
        assert_eq!(policy(input, "track"), FieldPolicy::Nested);
    }

    #[test]
    fn enums_are_rejected() {
        let input: DeriveInput = syn::parse_quote! {
            enum Patch { A, B }
        };
        assert!(expand(&input).is_err());
    }

    #[test]
    fn unknown_field_attribute_is_rejected() {
        let input: DeriveInput = syn::parse_quote! {
            struct Patch {
                #[merge(deep)]
                width: Option<f64>,
            }
        };
        assert!(expand(&input).is_err());
    }
}
