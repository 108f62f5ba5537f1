use super::is_options_field;
use super::merge::{FieldPolicy, MergeField, default_crate_path, merge_body};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::parse::Parser;
use syn::{Attribute, Expr, Fields, Ident, ItemStruct, LitStr, Path, Type, Visibility};

const DEFAULT_RENAME: &str = "camelCase";

struct ModelArgs {
    rename_all: Option<LitStr>,
    krate: Option<Path>,
}

enum DefaultSource {
    /// Supplied by the caller, never by the defaults.
    Required,
    /// `#[option(default = expr)]`
    Expr(Expr),
    /// `Default::default()` of the field type.
    Trait,
    /// A nested options model providing its own defaults.
    Nested,
}

struct ModelField<'a> {
    ident: &'a Ident,
    ty: &'a Type,
    vis: &'a Visibility,
    docs: Vec<&'a Attribute>,
    default: DefaultSource,
}

/// Expands the `#[options_model]` attribute macro.
///
/// Emits the struct unchanged (minus the `#[option]` helper attributes), a `<Name>Patch`
/// companion and the `OptionsModel` implementation tying the two together.
pub fn expand_options_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    expand(args, input).unwrap_or_else(syn::Error::into_compile_error)
}

fn expand(args: TokenStream, input: ItemStruct) -> syn::Result<TokenStream> {
    let ModelArgs { rename_all, krate } = parse_args(args)?;
    let krate = krate.unwrap_or_else(default_crate_path);
    let rename_all = rename_all.unwrap_or_else(|| LitStr::new(DEFAULT_RENAME, input.ident.span()));

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(&input.generics, "options_model does not support generics"));
    }

    let Fields::Named(named) = &input.fields else {
        return Err(syn::Error::new_spanned(&input.ident, "options_model requires named fields"));
    };
    let fields = named.named.iter().map(parse_field).collect::<syn::Result<Vec<_>>>()?;

    let name = &input.ident;
    let vis = &input.vis;
    let patch = format_ident!("{name}Patch");
    let patch_doc = format!(
        "Partial [`{name}`]: every field is optional and `None` means \"no override\"."
    );

    let patch_fields = fields.iter().map(|field| {
        let ModelField { ident, vis, docs, .. } = field;
        let ty = patch_type(&krate, field);
        quote! {
            #(#docs)*
            #[serde(skip_serializing_if = "::std::option::Option::is_none")]
            #vis #ident: ::std::option::Option<#ty>,
        }
    });

    let merge_fields: Vec<MergeField<'_>> = fields
        .iter()
        .map(|field| MergeField {
            ident: field.ident,
            policy: match field.default {
                DefaultSource::Nested => FieldPolicy::Nested,
                _ => FieldPolicy::Optional,
            },
        })
        .collect();
    let merge = merge_body(&krate, &merge_fields);

    let defaults = fields.iter().map(|field| {
        let ident = field.ident;
        let ty = field.ty;
        let value = match &field.default {
            DefaultSource::Required => quote! { ::std::option::Option::None },
            DefaultSource::Expr(expr) => quote! { ::std::option::Option::Some(#expr) },
            DefaultSource::Trait => {
                quote! { ::std::option::Option::Some(::std::default::Default::default()) }
            },
            DefaultSource::Nested => quote! {
                ::std::option::Option::Some(<#ty as #krate::options::OptionsModel>::defaults())
            },
        };
        quote! { #ident: #value, }
    });

    let resolved = fields.iter().map(|field| {
        let ident = field.ident;
        let ty = field.ty;
        let key = ident.to_string();
        let value = match &field.default {
            DefaultSource::Required => quote! {
                patch.#ident.ok_or_else(|| #krate::options::OptionsError::missing(#key))?
            },
            DefaultSource::Expr(expr) => quote! { patch.#ident.unwrap_or_else(|| #expr) },
            DefaultSource::Trait => quote! { patch.#ident.unwrap_or_default() },
            DefaultSource::Nested => quote! {{
                let mut nested = <#ty as #krate::options::OptionsModel>::defaults();
                if let ::std::option::Option::Some(provided) = patch.#ident {
                    #krate::merge::Merge::merge_from(&mut nested, &provided);
                }
                <#ty as #krate::options::OptionsModel>::from_patch(nested)
                    .map_err(|err| err.nested(#key))?
            }},
        };
        quote! { #ident: #value, }
    });

    let mut model = input.clone();
    strip_option_attrs(&mut model);

    Ok(quote! {
        #model

        #[doc = #patch_doc]
        #[derive(Debug, Clone, Default, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = #rename_all)]
        #vis struct #patch {
            #(#patch_fields)*
        }

        #[automatically_derived]
        impl #krate::merge::Merge for #patch {
            fn merge_from(&mut self, source: &Self) {
                #merge
            }
        }

        #[automatically_derived]
        impl #krate::options::OptionsModel for #name {
            type Patch = #patch;

            fn defaults() -> Self::Patch {
                #patch { #(#defaults)* }
            }

            fn from_patch(
                patch: Self::Patch,
            ) -> ::std::result::Result<Self, #krate::options::OptionsError> {
                ::std::result::Result::Ok(Self { #(#resolved)* })
            }
        }
    })
}

fn patch_type(krate: &Path, field: &ModelField<'_>) -> TokenStream {
    let ty = field.ty;
    match field.default {
        DefaultSource::Nested => quote! { <#ty as #krate::options::OptionsModel>::Patch },
        _ => quote! { #ty },
    }
}

fn parse_args(args: TokenStream) -> syn::Result<ModelArgs> {
    let mut rename_all = None;
    let mut krate = None;

    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("rename_all") {
            if rename_all.is_some() {
                return Err(meta.error("Duplicate argument"));
            }
            rename_all = Some(meta.value()?.parse::<LitStr>()?);
            Ok(())
        } else if meta.path.is_ident("crate") {
            if krate.is_some() {
                return Err(meta.error("Duplicate argument"));
            }
            krate = Some(meta.value()?.parse::<Path>()?);
            Ok(())
        } else {
            Err(meta.error("Unsupported argument; expected rename_all or crate"))
        }
    });
    parser.parse2(args)?;

    Ok(ModelArgs { rename_all, krate })
}

fn parse_field(field: &syn::Field) -> syn::Result<ModelField<'_>> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(field, "options_model requires named fields"))?;

    let mut required = false;
    let mut default = None;
    for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("option")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("required") {
                required = true;
                Ok(())
            } else if meta.path.is_ident("default") {
                default = Some(meta.value()?.parse::<Expr>()?);
                Ok(())
            } else {
                Err(meta.error("expected `required` or `default = expr`"))
            }
        })?;
    }

    let nested = is_options_field(&ident.to_string());
    let default = match (required, default, nested) {
        (true, Some(_), _) => {
            return Err(syn::Error::new_spanned(
                ident,
                "a required option cannot have a default; required keys come from the caller",
            ));
        },
        (_, Some(_), true) | (true, None, true) => {
            return Err(syn::Error::new_spanned(
                ident,
                "nested `*_options` fields take their defaults from their own options model",
            ));
        },
        (true, None, false) => DefaultSource::Required,
        (false, Some(expr), false) => DefaultSource::Expr(expr),
        (false, None, true) => DefaultSource::Nested,
        (false, None, false) => DefaultSource::Trait,
    };

    Ok(ModelField {
        ident,
        ty: &field.ty,
        vis: &field.vis,
        docs: field.attrs.iter().filter(|attr| attr.path().is_ident("doc")).collect(),
        default,
    })
}

fn strip_option_attrs(input: &mut ItemStruct) {
    for field in input.fields.iter_mut() {
        field.attrs.retain(|attr| !attr.path().is_ident("option"));
    }
}
