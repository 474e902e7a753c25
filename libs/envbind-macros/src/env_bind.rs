//! Expansion of `#[derive(EnvBind)]`.
//!
//! The derive only looks at field names and visibility. Type checking is left
//! to the compiler through the `EnvField` bound on the generated calls, so an
//! unsupported field type surfaces as a trait error on that field.

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, Token, Visibility};

const ALLOWED_FLAGS: &[&str] = &["skip"];

/// Flags parsed from `#[env(...)]` on a single field.
#[derive(Debug, Default, PartialEq, Eq)]
struct FieldFlags {
    skip: bool,
}

pub fn expand_env_bind(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            Fields::Unnamed(_) | Fields::Unit => {
                return Err(syn::Error::new_spanned(
                    name,
                    "EnvBind requires a struct with named fields",
                ));
            }
        },
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "EnvBind can only be derived for structs",
            ));
        }
    };

    let mut entries = Vec::new();
    for field in fields {
        let flags = parse_field_flags(&field.attrs)?;
        if flags.skip || !matches!(field.vis, Visibility::Public(_)) {
            continue;
        }

        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        let key = ident.unraw().to_string();
        entries.push(quote! {
            ::envbind::Field::new(#key, ::envbind::EnvField::slot(&mut self.#ident))
        });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::envbind::Bindable for #name #ty_generics #where_clause {
            fn env_fields(&mut self) -> ::std::vec::Vec<::envbind::Field<'_>> {
                ::std::vec![#(#entries),*]
            }
        }
    })
}

fn parse_field_flags(attrs: &[Attribute]) -> syn::Result<FieldFlags> {
    let mut flags = FieldFlags::default();
    let mut seen = HashSet::new();

    for attr in attrs.iter().filter(|a| a.path().is_ident("env")) {
        let args = attr.parse_args_with(Punctuated::<Ident, Token![,]>::parse_terminated)?;
        for ident in &args {
            let flag = ident.to_string();
            if !ALLOWED_FLAGS.contains(&flag.as_str()) {
                return Err(syn::Error::new_spanned(ident, unknown_flag_message(&flag)));
            }
            if !seen.insert(flag.clone()) {
                return Err(syn::Error::new_spanned(
                    ident,
                    format!("duplicate flag '{flag}'"),
                ));
            }
            if flag == "skip" {
                flags.skip = true;
            }
        }
    }

    Ok(flags)
}

fn unknown_flag_message(flag: &str) -> String {
    let suggestion = ALLOWED_FLAGS
        .iter()
        .copied()
        .map(|allowed| (allowed, strsim::jaro_winkler(flag, allowed)))
        .filter(|(_, score)| *score > 0.8)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(allowed, _)| allowed);

    match suggestion {
        Some(allowed) => format!("unknown flag '{flag}'; did you mean '{allowed}'?"),
        None => format!(
            "unknown flag '{flag}'; expected one of: {}",
            ALLOWED_FLAGS.join(", ")
        ),
    }
}
