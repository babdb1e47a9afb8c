use std::collections::HashMap;

use heck::ToShoutySnakeCase;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields};

use crate::attrs::{check_code_literal, parse_code_attr, parse_vocabulary_attr};

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let vis = &input.vis;

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new(input.span(), "Vocabulary only supports enums"));
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "Vocabulary enums cannot be generic",
        ));
    }
    if data.variants.is_empty() {
        return Err(syn::Error::new(
            input.span(),
            "a vocabulary needs at least one variant",
        ));
    }

    let attr = parse_vocabulary_attr(&input.attrs, name)?;
    let vocab_name = &attr.name;
    let system = &attr.system;

    let mut variants = Vec::with_capacity(data.variants.len());
    let mut codes = Vec::with_capacity(data.variants.len());
    let mut statics = Vec::with_capacity(data.variants.len());
    let mut seen_codes: HashMap<String, syn::Ident> = HashMap::new();
    let mut seen_statics: HashMap<String, syn::Ident> = HashMap::new();

    for variant in &data.variants {
        let ident = &variant.ident;
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.span(),
                "Vocabulary variants cannot carry fields",
            ));
        }

        let code = parse_code_attr(&variant.attrs, ident)?;
        let value = code.value();
        check_code_literal(&value).map_err(|msg| syn::Error::new(code.span(), msg))?;
        if let Some(previous) = seen_codes.insert(value.clone(), ident.clone()) {
            return Err(syn::Error::new(
                code.span(),
                format!("code \"{value}\" is already used by `{previous}`"),
            ));
        }

        let static_name = ident.to_string().to_shouty_snake_case();
        if let Some(previous) = seen_statics.insert(static_name.clone(), ident.clone()) {
            return Err(syn::Error::new(
                ident.span(),
                format!("`{ident}` and `{previous}` both map to the constant {static_name}"),
            ));
        }

        variants.push(ident);
        codes.push(code);
        statics.push(format_ident!("{}", static_name, span = ident.span()));
    }

    let ordinals = 0..variants.len();

    let validate_fn = attr.validate.as_ref().map(|path| {
        quote! {
            fn validate(
                code: &::atrius_fhir_codes::BoundCode<Self>,
            ) -> ::core::result::Result<(), ::std::string::String> {
                #path(code)
            }
        }
    });

    let static_docs = codes
        .iter()
        .map(|code| format!("Interned `{}` code without metadata.", code.value()));

    Ok(quote! {
        #(
            #[doc = #static_docs]
            #vis static #statics: ::atrius_fhir_codes::BoundCode<#name> =
                ::atrius_fhir_codes::BoundCode::new_canonical(#name::#variants);
        )*

        impl ::atrius_fhir_codes::Vocabulary for #name {
            const NAME: &'static str = #vocab_name;
            const SYSTEM: &'static str = #system;
            const TABLE: ::atrius_fhir_codes::ValueTable<Self> =
                ::atrius_fhir_codes::ValueTable::new(#vocab_name, &[
                    #((#name::#variants, #codes),)*
                ]);

            fn ordinal(self) -> usize {
                match self {
                    #(#name::#variants => #ordinals,)*
                }
            }

            fn canonical(self) -> &'static ::atrius_fhir_codes::BoundCode<Self> {
                match self {
                    #(#name::#variants => &#statics,)*
                }
            }

            #validate_fn
        }

        impl ::core::convert::TryFrom<&str> for #name {
            type Error = ::atrius_fhir_codes::UnknownCodeError;

            fn try_from(
                s: &str,
            ) -> ::core::result::Result<Self, ::atrius_fhir_codes::UnknownCodeError> {
                <Self as ::atrius_fhir_codes::Vocabulary>::from_code(s)
            }
        }

        impl ::core::str::FromStr for #name {
            type Err = ::atrius_fhir_codes::UnknownCodeError;

            fn from_str(
                s: &str,
            ) -> ::core::result::Result<Self, ::atrius_fhir_codes::UnknownCodeError> {
                <Self as ::atrius_fhir_codes::Vocabulary>::from_code(s)
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<Self as ::atrius_fhir_codes::Vocabulary>::as_code(*self))
            }
        }

        impl ::atrius_fhir_codes::__private::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::atrius_fhir_codes::__private::serde::Serializer,
            {
                serializer.serialize_str(<Self as ::atrius_fhir_codes::Vocabulary>::as_code(*self))
            }
        }

        impl<'de> ::atrius_fhir_codes::__private::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::atrius_fhir_codes::__private::serde::Deserializer<'de>,
            {
                let literal: ::std::string::String =
                    ::atrius_fhir_codes::__private::serde::Deserialize::deserialize(deserializer)?;
                <Self as ::atrius_fhir_codes::Vocabulary>::from_code(&literal)
                    .map_err(<D::Error as ::atrius_fhir_codes::__private::serde::de::Error>::custom)
            }
        }
    })
}
