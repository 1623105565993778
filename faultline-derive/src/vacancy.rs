//! Implementation of the `#[derive(Vacancy)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse_macro_input, parse_quote, Data, DataEnum, DeriveInput, Fields, Generics, Ident, Index,
};

/// Main implementation of the Vacancy derive macro.
pub fn derive_vacancy_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let expanded = match &input.data {
        Data::Struct(data_struct) => {
            generate_struct_vacancy(name, input.generics.clone(), &data_struct.fields)
        }
        Data::Enum(data_enum) => generate_enum_vacancy(name, &input.generics, data_enum),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Vacancy cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// A struct is vacant when all of its fields are.
fn generate_struct_vacancy(name: &Ident, mut generics: Generics, fields: &Fields) -> TokenStream2 {
    let checks: Vec<TokenStream2> = match fields {
        Fields::Named(named_fields) => named_fields
            .named
            .iter()
            .filter_map(|field| field.ident.as_ref())
            .map(|field_name| quote! { ::faultline::Vacancy::is_vacant(&self.#field_name) })
            .collect(),
        Fields::Unnamed(unnamed_fields) => (0..unnamed_fields.unnamed.len())
            .map(|position| {
                let index = Index::from(position);
                quote! { ::faultline::Vacancy::is_vacant(&self.#index) }
            })
            .collect(),
        Fields::Unit => Vec::new(),
    };

    let where_clause = generics.make_where_clause();
    for field in fields {
        let field_type = &field.ty;
        where_clause
            .predicates
            .push(parse_quote! { #field_type: ::faultline::Vacancy });
    }

    let body = if checks.is_empty() {
        quote! { true }
    } else {
        quote! { #(#checks)&&* }
    };

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::faultline::Vacancy for #name #type_generics #where_clause {
            #[inline]
            fn is_vacant(&self) -> bool {
                #body
            }
        }
    }
}

/// An enum is vacant when it holds the variant marked `#[vacant]`.
fn generate_enum_vacancy(name: &Ident, generics: &Generics, data_enum: &DataEnum) -> TokenStream2 {
    let marked: Vec<_> = data_enum
        .variants
        .iter()
        .filter(|variant| {
            variant
                .attrs
                .iter()
                .any(|attribute| attribute.path().is_ident("vacant"))
        })
        .collect();

    let body = match marked.as_slice() {
        [] => quote! { false },
        [variant] => {
            if !matches!(variant.fields, Fields::Unit) {
                return syn::Error::new_spanned(
                    &variant.ident,
                    "#[vacant] can only mark a unit variant.",
                )
                .to_compile_error();
            }
            let variant_name = &variant.ident;
            quote! { ::core::matches!(self, Self::#variant_name) }
        }
        [_, second, ..] => {
            return syn::Error::new_spanned(
                &second.ident,
                "#[vacant] can mark at most one variant.",
            )
            .to_compile_error();
        }
    };

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::faultline::Vacancy for #name #type_generics #where_clause {
            #[inline]
            fn is_vacant(&self) -> bool {
                #body
            }
        }
    }
}
