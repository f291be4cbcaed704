use proc_macro2::TokenStream;
use quote::quote;
use syn::{Generics, parse_quote};

use crate::derive_data::{ActiveField, EnumVariant, FieldStyle, InputKind, PointsToInput};
use crate::derive_data::binding_ident;
use crate::path;

/// Add a `PointsTo` bound to every type parameter.
///
/// Field types are not bounded directly, so recursive types such as
/// `struct Node { children: Vec<Node> }` do not overflow the trait solver.
fn add_trait_bounds(generics: &Generics, points_to_: &TokenStream) -> Generics {
    let mut generics = generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(#points_to_));
    }
    generics
}

/// Generate the full `PointsTo` implementation.
pub(crate) fn impl_points_to(input: &PointsToInput) -> TokenStream {
    let vc_alias_path = path::vc_alias();
    let points_to_ = path::points_to_(&vc_alias_path);
    let shape_ = path::shape_(&vc_alias_path);
    let mem_range_ = path::mem_range_(&vc_alias_path);

    let (shape_tokens, body_tokens) = match &input.kind {
        InputKind::Struct(fields) => (
            get_record_shape(&vc_alias_path, fields),
            get_record_body(&points_to_, fields),
        ),
        InputKind::Enum(variants) => (
            get_sum_shape(&vc_alias_path, variants),
            get_sum_body(&points_to_, variants),
        ),
        InputKind::Union => (quote! { #shape_::Record { fields: &[] } }, quote! { false }),
    };

    // Keep `target` used when nothing is inspected.
    let inspects_nothing = match &input.kind {
        InputKind::Struct(fields) => fields.is_empty(),
        InputKind::Enum(variants) => variants.iter().all(|v| v.active_fields().next().is_none()),
        InputKind::Union => true,
    };
    let body_tokens = if inspects_nothing {
        quote! {
            let _ = target;
            #body_tokens
        }
    } else {
        body_tokens
    };

    let ident = input.ident;
    let generics = add_trait_bounds(input.generics, &points_to_);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #points_to_ for #ident #ty_generics #where_clause {
            const SHAPE: #shape_ = #shape_tokens;

            #[inline]
            fn points_to_range(&self, target: #mem_range_) -> bool {
                #body_tokens
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Structs

fn get_record_shape(vc_alias_path: &syn::Path, fields: &[ActiveField]) -> TokenStream {
    let shape_ = path::shape_(vc_alias_path);
    let field_ = path::field_(vc_alias_path);
    let shape_of_ = path::shape_of_(vc_alias_path);

    let entries = fields.iter().map(|field| {
        let ActiveField { member, name, ty } = field;
        quote! {
            #field_ {
                name: #name,
                offset: ::core::mem::offset_of!(Self, #member),
                shape: #shape_of_::<#ty>,
            }
        }
    });

    quote! {
        #shape_::Record {
            fields: &[#(#entries),*],
        }
    }
}

fn get_record_body(points_to_: &TokenStream, fields: &[ActiveField]) -> TokenStream {
    if fields.is_empty() {
        return quote! { false };
    }

    let checks = fields.iter().map(|field| {
        let member = &field.member;
        quote! { #points_to_::points_to_range(&self.#member, target) }
    });

    quote! { #(#checks)||* }
}

// -----------------------------------------------------------------------------
// Enums

fn get_sum_shape(vc_alias_path: &syn::Path, variants: &[EnumVariant]) -> TokenStream {
    let shape_ = path::shape_(vc_alias_path);
    let variant_ = path::variant_(vc_alias_path);
    let shape_of_ = path::shape_of_(vc_alias_path);

    let entries = variants.iter().map(|variant| {
        let name = variant.ident.to_string();
        let field_shapes = variant.active_fields().map(|field| {
            let ty = field.ty;
            quote! { #shape_of_::<#ty> }
        });
        quote! {
            #variant_ {
                name: #name,
                fields: &[#(#field_shapes),*],
            }
        }
    });

    quote! {
        #shape_::Sum {
            variants: &[#(#entries),*],
        }
    }
}

fn get_sum_body(points_to_: &TokenStream, variants: &[EnumVariant]) -> TokenStream {
    if variants.is_empty() {
        return quote! { match *self {} };
    }

    let arms = variants.iter().map(|variant| {
        let ident = variant.ident;

        let mut patterns = Vec::with_capacity(variant.fields.len());
        let mut checks = Vec::new();
        for (index, field) in variant.fields.iter().enumerate() {
            let binding = binding_ident(index);
            let member = &field.member;
            let named = variant.style == FieldStyle::Named;
            match (field.attrs.skip, named) {
                (true, true) => patterns.push(quote! { #member: _ }),
                (true, false) => patterns.push(quote! { _ }),
                (false, true) => patterns.push(quote! { #member: #binding }),
                (false, false) => patterns.push(quote! { #binding }),
            }
            if !field.attrs.skip {
                checks.push(quote! { #points_to_::points_to_range(#binding, target) });
            }
        }

        let pattern = match variant.style {
            FieldStyle::Named => quote! { Self::#ident { #(#patterns),* } },
            FieldStyle::Unnamed => quote! { Self::#ident ( #(#patterns),* ) },
            FieldStyle::Unit => quote! { Self::#ident },
        };

        let body = if checks.is_empty() {
            quote! { false }
        } else {
            quote! { #(#checks)||* }
        };

        quote! { #pattern => #body, }
    });

    quote! {
        match self {
            #(#arms)*
        }
    }
}
