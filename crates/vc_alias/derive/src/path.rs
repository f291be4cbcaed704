//! Paths of the `vc_alias` items used by generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the correct access path to the `vc_alias` crate.
///
/// 1. For crates that depend on `vc_alias`, `::vc_alias` is returned.
/// 2. For crates that depend on `vc_except`, `::vc_except::alias` is returned.
/// 3. Otherwise `::vc_alias` is returned, which resolves inside `vc_alias`
///    itself through `extern crate self as vc_alias`.
///
/// Reading the manifest is not cheap, so call this once per derive.
pub(crate) fn vc_alias() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_alias"))
}

#[inline(always)]
pub(crate) fn points_to_(vc_alias_path: &syn::Path) -> TokenStream {
    quote! { #vc_alias_path::PointsTo }
}

#[inline(always)]
pub(crate) fn shape_(vc_alias_path: &syn::Path) -> TokenStream {
    quote! { #vc_alias_path::Shape }
}

#[inline(always)]
pub(crate) fn field_(vc_alias_path: &syn::Path) -> TokenStream {
    quote! { #vc_alias_path::Field }
}

#[inline(always)]
pub(crate) fn variant_(vc_alias_path: &syn::Path) -> TokenStream {
    quote! { #vc_alias_path::Variant }
}

#[inline(always)]
pub(crate) fn shape_of_(vc_alias_path: &syn::Path) -> TokenStream {
    quote! { #vc_alias_path::shape_of }
}

#[inline(always)]
pub(crate) fn mem_range_(vc_alias_path: &syn::Path) -> TokenStream {
    quote! { #vc_alias_path::MemRange }
}
