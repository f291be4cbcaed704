//! Derive macro for the `vc_alias` crate.
//!
//! See [`PointsTo`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static POINTS_TO_ATTRIBUTE_NAME: &str = "points_to";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Points-to Derivation
///
/// `#[derive(PointsTo)]` implements `PointsTo` for structs, enums and unions.
///
/// - Structs become a `Shape::Record`. Every field is inspected in
///   declaration order and the query is `true` as soon as one field points
///   into the target.
/// - Enums become a `Shape::Sum`. Only the fields of the active variant are
///   inspected.
/// - Unions become an empty record. Their members share storage and the
///   active one is unknown, so a union never points to anything.
///
/// Every type parameter receives a `PointsTo` bound. Field types are not
/// bounded, which keeps recursive types such as `struct Node { children: Vec<Node> }`
/// derivable.
///
/// ## Skipping fields
///
/// `#[points_to(skip)]` removes a field from both the traversal and the
/// shape metadata. Its type does not need to implement `PointsTo`.
///
/// ```rust, ignore
/// #[derive(PointsTo)]
/// struct Entry<'a> {
///     key: &'a str,
///     #[points_to(skip)]
///     handle: std::fs::File,
/// }
/// ```
///
/// ## Restrictions
///
/// `#[repr(packed)]` types are rejected because their fields cannot be
/// borrowed.
#[proc_macro_derive(PointsTo, attributes(points_to))]
pub fn derive_points_to(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::PointsToInput::from_ast(&ast) {
        Ok(input) => impls::impl_points_to(&input).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
