//! Parse a `DeriveInput` into the pieces the code generator needs.

use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Attribute, Data, DeriveInput, Fields, Generics, Ident, Member, Type};

use crate::POINTS_TO_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// Attributes

/// Field level `#[points_to(...)]` options.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[points_to(skip)]`: the field is neither inspected nor listed in the shape.
    pub skip: bool,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(POINTS_TO_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    result.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown `points_to` attribute, expected `skip`"))
                }
            })?;
        }

        Ok(result)
    }
}

/// Returns an error if the type has a `#[repr(packed)]` attribute.
///
/// Fields of packed types cannot be borrowed, so they cannot be inspected.
fn reject_packed(attrs: &[Attribute]) -> syn::Result<()> {
    for attr in attrs {
        if !attr.path().is_ident("repr") {
            continue;
        }
        let mut packed = false;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("packed") {
                packed = true;
            }
            // `align(N)`, `packed(N)` and friends carry a value.
            if meta.input.peek(syn::token::Paren) {
                let _content;
                syn::parenthesized!(_content in meta.input);
            }
            Ok(())
        })?;
        if packed {
            return Err(syn::Error::new(
                attr.span(),
                "`PointsTo` cannot be derived for `repr(packed)` types",
            ));
        }
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Fields

/// A field that takes part in the traversal.
pub(crate) struct ActiveField<'a> {
    /// `self.<member>` accessor.
    pub member: Member,
    /// Name stored in the shape metadata.
    pub name: String,
    pub ty: &'a Type,
}

/// A field as seen from an enum variant pattern.
pub(crate) struct VariantField<'a> {
    pub member: Member,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
}

fn collect_fields(fields: &Fields) -> syn::Result<Vec<VariantField<'_>>> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let member = match &field.ident {
                Some(ident) => Member::Named(ident.clone()),
                None => Member::Unnamed(syn::Index {
                    index: index as u32,
                    span: field.span(),
                }),
            };
            Ok(VariantField {
                member,
                ty: &field.ty,
                attrs: FieldAttributes::parse_attrs(&field.attrs)?,
            })
        })
        .collect()
}

fn member_name(member: &Member) -> String {
    match member {
        Member::Named(ident) => ident.unraw().to_string(),
        Member::Unnamed(index) => index.index.to_string(),
    }
}

// -----------------------------------------------------------------------------
// Input

/// How the fields of a variant are written.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum FieldStyle {
    /// `A { x: T }`
    Named,
    /// `A(T)`
    Unnamed,
    /// `A`
    Unit,
}

impl FieldStyle {
    fn of(fields: &Fields) -> Self {
        match fields {
            Fields::Named(_) => Self::Named,
            Fields::Unnamed(_) => Self::Unnamed,
            Fields::Unit => Self::Unit,
        }
    }
}

/// An enum variant with all of its fields, skipped ones included.
pub(crate) struct EnumVariant<'a> {
    pub ident: &'a Ident,
    pub fields: Vec<VariantField<'a>>,
    pub style: FieldStyle,
}

impl EnumVariant<'_> {
    pub fn active_fields(&self) -> impl Iterator<Item = &VariantField<'_>> {
        self.fields.iter().filter(|field| !field.attrs.skip)
    }
}

pub(crate) enum InputKind<'a> {
    Struct(Vec<ActiveField<'a>>),
    Enum(Vec<EnumVariant<'a>>),
    /// Union members overlap one another and are never inspected.
    Union,
}

pub(crate) struct PointsToInput<'a> {
    pub ident: &'a Ident,
    pub generics: &'a Generics,
    pub kind: InputKind<'a>,
}

impl<'a> PointsToInput<'a> {
    pub fn from_ast(ast: &'a DeriveInput) -> syn::Result<Self> {
        reject_packed(&ast.attrs)?;

        let kind = match &ast.data {
            Data::Struct(data) => {
                let fields = collect_fields(&data.fields)?
                    .into_iter()
                    .filter(|field| !field.attrs.skip)
                    .map(|field| ActiveField {
                        name: member_name(&field.member),
                        member: field.member,
                        ty: field.ty,
                    })
                    .collect();
                InputKind::Struct(fields)
            }
            Data::Enum(data) => {
                let variants = data
                    .variants
                    .iter()
                    .map(|variant| {
                        Ok(EnumVariant {
                            ident: &variant.ident,
                            style: FieldStyle::of(&variant.fields),
                            fields: collect_fields(&variant.fields)?,
                        })
                    })
                    .collect::<syn::Result<Vec<_>>>()?;
                InputKind::Enum(variants)
            }
            Data::Union(data) => {
                for field in &data.fields.named {
                    FieldAttributes::parse_attrs(&field.attrs)?;
                }
                InputKind::Union
            }
        };

        Ok(Self {
            ident: &ast.ident,
            generics: &ast.generics,
            kind,
        })
    }
}

/// Binding used for the `index`-th field in a variant pattern.
pub(crate) fn binding_ident(index: usize) -> Ident {
    Ident::new(&format!("__field_{index}"), Span::call_site())
}
