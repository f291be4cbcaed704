//! Points-to detection: does one value's representation hold a reference
//! into another value's storage?
//!
//! The answer is computed from addresses alone. Nothing is read through the
//! inspected references, and no sub-object is copied, cloned or dropped.
//!
//! **points_to**
//!
//! [`points_to`] dispatches on the [`Shape`] of the source type:
//!
//! | shape | source types | rule |
//! |-------|--------------|------|
//! | scalar | numbers, `bool`, `char`, atomics | never |
//! | reference | `&T`, `*const T`, `Box<T>`, `Rc<T>`, `Arc<T>`, ... | referent address in target |
//! | record / sum | tuples, `Option`, derived structs and enums | any field |
//! | fixed aggregate | `[T; N]` | any element |
//! | buffer | `[T]`, `str`, `Vec<T>`, `String`, `&[T]`, `Box<[T]>`, ... | backing range overlaps target |
//!
//! Buffers compare only their own backing range, they do not search their
//! elements. Records and arrays do search theirs.
//!
//! ```
//! use vc_alias::{PointsTo, points_to};
//!
//! #[derive(PointsTo)]
//! struct Cursor<'a> {
//!     line: usize,
//!     text: &'a str,
//! }
//!
//! let source = String::from("fn main() {}");
//! let cursor = Cursor { line: 1, text: &source[3..] };
//!
//! assert!(points_to(&cursor, &source.as_bytes()[5]));
//! assert!(!points_to(&cursor, &source.as_bytes()[0]));
//! assert!(!points_to(&cursor, &cursor));
//! ```
//!
//! **Shared**
//!
//! [`Shared<T>`] tags a value as visible to several threads and
//! [`points_to_shared`] runs a query under that tag.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

// Lets the derive macro refer to `::vc_alias` from inside this crate.
extern crate self as vc_alias;

// -----------------------------------------------------------------------------
// Modules

mod impls;
mod points_to;
mod shape;
mod shared;

// -----------------------------------------------------------------------------
// Top-level exports

pub use points_to::{PointsTo, Referent, points_to};
pub use shape::{Field, Shape, ShapeFn, ShapeKind, Variant, shape_of};
pub use shared::{Shared, points_to_shared};

pub use vc_alias_derive::PointsTo;

pub use vc_ptr::MemRange;
