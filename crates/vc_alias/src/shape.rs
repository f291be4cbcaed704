use core::alloc::Layout;
use core::fmt;

use crate::PointsTo;

/// Lazily resolved nested shape.
///
/// Nested shapes are stored as function pointers rather than references so
/// that recursive types (a node owning a `Vec` of nodes) do not form a cycle
/// during constant evaluation.
pub type ShapeFn = fn() -> &'static Shape;

/// Returns the static [`Shape`] of `T`.
///
/// # Examples
///
/// ```
/// use vc_alias::{ShapeKind, shape_of};
///
/// assert_eq!(shape_of::<u32>().kind(), ShapeKind::Scalar);
/// assert_eq!(shape_of::<&u32>().kind(), ShapeKind::Reference);
/// assert_eq!(shape_of::<[&u32; 4]>().kind(), ShapeKind::FixedAggregate);
/// assert_eq!(shape_of::<Vec<u32>>().kind(), ShapeKind::Buffer);
/// assert_eq!(shape_of::<Vec<std::fs::File>>().kind(), ShapeKind::Buffer);
/// ```
#[inline]
pub fn shape_of<T: PointsTo + ?Sized>() -> &'static Shape {
    &T::SHAPE
}

/// The structural classification of a type that drives the points-to traversal.
///
/// Every [`PointsTo`] implementation carries its shape as an associated
/// constant, so the classification is fixed at compile time.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    /// A value with no embedded references. Never points to anything.
    Scalar,
    /// A thin pointer. Points to a target if its address lies in the target.
    Reference,
    /// A struct or tuple. Fields are inspected in declaration order.
    Record { fields: &'static [Field] },
    /// An enum. Only the fields of the active variant are inspected.
    Sum { variants: &'static [Variant] },
    /// A `[T; N]` array owning its elements.
    FixedAggregate { element: ShapeFn, len: usize },
    /// A handle to a contiguous run of elements stored elsewhere.
    ///
    /// Only the run itself is compared with the target, never the elements,
    /// so only the element layout is recorded.
    Buffer { element: Layout },
}

/// A named field of a [`Shape::Record`].
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// Field name, or its index for tuple-like records.
    pub name: &'static str,
    /// Byte offset from the start of the record.
    pub offset: usize,
    pub shape: ShapeFn,
}

/// A variant of a [`Shape::Sum`].
#[derive(Debug, Clone, Copy)]
pub struct Variant {
    pub name: &'static str,
    /// Field shapes in declaration order. Variant payload offsets are not exposed.
    pub fields: &'static [ShapeFn],
}

/// Fieldless summary of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Scalar,
    Reference,
    Record,
    Sum,
    FixedAggregate,
    Buffer,
}

impl Shape {
    /// Returns the variant of this shape without its payload.
    #[inline]
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Shape::Scalar => ShapeKind::Scalar,
            Shape::Reference => ShapeKind::Reference,
            Shape::Record { .. } => ShapeKind::Record,
            Shape::Sum { .. } => ShapeKind::Sum,
            Shape::FixedAggregate { .. } => ShapeKind::FixedAggregate,
            Shape::Buffer { .. } => ShapeKind::Buffer,
        }
    }

    /// Returns `true` if a value of this shape can never point to anything.
    ///
    /// Records and sums are scalar-like when all of their fields are.
    /// Arrays are scalar-like when empty or when their element is.
    pub fn is_scalar_like(&self) -> bool {
        match self {
            Shape::Scalar => true,
            Shape::Reference | Shape::Buffer { .. } => false,
            Shape::Record { fields } => fields.iter().all(|f| (f.shape)().is_scalar_like()),
            Shape::Sum { variants } => variants
                .iter()
                .all(|v| v.fields.iter().all(|f| f().is_scalar_like())),
            Shape::FixedAggregate { element, len } => *len == 0 || element().is_scalar_like(),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShapeKind::Scalar => "scalar",
            ShapeKind::Reference => "reference",
            ShapeKind::Record => "record",
            ShapeKind::Sum => "sum",
            ShapeKind::FixedAggregate => "fixed aggregate",
            ShapeKind::Buffer => "buffer",
        })
    }
}
