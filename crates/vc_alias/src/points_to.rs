use core::alloc::Layout;
use core::any::Any;

use vc_ptr::MemRange;

use crate::Shape;

// -----------------------------------------------------------------------------
// PointsTo

/// A type whose in-memory representation can be searched for references.
///
/// The traversal is chosen by [`SHAPE`](PointsTo::SHAPE):
///
/// - [`Shape::Scalar`]: always `false`.
/// - [`Shape::Reference`]: `true` if the referent's address lies in `target`.
/// - [`Shape::Record`] and [`Shape::Sum`]: `true` if any (active) field points into `target`.
/// - [`Shape::FixedAggregate`]: `true` if any element points into `target`.
/// - [`Shape::Buffer`]: `true` if the backing elements overlap `target`.
///   The elements themselves are not searched.
///
/// Implementations must inspect fields through references and never copy,
/// clone or drop them.
///
/// Use `#[derive(PointsTo)]` for structs and enums.
pub trait PointsTo {
    /// The static shape of this type.
    const SHAPE: Shape;

    /// Returns `true` if `self` embeds a reference into `target`.
    fn points_to_range(&self, target: MemRange) -> bool;
}

// -----------------------------------------------------------------------------
// Referent

/// The pointee side of a pointer-like [`PointsTo`] implementation.
///
/// A thin pointer to a sized value is a [`Shape::Reference`], whereas a fat
/// pointer to a slice or `str` is a [`Shape::Buffer`]. This trait selects the
/// rule from the pointee type so that `&T`, `Box<T>`, `Rc<T>` and friends
/// need a single implementation each.
///
/// Trait objects are unsized, so the blanket implementation for sized types
/// does not reach them. `dyn Any` (with or without `Send` and `Sync`) is
/// covered here. Other trait objects follow the same address rule with an
/// implementation in the crate that defines the trait:
///
/// ```
/// use vc_alias::{MemRange, Referent, Shape, points_to};
///
/// trait Sound {
///     fn volume(&self) -> u8;
/// }
///
/// impl Referent for dyn Sound {
///     const POINTER_SHAPE: Shape = Shape::Reference;
///
///     fn is_pointed_in(referent: *const Self, target: MemRange) -> bool {
///         target.contains(referent.addr())
///     }
/// }
///
/// struct Bell(u8);
///
/// impl Sound for Bell {
///     fn volume(&self) -> u8 {
///         self.0
///     }
/// }
///
/// let bell = Bell(3);
/// let sound: &dyn Sound = &bell;
///
/// assert_eq!(sound.volume(), 3);
/// assert!(points_to(&sound, &bell));
/// ```
pub trait Referent {
    /// Shape of a pointer to `Self`.
    const POINTER_SHAPE: Shape;

    /// Returns `true` if a pointer to `referent` points into `target`.
    fn is_pointed_in(referent: *const Self, target: MemRange) -> bool;
}

impl<T> Referent for T {
    const POINTER_SHAPE: Shape = Shape::Reference;

    #[inline]
    fn is_pointed_in(referent: *const Self, target: MemRange) -> bool {
        target.contains(referent.addr())
    }
}

impl<T> Referent for [T] {
    const POINTER_SHAPE: Shape = Shape::Buffer {
        element: Layout::new::<T>(),
    };

    #[inline]
    fn is_pointed_in(referent: *const Self, target: MemRange) -> bool {
        MemRange::of_raw(referent.cast::<T>(), referent.len()).overlaps(target)
    }
}

impl Referent for str {
    const POINTER_SHAPE: Shape = Shape::Buffer {
        element: Layout::new::<u8>(),
    };

    #[inline]
    fn is_pointed_in(referent: *const Self, target: MemRange) -> bool {
        let bytes = referent as *const [u8];
        MemRange::of_raw(bytes.cast::<u8>(), bytes.len()).overlaps(target)
    }
}

macro_rules! impl_dyn_referent {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Referent for $ty {
                const POINTER_SHAPE: Shape = Shape::Reference;

                #[inline]
                fn is_pointed_in(referent: *const Self, target: MemRange) -> bool {
                    target.contains(referent.addr())
                }
            }
        )*
    };
}

impl_dyn_referent!(dyn Any, dyn Any + Send, dyn Any + Send + Sync);

// -----------------------------------------------------------------------------
// Entry points

/// Returns `true` if the representation of `source` embeds a reference whose
/// target lies in the storage of `target`.
///
/// The storage of `target` is the bytes of the value it denotes: for a sized
/// value its `size_of` bytes, for a slice or `str` the viewed elements. A
/// buffer handle passed as `target` (`&Vec<T>`, `&&[T]`) denotes the handle
/// itself, not its elements.
///
/// # Examples
///
/// ```
/// use vc_alias::points_to;
///
/// let buffer = vec![10, 20, 30, 40];
///
/// // A buffer points to its elements.
/// assert!(points_to(&buffer, &buffer[2]));
/// assert!(!points_to(&buffer[0..3], &buffer[3]));
/// assert!(points_to(&buffer[0..3], &buffer[2]));
///
/// // A handle does not point to itself, but views of one storage overlap.
/// assert!(!points_to(&buffer, &buffer));
/// assert!(points_to(&buffer[1..], &buffer[..]));
///
/// // Equal contents are not aliasing.
/// let other = buffer.clone();
/// assert!(!points_to(&buffer, &other[..]));
/// ```
#[inline]
pub fn points_to<S, T>(source: &S, target: &T) -> bool
where
    S: PointsTo + ?Sized,
    T: ?Sized,
{
    let range = MemRange::of_val(target);
    log::trace!(
        "points_to: {} source at {:#x} against {range}",
        S::SHAPE.kind(),
        vc_ptr::address_of(source),
    );
    source.points_to_range(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thin_referent_contains_start() {
        let pair = [1u32, 2u32];
        let whole = MemRange::of_val(&pair);
        let second = MemRange::of_val(&pair[1]);

        assert!(<[u32; 2] as Referent>::is_pointed_in(&pair, whole));
        // the array starts before its second element
        assert!(!<[u32; 2] as Referent>::is_pointed_in(&pair, second));
        assert!(<u32 as Referent>::is_pointed_in(&pair[1], whole));
    }

    #[test]
    fn fat_referent_overlaps() {
        let data = [1u8, 2, 3, 4, 5, 6];
        let tail = MemRange::of_val(&data[4..]);

        assert!(<[u8] as Referent>::is_pointed_in(&data[3..5], tail));
        assert!(!<[u8] as Referent>::is_pointed_in(&data[..4], tail));
        assert!(!<[u8] as Referent>::is_pointed_in(&data[4..4], tail));

        let text = "abcdef";
        assert!(<str as Referent>::is_pointed_in(&text[2..], MemRange::of_val(&text.as_bytes()[5])));
        assert!(!<str as Referent>::is_pointed_in(&text[..2], MemRange::of_val(&text.as_bytes()[5])));
    }

    #[test]
    fn trait_objects_use_the_address() {
        use alloc::boxed::Box;

        let value = 7u64;
        let other = 7u64;
        let erased: &dyn Any = &value;
        let boxed: Box<dyn Any + Send> = Box::new(1u8);

        assert_eq!(<dyn Any as Referent>::POINTER_SHAPE.kind(), crate::ShapeKind::Reference);
        assert!(crate::points_to(&erased, &value));
        assert!(!crate::points_to(&erased, &other));
        assert!(crate::points_to(&boxed, boxed.downcast_ref::<u8>().unwrap()));
    }
}
