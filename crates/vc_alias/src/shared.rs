#![expect(unsafe_code, reason = "Reinterpreting `&T` as `&Shared<T>` requires a pointer cast.")]

//! The shared-access overlay of the detector.

use core::fmt;

use vc_ptr::MemRange;

use crate::{PointsTo, Shape};

/// Tags a value as shared between threads.
///
/// `Shared<T>` has the layout of `T` and the same [`Shape`], so a query
/// through the tag inspects exactly the bytes an untagged query would.
/// It adds no synchronization: the borrow rules (or the caller, for data
/// behind raw pointers) must keep both operands unmodified for the duration
/// of a query.
///
/// # Example
///
/// ```
/// use vc_alias::{Shared, points_to};
///
/// let whole = Shared::new([1u32, 2, 3, 4]);
/// let part: Shared<&[u32]> = Shared::new(&whole.get()[1..3]);
///
/// assert!(points_to(&part, &whole));
/// ```
#[repr(transparent)]
pub struct Shared<T: ?Sized> {
    inner: T,
}

impl<T> Shared<T> {
    /// Wrap a value in a `Shared`.
    #[must_use]
    #[inline(always)]
    pub const fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Unwrap the value contained in the `Shared`.
    #[must_use]
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Sync + ?Sized> Shared<T> {
    /// Reinterpret a shared reference to `T` as a reference to `Shared<T>`.
    #[must_use]
    #[inline]
    pub const fn from_ref(r: &T) -> &Shared<T> {
        // SAFETY: `Shared` is `repr(transparent)` over `T`, so both references
        // have the same layout and metadata. Only shared access is handed out.
        unsafe { &*(r as *const T as *const Shared<T>) }
    }

    /// Shared access to the tagged value.
    #[must_use]
    #[inline(always)]
    pub const fn get(&self) -> &T {
        &self.inner
    }
}

impl<T: ?Sized> Shared<T> {
    /// Exclusive access to the tagged value.
    #[must_use]
    #[inline(always)]
    pub const fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T> From<T> for Shared<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Clone> Clone for Shared<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<T: Copy> Copy for Shared<T> {}

impl<T: fmt::Debug + ?Sized> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&&self.inner).finish()
    }
}

impl<T: PointsTo + ?Sized> PointsTo for Shared<T> {
    const SHAPE: Shape = T::SHAPE;

    #[inline]
    fn points_to_range(&self, target: MemRange) -> bool {
        self.inner.points_to_range(target)
    }
}

/// [`points_to`](crate::points_to) for operands that may be visible to
/// several threads.
///
/// Both operands are reinterpreted as [`Shared`] and the query is forwarded
/// to the ordinary dispatch. The result is identical to the untagged query.
///
/// # Example
///
/// ```
/// use vc_alias::points_to_shared;
/// use std::sync::Arc;
///
/// let table: Arc<[u64]> = Arc::from([1, 2, 3]);
/// let second = &table[1];
///
/// assert!(points_to_shared(&table, second));
/// assert!(!points_to_shared(&second, &table));
/// ```
#[inline]
pub fn points_to_shared<S, T>(source: &S, target: &T) -> bool
where
    S: PointsTo + Sync + ?Sized,
    T: Sync + ?Sized,
{
    log::trace!("points_to_shared: forwarding under the shared tag");
    crate::points_to(Shared::from_ref(source), Shared::from_ref(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ShapeKind, points_to, shape_of};
    use alloc::{sync::Arc, vec::Vec};

    #[test]
    fn same_answer_as_plain_query() {
        let data: Vec<u32> = (0..8).collect();
        let view = &data[2..5];
        let elem = &data[6];

        assert_eq!(points_to_shared(&data, view), points_to(&data, view));
        assert_eq!(points_to_shared(view, elem), points_to(view, elem));
        assert_eq!(points_to_shared(&elem, &data[6]), points_to(&elem, &data[6]));
        assert!(points_to_shared(view, &data[..]));
        assert!(!points_to_shared(view, elem));
    }

    #[test]
    fn shared_sub_range_of_shared_whole() {
        let whole = Shared::new([1u8, 2, 3, 4, 5]);
        let part = Shared::new(&whole.get()[3..]);
        let elsewhere = Shared::new([1u8, 2, 3, 4, 5]);

        assert!(points_to(&part, &whole));
        assert!(points_to_shared(&part, &whole));
        assert!(!points_to(&part, &elsewhere));
        assert!(!points_to(&whole, &whole));
    }

    #[test]
    fn layout_and_shape_forwarding() {
        let value = 5u16;
        let shared = Shared::from_ref(&value);

        assert_eq!(MemRange::of_val(shared), MemRange::of_val(&value));
        assert_eq!(shape_of::<Shared<&u16>>().kind(), ShapeKind::Reference);
        assert_eq!(shape_of::<Shared<[u16]>>().kind(), ShapeKind::Buffer);
    }

    #[test]
    fn reference_counted() {
        let a: Arc<[u8]> = Arc::from(&b"shared"[..]);
        let b = Arc::clone(&a);
        let c: Arc<[u8]> = Arc::from(&b"shared"[..]);

        assert!(points_to_shared(&a, &b[..]));
        assert!(!points_to_shared(&a, &c[..]));
        assert_eq!(Shared::new(7).into_inner(), 7);
    }
}
