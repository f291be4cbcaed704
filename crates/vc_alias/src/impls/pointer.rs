use alloc::boxed::Box;
use alloc::{rc, sync};
use core::ops::Deref;
use core::pin::Pin;
use core::ptr::NonNull;

use vc_ptr::MemRange;

use crate::{PointsTo, Referent, Shape};

// Every pointer here defers to the pointee's `Referent` impl, which picks
// the thin (address) or fat (range) rule.

impl<T: Referent + ?Sized> PointsTo for &T {
    const SHAPE: Shape = T::POINTER_SHAPE;

    #[inline]
    fn points_to_range(&self, target: MemRange) -> bool {
        T::is_pointed_in(*self, target)
    }
}

impl<T: Referent + ?Sized> PointsTo for &mut T {
    const SHAPE: Shape = T::POINTER_SHAPE;

    #[inline]
    fn points_to_range(&self, target: MemRange) -> bool {
        T::is_pointed_in(&**self, target)
    }
}

impl<T: Referent + ?Sized> PointsTo for *const T {
    const SHAPE: Shape = T::POINTER_SHAPE;

    #[inline]
    fn points_to_range(&self, target: MemRange) -> bool {
        T::is_pointed_in(*self, target)
    }
}

impl<T: Referent + ?Sized> PointsTo for *mut T {
    const SHAPE: Shape = T::POINTER_SHAPE;

    #[inline]
    fn points_to_range(&self, target: MemRange) -> bool {
        T::is_pointed_in(self.cast_const(), target)
    }
}

impl<T: Referent + ?Sized> PointsTo for NonNull<T> {
    const SHAPE: Shape = T::POINTER_SHAPE;

    #[inline]
    fn points_to_range(&self, target: MemRange) -> bool {
        T::is_pointed_in(self.as_ptr().cast_const(), target)
    }
}

impl<T: Referent + ?Sized> PointsTo for Box<T> {
    const SHAPE: Shape = T::POINTER_SHAPE;

    #[inline]
    fn points_to_range(&self, target: MemRange) -> bool {
        T::is_pointed_in(&**self, target)
    }
}

impl<T: Referent + ?Sized> PointsTo for rc::Rc<T> {
    const SHAPE: Shape = T::POINTER_SHAPE;

    #[inline]
    fn points_to_range(&self, target: MemRange) -> bool {
        T::is_pointed_in(rc::Rc::as_ptr(self), target)
    }
}

impl<T: Referent + ?Sized> PointsTo for rc::Weak<T> {
    const SHAPE: Shape = T::POINTER_SHAPE;

    #[inline]
    fn points_to_range(&self, target: MemRange) -> bool {
        T::is_pointed_in(self.as_ptr(), target)
    }
}

impl<T: Referent + ?Sized> PointsTo for sync::Arc<T> {
    const SHAPE: Shape = T::POINTER_SHAPE;

    #[inline]
    fn points_to_range(&self, target: MemRange) -> bool {
        T::is_pointed_in(sync::Arc::as_ptr(self), target)
    }
}

impl<T: Referent + ?Sized> PointsTo for sync::Weak<T> {
    const SHAPE: Shape = T::POINTER_SHAPE;

    #[inline]
    fn points_to_range(&self, target: MemRange) -> bool {
        T::is_pointed_in(self.as_ptr(), target)
    }
}

impl<P> PointsTo for Pin<P>
where
    P: Deref,
    P::Target: Referent,
{
    const SHAPE: Shape = <P::Target as Referent>::POINTER_SHAPE;

    #[inline]
    fn points_to_range(&self, target: MemRange) -> bool {
        <P::Target as Referent>::is_pointed_in(&**self, target)
    }
}

/// The pointer is loaded once with `Relaxed` ordering.
#[cfg(target_has_atomic = "ptr")]
impl<T> PointsTo for core::sync::atomic::AtomicPtr<T> {
    const SHAPE: Shape = Shape::Reference;

    #[inline]
    fn points_to_range(&self, target: MemRange) -> bool {
        use core::sync::atomic::Ordering;

        T::is_pointed_in(self.load(Ordering::Relaxed).cast_const(), target)
    }
}
