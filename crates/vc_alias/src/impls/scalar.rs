use core::marker::{PhantomData, PhantomPinned};
use core::num::{NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize};
use core::num::{NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize};
use core::time::Duration;

use vc_ptr::MemRange;

use crate::{PointsTo, Shape};

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PointsTo for $ty {
                const SHAPE: Shape = Shape::Scalar;

                #[inline(always)]
                fn points_to_range(&self, _target: MemRange) -> bool {
                    false
                }
            }
        )*
    };
}

impl_scalar!(
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64, bool, char, (),
    NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize,
    Duration, PhantomPinned, core::cmp::Ordering, core::any::TypeId,
);

// Atomic integers hold no addresses. `AtomicPtr` lives in `pointer`.

#[cfg(target_has_atomic = "8")]
impl_scalar!(
    core::sync::atomic::AtomicBool,
    core::sync::atomic::AtomicU8,
    core::sync::atomic::AtomicI8,
);

#[cfg(target_has_atomic = "16")]
impl_scalar!(core::sync::atomic::AtomicU16, core::sync::atomic::AtomicI16);

#[cfg(target_has_atomic = "32")]
impl_scalar!(core::sync::atomic::AtomicU32, core::sync::atomic::AtomicI32);

#[cfg(target_has_atomic = "64")]
impl_scalar!(core::sync::atomic::AtomicU64, core::sync::atomic::AtomicI64);

#[cfg(target_has_atomic = "ptr")]
impl_scalar!(core::sync::atomic::AtomicUsize, core::sync::atomic::AtomicIsize);

impl<T: ?Sized> PointsTo for PhantomData<T> {
    const SHAPE: Shape = Shape::Scalar;

    #[inline(always)]
    fn points_to_range(&self, _target: MemRange) -> bool {
        false
    }
}
