use core::cell::Cell;
use core::cmp::Reverse;
use core::mem::{ManuallyDrop, offset_of};
use core::num::{Saturating, Wrapping};

use vc_ptr::MemRange;

use crate::{Field, PointsTo, Shape, Variant, shape_of};

// -----------------------------------------------------------------------------
// Arrays

impl<T: PointsTo, const N: usize> PointsTo for [T; N] {
    const SHAPE: Shape = Shape::FixedAggregate {
        element: shape_of::<T>,
        len: N,
    };

    #[inline]
    fn points_to_range(&self, target: MemRange) -> bool {
        self.iter().any(|element| element.points_to_range(target))
    }
}

// -----------------------------------------------------------------------------
// Tuples

macro_rules! impl_tuple {
    ($($index:tt: $ty:ident),+) => {
        impl<$($ty: PointsTo),+> PointsTo for ($($ty,)+) {
            const SHAPE: Shape = Shape::Record {
                fields: &[$(
                    Field {
                        name: stringify!($index),
                        offset: offset_of!(Self, $index),
                        shape: shape_of::<$ty>,
                    },
                )+],
            };

            #[inline]
            fn points_to_range(&self, target: MemRange) -> bool {
                $(self.$index.points_to_range(target))||+
            }
        }
    };
}

impl_tuple!(0: P0);
impl_tuple!(0: P0, 1: P1);
impl_tuple!(0: P0, 1: P1, 2: P2);
impl_tuple!(0: P0, 1: P1, 2: P2, 3: P3);
impl_tuple!(0: P0, 1: P1, 2: P2, 3: P3, 4: P4);
impl_tuple!(0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5);
impl_tuple!(0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6);
impl_tuple!(0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7);
impl_tuple!(0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7, 8: P8);
impl_tuple!(0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7, 8: P8, 9: P9);
impl_tuple!(0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7, 8: P8, 9: P9, 10: P10);
impl_tuple!(0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7, 8: P8, 9: P9, 10: P10, 11: P11);

// -----------------------------------------------------------------------------
// Sums

impl<T: PointsTo> PointsTo for Option<T> {
    const SHAPE: Shape = Shape::Sum {
        variants: &[
            Variant {
                name: "None",
                fields: &[],
            },
            Variant {
                name: "Some",
                fields: &[shape_of::<T>],
            },
        ],
    };

    #[inline]
    fn points_to_range(&self, target: MemRange) -> bool {
        match self {
            Some(value) => value.points_to_range(target),
            None => false,
        }
    }
}

impl<T: PointsTo, E: PointsTo> PointsTo for Result<T, E> {
    const SHAPE: Shape = Shape::Sum {
        variants: &[
            Variant {
                name: "Ok",
                fields: &[shape_of::<T>],
            },
            Variant {
                name: "Err",
                fields: &[shape_of::<E>],
            },
        ],
    };

    #[inline]
    fn points_to_range(&self, target: MemRange) -> bool {
        match self {
            Ok(value) => value.points_to_range(target),
            Err(error) => error.points_to_range(target),
        }
    }
}

// -----------------------------------------------------------------------------
// Transparent wrappers

macro_rules! impl_transparent {
    ($($wrapper:ident),* $(,)?) => {
        $(
            impl<T: PointsTo> PointsTo for $wrapper<T> {
                const SHAPE: Shape = T::SHAPE;

                #[inline]
                fn points_to_range(&self, target: MemRange) -> bool {
                    self.0.points_to_range(target)
                }
            }
        )*
    };
}

impl_transparent!(Wrapping, Saturating, Reverse);

/// Inspected through `Deref`; the value is never dropped.
impl<T: PointsTo + ?Sized> PointsTo for ManuallyDrop<T> {
    const SHAPE: Shape = T::SHAPE;

    #[inline]
    fn points_to_range(&self, target: MemRange) -> bool {
        (**self).points_to_range(target)
    }
}

/// `Cell` only hands out copies, which for `Copy` types are plain bit copies
/// holding the same addresses.
impl<T: PointsTo + Copy> PointsTo for Cell<T> {
    const SHAPE: Shape = T::SHAPE;

    #[inline]
    fn points_to_range(&self, target: MemRange) -> bool {
        self.get().points_to_range(target)
    }
}
