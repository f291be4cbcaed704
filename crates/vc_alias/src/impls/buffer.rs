use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;
use core::alloc::Layout;

use vc_ptr::MemRange;

use crate::{PointsTo, Shape};

// Buffers compare their backing storage with the target and never look at
// the elements. A buffer of references therefore does not point to the
// referents of its elements, and the element type needs no `PointsTo`.

impl<T> PointsTo for [T] {
    const SHAPE: Shape = Shape::Buffer {
        element: Layout::new::<T>(),
    };

    #[inline]
    fn points_to_range(&self, target: MemRange) -> bool {
        MemRange::of_val(self).overlaps(target)
    }
}

impl PointsTo for str {
    const SHAPE: Shape = Shape::Buffer {
        element: Layout::new::<u8>(),
    };

    #[inline]
    fn points_to_range(&self, target: MemRange) -> bool {
        MemRange::of_val(self).overlaps(target)
    }
}

/// Only the initialized `len` elements count, not the spare capacity.
impl<T> PointsTo for Vec<T> {
    const SHAPE: Shape = Shape::Buffer {
        element: Layout::new::<T>(),
    };

    #[inline]
    fn points_to_range(&self, target: MemRange) -> bool {
        self.as_slice().points_to_range(target)
    }
}

impl PointsTo for String {
    const SHAPE: Shape = Shape::Buffer {
        element: Layout::new::<u8>(),
    };

    #[inline]
    fn points_to_range(&self, target: MemRange) -> bool {
        self.as_str().points_to_range(target)
    }
}

/// A ring buffer may be split in two runs; either one can overlap.
impl<T> PointsTo for VecDeque<T> {
    const SHAPE: Shape = Shape::Buffer {
        element: Layout::new::<T>(),
    };

    #[inline]
    fn points_to_range(&self, target: MemRange) -> bool {
        let (front, back) = self.as_slices();
        front.points_to_range(target) || back.points_to_range(target)
    }
}

#[cfg(test)]
mod tests {
    use crate::points_to;
    use alloc::collections::VecDeque;
    use alloc::string::String;
    use alloc::{boxed::Box, vec, vec::Vec};

    #[test]
    fn buffer_scenario() {
        let buffer = vec![10, 20, 30, 40];

        assert!(points_to(&buffer, &buffer[2]));
        assert!(!points_to(&buffer[0..3], &buffer[3]));
        assert!(points_to(&buffer[0..3], &buffer[2]));
    }

    #[test]
    fn self_and_sub_slices() {
        let a = vec![1u8, 2, 3, 4, 5];
        let s = &a[1..3];

        // the handle lives on the stack, away from its elements
        assert!(!points_to(&a, &a));
        // views of the same storage alias each other
        assert!(points_to(&a[..], &a[..]));
        assert!(points_to(s, &a[..]));
        assert!(points_to(&a[..], s));
        assert!(points_to(&a, s));
        // disjoint sub-slices of one buffer do not
        assert!(!points_to(&a[..2], &a[2..]));
    }

    #[test]
    fn equal_contents_are_not_aliasing() {
        let a = vec![7u32; 8];
        let b = vec![7u32; 8];

        assert_eq!(a, b);
        assert!(!points_to(&a, &b[..]));
        assert!(!points_to(&a[..], &b[2..4]));
        assert!(!points_to(&b, &a[0]));
    }

    #[test]
    fn elements_are_not_searched() {
        let referent = 5i32;
        let refs = vec![&referent];
        let boxes: Vec<Box<i32>> = vec![Box::new(1)];

        assert!(!points_to(&refs, &referent));
        assert!(!points_to(&boxes, &*boxes[0]));
        assert!(points_to(&refs, &refs[0]));
    }

    #[test]
    fn empty_buffers() {
        let empty: Vec<u64> = Vec::with_capacity(4);
        let zst = vec![(); 16];

        assert!(!points_to(&empty, &empty[..]));
        assert!(!points_to(&zst, &zst[..]));
    }

    #[test]
    fn strings() {
        let text = String::from("hello world");
        let word = &text[6..];

        assert!(points_to(&text, word));
        assert!(points_to(word, &text.as_bytes()[6]));
        assert!(!points_to(&text[..5], word));
        assert!(!points_to(&text, &text));
    }

    #[test]
    fn split_ring_buffer() {
        let mut ring: VecDeque<u16> = VecDeque::with_capacity(4);
        ring.extend([1, 2, 3, 4]);
        ring.pop_front();
        ring.pop_front();
        ring.extend([5, 6]);

        let (front, back) = ring.as_slices();
        assert!(points_to(&ring, front));
        assert!(points_to(&ring, &ring[3]));
        if !back.is_empty() {
            assert!(points_to(&ring, back));
        }
    }

    #[test]
    fn elements_need_no_points_to() {
        struct Opaque(u32);

        let v = vec![Opaque(1), Opaque(2)];
        let view: &[Opaque] = &v[1..];
        let boxed: Box<[Opaque]> = Box::new([Opaque(3)]);
        let ring: VecDeque<Opaque> = VecDeque::from([Opaque(4)]);

        assert_eq!(v[0].0 + view[0].0 + boxed[0].0 + ring[0].0, 10);
        assert!(points_to(&v, &v[0]));
        assert!(!points_to(&v[..1], &v[1]));
        assert!(points_to(&view, &v[1]));
        assert!(!points_to(&view, &v[0]));
        assert!(points_to(&boxed, &boxed[0]));
        assert!(points_to(&ring, &ring[0]));
        assert!(!points_to(&v, &v));
    }
}
