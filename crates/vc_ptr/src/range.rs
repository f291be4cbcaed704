use core::fmt;

/// Returns the address of the first byte of the value behind `r`.
///
/// For unsized values (slices, `str`) this is the address of the first element.
/// The pointer metadata is discarded.
///
/// # Examples
///
/// ```
/// use vc_ptr::address_of;
///
/// let x = [1u32, 2, 3];
/// assert_eq!(address_of(&x[1]), address_of(&x) + 4);
/// ```
#[inline(always)]
pub fn address_of<T: ?Sized>(r: &T) -> usize {
    (r as *const T).addr()
}

/// A half-open byte interval `[start, end)` in the address space.
///
/// Ranges are plain numbers; they never borrow or dereference the memory
/// they describe, so building one is always safe.
///
/// # Examples
///
/// ```
/// use vc_ptr::MemRange;
///
/// let buffer = [10u8, 20, 30, 40];
/// let whole = MemRange::of_val(&buffer);
/// let head = MemRange::of_val(&buffer[0..3]);
///
/// assert!(whole.overlaps(head));
/// assert!(whole.contains(MemRange::of_val(&buffer[3]).start()));
/// assert!(!head.contains(MemRange::of_val(&buffer[3]).start()));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct MemRange {
    start: usize,
    end: usize,
}

impl MemRange {
    /// The empty range at address zero.
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Create a range of `len` bytes beginning at `start`.
    ///
    /// The end is clamped to `usize::MAX` instead of wrapping.
    #[cfg_attr(debug_assertions, track_caller)]
    #[inline]
    pub const fn from_raw_parts(start: usize, len: usize) -> Self {
        let end = match start.checked_add(len) {
            Some(end) => end,
            None => {
                #[cfg(feature = "debug")]
                debug_assert!(false, "memory range overflows the address space");
                usize::MAX
            }
        };
        Self { start, end }
    }

    /// The storage occupied by the value behind `r`.
    ///
    /// For a sized value this is `size_of::<T>()` bytes at its address.
    /// For a slice or `str` it is the viewed elements.
    #[inline]
    pub fn of_val<T: ?Sized>(r: &T) -> Self {
        Self::from_raw_parts(address_of(r), size_of_val(r))
    }

    /// The storage described by a raw pointer and an element count.
    ///
    /// The pointer is never dereferenced, so dangling pointers are fine here.
    #[inline]
    pub fn of_raw<T>(ptr: *const T, len: usize) -> Self {
        Self::from_raw_parts(ptr.addr(), len.saturating_mul(size_of::<T>()))
    }

    /// The first byte address.
    #[inline(always)]
    pub const fn start(self) -> usize {
        self.start
    }

    /// One past the last byte address.
    #[inline(always)]
    pub const fn end(self) -> usize {
        self.end
    }

    /// Size in bytes.
    #[inline(always)]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.start >= self.end
    }

    /// Returns `true` if `addr` lies in `[start, end)`.
    #[inline]
    pub const fn contains(self, addr: usize) -> bool {
        self.start <= addr && addr < self.end
    }

    /// Returns `true` if every byte of `other` is also in `self`.
    ///
    /// An empty `other` is contained only if its start lies in `[start, end]`.
    #[inline]
    pub const fn contains_range(self, other: Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns `true` if the two ranges share at least one byte.
    ///
    /// Empty ranges overlap nothing, not even themselves.
    #[inline]
    pub const fn overlaps(self, other: Self) -> bool {
        let lo = if self.start > other.start { self.start } else { other.start };
        let hi = if self.end < other.end { self.end } else { other.end };
        lo < hi
    }

    /// The shared bytes of both ranges, or `None` if they do not overlap.
    #[inline]
    pub const fn intersection(self, other: Self) -> Option<Self> {
        if self.overlaps(other) {
            Some(Self {
                start: if self.start > other.start { self.start } else { other.start },
                end: if self.end < other.end { self.end } else { other.end },
            })
        } else {
            None
        }
    }
}

impl fmt::Display for MemRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:#x}, {:#x})", self.start, self.end)
    }
}

impl fmt::Debug for MemRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MemRange{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_rules() {
        let a = MemRange::from_raw_parts(0x100, 0x10);
        let b = MemRange::from_raw_parts(0x108, 0x10);
        let c = MemRange::from_raw_parts(0x110, 0x10);

        assert!(a.overlaps(b));
        assert!(b.overlaps(a));
        assert!(b.overlaps(c));
        // touching ranges share no byte
        assert!(!a.overlaps(c));
        assert!(!c.overlaps(a));

        assert_eq!(a.intersection(b), Some(MemRange::from_raw_parts(0x108, 0x8)));
        assert_eq!(a.intersection(c), None);
    }

    #[test]
    fn empty_ranges() {
        let empty = MemRange::from_raw_parts(0x100, 0);
        let around = MemRange::from_raw_parts(0xF0, 0x20);

        assert!(empty.is_empty());
        assert!(!empty.overlaps(empty));
        assert!(!empty.overlaps(around));
        assert!(!around.overlaps(empty));
        assert!(!empty.contains(0x100));
        assert!(around.contains_range(empty));
        assert!(MemRange::EMPTY.is_empty());
    }

    #[test]
    fn contains_is_half_open() {
        let r = MemRange::from_raw_parts(0x40, 4);
        assert!(!r.contains(0x3F));
        assert!(r.contains(0x40));
        assert!(r.contains(0x43));
        assert!(!r.contains(0x44));
        assert_eq!(r.len(), 4);
    }

    #[test]
    #[cfg_attr(
        all(feature = "debug", debug_assertions),
        should_panic(expected = "memory range overflows the address space")
    )]
    fn clamps_instead_of_wrapping() {
        let r = MemRange::from_raw_parts(usize::MAX - 1, 1);
        assert_eq!(r.end(), usize::MAX);
        assert_eq!(MemRange::of_raw(core::ptr::without_provenance::<u64>(0x10), usize::MAX).end(), usize::MAX);
    }

    #[test]
    fn ranges_of_values() {
        let buffer = [10u32, 20, 30, 40];
        let whole = MemRange::of_val(&buffer);
        assert_eq!(whole.len(), 16);
        assert_eq!(whole.start(), address_of(&buffer[0]));

        let tail = MemRange::of_val(&buffer[2..]);
        assert_eq!(tail.len(), 8);
        assert!(whole.contains_range(tail));
        assert_eq!(whole.intersection(tail), Some(tail));

        let text = "hello";
        assert_eq!(MemRange::of_val(text).len(), 5);
        assert_eq!(MemRange::of_raw(buffer.as_ptr(), 3).len(), 12);
    }

    #[test]
    fn display() {
        let r = MemRange::from_raw_parts(0x10, 0x10);
        assert_eq!(alloc::format!("{r}"), "[0x10, 0x20)");
        assert_eq!(alloc::format!("{r:?}"), "MemRange[0x10, 0x20)");
    }
}
