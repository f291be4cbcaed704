use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::mem;

/// Takes an exclusively owned buffer and re-exposes it as immutable shared
/// storage.
///
/// The caller's vector is left empty, so no mutable handle to the elements
/// survives the call. The result can be cloned and sent to other threads.
///
/// # Examples
///
/// ```
/// use vc_enforce::assume_unique;
///
/// let mut scratch = vec![1, 2, 3];
/// let frozen = assume_unique(&mut scratch);
///
/// assert!(scratch.is_empty());
/// assert_eq!(&*frozen, &[1, 2, 3]);
/// ```
pub fn assume_unique<T>(buffer: &mut Vec<T>) -> Arc<[T]> {
    Arc::from(mem::take(buffer))
}

/// [`assume_unique`] for strings.
pub fn assume_unique_str(buffer: &mut String) -> Arc<str> {
    Arc::from(mem::take(buffer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn takes_the_buffer() {
        let mut data = vec![String::from("a"), String::from("b")];
        let shared = assume_unique(&mut data);
        let other = Arc::clone(&shared);

        assert!(data.is_empty());
        assert_eq!(other.len(), 2);
        assert_eq!(shared[1], "b");
    }

    #[test]
    fn strings() {
        let mut text = String::from("frozen");
        let shared = assume_unique_str(&mut text);

        assert!(text.is_empty());
        assert_eq!(&*shared, "frozen");

        // the emptied handle stays usable
        text.push('x');
        assert_eq!(text, "x");
    }

    #[test]
    fn empty_buffers() {
        let mut nothing: Vec<u8> = Vec::new();
        assert!(assume_unique(&mut nothing).is_empty());
    }
}
