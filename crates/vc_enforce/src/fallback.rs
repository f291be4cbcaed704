use core::iter::FusedIterator;

// -----------------------------------------------------------------------------
// Single results

/// Runs `f` and returns its value, or the value of `fallback` if it fails.
///
/// The error is dropped and `fallback` is only called on failure.
///
/// # Examples
///
/// ```
/// use vc_enforce::if_thrown;
///
/// let width: u32 = if_thrown(|| "auto".parse(), || 80);
/// assert_eq!(width, 80);
/// ```
#[inline]
pub fn if_thrown<T, E>(f: impl FnOnce() -> Result<T, E>, fallback: impl FnOnce() -> T) -> T {
    match f() {
        Ok(value) => value,
        Err(_) => {
            log::debug!("if_thrown: substituting fallback value");
            fallback()
        }
    }
}

/// Runs `f` and returns its value, or the value `handler` builds from the error.
///
/// # Examples
///
/// ```
/// use vc_enforce::if_thrown_with;
///
/// let len = if_thrown_with(|| "12x".parse::<usize>(), |err| err.to_string().len());
/// assert_eq!(len, "invalid digit found in string".len());
/// ```
#[inline]
pub fn if_thrown_with<T, E>(f: impl FnOnce() -> Result<T, E>, handler: impl FnOnce(E) -> T) -> T {
    match f() {
        Ok(value) => value,
        Err(err) => {
            log::debug!("if_thrown_with: handling error");
            handler(err)
        }
    }
}

// -----------------------------------------------------------------------------
// Iterators

/// An iterator that replaces `Err` items with the output of a handler.
///
/// Created by [`HandleErrorsExt::handle_errors`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct HandleErrors<I, F> {
    iter: I,
    handler: F,
}

impl<I, F, T, E> Iterator for HandleErrors<I, F>
where
    I: Iterator<Item = Result<T, E>>,
    F: FnMut(E) -> T,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        match self.iter.next()? {
            Ok(value) => Some(value),
            Err(err) => {
                log::debug!("handle_errors: handling error item");
                Some((self.handler)(err))
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F, T, E> DoubleEndedIterator for HandleErrors<I, F>
where
    I: DoubleEndedIterator<Item = Result<T, E>>,
    F: FnMut(E) -> T,
{
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        match self.iter.next_back()? {
            Ok(value) => Some(value),
            Err(err) => Some((self.handler)(err)),
        }
    }
}

impl<I, F, T, E> ExactSizeIterator for HandleErrors<I, F>
where
    I: ExactSizeIterator<Item = Result<T, E>>,
    F: FnMut(E) -> T,
{
}

impl<I, F, T, E> FusedIterator for HandleErrors<I, F>
where
    I: FusedIterator<Item = Result<T, E>>,
    F: FnMut(E) -> T,
{
}

/// Adds [`handle_errors`](HandleErrorsExt::handle_errors) to iterators of
/// `Result`s.
pub trait HandleErrorsExt<T, E>: Iterator<Item = Result<T, E>> + Sized {
    /// Replaces every `Err(e)` item by `handler(e)`. `Ok` items pass through.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_enforce::HandleErrorsExt;
    ///
    /// let sizes: Vec<u32> = ["4", "x", "16"]
    ///     .into_iter()
    ///     .map(str::parse::<u32>)
    ///     .handle_errors(|_| 0)
    ///     .collect();
    /// assert_eq!(sizes, [4, 0, 16]);
    /// ```
    fn handle_errors<F: FnMut(E) -> T>(self, handler: F) -> HandleErrors<Self, F> {
        HandleErrors {
            iter: self,
            handler,
        }
    }
}

impl<I, T, E> HandleErrorsExt<T, E> for I where I: Iterator<Item = Result<T, E>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EnforceError, enforce};
    use alloc::{vec, vec::Vec};
    use core::cell::Cell;

    #[test]
    fn fallback_only_on_error() {
        let calls = Cell::new(0);
        let fallback = || {
            calls.set(calls.get() + 1);
            -1
        };

        assert_eq!(if_thrown(|| Ok::<_, EnforceError>(5), fallback), 5);
        assert_eq!(calls.get(), 0);
        assert_eq!(if_thrown(|| enforce(false, "x").map(|()| 5), fallback), -1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn handler_receives_error() {
        let code = if_thrown_with(|| Err::<u8, u8>(3), |err| err * 2);
        assert_eq!(code, 6);

        let msg = if_thrown_with(
            || enforce(false, "bad input").map(|()| ""),
            |err| if err.message() == "bad input" { "handled" } else { "other" },
        );
        assert_eq!(msg, "handled");
    }

    #[test]
    fn iterator_adapter() {
        let items: Vec<Result<i32, &str>> = vec![Ok(1), Err("two"), Ok(3), Err("four")];

        let lengths: Vec<i32> = items
            .iter()
            .cloned()
            .handle_errors(|err| -(err.len() as i32))
            .collect();
        assert_eq!(lengths, [1, -3, 3, -4]);

        let mut reversed = items.into_iter().handle_errors(|_| 0);
        assert_eq!(reversed.len(), 4);
        assert_eq!(reversed.next_back(), Some(0));
        assert_eq!(reversed.next(), Some(1));
        assert_eq!(reversed.size_hint(), (2, Some(2)));
    }
}
