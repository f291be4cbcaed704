use core::fmt;

// -----------------------------------------------------------------------------
// Failure

#[cold]
#[inline(never)]
#[track_caller]
fn assertion_failed(args: fmt::Arguments<'_>) -> ! {
    log::error!("{}: {args}", core::panic::Location::caller());
    panic!("{args}");
}

// -----------------------------------------------------------------------------
// Assertions

/// Runs `f` and returns its value, panicking if it returns an error.
///
/// The panic message is `message` followed by the error's `Display` output.
///
/// # Examples
///
/// ```
/// use vc_enforce::assert_not_thrown;
///
/// let n: i32 = assert_not_thrown(|| "42".parse(), "literal must parse");
/// assert_eq!(n, 42);
/// ```
///
/// ```should_panic
/// use vc_enforce::assert_not_thrown;
///
/// let _: i32 = assert_not_thrown(|| "forty".parse(), "literal must parse");
/// ```
#[track_caller]
pub fn assert_not_thrown<T, E: fmt::Display>(
    f: impl FnOnce() -> Result<T, E>,
    message: &str,
) -> T {
    match f() {
        Ok(value) => value,
        Err(err) => assertion_failed(format_args!("{message}: unexpected error: {err}")),
    }
}

/// Runs `f` and returns its error, panicking if it succeeds.
///
/// # Examples
///
/// ```
/// use vc_enforce::{assert_thrown, enforce};
///
/// let err = assert_thrown(|| enforce(false, "rejected"), "must reject");
/// assert_eq!(err.message(), "rejected");
/// ```
#[track_caller]
pub fn assert_thrown<T, E>(f: impl FnOnce() -> Result<T, E>, message: &str) -> E {
    match f() {
        Ok(_) => assertion_failed(format_args!("{message}: expected an error, got a value")),
        Err(err) => err,
    }
}

/// Like [`assert_thrown`], but also panics if the error does not satisfy
/// `predicate`.
#[track_caller]
pub fn assert_thrown_matches<T, E: fmt::Debug>(
    f: impl FnOnce() -> Result<T, E>,
    predicate: impl FnOnce(&E) -> bool,
    message: &str,
) -> E {
    let err = assert_thrown(f, message);
    if !predicate(&err) {
        assertion_failed(format_args!("{message}: unexpected error kind: {err:?}"));
    }
    err
}

/// Unwraps a result the caller knows cannot be an error.
///
/// Use it where an operation is fallible in general but not for the
/// arguments at hand. An error means the assumption was wrong and panics.
///
/// # Examples
///
/// ```
/// use vc_enforce::assume_ok;
///
/// let digits = "0123456789";
/// let n: u64 = assume_ok(digits.parse());
/// assert_eq!(n, 123456789);
/// ```
#[track_caller]
#[inline]
pub fn assume_ok<T, E: fmt::Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => assertion_failed(format_args!("operation assumed infallible failed: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EnforceError, enforce};
    use alloc::string::ToString;

    #[test]
    fn not_thrown_returns_value() {
        let value = assert_not_thrown(|| Ok::<_, EnforceError>(7), "unused");
        assert_eq!(value, 7);
    }

    #[test]
    #[should_panic(expected = "loading: unexpected error: Enforcement failed at")]
    fn not_thrown_panics_on_error() {
        assert_not_thrown(|| enforce(false, "no data"), "loading");
    }

    #[test]
    fn thrown_returns_error() {
        let err = assert_thrown(|| "x".parse::<u8>(), "must fail");
        assert_eq!(err.to_string(), "invalid digit found in string");
    }

    #[test]
    #[should_panic(expected = "must fail: expected an error, got a value")]
    fn thrown_panics_on_value() {
        assert_thrown(|| "8".parse::<u8>(), "must fail");
    }

    #[test]
    fn thrown_matches() {
        let err = assert_thrown_matches(
            || enforce(false, "closed"),
            |err| matches!(err, EnforceError::Failed { .. }),
            "must be closed",
        );
        assert_eq!(err.message(), "closed");
    }

    #[test]
    #[should_panic(expected = "wrong kind: unexpected error kind")]
    fn thrown_matches_rejects_other_errors() {
        assert_thrown_matches(|| "x".parse::<u8>(), |_| false, "wrong kind");
    }

    #[test]
    fn assume_ok_unwraps() {
        assert_eq!(assume_ok::<_, EnforceError>(Ok(3)), 3);
    }

    #[test]
    #[should_panic(expected = "operation assumed infallible failed")]
    fn assume_ok_panics() {
        assume_ok("256".parse::<u8>());
    }
}
