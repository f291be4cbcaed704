use alloc::string::{String, ToString};
use core::fmt;

// -----------------------------------------------------------------------------
// Errors

/// Runs `f` and returns its error, discarding any success value.
///
/// # Examples
///
/// ```
/// use vc_enforce::collect_exception;
///
/// assert!(collect_exception(|| "12".parse::<u8>()).is_none());
/// assert!(collect_exception(|| "1200".parse::<u8>()).is_some());
/// ```
#[inline]
pub fn collect_exception<T, E>(f: impl FnOnce() -> Result<T, E>) -> Option<E> {
    f().err()
}

/// Runs `f`, storing its success value in `out` or returning its error.
///
/// `out` is left untouched on error.
///
/// # Examples
///
/// ```
/// use vc_enforce::collect_exception_into;
///
/// let mut port = 0u16;
/// assert!(collect_exception_into(|| "8080".parse(), &mut port).is_none());
/// assert_eq!(port, 8080);
///
/// assert!(collect_exception_into(|| "none".parse(), &mut port).is_some());
/// assert_eq!(port, 8080);
/// ```
#[inline]
pub fn collect_exception_into<T, E>(f: impl FnOnce() -> Result<T, E>, out: &mut T) -> Option<E> {
    match f() {
        Ok(value) => {
            *out = value;
            None
        }
        Err(err) => Some(err),
    }
}

/// Runs `f` and returns its error's message.
///
/// An error whose message is empty yields `"<empty error message>"`, so
/// `Some` always distinguishes a failure from a success.
pub fn collect_exception_msg<T, E: fmt::Display>(f: impl FnOnce() -> Result<T, E>) -> Option<String> {
    let err = f().err()?;
    let message = err.to_string();
    if message.is_empty() {
        Some(String::from(EMPTY_MESSAGE))
    } else {
        Some(message)
    }
}

const EMPTY_MESSAGE: &str = "<empty error message>";

// -----------------------------------------------------------------------------
// Panics

/// The payload of a caught panic.
#[cfg(feature = "std")]
pub type PanicPayload = alloc::boxed::Box<dyn core::any::Any + Send + 'static>;

/// Runs `f` and returns the payload of the panic it raised, if any.
///
/// The panic hook still runs, so the panic message is printed as usual.
/// With `panic = "abort"` the process aborts before this returns.
#[cfg(feature = "std")]
pub fn collect_panic<T>(f: impl FnOnce() -> T) -> Option<PanicPayload> {
    std::panic::catch_unwind(core::panic::AssertUnwindSafe(f)).err()
}

/// Runs `f` and returns the message of the panic it raised, if any.
///
/// # Examples
///
/// ```
/// use vc_enforce::{assume_ok, collect_panic_msg};
///
/// let msg = collect_panic_msg(|| assume_ok("x".parse::<u8>())).unwrap();
/// assert!(msg.starts_with("operation assumed infallible failed"));
/// ```
#[cfg(feature = "std")]
pub fn collect_panic_msg<T>(f: impl FnOnce() -> T) -> Option<String> {
    collect_panic(f).map(|payload| panic_message(&*payload))
}

#[cfg(feature = "std")]
fn panic_message(payload: &(dyn core::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        String::from(*message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("<non-string panic payload>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EnforceError, enforce};

    struct Silent;

    impl fmt::Display for Silent {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Ok(())
        }
    }

    #[test]
    fn exceptions() {
        let err = collect_exception(|| enforce(false, "refused")).unwrap();
        assert!(matches!(err, EnforceError::Failed { .. }));
        assert!(collect_exception(|| enforce(true, "unused")).is_none());
    }

    #[test]
    fn exceptions_into() {
        let mut out = alloc::vec![1];
        let err = collect_exception_into(|| Err::<_, &str>("nothing"), &mut out);
        assert_eq!(err, Some("nothing"));
        assert_eq!(out, [1]);

        let err = collect_exception_into(|| Ok::<_, &str>(alloc::vec![2, 3]), &mut out);
        assert_eq!(err, None);
        assert_eq!(out, [2, 3]);
    }

    #[test]
    fn messages() {
        assert_eq!(
            collect_exception_msg(|| "-1".parse::<u32>()).as_deref(),
            Some("invalid digit found in string"),
        );
        assert_eq!(collect_exception_msg(|| "1".parse::<u32>()), None);
        assert_eq!(
            collect_exception_msg(|| Err::<(), _>(Silent)).as_deref(),
            Some(EMPTY_MESSAGE),
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn panics() {
        assert!(collect_panic(|| 1 + 1).is_none());

        let msg = collect_panic_msg(|| panic!("static message"));
        assert_eq!(msg.as_deref(), Some("static message"));

        let code = 7;
        let msg = collect_panic_msg(|| panic!("formatted {code}"));
        assert_eq!(msg.as_deref(), Some("formatted 7"));

        let msg = collect_panic_msg(|| std::panic::panic_any(42u8));
        assert_eq!(msg.as_deref(), Some("<non-string panic payload>"));
    }

    #[cfg(feature = "std")]
    #[test]
    fn assertion_panics_are_collected() {
        let msg = collect_panic_msg(|| crate::assert_thrown(|| Ok::<_, EnforceError>(()), "ctx"));
        assert_eq!(msg.as_deref(), Some("ctx: expected an error, got a value"));
    }
}
