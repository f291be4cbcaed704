use alloc::borrow::Cow;

use crate::EnforceError;

/// Returns `Ok(())` if `cond` holds, [`EnforceError::Failed`] otherwise.
///
/// # Examples
///
/// ```
/// use vc_enforce::enforce;
///
/// fn checked_div(a: u32, b: u32) -> Result<u32, vc_enforce::EnforceError> {
///     enforce(b != 0, "division by zero")?;
///     Ok(a / b)
/// }
///
/// assert_eq!(checked_div(9, 3).unwrap(), 3);
/// assert_eq!(checked_div(1, 0).unwrap_err().message(), "division by zero");
/// ```
#[track_caller]
#[inline]
pub fn enforce(cond: bool, message: impl Into<Cow<'static, str>>) -> Result<(), EnforceError> {
    if cond {
        Ok(())
    } else {
        Err(EnforceError::failed(message))
    }
}

/// Returns `Ok(())` if `cond` holds, otherwise captures the last OS error
/// into [`EnforceError::Errno`].
///
/// Call it right after the failing system call, before anything else can
/// overwrite the thread's error code.
#[cfg(feature = "std")]
#[track_caller]
pub fn enforce_errno(
    cond: bool,
    message: impl Into<Cow<'static, str>>,
) -> Result<(), EnforceError> {
    if cond {
        return Ok(());
    }

    let source = std::io::Error::last_os_error();
    let message = message.into();
    let location = core::panic::Location::caller();
    log::warn!("{location}: {message} ({source})");

    Err(EnforceError::Errno {
        message,
        location,
        source,
    })
}

// -----------------------------------------------------------------------------
// Enforce

/// Values that carry their own success condition.
///
/// `bool` succeeds when `true` and `Option<T>` when `Some`.
///
/// # Examples
///
/// ```
/// use vc_enforce::Enforce;
///
/// let found = [3, 5, 8].iter().position(|&x| x == 5).enforce("missing").unwrap();
/// assert_eq!(found, 1);
///
/// #[derive(Debug, PartialEq)]
/// struct Empty;
///
/// let none: [u8; 0] = [];
/// let first = none.first().enforce_with(|| Empty);
/// assert_eq!(first, Err(Empty));
/// ```
pub trait Enforce: Sized {
    /// The value kept on success.
    type Output;

    /// Returns the carried value, or [`EnforceError::Failed`] with `message`.
    fn enforce(self, message: impl Into<Cow<'static, str>>) -> Result<Self::Output, EnforceError>;

    /// Returns the carried value, or the error built by `err`.
    ///
    /// `err` is only called on failure.
    fn enforce_with<E>(self, err: impl FnOnce() -> E) -> Result<Self::Output, E>;
}

impl Enforce for bool {
    type Output = ();

    #[track_caller]
    #[inline]
    fn enforce(self, message: impl Into<Cow<'static, str>>) -> Result<(), EnforceError> {
        enforce(self, message)
    }

    #[inline]
    fn enforce_with<E>(self, err: impl FnOnce() -> E) -> Result<(), E> {
        if self { Ok(()) } else { Err(err()) }
    }
}

impl<T> Enforce for Option<T> {
    type Output = T;

    #[track_caller]
    #[inline]
    fn enforce(self, message: impl Into<Cow<'static, str>>) -> Result<T, EnforceError> {
        match self {
            Some(value) => Ok(value),
            None => Err(EnforceError::failed(message)),
        }
    }

    #[inline]
    fn enforce_with<E>(self, err: impl FnOnce() -> E) -> Result<T, E> {
        self.ok_or_else(err)
    }
}
