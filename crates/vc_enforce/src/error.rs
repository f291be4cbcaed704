use alloc::borrow::Cow;
use core::panic::Location;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// A failed enforcement.
///
/// Both variants record the message given by the caller and the source
/// location of the enforcing call.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnforceError {
    #[error("Enforcement failed at {location}: {message}")]
    Failed {
        message: Cow<'static, str>,
        location: &'static Location<'static>,
    },

    /// The failing call reported its cause through the OS error code.
    #[cfg(feature = "std")]
    #[error("Enforcement failed at {location}: {message} ({source})")]
    Errno {
        message: Cow<'static, str>,
        location: &'static Location<'static>,
        source: std::io::Error,
    },
}

impl EnforceError {
    /// Creates [`EnforceError::Failed`] located at the caller.
    #[track_caller]
    #[inline]
    pub fn failed(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Failed {
            message: message.into(),
            location: Location::caller(),
        }
    }

    /// The message passed to the enforcing call.
    pub fn message(&self) -> &str {
        match self {
            Self::Failed { message, .. } => message.as_ref(),
            #[cfg(feature = "std")]
            Self::Errno { message, .. } => message.as_ref(),
        }
    }

    /// Where the enforcing call was made.
    pub fn location(&self) -> &'static Location<'static> {
        match self {
            Self::Failed { location, .. } => *location,
            #[cfg(feature = "std")]
            Self::Errno { location, .. } => *location,
        }
    }

    /// The raw OS error code, for [`EnforceError::Errno`].
    #[cfg(feature = "std")]
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Self::Errno { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }

    #[cold]
    #[inline(never)]
    pub fn handle_error(&self) -> ! {
        panic!("{self}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    #[test]
    fn failed_records_caller() {
        let line = line!() + 1;
        let err = EnforceError::failed("buffer is empty");

        assert_eq!(err.message(), "buffer is empty");
        assert_eq!(err.location().line(), line);
        assert_eq!(err.location().file(), file!());

        let text = err.to_string();
        assert!(text.starts_with("Enforcement failed at "));
        assert!(text.ends_with(": buffer is empty"));
    }

    #[test]
    fn owned_messages() {
        let name = "config";
        let err = EnforceError::failed(String::from(name) + " is missing");
        assert_eq!(err.message(), "config is missing");
    }

    #[test]
    #[should_panic(expected = "bad state")]
    fn handle_error_panics() {
        EnforceError::failed("bad state").handle_error();
    }
}
