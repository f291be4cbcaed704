//! Combinators for code that treats failure as a value.
//!
//! Recoverable failures are `Result::Err`. Broken assumptions are panics.
//! A deferred expression is a closure that is called at most once.
//!
//! - [`enforce`] and the [`Enforce`] trait turn a condition into a `Result`.
//! - [`assert_not_thrown`], [`assert_thrown`] and [`assume_ok`] panic when
//!   a result is not what the caller expects.
//! - [`collect_exception`] and friends return the error instead of the value.
//! - [`if_thrown`] and [`HandleErrorsExt::handle_errors`] substitute values for errors.
//! - [`assume_unique`] re-exposes an exclusively owned buffer as shared
//!   immutable storage.
//!
//! ```
//! use vc_enforce::{Enforce, EnforceError, collect_exception, if_thrown};
//!
//! fn parse_port(text: &str) -> Result<u16, EnforceError> {
//!     let port: u16 = text.parse::<u16>().ok().enforce("not a number")?;
//!     (port != 0).enforce("port zero is reserved")?;
//!     Ok(port)
//! }
//!
//! assert_eq!(if_thrown(|| parse_port("8080"), || 80), 8080);
//! assert_eq!(if_thrown(|| parse_port("http"), || 80), 80);
//!
//! let err = collect_exception(|| parse_port("0")).unwrap();
//! assert_eq!(err.message(), "port zero is reserved");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod assert;
mod collect;
mod enforce;
mod error;
mod fallback;
mod unique;

// -----------------------------------------------------------------------------
// Exports

pub use assert::{assert_not_thrown, assert_thrown, assert_thrown_matches, assume_ok};
pub use collect::{collect_exception, collect_exception_into, collect_exception_msg};
pub use enforce::{Enforce, enforce};
pub use error::EnforceError;
pub use fallback::{HandleErrors, HandleErrorsExt, if_thrown, if_thrown_with};
pub use unique::{assume_unique, assume_unique_str};

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use collect::{PanicPayload, collect_panic, collect_panic_msg};

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use enforce::enforce_errno;
