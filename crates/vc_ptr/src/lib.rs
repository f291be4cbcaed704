//! Address and byte-range primitives used by the aliasing detector.
//!
//! Everything here works on plain addresses. Nothing in this crate reads
//! through a pointer, so inspecting a value never runs its copy, clone or
//! drop logic.
//!
//! **MemRange**
//!
//! [`MemRange`] is a half-open byte interval `[start, end)`. Ranges can be
//! taken from any borrowed value with [`MemRange::of_val`], or from a raw
//! pointer and an element count with [`MemRange::of_raw`].
//!
//! **address_of**
//!
//! [`address_of`] returns the address of the first byte behind a reference,
//! discarding any slice length or vtable metadata.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

#[cfg(test)]
extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod range;

// -----------------------------------------------------------------------------
// Top-level exports

pub use range::{MemRange, address_of};
