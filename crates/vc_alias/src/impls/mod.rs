//! [`PointsTo`](crate::PointsTo) implementations for `core` and `alloc` types.
//!
//! - `scalar`: numbers, `bool`, `char`, atomics, markers.
//! - `pointer`: references, raw pointers, smart pointers.
//! - `buffer`: slices, `str`, `Vec`, `String`, `VecDeque`.
//! - `aggregate`: arrays, tuples, `Option`, `Result`, transparent wrappers.

mod aggregate;
mod buffer;
mod pointer;
mod scalar;
