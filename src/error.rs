// This file is part of hook-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outcome values for fallible [`HookVec`](crate::HookVec) operations.
//!
//! Success is `Ok(..)`; every other outcome is one of the closed set of
//! [`Error`] variants. They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`HookVec`](crate::HookVec).
///
/// The set is closed: the engine never reports anything outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The allocator could not provide (or resize) a buffer.
    OutOfMemory,
    /// A required input was empty, e.g. [`put_move`](crate::HookVec::put_move)
    /// given a slot holding `None`.
    NullArgument,
    /// An index or range was outside the live elements.
    OutOfBounds,
    /// A lookup found no matching element.
    NotFound,
    /// Part of the shared outcome set; no vector operation returns it.
    AlreadyExists,
    /// The call is not valid for the current state, e.g. promoting storage
    /// that is already owned.
    InvalidArgument,
    /// A caller-supplied hook reported failure.
    CallbackFailure,
    /// A capacity or byte-size computation overflowed.
    ArithmeticOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory => f.write_str("memory allocation failed"),
            Self::NullArgument => f.write_str("null argument"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
            Self::NotFound => f.write_str("not found"),
            Self::AlreadyExists => f.write_str("already exists"),
            Self::InvalidArgument => f.write_str("invalid argument"),
            Self::CallbackFailure => f.write_str("callback failed"),
            Self::ArithmeticOverflow => f.write_str("arithmetic overflow"),
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfBounds);
        assert!(s.contains("out of bounds"));
    }

    #[test]
    fn test_display_messages_are_distinct() {
        let all = [
            Error::OutOfMemory,
            Error::NullArgument,
            Error::OutOfBounds,
            Error::NotFound,
            Error::AlreadyExists,
            Error::InvalidArgument,
            Error::CallbackFailure,
            Error::ArithmeticOverflow,
        ];
        let msgs: alloc::vec::Vec<String> = all.iter().map(ToString::to_string).collect();
        for (i, a) in msgs.iter().enumerate() {
            for b in &msgs[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(Error::ArithmeticOverflow.to_string(), "arithmetic overflow");
        assert_eq!(Error::OutOfMemory.to_string(), "memory allocation failed");
    }
}
