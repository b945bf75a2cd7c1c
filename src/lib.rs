// This file is part of hook-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `hook-vec`
//!
//! A `no_std` + `alloc` growable vector with per-instantiation element hooks,
//! a pluggable allocator, and optional caller-supplied initial storage.
//!
//! The core type, [`HookVec<'a, T, H, A>`](HookVec), keeps its elements
//! contiguously and tracks a logical length `len ∈ 0..=capacity`. What sets
//! it apart from `Vec<T>`:
//!
//! - **Hooks.** A hook value `H: Hooks<T>` decides how discarded elements are
//!   disposed of, the growth factor, and the default capacity. Deep copy
//!   ([`DeepCopy`]) and equality ([`ElementEq`]) are optional capabilities; the
//!   operations that need them only exist when `H` provides them.
//! - **Borrowed start.** [`HookVec::from_borrowed`] adopts a caller buffer
//!   (a stack array, an arena slice) as initial storage. When it fills up the
//!   elements move to owned storage transparently, and the caller's buffer is
//!   never released.
//! - **Fallible everything.** Growth never aborts or panics. Every fallible
//!   operation returns [`Error`], and a failed operation leaves the vector
//!   exactly as it was.
//! - **Pluggable allocation.** Owned storage comes from `A: RawAlloc`
//!   ([`Global`] by default).
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - allocation failure must be reported, not turned into an abort;
//! - element disposal needs a custom policy (pooling, accounting, recording);
//! - a small first batch should live on the stack without committing to a
//!   fixed maximum length.
//!
//! For everything else `alloc::vec::Vec` is the better choice.
//!
//! ## Ownership rules
//!
//! - Elements removed by `erase`, `erase_range`, `truncate`, `clear`,
//!   `discard_at`, `cleanup` or drop go through [`Hooks::cleanup`].
//! - Elements handed back (`pop_at`, `pop`, the owning iterator) or moved into
//!   another vector (`merge_subvec`) do not.
//! - `*_copy` operations clone; `*_move` operations take ownership and leave
//!   the source empty.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for `HookVec` as a plain sequence.
//! - `log`: `trace`/`debug` events on capacity changes and promotion through the
//!   `log` facade.
//!
//! ## Range and indexing behavior
//!
//! Indexing (`v[i]`, `v[start..end]`, …) panics on out-of-bounds or inverted
//! ranges, exactly like built-in slices. Every named operation is fallible
//! instead and reports [`Error::OutOfBounds`].
//!
//! ## Example
//!
//! ```rust
//! use core::mem::MaybeUninit;
//! use hook_vec::{HookVec, StdHooks};
//!
//! let mut buf = [MaybeUninit::uninit(); 2];
//! let mut v: HookVec<u8, StdHooks> = HookVec::from_borrowed(&mut buf);
//! v.push_copy(&1).unwrap();
//! v.array_copy(1, &[2, 3]).unwrap();
//! assert!(!v.is_borrowed());
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//! assert_eq!(v.find(&3), Ok(2));
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[macro_use]
mod trace;

// Modules
mod allocator;
mod error;
mod hooks;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
#[cfg(test)]
mod test_support;
mod vec;

// Public exports (crate API surface)
pub use allocator::{Global, RawAlloc};
pub use error::Error;
pub use hooks::{DeepCopy, ElementEq, Hooks, NoHooks, StdHooks};
pub use iter::IntoIter;
pub use vec::{HookVec, StorageMode};
