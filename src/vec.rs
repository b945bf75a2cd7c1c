// This file is part of hook-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `HookVec` type and its inherent API.
//!
//! `HookVec<'a, T, H, A>` is a growable contiguous vector whose storage is either
//! owned (allocated through `A`) or borrowed from the caller for lifetime `'a`.
//! Element disposal and the optional deep-copy / equality capabilities come from
//! the hook value `H`.
//!
//! The inherent API is split by concern:
//!
//! - `storage`: constructors, raw views, promotion, cleanup;
//! - `capacity`: reserve / grow / shrink / resize;
//! - `insert`: copy and move insertion, single and bulk;
//! - `remove`: pop, erase, truncate, clear;
//! - `swap`, `splice`: in-place exchange and cross-vector moves;
//! - `lookup`: hook-gated search and deep copy.

mod capacity;
mod insert;
mod lookup;
mod remove;
mod splice;
mod storage;
mod swap;

// Crate imports
use crate::{
    allocator::{Global, RawAlloc},
    hooks::{Hooks, NoHooks},
};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem::MaybeUninit,
    ops::{Deref, DerefMut},
    ptr::NonNull,
};

/// Where a [`HookVec`] currently keeps its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageMode {
    /// A caller-supplied fixed buffer; never released by the vector.
    Borrowed,
    /// A buffer obtained from the vector's allocator.
    Owned,
}

pub(crate) enum Storage<'a, T> {
    Borrowed(&'a mut [MaybeUninit<T>]),
    /// `cap == 0` means nothing is allocated and `ptr` is dangling.
    /// For zero-sized `T`, `cap` is `usize::MAX` and nothing is ever allocated.
    Owned { ptr: NonNull<T>, cap: usize },
}

/// A growable vector with pluggable element hooks, a pluggable allocator, and
/// optional caller-supplied initial storage.
///
/// # Storage modes
///
/// A vector starts either:
///
/// - **Owned**: created by [`new`](HookVec::new) /
///   [`with_capacity`](HookVec::with_capacity), the buffer comes from `A`;
/// - **Borrowed**: created by [`from_borrowed`](HookVec::from_borrowed) over a
///   `&'a mut [MaybeUninit<T>]`. Capacity is the buffer length. The first time an
///   operation needs more room, the live elements are moved into a freshly
///   allocated owned buffer and the vector stays owned from then on. The borrowed
///   buffer is never released or written to again.
///
/// # Layout and invariants
///
/// - `0 <= len <= capacity` between calls.
/// - Slots `[0, len)` hold valid elements owned by the vector; slots
///   `[len, capacity)` hold nothing.
/// - Order is positional. Insertion and removal shift the tail; nothing is ever
///   reordered by swapping with the last element.
///
/// # Errors
///
/// Fallible operations return [`Error`](crate::Error). Bounds and argument
/// checks happen before anything is touched, and growth either fully succeeds
/// or leaves the vector exactly as it was (length, capacity, contents, storage
/// mode).
///
/// # Hooks
///
/// Elements the vector discards go through [`Hooks::cleanup`]. Elements whose
/// ownership leaves the vector ([`pop_at`](HookVec::pop_at),
/// [`merge_subvec`](HookVec::merge_subvec), the owning iterator) do not.
///
/// # Examples
///
/// ```rust
/// use hook_vec::HookVec;
///
/// let mut v: HookVec<u32> = HookVec::with_capacity(2).unwrap();
/// v.push_copy(&5).unwrap();
/// v.push_copy(&7).unwrap();
/// v.push_copy(&9).unwrap();
/// assert_eq!(v.as_slice(), &[5, 7, 9]);
/// assert_eq!(v.capacity(), 4);
/// ```
pub struct HookVec<'a, T, H: Hooks<T> = NoHooks, A: RawAlloc = Global> {
    pub(crate) storage: Storage<'a, T>,
    pub(crate) len: usize,
    pub(crate) hooks: H,
    pub(crate) alloc: A,
    pub(crate) _owns: PhantomData<T>,
}

// SAFETY: the vector uniquely owns its elements (or uniquely borrows the
// caller's buffer), so it is as thread-safe as its parts.
unsafe impl<T: Send, H: Hooks<T> + Send, A: RawAlloc + Send> Send for HookVec<'_, T, H, A> {}
// SAFETY: shared access only hands out `&T`, `&H` and `&A`.
unsafe impl<T: Sync, H: Hooks<T> + Sync, A: RawAlloc + Sync> Sync for HookVec<'_, T, H, A> {}

impl<T, H: Hooks<T>, A: RawAlloc> HookVec<'_, T, H, A> {
    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of usable slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        match &self.storage {
            Storage::Borrowed(buf) => buf.len(),
            Storage::Owned { cap, .. } => *cap,
        }
    }

    /// Returns `capacity - len`, the number of elements that fit without growing.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.capacity() - self.len
    }

    /// Returns whether the elements live in borrowed or owned storage.
    #[inline]
    pub fn storage_mode(&self) -> StorageMode {
        match self.storage {
            Storage::Borrowed(_) => StorageMode::Borrowed,
            Storage::Owned { .. } => StorageMode::Owned,
        }
    }

    /// Returns `true` while the vector still lives in caller-supplied storage.
    #[inline]
    pub fn is_borrowed(&self) -> bool {
        matches!(self.storage, Storage::Borrowed(_))
    }

    /// Returns the hook value this vector was configured with.
    #[inline]
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Returns the allocator this vector was configured with.
    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, or `None` if empty.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, or `None` if empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }
}

impl<T: fmt::Debug, H: Hooks<T>, A: RawAlloc> fmt::Debug for HookVec<'_, T, H, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("mode", &self.storage_mode())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<'a, 'b, T, H, A, H2, A2> PartialEq<HookVec<'b, T, H2, A2>> for HookVec<'a, T, H, A>
where
    T: PartialEq,
    H: Hooks<T>,
    A: RawAlloc,
    H2: Hooks<T>,
    A2: RawAlloc,
{
    fn eq(&self, other: &HookVec<'b, T, H2, A2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq, H: Hooks<T>, A: RawAlloc> Eq for HookVec<'_, T, H, A> {}

impl<T: Hash, H: Hooks<T>, A: RawAlloc> Hash for HookVec<'_, T, H, A> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.as_slice().hash(state)
    }
}

impl<T, H: Hooks<T>, A: RawAlloc> Deref for HookVec<'_, T, H, A> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, H: Hooks<T>, A: RawAlloc> DerefMut for HookVec<'_, T, H, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, H: Hooks<T>, A: RawAlloc> AsRef<[T]> for HookVec<'_, T, H, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, H: Hooks<T>, A: RawAlloc> AsMut<[T]> for HookVec<'_, T, H, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, H: Hooks<T>, A: RawAlloc> Borrow<[T]> for HookVec<'_, T, H, A> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, H: Hooks<T>, A: RawAlloc> BorrowMut<[T]> for HookVec<'_, T, H, A> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
