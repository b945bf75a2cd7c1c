// This file is part of hook-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`HookVec`](crate::HookVec).
//!
//! - `IntoIter` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. Elements it skips (`nth`) or
//!   never reaches (drop) go through the cleanup hook; yielded ones do not.
//! - `&HookVec` and `&mut HookVec` iterate as slices.
//! - `Extend` / `FromIterator` push one element at a time and panic on
//!   allocation failure, like `Vec`.

// Crate imports
use crate::{
    allocator::{Global, RawAlloc},
    hooks::{Hooks, NoHooks},
    vec::HookVec,
};

// Core imports
use core::{iter::FusedIterator, ptr};

/// Owned iterator returned by `HookVec::into_iter()`.
///
/// The vector's length is zeroed up front and `[front, back)` tracks the
/// elements still owned by the iterator.
pub struct IntoIter<'a, T, H: Hooks<T> = NoHooks, A: RawAlloc = Global> {
    pub(crate) v: HookVec<'a, T, H, A>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T, H: Hooks<T>, A: RawAlloc> IntoIter<'_, T, H, A> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        let rem = self.back - self.front;
        // SAFETY: `[front, back)` is initialized and owned by the iterator.
        unsafe { core::slice::from_raw_parts(self.v.as_ptr().add(self.front), rem) }
    }

    /// Takes the element at `i` out of the buffer.
    ///
    /// # Safety
    ///
    /// `i` must be in `[front, back)` and the caller must move the bound past it.
    #[inline]
    unsafe fn take(&mut self, i: usize) -> T {
        unsafe { ptr::read(self.v.as_ptr().add(i)) }
    }

    /// Runs the cleanup hook on `[from, to)`, which the caller has already
    /// excluded from `[front, back)`.
    fn discard_span(&mut self, from: usize, to: usize) {
        for i in from..to {
            // SAFETY: each slot in the span is initialized and read once.
            let element = unsafe { self.take(i) };
            self.v.hooks.cleanup(element);
        }
    }
}

impl<T, H: Hooks<T>, A: RawAlloc> Iterator for IntoIter<'_, T, H, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was in `[front, back)` before the bump.
            Some(unsafe { self.take(i) })
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let skip_to = self.front + n.min(rem);
        let from = self.front;
        self.front = skip_to;
        self.discard_span(from, skip_to);
        self.next()
    }
}

impl<T, H: Hooks<T>, A: RawAlloc> DoubleEndedIterator for IntoIter<'_, T, H, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: the old `back - 1` was the last owned slot.
            Some(unsafe { self.take(self.back) })
        } else {
            None
        }
    }

    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let skip_to = self.back - n.min(rem);
        let to = self.back;
        self.back = skip_to;
        self.discard_span(skip_to, to);
        self.next_back()
    }
}

impl<T, H: Hooks<T>, A: RawAlloc> FusedIterator for IntoIter<'_, T, H, A> {}
impl<T, H: Hooks<T>, A: RawAlloc> ExactSizeIterator for IntoIter<'_, T, H, A> {}

impl<T, H: Hooks<T>, A: RawAlloc> Drop for IntoIter<'_, T, H, A> {
    fn drop(&mut self) {
        let (from, to) = (self.front, self.back);
        self.front = to;
        self.discard_span(from, to);
        // `v.len == 0`, so dropping `v` only releases the buffer.
    }
}

impl<'a, T, H: Hooks<T>, A: RawAlloc> IntoIterator for HookVec<'a, T, H, A> {
    type Item = T;
    type IntoIter = IntoIter<'a, T, H, A>;

    fn into_iter(mut self) -> Self::IntoIter {
        let back = self.len;
        self.len = 0;
        IntoIter {
            v: self,
            front: 0,
            back,
        }
    }
}

impl<'v, T, H: Hooks<T>, A: RawAlloc> IntoIterator for &'v HookVec<'_, T, H, A> {
    type Item = &'v T;
    type IntoIter = core::slice::Iter<'v, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'v, T, H: Hooks<T>, A: RawAlloc> IntoIterator for &'v mut HookVec<'_, T, H, A> {
    type Item = &'v mut T;
    type IntoIter = core::slice::IterMut<'v, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T, H: Hooks<T>, A: RawAlloc> Extend<T> for HookVec<'_, T, H, A> {
    /// # Panics
    ///
    /// Panics if growing the buffer fails.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if let Some(min) = self.len.checked_add(lower) {
            // Only a hint; a failure here resurfaces on the push that needs the room.
            let _ = self.grow(min);
        }
        for value in iter {
            if let Err(err) = self.push(value) {
                panic!("HookVec::extend: {err}");
            }
        }
    }
}

impl<'e, T: Clone + 'e, H: Hooks<T>, A: RawAlloc> Extend<&'e T> for HookVec<'_, T, H, A> {
    fn extend<I: IntoIterator<Item = &'e T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T, H: Hooks<T> + Default, A: RawAlloc + Default> FromIterator<T> for HookVec<'_, T, H, A> {
    /// Starts from an unallocated vector, so an empty iterator allocates nothing.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::default();
        v.extend(iter);
        v
    }
}
