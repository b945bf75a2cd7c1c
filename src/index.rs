// This file is part of hook-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`HookVec`](crate::HookVec).
//!
//! `Index` / `IndexMut` mirror slice behavior over the live prefix `[0, len)`:
//! positions and every standard range form are accepted, and out-of-bounds or
//! inverted ranges panic. The fallible, non-panicking path is
//! [`HookVec::get`](crate::HookVec::get).

// Crate imports
use crate::{allocator::RawAlloc, hooks::Hooks, vec::HookVec};

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>, H: Hooks<T>, A: RawAlloc> Index<I> for HookVec<'_, T, H, A> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>, H: Hooks<T>, A: RawAlloc> IndexMut<I> for HookVec<'_, T, H, A> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
